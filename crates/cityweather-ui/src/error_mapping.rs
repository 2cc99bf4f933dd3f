//! Maps UI service errors to `cityweather_core::AppError` for consistent
//! user-facing messages.

use cityweather_core::{AppError, CityError, WeatherError};

use crate::services::{CityServiceError, WeatherServiceError};

impl From<CityServiceError> for AppError {
    fn from(e: CityServiceError) -> Self {
        match e {
            CityServiceError::Fetch { page, message } => {
                AppError::Cities(CityError::PageFetchFailed { page, message })
            }
            CityServiceError::NotInitialized => AppError::Cities(CityError::ServiceUnavailable),
        }
    }
}

impl From<WeatherServiceError> for AppError {
    fn from(e: WeatherServiceError) -> Self {
        match e {
            WeatherServiceError::Network(s) => AppError::Weather(WeatherError::ApiError(s)),
            WeatherServiceError::NotFound(city) => {
                AppError::Weather(WeatherError::CityNotFound(city))
            }
            WeatherServiceError::Unauthorized => AppError::Weather(WeatherError::InvalidApiKey),
            WeatherServiceError::NotInitialized => {
                AppError::Weather(WeatherError::ServiceUnavailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_errors_share_one_message() {
        for err in [
            WeatherServiceError::Network("x".into()),
            WeatherServiceError::NotFound("x".into()),
            WeatherServiceError::Unauthorized,
            WeatherServiceError::NotInitialized,
        ] {
            assert_eq!(
                AppError::from(err).user_message(),
                "Error fetching weather data. Please try again."
            );
        }
    }

    #[test]
    fn city_errors_keep_page() {
        let err = AppError::from(CityServiceError::Fetch {
            page: 4,
            message: "reset".into(),
        });
        assert!(matches!(
            err,
            AppError::Cities(CityError::PageFetchFailed { page: 4, .. })
        ));
    }
}
