//! City page backend: async page loads on the tokio runtime.
//! Results are posted back to the event loop over an mpsc channel.

use std::sync::Arc;

use cityweather_cities::{City, CityClient, PageCursor};
use tokio::sync::mpsc::UnboundedSender;

/// Error type for city page loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityServiceError {
    Fetch { page: u32, message: String },
    NotInitialized,
}

impl std::fmt::Display for CityServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CityServiceError::Fetch { page, message } => {
                write!(f, "City page {} error: {}", page, message)
            }
            CityServiceError::NotInitialized => write!(f, "City service not initialized"),
        }
    }
}

impl std::error::Error for CityServiceError {}

/// Messages sent from async operations back to the event loop
#[derive(Debug)]
pub enum CityServiceMessage {
    /// Result of loading one page. Pages may arrive in any order.
    PageDone {
        cursor: PageCursor,
        result: Result<Vec<City>, CityServiceError>,
    },
}

/// Request one page of cities.
/// Sends `PageDone` on the channel when complete.
pub fn request_page(
    tx: &UnboundedSender<CityServiceMessage>,
    client: Arc<CityClient>,
    cursor: PageCursor,
) {
    let tx = tx.clone();
    let runtime = match tokio::runtime::Handle::try_current() {
        Ok(r) => r,
        Err(_) => {
            let _ = tx.send(CityServiceMessage::PageDone {
                cursor,
                result: Err(CityServiceError::NotInitialized),
            });
            return;
        }
    };

    tracing::debug!(page = cursor.page(), "Requesting city page");
    runtime.spawn(async move {
        let result = client
            .load_page(cursor)
            .await
            .map_err(|e| CityServiceError::Fetch {
                page: cursor.page(),
                message: e.to_string(),
            });
        let _ = tx.send(CityServiceMessage::PageDone { cursor, result });
    });
}
