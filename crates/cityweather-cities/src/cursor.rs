/// Page counter for incremental fetches.
///
/// Starts at 1 and only ever moves forward by one. The remote offset is
/// `page * page_size`, so the very first request already skips one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageCursor(u32);

impl PageCursor {
    pub const FIRST: PageCursor = PageCursor(1);

    pub fn page(&self) -> u32 {
        self.0
    }

    /// Cursor for the next page.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Record offset into the remote source.
    pub fn offset(&self, page_size: u32) -> u64 {
        u64::from(self.0) * u64::from(page_size)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
