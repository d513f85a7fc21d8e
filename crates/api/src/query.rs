//! Query parameter types for API handlers.

use dsmovie_core::pagination::PageRequest;
use serde::Deserialize;

/// Query parameters for `GET /movies` (`?title=&page=&size=`).
///
/// A missing `title` matches every movie. Paging values are clamped by
/// [`PageRequest::new`].
#[derive(Debug, Default, Deserialize)]
pub struct MovieSearchParams {
    pub title: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl MovieSearchParams {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}
