//! Data models and request/response shapes

pub mod booking;
pub mod comment;
pub mod item;
pub mod request;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::{AppError, AppResult};

fn default_page_size() -> i64 {
    10
}

/// Offset/size pagination parameters shared by the list endpoints.
///
/// `from` is a 0-based element offset; results are served from the page
/// containing that offset, i.e. page `from / size` of length `size`.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageParams {
    #[serde(default)]
    pub from: i64,
    #[serde(default = "default_page_size")]
    pub size: i64,
}

impl PageParams {
    pub fn validate(&self) -> AppResult<()> {
        if self.from < 0 {
            return Err(AppError::Validation("from must not be negative".to_string()));
        }
        if self.size <= 0 {
            return Err(AppError::Validation("size must be positive".to_string()));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        (self.from / self.size) * self.size
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            from: 0,
            size: default_page_size(),
        }
    }
}
