use crate::domain::model::Notice;
use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use std::future::Future;

const LOAD_ERROR: &str = "An error occurred while loading data";

/// Result of one asynchronous load: the value, whether it is still pending, and
/// the error message if it failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiData<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ApiData<T> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<T> ApiData<T> {
    pub fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn ready(data: Option<T>) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(message.into()),
        }
    }

    /// Awaits `fetch` and records the outcome. An `Err` is logged, turned into an
    /// error notice and stored as a message; it never escapes.
    pub async fn load<F, Fut>(fetch: F, notifier: &dyn Notifier) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>>>,
    {
        match fetch().await {
            Ok(data) => Self::ready(data),
            Err(e) => {
                tracing::error!("load failed: {}", e);
                notifier.notify(Notice::error("Failed to load data"));
                Self::failed(LOAD_ERROR)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.data.is_none()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}
