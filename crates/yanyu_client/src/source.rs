//! Where learner and catalogue records come from.

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use yanyu_common::{Course, UserProfile};

use crate::error::ClientError;

/// Future returned by a [`DataSource`]. Owns everything it needs, so it can be
/// handed to `spawn_local` after the source reference is gone.
pub type SourceFuture<T> = LocalBoxFuture<'static, Result<T, ClientError>>;

/// Supplier of the two records the views consume.
///
/// Implementations manage their own transport; the hooks only see the
/// outcome. Nothing here retries.
pub trait DataSource: Send + Sync + 'static {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    fn fetch_user(&self) -> SourceFuture<UserProfile>;

    fn fetch_courses(&self) -> SourceFuture<Vec<Course>>;
}

/// JSON over HTTP: `GET {base}/user` and `GET {base}/courses`.
#[derive(Clone, Debug)]
pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), resource)
    }
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, ClientError> {
    log::debug!("[HttpSource] GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ClientError::Status {
            status: response.status(),
            url,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

impl DataSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch_user(&self) -> SourceFuture<UserProfile> {
        get_json(self.endpoint("user")).boxed_local()
    }

    fn fetch_courses(&self) -> SourceFuture<Vec<Course>> {
        get_json(self.endpoint("courses")).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let source = HttpSource::new("https://api.example.com/v1/");
        assert_eq!(source.endpoint("user"), "https://api.example.com/v1/user");

        let source = HttpSource::new("https://api.example.com/v1");
        assert_eq!(source.endpoint("courses"), "https://api.example.com/v1/courses");
    }
}
