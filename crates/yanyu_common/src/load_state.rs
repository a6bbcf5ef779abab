//! Fetch status reported by every data source.

/// Current status of a data source.
///
/// There is no caching, staleness tracking or retry count: each value is the
/// source's current truth. `Error` carries a message that is shown to the
/// user as-is.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState<T> {
    /// Fetch in flight, nothing to show yet.
    #[default]
    Loading,
    /// Fetch failed; the message is rendered verbatim.
    Error(String),
    /// Data is available.
    Ready(T),
}

impl<T> LoadState<T> {
    /// Returns true while the source has not reported yet.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Returns the error message, if the source failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the data, if the source is ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Transforms the ready value, leaving `Loading` and `Error` untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Error(message) => LoadState::Error(message),
            LoadState::Ready(data) => LoadState::Ready(f(data)),
        }
    }
}
