use std::sync::Arc;

use crate::source::DataSource;

/// Shared handle to the active [`DataSource`], provided by
/// [`DataProvider`](crate::DataProvider).
#[derive(Clone)]
pub struct DataContext {
    source: Arc<dyn DataSource>,
}

impl DataContext {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> Arc<dyn DataSource> {
        Arc::clone(&self.source)
    }
}

impl std::fmt::Debug for DataContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataContext")
            .field("source", &self.source.name())
            .finish()
    }
}
