//! Application root component.

use leptos::prelude::*;
use leptos_router::components::Router;

use yanyu_client::DataProvider;

use crate::config::AppConfig;
use crate::layout::AppShell;
use crate::theme::provide_theme_context;

/// Root application component.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_theme_context();

    let source = config.data_source();
    log::info!(
        "Starting YanYu Learning Hub (data source: {}, log level: {})",
        source.name(),
        config.log_level
    );
    provide_context(config);

    view! {
        <DataProvider source=source>
            <Router>
                <AppShell/>
            </Router>
        </DataProvider>
    }
}

#[cfg(test)]
mod tests {
    const INDEX_HTML: &str = include_str!("../index.html");

    #[test]
    fn test_host_page_metadata() {
        assert!(INDEX_HTML.contains(r#"<html lang="zh-CN">"#));
        assert!(INDEX_HTML.contains("viewport-fit=cover"));
        assert!(INDEX_HTML.contains(r##"<meta name="theme-color" content="#3b82f6" />"##));
        assert!(INDEX_HTML.contains(r#"<meta name="description""#));
        assert!(INDEX_HTML.contains(r#"<link rel="icon" href="/images/yanyu-logo.png" />"#));
    }
}
