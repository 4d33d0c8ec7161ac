//! Routing of OS "open URL" events.
//!
//! Two pipelines listen to the same source. Each is a predicate and an
//! action; both see every event. File links never match the extension
//! predicate, so at most one fires.

use std::sync::Arc;

use casement_common::{
    ConfigError, DisposableStore, LaunchArgs, OpenContext, OpenRequest, OpenedUrl,
};
use casement_platform::{UrlEventSource, WindowRegistry};
use regex::Regex;
use tracing::{debug, info};

/// URL classification rules.
#[derive(Debug, Clone)]
pub struct UrlRoutes {
    file_authority: String,
    extension_path: Regex,
}

impl UrlRoutes {
    pub fn new(
        file_authority: impl Into<String>,
        extension_path_pattern: &str,
    ) -> Result<Self, ConfigError> {
        let extension_path = Regex::new(extension_path_pattern).map_err(|e| {
            ConfigError::ValidationError(format!(
                "invalid extension path pattern '{extension_path_pattern}': {e}"
            ))
        })?;
        Ok(Self {
            file_authority: file_authority.into(),
            extension_path,
        })
    }

    pub fn file_authority(&self) -> &str {
        &self.file_authority
    }

    /// A local file link: the file authority with something to open.
    pub fn is_file_open(&self, url: &OpenedUrl) -> bool {
        url.authority == self.file_authority && url.has_path()
    }

    /// File links never count, whatever their path.
    pub fn is_extension_development(&self, url: &OpenedUrl) -> bool {
        url.authority != self.file_authority && self.extension_path.is_match(&url.path)
    }
}

/// Turns routed URLs into open requests on the window registry.
pub struct UrlRouter {
    windows: Arc<dyn WindowRegistry>,
    launch_args: LaunchArgs,
    routes: UrlRoutes,
}

impl UrlRouter {
    pub fn new(windows: Arc<dyn WindowRegistry>, launch_args: LaunchArgs, routes: UrlRoutes) -> Self {
        Self {
            windows,
            launch_args,
            routes,
        }
    }

    pub fn routes(&self) -> &UrlRoutes {
        &self.routes
    }

    /// File-open pipeline. Returns whether the action ran.
    pub fn route_file_open(&self, url: &OpenedUrl) -> bool {
        if !self.routes.is_file_open(url) {
            return false;
        }

        let path = url.to_file_path();
        info!(path = %path.display(), "opening file from url");
        let request = OpenRequest::new(OpenContext::Api, self.launch_args.with_goto())
            .with_paths(vec![path]);
        self.windows.open(request);
        true
    }

    /// Extension-development pipeline. Only fires while no window is open;
    /// the count is read for every event.
    pub fn route_extension_development(&self, url: &OpenedUrl) -> bool {
        if !self.routes.is_extension_development(url) {
            return false;
        }

        let open_windows = self.windows.count();
        if open_windows > 0 {
            debug!(path = %url.path, open_windows, "extension url ignored, windows already open");
            return false;
        }

        info!(path = %url.path, "opening window for extension url");
        self.windows
            .open(OpenRequest::new(OpenContext::Api, self.launch_args.clone()));
        true
    }

    /// Subscribe both pipelines to `source`. The subscriptions go into `store`.
    pub fn attach(self: &Arc<Self>, source: &dyn UrlEventSource, store: &mut DisposableStore) {
        let router = Arc::clone(self);
        store.add(source.on_open_url(Box::new(move |url| {
            router.route_file_open(url);
        })));

        let router = Arc::clone(self);
        store.add(source.on_open_url(Box::new(move |url| {
            router.route_extension_development(url);
        })));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::fakes::{FakeRegistry, FakeUrls, FakeWindow};

    fn router(registry: &Arc<FakeRegistry>) -> Arc<UrlRouter> {
        let args = LaunchArgs {
            verbose: true,
            ..Default::default()
        };
        Arc::new(UrlRouter::new(
            registry.clone(),
            args,
            UrlRoutes::new("file", "^/?extension(/|$)").unwrap(),
        ))
    }

    fn attached() -> (Arc<FakeRegistry>, Arc<FakeUrls>, DisposableStore) {
        let registry = Arc::new(FakeRegistry::new());
        let urls = Arc::new(FakeUrls::default());
        let mut store = DisposableStore::new();
        router(&registry).attach(urls.as_ref(), &mut store);
        (registry, urls, store)
    }

    #[test]
    fn invalid_pattern_is_a_config_error() {
        let err = UrlRoutes::new("file", "(unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn classification() {
        let routes = UrlRoutes::new("file", "^/?extension(/|$)").unwrap();
        assert!(routes.is_file_open(&OpenedUrl::new("file", "/a/b.txt")));
        assert!(!routes.is_file_open(&OpenedUrl::new("file", "")));
        assert!(!routes.is_file_open(&OpenedUrl::new("other", "/a/b.txt")));

        assert!(routes.is_extension_development(&OpenedUrl::new("", "extension/foo")));
        assert!(routes.is_extension_development(&OpenedUrl::new("x", "/extension/foo")));
        assert!(!routes.is_extension_development(&OpenedUrl::new("x", "/my/extension")));
    }

    #[test]
    fn extension_match_stops_at_a_segment_boundary() {
        let routes = UrlRoutes::new("file", "^/?extension(/|$)").unwrap();
        assert!(routes.is_extension_development(&OpenedUrl::new("", "extension")));
        assert!(routes.is_extension_development(&OpenedUrl::new("", "/extension")));
        assert!(!routes.is_extension_development(&OpenedUrl::new("", "/extensionsfoo/bar")));
        assert!(!routes.is_extension_development(&OpenedUrl::new("", "/extensions/notes.txt")));
    }

    #[test]
    fn file_authority_is_never_an_extension_url() {
        let routes = UrlRoutes::new("file", "^/?extension(/|$)").unwrap();
        assert!(!routes.is_extension_development(&OpenedUrl::new("file", "/extension/foo")));
        assert!(routes.is_file_open(&OpenedUrl::new("file", "/extension/foo")));
    }

    #[test]
    fn file_under_extension_like_dir_opens_once() {
        let (registry, urls, _store) = attached();

        urls.emit(OpenedUrl::new("file", "/extensions/notes.txt"));
        urls.emit(OpenedUrl::new("file", "/extension/notes.txt"));

        let opened = registry.opened();
        assert_eq!(opened.len(), 2);
        assert_eq!(opened[0].paths_to_open, vec![PathBuf::from("/extensions/notes.txt")]);
        assert_eq!(opened[1].paths_to_open, vec![PathBuf::from("/extension/notes.txt")]);
        assert!(opened.iter().all(|request| request.cli.goto));
    }

    #[test]
    fn attach_subscribes_exactly_twice() {
        let (_registry, urls, store) = attached();
        assert_eq!(urls.subscriptions(), 2);
        assert_eq!(urls.live_listeners(), 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn file_url_opens_one_file_with_goto() {
        let (registry, urls, _store) = attached();
        registry.add(FakeWindow::new(1));

        urls.emit(OpenedUrl::new("file", "/a/b.txt"));

        let opened = registry.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].context, OpenContext::Api);
        assert_eq!(opened[0].paths_to_open, vec![PathBuf::from("/a/b.txt")]);
        assert!(opened[0].cli.goto);
        assert!(opened[0].cli.verbose);
    }

    #[test]
    fn file_url_without_windows_is_not_an_extension_open() {
        let (registry, urls, _store) = attached();

        urls.emit(OpenedUrl::new("file", "/a/b.txt"));

        let opened = registry.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].paths_to_open.len(), 1);
    }

    #[test]
    fn file_authority_without_path_is_ignored() {
        let (registry, urls, _store) = attached();
        urls.emit(OpenedUrl::new("file", ""));
        assert!(registry.opened().is_empty());
    }

    #[test]
    fn extension_url_with_no_windows_opens_empty_request() {
        let (registry, urls, _store) = attached();

        urls.emit(OpenedUrl::new("", "extension/foo"));

        let opened = registry.opened();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].paths_to_open.is_empty());
        assert!(!opened[0].cli.goto);
    }

    #[test]
    fn extension_url_with_open_window_does_nothing() {
        let (registry, urls, _store) = attached();
        registry.add(FakeWindow::new(1));

        urls.emit(OpenedUrl::new("", "extension/foo"));
        assert!(registry.opened().is_empty());
    }

    #[test]
    fn window_count_is_read_per_event() {
        let (registry, urls, _store) = attached();
        registry.add(FakeWindow::new(1));
        urls.emit(OpenedUrl::new("", "/extension/foo"));
        assert!(registry.opened().is_empty());

        registry.remove(casement_common::WindowId(1));
        urls.emit(OpenedUrl::new("", "/extension/foo"));
        assert_eq!(registry.opened().len(), 1);
    }

    #[test]
    fn unrelated_url_is_ignored() {
        let (registry, urls, _store) = attached();
        urls.emit(OpenedUrl::new("settings", "/theme"));
        assert!(registry.opened().is_empty());
    }

    #[test]
    fn disposed_store_silences_both_pipelines() {
        let (registry, urls, mut store) = attached();

        store.dispose();
        store.dispose();

        urls.emit(OpenedUrl::new("file", "/a/b.txt"));
        urls.emit(OpenedUrl::new("", "extension/foo"));
        assert!(registry.opened().is_empty());
        assert_eq!(urls.live_listeners(), 0);
    }
}
