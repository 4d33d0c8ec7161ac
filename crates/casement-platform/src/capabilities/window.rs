use std::sync::Arc;

use casement_common::{DevToolsMode, OpenContext, OpenRequest, WindowId, WindowWorkspace};

/// A live window, owned by the registry.
///
/// Handles are looked up per operation and never stored by callers.
pub trait WindowHandle: Send + Sync {
    fn id(&self) -> WindowId;
    fn title(&self) -> String;
    fn workspace(&self) -> WindowWorkspace;
    fn extension_development_path(&self) -> Option<String>;

    fn reload(&self);
    fn focus(&self);
    fn is_focused(&self) -> bool;
    fn show(&self);
    fn close(&self);

    fn maximize(&self);
    fn unmaximize(&self);
    fn is_maximized(&self) -> bool;
    fn is_full_screen(&self) -> bool;
    fn toggle_full_screen(&self);
    fn on_title_double_click(&self);

    /// Whether the window draws its own title bar instead of the native one.
    fn has_hidden_title_bar_style(&self) -> bool;

    fn represented_filename(&self) -> Option<String>;
    fn set_represented_filename(&self, filename: &str);
    fn is_document_edited(&self) -> bool;
    fn set_document_edited(&self, edited: bool);

    fn is_dev_tools_opened(&self) -> bool;
    fn open_dev_tools(&self, mode: DevToolsMode);
    fn toggle_dev_tools(&self);
}

/// The process-wide set of open windows.
pub trait WindowRegistry: Send + Sync {
    fn find_by_id(&self, id: WindowId) -> Option<Arc<dyn WindowHandle>>;

    /// Every live window, in opening order.
    fn all(&self) -> Vec<Arc<dyn WindowHandle>>;

    fn count(&self) -> usize {
        self.all().len()
    }

    /// Windows running an extension host for the given development path.
    fn find_on_extension_development_path(&self, path: &str) -> Vec<Arc<dyn WindowHandle>> {
        self.all()
            .into_iter()
            .filter(|w| w.extension_development_path().as_deref() == Some(path))
            .collect()
    }

    fn open(&self, request: OpenRequest);
    fn open_new(&self, context: OpenContext);
    fn quit(&self);
}
