//! Identifier-addressed commands.

use casement_common::{DevToolsMode, OpenContext, OpenRequest, RecentlyOpened, Result, WindowId};
use tracing::debug;

use super::CommandDispatcher;

impl CommandDispatcher {
    pub async fn reload(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "reload", (), |w| w.reload());
        Ok(())
    }

    pub async fn open_dev_tools(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "open_dev_tools", (), |w| {
            w.open_dev_tools(DevToolsMode::Docked)
        });
        Ok(())
    }

    /// Opens undocked devtools on a window with a hidden title bar that is
    /// not full screen and has no devtools open yet. Anything else toggles.
    pub async fn toggle_dev_tools(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "toggle_dev_tools", (), |w| {
            if w.has_hidden_title_bar_style() && !w.is_full_screen() && !w.is_dev_tools_opened() {
                w.open_dev_tools(DevToolsMode::Undocked);
            } else {
                w.toggle_dev_tools();
            }
        });
        Ok(())
    }

    /// Replace the window's contents with an empty workspace.
    pub async fn close_folder(&self, id: WindowId) -> Result<()> {
        let windows = &self.collaborators.windows;
        let cli = &self.launch_args;
        self.with_window(id, "close_folder", (), |w| {
            let mut request = OpenRequest::new(OpenContext::Api, cli.clone());
            request.window_to_use = Some(w.id());
            request.force_empty = true;
            windows.open(request);
        });
        Ok(())
    }

    pub async fn toggle_full_screen(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "toggle_full_screen", (), |w| w.toggle_full_screen());
        Ok(())
    }

    pub async fn set_represented_filename(&self, id: WindowId, filename: &str) -> Result<()> {
        self.with_window(id, "set_represented_filename", (), |w| {
            w.set_represented_filename(filename)
        });
        Ok(())
    }

    pub async fn focus_window(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "focus_window", (), |w| w.focus());
        Ok(())
    }

    pub async fn is_focused(&self, id: WindowId) -> Result<bool> {
        Ok(self.with_window(id, "is_focused", false, |w| w.is_focused()))
    }

    pub async fn is_maximized(&self, id: WindowId) -> Result<bool> {
        Ok(self.with_window(id, "is_maximized", false, |w| w.is_maximized()))
    }

    pub async fn maximize_window(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "maximize_window", (), |w| w.maximize());
        Ok(())
    }

    pub async fn unmaximize_window(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "unmaximize_window", (), |w| w.unmaximize());
        Ok(())
    }

    pub async fn on_window_title_double_click(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "on_window_title_double_click", (), |w| {
            w.on_title_double_click()
        });
        Ok(())
    }

    pub async fn set_document_edited(&self, id: WindowId, edited: bool) -> Result<()> {
        self.with_window(id, "set_document_edited", (), |w| {
            if w.is_document_edited() != edited {
                w.set_document_edited(edited);
            } else {
                debug!(window_id = %id, edited, "document edited flag unchanged");
            }
        });
        Ok(())
    }

    pub async fn show_window(&self, id: WindowId) -> Result<()> {
        self.with_window(id, "show_window", (), |w| w.show());
        Ok(())
    }

    /// Recent paths as seen from the window's workspace context.
    pub async fn get_recently_opened(&self, id: WindowId) -> Result<RecentlyOpened> {
        let history = &self.collaborators.history;
        Ok(self.with_window(id, "get_recently_opened", RecentlyOpened::default(), |w| {
            history.recently_opened(&w.workspace())
        }))
    }
}
