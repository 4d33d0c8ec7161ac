use async_trait::async_trait;
use casement_common::{PickOptions, PlatformError, Result};

use crate::capabilities::Dialogs;

/// Pickers are unavailable without a desktop; every call fails.
#[derive(Debug, Default)]
pub struct HeadlessDialogs;

fn unavailable(kind: &str) -> Result<()> {
    Err(PlatformError::NotSupported(format!("{kind} dialog requires a desktop session")).into())
}

#[async_trait]
impl Dialogs for HeadlessDialogs {
    async fn pick_file_folder_and_open(&self, _options: PickOptions) -> Result<()> {
        unavailable("file or folder")
    }

    async fn pick_file_and_open(&self, _options: PickOptions) -> Result<()> {
        unavailable("file")
    }

    async fn pick_folder_and_open(&self, _options: PickOptions) -> Result<()> {
        unavailable("folder")
    }

    async fn pick_workspace_and_open(&self, _options: PickOptions) -> Result<()> {
        unavailable("workspace")
    }
}
