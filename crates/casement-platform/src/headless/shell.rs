//! OS shell integration without a desktop: reveal and open-external only log.

use std::path::Path;

use async_trait::async_trait;
use casement_common::{CrashReporterOptions, PlatformError, Result};
use tracing::{info, warn};

use crate::capabilities::ShellIntegration;
use crate::crash_report::CrashReporter;

const EXTERNAL_SCHEMES: &[&str] = &["http", "https", "mailto"];

pub struct HeadlessShell {
    crash_reporter: CrashReporter,
}

impl HeadlessShell {
    pub fn new(crash_reporter: CrashReporter) -> Self {
        Self { crash_reporter }
    }

    pub fn crash_reporter(&self) -> &CrashReporter {
        &self.crash_reporter
    }
}

#[async_trait]
impl ShellIntegration for HeadlessShell {
    fn show_item_in_folder(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PlatformError::ShellError(format!(
                "cannot reveal missing path {}",
                path.display()
            ))
            .into());
        }
        info!(path = %path.display(), "reveal in folder");
        Ok(())
    }

    async fn open_external(&self, url: &str) -> Result<bool> {
        let parsed = match url::Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(url, error = %e, "open external: unparsable url");
                return Ok(false);
            }
        };

        if !EXTERNAL_SCHEMES.contains(&parsed.scheme()) {
            warn!(url, scheme = parsed.scheme(), "open external: no handler for scheme");
            return Ok(false);
        }

        info!(url, "open external");
        Ok(true)
    }

    fn start_crash_reporter(&self, options: CrashReporterOptions) -> Result<()> {
        self.crash_reporter.start(options)?;
        Ok(())
    }
}
