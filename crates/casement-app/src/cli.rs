use std::path::PathBuf;

use casement_common::LaunchArgs;
use clap::Parser;

/// Casement: window command facade driven by JSON lines on stdin.
#[derive(Parser, Debug)]
#[command(name = "casement", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Windows draw their own title bar.
    #[arg(long)]
    pub hidden_title_bar: bool,

    /// Always open paths in a new window.
    #[arg(short = 'n', long)]
    pub new_window: bool,

    /// Open paths in the focused window.
    #[arg(short = 'r', long, conflicts_with = "new_window")]
    pub reuse_window: bool,

    #[arg(long)]
    pub verbose: bool,

    /// Run an extension host for the extension at this path.
    #[arg(long)]
    pub extension_development_path: Option<String>,

    /// Files or folders to open at startup.
    pub paths: Vec<PathBuf>,
}

impl Args {
    /// Startup flags from the config, with command line flags layered on top.
    /// A window flag given on the command line replaces both configured ones.
    pub fn launch_args(&self, configured: LaunchArgs) -> LaunchArgs {
        let (new_window, reuse_window) = if self.new_window || self.reuse_window {
            (self.new_window, self.reuse_window)
        } else {
            (configured.new_window, configured.reuse_window)
        };

        LaunchArgs {
            new_window,
            reuse_window,
            goto: false,
            verbose: self.verbose || configured.verbose,
            extension_development_path: self
                .extension_development_path
                .clone()
                .or(configured.extension_development_path),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
