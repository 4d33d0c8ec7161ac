mod cli;
mod session;

use std::path::PathBuf;

use casement_common::{ConfigError, OpenContext, OpenRequest};
use casement_config::schema::UrlConfig;
use casement_config::CasementConfig;
use casement_facade::UrlRoutes;
use casement_platform::{ShellIntegration, WindowRegistry};
use tracing_subscriber::EnvFilter;

use session::{HeadlessOptions, Session};

const DEFAULT_LOG_DIRECTIVE: &str = "casement=info";

fn init_logging(args: &cli::Args, config: &CasementConfig) {
    let directive = match &args.log_level {
        Some(level) => format!("casement={level}"),
        None => format!("casement={}", config.logging.level.as_directive()),
    };

    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    };

    // stdout carries replies, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn url_routes(urls: &UrlConfig) -> Result<UrlRoutes, ConfigError> {
    UrlRoutes::new(urls.file_authority.clone(), &urls.extension_path_pattern)
}

fn relaunch(args: Vec<String>) {
    let exe = match std::env::current_exe() {
        Ok(exe) => exe,
        Err(e) => {
            tracing::error!("Cannot relaunch, executable path unknown: {e}");
            return;
        }
    };

    tracing::info!(?args, "Relaunching {}", exe.display());
    if let Err(e) = std::process::Command::new(&exe).args(&args).spawn() {
        tracing::error!("Relaunch failed: {e}");
    }
}

fn main() {
    let args = cli::parse();

    // Config comes first so its log level can apply.
    let loaded = casement_config::load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    init_logging(&args, &config);
    tracing::info!("casement v{} starting...", env!("CARGO_PKG_VERSION"));

    match &loaded {
        // Loader warnings predate the subscriber, so repeat them here.
        Ok(config) => match casement_config::validation::validate(config) {
            Ok(()) => tracing::info!("Config loaded"),
            Err(e) => tracing::warn!("Config loaded with invalid values: {e}"),
        },
        Err(e) => tracing::warn!("Config load failed, using defaults: {e}"),
    }

    if let Err(e) = casement_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let routes = match url_routes(&config.urls) {
        Ok(routes) => routes,
        Err(e) => {
            tracing::warn!("Invalid [urls] config, using defaults: {e}");
            match url_routes(&UrlConfig::default()) {
                Ok(routes) => routes,
                Err(e) => {
                    tracing::error!("Default url routes rejected: {e}");
                    std::process::exit(2);
                }
            }
        }
    };

    let crash_report_dir =
        casement_platform::crash_report_dir().unwrap_or_else(|_| PathBuf::from("crash-reports"));
    let launch_args = args.launch_args(config.startup.launch_args());

    let mut session = Session::headless(
        HeadlessOptions {
            hidden_title_bar: args.hidden_title_bar,
            max_recent_entries: config.history.effective_max_entries(),
            crash_report_dir,
            current_args: std::env::args().skip(1).collect(),
        },
        launch_args.clone(),
        routes,
    );

    if config.crash_reporter.enabled {
        if let Err(e) = session
            .shell()
            .start_crash_reporter(config.crash_reporter.options())
        {
            tracing::warn!("Crash reporter not started: {e}");
        }
    }

    if !args.paths.is_empty() {
        let request =
            OpenRequest::new(OpenContext::Cli, launch_args).with_paths(args.paths.clone());
        session.windows().open(request);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    session.mark_shared_process_ready();

    tracing::info!(
        subscriptions = session.facade().subscription_count(),
        "Reading commands from stdin"
    );
    let result = runtime.block_on(async {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        session.run(stdin, tokio::io::stdout()).await
    });
    if let Err(e) = result {
        tracing::error!("Command loop failed: {e}");
    }

    session.shutdown();
    if let Some(args) = session.pending_relaunch() {
        relaunch(args);
    }
    tracing::info!("Shutdown complete");
}
