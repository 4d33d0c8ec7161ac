use std::backtrace::Backtrace;
use std::panic::PanicHookInfo;
use std::path::{Path, PathBuf};

use casement_common::CrashReporterOptions;

use super::sanitize::sanitize_secrets;

/// Builds the JSON body of a crash report.
pub(crate) fn build_report(
    message: &str,
    location: Option<(&str, u32, u32)>,
    backtrace: &str,
    options: &CrashReporterOptions,
) -> serde_json::Value {
    let location = location.map(|(file, line, column)| {
        serde_json::json!({
            "file": file,
            "line": line,
            "column": column,
        })
    });

    serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "product_name": options.product_name,
        "company_name": options.company_name,
        "submit_url": options.submit_url,
        "upload_to_server": options.upload_to_server,
        "extra": options.extra,
        "panic_message": sanitize_secrets(message),
        "location": location,
        "backtrace": sanitize_secrets(backtrace),
    })
}

fn panic_message(info: &PanicHookInfo) -> String {
    let payload = info.payload();
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

/// Writes a crash report for a panic into `directory`, named after the
/// product and the time of the crash.
///
/// Runs inside a panic hook, so it never panics itself: any failure yields
/// `None`. On Unix the file is readable by the owner only.
pub fn write_crash_report(
    info: &PanicHookInfo,
    options: &CrashReporterOptions,
    directory: &Path,
) -> Option<PathBuf> {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let path = directory.join(format!("{}_crash_{stamp}.json", options.product_name));

    let location = info
        .location()
        .map(|loc| (loc.file(), loc.line(), loc.column()));
    let backtrace = Backtrace::force_capture().to_string();
    let report = build_report(&panic_message(info), location, &backtrace, options);

    std::fs::create_dir_all(directory).ok()?;
    std::fs::write(&path, serde_json::to_string_pretty(&report).ok()?).ok()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600));
    }

    Some(path)
}
