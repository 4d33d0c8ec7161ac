//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# casement configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[logging]
# level = "info"          # trace | debug | info | warn | error

[urls]
# Authority of URLs that ask to open a local file, e.g. casement://file/home/me/notes.txt
# file_authority = "file"
# Regex matched against the URL path; a match opens a first window when none is open.
# extension_path_pattern = "^/?extension(/|$)"

[history]
# max_entries = 100       # 1-500

[startup]
# new_window = false
# reuse_window = false
# verbose = false
# extension_development_path = "/path/to/extension"

[crash_reporter]
# enabled = true
# product_name = "casement"
# company_name = "casement"
# submit_url = ""
# upload_to_server = false
"##
    .to_string()
}
