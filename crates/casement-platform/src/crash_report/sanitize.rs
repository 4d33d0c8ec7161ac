use std::sync::OnceLock;

use regex::Regex;

// Order matters: more specific patterns first, generic last.
const PATTERNS: &[(&str, &str)] = &[
    (r"Bearer [a-zA-Z0-9._\-]+", "[REDACTED]"),
    (r"(://[^/\s:@]+:)[^/\s@]+@", "${1}[REDACTED]@"),
    (
        r"(?i)((?:key|token|secret|password)=)[a-zA-Z0-9._\-]{8,}",
        "${1}[REDACTED]",
    ),
];

fn compiled() -> &'static [(Regex, &'static str)] {
    static COMPILED: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .filter_map(|(pattern, replacement)| {
                Regex::new(pattern).ok().map(|re| (re, *replacement))
            })
            .collect()
    })
}

/// Redacts bearer tokens, URL credentials and `key=`/`token=`/`secret=`/
/// `password=` values from the input.
pub fn sanitize_secrets(input: &str) -> String {
    let mut result = input.to_string();
    for (re, replacement) in compiled() {
        result = re.replace_all(&result, *replacement).into_owned();
    }
    result
}
