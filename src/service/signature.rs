use once_cell::sync::Lazy;
use regex::Regex;

/// A lowercase UUID sitting between two path separators.
/// Uppercase hex is not matched.
static SIGNATURE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})/")
        .expect("signature pattern is a valid regex")
});

/// Extracts the measurement signature from a URL, if it has one
pub fn extract_measurement_signature(url: &str) -> Option<&str> {
    SIGNATURE_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
