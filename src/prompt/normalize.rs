//! Input normalization

use regex::Regex;
use std::sync::OnceLock;

fn non_letters() -> &'static Regex {
    static NON_LETTERS: OnceLock<Regex> = OnceLock::new();
    NON_LETTERS.get_or_init(|| Regex::new(r"[^a-z\s]").expect("static regex"))
}

/// Trim, lowercase, then drop everything except letters and whitespace.
///
/// The result is trimmed again so that dropping a leading or trailing
/// symbol cannot expose whitespace; this keeps `normalize` idempotent.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    non_letters().replace_all(&lowered, "").trim().to_string()
}
