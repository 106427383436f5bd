use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+(\w)").expect("camel regex"));

/// Rewrites a hyphen-delimited token into camel form: each run of hyphens
/// immediately followed by a word character is replaced by that character
/// uppercased. All other characters pass through unchanged, so a token
/// without the pattern comes back as-is.
///
/// Idempotent: the output never contains a hyphen-before-word-character run,
/// so a second application is a no-op.
pub fn to_camel_case(token: &str) -> String {
    HYPHEN_RUN
        .replace_all(token, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}
