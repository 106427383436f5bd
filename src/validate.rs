use once_cell::sync::Lazy;
use regex::Regex;

/// Outcome of checking a single token. `message` is only meaningful when
/// `is_valid` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex"));

// ECMAScript reserved words, including strict-mode and future reserved
// words. A token matching one of these cannot be used as a bare member name.
const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Decides whether `token` is safe to use verbatim as an unquoted member
/// name in a declaration file.
///
/// Pure and infallible. An invalid token never blocks generation; the caller
/// still emits it as a quoted string literal and only surfaces the returned
/// message as a warning.
pub fn validate(token: &str) -> ValidationResult {
    if token.is_empty() {
        return ValidationResult::invalid("token is empty".to_string());
    }

    if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return ValidationResult::invalid(format!("'{}' starts with a digit", token));
    }

    if !IDENTIFIER.is_match(token) {
        return ValidationResult::invalid(format!(
            "'{}' contains characters that are not valid in an identifier",
            token
        ));
    }

    if RESERVED_WORDS.contains(&token) {
        return ValidationResult::invalid(format!("'{}' is a reserved word", token));
    }

    ValidationResult::ok()
}
