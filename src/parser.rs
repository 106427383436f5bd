//! Boundary to the stylesheet parser collaborator. The generation engine
//! only consumes the key set of the returned map; everything else about how
//! tokens are extracted is the parser's business, including interpretation
//! of the opaque configuration blob.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parser-side metadata for one token. Opaque to the generation engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMeta {
    /// How many times the class appeared in the source file.
    pub occurrences: usize,
}

/// Token set produced by a parser run, keyed by class name.
pub type TokenMap = BTreeMap<String, TokenMeta>;

/// Extracts the class-name tokens defined by one stylesheet file.
pub trait StylesheetParser: Send + Sync {
    /// Parses the file at `path`. `config` is an opaque blob handed through
    /// from the generator options; only the parser gives it meaning.
    fn parse(&self, path: &Path, config: Option<&serde_json::Value>) -> Result<TokenMap>;
}

static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment regex"));

static CLASS_SELECTOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_CLASS_PATTERN).expect("class selector regex"));

const DEFAULT_CLASS_PATTERN: &str = r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)";

/// Default parser: strips block comments and collects every class selector
/// matching a pattern. The configuration blob may carry a `classPattern`
/// string to override the pattern, with the class name as capture group 1.
#[derive(Debug, Default, Clone)]
pub struct RegexParser;

impl RegexParser {
    pub fn new() -> Self {
        Self
    }

    fn pattern(config: Option<&serde_json::Value>) -> Result<Option<Regex>> {
        let Some(pattern) = config
            .and_then(|c| c.get("classPattern"))
            .and_then(|p| p.as_str())
        else {
            return Ok(None);
        };

        Regex::new(pattern)
            .map(Some)
            .map_err(|e| Error::Parse(format!("invalid classPattern: {}", e)))
    }
}

impl StylesheetParser for RegexParser {
    fn parse(&self, path: &Path, config: Option<&serde_json::Value>) -> Result<TokenMap> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;
        let source = BLOCK_COMMENT.replace_all(&source, "");

        let custom = Self::pattern(config)?;
        let selector = custom.as_ref().unwrap_or(&CLASS_SELECTOR);

        let mut tokens = TokenMap::new();
        for captures in selector.captures_iter(&source) {
            if let Some(name) = captures.get(1) {
                tokens
                    .entry(name.as_str().to_string())
                    .or_default()
                    .occurrences += 1;
            }
        }

        Ok(tokens)
    }
}
