//! Single-file generation: parse a stylesheet module, turn its token set
//! into declaration entries, render the declaration file, and write it only
//! when the content actually changed.

use crate::config::GenerateOptions;
use crate::error::Result;
use crate::logger::{default_logger, Logger, LOG_TAG};
use crate::parser::{RegexParser, StylesheetParser, TokenMap};
use crate::render::{quote, render, DECLARATION_SUFFIX};
use crate::transform::to_camel_case;
use crate::validate::validate;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Drives Validator -> Transformer -> Renderer -> idempotent write for one
/// stylesheet module at a time.
pub struct TypeGenerator {
    options: GenerateOptions,
    parser: Arc<dyn StylesheetParser>,
    logger: Arc<dyn Logger>,
}

impl TypeGenerator {
    /// Create a generator with the default parser and console logger
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            parser: Arc::new(RegexParser::new()),
            logger: default_logger(),
        }
    }

    /// Replace the stylesheet parser collaborator
    pub fn with_parser(mut self, parser: Arc<dyn StylesheetParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Replace the logging collaborator
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub(crate) fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    /// Generate the declaration file for one stylesheet module.
    ///
    /// A parse failure is logged and swallowed so one broken file cannot
    /// fail a batch; filesystem failures on the output side propagate.
    pub fn generate_file(&self, file_path: &Path) -> Result<()> {
        let tokens = match self
            .parser
            .parse(file_path, self.options.parser_config.as_ref())
        {
            Ok(tokens) => tokens,
            Err(err) => {
                self.logger.error(&format!("{} {}", LOG_TAG, err));
                return Ok(());
            }
        };

        let identity = self.file_identity(file_path);
        let identity_display = identity.to_string_lossy().to_string();

        let declarations = self.collect_declarations(&tokens, &identity_display);
        let output_path = self.output_path(&identity);
        let content = render(&declarations);

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let existing = fs::read_to_string(&output_path).unwrap_or_default();
        if existing == content {
            return Ok(());
        }

        fs::write(&output_path, &content)?;
        self.logger.info(&format!(
            "{} Types generated for {}",
            LOG_TAG, identity_display
        ));

        Ok(())
    }

    /// The file's identity relative to the input root. Absolute paths are
    /// made relative; relative paths are used as-is.
    fn file_identity(&self, file_path: &Path) -> PathBuf {
        if file_path.is_absolute() {
            file_path
                .strip_prefix(self.options.input_root())
                .unwrap_or(file_path)
                .to_path_buf()
        } else {
            file_path.to_path_buf()
        }
    }

    /// Ordered declaration list for the token set. Tokens come out of the
    /// map in code-point order, which fixes the output independently of the
    /// parser's iteration order. Every token ends up in the list; validity
    /// only decides whether a warning fires, and a camelCase alias adds the
    /// original as a second entry when the transform changes the string.
    fn collect_declarations(&self, tokens: &TokenMap, identity: &str) -> Vec<String> {
        let mut declarations = Vec::new();

        for token in tokens.keys() {
            let mut key = token.clone();

            if self.options.camel_case {
                let camel = to_camel_case(&key);
                if camel != key {
                    declarations.push(quote(&key));
                    key = camel;
                }
            }

            let validity = validate(&key);
            declarations.push(quote(&key));
            if !validity.is_valid {
                self.logger
                    .warn(&format!("{} {}: {}", LOG_TAG, identity, validity.message));
            }
        }

        declarations
    }

    /// Output path: output root, plus the relative identity with its
    /// extension optionally stripped, plus the declaration suffix.
    fn output_path(&self, identity: &Path) -> PathBuf {
        let base = if self.options.drop_extensions {
            identity.with_extension("")
        } else {
            identity.to_path_buf()
        };

        let file = format!("{}{}", base.to_string_lossy(), DECLARATION_SUFFIX);
        self.options.output_root().join(file)
    }
}
