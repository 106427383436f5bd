//! One-shot mode: enumerate every stylesheet module matching the glob under
//! the input root and generate declaration files for all of them.

use crate::error::{Error, Result};
use crate::generator::TypeGenerator;
use crate::logger::LOG_TAG;
use globset::{Glob, GlobMatcher};
use rayon::prelude::*;
use std::path::PathBuf;
use walkdir::WalkDir;

pub struct Scanner {
    generator: TypeGenerator,
}

impl Scanner {
    pub fn new(generator: TypeGenerator) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &TypeGenerator {
        &self.generator
    }

    /// Enumerate matching files and generate declarations for each.
    ///
    /// Enumeration failures (bad pattern, unreadable root) are fatal and
    /// propagate before any generation starts. Per-file failures are logged
    /// and recovered, so the batch succeeds as a whole. Files are processed
    /// in parallel; no cross-file ordering is guaranteed or needed.
    ///
    /// Returns the number of matched files.
    pub fn scan(&self) -> Result<usize> {
        let files = self.enumerate()?;

        files.par_iter().for_each(|path| {
            if let Err(err) = self.generator.generate_file(path) {
                self.generator
                    .logger()
                    .error(&format!("{} {}", LOG_TAG, err));
            }
        });

        Ok(files.len())
    }

    fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let options = self.generator.options();
        let input_root = options.input_root();

        if !input_root.is_dir() {
            return Err(Error::Enumeration(format!(
                "input directory does not exist: {}",
                input_root.display()
            )));
        }

        let matcher = Self::matcher(&options.glob_pattern)?;
        let mut files = Vec::new();

        for entry in WalkDir::new(&input_root) {
            let entry = entry.map_err(|e| Error::Enumeration(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            // Match against the identity relative to the input root so
            // patterns behave the same regardless of where the root lives.
            let relative = entry.path().strip_prefix(&input_root).unwrap_or(entry.path());
            if matcher.is_match(relative) {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }

    pub(crate) fn matcher(pattern: &str) -> Result<GlobMatcher> {
        Ok(Glob::new(pattern)?.compile_matcher())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenerateOptions;
    use crate::logger::test_support::CapturingLogger;
    use crate::parser::{StylesheetParser, TokenMap};
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn options_for(dir: &TempDir) -> GenerateOptions {
        GenerateOptions {
            root_dir: dir.path().to_string_lossy().to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_scans_matching_files_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("components")).unwrap();
        fs::write(dir.path().join("app.module.css"), ".a {}\n").unwrap();
        fs::write(dir.path().join("components/nav.module.css"), ".b {}\n").unwrap();
        fs::write(dir.path().join("plain.css"), ".c {}\n").unwrap();

        let scanner = Scanner::new(TypeGenerator::new(options_for(&dir)));
        let count = scanner.scan().unwrap();

        assert_eq!(count, 2);
        assert!(dir.path().join("app.module.css.d.ts").exists());
        assert!(dir.path().join("components/nav.module.css.d.ts").exists());
        // plain.css has a one-part suffix and is outside the default glob.
        assert!(!dir.path().join("plain.css.d.ts").exists());
    }

    #[test]
    fn test_missing_input_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let options = GenerateOptions {
            root_dir: dir.path().to_string_lossy().to_string(),
            input_dir: "nope".to_string(),
            ..Default::default()
        };

        let scanner = Scanner::new(TypeGenerator::new(options));
        assert!(matches!(scanner.scan(), Err(Error::Enumeration(_))));
    }

    #[test]
    fn test_invalid_glob_is_fatal() {
        let dir = TempDir::new().unwrap();
        let mut options = options_for(&dir);
        options.glob_pattern = "a{b".to_string();

        let scanner = Scanner::new(TypeGenerator::new(options));
        assert!(matches!(scanner.scan(), Err(Error::Pattern(_))));
    }

    #[test]
    fn test_empty_match_set_is_success() {
        let dir = TempDir::new().unwrap();
        let scanner = Scanner::new(TypeGenerator::new(options_for(&dir)));
        assert_eq!(scanner.scan().unwrap(), 0);
    }

    #[test]
    fn test_one_bad_file_does_not_fail_the_batch() {
        // Parser that fails for exactly one file.
        struct SelectiveParser;

        impl StylesheetParser for SelectiveParser {
            fn parse(
                &self,
                path: &Path,
                _config: Option<&serde_json::Value>,
            ) -> crate::error::Result<TokenMap> {
                if path.to_string_lossy().contains("broken") {
                    return Err(Error::Parse("malformed stylesheet".to_string()));
                }
                let mut tokens = TokenMap::new();
                tokens.insert("ok".to_string(), Default::default());
                Ok(tokens)
            }
        }

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("one.module.css"), "").unwrap();
        fs::write(dir.path().join("broken.module.css"), "").unwrap();
        fs::write(dir.path().join("two.module.css"), "").unwrap();

        let logger = Arc::new(CapturingLogger::default());
        let generator = TypeGenerator::new(options_for(&dir))
            .with_parser(Arc::new(SelectiveParser))
            .with_logger(logger.clone());
        let scanner = Scanner::new(generator);

        let count = scanner.scan().unwrap();
        assert_eq!(count, 3);

        assert!(dir.path().join("one.module.css.d.ts").exists());
        assert!(dir.path().join("two.module.css.d.ts").exists());
        assert!(!dir.path().join("broken.module.css.d.ts").exists());

        let errors = logger.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("malformed stylesheet"));
    }
}
