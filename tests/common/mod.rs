#![allow(dead_code)]
/// Common test utilities and helpers
use css_typegen::{GenerateOptions, Logger};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// A throwaway project tree with stylesheet files
pub struct TestProject {
    pub temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file to the test project, creating parent directories
    pub fn write_file(&self, name: &str, content: &str) -> &Self {
        let file_path = self.temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, content).unwrap();
        self
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).unwrap()
    }

    /// Options rooted at this project
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            root_dir: self.temp_dir.path().to_string_lossy().to_string(),
            ..Default::default()
        }
    }
}

/// Logger that records every line per level
#[derive(Default)]
pub struct CapturingLogger {
    pub infos: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl Logger for CapturingLogger {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
