//! # css-typegen
//!
//! Generate TypeScript declaration files for the class names exported by
//! CSS modules.
//!
//! For every stylesheet file matching a glob pattern under an input root,
//! the generator extracts the set of class-name tokens and writes a
//! companion `.d.ts` file describing them as a closed set of string-literal
//! keys, so code importing the stylesheet gets compile-time checking of
//! class-name usage.
//!
//! ## Features
//!
//! - 🔍 **Discovery**: one-shot glob scan or a continuous file-system watch
//! - 📝 **Deterministic output**: tokens sorted, content byte-stable across runs
//! - ✏️ **Idempotent writes**: the output file is only touched when its content changed
//! - 🐫 **camelCase aliases**: `foo-bar` optionally also exposed as `fooBar`
//! - ⚠️ **Validation**: tokens that are not safe identifiers are still emitted, with a warning
//!
//! ## Quick Start
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # One-shot generation
//! css-typegen generate --input-dir src/styles --camel-case
//!
//! # Keep regenerating as files change
//! css-typegen watch --input-dir src/styles
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,no_run
//! use css_typegen::{GenerateOptions, Scanner, TypeGenerator};
//!
//! let options = GenerateOptions {
//!     input_dir: "src/styles".to_string(),
//!     camel_case: true,
//!     ..Default::default()
//! };
//!
//! let scanner = Scanner::new(TypeGenerator::new(options));
//! scanner.scan()?;
//! # Ok::<(), css_typegen::Error>(())
//! ```
//!
//! ## Example
//!
//! Given this stylesheet:
//!
//! ```css
//! .nav-item { color: inherit; }
//! .active { font-weight: bold; }
//! ```
//!
//! Generates this declaration file (with camelCase aliasing enabled):
//!
//! ```typescript
//! export type Keys = 'active' | 'nav-item' | 'navItem';
//! export type Css = { [key in Keys]: string };
//!
//! declare const css: Css;
//! export default css;
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod generator;
pub mod logger;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod transform;
pub mod validate;
pub mod watcher;

pub use error::{Error, Result};

// Convenience re-exports for common use cases
pub use config::GenerateOptions;
pub use generator::TypeGenerator;
pub use logger::{ConsoleLogger, Logger, LOG_TAG};
pub use parser::{RegexParser, StylesheetParser, TokenMap, TokenMeta};
pub use scanner::Scanner;
pub use watcher::TypeWatcher;
