use crate::config::GenerateOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "css-typegen")]
#[command(about = "Generate TypeScript declaration files for CSS module class names")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate declaration files for every matching stylesheet module
    Generate(ModeArgs),
    /// Watch the input directory and regenerate on add/change events
    Watch(ModeArgs),
}

#[derive(Args, Clone)]
pub struct ModeArgs {
    /// Root directory the input and output directories are resolved against
    /// (default: current directory)
    #[arg(short = 'r', long = "root-dir")]
    pub root_dir: Option<PathBuf>,

    /// Directory scanned for stylesheet modules, relative to the root
    #[arg(short = 'i', long = "input-dir", default_value = ".")]
    pub input_dir: String,

    /// Output directory for declaration files (default: the input directory)
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<String>,

    /// Glob pattern selecting stylesheet modules
    #[arg(short = 'g', long = "glob", default_value = "**/*.*.css")]
    pub glob_pattern: String,

    /// Strip the stylesheet extension from the output file name
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub drop_extensions: bool,

    /// Additionally emit camelCase aliases for hyphenated class names
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub camel_case: bool,

    /// Configuration file path (JSON)
    #[arg(short = 'c', long = "config")]
    pub config_file: Option<PathBuf>,

    /// Verbose output
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}

impl From<&ModeArgs> for GenerateOptions {
    fn from(args: &ModeArgs) -> Self {
        GenerateOptions {
            root_dir: args
                .root_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| GenerateOptions::default().root_dir),
            input_dir: args.input_dir.clone(),
            output_dir: args.output_dir.clone(),
            glob_pattern: args.glob_pattern.clone(),
            drop_extensions: args.drop_extensions,
            camel_case: args.camel_case,
            parser_config: None,
        }
    }
}
