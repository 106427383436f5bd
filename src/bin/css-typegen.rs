use clap::Parser;
use css_typegen::cli::{Cli, Commands, ModeArgs};
use css_typegen::{GenerateOptions, Scanner, TypeGenerator, TypeWatcher};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => run_generate(&args),
        Commands::Watch(args) => run_watch(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_options(args: &ModeArgs) -> Result<GenerateOptions, Box<dyn std::error::Error>> {
    let mut options = match &args.config_file {
        Some(path) => GenerateOptions::from_file(path)?,
        None => GenerateOptions::new(),
    };

    // CLI flags override whatever the config file set.
    options.merge(&GenerateOptions::from(args));
    options.validate()?;
    Ok(options)
}

fn run_generate(args: &ModeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(args)?;

    if args.verbose {
        println!(
            "Scanning {} for {}",
            options.input_root().display(),
            options.glob_pattern
        );
    }

    let spinner = if args.verbose {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("spinner template"),
        );
        pb.set_message("Generating declaration files...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    };

    let scanner = Scanner::new(TypeGenerator::new(options));
    let count = scanner.scan()?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    println!(
        "Generated declarations for {} stylesheet module{}",
        count,
        if count == 1 { "" } else { "s" }
    );

    Ok(())
}

fn run_watch(args: &ModeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(args)?;

    let watcher = TypeWatcher::new(TypeGenerator::new(options));
    watcher.watch()?;

    Ok(())
}
