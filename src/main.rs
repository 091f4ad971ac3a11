//! CLI entry point for codemap

use std::path::PathBuf;
use std::process;

use clap::Parser;
use codemap::{ReportConfig, generate, open_in_viewer, resolve_root, write_report};

#[derive(Parser, Debug)]
#[command(name = "codemap")]
#[command(about = "Scan a directory tree into an interactive HTML map")]
#[command(version)]
struct Args {
    /// Directory to map
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = resolve_root(&args.path, &cwd);
    println!("Scanning {}...", root.display());

    let output =
        generate(&root, ReportConfig::default()).and_then(|html| write_report(&html, &cwd));
    let output = match output {
        Ok(path) => path,
        Err(e) => {
            eprintln!("codemap: {}", e);
            process::exit(1);
        }
    };

    println!("Map generated at: {}", output.display());
    open_in_viewer(&output);
}
