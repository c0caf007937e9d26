//! # Glint CLI
//!
//! Command-line interface for generating crystal icon PNGs.
//!
//! ## Usage
//!
//! ```bash
//! # Generate a 256x256 icon at icon.png
//! glint generate
//!
//! # Custom size and output path
//! glint generate --width 128 --height 128 cover.png
//!
//! # Reproducible output
//! glint generate --seed 42
//!
//! # A batch of icons (icon-1.png, icon-2.png, ...)
//! glint generate --count 5
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use glint::{
    GlintError,
    crystal::{Crystal, Params},
    png,
};

/// Glint - crystal icon generator
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one or more crystal icon PNGs
    Generate {
        /// Output path (with --count > 1, a numbered suffix is inserted)
        #[arg(default_value = "icon.png")]
        output: PathBuf,

        /// Icon width in pixels
        #[arg(long, default_value = "256")]
        width: u32,

        /// Icon height in pixels
        #[arg(long, default_value = "256")]
        height: u32,

        /// Seed for reproducible output (each icon in a batch offsets it)
        #[arg(long)]
        seed: Option<u64>,

        /// Number of icons to generate
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GlintError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            width,
            height,
            seed,
            count,
        } => {
            for i in 0..count {
                let params = Params {
                    seed: seed.map(|s| s + i as u64),
                    ..Params::default()
                };
                let crystal = Crystal::new(params);

                println!("Generating crystal icon ({}x{}, {})...", width, height, crystal.params());
                let pixels = crystal.synthesize(width, height)?;
                let bytes = png::encode(&pixels, width, height)?;

                let path = if count > 1 {
                    numbered_path(&output, i + 1)
                } else {
                    output.clone()
                };
                fs::write(&path, &bytes)?;
                println!("Saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// Insert a 1-based index before the extension: `icon.png` -> `icon-3.png`.
fn numbered_path(base: &Path, index: usize) -> PathBuf {
    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("icon");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}-{}.{}", stem, index, ext),
        None => format!("{}-{}", stem, index),
    };
    base.with_file_name(name)
}
