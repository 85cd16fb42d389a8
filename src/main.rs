use clap::{Parser, Subcommand};
use monofolio::{config, content, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monofolio")]
#[command(about = "Static site generator for single-page portfolios")]
#[command(long_about = "\
Static site generator for single-page portfolios

One TOML file is the data source. The generator renders a single page —
hero, about, projects, skills, contact — with scroll-based navigation
highlighting and entrance animations, all as plain HTML, inline CSS,
and a few dozen lines of vanilla JavaScript.

Content structure:

  content/
  ├── portfolio.toml               # The portfolio data (required)
  ├── config.toml                  # Site config: colors, theme, animation (optional)
  ├── about.md                     # About-section body, markdown (optional)
  └── assets/                      # Copied to the output root (optional)
      ├── profile.jpg              # Resized into square display variants
      ├── cv.pdf                   # Linked from the about section
      └── icons/                   # Contact entry icons

Sections are driven by the [[nav]] entries in portfolio.toml: one
section per entry, in order, with the hero first. The ids about,
projects, skills and contact get their full layouts.

Run 'monofolio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".monofolio-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the content directory into a manifest
    Load,
    /// Produce the final HTML site from the manifest
    Generate,
    /// Run the full pipeline: load → generate
    Build,
    /// Validate the content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Load => {
            let manifest = content::load(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_load_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            std::fs::create_dir_all(&cli.temp_dir)?;

            println!("==> Stage 1: Loading {}", cli.source.display());
            let manifest = content::load(&cli.source)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_load_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = content::load(&cli.source)?;
            output::print_load_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
