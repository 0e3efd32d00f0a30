use clap::{Parser, Subcommand};
use docs_nav::{config, output, rewrites, sidebar};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Shared flags for commands that can print JSON instead of a tree.
#[derive(clap::Args, Clone)]
struct FormatArgs {
    /// Print the site generator's JSON instead of the human-readable view
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(version, about = "Sidebar and URL rewrite generator for markdown docs")]
#[command(long_about = "\
Sidebar and URL rewrite generator for markdown docs

Your filesystem is the data source. Numbered directories become sidebar
groups, markdown files become pages, and the numeric prefix only controls
ordering: it never appears in titles or URLs.

Content structure:

  src/
  ├── index.md                     # Home page (not in sidebar)
  ├── 01-introduction.md           # Page → /introduction/
  ├── 02-getting-started/          # Group \"Getting Started\"
  │   ├── 01-installation.md       # → /getting-started/installation/
  │   └── _draft.md                # Underscore = ignored
  └── assets/                      # Unnumbered = not in sidebar, still rewritten
      └── notes.md                 # → assets/notes/index.md

Run 'docs-nav gen-config' to generate a documented docs-nav.toml.")]
struct Cli {
    /// Project directory containing docs-nav.toml
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// Navigation root (overrides `source` from config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory for `build` (overrides `output_dir` from config)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Log progress at info level (otherwise RUST_LOG applies)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sidebar tree
    Sidebar(FormatArgs),
    /// Print the rewrite map
    Rewrites(FormatArgs),
    /// Write sidebar.json and rewrites.json to the output directory
    Build,
    /// Validate the content tree without writing anything
    Check,
    /// Print a stock docs-nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Command::Sidebar(format) => {
            let project = Project::load(&cli)?;
            let nodes = sidebar::generate_sidebar_with(&project.source, &project.sidebar)?;
            if format.json {
                println!("{}", serde_json::to_string_pretty(&nodes)?);
            } else {
                output::print_sidebar(&nodes);
            }
        }
        Command::Rewrites(format) => {
            let project = Project::load(&cli)?;
            let map = rewrites::generate_rewrites_within(&project.source, &project.site_root)?;
            if format.json {
                println!("{}", serde_json::to_string_pretty(&map)?);
            } else {
                output::print_rewrites(&map);
            }
        }
        Command::Build => {
            let project = Project::load(&cli)?;

            println!("==> Scanning {}", project.source.display());
            let nodes = sidebar::generate_sidebar_with(&project.source, &project.sidebar)?;
            let map = rewrites::generate_rewrites_within(&project.source, &project.site_root)?;

            std::fs::create_dir_all(&project.output)?;
            write_json(&project.output.join("sidebar.json"), &nodes)?;
            write_json(&project.output.join("rewrites.json"), &map)?;

            println!("{}", output::format_summary(&nodes, &map));
            println!("==> Build complete: {}", project.output.display());
        }
        Command::Check => {
            let project = Project::load(&cli)?;
            println!("==> Checking {}", project.source.display());
            let nodes = sidebar::generate_sidebar_with(&project.source, &project.sidebar)?;
            let map = rewrites::generate_rewrites_within(&project.source, &project.site_root)?;
            output::print_sidebar(&nodes);
            println!("{}", output::format_summary(&nodes, &map));
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Paths and options resolved from `docs-nav.toml` and CLI overrides.
struct Project {
    source: PathBuf,
    site_root: PathBuf,
    output: PathBuf,
    sidebar: sidebar::SidebarOptions,
}

impl Project {
    fn load(cli: &Cli) -> Result<Self, config::ConfigError> {
        let nav_config = config::load_config(&cli.project)?;
        Ok(Self {
            source: cli
                .source
                .clone()
                .unwrap_or_else(|| nav_config.source_dir(&cli.project)),
            site_root: nav_config.site_root_dir(&cli.project),
            output: cli
                .output
                .clone()
                .unwrap_or_else(|| nav_config.output_path(&cli.project)),
            sidebar: sidebar::SidebarOptions::from(&nav_config.sidebar),
        })
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
