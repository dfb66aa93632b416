use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mdsite::{Config, SiteError};

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from Markdown files")]
struct Cli {
    /// Site config file
    #[arg(short, long, global = true, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static files and render every content page
    Build {
        /// Directory the configured paths are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
    /// Render a single Markdown file to HTML
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the title a page would get
    Title {
        /// Input Markdown file
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SiteError> {
    match cli.command {
        Command::Build { root } => {
            let config = Config::load(&root.join(&cli.config))?.resolve(&root);
            let report = mdsite::site::build(&config)?;
            println!(
                "Built {} pages ({} static files)",
                report.pages.len(),
                report.files_copied
            );
        }
        Command::Render { input, output } => {
            let markdown = read(&input)?;
            let html = mdsite::render(&markdown).map_err(|source| SiteError::Render {
                path: input.clone(),
                source,
            })?;
            match output {
                Some(output) => fs::write(&output, html).map_err(|source| SiteError::Io {
                    path: output.clone(),
                    source,
                })?,
                None => println!("{html}"),
            }
        }
        Command::Title { input } => {
            let markdown = read(&input)?;
            let title = mdsite::site::extract_title(&markdown)
                .ok_or_else(|| SiteError::MissingTitleHeading {
                    path: input.clone(),
                })?;
            println!("{title}");
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String, SiteError> {
    fs::read_to_string(path).map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
