use anyhow::Result;
use clap::{Parser, Subcommand};
use patcher::{flower_root, FileOutcome, FlowerInstall, TemplateState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "flower-i18n-patch")]
#[command(version)]
#[command(about = "Add the language switcher to an installed Flower")]
struct Cli {
    /// Flower package directory (the one containing templates/)
    #[arg(long, env = "FLOWER_PATH", global = true)]
    flower_path: Option<PathBuf>,

    /// Interpreter used to locate Flower when no path is given
    #[arg(long, default_value = "python3", global = true)]
    python: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Back up the templates, tag them, and install the bundle
    Patch {
        /// Built wasm bundle directory (containing web.js)
        #[arg(long, value_name = "DIR")]
        bundle_dir: Option<PathBuf>,
    },
    /// Restore the templates from the backup and remove the bundle
    Unpatch,
    /// Show which templates are patched
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let install = FlowerInstall::new(flower_root(cli.flower_path, &cli.python)?)?;

    match cli.command {
        Commands::Patch { bundle_dir } => {
            let report = install.patch(bundle_dir.as_deref())?;
            let skipped = report
                .files
                .iter()
                .filter(|(_, outcome)| {
                    matches!(outcome, FileOutcome::Missing | FileOutcome::NoAnchor)
                })
                .count();
            if bundle_dir.is_none() {
                tracing::warn!("no --bundle-dir given; copy the wasm bundle to static/i18n/ yourself");
            }
            tracing::info!(skipped, "patching complete, restart Flower to see the language switcher");
        }
        Commands::Unpatch => {
            install.unpatch()?;
            tracing::info!("unpatching complete");
        }
        Commands::Status => {
            for (file, state) in install.status()? {
                let state = match state {
                    TemplateState::Patched => "patched",
                    TemplateState::Unpatched => "not patched",
                    TemplateState::Missing => "missing",
                };
                println!("{file:<14} {state}");
            }
        }
    }

    Ok(())
}
