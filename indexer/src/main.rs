use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use termindex::{generate_index, Settings, WriteMode};
use time::OffsetDateTime;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "termindex")]
#[command(about = "Build a TF-IDF ranked term index for a markdown vault", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate vault-index.md, or folder-index.md with --folder
    Build {
        /// Vault root directory
        #[arg(long, default_value = ".")]
        vault: PathBuf,
        /// Restrict the index to one folder (relative to the vault root)
        #[arg(long)]
        folder: Option<String>,
        /// Override the maximum number of terms for this run
        #[arg(long)]
        top_n: Option<usize>,
        /// Override the minimum total occurrences for this run
        #[arg(long)]
        min_occurrences: Option<u32>,
        /// Override excluded folders for this run (comma-separated)
        #[arg(long)]
        exclude: Option<String>,
        /// Print the index instead of writing it
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        /// Print the run summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show or change the stored settings of a vault
    Settings {
        #[arg(long, default_value = ".")]
        vault: PathBuf,
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    Show,
    Set {
        #[arg(long)]
        top_n: Option<usize>,
        #[arg(long)]
        min_occurrences: Option<u32>,
        /// Comma-separated folder paths, e.g. "templates, daily"
        #[arg(long)]
        exclude: Option<String>,
    },
}

fn apply_overrides(settings: &mut Settings, top_n: Option<usize>, min_occurrences: Option<u32>, exclude: Option<&str>) {
    if let Some(n) = top_n {
        if !settings.set_top_n(n) {
            tracing::warn!(top_n = n, "ignoring non-positive top-n");
        }
    }
    if let Some(n) = min_occurrences {
        if !settings.set_min_occurrences(n) {
            tracing::warn!(min_occurrences = n, "ignoring non-positive min-occurrences");
        }
    }
    if let Some(raw) = exclude {
        settings.set_excluded_folders(raw);
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { vault, folder, top_n, min_occurrences, exclude, dry_run, json } => {
            let mut settings = Settings::load(&vault)?;
            apply_overrides(&mut settings, top_n, min_occurrences, exclude.as_deref());
            let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
            let mode = if dry_run { WriteMode::DryRun } else { WriteMode::Write };
            let generation = generate_index(&vault, folder.as_deref(), &settings, now, mode)?;

            if dry_run {
                println!("{}", generation.markdown);
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&generation.result)?);
            } else if !dry_run {
                let r = &generation.result;
                println!("Indexed {} terms from {} files into {}", r.term_count, r.file_count, r.output_path);
            }
            Ok(())
        }
        Commands::Settings { vault, action } => {
            let mut settings = Settings::load(&vault)?;
            if let SettingsAction::Set { top_n, min_occurrences, exclude } = action {
                apply_overrides(&mut settings, top_n, min_occurrences, exclude.as_deref());
                settings.save(&vault)?;
                tracing::info!(vault = %vault.display(), "settings saved");
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}
