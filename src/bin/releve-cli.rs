#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use releve::{
    io,
    pager::{self, Pager},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de validation/synchronisation de planning d'astreinte
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Vérifier un fichier de planning
    Check {
        /// Fichier YAML de planning
        file: String,
    },

    /// Relire puis réécrire un planning sous forme canonique
    Fmt {
        file: String,
        /// Destination (par défaut : réécrit le fichier d'entrée)
        #[arg(long)]
        out: Option<String>,
    },

    /// Exporter les créneaux en CSV
    Export {
        file: String,
        #[arg(long)]
        csv: String,
    },

    /// Appliquer le planning au service de pagination (PD_TOKEN requis)
    Sync {
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    match cli.cmd {
        Commands::Check { file } => {
            io::read(&file).with_context(|| file.clone())?;
            println!("{file} is ok");
        }
        Commands::Fmt { file, out } => {
            let schedule = io::read(&file)?;
            let dest = out.unwrap_or_else(|| file.clone());
            io::write(&dest, &schedule)?;
            println!("wrote {dest}");
        }
        Commands::Export { file, csv } => {
            let schedule = io::read(&file)?;
            io::export_shifts_csv(&csv, &schedule)?;
            println!("wrote {csv}");
        }
        Commands::Sync { file } => {
            let schedule = io::read(&file)?;
            let mut client = pager::new()?;
            client.sync(&schedule.id, &schedule.shifts)?;
            println!("synced {}", schedule.id);
        }
    }

    Ok(())
}
