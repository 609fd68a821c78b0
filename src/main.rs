use clap::Parser;
use provtag::cli::{format_lines, format_merged_tag, Cli, Commands};
use provtag::domain::dates::{dates_to_str, strs_to_date};
use provtag::error::ProvenanceError;
use provtag::infrastructure::Manifest;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    // stdout carries converted values only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ProvenanceError> {
    match cli.command {
        Commands::DateToStr { ordinals } => {
            let dates = dates_to_str(&ordinals)?;
            print!("{}", format_lines(&dates));
            Ok(())
        }
        Commands::StrToDate { dates } => {
            let ordinals = strs_to_date(&dates)?;
            print!("{}", format_lines(&ordinals));
            Ok(())
        }
        Commands::Merge { manifest, output } => {
            let merged = Manifest::load_from_path(&manifest)?.merged()?;
            println!("{}", format_merged_tag(&merged));

            if let Some(path) = output {
                Manifest::new(vec![merged]).save_to_path(&path)?;
                info!(path = %path.display(), "Wrote merged manifest");
            }
            Ok(())
        }
    }
}
