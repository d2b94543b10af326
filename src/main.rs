use clap::Parser;
use utm::application::{BuildService, ParseService};
use utm::cli::{format_utm, Cli, Commands};
use utm::domain::Campaign;
use utm::error::UtmError;
use utm::infrastructure::logging;

fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), UtmError> {
    match cli.command {
        Commands::Build { url, campaign } => {
            let utm = BuildService::build(&url, Campaign::from(campaign))?;
            println!("{}", utm);
            Ok(())
        }
        Commands::Parse { url, format } => {
            let utm = ParseService::parse(&url)?;
            print!("{}", format_utm(&utm, format)?);
            Ok(())
        }
    }
}
