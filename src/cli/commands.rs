//! CLI command definitions

use crate::domain::{Campaign, UtmParameter};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "utm")]
#[command(about = "Build and parse UTM-tagged URLs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag an address with campaign attributes
    Build {
        /// Base address (absolute http/https URL)
        url: String,

        #[command(flatten)]
        campaign: CampaignArgs,
    },

    /// Recover address and campaign from a UTM URL
    Parse {
        /// Previously built UTM URL
        url: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Campaign attributes accepted by `build`
#[derive(Args, Debug, Default)]
pub struct CampaignArgs {
    /// utm_source (e.g., newsletter, google)
    #[arg(long)]
    pub source: Option<String>,

    /// utm_medium (e.g., email, cpc)
    #[arg(long)]
    pub medium: Option<String>,

    /// utm_campaign
    #[arg(long = "campaign", value_name = "NAME")]
    pub name: Option<String>,

    /// utm_id
    #[arg(long)]
    pub id: Option<String>,

    /// utm_term
    #[arg(long)]
    pub term: Option<String>,

    /// utm_content
    #[arg(long)]
    pub content: Option<String>,
}

impl From<CampaignArgs> for Campaign {
    fn from(args: CampaignArgs) -> Self {
        Campaign::default()
            .with(UtmParameter::Source, args.source)
            .with(UtmParameter::Medium, args.medium)
            .with(UtmParameter::Name, args.name)
            .with(UtmParameter::Id, args.id)
            .with(UtmParameter::Term, args.term)
            .with(UtmParameter::Content, args.content)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned key/value lines
    #[default]
    Text,
    /// TOML document
    Toml,
}
