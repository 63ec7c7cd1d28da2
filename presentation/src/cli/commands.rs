//! CLI command definitions

use crate::output::sort::SortOrder;
use clap::{Args, Parser, Subcommand, ValueEnum};
use estate_domain::{ContactForm, DescriptionRequest, FilterCriteria, PropertyType};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for estate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => estate_domain::OutputFormat::Text,
            OutputFormat::Json => estate_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for estate
#[derive(Parser, Debug)]
#[command(name = "estate")]
#[command(author, version, about = "Browse property listings and draft listing copy")]
#[command(long_about = r#"
Estate serves a fixed catalog of property listings and drafts marketing
descriptions through a generative-text backend (Google Gemini).

Configuration files are loaded from (in priority order):
1. ESTATE_* environment variables (e.g. ESTATE_GENERATOR__TIMEOUT_SECS=10)
2. --config <path>     Explicit config file
3. ./estate.toml       Project-level config
4. ~/.config/estate/config.toml   Global config

Example:
  estate list --featured --min-price 1000000
  estate show 1
  estate describe --features "4 beds, pool" --location "Austin, TX"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List properties, optionally filtered
    List(ListArgs),

    /// Show a single property
    Show {
        /// Property id
        id: String,
    },

    /// List the property types present in the catalog
    Types,

    /// Generate a marketing description
    Describe(DescribeArgs),

    /// Send an inquiry about a property
    Inquire(InquireArgs),

    /// Send a general contact message
    Contact(ContactArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only featured properties
    #[arg(long)]
    pub featured: bool,

    /// Property type (villa, house, apartment, townhouse, cottage, penthouse)
    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<PropertyType>,

    /// Minimum price (inclusive)
    #[arg(long, value_name = "N")]
    pub min_price: Option<u64>,

    /// Maximum price (inclusive)
    #[arg(long, value_name = "N")]
    pub max_price: Option<u64>,

    /// Minimum bedrooms
    #[arg(long, value_name = "N")]
    pub beds: Option<u32>,

    /// Minimum bathrooms
    #[arg(long, value_name = "N")]
    pub baths: Option<u32>,

    /// Presentation order
    #[arg(long, value_enum, default_value = "featured")]
    pub sort: SortOrder,
}

impl ListArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            featured: self.featured,
            property_type: self.property_type,
            min_price: self.min_price,
            max_price: self.max_price,
            beds: self.beds,
            baths: self.baths,
        }
    }
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Key features of the property
    #[arg(long, default_value = "")]
    pub features: String,

    /// Where the property is
    #[arg(long, default_value = "")]
    pub location: String,

    /// Proximity to parks
    #[arg(long)]
    pub parks: Option<String>,

    /// Neighborhood quality
    #[arg(long)]
    pub neighborhood: Option<String>,
}

impl DescribeArgs {
    pub fn request(&self) -> DescriptionRequest {
        DescriptionRequest {
            property_features: self.features.clone(),
            property_location: self.location.clone(),
            proximity_to_parks: self.parks.clone(),
            neighborhood_quality: self.neighborhood.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct InquireArgs {
    /// Property the inquiry is about
    pub property_id: String,

    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

impl ContactArgs {
    pub fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}
