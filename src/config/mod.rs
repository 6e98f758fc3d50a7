pub mod session_config;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "interactive-page")]
#[command(about = "Validate contact form input and score passwords")]
pub struct CliConfig {
    /// Page configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Field value as key=value, e.g. --field email=ada@example.com
    #[arg(short = 'f', long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// TOML file of field values; --field entries override it
    #[arg(short, long)]
    pub input: Option<String>,

    /// Only score this password and print its strength
    #[arg(long)]
    pub strength: Option<String>,

    /// Parse numeric fields like the browser's parseInt
    #[arg(long)]
    pub lenient_numbers: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            crate::utils::validation::validate_path("config", config)?;
        }
        if let Some(input) = &self.input {
            crate::utils::validation::validate_path("input", input)?;
        }
        for pair in &self.fields {
            let key = pair.split_once('=').map(|(key, _)| key).unwrap_or(pair);
            key.trim().parse::<crate::domain::model::FieldId>()?;
        }
        Ok(())
    }
}
