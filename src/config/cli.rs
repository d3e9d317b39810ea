use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::domain::model::Scale;
use crate::utils::error::{Result, TafqeetError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "tafqeet")]
#[command(about = "Write Egyptian pound amounts out in Arabic words for legal documents")]
pub struct CliConfig {
    /// Amounts to convert; read line by line from stdin when none are given
    pub amounts: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Highest supported period (overrides the config file)
    #[arg(long, value_enum)]
    pub max_scale: Option<Scale>,

    /// CSV file to convert in batch mode
    #[arg(long)]
    pub input: Option<String>,

    /// Where to write the converted CSV (stdout when omitted)
    #[arg(long)]
    pub output: Option<String>,

    /// CSV column holding the amounts (overrides the config file)
    #[arg(long)]
    pub column: Option<String>,

    /// Print one JSON object per amount
    #[arg(long)]
    pub json: bool,

    /// Exit with a non-zero status when any amount cannot be converted
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 命令列參數覆蓋設定檔
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(max_scale) = self.max_scale {
            config.converter.max_scale = max_scale;
            tracing::info!("🔧 Max scale overridden to: {}", max_scale);
        }
        if let Some(column) = &self.column {
            config.batch.column = column.clone();
            tracing::info!("🔧 Batch column overridden to: {}", column);
        }
    }

    pub fn is_batch(&self) -> bool {
        self.input.is_some()
    }
}

impl ConfigProvider for CliConfig {
    fn max_scale(&self) -> Scale {
        self.max_scale.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }
        if let Some(input) = &self.input {
            validation::validate_path("input", input)?;
            if !self.amounts.is_empty() {
                return Err(TafqeetError::ConfigValidationError {
                    field: "input".to_string(),
                    message: "Positional amounts cannot be combined with --input".to_string(),
                });
            }
        }
        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
            if self.input.is_none() {
                return Err(TafqeetError::ConfigValidationError {
                    field: "output".to_string(),
                    message: "--output requires --input".to_string(),
                });
            }
        }
        if let Some(column) = &self.column {
            validation::validate_non_empty_string("column", column)?;
        }
        Ok(())
    }
}
