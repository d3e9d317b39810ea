use crate::core::batch::BatchConverter;
use crate::core::converter::Converter;
use crate::core::ConfigProvider;
use crate::domain::model::Scale;
use crate::utils::error::{Result, TafqeetError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub converter: ConverterConfig,
    pub batch: BatchConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub max_scale: Scale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub column: String,
    pub output_column: String,
    pub delimiter: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            column: "value".to_string(),
            output_column: "tafqeet".to_string(),
            delimiter: ",".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TafqeetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TafqeetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TAFQEET_MAX_SCALE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TafqeetError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("batch.column", &self.batch.column)?;
        validation::validate_non_empty_string("batch.output_column", &self.batch.output_column)?;
        validation::validate_delimiter("batch.delimiter", &self.batch.delimiter)?;
        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }

    pub fn converter(&self) -> Converter {
        Converter::from_config(self)
    }

    pub fn batch_converter(&self) -> Result<BatchConverter> {
        let delimiter = validation::validate_delimiter("batch.delimiter", &self.batch.delimiter)?;

        Ok(BatchConverter::new(self.converter(), self.batch.column.clone())
            .with_output_column(self.batch.output_column.clone())
            .with_delimiter(delimiter))
    }
}

impl ConfigProvider for TomlConfig {
    fn max_scale(&self) -> Scale {
        self.converter.max_scale
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
