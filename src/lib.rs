pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::batch::{BatchConverter, BatchSummary};
pub use crate::core::converter::{convert, tafqeet, tafqeet_f64, Converter};
pub use crate::domain::model::{Amount, ConversionRecord, ConversionStatus, Scale};
pub use crate::utils::error::{Result, TafqeetError};
