pub mod agreement;
pub mod batch;
pub mod converter;
pub mod lexicon;
pub mod segmenter;
pub mod triplet;

pub use crate::domain::model::{Amount, ConversionRecord, ConversionStatus, Period, Scale};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
