use thiserror::Error;

/// 金額過大時回傳的固定句子
pub const TOO_LARGE_SENTINEL: &str = "المبلغ كبير جدًا للتحويل";

/// 無效輸入（負數、非有限值、非數字文字）時回傳的固定句子
pub const INVALID_SENTINEL: &str = "المبلغ غير صالح للتحويل";

#[derive(Error, Debug)]
pub enum TafqeetError {
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Amount {amount} exceeds the supported maximum of {max}")]
    AmountTooLarge { amount: u64, max: u64 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Column '{column}' not found in CSV header")]
    MissingColumnError { column: String },
}

impl TafqeetError {
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// 轉換錯誤對應的阿拉伯文句子；其他錯誤沒有
    pub fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::InvalidAmount { .. } => Some(INVALID_SENTINEL),
            Self::AmountTooLarge { .. } => Some(TOO_LARGE_SENTINEL),
            _ => None,
        }
    }

    pub fn is_conversion_error(&self) -> bool {
        self.sentinel().is_some()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_conversion_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, TafqeetError>;
