use crate::core::agreement::assemble;
use crate::core::ConfigProvider;
use crate::domain::model::{Amount, ConversionRecord, ConversionStatus, Scale};
use crate::utils::error::{Result, TafqeetError, INVALID_SENTINEL};

/// 金額轉阿拉伯文字。無內部狀態，可在任意執行緒同時使用。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    max_scale: Scale,
}

impl Converter {
    pub fn new(max_scale: Scale) -> Self {
        Self { max_scale }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self::new(config.max_scale())
    }

    pub fn max_scale(&self) -> Scale {
        self.max_scale
    }

    pub fn max_amount(&self) -> u64 {
        self.max_scale.max_amount()
    }

    pub fn convert(&self, amount: impl Into<Amount>) -> Result<String> {
        let amount = amount.into().value();
        let max = self.max_amount();

        if amount > max {
            tracing::debug!("Amount {} exceeds ceiling {}", amount, max);
            return Err(TafqeetError::AmountTooLarge { amount, max });
        }

        Ok(assemble(amount))
    }

    /// 解析文字輸入後轉換
    pub fn convert_input(&self, input: &str) -> Result<String> {
        let amount: Amount = input.parse()?;
        self.convert(amount)
    }

    /// 永遠回傳一個句子；錯誤以固定句子代替
    pub fn render(&self, amount: impl Into<Amount>) -> String {
        sentinel_or(self.convert(amount))
    }

    pub fn render_input(&self, input: &str) -> String {
        sentinel_or(self.convert_input(input))
    }

    pub fn render_f64(&self, amount: f64) -> String {
        sentinel_or(Amount::try_from(amount).and_then(|amount| self.convert(amount)))
    }

    pub fn record(&self, input: &str) -> ConversionRecord {
        let amount = input.parse::<Amount>().ok().map(Amount::value);

        match self.convert_input(input) {
            Ok(text) => ConversionRecord {
                input: input.to_string(),
                amount,
                text,
                status: ConversionStatus::Ok,
            },
            Err(e) => {
                tracing::debug!("Conversion of '{}' failed: {}", input, e);
                let status = match e {
                    TafqeetError::AmountTooLarge { .. } => ConversionStatus::AmountTooLarge,
                    _ => ConversionStatus::InvalidAmount,
                };
                ConversionRecord {
                    input: input.to_string(),
                    amount,
                    text: e.sentinel().unwrap_or(INVALID_SENTINEL).to_string(),
                    status,
                }
            }
        }
    }
}

fn sentinel_or(result: Result<String>) -> String {
    result.unwrap_or_else(|e| {
        tracing::debug!("Returning sentinel for conversion error: {}", e);
        e.sentinel().unwrap_or(INVALID_SENTINEL).to_string()
    })
}

/// 以預設上限（999,999,999）轉換
pub fn convert(amount: u64) -> Result<String> {
    Converter::default().convert(amount)
}

pub fn tafqeet(amount: u64) -> String {
    Converter::default().render(amount)
}

/// 小數捨去；NaN、無限大或負數回傳無效句子
pub fn tafqeet_f64(amount: f64) -> String {
    Converter::default().render_f64(amount)
}
