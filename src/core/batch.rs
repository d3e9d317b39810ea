use crate::core::converter::Converter;
use crate::utils::error::{Result, TafqeetError, TOO_LARGE_SENTINEL};
use std::io::{Read, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
    /// 所有可解析金額的總和；溢位時為 u64::MAX
    pub total_amount: u64,
    pub total_text: String,
}

/// 讀取 CSV，將指定欄位的金額轉成文字並附加為新欄位
#[derive(Debug, Clone)]
pub struct BatchConverter {
    converter: Converter,
    column: String,
    output_column: String,
    delimiter: u8,
}

impl BatchConverter {
    pub fn new(converter: Converter, column: impl Into<String>) -> Self {
        Self {
            converter,
            column: column.into(),
            output_column: "tafqeet".to_string(),
            delimiter: b',',
        }
    }

    pub fn with_output_column(mut self, output_column: impl Into<String>) -> Self {
        self.output_column = output_column.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: W) -> Result<BatchSummary> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(input);
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(output);

        let headers = reader.headers()?.clone();
        let index = headers
            .iter()
            .position(|h| h.trim() == self.column)
            .ok_or_else(|| TafqeetError::MissingColumnError {
                column: self.column.clone(),
            })?;

        let mut out_headers = headers.clone();
        out_headers.push_field(&self.output_column);
        writer.write_record(&out_headers)?;

        let mut summary = BatchSummary::default();
        let mut sum = Some(0u64);

        for (row, result) in reader.records().enumerate() {
            let mut record = result?;
            let input = record.get(index).unwrap_or_default();
            let converted = self.converter.record(input);

            summary.total += 1;
            if let Some(amount) = converted.amount {
                sum = sum.and_then(|acc| acc.checked_add(amount));
            }
            if converted.is_ok() {
                summary.converted += 1;
            } else {
                summary.failed += 1;
                tracing::warn!(
                    "⚠️ Row {}: could not convert '{}' ({:?})",
                    row + 1,
                    input,
                    converted.status
                );
            }

            record.push_field(&converted.text);
            writer.write_record(&record)?;
        }

        writer.flush()?;

        match sum {
            Some(total_amount) => {
                summary.total_amount = total_amount;
                summary.total_text = self.converter.render(total_amount);
            }
            None => {
                tracing::warn!("⚠️ Sum of amounts overflowed");
                summary.total_amount = u64::MAX;
                summary.total_text = TOO_LARGE_SENTINEL.to_string();
            }
        }

        tracing::info!(
            "📊 Batch complete - total: {}, converted: {}, failed: {}, sum: {}",
            summary.total,
            summary.converted,
            summary.failed,
            summary.total_amount
        );

        Ok(summary)
    }
}
