use crate::utils::error::{Result, TafqeetError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 數位分組（每三位一組）的量級
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Unit,
    Thousand,
    #[default]
    Million,
    Billion,
}

impl Scale {
    /// 由高到低
    pub const DESCENDING: [Scale; 4] = [Scale::Billion, Scale::Million, Scale::Thousand, Scale::Unit];

    pub fn base(self) -> u64 {
        match self {
            Scale::Unit => 1,
            Scale::Thousand => 1_000,
            Scale::Million => 1_000_000,
            Scale::Billion => 1_000_000_000,
        }
    }

    /// 以此量級為最高分組時可表示的最大金額
    pub fn max_amount(self) -> u64 {
        self.base() * 1_000 - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Unit => "unit",
            Scale::Thousand => "thousand",
            Scale::Million => "million",
            Scale::Billion => "billion",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub value: u16,
    pub scale: Scale,
}

/// 可數名詞的各種語法形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    /// 數量為一時單獨使用，省略數詞
    pub singular: &'static str,
    pub dual: &'static str,
    /// 3 到 10 的少數複數
    pub plural: &'static str,
    /// 11 到 99 之後的受格單數
    pub accusative: &'static str,
    /// 整百之後的屬格單數
    pub genitive: &'static str,
}

impl Noun {
    /// 依數字末兩位選擇名詞形式
    pub fn form_for_tail(&self, tail: u64) -> &'static str {
        match tail {
            0 => self.genitive,
            3..=10 => self.plural,
            _ => self.accusative,
        }
    }
}

/// 已驗證的非負整數金額；上限由轉換器設定決定
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Amount {
    type Error = TafqeetError;

    fn try_from(value: i64) -> Result<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| TafqeetError::invalid_amount(value.to_string(), "amount is negative"))
    }
}

impl TryFrom<f64> for Amount {
    type Error = TafqeetError;

    /// 小數部分直接捨去
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(TafqeetError::invalid_amount(
                value.to_string(),
                "amount is not a finite number",
            ));
        }
        if value < 0.0 {
            return Err(TafqeetError::invalid_amount(
                value.to_string(),
                "amount is negative",
            ));
        }

        let floored = value.floor();
        // 2^64 本身無法以 u64 表示
        if floored >= u64::MAX as f64 {
            return Err(TafqeetError::AmountTooLarge {
                amount: u64::MAX,
                max: u64::MAX - 1,
            });
        }

        Ok(Self(floored as u64))
    }
}

impl FromStr for Amount {
    type Err = TafqeetError;

    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TafqeetError::invalid_amount(input, "amount is empty"));
        }
        if trimmed.starts_with('-') {
            return Err(TafqeetError::invalid_amount(input, "amount is negative"));
        }

        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TafqeetError::invalid_amount(input, "malformed fractional part"));
            }
        }

        let digits = group_digits(input, whole)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TafqeetError::invalid_amount(
                input,
                "amount must contain only ASCII digits",
            ));
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| TafqeetError::AmountTooLarge {
                amount: u64::MAX,
                max: u64::MAX - 1,
            })
    }
}

/// 允許 "507,923" 或 "507_923" 這類分組寫法：同一種分隔符，
/// 第一組 1 到 3 位，之後每組剛好 3 位
fn group_digits(input: &str, whole: &str) -> Result<String> {
    let Some(separator) = whole.chars().find(|c| matches!(c, ',' | '_')) else {
        return Ok(whole.to_string());
    };

    let mut groups = whole.split(separator);
    let first = groups.next().unwrap_or_default();
    let first_ok = (1..=3).contains(&first.len());
    let rest_ok = groups
        .clone()
        .all(|group| group.len() == 3 && group.bytes().all(|b| b.is_ascii_digit()));

    if !first_ok || !rest_ok {
        return Err(TafqeetError::invalid_amount(input, "misplaced digit separator"));
    }

    Ok(std::iter::once(first).chain(groups).collect())
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatus {
    Ok,
    InvalidAmount,
    AmountTooLarge,
}

/// 單筆轉換結果，供 JSON 與 CSV 輸出使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: String,
    pub amount: Option<u64>,
    pub text: String,
    pub status: ConversionStatus,
}

impl ConversionRecord {
    pub fn is_ok(&self) -> bool {
        self.status == ConversionStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_ceilings() {
        assert_eq!(Scale::Unit.max_amount(), 999);
        assert_eq!(Scale::Thousand.max_amount(), 999_999);
        assert_eq!(Scale::Million.max_amount(), 999_999_999);
        assert_eq!(Scale::Billion.max_amount(), 999_999_999_999);
        assert_eq!(Scale::default(), Scale::Million);
    }

    #[test]
    fn test_parse_plain_and_grouped_amounts() {
        assert_eq!("507923".parse::<Amount>().unwrap().value(), 507_923);
        assert_eq!(" 507,923 ".parse::<Amount>().unwrap().value(), 507_923);
        assert_eq!("1_000".parse::<Amount>().unwrap().value(), 1_000);
        assert_eq!("12,345,678".parse::<Amount>().unwrap().value(), 12_345_678);
        assert_eq!("+42".parse::<Amount>().unwrap().value(), 42);
    }

    #[test]
    fn test_parse_floors_fraction() {
        assert_eq!("12.99".parse::<Amount>().unwrap().value(), 12);
        assert!("12.".parse::<Amount>().is_err());
        assert!("12.5x".parse::<Amount>().is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_text() {
        for input in [
            "", "   ", "-5", "abc", "٥٠٧", "1e5", ",100", "100_", "NaN", "1,,0", "1_,_2", "1,00",
            "1234,567", "1,000_000", "12,3456",
        ] {
            let err = input.parse::<Amount>().unwrap_err();
            assert!(
                matches!(err, TafqeetError::InvalidAmount { .. }),
                "expected invalid amount for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_parse_overflow_is_too_large() {
        let err = "99999999999999999999999".parse::<Amount>().unwrap_err();
        assert!(matches!(err, TafqeetError::AmountTooLarge { .. }));
    }

    #[test]
    fn test_amount_from_f64() {
        assert_eq!(Amount::try_from(507_923.75).unwrap().value(), 507_923);
        assert_eq!(Amount::try_from(0.4).unwrap().value(), 0);
        assert!(Amount::try_from(-1.0).is_err());
        assert!(Amount::try_from(f64::NAN).is_err());
        assert!(Amount::try_from(f64::INFINITY).is_err());
        assert!(matches!(
            Amount::try_from(1e25),
            Err(TafqeetError::AmountTooLarge { .. })
        ));
    }

    #[test]
    fn test_amount_from_i64() {
        assert_eq!(Amount::try_from(7_i64).unwrap().value(), 7);
        assert!(Amount::try_from(-7_i64).is_err());
    }

    #[test]
    fn test_noun_form_for_tail() {
        let noun = Noun {
            singular: "s",
            dual: "d",
            plural: "p",
            accusative: "a",
            genitive: "g",
        };
        assert_eq!(noun.form_for_tail(0), "g");
        assert_eq!(noun.form_for_tail(1), "a");
        assert_eq!(noun.form_for_tail(3), "p");
        assert_eq!(noun.form_for_tail(10), "p");
        assert_eq!(noun.form_for_tail(11), "a");
        assert_eq!(noun.form_for_tail(99), "a");
    }
}
