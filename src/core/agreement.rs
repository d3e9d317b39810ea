use crate::core::lexicon::{scale_noun, CLOSING, EGYPTIAN_POUND, OPENING, ZERO_PHRASE};
use crate::core::segmenter::segment;
use crate::core::triplet;
use crate::domain::model::{Noun, Period, Scale};

/// 數詞與名詞的一致規則：一與二省略數詞，其餘依末兩位選擇名詞形式。
/// 量級名詞與貨幣名詞共用此規則。
pub fn agree(value: u64, noun: &Noun, words: &str) -> String {
    match value {
        1 => noun.singular.to_string(),
        2 => noun.dual.to_string(),
        _ => format!("{} {}", words, noun.form_for_tail(value % 100)),
    }
}

pub(crate) fn render_period(period: Period) -> String {
    match scale_noun(period.scale) {
        Some(noun) => agree(
            u64::from(period.value),
            noun,
            &triplet::render(period.value),
        ),
        None => triplet::render(period.value),
    }
}

/// 組合完整句子；金額上限由 `Converter` 檢查
pub(crate) fn assemble(amount: u64) -> String {
    debug_assert!(amount <= Scale::Billion.max_amount(), "amount above ceiling: {}", amount);

    if amount == 0 {
        return ZERO_PHRASE.to_string();
    }

    let periods: Vec<String> = segment(amount).into_iter().map(render_period).collect();
    let refs: Vec<&str> = periods.iter().map(String::as_str).collect();
    let numeral = triplet::join(&refs);

    format!("{} {} {}", OPENING, agree(amount, &EGYPTIAN_POUND, &numeral), CLOSING)
}
