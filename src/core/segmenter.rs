use crate::domain::model::{Period, Scale};

/// 以 1000 為基數拆分金額，由高到低，略過值為零的分組。
/// 呼叫端須先確認金額不超過上限。
pub fn segment(amount: u64) -> Vec<Period> {
    Scale::DESCENDING
        .iter()
        .filter_map(|&scale| {
            let value = ((amount / scale.base()) % 1_000) as u16;
            (value > 0).then_some(Period { value, scale })
        })
        .collect()
}
