use crate::core::lexicon::{CONJUNCTION, HUNDREDS, ONES, TEENS, TENS};

/// 把 0..=999 的數字拆成字詞，由前往後排列。零回傳空序列。
/// 只接受分組後的值，超出範圍由 `segment` 的 `% 1000` 保證不會發生。
pub(crate) fn words(n: u16) -> Vec<&'static str> {
    debug_assert!(n < 1_000, "triplet out of range: {}", n);

    let mut parts = Vec::with_capacity(3);
    let hundreds = usize::from(n / 100);
    let rest = usize::from(n % 100);

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }

    match rest {
        0 => {}
        1..=9 => parts.push(ONES[rest]),
        10..=19 => parts.push(TEENS[rest - 10]),
        _ => {
            let one = rest % 10;
            if one > 0 {
                parts.push(ONES[one]);
            }
            parts.push(TENS[rest / 10]);
        }
    }

    parts
}

/// 以連接詞「و」串接各部分，連接詞緊貼下一個字
pub fn join(parts: &[&str]) -> String {
    let separator = format!(" {}", CONJUNCTION);
    parts.join(separator.as_str())
}

pub(crate) fn render(n: u16) -> String {
    join(&words(n))
}
