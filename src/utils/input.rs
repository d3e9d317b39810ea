use std::io::{self, BufRead};

/// 逐行讀取金額；非 UTF-8 的行以替代字元保留，交給 `Amount::from_str` 判定為無效，
/// 而不是中斷整個輸入。空白行略過。
pub fn amount_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string()))
        .filter(|line| !matches!(line, Ok(text) if text.is_empty()))
}
