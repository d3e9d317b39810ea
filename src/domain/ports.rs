use crate::domain::model::Scale;

pub trait ConfigProvider: Send + Sync {
    /// 允許的最高量級，決定可轉換的金額上限
    fn max_scale(&self) -> Scale;
}
