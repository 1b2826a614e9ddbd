use crate::utils::error::Result;

/// Scenario parameters, independent of where they were loaded from.
pub trait ConfigProvider: Send + Sync {
    fn user_count(&self) -> usize;
    fn name_length(&self) -> usize;
    fn age_range(&self) -> (i64, i64);
    fn email_domain(&self) -> &str;
    fn operation_count(&self) -> usize;
    fn delay_range_ms(&self) -> (i64, i64);
    fn number_count(&self) -> usize;
    fn number_range(&self) -> (i64, i64);
    fn seed(&self) -> Option<u64>;
}

/// Optional presentation surface. Only invoked when one is supplied.
pub trait DisplaySink: Send + Sync {
    fn append(&self, label: &str, body: &str) -> Result<()>;
}
