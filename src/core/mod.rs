pub mod batch;
pub mod factory;
pub mod manager;
pub mod numeric;
pub mod random;
pub mod scenario;

pub use crate::domain::model::{DelayResult, Record, ScenarioReport};
pub use crate::domain::ports::{ConfigProvider, DisplaySink};
pub use crate::utils::error::Result;
