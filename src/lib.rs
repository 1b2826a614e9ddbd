pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::TerminalDisplaySink, CliConfig};

pub use config::{ScenarioConfig, ScenarioOverrides};
pub use self::core::{
    batch::{run_concurrently, simulate_delay},
    factory::generate_random_record,
    manager::UserManager,
    random::RandomGenerator,
    scenario::ScenarioRunner,
};
pub use domain::model::{DelayResult, Record, ScenarioReport};
pub use domain::ports::{ConfigProvider, DisplaySink};
pub use utils::error::{Result, RosterError};
