#[cfg(feature = "cli")]
pub mod cli;
pub mod scenario;

pub use scenario::{ScenarioConfig, ScenarioOverrides};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "user-roster")]
#[command(about = "Generates random users, runs simulated async work and crunches numbers")]
pub struct CliConfig {
    #[arg(long, help = "Scenario TOML file; defaults are used when omitted")]
    pub config: Option<String>,

    #[arg(long, help = "Seed for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, help = "Number of users to generate")]
    pub users: Option<usize>,

    #[arg(long, help = "Length of the random number sequence")]
    pub numbers: Option<usize>,

    #[arg(long, help = "Render a summary panel after the run")]
    pub display: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            seed: self.seed,
            users: self.users,
            numbers: self.numbers,
        }
    }

    /// 載入檔案（若有）並套用命令列覆寫
    pub fn load_scenario(&self) -> crate::Result<ScenarioConfig> {
        let mut scenario = match &self.config {
            Some(path) => {
                tracing::debug!("Loading scenario from {}", path);
                ScenarioConfig::from_file(path)?
            }
            None => ScenarioConfig::default(),
        };
        scenario.apply_overrides(&self.overrides());
        Ok(scenario)
    }
}
