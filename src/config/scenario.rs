use crate::core::factory::{
    DEFAULT_EMAIL_DOMAIN, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_NAME_LENGTH,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{
    validate_non_empty_string, validate_ordered_range, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub seed: Option<u64>,
    pub users: UsersConfig,
    pub operations: OperationsConfig,
    pub numbers: NumbersConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    pub count: usize,
    pub name_length: usize,
    pub min_age: i64,
    pub max_age: i64,
    pub email_domain: String,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            count: 10,
            name_length: DEFAULT_NAME_LENGTH,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationsConfig {
    pub count: usize,
    pub min_delay_ms: i64,
    pub max_delay_ms: i64,
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            count: 3,
            min_delay_ms: 500,
            max_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumbersConfig {
    pub count: usize,
    pub min: i64,
    pub max: i64,
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            count: 20,
            min: 1,
            max: 100,
        }
    }
}

/// Command line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ScenarioOverrides {
    pub seed: Option<u64>,
    pub users: Option<usize>,
    pub numbers: Option<usize>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROSTER_SEED})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_overrides(&mut self, overrides: &ScenarioOverrides) {
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(users) = overrides.users {
            self.users.count = users;
        }
        if let Some(numbers) = overrides.numbers {
            self.numbers.count = numbers;
        }
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        // 場景會查詢第一位使用者
        validate_positive_number("users.count", self.users.count, 1)?;
        validate_positive_number("users.name_length", self.users.name_length, 1)?;
        validate_ordered_range("users.age", self.users.min_age, self.users.max_age)?;
        if self.users.min_age < 0 {
            return Err(RosterError::InvalidConfigValueError {
                field: "users.min_age".to_string(),
                value: self.users.min_age.to_string(),
                reason: "Age cannot be negative".to_string(),
            });
        }
        if self.users.max_age > i64::from(u32::MAX) {
            return Err(RosterError::InvalidConfigValueError {
                field: "users.max_age".to_string(),
                value: self.users.max_age.to_string(),
                reason: format!("Age cannot exceed {}", u32::MAX),
            });
        }
        validate_non_empty_string("users.email_domain", &self.users.email_domain)?;

        validate_ordered_range(
            "operations.delay_ms",
            self.operations.min_delay_ms,
            self.operations.max_delay_ms,
        )?;
        if self.operations.min_delay_ms < 0 {
            return Err(RosterError::InvalidConfigValueError {
                field: "operations.min_delay_ms".to_string(),
                value: self.operations.min_delay_ms.to_string(),
                reason: "Delay cannot be negative".to_string(),
            });
        }

        validate_ordered_range("numbers", self.numbers.min, self.numbers.max)?;
        Ok(())
    }
}

impl ConfigProvider for ScenarioConfig {
    fn user_count(&self) -> usize {
        self.users.count
    }

    fn name_length(&self) -> usize {
        self.users.name_length
    }

    fn age_range(&self) -> (i64, i64) {
        (self.users.min_age, self.users.max_age)
    }

    fn email_domain(&self) -> &str {
        &self.users.email_domain
    }

    fn operation_count(&self) -> usize {
        self.operations.count
    }

    fn delay_range_ms(&self) -> (i64, i64) {
        (self.operations.min_delay_ms, self.operations.max_delay_ms)
    }

    fn number_count(&self) -> usize {
        self.numbers.count
    }

    fn number_range(&self) -> (i64, i64) {
        (self.numbers.min, self.numbers.max)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
