use crate::core::random::RandomGenerator;
use crate::domain::model::Record;
use crate::utils::error::{Result, RosterError};

pub const DEFAULT_NAME_LENGTH: usize = 7;
pub const DEFAULT_MIN_AGE: i64 = 18;
pub const DEFAULT_MAX_AGE: i64 = 60;
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Shape of the records the factory produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTemplate {
    pub name_length: usize,
    pub min_age: i64,
    pub max_age: i64,
    pub email_domain: String,
}

impl Default for RecordTemplate {
    fn default() -> Self {
        Self {
            name_length: DEFAULT_NAME_LENGTH,
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

impl RecordTemplate {
    pub fn generate(&self, rng: &mut RandomGenerator) -> Result<Record> {
        let name = rng.random_string(self.name_length);
        let age = rng.random_int(self.min_age, self.max_age)?;
        let age = u32::try_from(age).map_err(|_| RosterError::InvalidConfigValueError {
            field: "users.age".to_string(),
            value: age.to_string(),
            reason: format!("Age must be between 0 and {}", u32::MAX),
        })?;
        let email = format!("{}@{}", name.to_lowercase(), self.email_domain);
        Ok(Record::new(name, age, email))
    }
}

/// Name of 7 characters, age in 18..=60, email at example.com.
pub fn generate_random_record(rng: &mut RandomGenerator) -> Record {
    RecordTemplate::default()
        .generate(rng)
        .expect("default record template has a valid age range")
}
