use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated user. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    age: u32,
    email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// `Name: {name}, Age: {age}, Email: {email}`
    pub fn details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Email: {}",
            self.name, self.age, self.email
        )
    }
}

/// Outcome of one simulated delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayResult {
    pub id: u32,
    pub delay_ms: u64,
    pub message: String,
}

impl DelayResult {
    pub fn new(id: u32, delay_ms: u64) -> Self {
        Self {
            id,
            delay_ms,
            message: format!("Operation {} completed in {}ms", id, delay_ms),
        }
    }
}

impl fmt::Display for DelayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Everything the scenario produced, in the order it was printed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioReport {
    pub users: Vec<String>,
    pub looked_up: Option<Record>,
    pub removed_email: String,
    pub removed_count: usize,
    pub users_after_removal: Vec<String>,
    pub operations: Vec<DelayResult>,
    pub numbers: Vec<i64>,
    pub even_numbers: Vec<i64>,
    pub squared_numbers: Vec<i64>,
    pub sum: i64,
}
