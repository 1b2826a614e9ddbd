use crate::core::batch::{plan_operations, run_concurrently, simulate_delay};
use crate::core::factory::RecordTemplate;
use crate::core::manager::UserManager;
use crate::core::numeric::{filter_even, format_sequence, generate_sequence, square_all, sum};
use crate::core::random::RandomGenerator;
use crate::core::{ConfigProvider, DisplaySink, ScenarioReport};
use crate::utils::error::{Result, RosterError};
use std::io::Write;

/// Runs the full demo: users, async operations, numbers.
pub struct ScenarioRunner<C: ConfigProvider> {
    config: C,
    rng: RandomGenerator,
}

impl<C: ConfigProvider> ScenarioRunner<C> {
    pub fn new(config: C) -> Self {
        let rng = RandomGenerator::from_optional_seed(config.seed());
        Self { config, rng }
    }

    fn record_template(&self) -> RecordTemplate {
        let (min_age, max_age) = self.config.age_range();
        RecordTemplate {
            name_length: self.config.name_length(),
            min_age,
            max_age,
            email_domain: self.config.email_domain().to_string(),
        }
    }

    pub fn populate(&mut self) -> Result<UserManager> {
        let template = self.record_template();
        let mut manager = UserManager::new();
        for _ in 0..self.config.user_count() {
            manager.add(template.generate(&mut self.rng)?);
        }
        tracing::info!("Generated {} users", manager.len());
        Ok(manager)
    }

    pub async fn run<W: Write>(
        &mut self,
        out: &mut W,
        display: Option<&dyn DisplaySink>,
    ) -> Result<ScenarioReport> {
        let mut report = ScenarioReport::default();

        // 使用者
        let mut manager = self.populate()?;
        report.users = manager.list_all();
        writeln!(out, "All Users:")?;
        write_lines(out, &report.users)?;

        let email = manager
            .first()
            .map(|user| user.email().to_string())
            .ok_or_else(|| RosterError::ConfigError {
                message: "no users were generated, nothing to look up".to_string(),
            })?;

        writeln!(out, "\nDetails of user with email {}:", email)?;
        report.looked_up = manager.find_by_email(&email).cloned();
        match &report.looked_up {
            Some(user) => writeln!(out, "{}", user.details())?,
            None => writeln!(out, "User not found")?,
        }

        writeln!(out, "\nRemoving user with email {}...", email)?;
        report.removed_count = manager.remove(&email);
        report.removed_email = email;

        writeln!(out, "\nAll Users after removal:")?;
        report.users_after_removal = manager.list_all();
        write_lines(out, &report.users_after_removal)?;

        // 非同步操作
        writeln!(out, "\nStarting async operations...")?;
        out.flush()?;
        let (min_ms, max_ms) = self.config.delay_range_ms();
        let plan = plan_operations(&mut self.rng, self.config.operation_count(), min_ms, max_ms)?;
        tracing::debug!("Operation plan: {:?}", plan);
        let tasks = plan
            .into_iter()
            .map(|(id, delay_ms)| simulate_delay(id, delay_ms))
            .collect();
        report.operations = run_concurrently(tasks).await?;
        for result in &report.operations {
            writeln!(out, "{}", result)?;
        }

        // 數值處理
        let (min, max) = self.config.number_range();
        report.numbers = generate_sequence(&mut self.rng, self.config.number_count(), min, max)?;
        report.even_numbers = filter_even(&report.numbers);
        report.squared_numbers = square_all(&report.numbers);
        report.sum = sum(&report.numbers);

        writeln!(out, "\nOriginal numbers:")?;
        writeln!(out, "{}", format_sequence(&report.numbers))?;
        writeln!(out, "\nEven numbers:")?;
        writeln!(out, "{}", format_sequence(&report.even_numbers))?;
        writeln!(out, "\nSquared numbers:")?;
        writeln!(out, "{}", format_sequence(&report.squared_numbers))?;
        writeln!(out, "\nSum of numbers: {}", report.sum)?;
        out.flush()?;

        if let Some(sink) = display {
            let body = format!(
                "Users: {}\nRemoved: {}\nOperations: {}\nSum of numbers: {}",
                report.users_after_removal.len(),
                report.removed_email,
                report.operations.len(),
                report.sum
            );
            // 顯示面板失敗只記錄，不中斷
            if let Err(e) = sink.append("Summary", &body) {
                tracing::warn!("Display sink failed: {}", e);
            }
        }

        tracing::info!(
            "Scenario finished: {} users left, {} operations, sum {}",
            report.users_after_removal.len(),
            report.operations.len(),
            report.sum
        );
        Ok(report)
    }
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
