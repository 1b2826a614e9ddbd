use clap::Parser;
use user_roster::utils::error::ErrorSeverity;
use user_roster::utils::{logger, validation::Validate};
use user_roster::{CliConfig, DisplaySink, RosterError, ScenarioRunner, TerminalDisplaySink};

fn exit_code(e: &RosterError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(stage: &str, e: &RosterError) {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting user-roster");
    tracing::debug!("CLI config: {:?}", config);

    let scenario = match config.load_scenario().and_then(|s| s.validate().map(|_| s)) {
        Ok(scenario) => scenario,
        Err(e) => {
            report_failure("Configuration", &e);
            std::process::exit(exit_code(&e).max(1));
        }
    };

    let sink = config.display.then(TerminalDisplaySink::stdout);
    let display = sink.as_ref().map(|s| s as &dyn DisplaySink);

    let mut runner = ScenarioRunner::new(scenario);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = runner.run(&mut out, display).await;
    drop(out);

    match outcome {
        Ok(report) => {
            tracing::debug!("Report: {}", serde_json::to_string(&report)?);
        }
        Err(e) => {
            report_failure("Scenario", &e);
            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
