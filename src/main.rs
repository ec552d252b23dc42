use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local, Utc};
use clap::Parser;
use plantcare::cli::{Cli, Commands};
use plantcare::config::Config;
use plantcare::models::WeatherSnapshot;
use plantcare::output::Render;
use plantcare::{PlantCareError, WateringAdvisor};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays machine-readable
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let now = resolve_now(cli.at.as_deref(), &config)?;
    let format = cli.format.unwrap_or(config.output.format);

    let snapshot = match &cli.snapshot {
        Some(path) => Some(
            WeatherSnapshot::load(path)
                .with_context(|| format!("failed to load snapshot {}", path.display()))?,
        ),
        None if cli.command.needs_snapshot() => {
            anyhow::bail!("--snapshot is required for this command");
        }
        None => None,
    };

    let advisor = WateringAdvisor::new(config.policy.clone());
    tracing::debug!(
        rules = advisor.scorer().list_rules().len(),
        %now,
        "evaluating snapshot"
    );

    let rendered = match (cli.command, snapshot.as_ref()) {
        (Commands::Policy, _) => config.to_yaml()?,
        (Commands::Check, snapshot) => check_summary(&config, snapshot),
        (Commands::Analyze, Some(s)) => advisor.analyze_current_conditions(s, now).render(format)?,
        (Commands::Windows, Some(s)) => advisor.generate_optimal_windows(s, now).render(format)?,
        (Commands::Schedule, Some(s)) => advisor.generate_weekly_schedule(s, now).render(format)?,
        (Commands::Now, Some(s)) => advisor.is_current_time_optimal(s, now).render(format)?,
        (Commands::Report, Some(s)) => advisor.report(s, now).render(format)?,
        (_, None) => anyhow::bail!("--snapshot is required for this command"),
    };

    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }

    Ok(())
}

/// "Now" is `--at` when given, otherwise the clock in the configured offset
fn resolve_now(at: Option<&str>, config: &Config) -> anyhow::Result<DateTime<FixedOffset>> {
    if let Some(at) = at {
        return DateTime::parse_from_rfc3339(at)
            .map_err(|e| PlantCareError::InvalidTime(format!("'{}': {}", at, e)).into());
    }

    Ok(match config.utc_offset()? {
        Some(offset) => Utc::now().with_timezone(&offset),
        None => Local::now().fixed_offset(),
    })
}

fn check_summary(config: &Config, snapshot: Option<&WeatherSnapshot>) -> String {
    let mut lines = vec![format!(
        "Policy: OK ({} optimal slots, {} avoid ranges)",
        config.policy.optimal_slots.len(),
        config.policy.avoid_ranges.len()
    )];

    match snapshot {
        Some(s) => {
            let hourly = s.hourly_forecast.as_ref().map(Vec::len);
            let daily = s.daily_forecast.as_ref().map(Vec::len);
            lines.push(format!(
                "Snapshot: OK (hourly: {}, daily: {})",
                hourly.map_or("absent".to_string(), |n| format!("{} points", n)),
                daily.map_or("absent".to_string(), |n| format!("{} days", n)),
            ));
        }
        None => lines.push("Snapshot: not provided".to_string()),
    }

    lines.join("\n")
}
