//! Scenario replay driver.
//!
//! Loads a persisted scenario document, rebuilds the per-expert matrices from
//! its linguistic label grids, re-runs the full analysis, and prints the
//! derived weights, ranking, agreement, and statistics.

use std::env;
use std::fs;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use pf_mcdm::application::evaluate_matrices;
use pf_mcdm::config::AppConfig;
use pf_mcdm::domain::scenario::Scenario;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: pf-mcdm <scenario.json>");
        return ExitCode::FAILURE;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    let panel = &config.panel;

    let raw = fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&raw)?;
    info!(name = %scenario.name, saved_at = %scenario.saved_at, "loaded scenario");

    let importance = scenario.fahp_matrices(panel.criterion_count())?;
    let suitability =
        scenario.ftopsis_matrices(panel.alternative_count(), panel.criterion_count())?;
    let outcome = evaluate_matrices(&importance, &suitability, &panel.alternatives)?;

    println!("Scenario: {} (saved {})", scenario.name, scenario.saved_at);
    println!();
    println!("Criterion weights:");
    for (label, weight) in panel.criteria.iter().zip(outcome.weights.iter()) {
        println!("  {label:<12} {weight:.4}");
    }

    println!();
    println!("Ranking:");
    println!("  {:<12} {:>8} {:>8} {:>8}", "Alternative", "D+", "D-", "CC");
    for row in &outcome.ranking {
        println!(
            "  {:<12} {:>8.4} {:>8.4} {:>8.4}",
            row.alternative, row.d_plus, row.d_minus, row.closeness
        );
    }

    println!();
    println!(
        "Expert agreement: {} (avg variance {:.4}, score {:.4})",
        outcome.agreement.level, outcome.agreement.avg_variance, outcome.agreement.agreement_score
    );

    let stats = &outcome.statistics;
    println!();
    println!("Statistics:");
    println!("  CC mean {:.4}, std dev {:.4}", stats.closeness_mean, stats.closeness_std_dev);
    println!(
        "  CC min {:.4}, max {:.4}, range {:.4}",
        stats.closeness_min, stats.closeness_max, stats.closeness_range
    );
    println!(
        "  Weight mean {:.4}, min {:.4}, max {:.4}",
        stats.weight_mean, stats.weight_min, stats.weight_max
    );

    if let Some(best) = outcome.best() {
        println!();
        println!("Best alternative: {} (CC = {:.4})", best.alternative, best.closeness);
    }

    Ok(())
}
