//! FIRE Engine CLI
//!
//! Command-line interface for computing FIRE metrics and net-worth
//! projections from a tracker store snapshot

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fire_engine::metrics::{progress_percent, FireMetrics};
use fire_engine::projection::{ProjectionConfig, ProjectionEngine};
use fire_engine::records::{aggregate, JsonStore, RecordStore};
use fire_engine::scenario::ScenarioRunner;
use std::fs::File;
use std::io::Write;

#[derive(Parser)]
#[command(name = "fire_engine", version, about = "FIRE metrics and net-worth projections")]
struct Cli {
    /// Path to a tracker store snapshot (JSON)
    #[arg(long, global = true, default_value = "fire-data.json")]
    data: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print FIRE metrics and milestone progress
    Metrics,

    /// Project net worth year by year
    Project {
        /// Projection horizon in years
        #[arg(long, default_value_t = 40)]
        years: u32,

        /// Override the retirement age from settings
        #[arg(long)]
        retirement_age: Option<u8>,

        /// Override the annual withdrawal rate from settings (fractional)
        #[arg(long)]
        withdrawal_rate: Option<f64>,

        /// Write the full series to a CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Sweep projections over a grid of expected-return rates
    Sweep {
        /// Annual return rates, fractional (e.g. 0.05,0.07,0.09)
        #[arg(long, value_delimiter = ',', default_values_t = [0.05, 0.07, 0.09])]
        rates: Vec<f64>,

        /// Projection horizon in years
        #[arg(long, default_value_t = 40)]
        years: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = JsonStore::load(&cli.data)
        .with_context(|| format!("loading store snapshot from {}", cli.data))?;

    match cli.command {
        Command::Metrics => run_metrics(&store),
        Command::Project {
            years,
            retirement_age,
            withdrawal_rate,
            csv,
        } => run_project(&store, years, retirement_age, withdrawal_rate, csv.as_deref()),
        Command::Sweep { rates, years } => run_sweep(&store, &rates, years),
    }
}

/// Aggregated scalars every command starts from
fn scalars(store: &JsonStore) -> (f64, f64) {
    let settings = store.settings();
    let net_worth = aggregate::net_worth(
        store.assets(),
        store.liabilities(),
        &settings.currency,
        settings.usd_to_nzd_rate,
    );
    let monthly = aggregate::net_monthly_contribution(store.assets(), store.liabilities());
    (net_worth, monthly)
}

fn run_metrics(store: &JsonStore) -> Result<()> {
    let settings = store.settings();
    let (net_worth, monthly) = scalars(store);
    let metrics = FireMetrics::calculate(net_worth, monthly, settings, store.history());

    println!("FIRE Metrics ({})", settings.currency);
    println!("{}", "-".repeat(46));
    println!("{:<28} {:>16.0}", "Current net worth", metrics.current_net_worth);
    println!("{:<28} {:>16.0}", "FIRE number", metrics.fire_number);
    println!("{:<28} {:>16.0}", "Lean FIRE", metrics.lean_fire_number);
    println!("{:<28} {:>16.0}", "Fat FIRE", metrics.fat_fire_number);
    println!("{:<28} {:>16.0}", "Coast FIRE", metrics.coast_fire_number);
    println!("{:<28} {:>15.1}%", "Progress", metrics.progress_percentage);

    if metrics.years_to_fire.is_finite() {
        println!("{:<28} {:>16.1}", "Years to FIRE", metrics.years_to_fire);
    } else {
        println!("{:<28} {:>16}", "Years to FIRE", "never");
    }
    println!(
        "{:<28} {:>16.0}",
        "Contribution needed (/mo)", metrics.monthly_contribution_needed
    );
    println!("{:<28} {:>16.0}", "Current contribution (/mo)", monthly);

    if !store.milestones().is_empty() {
        let baseline = aggregate::baseline_net_worth(store.history());
        println!("\nMilestones:");
        for milestone in store.milestones() {
            let pct = progress_percent(net_worth, milestone.target_amount, baseline);
            println!(
                "  {:<24} target {:>12.0}  {:>5.1}%{}",
                milestone.name,
                milestone.target_amount,
                pct,
                if milestone.achieved { "  (achieved)" } else { "" },
            );
        }
    }

    Ok(())
}

fn run_project(
    store: &JsonStore,
    years: u32,
    retirement_age: Option<u8>,
    withdrawal_rate: Option<f64>,
    csv: Option<&str>,
) -> Result<()> {
    let settings = store.settings();
    let (net_worth, monthly) = scalars(store);

    let config = ProjectionConfig {
        years,
        retirement_age: Some(retirement_age.unwrap_or(settings.retirement_age)),
        withdrawal_rate: Some(withdrawal_rate.unwrap_or(settings.withdrawal_rate)),
        ..Default::default()
    };
    let engine = ProjectionEngine::new(config);
    let projection = engine.project(net_worth, monthly, settings.expected_return, settings.current_age);

    println!("Projection ({} years):", years);
    println!("{:>5} {:>4} {:>14} {:>14} {:>14}", "Year", "Age", "Value", "Contrib", "Growth");
    println!("{}", "-".repeat(56));
    for point in &projection.points {
        println!(
            "{:>5} {:>4} {:>14.0} {:>14.0} {:>14.0}",
            point.year, point.age, point.value, point.contributions, point.growth
        );
    }

    let summary = projection.summary();
    println!("\nSummary:");
    println!("  Final value: {:.0}", summary.final_value);
    println!("  Total contributions: {:.0}", summary.total_contributions);
    println!("  Total growth: {:.0}", summary.total_growth);

    if let Some(path) = csv {
        let mut file = File::create(path).with_context(|| format!("creating {path}"))?;
        writeln!(file, "Year,Age,Value,Contributions,Growth")?;
        for point in &projection.points {
            writeln!(
                file,
                "{},{},{:.0},{:.0},{:.0}",
                point.year, point.age, point.value, point.contributions, point.growth
            )?;
        }
        println!("\nFull series written to: {path}");
    }

    Ok(())
}

fn run_sweep(store: &JsonStore, rates: &[f64], years: u32) -> Result<()> {
    let settings = store.settings();
    let (net_worth, monthly) = scalars(store);

    let runner = ScenarioRunner::with_config(ProjectionConfig {
        years,
        retirement_age: Some(settings.retirement_age),
        withdrawal_rate: Some(settings.withdrawal_rate),
        ..Default::default()
    });
    let results = runner.run_return_sweep(net_worth, monthly, rates, settings.current_age);

    println!("Return sweep ({} years):", years);
    println!("{:>8} {:>16} {:>16}", "Return", "Final value", "Growth");
    println!("{}", "-".repeat(42));
    for (rate, projection) in rates.iter().zip(&results) {
        let summary = projection.summary();
        println!(
            "{:>7.2}% {:>16.0} {:>16.0}",
            rate * 100.0,
            summary.final_value,
            summary.total_growth
        );
    }

    Ok(())
}
