// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use the_workbench::config::{
    load_and_validate_config, parse_config_str, validate_config, ConfigFormat, RuntimeBuilder,
    WorkbenchConfig,
};
use the_workbench::errors::ConfigError;
use the_workbench::exercises::LocalExerciseFactory;
use the_workbench::traits::Outcome;
use tracing_subscriber::EnvFilter;

const DEMO_CONFIG_NAME: &str = "configs/demo.yaml";
const DEMO_CONFIG: &str = include_str!("../configs/demo.yaml");

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("workbench");

    let outcome = match args.get(1).map(String::as_str) {
        Some("--demo-mode") => run_demo().await,
        Some(_) => run_config_files(&args[1..]).await,
        None => {
            eprintln!("Usage: {} <config.yaml|config.toml> [more configs ...]", program);
            eprintln!("       {} --demo-mode", program);
            eprintln!("Example: {} configs/demo.yaml configs/edge-cases.toml", program);
            eprintln!(
                "Exercise kinds: {}",
                LocalExerciseFactory::list_available_kinds().join(", ")
            );
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Run the bundled walkthrough: string puzzles, then data processing
async fn run_demo() -> Result<()> {
    let config = parse_config_str(DEMO_CONFIG, ConfigFormat::Yaml)
        .context("bundled demo config is invalid")?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    run_config(DEMO_CONFIG_NAME, &config).await
}

async fn run_config_files(config_files: &[String]) -> Result<()> {
    let mut failures = 0;

    for (i, config_file) in config_files.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(80));
        }

        let result = match load_and_validate_config(config_file) {
            Ok(config) => run_config(config_file, &config).await,
            Err(e) => Err(e.into()),
        };

        if let Err(e) = result {
            eprintln!("❌ Failed to execute {}: {:#}", config_file, e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} configs failed", failures, config_files.len());
    }
    Ok(())
}

async fn run_config(name: &str, config: &WorkbenchConfig) -> Result<()> {
    let start_time = Instant::now();
    let (exercises, runner) = RuntimeBuilder::from_config(config)?;

    println!("📋 Configuration: {}", name);
    println!("⚙️  Max Concurrency: {}", runner.max_concurrency());
    println!("🛡️  Failure Strategy: {:?}", runner.failure_strategy());
    println!("🧩 Exercises: {}", exercises.ids().collect::<Vec<_>>().join(", "));

    let report = runner
        .run(exercises.clone())
        .await
        .with_context(|| format!("run of {} aborted", name))?;

    println!("\n📊 Results:");
    for (i, result) in report.results.iter().enumerate() {
        let input = exercises
            .get(&result.id)
            .map(|e| e.input.to_string())
            .unwrap_or_default();

        match &result.response.outcome {
            Outcome::Output(value) => {
                println!("  {}. {} ({}) {} → {}", i + 1, result.id, result.kind.as_str(), input, value)
            }
            Outcome::Error(detail) => println!(
                "  {}. {} ({}) {} → error {}: {}",
                i + 1,
                result.id,
                result.kind.as_str(),
                input,
                detail.code,
                detail.message
            ),
        }
    }

    println!(
        "\n✅ {} succeeded, {} failed in {:?}",
        report.succeeded(),
        report.failed(),
        start_time.elapsed()
    );
    Ok(())
}
