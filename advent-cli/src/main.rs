//! advent - command-line interface for running the daily puzzle solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::RegistryBuilder;
use aggregator::{ResultAggregator, ResultKey};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(config::log_level(args.verbose))
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        log::error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    log::debug!("{config:?}");

    let registry = build_registry(&config.tags)?;
    if config.list {
        output::print_listing(&registry);
        return Ok(());
    }

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        log::warn!(
            "missing {} input file(s) under {}",
            missing.len(),
            config.input_dir.display()
        );
        for (year, day) in &missing {
            log::info!("  - {}/day{:02}.txt", year, day);
        }
    }

    run_executor(executor, ResultKey::expected(&work_items), config.quiet)
}

/// Run the executor and print results as they become ready
fn run_executor(
    executor: Executor,
    expected_keys: Vec<ResultKey>,
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} part(s)...", expected_keys.len());
    }

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // only non-empty if something was never sent
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        log::warn!(
            "{} expected result(s) were never received",
            aggregator.outstanding()
        );
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))?
        .map_err(CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<advent_solver::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    let registry = builder.build();
    log::info!("{} solver(s) registered", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_puzzles_are_linked() {
        let registry = build_registry(&[]).unwrap();
        assert_eq!(registry.len(), 17 + 12 + 1);
        assert!(registry.contains(2023, 17));
        assert!(registry.contains(2024, 12));
        assert!(registry.contains(2025, 1));
        assert!(registry.iter_info().all(|info| info.parts == 2));
    }

    #[test]
    fn test_tag_filter_requires_every_tag() {
        let grid_2024 = build_registry(&["2024".to_string(), "grid".to_string()]).unwrap();
        assert!(!grid_2024.is_empty());
        for info in grid_2024.iter_info() {
            assert_eq!(info.year, 2024);
            assert!(grid_2024.tags(info.year, info.day).contains(&"grid"));
        }

        let none = build_registry(&["2023".to_string(), "2024".to_string()]).unwrap();
        assert!(none.is_empty());
    }
}
