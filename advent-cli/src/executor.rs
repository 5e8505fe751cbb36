//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared because one parse failure is reported for every part
    pub answer: Result<String, Arc<SolverError>>,
    pub solve_duration: TimeDelta,
    /// `None` when the input never parsed
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Year/day pairs of `work_items` whose input file is absent
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8)> {
        let inputs = &self.sync_executor_config.inputs;
        work_items
            .iter()
            .filter(|w| !inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work_item(&work, &tx, cfg) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // work items arrive in (year, day) order, so each year is one run
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Part additionally splits the parts of one item, see run_work_item
            ParallelizeBy::Day | ParallelizeBy::Part => {
                let singles = work_items.into_iter().map(|w| vec![w]).collect();
                self.execute_parallel_grouped(singles, &tx)
            }
        }
    }

    /// Execute groups in parallel; items within a group run in order
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let cfg = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map_with(tx.clone(), |tx, items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work_item(&work, tx, cfg) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| match (err1, err2) {
                    (Some(e1), e2) => Some(ArcExecutorError::combine_opt(e2, e1)),
                    (None, e2) => e2,
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

/// Error result for one part of a puzzle that could not be started
fn error_result(year: u16, day: u8, part: u8, error: Arc<SolverError>) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
}

/// Report `error` for every requested part of `work`
fn send_errors(
    work: &WorkItem,
    error: SolverError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    let error = Arc::new(error);
    for part in work.parts.clone() {
        send(tx, error_result(work.year, work.day, part, Arc::clone(&error)))?;
    }
    Ok(())
}

/// Read the input of one work item and run its parts
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match cfg.inputs.get(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            log::warn!("{}/{:02}: {e}", work.year, work.day);
            let error = SolverError::Parse(ParseError::Unavailable(e.to_string()));
            return send_errors(work, error, tx);
        }
    };

    if matches!(cfg.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, &cfg.registry)
    } else {
        run_parts_sequential(work, &input, tx, &cfg.registry)
    }
}

/// Parse once and solve the parts in order, sharing the parsed input
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let mut solver = match registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => return send_errors(work, e, tx),
    };
    for part in work.parts.clone() {
        send(tx, solve_part(part, &mut *solver))?;
    }
    Ok(())
}

/// Solve every part on its own parsed copy of the input, buffering results
/// so they are emitted in part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    registry: &SolverRegistry,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);
    let mut results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(|part| match registry.create_solver(year, day, input) {
            Ok(mut solver) => solve_part(part, &mut *solver),
            Err(e) => error_result(year, day, part, Arc::new(e)),
        })
        .collect();
    results.sort_by_key(|r| r.part);

    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

/// Solve a single part
fn solve_part(part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (Err(Arc::new(SolverError::from(e))), TimeDelta::zero()),
    };

    SolverResult {
        year: solver.year(),
        day: solver.day(),
        part,
        answer,
        solve_duration,
        parse_duration: Some(solver.parse_duration()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::RegistryBuilder;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config(input_dir: PathBuf, parallelize_by: ParallelizeBy) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: vec![],
            input_dir,
            thread_count: 2,
            parallelize_by,
            quiet: true,
            list: false,
            log_level: log::LevelFilter::Warn,
        }
    }

    fn registry() -> SolverRegistry {
        RegistryBuilder::new()
            .register_plugins(|p| (p.year, p.day) == (2024, 1) || (p.year, p.day) == (2024, 3))
            .unwrap()
            .build()
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    #[test]
    fn test_filter_parts() {
        assert_eq!(filter_parts(None, 2), 1..=2);
        assert_eq!(filter_parts(Some(2), 2), 2..=2);
        assert!(filter_parts(Some(2), 1).is_empty());
    }

    #[test]
    fn test_collect_work_items_applies_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path().to_path_buf(), ParallelizeBy::Day);
        cfg.day_filter = Some(3);
        cfg.part_filter = Some(2);
        let executor = Executor::new(registry(), &cfg).unwrap();

        let items = executor.collect_work_items();
        assert_eq!(
            items,
            vec![WorkItem {
                year: 2024,
                day: 3,
                parts: 2..=2
            }]
        );
        assert_eq!(executor.missing_inputs(&items), vec![(2024, 3)]);
    }

    #[test]
    fn test_missing_input_yields_error_per_part() {
        let temp = TempDir::new().unwrap();
        let year_dir = temp.path().join("2024");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day01.txt"), "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
            .unwrap();

        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
            ParallelizeBy::Part,
        ] {
            let executor =
                Executor::new(registry(), &config(temp.path().to_path_buf(), mode)).unwrap();
            let results = run(&executor);

            let summary: Vec<_> = results
                .iter()
                .map(|r| (r.day, r.part, r.answer.as_ref().ok().cloned()))
                .collect();
            assert_eq!(
                summary,
                vec![
                    (1, 1, Some("11".to_string())),
                    (1, 2, Some("31".to_string())),
                    (3, 1, None),
                    (3, 2, None),
                ],
                "{mode:?}"
            );
            let Err(missing) = &results[2].answer else {
                panic!("2024/03 has no input");
            };
            assert!(matches!(
                **missing,
                SolverError::Parse(ParseError::Unavailable(_))
            ));
            assert!(results[0].parse_duration.is_some());
            assert!(results[3].parse_duration.is_none());
        }
    }

    #[test]
    fn test_parse_failure_is_reported_for_each_part() {
        let temp = TempDir::new().unwrap();
        let year_dir = temp.path().join("2024");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day01.txt"), "1 2\nthree 4\n").unwrap();

        let mut cfg = config(temp.path().to_path_buf(), ParallelizeBy::Part);
        cfg.day_filter = Some(1);
        let executor = Executor::new(registry(), &cfg).unwrap();
        let results = run(&executor);

        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(err.to_string().contains("line 2"), "{err}");
        }
    }
}
