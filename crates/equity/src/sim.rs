// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity simulation.
use log::{debug, info};
use rand::prelude::*;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fmt, panic,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::Instant,
};
use thiserror::Error;

use oddsmith_eval::{Card, Outcome};

use crate::round::{Round, RoundError, blind_trial, check_players};

/// Simulation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The simulation needs at least one run.
    #[error("the number of runs must be greater than zero")]
    NoRuns,
    /// The simulation needs at least one task.
    #[error("the number of tasks must be greater than zero")]
    NoTasks,
    /// A trial failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}

/// Simulation config.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of players including the subject.
    pub players: usize,
    /// Number of trials.
    pub runs: usize,
    /// Number of parallel tasks the trials are split into.
    pub tasks: usize,
    /// Seed for reproducible simulations, each task uses `seed + task_id + 1`.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: 2,
            runs: 100,
            tasks: 1,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Checks the config values.
    pub fn validate(&self) -> Result<(), SimError> {
        check_players(self.players)?;

        if self.runs == 0 {
            return Err(SimError::NoRuns);
        }

        if self.tasks == 0 {
            return Err(SimError::NoTasks);
        }

        Ok(())
    }

    fn rng(&self, stream: u64) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_os_rng(),
        }
    }
}

/// The outcome frequencies of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equity {
    subject: [Card; 2],
    runs: usize,
    counts: BTreeMap<Outcome, u64>,
}

impl Equity {
    fn new(subject: [Card; 2]) -> Self {
        Self {
            subject,
            runs: 0,
            counts: BTreeMap::new(),
        }
    }

    fn add(&mut self, outcome: Outcome) {
        *self.counts.entry(outcome).or_default() += 1;
        self.runs += 1;
    }

    fn merge(&mut self, other: Equity) {
        for (outcome, count) in other.counts {
            *self.counts.entry(outcome).or_default() += count;
        }

        self.runs += other.runs;
    }

    /// The subject hole cards.
    pub fn subject(&self) -> [Card; 2] {
        self.subject
    }

    /// Number of completed trials.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of trials with the given outcome.
    pub fn count(&self, outcome: Outcome) -> u64 {
        self.counts.get(&outcome).copied().unwrap_or_default()
    }

    /// The empirical probability of an outcome, zero if never observed.
    pub fn probability(&self, outcome: Outcome) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.count(outcome) as f64 / self.runs as f64
        }
    }

    /// The probabilities of the observed outcomes.
    ///
    /// Outcomes that never happened are not in the map.
    pub fn probabilities(&self) -> BTreeMap<Outcome, f64> {
        self.counts
            .keys()
            .map(|&outcome| (outcome, self.probability(outcome)))
            .collect()
    }

    /// The share of the pot the subject expects, a tie counts as half a win.
    pub fn equity(&self) -> f64 {
        self.probability(Outcome::Win) + self.probability(Outcome::Tie) / 2.0
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: win {:.2}% tie {:.2}% loss {:.2}% ({} runs)",
            self.subject[0],
            self.subject[1],
            self.probability(Outcome::Win) * 100.0,
            self.probability(Outcome::Tie) * 100.0,
            self.probability(Outcome::Loss) * 100.0,
            self.runs
        )
    }
}

/// Estimates the subject hand equity with repeated blind simulations.
///
/// Trials are independent, each one deals from its own fresh deck, so they
/// are split among `tasks` threads each with its own random generator.
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Creates a simulator, checks the config.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The simulator config.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs all the trials for the subject.
    ///
    /// If `subject` is `None` the subject gets the first hole cards of a
    /// freshly dealt round.
    pub fn run(&self, subject: Option<[Card; 2]>) -> Result<Equity, SimError> {
        self.run_until(subject, &AtomicBool::new(false))
    }

    /// Runs the trials for the subject until completion or until `stop` is
    /// set.
    ///
    /// The stop flag is checked before each trial and the result includes
    /// only the completed trials. The first failed trial aborts the run.
    pub fn run_until(
        &self,
        subject: Option<[Card; 2]>,
        stop: &AtomicBool,
    ) -> Result<Equity, SimError> {
        let config = &self.config;
        let subject = match subject {
            Some(cards) => cards,
            None => Round::new(config.players, &mut config.rng(0))?.hole_cards()?[0],
        };

        info!(
            "Simulating {} {} with {} players, {} runs on {} tasks",
            subject[0], subject[1], config.players, config.runs, config.tasks
        );

        let now = Instant::now();
        let tasks = config.tasks.min(config.runs);

        let equity = if tasks == 1 {
            run_task(config, 0, config.runs, subject, stop)?
        } else {
            let runs_per_task = config.runs / tasks;
            let extra_runs = config.runs % tasks;

            thread::scope(|s| {
                let handles = (0..tasks)
                    .map(|task_id| {
                        let runs = runs_per_task + usize::from(task_id < extra_runs);
                        s.spawn(move || run_task(config, task_id, runs, subject, stop))
                    })
                    .collect::<Vec<_>>();

                let mut equity = Equity::new(subject);
                for handle in handles {
                    match handle.join() {
                        Ok(task_equity) => equity.merge(task_equity?),
                        Err(e) => panic::resume_unwind(e),
                    }
                }

                Ok::<_, SimError>(equity)
            })?
        };

        info!(
            "Simulation done {} runs in {:.3}s",
            equity.runs(),
            now.elapsed().as_secs_f64()
        );

        Ok(equity)
    }
}

/// Runs `runs` trials with the task random generator.
fn run_task(
    config: &SimConfig,
    task_id: usize,
    runs: usize,
    subject: [Card; 2],
    stop: &AtomicBool,
) -> Result<Equity, SimError> {
    let mut rng = config.rng(task_id as u64 + 1);
    let mut equity = Equity::new(subject);

    for _ in 0..runs {
        if stop.load(Ordering::Relaxed) {
            debug!("Task {task_id} stopped after {} runs", equity.runs());
            break;
        }

        let trial = blind_trial(&mut rng, subject, config.players)?;
        equity.add(trial.outcome());
    }

    debug!("Task {task_id} completed {} runs", equity.runs());
    Ok(equity)
}
