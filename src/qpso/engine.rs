//! MOQPSO engine
//!
//! Multi-objective quantum-behaved particle swarm optimization. Unlike
//! classical PSO there is no velocity: each generation every particle
//! jumps to a new position drawn from a bilateral-exponential
//! distribution centered on a per-dimension attractor between its
//! personal best and a tournament-selected leader. A bounded
//! crowding-distance archive collects the non-dominated particles and is
//! both the guidance set and the returned result.
//!
//! The generation loop is an explicit, fixed protocol; its ordering is
//! load-bearing. Density estimation precedes the position update because
//! leader selection depends on current crowding ranks, and personal-best
//! and archive updates happen only after the mutated swarm has been
//! re-evaluated.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::MoqpsoConfig;
use super::stats::HypervolumeTracker;
use crate::archive::CrowdingDistanceArchive;
use crate::error::MoqpsoError;
use crate::evaluator::Evaluator;
use crate::operator::MutationOperator;
use crate::pareto::{self, Dominance};
use crate::problem::Problem;
use crate::quality::HyperVolume;
use crate::solution::Solution;

/// Contraction-expansion coefficient of the quantum jump.
pub const CONTRACTION_EXPANSION: f64 = 0.95;

/// Floor applied to uniform draws that feed a division or logarithm.
const UNIFORM_FLOOR: f64 = 1e-7;

/// Every particle whose swarm index is a multiple of this is mutated
/// once per generation.
const PERTURBATION_STRIDE: usize = 6;

/// Completion fraction that must elapse before stagnation may stop the
/// run.
const STAGNATION_WINDOW: f64 = 0.01;

/// Lifecycle of a MOQPSO run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// `run()` has not been called yet
    NotStarted,
    /// Swarm construction and archive seeding in progress
    Initializing,
    /// Generation loop in progress
    Running,
    /// Stopped by hypervolume stagnation
    Converged,
    /// Stopped by generation-budget exhaustion
    Exhausted,
}

/// Multi-objective quantum-behaved particle swarm optimizer
///
/// Owns the swarm, the personal-best snapshots, the leader archive, and
/// the run's random generator. All state is run-local: concurrent runs
/// with disjoint engines need no synchronization.
pub struct Moqpso<P: Problem> {
    config: MoqpsoConfig,
    problem: P,
    mutation: Box<dyn MutationOperator>,
    leaders: CrowdingDistanceArchive,
    evaluator: Box<dyn Evaluator>,
    hypervolume: HyperVolume,
    /// Per-dimension jump scale, `(upper - lower) / 5000`, fixed for the
    /// run.
    constrictors: Vec<f64>,
    swarm: Vec<Solution>,
    /// Personal-best snapshot per particle, replaced only by explicit
    /// clones so in-place swarm mutation cannot corrupt it.
    local_best: Vec<Solution>,
    tracker: HypervolumeTracker,
    generations: usize,
    state: RunState,
    rng: StdRng,
}

impl<P: Problem> Moqpso<P> {
    /// Create an engine for one run
    ///
    /// The archive's capacity and the mutation operator's parameters are
    /// fixed by the caller. The reference point must match the problem's
    /// objective dimensionality.
    pub fn new(
        problem: P,
        config: MoqpsoConfig,
        mutation: Box<dyn MutationOperator>,
        leaders: CrowdingDistanceArchive,
        evaluator: Box<dyn Evaluator>,
        reference_point: Vec<f64>,
    ) -> Result<Self, MoqpsoError> {
        config.validate()?;
        if reference_point.len() != problem.number_of_objectives() {
            return Err(MoqpsoError::InvalidConfiguration(format!(
                "reference point has {} dimensions, problem has {} objectives",
                reference_point.len(),
                problem.number_of_objectives()
            )));
        }

        let constrictors = (0..problem.number_of_variables())
            .map(|j| (problem.upper_bound(j) - problem.lower_bound(j)) / 5000.0)
            .collect();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            problem,
            mutation,
            leaders,
            evaluator,
            hypervolume: HyperVolume::new(reference_point),
            constrictors,
            swarm: Vec::new(),
            local_best: Vec::new(),
            tracker: HypervolumeTracker::new(),
            generations: 0,
            state: RunState::NotStarted,
            rng,
        })
    }

    /// Execute the run to completion
    ///
    /// Side effects only; the resulting front is read through
    /// [`get_result`](Self::get_result). A failing evaluation aborts the
    /// run and surfaces the cause unmodified.
    pub fn run(&mut self) -> Result<(), MoqpsoError> {
        self.initialize()?;
        self.state = RunState::Running;

        loop {
            self.leaders.compute_density_estimator();
            let hv = self.hypervolume.compute(self.leaders.solutions());
            self.tracker.record(hv);
            debug!(
                "generation {}: hypervolume {:.6e}, {} leaders",
                self.generations,
                hv,
                self.leaders.len()
            );

            self.update_position();
            self.perturbation();
            self.evaluator
                .evaluate(&mut self.swarm, &self.problem)
                .map_err(MoqpsoError::Evaluation)?;
            self.update_particle_best();
            self.update_leaders()?;

            self.generations += 1;
            if let Some(terminal) = self.stopping_state() {
                self.state = terminal;
                break;
            }
        }

        info!(
            "finished {:?} after {} generations: {} leaders, hypervolume {:.6e}",
            self.state,
            self.generations,
            self.leaders.len(),
            self.tracker.current()
        );
        Ok(())
    }

    /// The leader archive's contents; the algorithm's result once
    /// [`run`](Self::run) has completed
    pub fn get_result(&self) -> &[Solution] {
        self.leaders.solutions()
    }

    /// Recorded hypervolume values, one per completed generation
    pub fn hypervolume_history(&self) -> &[f64] {
        self.tracker.history()
    }

    /// Current lifecycle state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Completed generations. One unit is one whole-swarm generation,
    /// not one objective-function call.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The current swarm, for inspection
    pub fn swarm(&self) -> &[Solution] {
        &self.swarm
    }

    /// The run's configuration
    pub fn config(&self) -> &MoqpsoConfig {
        &self.config
    }

    /// Construct and evaluate the initial swarm, seed the archive and
    /// the personal bests, and reset the generation counter
    fn initialize(&mut self) -> Result<(), MoqpsoError> {
        self.state = RunState::Initializing;
        info!(
            "starting MOQPSO on '{}': swarm {}, budget {} generations, archive capacity {}",
            self.problem.name(),
            self.config.swarm_size,
            self.config.max_evaluations,
            self.leaders.capacity()
        );

        self.generations = 0;
        self.swarm = (0..self.config.swarm_size)
            .map(|_| self.problem.create_solution(&mut self.rng))
            .collect();
        self.evaluator
            .evaluate(&mut self.swarm, &self.problem)
            .map_err(MoqpsoError::Evaluation)?;

        for particle in &self.swarm {
            self.leaders.add(particle.clone());
        }
        self.check_archive_bound()?;
        self.local_best = self.swarm.clone();
        self.leaders.compute_density_estimator();
        Ok(())
    }

    /// Quantum position update over the whole swarm
    ///
    /// For each particle and dimension, the attractor is a psi-weighted
    /// convex combination of the personal-best and a freshly
    /// tournament-selected leader coordinate; the particle then jumps a
    /// bilateral-exponential distance from it and is clamped to the
    /// problem bounds. Leader selection is re-run for every particle.
    fn update_position(&mut self) {
        for i in 0..self.swarm.len() {
            let gbest = self.select_global_best();
            for j in 0..self.problem.number_of_variables() {
                let psi1 = self.rng.gen::<f64>().max(UNIFORM_FLOOR);
                let psi2 = self.rng.gen::<f64>().max(UNIFORM_FLOOR);
                let attractor = (psi1 * self.local_best[i].variables[j]
                    + psi2 * gbest.variables[j])
                    / (psi1 + psi2);

                let u = self.rng.gen::<f64>().max(UNIFORM_FLOOR);
                let spread =
                    (self.swarm[i].variables[j] - attractor).abs() / CONTRACTION_EXPANSION;
                let jump = self.constrictors[j] * spread * (1.0 / u).ln();

                let position = if self.rng.gen::<f64>() > 0.5 {
                    attractor - jump
                } else {
                    attractor + jump
                };
                self.swarm[i].variables[j] =
                    position.clamp(self.problem.lower_bound(j), self.problem.upper_bound(j));
            }
        }
    }

    /// Binary tournament over two distinct leaders by crowding rank
    fn select_global_best(&mut self) -> Solution {
        let leaders = self.leaders.solutions();
        if leaders.len() > 2 {
            let picked = rand::seq::index::sample(&mut self.rng, leaders.len(), 2);
            let a = &leaders[picked.index(0)];
            let b = &leaders[picked.index(1)];
            if self.leaders.compare(a, b) != std::cmp::Ordering::Greater {
                a.clone()
            } else {
                b.clone()
            }
        } else {
            // Archive is seeded from the initial swarm before the first
            // tournament and can never empty afterwards.
            leaders
                .first()
                .expect("leader archive is seeded during initialization")
                .clone()
        }
    }

    /// Mutate every sixth particle in place
    fn perturbation(&mut self) {
        for i in (0..self.swarm.len()).step_by(PERTURBATION_STRIDE) {
            self.mutation
                .execute(&mut self.swarm[i], &self.problem, &mut self.rng);
        }
    }

    /// Refresh personal bests against the re-evaluated swarm
    ///
    /// A particle's snapshot is replaced unless the stored best strictly
    /// dominates it, so non-dominated "sideways" moves also promote.
    /// This leniency is the observed behavior of the algorithm and is
    /// kept as-is; it can drift a personal best away from its true
    /// optimum.
    fn update_particle_best(&mut self) {
        for (particle, best) in self.swarm.iter().zip(self.local_best.iter_mut()) {
            if pareto::compare(particle, best) != Dominance::SecondDominates {
                *best = particle.clone();
            }
        }
    }

    /// Offer a copy of every particle to the leader archive
    fn update_leaders(&mut self) -> Result<(), MoqpsoError> {
        for particle in &self.swarm {
            self.leaders.add(particle.clone());
        }
        self.check_archive_bound()
    }

    fn check_archive_bound(&self) -> Result<(), MoqpsoError> {
        if self.leaders.len() > self.leaders.capacity() {
            return Err(MoqpsoError::ArchiveCapacityViolation {
                size: self.leaders.len(),
                capacity: self.leaders.capacity(),
            });
        }
        Ok(())
    }

    /// Evaluate the stopping predicate
    ///
    /// Budget exhaustion and hypervolume stagnation are independent;
    /// either suffices. The stagnation check advances its baseline on
    /// every call, so it compares consecutive generations only.
    fn stopping_state(&mut self) -> Option<RunState> {
        let exhausted = self.generations >= self.config.max_evaluations;
        let completion = self.generations as f64 / self.config.max_evaluations as f64;
        let stagnated = self.tracker.check_stagnation();

        if exhausted {
            Some(RunState::Exhausted)
        } else if completion > STAGNATION_WINDOW && stagnated {
            Some(RunState::Converged)
        } else {
            None
        }
    }
}
