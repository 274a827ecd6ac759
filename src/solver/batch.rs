//! Independent runs: method comparison and convergence studies
//!
//! A single trajectory is computed strictly left to right, but separate runs
//! share nothing. With the `parallel` feature they are spread over the Rayon
//! pool once the combined work exceeds
//! [`parallel_threshold`](crate::solver::parallel_threshold). Results always
//! come back in input order and match the sequential path bit for bit.

use crate::solver::{Method, Scenario, Solver, SolverConfiguration, SolverError, Trajectory};

#[cfg(feature = "parallel")]
use crate::solver::parallel_threshold;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Dispatch
// =================================================================================================

/// Apply `run` to every item, sequentially or on the Rayon pool depending on
/// `work` (total grid points over all runs)
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn run_each<T, R, F>(items: &[T], work: usize, run: F) -> Result<Vec<R>, SolverError>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> Result<R, SolverError> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    if work > parallel_threshold() {
        log::debug!("dispatching {} runs ({} points) to rayon", items.len(), work);
        return items.par_iter().map(&run).collect();
    }

    items.iter().map(run).collect()
}

// =================================================================================================
// Method comparison
// =================================================================================================

/// Solve one scenario with several methods on the same grid
///
/// The configuration is validated once, up front, so an invalid grid is
/// reported before any run starts.
///
/// # Example
///
/// ```rust
/// use ode_rs::models::CubicForcing;
/// use ode_rs::solver::{solve_all, Method, Scenario, SolverConfiguration};
///
/// let scenario = Scenario::new(Box::new(CubicForcing::new()), 0.0);
/// let config = SolverConfiguration::time_evolution(0.0, 10.0, 20);
///
/// let runs = solve_all(&Method::ALL, &scenario, &config)?;
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs[0].0, Method::Euler);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
pub fn solve_all(
    methods: &[Method],
    scenario: &Scenario,
    config: &SolverConfiguration,
) -> Result<Vec<(Method, Trajectory)>, SolverError> {
    config.validate()?;

    let work = methods.len().saturating_mul(config.points);

    run_each(methods, work, |&method| {
        method
            .solver()
            .solve(scenario, config)
            .map(|trajectory| (method, trajectory))
    })
}

// =================================================================================================
// Convergence study
// =================================================================================================

/// One resolution of a convergence study
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceLevel {
    /// Number of grid points
    pub points: usize,

    /// Step size h
    pub step: f64,

    /// Computed x(t_f)
    pub final_state: f64,

    /// |x(t_f) - exact|
    pub error: f64,
}

/// Final-value errors of one solver over successively halved step sizes
///
/// Level `k` uses the configuration refined `k` times (N, 2N-1, 4N-3, ...),
/// so every level shares the sample times of the previous one.
///
/// # Example
///
/// ```rust
/// use ode_rs::models::ExponentialDecay;
/// use ode_rs::solver::{ConvergenceStudy, RK2Solver, Scenario, SolverConfiguration};
///
/// let scenario = Scenario::new(Box::new(ExponentialDecay::new(1.0)), 1.0);
/// let config = SolverConfiguration::time_evolution(0.0, 1.0, 11);
///
/// let study = ConvergenceStudy::run(&RK2Solver, &scenario, &config, 3, (-1.0_f64).exp())?;
/// assert_eq!(study.levels.len(), 4);
/// assert!((study.mean_order().unwrap() - 2.0).abs() < 0.1);
/// # Ok::<(), ode_rs::solver::SolverError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceStudy {
    /// Name of the solver under study
    pub solver: &'static str,

    /// Order the solver claims
    pub expected_order: u32,

    /// Coarsest first
    pub levels: Vec<ConvergenceLevel>,
}

impl ConvergenceStudy {
    /// Solve at `refinements + 1` resolutions and compare `x(t_f)` with
    /// `exact_final`
    pub fn run(
        solver: &dyn Solver,
        scenario: &Scenario,
        config: &SolverConfiguration,
        refinements: usize,
        exact_final: f64,
    ) -> Result<Self, SolverError> {
        config.validate()?;

        let configs: Vec<SolverConfiguration> =
            std::iter::successors(Some(*config), |c| Some(c.refined()))
                .take(refinements + 1)
                .collect();
        let work = configs
            .iter()
            .fold(0usize, |total, c| total.saturating_add(c.points));

        let levels = run_each(&configs, work, |c| {
            let step = c.grid()?.step();
            let final_state = solver.solve(scenario, c)?.final_state();

            Ok(ConvergenceLevel {
                points: c.points,
                step,
                final_state,
                error: (final_state - exact_final).abs(),
            })
        })?;

        log::debug!(
            "{}: convergence study over {} levels, errors {:?}",
            solver.name(),
            levels.len(),
            levels.iter().map(|l| l.error).collect::<Vec<_>>()
        );

        Ok(Self {
            solver: solver.name(),
            expected_order: solver.order(),
            levels,
        })
    }

    /// `e_i / e_{i+1}` between consecutive levels
    ///
    /// Close to `2^p` for a method of order p.
    pub fn error_ratios(&self) -> Vec<f64> {
        self.levels
            .windows(2)
            .map(|pair| pair[0].error / pair[1].error)
            .collect()
    }

    /// Observed order `log(e_i / e_{i+1}) / log(h_i / h_{i+1})` between
    /// consecutive levels
    ///
    /// A level with zero error (method exact for this problem) yields a
    /// non-finite entry.
    pub fn observed_orders(&self) -> Vec<f64> {
        self.levels
            .windows(2)
            .map(|pair| {
                (pair[0].error / pair[1].error).ln() / (pair[0].step / pair[1].step).ln()
            })
            .collect()
    }

    /// Mean of the finite observed orders, `None` if there are none
    pub fn mean_order(&self) -> Option<f64> {
        let finite: Vec<f64> = self
            .observed_orders()
            .into_iter()
            .filter(|p| p.is_finite())
            .collect();

        if finite.is_empty() {
            None
        } else {
            Some(finite.iter().sum::<f64>() / finite.len() as f64)
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
