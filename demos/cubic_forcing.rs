//! Example: Cubic Forcing - Euler vs RK2 vs RK4
//!
//! Integrates dx/dt = -x³ + sin(t), x(0) = 0 on [0, 10] with 20 samples
//! using the three explicit methods, prints the trajectories side by side,
//! then shows how each method's final value settles as the grid is refined.
//!
//! Run with `cargo run --example cubic_forcing`.

use ode_rs::{
    models::CubicForcing,
    solver::{solve_all, ConvergenceStudy, Method, RK4Solver, Scenario, Solver, SolverConfiguration},
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  Cubic Forcing - dx/dt = -x³ + sin(t)");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Problem and grid ======

    let initial_value = 0.0;
    let (start_time, end_time, points) = (0.0, 10.0, 20);

    let scenario = Scenario::new(Box::new(CubicForcing::new()), initial_value);
    let configuration = SolverConfiguration::time_evolution(start_time, end_time, points);
    let grid = configuration.grid()?;

    println!("Problem:");
    println!("  x(t₀)  : {}", initial_value);
    println!("  grid   : {}\n", grid);

    // ====== All three methods on the same grid ======

    let current_time = Instant::now();
    let runs = solve_all(&Method::ALL, &scenario, &configuration)?;
    println!("  Solved with {} methods in {:.3} ms\n", runs.len(), current_time.elapsed().as_secs_f64() * 1e3);

    print!("{:>8}", "t");
    for (method, _) in &runs {
        print!(" {:>12}", method.to_string());
    }
    println!();
    println!("{:-<48}", "");

    for (i, t) in grid.iter().enumerate() {
        print!("{:>8.4}", t);
        for (_, trajectory) in &runs {
            print!(" {:>12.6}", trajectory.states[i]);
        }
        println!();
    }

    // =============================================================================================
    // Refinement
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Refinement: error in x(10) as h is halved");
    println!("═══════════════════════════════════════════════════════\n");

    // No closed form: a very fine RK4 run serves as the reference value
    let reference = RK4Solver::new()
        .solve(&scenario, &configuration.with_points(100_001))?
        .final_state();
    println!("  Reference x(10) (RK4, 100001 points): {:.12}\n", reference);

    let coarse = configuration.with_points(101);

    for method in Method::ALL {
        let study = ConvergenceStudy::run(method.solver(), &scenario, &coarse, 4, reference)?;

        println!("{} (expected order {}):", study.solver, study.expected_order);
        println!("{:>10} {:>12} {:>14}", "points", "h", "error");
        for level in &study.levels {
            println!("{:>10} {:>12.6} {:>14.3e}", level.points, level.step, level.error);
        }
        match study.mean_order() {
            Some(order) => println!("  observed order ≈ {:.2}\n", order),
            None => println!("  observed order: n/a\n"),
        }
    }

    Ok(())
}
