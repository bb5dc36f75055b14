use atcsim::{Simulation, TickReport};

/// Step `sim` with `dt` until `done` holds or `max_steps` run out.
///
/// Returns the merged report and whether `done` was reached.
pub fn run_until<F>(sim: &mut Simulation, dt: f64, max_steps: usize, mut done: F) -> (TickReport, bool)
where
    F: FnMut(&Simulation, &TickReport) -> bool,
{
    let mut total = TickReport::default();
    for _ in 0..max_steps {
        let report = sim.step(dt);
        total.merge(report.clone());
        if done(sim, &report) {
            return (total, true);
        }
    }
    (total, false)
}

/// Step `sim` a fixed number of times.
pub fn run_steps(sim: &mut Simulation, dt: f64, steps: usize) -> TickReport {
    let mut total = TickReport::default();
    for _ in 0..steps {
        total.merge(sim.step(dt));
    }
    total
}
