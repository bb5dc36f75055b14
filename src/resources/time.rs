use super::config::TimeConfig;

/// Turns variable frame times into a whole number of fixed simulation steps.
///
/// Leftover time carries over to the next frame. Fast-forward scales the
/// frame time before it is accumulated, so the step size stays fixed.
#[derive(Debug, Clone)]
pub struct TimeManager {
    time_step: f64,
    max_substeps: u32,
    time_scale: f64,
    accumulator: f64,
}

impl TimeManager {
    pub fn new(config: &TimeConfig) -> Self {
        Self {
            time_step: config.time_step,
            max_substeps: config.max_substeps.max(1),
            time_scale: config.fast_forward.max(0.0),
            accumulator: 0.0,
        }
    }

    /// Feed one frame's wall-clock duration and get the number of fixed steps to run.
    pub fn advance(&mut self, frame_seconds: f64) -> u32 {
        self.accumulator += frame_seconds.max(0.0) * self.time_scale;

        let mut steps = 0;
        while self.accumulator >= self.time_step && steps < self.max_substeps {
            self.accumulator -= self.time_step;
            steps += 1;
        }
        // Drop backlog we could not work off rather than spiralling
        if steps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.time_step);
        }

        steps
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }
}
