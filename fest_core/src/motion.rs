//! Spring integrator for carousel transitions.
//!
//! The track position is animated towards its target with a damped spring
//! instead of jumping. The front-end steps it once per animation frame with
//! the elapsed time and stops when it reports [`SpringStep::Settled`].

use crate::config::CarouselConfig;

/// Largest integration step; longer frames are split into sub-steps.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;
/// Distance from the target considered at rest.
const REST_DELTA: f64 = 0.5;
/// Speed (px/s) considered at rest.
const REST_SPEED: f64 = 10.0;

/// Spring constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Restoring force per pixel of displacement.
    pub stiffness: f64,
    /// Opposing force per px/s of velocity.
    pub damping: f64,
    /// Inertia of the animated value.
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 30.0,
            mass: 1.0,
        }
    }
}

impl From<&CarouselConfig> for SpringParams {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
        }
    }
}

/// Outcome of one [`Spring::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpringStep {
    /// Still moving; the value is the new position.
    Moving(f64),
    /// Snapped onto the target.
    Settled(f64),
}

/// A one-dimensional damped spring.
#[derive(Debug, Clone)]
pub struct Spring {
    params: SpringParams,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring at rest on `value`.
    pub fn new(value: f64, params: SpringParams) -> Self {
        Self {
            params,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Current position.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position the spring is pulled towards.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Retarget the spring, keeping its current velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Move the spring to `value` immediately with `velocity` px/s.
    ///
    /// Used when a drag hands the track back to the spring.
    pub fn jump(&mut self, value: f64, velocity: f64) {
        self.value = value;
        self.velocity = velocity;
    }

    /// Put the spring at rest on `value`, discarding any motion.
    pub fn reset(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring is resting on its target.
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advance the simulation by `dt_secs` (semi-implicit Euler).
    pub fn step(&mut self, dt_secs: f64) -> SpringStep {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return SpringStep::Settled(self.value);
        }

        let mut remaining = dt_secs.clamp(0.0, 0.25);
        while remaining > 0.0 {
            let dt = remaining.min(MAX_STEP_SECS);
            let displacement = self.value - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            let accel = force / self.params.mass;
            self.velocity += accel * dt;
            self.value += self.velocity * dt;
            remaining -= dt;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            SpringStep::Settled(self.value)
        } else {
            SpringStep::Moving(self.value)
        }
    }
}
