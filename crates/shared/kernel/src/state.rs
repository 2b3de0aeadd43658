//! Fault-point arrays every storage layout embeds, and the update all kernels share.
//!
//! Sign conventions: shear stress is a magnitude, normal stress is negative in compression.
//! A kernel computes a strength `S` for each point; the point then slips at the rate that
//! radiation damping allows for the excess of the driving load over `S`.

use crate::component::TimeStep;
use crate::domain::config::FaultConfig;
use crate::domain::constants::input::{INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS};
use crate::domain::constants::output::{
    FRICTION, NORMAL_STRESS, PEAK_SLIP_RATE, RUPTURE_TIME, SHEAR_STRESS, SLIP, SLIP_RATE,
};
use crate::error::ComponentError;
use crate::input::FaultInput;
use crate::output::{NOT_RUPTURED, OutputFrame};

/// Output quantities derived from [`FaultState`] alone.
pub const FAULT_QUANTITIES: &[&str] =
    &[SLIP, SLIP_RATE, SHEAR_STRESS, NORMAL_STRESS, FRICTION, RUPTURE_TIME, PEAK_SLIP_RATE];

/// Common per-point fault arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaultState {
    pub initial_shear: Vec<f64>,
    pub initial_normal: Vec<f64>,
    pub slip: Vec<f64>,
    pub slip_rate: Vec<f64>,
    pub shear_stress: Vec<f64>,
    pub normal_stress: Vec<f64>,
    /// Friction coefficient reported by the last update.
    pub mu: Vec<f64>,
    pub rupture_time: Vec<Option<f64>>,
    pub peak_slip_rate: Vec<f64>,
}

/// Result of solving one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointUpdate {
    pub slip_rate: f64,
    pub shear_stress: f64,
    pub mu: f64,
}

/// The fault-wide constants of the common update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultParams {
    pub impedance: f64,
    pub loading_rate: f64,
    pub rupture_slip_rate: f64,
}

impl From<&FaultConfig> for FaultParams {
    fn from(config: &FaultConfig) -> Self {
        Self {
            impedance: config.impedance,
            loading_rate: config.shear_loading_rate,
            rupture_slip_rate: config.rupture_slip_rate,
        }
    }
}

impl FaultParams {
    /// Slip rate and traction for a point whose strength is `strength` under `load`.
    #[must_use]
    pub fn radiate(&self, load: f64, strength: f64, mu: f64) -> PointUpdate {
        let slip_rate = ((load - strength) / self.impedance).max(0.0);
        PointUpdate { slip_rate, shear_stress: load - self.impedance * slip_rate, mu }
    }
}

impl FaultState {
    /// Resizes every array to `points` and zeroes it.
    pub fn allocate(&mut self, points: usize) {
        for array in [
            &mut self.initial_shear,
            &mut self.initial_normal,
            &mut self.slip,
            &mut self.slip_rate,
            &mut self.shear_stress,
            &mut self.normal_stress,
            &mut self.mu,
            &mut self.peak_slip_rate,
        ] {
            array.clear();
            array.resize(points, 0.0);
        }
        self.rupture_time.clear();
        self.rupture_time.resize(points, None);
    }

    #[must_use]
    pub const fn points(&self) -> usize {
        self.slip.len()
    }

    /// Reads the initial tractions; the current tractions start from them.
    ///
    /// # Errors
    /// Fails when the input is missing the stresses or disagrees with the allocation.
    pub fn load(&mut self, input: &FaultInput) -> Result<(), ComponentError> {
        if input.num_points() != self.points() {
            return Err(ComponentError::ShapeMismatch {
                name: "num_points".into(),
                expected: self.points(),
                found: input.num_points(),
                context: Some("Storage was allocated for a different fault".into()),
            });
        }
        self.initial_shear.copy_from_slice(input.get(INITIAL_SHEAR_STRESS)?);
        self.initial_normal.copy_from_slice(input.get(INITIAL_NORMAL_STRESS)?);
        self.shear_stress.clone_from(&self.initial_shear);
        self.normal_stress.clone_from(&self.initial_normal);
        Ok(())
    }

    /// Shear load on point `i` at `time`, before any frictional resistance.
    #[must_use]
    pub fn driving_shear(&self, i: usize, time: f64, params: &FaultParams) -> f64 {
        params.loading_rate.mul_add(time, self.initial_shear[i])
    }

    /// Effective compressive normal stress, never negative.
    #[must_use]
    pub fn effective_normal(&self, i: usize) -> f64 {
        (-self.normal_stress[i]).max(0.0)
    }

    /// Commits a solved point: integrates slip, tracks peak slip rate and rupture onset.
    pub fn commit(&mut self, i: usize, step: TimeStep, update: PointUpdate, params: &FaultParams) {
        self.slip[i] += update.slip_rate * step.dt;
        self.slip_rate[i] = update.slip_rate;
        self.shear_stress[i] = update.shear_stress;
        self.mu[i] = update.mu;
        self.peak_slip_rate[i] = self.peak_slip_rate[i].max(update.slip_rate);
        if self.rupture_time[i].is_none() && update.slip_rate > params.rupture_slip_rate {
            self.rupture_time[i] = Some(step.time);
        }
    }

    /// Appends the common quantities, in [`FAULT_QUANTITIES`] order.
    pub fn write_into(&self, frame: &mut OutputFrame) {
        frame.push(SLIP, self.slip.clone());
        frame.push(SLIP_RATE, self.slip_rate.clone());
        frame.push(SHEAR_STRESS, self.shear_stress.clone());
        frame.push(NORMAL_STRESS, self.normal_stress.clone());
        frame.push(FRICTION, self.mu.clone());
        frame.push(
            RUPTURE_TIME,
            self.rupture_time.iter().map(|t| t.unwrap_or(NOT_RUPTURED)).collect(),
        );
        frame.push(PEAK_SLIP_RATE, self.peak_slip_rate.clone());
    }
}
