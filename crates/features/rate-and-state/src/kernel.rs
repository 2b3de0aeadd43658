use crate::solver::{PointProblem, SolverSettings, ln_sinh, solve};
use crate::storage::{
    FastVelocityWeakeningStorage, RateAndStateStorage, ThermalPressurisationStorage,
};
use rupture_kernel::domain::config::{RateAndStateConfig, ThermalConfig};
use rupture_kernel::prelude::*;
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::warn;

/// Solves one point, turning an exhausted iteration budget into an error.
fn solve_point(
    family: Family,
    point: usize,
    problem: &PointProblem,
    settings: &SolverSettings,
) -> Result<PointUpdate, ComponentError> {
    let Some(solution) = solve(problem, settings) else {
        warn!(
            %family,
            point,
            iterations = settings.max_iterations,
            "Rate-and-state solve did not converge"
        );
        return Err(ComponentError::NonConvergence {
            point,
            iterations: settings.max_iterations,
            context: Some(family.name().into()),
        });
    };
    let mu = if problem.effective_normal > 0.0 {
        solution.shear_stress / problem.effective_normal
    } else {
        0.0
    };
    Ok(PointUpdate { slip_rate: solution.slip_rate, shear_stress: solution.shear_stress, mu })
}

/// Evolution of `theta` over one step at constant slip rate `v`.
pub trait StateLaw: Debug + Send + Sync + 'static {
    fn evolve(theta: f64, v: f64, sl0: f64, dt: f64) -> f64;
}

/// Aging law, `d theta/dt = 1 - V theta / L`.
#[derive(Debug, Clone, Copy)]
pub struct AgingLaw;

impl StateLaw for AgingLaw {
    fn evolve(theta: f64, v: f64, sl0: f64, dt: f64) -> f64 {
        let x = v * dt / sl0;
        if x < 1e-12 {
            return theta + dt;
        }
        // theta * e^-x + L/V * (1 - e^-x), with L/V = dt/x.
        theta.mul_add((-x).exp(), dt * -(-x).exp_m1() / x)
    }
}

/// Slip law, `d theta/dt = -(V theta / L) ln(V theta / L)`.
#[derive(Debug, Clone, Copy)]
pub struct SlipLaw;

impl StateLaw for SlipLaw {
    fn evolve(theta: f64, v: f64, sl0: f64, dt: f64) -> f64 {
        let x = v * dt / sl0;
        if x < 1e-12 {
            return theta;
        }
        sl0 / v * (v * theta / sl0).powf((-x).exp())
    }
}

/// Aging or slip law kernel; `psi = f0 + b ln(V0 theta / L)`.
#[rupture_derive::component]
pub struct RateAndStateKernel<L: StateLaw> {
    family: Family,
    params: FaultParams,
    config: RateAndStateConfig,
    settings: SolverSettings,
    law: PhantomData<L>,
}

impl<L: StateLaw> RateAndStateKernel<L> {
    #[must_use]
    pub fn new(family: Family, params: FaultParams, config: RateAndStateConfig) -> Self {
        let settings = settings(&config);
        Self { family, params, config, settings, law: PhantomData }
    }
}

pub type AgingKernel = RateAndStateKernel<AgingLaw>;
pub type SlipLawKernel = RateAndStateKernel<SlipLaw>;

fn settings(config: &RateAndStateConfig) -> SolverSettings {
    SolverSettings {
        tolerance: config.newton_tolerance,
        max_iterations: config.max_newton_iterations,
    }
}

impl<L: StateLaw> FrictionKernel for RateAndStateKernel<L> {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::RATE_AND_STATE
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let RateAndStateConfig { f0, b, v0, .. } = self.config;
        let RateAndStateStorage { fault, rs, .. } = storage_mut::<RateAndStateStorage>(storage)?;
        for i in 0..fault.points() {
            let theta = L::evolve(rs.state[i], fault.slip_rate[i], rs.sl0[i], step.dt);
            rs.state[i] = theta;

            let problem = PointProblem {
                load: fault.driving_shear(i, step.time, &self.params),
                effective_normal: fault.effective_normal(i),
                impedance: self.params.impedance,
                a: rs.a[i],
                v0,
                psi: b.mul_add((v0 * theta / rs.sl0[i]).ln(), f0),
                guess: fault.shear_stress[i],
            };
            let update = solve_point(self.family, i, &problem, &self.settings)?;
            fault.commit(i, step, update, &self.params);
        }
        Ok(())
    }
}

/// Flash-heating steady state of `psi` at slip rate `v`.
///
/// `f_ss = mu_w + (f_lv - mu_w) / (1 + (V / V_w)^8)^(1/8)` with
/// `f_lv = f0 - (b - a) ln(V / V0)`.
#[must_use]
pub fn steady_state_psi(config: &RateAndStateConfig, a: f64, srw: f64, v: f64) -> f64 {
    let v = v.max(f64::MIN_POSITIVE);
    let low_velocity = (config.b - a).mul_add(-(v / config.v0).ln(), config.f0);
    let weakening = (1.0 + (v / srw).powi(8)).powf(0.125);
    let f_ss = config.mu_w + (low_velocity - config.mu_w) / weakening;
    a * ((2.0 * config.v0 / v).ln() + ln_sinh((f_ss / a).max(f64::MIN_POSITIVE)))
}

/// Relaxes `psi` towards its steady state over one step.
fn relax_psi(
    config: &RateAndStateConfig,
    psi: f64,
    a: f64,
    sl0: f64,
    srw: f64,
    v: f64,
    dt: f64,
) -> f64 {
    let steady = steady_state_psi(config, a, srw, v);
    (psi - steady).mul_add((-v * dt / sl0).exp(), steady)
}

/// Fast velocity weakening kernel.
#[rupture_derive::component]
pub struct FastVelocityWeakeningKernel {
    family: Family,
    params: FaultParams,
    config: RateAndStateConfig,
    settings: SolverSettings,
}

impl FastVelocityWeakeningKernel {
    #[must_use]
    pub fn new(family: Family, params: FaultParams, config: RateAndStateConfig) -> Self {
        let settings = settings(&config);
        Self { family, params, config, settings }
    }
}

impl FrictionKernel for FastVelocityWeakeningKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::RATE_AND_STATE | FieldSet::FAST_VELOCITY_WEAKENING
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let FastVelocityWeakeningStorage { fault, rs, srw, .. } =
            storage_mut::<FastVelocityWeakeningStorage>(storage)?;
        for i in 0..fault.points() {
            let v = fault.slip_rate[i];
            let psi = relax_psi(&self.config, rs.state[i], rs.a[i], rs.sl0[i], srw[i], v, step.dt);
            rs.state[i] = psi;

            let problem = PointProblem {
                load: fault.driving_shear(i, step.time, &self.params),
                effective_normal: fault.effective_normal(i),
                impedance: self.params.impedance,
                a: rs.a[i],
                v0: self.config.v0,
                psi,
                guess: fault.shear_stress[i],
            };
            let update = solve_point(self.family, i, &problem, &self.settings)?;
            fault.commit(i, step, update, &self.params);
        }
        Ok(())
    }
}

/// Fast velocity weakening with shear heating raising temperature and pore pressure.
///
/// Per step: heating `dT = tau V dt / (rho c 2w)`, pressure response `Lambda dT`, then both
/// relax towards their initial values over the diffusion times `w^2 / alpha`.
#[rupture_derive::component]
pub struct ThermalPressurisationKernel {
    family: Family,
    params: FaultParams,
    config: RateAndStateConfig,
    thermal: ThermalConfig,
    settings: SolverSettings,
}

impl ThermalPressurisationKernel {
    #[must_use]
    pub fn new(
        family: Family,
        params: FaultParams,
        config: RateAndStateConfig,
        thermal: ThermalConfig,
    ) -> Self {
        let settings = settings(&config);
        Self { family, params, config, thermal, settings }
    }
}

impl FrictionKernel for ThermalPressurisationKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT
            | FieldSet::RATE_AND_STATE
            | FieldSet::FAST_VELOCITY_WEAKENING
            | FieldSet::THERMAL_PRESSURISATION
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let ThermalPressurisationStorage { fault, rs, srw, thermal, .. } =
            storage_mut::<ThermalPressurisationStorage>(storage)?;
        for i in 0..fault.points() {
            let v = fault.slip_rate[i];
            let psi = relax_psi(&self.config, rs.state[i], rs.a[i], rs.sl0[i], srw[i], v, step.dt);
            rs.state[i] = psi;

            let problem = PointProblem {
                load: fault.driving_shear(i, step.time, &self.params),
                effective_normal: (-fault.normal_stress[i] - thermal.pressure[i]).max(0.0),
                impedance: self.params.impedance,
                a: rs.a[i],
                v0: self.config.v0,
                psi,
                guess: fault.shear_stress[i],
            };
            let update = solve_point(self.family, i, &problem, &self.settings)?;
            fault.commit(i, step, update, &self.params);

            let w = thermal.half_width[i];
            let heating = update.shear_stress * update.slip_rate * step.dt
                / (self.thermal.heat_capacity * 2.0 * w);
            let thermal_decay = (-self.thermal.thermal_diffusivity * step.dt / (w * w)).exp();
            let hydraulic_decay = (-self.thermal.hydraulic_diffusivity * step.dt / (w * w)).exp();

            let (t0, p0) = (thermal.initial_temperature[i], thermal.initial_pressure[i]);
            thermal.temperature[i] =
                (thermal.temperature[i] - t0 + heating).mul_add(thermal_decay, t0);
            thermal.pressure[i] = self
                .thermal
                .undrained_response
                .mul_add(heating, thermal.pressure[i] - p0)
                .mul_add(hydraulic_decay, p0);
        }
        Ok(())
    }
}
