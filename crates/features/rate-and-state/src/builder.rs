use crate::initializer::RateAndStateInitializer;
use crate::kernel::{
    AgingKernel, FastVelocityWeakeningKernel, SlipLawKernel, ThermalPressurisationKernel,
};
use crate::storage::{
    FastVelocityWeakeningStorage, RateAndStateStorage, ThermalPressurisationStorage,
};
use crate::writer::RateAndStateWriter;
use rupture_kernel::builder::{finite, non_negative, positive};
use rupture_kernel::prelude::*;

/// Checks the fault and rate-and-state parameters every family of this crate uses.
fn validate(config: &RuptureConfig) -> Result<FaultParams, ComponentError> {
    let params = FaultParams::from(&config.fault);
    positive("fault.impedance", params.impedance)?;
    positive("fault.rupture_slip_rate", params.rupture_slip_rate)?;

    let rs = &config.rate_and_state;
    finite("rate_and_state.f0", rs.f0)?;
    positive("rate_and_state.a", rs.a)?;
    positive("rate_and_state.b", rs.b)?;
    positive("rate_and_state.sl0", rs.sl0)?;
    positive("rate_and_state.v0", rs.v0)?;
    positive("rate_and_state.initial_slip_rate", rs.initial_slip_rate)?;
    positive("rate_and_state.newton_tolerance", rs.newton_tolerance)?;
    positive("rate_and_state.max_newton_iterations", f64::from(rs.max_newton_iterations))?;
    Ok(params)
}

/// Adds the flash-heating parameters.
fn validate_fast_weakening(config: &RuptureConfig) -> Result<FaultParams, ComponentError> {
    let params = validate(config)?;
    non_negative("rate_and_state.mu_w", config.rate_and_state.mu_w)?;
    positive("rate_and_state.srw", config.rate_and_state.srw)?;
    Ok(params)
}

/// Builds the aging-law bundle.
#[derive(Debug, Clone)]
pub struct RateAndStateAgingBuilder {
    config: RuptureConfig,
}

impl RateAndStateAgingBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for RateAndStateAgingBuilder {
    fn family(&self) -> Family {
        Family::RateAndStateAging
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let family = self.family();
        let params = validate(&self.config).context("Building RateAndStateAging")?;

        ComponentBundle::assemble(
            Box::new(RateAndStateStorage::new(family)),
            Box::new(RateAndStateInitializer::<RateAndStateStorage>::new(
                family,
                self.config.clone(),
            )),
            Box::new(AgingKernel::new(family, params, self.config.rate_and_state.clone())),
            Box::new(RateAndStateWriter::<RateAndStateStorage>::new(family)),
        )
    }
}

/// Builds the slip-law bundle.
#[derive(Debug, Clone)]
pub struct RateAndStateSlipBuilder {
    config: RuptureConfig,
}

impl RateAndStateSlipBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for RateAndStateSlipBuilder {
    fn family(&self) -> Family {
        Family::RateAndStateSlip
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let family = self.family();
        let params = validate(&self.config).context("Building RateAndStateSlip")?;

        ComponentBundle::assemble(
            Box::new(RateAndStateStorage::new(family)),
            Box::new(RateAndStateInitializer::<RateAndStateStorage>::new(
                family,
                self.config.clone(),
            )),
            Box::new(SlipLawKernel::new(family, params, self.config.rate_and_state.clone())),
            Box::new(RateAndStateWriter::<RateAndStateStorage>::new(family)),
        )
    }
}

/// Builds the fast-velocity-weakening bundle, without thermal coupling.
#[derive(Debug, Clone)]
pub struct FastVelocityWeakeningBuilder {
    config: RuptureConfig,
}

impl FastVelocityWeakeningBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for FastVelocityWeakeningBuilder {
    fn family(&self) -> Family {
        Family::FastVelocityWeakening
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let family = self.family();
        let params =
            validate_fast_weakening(&self.config).context("Building FastVelocityWeakening")?;

        ComponentBundle::assemble(
            Box::new(FastVelocityWeakeningStorage::new()),
            Box::new(RateAndStateInitializer::<FastVelocityWeakeningStorage>::new(
                family,
                self.config.clone(),
            )),
            Box::new(FastVelocityWeakeningKernel::new(
                family,
                params,
                self.config.rate_and_state.clone(),
            )),
            Box::new(RateAndStateWriter::<FastVelocityWeakeningStorage>::new(family)),
        )
    }
}

/// Builds the fast-velocity-weakening bundle coupled to thermal pressurisation.
#[derive(Debug, Clone)]
pub struct ThermalPressurisationBuilder {
    config: RuptureConfig,
}

impl ThermalPressurisationBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for ThermalPressurisationBuilder {
    fn family(&self) -> Family {
        Family::ThermalPressurisation
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        const CONTEXT: &str = "Building ThermalPressurisation";
        let family = self.family();
        let params = validate_fast_weakening(&self.config).context(CONTEXT)?;
        let thermal = &self.config.thermal;
        positive("thermal.heat_capacity", thermal.heat_capacity).context(CONTEXT)?;
        positive("thermal.half_width", thermal.half_width).context(CONTEXT)?;
        non_negative("thermal.undrained_response", thermal.undrained_response).context(CONTEXT)?;
        non_negative("thermal.thermal_diffusivity", thermal.thermal_diffusivity)
            .context(CONTEXT)?;
        non_negative("thermal.hydraulic_diffusivity", thermal.hydraulic_diffusivity)
            .context(CONTEXT)?;

        ComponentBundle::assemble(
            Box::new(ThermalPressurisationStorage::new()),
            Box::new(RateAndStateInitializer::<ThermalPressurisationStorage>::new(
                family,
                self.config.clone(),
            )),
            Box::new(ThermalPressurisationKernel::new(
                family,
                params,
                self.config.rate_and_state.clone(),
                thermal.clone(),
            )),
            Box::new(RateAndStateWriter::<ThermalPressurisationStorage>::new(family)),
        )
    }
}
