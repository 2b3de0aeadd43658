use crate::initializer::SlipWeakeningInitializer;
use crate::kernel::{BimaterialKernel, ForcedRuptureKernel, SlipWeakeningKernel};
use crate::storage::{BimaterialStorage, ForcedRuptureStorage, SlipWeakeningStorage};
use crate::writer::SlipWeakeningWriter;
use rupture_kernel::builder::{at_most, non_negative, positive};
use rupture_kernel::domain::config::SlipWeakeningConfig;
use rupture_kernel::prelude::*;

/// Checks the parameters every slip-weakening family shares.
fn validate(config: &RuptureConfig) -> Result<FaultParams, ComponentError> {
    let params = FaultParams::from(&config.fault);
    positive("fault.impedance", params.impedance)?;
    positive("fault.rupture_slip_rate", params.rupture_slip_rate)?;

    let SlipWeakeningConfig { mu_s, mu_d, d_c, cohesion, .. } = config.slip_weakening;
    non_negative("slip_weakening.mu_s", mu_s)?;
    non_negative("slip_weakening.mu_d", mu_d)?;
    at_most("slip_weakening.mu_d", mu_d, mu_s, "exceeds mu_s")?;
    positive("slip_weakening.d_c", d_c)?;
    non_negative("slip_weakening.cohesion", cohesion)?;
    Ok(params)
}

/// Builds the plain linear slip-weakening bundle.
#[derive(Debug, Clone)]
pub struct LinearSlipWeakeningBuilder {
    config: RuptureConfig,
}

impl LinearSlipWeakeningBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for LinearSlipWeakeningBuilder {
    fn family(&self) -> Family {
        Family::LinearSlipWeakening
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let family = self.family();
        let params = validate(&self.config).context("Building LinearSlipWeakening")?;

        ComponentBundle::assemble(
            Box::new(SlipWeakeningStorage::new()),
            Box::new(SlipWeakeningInitializer::<SlipWeakeningStorage>::new(
                family,
                self.config.slip_weakening.clone(),
            )),
            Box::new(SlipWeakeningKernel::new(family, params)),
            Box::new(SlipWeakeningWriter::<SlipWeakeningStorage>::new(family)),
        )
    }
}

/// Builds the forced-rupture-time bundle.
#[derive(Debug, Clone)]
pub struct ForcedRuptureTimeBuilder {
    config: RuptureConfig,
}

impl ForcedRuptureTimeBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for ForcedRuptureTimeBuilder {
    fn family(&self) -> Family {
        Family::LinearSlipWeakeningForcedRuptureTime
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let family = self.family();
        let params = validate(&self.config).context("Building ForcedRuptureTime")?;
        let duration = non_negative(
            "slip_weakening.forced_rupture_duration",
            self.config.slip_weakening.forced_rupture_duration,
        )
        .context("Building ForcedRuptureTime")?;

        ComponentBundle::assemble(
            Box::new(ForcedRuptureStorage::new()),
            Box::new(SlipWeakeningInitializer::<ForcedRuptureStorage>::new(
                family,
                self.config.slip_weakening.clone(),
            )),
            Box::new(ForcedRuptureKernel::new(family, params, duration)),
            Box::new(SlipWeakeningWriter::<ForcedRuptureStorage>::new(family)),
        )
    }
}

/// Builds the bimaterial (Prakash-Clifton) bundle.
#[derive(Debug, Clone)]
pub struct BimaterialBuilder {
    config: RuptureConfig,
}

impl BimaterialBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for BimaterialBuilder {
    fn family(&self) -> Family {
        Family::LinearSlipWeakeningBimaterial
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let family = self.family();
        let sw = &self.config.slip_weakening;
        let params = validate(&self.config).context("Building Bimaterial")?;
        let velocity =
            positive("slip_weakening.prakash_clifton_velocity", sw.prakash_clifton_velocity)
                .context("Building Bimaterial")?;
        let length = positive("slip_weakening.prakash_clifton_length", sw.prakash_clifton_length)
            .context("Building Bimaterial")?;

        ComponentBundle::assemble(
            Box::new(BimaterialStorage::new()),
            Box::new(SlipWeakeningInitializer::<BimaterialStorage>::new(family, sw.clone())),
            Box::new(BimaterialKernel::new(family, params, velocity, length)),
            Box::new(SlipWeakeningWriter::<BimaterialStorage>::new(family)),
        )
    }
}
