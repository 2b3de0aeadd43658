//! Imposed-slip-rate family.
//!
//! Every point follows a prescribed Brune history after its onset time `t0`:
//!
//! `V(t) = D * t' / T^2 * exp(-t' / T)`, `t' = t - t0`,
//!
//! which integrates to the total slip `D`. Friction plays no part; the traction is whatever
//! radiation damping leaves of the load.

use rupture_kernel::builder::{non_negative, positive};
use rupture_kernel::domain::constants::input::{
    INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS, ONSET_TIME, RISE_TIME, TOTAL_SLIP,
};
use rupture_kernel::prelude::*;
use rupture_kernel::state::FAULT_QUANTITIES;

/// Brune slip rate at `elapsed` seconds after onset.
#[must_use]
pub fn brune_slip_rate(total_slip: f64, rise_time: f64, elapsed: f64) -> f64 {
    if elapsed <= 0.0 {
        return 0.0;
    }
    total_slip * elapsed / (rise_time * rise_time) * (-elapsed / rise_time).exp()
}

#[rupture_derive::component]
pub struct ImposedSlipStorage {
    family: Family,
    pub fault: FaultState,
    pub total_slip: Vec<f64>,
    pub onset_time: Vec<f64>,
    pub rise_time: Vec<f64>,
}

impl ImposedSlipStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: Family::ImposedSlipRates,
            fault: FaultState::default(),
            total_slip: Vec::new(),
            onset_time: Vec::new(),
            rise_time: Vec::new(),
        }
    }
}

impl Default for ImposedSlipStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for ImposedSlipStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::IMPOSED_SLIP
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        for array in [&mut self.total_slip, &mut self.onset_time, &mut self.rise_time] {
            array.clear();
            array.resize(points, 0.0);
        }
    }
}

#[rupture_derive::component]
pub struct ImposedSlipInitializer {
    family: Family,
    rise_time: f64,
}

impl Initializer for ImposedSlipInitializer {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[INITIAL_SHEAR_STRESS, INITIAL_NORMAL_STRESS, TOTAL_SLIP, ONSET_TIME]
    }

    fn initialize(
        &self,
        storage: &mut dyn StateStorage,
        input: &FaultInput,
    ) -> Result<(), ComponentError> {
        input.require(self.required_parameters())?;
        let storage = storage_mut::<ImposedSlipStorage>(storage)?;
        storage.fault.load(input)?;
        storage.total_slip.copy_from_slice(input.get(TOTAL_SLIP)?);
        storage.onset_time.copy_from_slice(input.get(ONSET_TIME)?);
        storage.rise_time = input.get_or(RISE_TIME, self.rise_time)?;

        for i in 0..storage.points() {
            non_negative(TOTAL_SLIP, storage.total_slip[i]).context(format!("point {i}"))?;
            positive(RISE_TIME, storage.rise_time[i]).context(format!("point {i}"))?;
        }
        Ok(())
    }
}

/// Drives each point at its prescribed slip rate.
#[rupture_derive::component]
pub struct ImposedSlipKernel {
    family: Family,
    params: FaultParams,
}

impl FrictionKernel for ImposedSlipKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::IMPOSED_SLIP
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let ImposedSlipStorage { fault, total_slip, onset_time, rise_time, .. } =
            storage_mut::<ImposedSlipStorage>(storage)?;
        for i in 0..fault.points() {
            let slip_rate =
                brune_slip_rate(total_slip[i], rise_time[i], step.time - onset_time[i]);
            let load = fault.driving_shear(i, step.time, &self.params);
            let shear_stress = (-self.params.impedance).mul_add(slip_rate, load);
            let sigma = fault.effective_normal(i);
            let mu = if sigma > 0.0 { shear_stress / sigma } else { 0.0 };
            fault.commit(i, step, PointUpdate { slip_rate, shear_stress, mu }, &self.params);
        }
        Ok(())
    }
}

#[rupture_derive::component]
pub struct ImposedSlipWriter {
    family: Family,
}

impl OutputWriter for ImposedSlipWriter {
    fn quantities(&self) -> &'static [&'static str] {
        FAULT_QUANTITIES
    }

    fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError> {
        let storage = storage_ref::<ImposedSlipStorage>(storage)?;
        let mut frame = OutputFrame::new(self.family, time, storage.points());
        storage.fault.write_into(&mut frame);
        Ok(frame)
    }
}

/// Builds the imposed-slip-rate bundle.
#[derive(Debug, Clone)]
pub struct ImposedSlipRatesBuilder {
    config: RuptureConfig,
}

impl ImposedSlipRatesBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for ImposedSlipRatesBuilder {
    fn family(&self) -> Family {
        Family::ImposedSlipRates
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        const CONTEXT: &str = "Building ImposedSlipRates";
        let params = FaultParams::from(&self.config.fault);
        positive("fault.impedance", params.impedance).context(CONTEXT)?;
        positive("fault.rupture_slip_rate", params.rupture_slip_rate).context(CONTEXT)?;
        let rise_time = self.config.imposed.rise_time;
        positive("imposed.rise_time", rise_time).context(CONTEXT)?;

        let family = self.family();
        ComponentBundle::assemble(
            Box::new(ImposedSlipStorage::new()),
            Box::new(ImposedSlipInitializer { family, rise_time }),
            Box::new(ImposedSlipKernel { family, params }),
            Box::new(ImposedSlipWriter { family }),
        )
    }
}
