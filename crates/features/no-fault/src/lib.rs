//! Locked-fault family.
//!
//! The fault carries load but never slips. The writer emits no quantities, so a run with
//! this family only produces empty frames.

use rupture_kernel::builder::positive;
use rupture_kernel::domain::constants::input::{INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS};
use rupture_kernel::prelude::*;

/// Common fault arrays only.
#[rupture_derive::component]
pub struct NoFaultStorage {
    family: Family,
    pub fault: FaultState,
}

impl NoFaultStorage {
    #[must_use]
    pub fn new() -> Self {
        Self { family: Family::NoFault, fault: FaultState::default() }
    }
}

impl Default for NoFaultStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for NoFaultStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
    }
}

#[rupture_derive::component]
pub struct NoFaultInitializer {
    family: Family,
}

impl Initializer for NoFaultInitializer {
    fn required_parameters(&self) -> &'static [&'static str] {
        &[INITIAL_SHEAR_STRESS, INITIAL_NORMAL_STRESS]
    }

    fn initialize(
        &self,
        storage: &mut dyn StateStorage,
        input: &FaultInput,
    ) -> Result<(), ComponentError> {
        input.require(self.required_parameters())?;
        storage_mut::<NoFaultStorage>(storage)?.fault.load(input)
    }
}

/// Follows the tectonic load; slip rate stays zero.
#[rupture_derive::component]
pub struct LockedKernel {
    family: Family,
    params: FaultParams,
}

impl FrictionKernel for LockedKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let fault = &mut storage_mut::<NoFaultStorage>(storage)?.fault;
        for i in 0..fault.points() {
            let load = fault.driving_shear(i, step.time, &self.params);
            let update = PointUpdate { slip_rate: 0.0, shear_stress: load, mu: 0.0 };
            fault.commit(i, step, update, &self.params);
        }
        Ok(())
    }
}

#[rupture_derive::component]
pub struct NoFaultWriter {
    family: Family,
}

impl OutputWriter for NoFaultWriter {
    fn quantities(&self) -> &'static [&'static str] {
        &[]
    }

    fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError> {
        let storage = storage_ref::<NoFaultStorage>(storage)?;
        Ok(OutputFrame::new(self.family, time, storage.points()))
    }
}

/// Builds the locked-fault bundle.
#[derive(Debug, Clone)]
pub struct NoFaultBuilder {
    config: RuptureConfig,
}

impl NoFaultBuilder {
    #[must_use]
    pub fn new(config: &RuptureConfig) -> Self {
        Self { config: config.clone() }
    }
}

impl VariantBuilder for NoFaultBuilder {
    fn family(&self) -> Family {
        Family::NoFault
    }

    fn build(&self) -> Result<ComponentBundle, ComponentError> {
        let params = FaultParams::from(&self.config.fault);
        positive("fault.impedance", params.impedance).context("Building NoFault")?;

        let family = self.family();
        ComponentBundle::assemble(
            Box::new(NoFaultStorage::new()),
            Box::new(NoFaultInitializer { family }),
            Box::new(LockedKernel { family, params }),
            Box::new(NoFaultWriter { family }),
        )
    }
}
