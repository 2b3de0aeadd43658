use crate::storage::{BimaterialStorage, ForcedRuptureStorage, SlipWeakeningStorage};
use rupture_kernel::prelude::*;

/// Plain linear slip weakening.
#[rupture_derive::component]
pub struct SlipWeakeningKernel {
    family: Family,
    params: FaultParams,
}

impl SlipWeakeningKernel {
    #[must_use]
    pub const fn new(family: Family, params: FaultParams) -> Self {
        Self { family, params }
    }
}

impl FrictionKernel for SlipWeakeningKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::SLIP_WEAKENING
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let SlipWeakeningStorage { fault, sw, .. } =
            storage_mut::<SlipWeakeningStorage>(storage)?;
        for i in 0..fault.points() {
            let load = fault.driving_shear(i, step.time, &self.params);
            let mu = sw.friction(i, sw.weakening(i, fault.slip[i]));
            let strength = mu.mul_add(fault.effective_normal(i), sw.cohesion[i]);
            let update = self.params.radiate(load, strength, mu);
            fault.commit(i, step, update, &self.params);
        }
        Ok(())
    }
}

/// Slip weakening with friction also ramped down from a forced rupture time:
/// `f = max(min(slip / d_c, 1), clamp((t - t_forced) / t0, 0, 1))`.
#[rupture_derive::component]
pub struct ForcedRuptureKernel {
    family: Family,
    params: FaultParams,
    /// Ramp duration `t0`; instantaneous when zero.
    duration: f64,
}

impl ForcedRuptureKernel {
    #[must_use]
    pub const fn new(family: Family, params: FaultParams, duration: f64) -> Self {
        Self { family, params, duration }
    }

    fn forced_weakening(&self, time: f64, forced_at: f64) -> f64 {
        if time < forced_at {
            0.0
        } else if self.duration > 0.0 {
            ((time - forced_at) / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

impl FrictionKernel for ForcedRuptureKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::SLIP_WEAKENING | FieldSet::FORCED_RUPTURE
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let ForcedRuptureStorage { fault, sw, forced_rupture_time, .. } =
            storage_mut::<ForcedRuptureStorage>(storage)?;
        for i in 0..fault.points() {
            let load = fault.driving_shear(i, step.time, &self.params);
            let f = sw
                .weakening(i, fault.slip[i])
                .max(self.forced_weakening(step.time, forced_rupture_time[i]));
            let mu = sw.friction(i, f);
            let strength = mu.mul_add(fault.effective_normal(i), sw.cohesion[i]);
            let update = self.params.radiate(load, strength, mu);
            fault.commit(i, step, update, &self.params);
        }
        Ok(())
    }
}

/// Slip weakening acting on a Prakash-Clifton regularised normal stress.
///
/// Over a step the regularised stress relaxes towards the current effective normal stress
/// at rate `(|V| + v*) / L`, using the slip rate of the previous step.
#[rupture_derive::component]
pub struct BimaterialKernel {
    family: Family,
    params: FaultParams,
    reference_velocity: f64,
    reference_length: f64,
}

impl BimaterialKernel {
    #[must_use]
    pub const fn new(
        family: Family,
        params: FaultParams,
        reference_velocity: f64,
        reference_length: f64,
    ) -> Self {
        Self { family, params, reference_velocity, reference_length }
    }
}

impl FrictionKernel for BimaterialKernel {
    fn required_fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::SLIP_WEAKENING | FieldSet::BIMATERIAL
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let BimaterialStorage { fault, sw, regularized_normal, .. } =
            storage_mut::<BimaterialStorage>(storage)?;
        for i in 0..fault.points() {
            let rate = (fault.slip_rate[i].abs() + self.reference_velocity) / self.reference_length;
            let target = fault.effective_normal(i);
            let decay = (-rate * step.dt).exp();
            regularized_normal[i] = (regularized_normal[i] - target).mul_add(decay, target);

            let load = fault.driving_shear(i, step.time, &self.params);
            let mu = sw.friction(i, sw.weakening(i, fault.slip[i]));
            let strength = mu.mul_add(regularized_normal[i], sw.cohesion[i]);
            let update = self.params.radiate(load, strength, mu);
            fault.commit(i, step, update, &self.params);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_ramp_is_clamped() {
        let kernel = ForcedRuptureKernel::new(
            Family::LinearSlipWeakeningForcedRuptureTime,
            FaultParams { impedance: 1.0, loading_rate: 0.0, rupture_slip_rate: 1e-3 },
            0.5,
        );
        assert!(kernel.forced_weakening(0.9, 1.0).abs() < f64::EPSILON);
        assert!((kernel.forced_weakening(1.25, 1.0) - 0.5).abs() < 1e-12);
        assert!((kernel.forced_weakening(3.0, 1.0) - 1.0).abs() < f64::EPSILON);

        let instant = ForcedRuptureKernel::new(kernel.family, kernel.params, 0.0);
        assert!((instant.forced_weakening(1.0, 1.0) - 1.0).abs() < f64::EPSILON);
    }
}
