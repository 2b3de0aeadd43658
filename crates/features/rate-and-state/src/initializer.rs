use crate::solver::{friction, psi_for_traction};
use crate::storage::RateAndStateLayout;
use rupture_kernel::builder::positive;
use rupture_kernel::domain::constants::input::{INITIAL_SLIP_RATE, RS_A, RS_SL0};
use rupture_kernel::prelude::*;
use std::marker::PhantomData;

/// Loads stresses and rate-and-state parameters into any rate-and-state layout `S`, then
/// sets the state variable so that friction balances the initial shear stress at the initial
/// slip rate.
#[rupture_derive::component]
pub struct RateAndStateInitializer<S: RateAndStateLayout> {
    family: Family,
    config: RuptureConfig,
    layout: PhantomData<fn() -> S>,
}

impl<S: RateAndStateLayout> RateAndStateInitializer<S> {
    #[must_use]
    pub const fn new(family: Family, config: RuptureConfig) -> Self {
        Self { family, config, layout: PhantomData }
    }
}

impl<S: RateAndStateLayout> Initializer for RateAndStateInitializer<S> {
    fn required_parameters(&self) -> &'static [&'static str] {
        S::REQUIRED_PARAMETERS
    }

    fn initialize(
        &self,
        storage: &mut dyn StateStorage,
        input: &FaultInput,
    ) -> Result<(), ComponentError> {
        input.require(S::REQUIRED_PARAMETERS)?;
        let rs_config = &self.config.rate_and_state;
        let storage = storage_mut::<S>(storage)?;

        let (fault, rs) = storage.parts_mut();
        fault.load(input)?;
        rs.a = input.get_or(RS_A, rs_config.a)?;
        rs.sl0 = input.get_or(RS_SL0, rs_config.sl0)?;
        let initial_rate = input.get_or(INITIAL_SLIP_RATE, rs_config.initial_slip_rate)?;
        for i in 0..initial_rate.len() {
            positive(RS_A, rs.a[i]).context(format!("point {i}"))?;
            positive(RS_SL0, rs.sl0[i]).context(format!("point {i}"))?;
            positive(INITIAL_SLIP_RATE, initial_rate[i]).context(format!("point {i}"))?;
        }

        storage.initialize_extra(input, &self.config)?;

        for (i, &v) in initial_rate.iter().enumerate() {
            let tau = storage.fault().initial_shear[i];
            let sigma = storage.effective_normal(i);
            let a = storage.rate_and_state().a[i];
            let psi = if sigma > 0.0 {
                psi_for_traction(tau, sigma, v, a, rs_config.v0)
            } else {
                rs_config.f0
            };
            let state = storage.encode_state(i, psi, rs_config);

            let (fault, rs) = storage.parts_mut();
            rs.state[i] = state;
            fault.slip_rate[i] = v;
            fault.mu[i] = friction(v, a, rs_config.v0, psi);
        }
        Ok(())
    }
}
