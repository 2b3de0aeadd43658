use crate::storage::RateAndStateLayout;
use rupture_kernel::domain::constants::output::STATE_VARIABLE;
use rupture_kernel::prelude::*;
use std::marker::PhantomData;

/// Writes the common fault quantities, the state variable and the layout's extras.
#[rupture_derive::component]
pub struct RateAndStateWriter<S: RateAndStateLayout> {
    family: Family,
    layout: PhantomData<fn() -> S>,
}

impl<S: RateAndStateLayout> RateAndStateWriter<S> {
    #[must_use]
    pub const fn new(family: Family) -> Self {
        Self { family, layout: PhantomData }
    }
}

impl<S: RateAndStateLayout> OutputWriter for RateAndStateWriter<S> {
    fn quantities(&self) -> &'static [&'static str] {
        S::QUANTITIES
    }

    fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError> {
        let storage = storage_ref::<S>(storage)?;
        let mut frame = OutputFrame::new(self.family, time, storage.points());
        storage.fault().write_into(&mut frame);
        frame.push(STATE_VARIABLE, storage.rate_and_state().state.clone());
        storage.write_extra(&mut frame);
        Ok(frame)
    }
}
