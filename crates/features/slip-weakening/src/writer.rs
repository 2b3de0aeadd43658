use crate::storage::SlipWeakeningLayout;
use rupture_kernel::prelude::*;
use std::marker::PhantomData;

/// Writes the common fault quantities plus whatever the layout `S` adds.
#[rupture_derive::component]
pub struct SlipWeakeningWriter<S: SlipWeakeningLayout> {
    family: Family,
    layout: PhantomData<fn() -> S>,
}

impl<S: SlipWeakeningLayout> SlipWeakeningWriter<S> {
    #[must_use]
    pub const fn new(family: Family) -> Self {
        Self { family, layout: PhantomData }
    }
}

impl<S: SlipWeakeningLayout> OutputWriter for SlipWeakeningWriter<S> {
    fn quantities(&self) -> &'static [&'static str] {
        S::QUANTITIES
    }

    fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError> {
        let storage = storage_ref::<S>(storage)?;
        let mut frame = OutputFrame::new(self.family, time, storage.points());
        storage.fault().write_into(&mut frame);
        storage.write_extra(&mut frame);
        Ok(frame)
    }
}
