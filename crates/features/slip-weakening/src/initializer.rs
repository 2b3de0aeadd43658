use crate::storage::SlipWeakeningLayout;
use rupture_kernel::domain::config::SlipWeakeningConfig;
use rupture_kernel::prelude::*;
use std::marker::PhantomData;

/// Loads stresses and slip-weakening parameters into any slip-weakening layout `S`.
#[rupture_derive::component]
pub struct SlipWeakeningInitializer<S: SlipWeakeningLayout> {
    family: Family,
    config: SlipWeakeningConfig,
    layout: PhantomData<fn() -> S>,
}

impl<S: SlipWeakeningLayout> SlipWeakeningInitializer<S> {
    #[must_use]
    pub const fn new(family: Family, config: SlipWeakeningConfig) -> Self {
        Self { family, config, layout: PhantomData }
    }
}

impl<S: SlipWeakeningLayout> Initializer for SlipWeakeningInitializer<S> {
    fn required_parameters(&self) -> &'static [&'static str] {
        S::REQUIRED_PARAMETERS
    }

    fn initialize(
        &self,
        storage: &mut dyn StateStorage,
        input: &FaultInput,
    ) -> Result<(), ComponentError> {
        input.require(S::REQUIRED_PARAMETERS)?;
        let storage = storage_mut::<S>(storage)?;
        let (fault, sw) = storage.parts_mut();
        fault.load(input)?;
        sw.load(input, &self.config)?;
        storage.initialize_extra(input)
    }
}
