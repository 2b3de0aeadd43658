//! Friction-law registry: one entry per tag, built once, read-only afterwards.

use fxhash::FxHashMap;
use rupture_imposed_slip::ImposedSlipRatesBuilder;
use rupture_kernel::builder::VariantBuilder;
use rupture_kernel::domain::FrictionLaw;
use rupture_kernel::domain::config::RuptureConfig;
use rupture_no_fault::NoFaultBuilder;
use rupture_rate_and_state::{
    FastVelocityWeakeningBuilder, RateAndStateAgingBuilder, RateAndStateSlipBuilder,
    ThermalPressurisationBuilder,
};
use rupture_slip_weakening::{
    BimaterialBuilder, ForcedRuptureTimeBuilder, LinearSlipWeakeningBuilder,
};
use std::sync::OnceLock;

/// Creates the builder of one entry from a configuration snapshot.
pub type BuilderFactory = fn(&RuptureConfig) -> Box<dyn VariantBuilder>;

/// Registry policy attached to a recognized tag.
#[derive(Debug, Clone, Copy)]
pub enum Entry {
    Enabled(BuilderFactory),
    Disabled { reason: &'static str },
}

impl Entry {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

static STANDARD: OnceLock<Registry> = OnceLock::new();

/// Tag to entry mapping.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: FxHashMap<FrictionLaw, Entry>,
}

impl Registry {
    /// The registry of every family this workspace ships, built on first use.
    pub fn standard() -> &'static Self {
        STANDARD.get_or_init(|| standard_entries().build())
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Starts a new registry from this one's entries.
    #[must_use]
    pub fn extend(&self) -> RegistryBuilder {
        RegistryBuilder { entries: self.entries.clone() }
    }

    #[must_use]
    pub fn get(&self, law: FrictionLaw) -> Option<&Entry> {
        self.entries.get(&law)
    }

    #[must_use]
    pub fn contains(&self, law: FrictionLaw) -> bool {
        self.entries.contains_key(&law)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries ordered by code.
    #[must_use]
    pub fn entries(&self) -> Vec<(FrictionLaw, Entry)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(law, entry)| (*law, *entry)).collect();
        entries.sort_unstable_by_key(|(law, _)| law.code());
        entries
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: FxHashMap<FrictionLaw, Entry>,
}

impl RegistryBuilder {
    /// Registers (or replaces) an enabled entry.
    #[must_use]
    pub fn enable(mut self, law: FrictionLaw, factory: BuilderFactory) -> Self {
        self.entries.insert(law, Entry::Enabled(factory));
        self
    }

    /// Registers (or replaces) a withdrawn entry.
    #[must_use]
    pub fn disable(mut self, law: FrictionLaw, reason: &'static str) -> Self {
        self.entries.insert(law, Entry::Disabled { reason });
        self
    }

    #[must_use]
    pub fn build(self) -> Registry {
        Registry { entries: self.entries }
    }
}

/// The thermal flag only matters here; every other entry ignores it.
fn fast_velocity_weakening(config: &RuptureConfig) -> Box<dyn VariantBuilder> {
    if config.thermal_pressurisation {
        Box::new(ThermalPressurisationBuilder::new(config))
    } else {
        Box::new(FastVelocityWeakeningBuilder::new(config))
    }
}

fn standard_entries() -> RegistryBuilder {
    Registry::builder()
        .enable(FrictionLaw::NoFault, |config| Box::new(NoFaultBuilder::new(config)))
        .enable(FrictionLaw::LinearSlipWeakening, |config| {
            Box::new(LinearSlipWeakeningBuilder::new(config))
        })
        .enable(FrictionLaw::RateAndStateAgingLaw, |config| {
            Box::new(RateAndStateAgingBuilder::new(config))
        })
        .enable(FrictionLaw::RateAndStateSlipLaw, |config| {
            Box::new(RateAndStateSlipBuilder::new(config))
        })
        .enable(FrictionLaw::LinearSlipWeakeningBimaterial, |config| {
            Box::new(BimaterialBuilder::new(config))
        })
        .disable(
            FrictionLaw::RateAndStateVelocityWeakening,
            "withdrawn; use RateAndStateFastVelocityWeakening (103)",
        )
        .enable(FrictionLaw::LinearSlipWeakeningForcedRuptureTime, |config| {
            Box::new(ForcedRuptureTimeBuilder::new(config))
        })
        .enable(FrictionLaw::ImposedSlipRates, |config| {
            Box::new(ImposedSlipRatesBuilder::new(config))
        })
        .disable(
            FrictionLaw::RateAndStateAgingNucleation,
            "withdrawn; use RateAndStateAgingLaw (3) with a stress perturbation",
        )
        .enable(FrictionLaw::RateAndStateFastVelocityWeakening, fast_velocity_weakening)
}
