use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::law::FrictionLaw;

/// Identity of an assembled component bundle.
///
/// One tag may produce more than one family: `RateAndStateFastVelocityWeakening` yields
/// either [`Family::FastVelocityWeakening`] or [`Family::ThermalPressurisation`] depending
/// on the thermal-pressurisation flag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum Family {
    NoFault,
    LinearSlipWeakening,
    LinearSlipWeakeningForcedRuptureTime,
    LinearSlipWeakeningBimaterial,
    RateAndStateAging,
    RateAndStateSlip,
    FastVelocityWeakening,
    ThermalPressurisation,
    ImposedSlipRates,
}

impl Family {
    /// The tag a configuration selects to obtain this family.
    #[must_use]
    pub const fn law(self) -> FrictionLaw {
        match self {
            Self::NoFault => FrictionLaw::NoFault,
            Self::LinearSlipWeakening => FrictionLaw::LinearSlipWeakening,
            Self::LinearSlipWeakeningForcedRuptureTime => {
                FrictionLaw::LinearSlipWeakeningForcedRuptureTime
            },
            Self::LinearSlipWeakeningBimaterial => FrictionLaw::LinearSlipWeakeningBimaterial,
            Self::RateAndStateAging => FrictionLaw::RateAndStateAgingLaw,
            Self::RateAndStateSlip => FrictionLaw::RateAndStateSlipLaw,
            Self::FastVelocityWeakening | Self::ThermalPressurisation => {
                FrictionLaw::RateAndStateFastVelocityWeakening
            },
            Self::ImposedSlipRates => FrictionLaw::ImposedSlipRates,
        }
    }

    /// Every family, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}
