use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, FromRepr, IntoStaticStr};

/// The closed set of friction-law tags a configuration can select.
///
/// Discriminants are the stable numeric codes used in configuration files. They are
/// identifiers, not ordinals: gaps are intentional and the order carries no meaning.
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
    FromRepr,
    IntoStaticStr,
)]
#[repr(u32)]
pub enum FrictionLaw {
    NoFault = 0,
    LinearSlipWeakening = 2,
    RateAndStateAgingLaw = 3,
    RateAndStateSlipLaw = 4,
    LinearSlipWeakeningBimaterial = 6,
    RateAndStateVelocityWeakening = 7,
    LinearSlipWeakeningForcedRuptureTime = 16,
    ImposedSlipRates = 33,
    RateAndStateAgingNucleation = 101,
    RateAndStateFastVelocityWeakening = 103,
}

impl FrictionLaw {
    /// Stable numeric code of the tag.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Maps a raw configuration code back to its tag, `None` for codes outside the enumeration.
    #[must_use]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Every tag, ordered by code.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<u32> for FrictionLaw {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl From<FrictionLaw> for u32 {
    fn from(law: FrictionLaw) -> Self {
        law.code()
    }
}
