use crate::constants::fields::{
    BIMATERIAL, FAST_VELOCITY_WEAKENING, FAULT, FORCED_RUPTURE, IMPOSED_SLIP, RATE_AND_STATE,
    SLIP_WEAKENING, THERMAL_PRESSURISATION,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Named groups of per-point fields a storage layout carries.
    ///
    /// A kernel declares the groups it reads and writes; a bundle is only assembled when the
    /// storage provides all of them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FieldSet: u32 {
        const FAULT = 1 << 0;
        const SLIP_WEAKENING = 1 << 1;
        const FORCED_RUPTURE = 1 << 2;
        const BIMATERIAL = 1 << 3;
        const RATE_AND_STATE = 1 << 4;
        const FAST_VELOCITY_WEAKENING = 1 << 5;
        const THERMAL_PRESSURISATION = 1 << 6;
        const IMPOSED_SLIP = 1 << 7;
    }
}

impl FieldSet {
    /// Lower-case names of the contained groups, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::FAULT, FAULT),
            (Self::SLIP_WEAKENING, SLIP_WEAKENING),
            (Self::FORCED_RUPTURE, FORCED_RUPTURE),
            (Self::BIMATERIAL, BIMATERIAL),
            (Self::RATE_AND_STATE, RATE_AND_STATE),
            (Self::FAST_VELOCITY_WEAKENING, FAST_VELOCITY_WEAKENING),
            (Self::THERMAL_PRESSURISATION, THERMAL_PRESSURISATION),
            (Self::IMPOSED_SLIP, IMPOSED_SLIP),
        ]
        .into_iter()
        .filter_map(move |(flag, name)| self.contains(flag).then_some(name))
    }
}

impl From<&str> for FieldSet {
    fn from(s: &str) -> Self {
        match s {
            FAULT => Self::FAULT,
            SLIP_WEAKENING => Self::SLIP_WEAKENING,
            FORCED_RUPTURE => Self::FORCED_RUPTURE,
            BIMATERIAL => Self::BIMATERIAL,
            RATE_AND_STATE => Self::RATE_AND_STATE,
            FAST_VELOCITY_WEAKENING => Self::FAST_VELOCITY_WEAKENING,
            THERMAL_PRESSURISATION => Self::THERMAL_PRESSURISATION,
            IMPOSED_SLIP => Self::IMPOSED_SLIP,
            "all" | "*" => Self::all(),
            _ => Self::empty(),
        }
    }
}

impl From<u32> for FieldSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in self.names() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

impl Serialize for FieldSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for FieldSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
