//! # Rate-and-State Friction
//!
//! Four families built on one regularised rate-and-state friction law,
//! `f = a asinh(V / (2 V0) * exp(psi / a))`, solved point-wise against radiation damping:
//!
//! | Family                  | State variable | Evolution                                  |
//! |-------------------------|----------------|--------------------------------------------|
//! | `RateAndStateAging`     | `theta`        | aging law                                  |
//! | `RateAndStateSlip`      | `theta`        | slip law                                   |
//! | `FastVelocityWeakening` | `psi`          | relaxation towards the flash-heating state |
//! | `ThermalPressurisation` | `psi`          | as above, with temperature and pore pressure |
//!
//! Aging and slip share [`storage::RateAndStateStorage`]; every layout shares the
//! initializer and the writer through [`storage::RateAndStateLayout`]. The two
//! fast-velocity-weakening families are selected by the same friction-law tag; which one is
//! built depends on the configuration's thermal-pressurisation flag.

pub mod builder;
pub mod initializer;
pub mod kernel;
pub mod solver;
pub mod storage;
pub mod writer;

pub use builder::{
    FastVelocityWeakeningBuilder, RateAndStateAgingBuilder, RateAndStateSlipBuilder,
    ThermalPressurisationBuilder,
};
