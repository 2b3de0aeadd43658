//! # Rupture
//!
//! Facade over the friction-law families: the registry mapping each [`FrictionLaw`] tag to
//! its builder, and the dispatcher turning a [`RuptureConfig`] into a [`ComponentBundle`].
//!
//! Keep this crate thin: it composes the family crates, it does not implement physics.
//!
//! ```
//! use rupture::domain::FrictionLaw;
//! use rupture::kernel::prelude::*;
//!
//! let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakening);
//! let bundle = rupture::dispatch(&config).expect("enabled family");
//! assert_eq!(bundle.family(), Family::LinearSlipWeakening);
//!
//! let disabled = RuptureConfig::with_law(FrictionLaw::RateAndStateVelocityWeakening);
//! assert!(matches!(rupture::dispatch(&disabled), Err(rupture::DispatchError::Disabled { .. })));
//! ```
//!
//! [`FrictionLaw`]: rupture_kernel::domain::FrictionLaw
//! [`RuptureConfig`]: rupture_kernel::domain::config::RuptureConfig
//! [`ComponentBundle`]: rupture_kernel::bundle::ComponentBundle

pub mod dispatcher;
pub mod error;
pub mod registry;

pub use dispatcher::{Dispatcher, dispatch};
pub use error::{DispatchError, DispatchErrorExt};
pub use registry::{BuilderFactory, Entry, Registry, RegistryBuilder};
pub use rupture_kernel as kernel;
pub use rupture_kernel::domain;

/// The family crates, for callers that build a bundle without dispatch.
pub mod families {
    pub use rupture_imposed_slip as imposed_slip;
    pub use rupture_no_fault as no_fault;
    pub use rupture_rate_and_state as rate_and_state;
    pub use rupture_slip_weakening as slip_weakening;
}
