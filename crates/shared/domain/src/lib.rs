//! # Domain Models
//!
//! Pure types shared by the dispatcher, the kernel and every friction-law family crate.
//! Keep it lean: no I/O, no physics, no dispatch logic. Just data and simple helpers.
//!
//! * [`FrictionLaw`]: the closed set of friction-law tags a configuration can select.
//! * [`Family`]: the identity of an assembled component bundle.
//! * [`FieldSet`]: which groups of per-point fields a storage layout carries.
//! * [`config::RuptureConfig`]: the configuration snapshot read at dispatch time.

pub mod config;
pub mod constants;
pub mod family;
pub mod fields;
pub mod law;

pub use family::Family;
pub use fields::FieldSet;
pub use law::FrictionLaw;
