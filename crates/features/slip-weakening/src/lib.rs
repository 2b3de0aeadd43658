//! # Linear Slip Weakening
//!
//! Three families share one friction model, `mu = mu_s - (mu_s - mu_d) * min(slip / d_c, 1)`:
//!
//! * [`Family::LinearSlipWeakening`]: the plain law.
//! * [`Family::LinearSlipWeakeningForcedRuptureTime`]: friction is additionally ramped down
//!   from a prescribed per-point rupture time, which nucleates rupture on schedule.
//! * [`Family::LinearSlipWeakeningBimaterial`]: strength follows a Prakash-Clifton regularised
//!   normal stress, which keeps bimaterial interfaces well posed.
//!
//! Each family has its own storage layout and builder; the initializer and the writer are
//! shared through [`storage::SlipWeakeningLayout`].
//!
//! [`Family::LinearSlipWeakening`]: rupture_kernel::domain::Family::LinearSlipWeakening
//! [`Family::LinearSlipWeakeningForcedRuptureTime`]: rupture_kernel::domain::Family::LinearSlipWeakeningForcedRuptureTime
//! [`Family::LinearSlipWeakeningBimaterial`]: rupture_kernel::domain::Family::LinearSlipWeakeningBimaterial

pub mod builder;
pub mod initializer;
pub mod kernel;
pub mod storage;
pub mod writer;

pub use builder::{BimaterialBuilder, ForcedRuptureTimeBuilder, LinearSlipWeakeningBuilder};
