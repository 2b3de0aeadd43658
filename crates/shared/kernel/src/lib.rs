//! Kernel contracts shared by every friction-law family.
//! Keep this crate lightweight: traits, the bundle value type and the fault-point helpers
//! every family builds on. No family-specific physics lives here.
//!
//! ## Assembling a bundle
//! ```rust
//! use rupture_kernel::bundle::ComponentBundle;
//! use rupture_kernel::component::{
//!     FamilyBound, FrictionKernel, Initializer, OutputWriter, StateStorage, TimeStep,
//! };
//! use rupture_kernel::domain::{Family, FieldSet};
//! use rupture_kernel::error::ComponentError;
//! use rupture_kernel::input::FaultInput;
//! use rupture_kernel::output::OutputFrame;
//!
//! #[rupture_derive::component]
//! struct Points { family: Family, points: usize }
//!
//! impl StateStorage for Points {
//!     fn fields(&self) -> FieldSet { FieldSet::FAULT }
//!     fn points(&self) -> usize { self.points }
//!     fn allocate(&mut self, points: usize) { self.points = points; }
//! }
//!
//! #[rupture_derive::component]
//! struct Noop { family: Family }
//!
//! impl Initializer for Noop {
//!     fn required_parameters(&self) -> &'static [&'static str] { &[] }
//!     fn initialize(&self, _: &mut dyn StateStorage, _: &FaultInput) -> Result<(), ComponentError> {
//!         Ok(())
//!     }
//! }
//!
//! impl FrictionKernel for Noop {
//!     fn required_fields(&self) -> FieldSet { FieldSet::FAULT }
//!     fn evaluate(&mut self, _: &mut dyn StateStorage, _: TimeStep) -> Result<(), ComponentError> {
//!         Ok(())
//!     }
//! }
//!
//! impl OutputWriter for Noop {
//!     fn quantities(&self) -> &'static [&'static str] { &[] }
//!     fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError> {
//!         Ok(OutputFrame::new(self.family, time, storage.points()))
//!     }
//! }
//!
//! let family = Family::NoFault;
//! let mut bundle = ComponentBundle::assemble(
//!     Box::new(Points { family, points: 0 }),
//!     Box::new(Noop { family }),
//!     Box::new(Noop { family }),
//!     Box::new(Noop { family }),
//! )
//! .unwrap();
//! bundle.initialize(&FaultInput::new(4)).unwrap();
//! assert_eq!(bundle.write(0.0).unwrap().points, 4);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use rupture_kernel::config::load_config;
//! use rupture_kernel::domain::config::RuptureConfig;
//!
//! let cfg: RuptureConfig = load_config(Some("rupture.toml")).unwrap_or_default();
//! ```

// Lets `#[rupture_derive::component]` expansions resolve inside this crate too.
extern crate self as rupture_kernel;

pub mod builder;
pub mod bundle;
pub mod component;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod prelude;
pub mod state;

pub use rupture_domain as domain;
