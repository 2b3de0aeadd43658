//! Everything a family crate needs to define its components.

pub use crate::builder::VariantBuilder;
pub use crate::bundle::ComponentBundle;
pub use crate::component::{
    FamilyBound, FrictionKernel, Initializer, OutputWriter, StateStorage, TimeStep, storage_mut,
    storage_ref,
};
pub use crate::domain::config::RuptureConfig;
pub use crate::domain::{Family, FieldSet};
pub use crate::error::{ComponentError, ComponentErrorExt};
pub use crate::input::FaultInput;
pub use crate::output::OutputFrame;
pub use crate::state::{FaultParams, FaultState, PointUpdate};
