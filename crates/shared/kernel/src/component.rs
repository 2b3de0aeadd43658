//! The four capabilities a friction-law bundle is made of.
//!
//! Every component reports the [`Family`] its builder constructed it with. Storage layouts
//! are opaque to the dispatcher: kernels, initializers and writers recover their concrete
//! layout with [`storage_ref`] / [`storage_mut`], which fail instead of reading a layout
//! that belongs to another family.

use crate::domain::{Family, FieldSet};
use crate::error::ComponentError;
use crate::input::FaultInput;
use crate::output::OutputFrame;
use std::any::{Any, type_name};
use std::fmt::Debug;

/// Identity shared by all four components of a bundle.
pub trait FamilyBound {
    fn family(&self) -> Family;
}

/// Helper to allow downcasting from a storage trait object.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Per-fault-point state layout.
pub trait StateStorage: FamilyBound + AsAny + Debug + Send {
    /// Field groups this layout carries.
    fn fields(&self) -> FieldSet;

    /// Number of fault points currently allocated.
    fn points(&self) -> usize;

    /// Resizes every array to `points`, resetting all values.
    fn allocate(&mut self, points: usize);
}

/// Populates a freshly allocated storage from fault input.
pub trait Initializer: FamilyBound + Debug + Send {
    /// Per-point parameters that must be present in the input.
    fn required_parameters(&self) -> &'static [&'static str];

    /// # Errors
    /// Fails on a foreign storage layout or on missing or malformed input parameters.
    fn initialize(
        &self,
        storage: &mut dyn StateStorage,
        input: &FaultInput,
    ) -> Result<(), ComponentError>;
}

/// Advances every fault point by one time step.
pub trait FrictionKernel: FamilyBound + Debug + Send {
    /// Field groups the kernel reads or writes.
    fn required_fields(&self) -> FieldSet;

    /// # Errors
    /// Fails on a foreign storage layout or when the point-wise solve breaks down.
    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError>;
}

/// Extracts output quantities from the storage.
pub trait OutputWriter: FamilyBound + Debug + Send {
    /// Quantity names, in the order they appear in every frame.
    fn quantities(&self) -> &'static [&'static str];

    /// # Errors
    /// Fails on a foreign storage layout.
    fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError>;
}

/// One step of the driver's clock. `time` is the simulation time at the end of the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeStep {
    pub time: f64,
    pub dt: f64,
}

impl TimeStep {
    #[must_use]
    pub const fn new(time: f64, dt: f64) -> Self {
        Self { time, dt }
    }

    /// The `index`-th step (1-based) of a fixed-size schedule.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn nth(index: usize, dt: f64) -> Self {
        Self { time: index as f64 * dt, dt }
    }
}

/// Recovers the concrete layout `S` behind a storage trait object.
///
/// # Errors
/// Returns [`ComponentError::StorageMismatch`] when `storage` is not an `S`.
pub fn storage_ref<S: StateStorage>(storage: &dyn StateStorage) -> Result<&S, ComponentError> {
    storage.as_any().downcast_ref::<S>().ok_or_else(|| mismatch::<S>(storage.family()))
}

/// Mutable counterpart of [`storage_ref`].
///
/// # Errors
/// Returns [`ComponentError::StorageMismatch`] when `storage` is not an `S`.
pub fn storage_mut<S: StateStorage>(
    storage: &mut dyn StateStorage,
) -> Result<&mut S, ComponentError> {
    let found = storage.family();
    storage.as_any_mut().downcast_mut::<S>().ok_or_else(|| mismatch::<S>(found))
}

fn mismatch<S>(found: Family) -> ComponentError {
    ComponentError::StorageMismatch { expected: type_name::<S>(), found, context: None }
}
