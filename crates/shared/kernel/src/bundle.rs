use crate::component::{FrictionKernel, Initializer, OutputWriter, StateStorage, TimeStep};
use crate::domain::{Family, FieldSet};
use crate::error::ComponentError;
use crate::input::FaultInput;
use crate::output::OutputFrame;
use tracing::debug;

/// The four components of one friction-law family, owned together.
///
/// A bundle can only be obtained through [`ComponentBundle::assemble`], which rejects
/// components of different families and kernels that need fields the storage lacks.
#[derive(Debug)]
pub struct ComponentBundle {
    family: Family,
    storage: Box<dyn StateStorage>,
    initializer: Box<dyn Initializer>,
    kernel: Box<dyn FrictionKernel>,
    writer: Box<dyn OutputWriter>,
}

/// The slots of a bundle after [`ComponentBundle::into_parts`].
#[derive(Debug)]
pub struct BundleParts {
    pub storage: Box<dyn StateStorage>,
    pub initializer: Box<dyn Initializer>,
    pub kernel: Box<dyn FrictionKernel>,
    pub writer: Box<dyn OutputWriter>,
}

impl ComponentBundle {
    /// Checks the field contract and takes ownership of all four components.
    ///
    /// The storage decides the family; every other component must report the same one.
    ///
    /// # Errors
    /// * [`ComponentError::FamilyMismatch`] naming the first foreign component.
    /// * [`ComponentError::MissingFields`] when the kernel requires fields the storage lacks.
    pub fn assemble(
        storage: Box<dyn StateStorage>,
        initializer: Box<dyn Initializer>,
        kernel: Box<dyn FrictionKernel>,
        writer: Box<dyn OutputWriter>,
    ) -> Result<Self, ComponentError> {
        let family = storage.family();
        for (component, found) in [
            ("initializer", initializer.family()),
            ("kernel", kernel.family()),
            ("writer", writer.family()),
        ] {
            if found != family {
                return Err(ComponentError::FamilyMismatch {
                    component,
                    expected: family,
                    found,
                    context: None,
                });
            }
        }

        let missing = kernel.required_fields().difference(storage.fields());
        if !missing.is_empty() {
            return Err(ComponentError::MissingFields {
                missing,
                context: Some(format!("{family} storage").into()),
            });
        }

        Ok(Self { family, storage, initializer, kernel, writer })
    }

    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    #[must_use]
    pub fn fields(&self) -> FieldSet {
        self.storage.fields()
    }

    #[must_use]
    pub fn storage(&self) -> &dyn StateStorage {
        self.storage.as_ref()
    }

    #[must_use]
    pub fn initializer(&self) -> &dyn Initializer {
        self.initializer.as_ref()
    }

    #[must_use]
    pub fn kernel(&self) -> &dyn FrictionKernel {
        self.kernel.as_ref()
    }

    #[must_use]
    pub fn writer(&self) -> &dyn OutputWriter {
        self.writer.as_ref()
    }

    /// Allocates the storage for the input's fault and runs the initializer once.
    ///
    /// Required parameters and array lengths are checked before anything is allocated, so
    /// `num_points` is bounded by the arrays the input actually carries.
    ///
    /// # Errors
    /// Missing or misshapen input, or the initializer's failure.
    pub fn initialize(&mut self, input: &FaultInput) -> Result<(), ComponentError> {
        input.require(self.initializer.required_parameters())?;
        input.validate()?;
        self.storage.allocate(input.num_points());
        self.initializer.initialize(self.storage.as_mut(), input)?;
        debug!(family = %self.family, points = input.num_points(), "Fault initialized");
        Ok(())
    }

    /// Advances the whole fault by one step.
    ///
    /// # Errors
    /// Propagates the kernel's failure.
    pub fn evaluate(&mut self, step: TimeStep) -> Result<(), ComponentError> {
        self.kernel.evaluate(self.storage.as_mut(), step)
    }

    /// # Errors
    /// Propagates the writer's failure.
    pub fn write(&self, time: f64) -> Result<OutputFrame, ComponentError> {
        self.writer.write(self.storage.as_ref(), time)
    }

    #[must_use]
    pub fn into_parts(self) -> BundleParts {
        BundleParts {
            storage: self.storage,
            initializer: self.initializer,
            kernel: self.kernel,
            writer: self.writer,
        }
    }
}
