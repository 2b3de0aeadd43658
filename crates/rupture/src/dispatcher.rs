use crate::error::DispatchError;
use crate::registry::{Entry, Registry};
use rupture_kernel::builder::VariantBuilder;
use rupture_kernel::bundle::ComponentBundle;
use rupture_kernel::domain::FrictionLaw;
use rupture_kernel::domain::config::RuptureConfig;
use tracing::{error, info};

/// Turns a configuration into the bundle of exactly one family.
///
/// Dispatch reads the registry only, so one dispatcher can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    registry: &'a Registry,
}

impl Dispatcher<'static> {
    /// Dispatches against [`Registry::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self { registry: Registry::standard() }
    }
}

impl Default for Dispatcher<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> Dispatcher<'a> {
    #[must_use]
    pub const fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Resolves the configured code to the builder of one family, without building.
    ///
    /// # Errors
    /// [`DispatchError::Unrecognized`] for a code with no tag or no registry entry, and
    /// [`DispatchError::Disabled`] for a withdrawn tag.
    pub fn select(&self, config: &RuptureConfig) -> Result<Box<dyn VariantBuilder>, DispatchError> {
        let code = config.friction_law;
        let Some(law) = FrictionLaw::from_code(code) else {
            error!(code, "Unrecognized friction law");
            return Err(DispatchError::Unrecognized { code, context: None });
        };

        match self.registry.get(law).copied() {
            Some(Entry::Enabled(factory)) => Ok(factory(config)),
            Some(Entry::Disabled { reason }) => {
                error!(%law, code, reason, "Friction law is disabled");
                Err(DispatchError::Disabled {
                    law,
                    reason,
                    context: Some("Registry policy".into()),
                })
            },
            None => {
                error!(%law, code, "Friction law has no registry entry");
                Err(DispatchError::Unrecognized {
                    code,
                    context: Some(format!("{law} is not registered").into()),
                })
            },
        }
    }

    /// Selects and runs the builder; the caller owns the returned bundle.
    ///
    /// # Errors
    /// Any [`Dispatcher::select`] failure, or [`DispatchError::Construction`] naming the
    /// family whose builder failed.
    pub fn dispatch(&self, config: &RuptureConfig) -> Result<ComponentBundle, DispatchError> {
        let builder = self.select(config)?;
        let family = builder.family();

        match builder.build() {
            Ok(bundle) => {
                info!(
                    law = %family.law(),
                    %family,
                    fields = %bundle.fields(),
                    "Friction law selected"
                );
                Ok(bundle)
            },
            Err(source) => {
                error!(%family, error = %source, "Friction law construction failed");
                Err(DispatchError::Construction { family, source, context: None })
            },
        }
    }
}

/// Dispatches `config` against the standard registry.
///
/// # Errors
/// See [`Dispatcher::dispatch`].
pub fn dispatch(config: &RuptureConfig) -> Result<ComponentBundle, DispatchError> {
    Dispatcher::standard().dispatch(config)
}
