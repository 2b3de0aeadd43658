use rupture_kernel::domain::{Family, FrictionLaw};
use rupture_kernel::error::ComponentError;
use std::borrow::Cow;

/// Why a configuration did not yield a bundle.
#[rupture_derive::rupture_error]
pub enum DispatchError {
    #[error(
        "Friction law {law} ({}) is disabled{}: {reason}",
        .law.code(),
        format_context(.context)
    )]
    Disabled { law: FrictionLaw, reason: &'static str, context: Option<Cow<'static, str>> },

    #[error("Unrecognized friction law{}: code {code}", format_context(.context))]
    Unrecognized { code: u32, context: Option<Cow<'static, str>> },

    #[error("Failed to build {family}{}: {source}", format_context(.context))]
    Construction { family: Family, source: ComponentError, context: Option<Cow<'static, str>> },
}

impl DispatchError {
    /// The tag the failure is about, when the code was recognized.
    #[must_use]
    pub fn law(&self) -> Option<FrictionLaw> {
        match self {
            Self::Disabled { law, .. } => Some(*law),
            Self::Unrecognized { code, .. } => FrictionLaw::from_code(*code),
            Self::Construction { family, .. } => Some(family.law()),
        }
    }
}
