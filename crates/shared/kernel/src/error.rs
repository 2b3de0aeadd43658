use crate::domain::{Family, FieldSet};
use std::borrow::Cow;

/// Failures raised while building, assembling or driving the components of a bundle.
#[rupture_derive::rupture_error]
pub enum ComponentError {
    #[error(
        "Storage mismatch{}: expected {expected}, found a {found} layout",
        format_context(.context)
    )]
    StorageMismatch { expected: &'static str, found: Family, context: Option<Cow<'static, str>> },

    #[error("Missing input parameter{}: {name}", format_context(.context))]
    MissingParameter { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error(
        "Shape mismatch{}: `{name}` has {found} values, expected {expected}",
        format_context(.context)
    )]
    ShapeMismatch {
        name: Cow<'static, str>,
        expected: usize,
        found: usize,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid parameter{}: {name} = {value} ({reason})", format_context(.context))]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
        context: Option<Cow<'static, str>>,
    },

    #[error(
        "Family mismatch{}: {component} belongs to {found}, bundle is {expected}",
        format_context(.context)
    )]
    FamilyMismatch {
        component: &'static str,
        expected: Family,
        found: Family,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing storage fields{}: kernel needs {missing}", format_context(.context))]
    MissingFields { missing: FieldSet, context: Option<Cow<'static, str>> },

    #[error(
        "Newton solve did not converge{}: point {point} after {iterations} iterations",
        format_context(.context)
    )]
    NonConvergence { point: usize, iterations: u32, context: Option<Cow<'static, str>> },

    #[error("Fault input error{}: {source}", format_context(.context))]
    Input { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal component error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ComponentError {
    #[must_use]
    pub fn missing(name: impl Into<Cow<'static, str>>) -> Self {
        Self::MissingParameter { name: name.into(), context: None }
    }

    #[must_use]
    pub const fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason, context: None }
    }
}
