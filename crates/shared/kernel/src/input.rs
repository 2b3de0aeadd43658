use crate::error::{ComponentError, ComponentErrorExt};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Per-point named parameter table handed to an initializer.
///
/// ```json
/// { "num_points": 2, "parameters": { "initial_shear_stress": [70e6, 81.6e6] } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultInput {
    num_points: usize,
    #[serde(default)]
    parameters: BTreeMap<String, Vec<f64>>,
}

impl FaultInput {
    #[must_use]
    pub const fn new(num_points: usize) -> Self {
        Self { num_points, parameters: BTreeMap::new() }
    }

    /// Parses and shape-checks a JSON document.
    ///
    /// # Errors
    /// Returns [`ComponentError::Input`] for malformed JSON and
    /// [`ComponentError::ShapeMismatch`] when a parameter length differs from `num_points`.
    pub fn from_json(raw: &str) -> Result<Self, ComponentError> {
        let input: Self = serde_json::from_str(raw).context("Parsing fault input")?;
        input.validate()?;
        Ok(input)
    }

    /// Adds (or replaces) a per-point parameter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.insert(name, values);
        self
    }

    /// Adds a parameter holding `value` at every point.
    #[must_use]
    pub fn uniform(self, name: impl Into<String>, value: f64) -> Self {
        let values = vec![value; self.num_points];
        self.with(name, values)
    }

    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.parameters.insert(name.into(), values);
    }

    #[must_use]
    pub const fn num_points(&self) -> usize {
        self.num_points
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Checks every parameter against `num_points`.
    ///
    /// # Errors
    /// Returns the first [`ComponentError::ShapeMismatch`].
    pub fn validate(&self) -> Result<(), ComponentError> {
        self.parameters.iter().try_for_each(|(name, values)| {
            self.check_shape(name.clone(), values.len())
        })
    }

    /// A required parameter.
    ///
    /// # Errors
    /// [`ComponentError::MissingParameter`] or [`ComponentError::ShapeMismatch`].
    pub fn get(&self, name: &'static str) -> Result<&[f64], ComponentError> {
        let values = self.parameters.get(name).ok_or_else(|| ComponentError::missing(name))?;
        self.check_shape(name, values.len())?;
        Ok(values)
    }

    /// An optional parameter, filled with `fallback` at every point when absent.
    ///
    /// # Errors
    /// [`ComponentError::ShapeMismatch`] when present with the wrong length.
    pub fn get_or(&self, name: &'static str, fallback: f64) -> Result<Vec<f64>, ComponentError> {
        match self.parameters.get(name) {
            Some(values) => {
                self.check_shape(name, values.len())?;
                Ok(values.clone())
            },
            None => Ok(vec![fallback; self.num_points]),
        }
    }

    /// Fails with the first parameter of `names` that is absent.
    ///
    /// # Errors
    /// [`ComponentError::MissingParameter`].
    pub fn require(&self, names: &[&'static str]) -> Result<(), ComponentError> {
        match names.iter().find(|name| !self.contains(name)) {
            Some(name) => Err(ComponentError::missing(*name)),
            None => Ok(()),
        }
    }

    fn check_shape(
        &self,
        name: impl Into<Cow<'static, str>>,
        found: usize,
    ) -> Result<(), ComponentError> {
        if found == self.num_points {
            Ok(())
        } else {
            Err(ComponentError::ShapeMismatch {
                name: name.into(),
                expected: self.num_points,
                found,
                context: None,
            })
        }
    }
}
