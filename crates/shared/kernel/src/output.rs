use crate::domain::Family;
use serde::Serialize;

/// Marker written for points that have not ruptured yet.
pub const NOT_RUPTURED: f64 = -1.0;

/// Snapshot of output quantities at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFrame {
    pub family: Family,
    pub time: f64,
    pub points: usize,
    pub quantities: Vec<Quantity>,
}

/// One named per-point quantity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub name: &'static str,
    pub values: Vec<f64>,
}

impl OutputFrame {
    #[must_use]
    pub const fn new(family: Family, time: f64, points: usize) -> Self {
        Self { family, time, points, quantities: Vec::new() }
    }

    #[must_use]
    pub fn with(mut self, name: &'static str, values: Vec<f64>) -> Self {
        self.push(name, values);
        self
    }

    pub fn push(&mut self, name: &'static str, values: Vec<f64>) {
        debug_assert_eq!(values.len(), self.points, "quantity `{name}` has the wrong length");
        self.quantities.push(Quantity { name, values });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.quantities.iter().find(|q| q.name == name).map(|q| q.values.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.quantities.iter().map(|q| q.name)
    }
}
