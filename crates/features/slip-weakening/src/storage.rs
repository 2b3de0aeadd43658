use rupture_kernel::builder::{at_most, positive};
use rupture_kernel::domain::config::SlipWeakeningConfig;
use rupture_kernel::domain::constants::input::{
    COHESION, D_C, FORCED_RUPTURE_TIME, INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS, MU_D, MU_S,
};
use rupture_kernel::domain::constants::output::{
    FRICTION, NORMAL_STRESS, PEAK_SLIP_RATE, REGULARIZED_NORMAL_STRESS, RUPTURE_TIME,
    SHEAR_STRESS, SLIP, SLIP_RATE,
};
use rupture_kernel::prelude::*;
use rupture_kernel::state::FAULT_QUANTITIES;

/// Per-point slip-weakening parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlipWeakeningFields {
    pub mu_s: Vec<f64>,
    pub mu_d: Vec<f64>,
    pub d_c: Vec<f64>,
    pub cohesion: Vec<f64>,
}

impl SlipWeakeningFields {
    pub fn allocate(&mut self, points: usize) {
        for array in [&mut self.mu_s, &mut self.mu_d, &mut self.d_c, &mut self.cohesion] {
            array.clear();
            array.resize(points, 0.0);
        }
    }

    /// Reads per-point parameters, falling back to the uniform configuration values.
    ///
    /// # Errors
    /// Shape errors from the input, or a point with `d_c <= 0` or `mu_d > mu_s`.
    pub fn load(
        &mut self,
        input: &FaultInput,
        config: &SlipWeakeningConfig,
    ) -> Result<(), ComponentError> {
        self.mu_s = input.get_or(MU_S, config.mu_s)?;
        self.mu_d = input.get_or(MU_D, config.mu_d)?;
        self.d_c = input.get_or(D_C, config.d_c)?;
        self.cohesion = input.get_or(COHESION, config.cohesion)?;

        for i in 0..self.d_c.len() {
            positive(D_C, self.d_c[i]).context(format!("point {i}"))?;
            at_most(MU_D, self.mu_d[i], self.mu_s[i], "exceeds mu_s")
                .context(format!("point {i}"))?;
        }
        Ok(())
    }

    /// Weakening progress in `[0, 1]` after `slip`.
    #[must_use]
    pub fn weakening(&self, i: usize, slip: f64) -> f64 {
        (slip / self.d_c[i]).min(1.0)
    }

    /// Friction coefficient at weakening progress `f`.
    #[must_use]
    pub fn friction(&self, i: usize, f: f64) -> f64 {
        (self.mu_s[i] - self.mu_d[i]).mul_add(-f, self.mu_s[i])
    }
}

/// Accessors the shared initializer and writer need from every slip-weakening layout.
pub trait SlipWeakeningLayout: StateStorage {
    /// Input parameters that must be present.
    const REQUIRED_PARAMETERS: &'static [&'static str] =
        &[INITIAL_SHEAR_STRESS, INITIAL_NORMAL_STRESS];

    /// Output quantities, in frame order.
    const QUANTITIES: &'static [&'static str] = FAULT_QUANTITIES;

    fn fault(&self) -> &FaultState;
    fn parts_mut(&mut self) -> (&mut FaultState, &mut SlipWeakeningFields);

    /// Layout-specific initialization, run after the common fields are loaded.
    ///
    /// # Errors
    /// Missing or malformed layout-specific input.
    fn initialize_extra(&mut self, _input: &FaultInput) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Layout-specific output, appended after the common quantities.
    fn write_extra(&self, _frame: &mut OutputFrame) {}
}

/// Plain linear slip weakening.
#[rupture_derive::component]
pub struct SlipWeakeningStorage {
    family: Family,
    pub fault: FaultState,
    pub sw: SlipWeakeningFields,
}

impl SlipWeakeningStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: Family::LinearSlipWeakening,
            fault: FaultState::default(),
            sw: SlipWeakeningFields::default(),
        }
    }
}

impl Default for SlipWeakeningStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for SlipWeakeningStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::SLIP_WEAKENING
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        self.sw.allocate(points);
    }
}

impl SlipWeakeningLayout for SlipWeakeningStorage {
    fn fault(&self) -> &FaultState {
        &self.fault
    }

    fn parts_mut(&mut self) -> (&mut FaultState, &mut SlipWeakeningFields) {
        (&mut self.fault, &mut self.sw)
    }
}

/// Slip weakening with a prescribed per-point rupture time.
#[rupture_derive::component]
pub struct ForcedRuptureStorage {
    family: Family,
    pub fault: FaultState,
    pub sw: SlipWeakeningFields,
    pub forced_rupture_time: Vec<f64>,
}

impl ForcedRuptureStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: Family::LinearSlipWeakeningForcedRuptureTime,
            fault: FaultState::default(),
            sw: SlipWeakeningFields::default(),
            forced_rupture_time: Vec::new(),
        }
    }
}

impl Default for ForcedRuptureStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for ForcedRuptureStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::SLIP_WEAKENING | FieldSet::FORCED_RUPTURE
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        self.sw.allocate(points);
        self.forced_rupture_time.clear();
        self.forced_rupture_time.resize(points, f64::INFINITY);
    }
}

impl SlipWeakeningLayout for ForcedRuptureStorage {
    const REQUIRED_PARAMETERS: &'static [&'static str] =
        &[INITIAL_SHEAR_STRESS, INITIAL_NORMAL_STRESS, FORCED_RUPTURE_TIME];

    fn fault(&self) -> &FaultState {
        &self.fault
    }

    fn parts_mut(&mut self) -> (&mut FaultState, &mut SlipWeakeningFields) {
        (&mut self.fault, &mut self.sw)
    }

    fn initialize_extra(&mut self, input: &FaultInput) -> Result<(), ComponentError> {
        self.forced_rupture_time.copy_from_slice(input.get(FORCED_RUPTURE_TIME)?);
        Ok(())
    }
}

/// Slip weakening on a bimaterial interface.
#[rupture_derive::component]
pub struct BimaterialStorage {
    family: Family,
    pub fault: FaultState,
    pub sw: SlipWeakeningFields,
    /// Prakash-Clifton regularised effective normal stress.
    pub regularized_normal: Vec<f64>,
}

impl BimaterialStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: Family::LinearSlipWeakeningBimaterial,
            fault: FaultState::default(),
            sw: SlipWeakeningFields::default(),
            regularized_normal: Vec::new(),
        }
    }
}

impl Default for BimaterialStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for BimaterialStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::SLIP_WEAKENING | FieldSet::BIMATERIAL
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        self.sw.allocate(points);
        self.regularized_normal.clear();
        self.regularized_normal.resize(points, 0.0);
    }
}

impl SlipWeakeningLayout for BimaterialStorage {
    const QUANTITIES: &'static [&'static str] = &[
        SLIP,
        SLIP_RATE,
        SHEAR_STRESS,
        NORMAL_STRESS,
        FRICTION,
        RUPTURE_TIME,
        PEAK_SLIP_RATE,
        REGULARIZED_NORMAL_STRESS,
    ];

    fn fault(&self) -> &FaultState {
        &self.fault
    }

    fn parts_mut(&mut self) -> (&mut FaultState, &mut SlipWeakeningFields) {
        (&mut self.fault, &mut self.sw)
    }

    fn initialize_extra(&mut self, _input: &FaultInput) -> Result<(), ComponentError> {
        for i in 0..self.regularized_normal.len() {
            self.regularized_normal[i] = self.fault.effective_normal(i);
        }
        Ok(())
    }

    fn write_extra(&self, frame: &mut OutputFrame) {
        frame.push(REGULARIZED_NORMAL_STRESS, self.regularized_normal.clone());
    }
}
