use rupture_kernel::builder::positive;
use rupture_kernel::domain::config::{RateAndStateConfig, ThermalConfig};
use rupture_kernel::domain::constants::input::{
    HALF_WIDTH, INITIAL_NORMAL_STRESS, INITIAL_PRESSURE, INITIAL_SHEAR_STRESS, INITIAL_TEMPERATURE,
    RS_SRW,
};
use rupture_kernel::domain::constants::output::{
    FRICTION, NORMAL_STRESS, PEAK_SLIP_RATE, PORE_PRESSURE, RUPTURE_TIME, SHEAR_STRESS, SLIP,
    SLIP_RATE, STATE_VARIABLE, TEMPERATURE,
};
use rupture_kernel::prelude::*;

const RS_QUANTITIES: &[&str] = &[
    SLIP,
    SLIP_RATE,
    SHEAR_STRESS,
    NORMAL_STRESS,
    FRICTION,
    RUPTURE_TIME,
    PEAK_SLIP_RATE,
    STATE_VARIABLE,
];

const TP_QUANTITIES: &[&str] = &[
    SLIP,
    SLIP_RATE,
    SHEAR_STRESS,
    NORMAL_STRESS,
    FRICTION,
    RUPTURE_TIME,
    PEAK_SLIP_RATE,
    STATE_VARIABLE,
    TEMPERATURE,
    PORE_PRESSURE,
];

fn load_srw(input: &FaultInput, config: &RuptureConfig) -> Result<Vec<f64>, ComponentError> {
    let srw = input.get_or(RS_SRW, config.rate_and_state.srw)?;
    for (i, &rate) in srw.iter().enumerate() {
        positive(RS_SRW, rate).context(format!("point {i}"))?;
    }
    Ok(srw)
}

fn reset(array: &mut Vec<f64>, points: usize) {
    array.clear();
    array.resize(points, 0.0);
}

/// Per-point rate-and-state parameters and the state variable.
///
/// `state` holds `theta` (seconds) for the aging and slip laws, and the friction-unit
/// state `psi` for fast velocity weakening.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateAndStateFields {
    pub a: Vec<f64>,
    pub sl0: Vec<f64>,
    pub state: Vec<f64>,
}

impl RateAndStateFields {
    pub fn allocate(&mut self, points: usize) {
        reset(&mut self.a, points);
        reset(&mut self.sl0, points);
        reset(&mut self.state, points);
    }
}

/// Per-point thermal-pressurisation fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThermalFields {
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
    pub initial_temperature: Vec<f64>,
    pub initial_pressure: Vec<f64>,
    pub half_width: Vec<f64>,
}

impl ThermalFields {
    pub fn allocate(&mut self, points: usize) {
        reset(&mut self.temperature, points);
        reset(&mut self.pressure, points);
        reset(&mut self.initial_temperature, points);
        reset(&mut self.initial_pressure, points);
        reset(&mut self.half_width, points);
    }

    /// # Errors
    /// Shape errors from the input, or a non-positive half width at any point.
    pub fn load(
        &mut self,
        input: &FaultInput,
        config: &ThermalConfig,
    ) -> Result<(), ComponentError> {
        self.initial_temperature =
            input.get_or(INITIAL_TEMPERATURE, config.initial_temperature)?;
        self.initial_pressure = input.get_or(INITIAL_PRESSURE, config.initial_pressure)?;
        self.half_width = input.get_or(HALF_WIDTH, config.half_width)?;
        for (i, &width) in self.half_width.iter().enumerate() {
            positive(HALF_WIDTH, width).context(format!("point {i}"))?;
        }
        self.temperature.clone_from(&self.initial_temperature);
        self.pressure.clone_from(&self.initial_pressure);
        Ok(())
    }
}

/// What the shared initializer and writer need from every rate-and-state layout.
pub trait RateAndStateLayout: StateStorage {
    /// Input parameters that must be present.
    const REQUIRED_PARAMETERS: &'static [&'static str] =
        &[INITIAL_SHEAR_STRESS, INITIAL_NORMAL_STRESS];

    /// Output quantities, in frame order.
    const QUANTITIES: &'static [&'static str] = RS_QUANTITIES;

    fn fault(&self) -> &FaultState;
    fn rate_and_state(&self) -> &RateAndStateFields;
    fn parts_mut(&mut self) -> (&mut FaultState, &mut RateAndStateFields);

    /// Effective normal stress the friction law acts on.
    fn effective_normal(&self, i: usize) -> f64 {
        self.fault().effective_normal(i)
    }

    /// Converts the balancing friction state `psi` into the stored state variable.
    fn encode_state(&self, _i: usize, psi: f64, _config: &RateAndStateConfig) -> f64 {
        psi
    }

    /// Layout-specific initialization, run before the state variable is computed.
    ///
    /// # Errors
    /// Missing or malformed layout-specific input.
    fn initialize_extra(
        &mut self,
        _input: &FaultInput,
        _config: &RuptureConfig,
    ) -> Result<(), ComponentError> {
        Ok(())
    }

    /// Layout-specific output, appended after the state variable.
    fn write_extra(&self, _frame: &mut OutputFrame) {}
}

/// Layout of the aging and slip laws; `state` is `theta`.
#[rupture_derive::component]
pub struct RateAndStateStorage {
    family: Family,
    pub fault: FaultState,
    pub rs: RateAndStateFields,
}

impl RateAndStateStorage {
    /// `family` is either of the two laws sharing this layout.
    #[must_use]
    pub fn new(family: Family) -> Self {
        Self { family, fault: FaultState::default(), rs: RateAndStateFields::default() }
    }
}

impl StateStorage for RateAndStateStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::RATE_AND_STATE
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        self.rs.allocate(points);
    }
}

impl RateAndStateLayout for RateAndStateStorage {
    fn fault(&self) -> &FaultState {
        &self.fault
    }

    fn rate_and_state(&self) -> &RateAndStateFields {
        &self.rs
    }

    fn parts_mut(&mut self) -> (&mut FaultState, &mut RateAndStateFields) {
        (&mut self.fault, &mut self.rs)
    }

    /// `theta = L / V0 * exp((psi - f0) / b)`.
    fn encode_state(&self, i: usize, psi: f64, config: &RateAndStateConfig) -> f64 {
        self.rs.sl0[i] / config.v0 * ((psi - config.f0) / config.b).exp()
    }
}

/// Fast velocity weakening; `state` is `psi`.
#[rupture_derive::component]
pub struct FastVelocityWeakeningStorage {
    family: Family,
    pub fault: FaultState,
    pub rs: RateAndStateFields,
    /// Weakening slip rate `V_w`.
    pub srw: Vec<f64>,
}

impl FastVelocityWeakeningStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: Family::FastVelocityWeakening,
            fault: FaultState::default(),
            rs: RateAndStateFields::default(),
            srw: Vec::new(),
        }
    }
}

impl Default for FastVelocityWeakeningStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for FastVelocityWeakeningStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT | FieldSet::RATE_AND_STATE | FieldSet::FAST_VELOCITY_WEAKENING
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        self.rs.allocate(points);
        reset(&mut self.srw, points);
    }
}

impl RateAndStateLayout for FastVelocityWeakeningStorage {
    fn fault(&self) -> &FaultState {
        &self.fault
    }

    fn rate_and_state(&self) -> &RateAndStateFields {
        &self.rs
    }

    fn parts_mut(&mut self) -> (&mut FaultState, &mut RateAndStateFields) {
        (&mut self.fault, &mut self.rs)
    }

    fn initialize_extra(
        &mut self,
        input: &FaultInput,
        config: &RuptureConfig,
    ) -> Result<(), ComponentError> {
        self.srw = load_srw(input, config)?;
        Ok(())
    }
}

/// Fast velocity weakening coupled to thermal pressurisation.
#[rupture_derive::component]
pub struct ThermalPressurisationStorage {
    family: Family,
    pub fault: FaultState,
    pub rs: RateAndStateFields,
    pub srw: Vec<f64>,
    pub thermal: ThermalFields,
}

impl ThermalPressurisationStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            family: Family::ThermalPressurisation,
            fault: FaultState::default(),
            rs: RateAndStateFields::default(),
            srw: Vec::new(),
            thermal: ThermalFields::default(),
        }
    }
}

impl Default for ThermalPressurisationStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStorage for ThermalPressurisationStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::FAULT
            | FieldSet::RATE_AND_STATE
            | FieldSet::FAST_VELOCITY_WEAKENING
            | FieldSet::THERMAL_PRESSURISATION
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
        self.rs.allocate(points);
        reset(&mut self.srw, points);
        self.thermal.allocate(points);
    }
}

impl RateAndStateLayout for ThermalPressurisationStorage {
    const QUANTITIES: &'static [&'static str] = TP_QUANTITIES;

    fn fault(&self) -> &FaultState {
        &self.fault
    }

    fn rate_and_state(&self) -> &RateAndStateFields {
        &self.rs
    }

    fn parts_mut(&mut self) -> (&mut FaultState, &mut RateAndStateFields) {
        (&mut self.fault, &mut self.rs)
    }

    /// Pore pressure unclamps the fault: `sigma' = max(-sigma_n - p, 0)`.
    fn effective_normal(&self, i: usize) -> f64 {
        (-self.fault.normal_stress[i] - self.thermal.pressure[i]).max(0.0)
    }

    fn initialize_extra(
        &mut self,
        input: &FaultInput,
        config: &RuptureConfig,
    ) -> Result<(), ComponentError> {
        self.srw = load_srw(input, config)?;
        self.thermal.load(input, &config.thermal)
    }

    fn write_extra(&self, frame: &mut OutputFrame) {
        frame.push(TEMPERATURE, self.thermal.temperature.clone());
        frame.push(PORE_PRESSURE, self.thermal.pressure.clone());
    }
}
