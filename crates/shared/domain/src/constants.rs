//! Stable string names shared between input files, storage field groups and output frames.

/// Field-group names, as used by [`crate::FieldSet`]'s string conversions.
pub mod fields {
    pub const FAULT: &str = "fault";
    pub const SLIP_WEAKENING: &str = "slip_weakening";
    pub const FORCED_RUPTURE: &str = "forced_rupture";
    pub const BIMATERIAL: &str = "bimaterial";
    pub const RATE_AND_STATE: &str = "rate_and_state";
    pub const FAST_VELOCITY_WEAKENING: &str = "fast_velocity_weakening";
    pub const THERMAL_PRESSURISATION: &str = "thermal_pressurisation";
    pub const IMPOSED_SLIP: &str = "imposed_slip";
}

/// Per-point parameter names read from fault input.
pub mod input {
    pub const INITIAL_SHEAR_STRESS: &str = "initial_shear_stress";
    pub const INITIAL_NORMAL_STRESS: &str = "initial_normal_stress";
    pub const MU_S: &str = "mu_s";
    pub const MU_D: &str = "mu_d";
    pub const D_C: &str = "d_c";
    pub const COHESION: &str = "cohesion";
    pub const FORCED_RUPTURE_TIME: &str = "forced_rupture_time";
    pub const RS_A: &str = "rs_a";
    pub const RS_SL0: &str = "rs_sl0";
    pub const INITIAL_SLIP_RATE: &str = "initial_slip_rate";
    pub const RS_SRW: &str = "rs_srw";
    pub const INITIAL_TEMPERATURE: &str = "initial_temperature";
    pub const INITIAL_PRESSURE: &str = "initial_pressure";
    pub const HALF_WIDTH: &str = "half_width";
    pub const TOTAL_SLIP: &str = "total_slip";
    pub const ONSET_TIME: &str = "onset_time";
    pub const RISE_TIME: &str = "rise_time";
}

/// Quantity names emitted in output frames.
pub mod output {
    pub const SLIP: &str = "slip";
    pub const SLIP_RATE: &str = "slip_rate";
    pub const SHEAR_STRESS: &str = "shear_stress";
    pub const NORMAL_STRESS: &str = "normal_stress";
    pub const FRICTION: &str = "friction";
    pub const RUPTURE_TIME: &str = "rupture_time";
    pub const PEAK_SLIP_RATE: &str = "peak_slip_rate";
    pub const REGULARIZED_NORMAL_STRESS: &str = "regularized_normal_stress";
    pub const STATE_VARIABLE: &str = "state_variable";
    pub const TEMPERATURE: &str = "temperature";
    pub const PORE_PRESSURE: &str = "pore_pressure";
}
