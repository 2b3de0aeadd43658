use crate::law::FrictionLaw;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a dispatch reads: the selected law, its refinement flag and the parameter
/// groups of every family.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuptureConfigInner {
    /// Raw friction-law code; see [`FrictionLaw`] for the recognised values.
    pub friction_law: u32,
    /// Couples thermal pressurisation into the fast-velocity-weakening law.
    #[serde(alias = "is_thermal_pressure_on")]
    pub thermal_pressurisation: bool,
    pub fault: FaultConfig,
    pub slip_weakening: SlipWeakeningConfig,
    pub rate_and_state: RateAndStateConfig,
    pub thermal: ThermalConfig,
    pub imposed: ImposedSlipConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into builders.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RuptureConfig {
    #[serde(flatten, default)]
    inner: Arc<RuptureConfigInner>,
}

impl RuptureConfig {
    #[must_use]
    pub fn new(inner: RuptureConfigInner) -> Self {
        Self { inner: Arc::new(inner) }
    }

    /// Default parameters with `law` selected.
    #[must_use]
    pub fn with_law(law: FrictionLaw) -> Self {
        Self::new(RuptureConfigInner { friction_law: law.code(), ..RuptureConfigInner::default() })
    }

    /// The selected tag, `None` when the raw code is outside the enumeration.
    #[must_use]
    pub fn law(&self) -> Option<FrictionLaw> {
        FrictionLaw::from_code(self.friction_law)
    }

    /// `true` when both handles share one snapshot.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Deref for RuptureConfig {
    type Target = RuptureConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RuptureConfig {
    fn deref_mut(&mut self) -> &mut RuptureConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Parameters common to every fault point.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Radiation-damping impedance `eta = mu / (2 c_s)` in Pa s/m.
    pub impedance: f64,
    /// Uniform tectonic shear-stress loading rate in Pa/s.
    pub shear_loading_rate: f64,
    /// Slip rate above which a point counts as ruptured, in m/s.
    pub rupture_slip_rate: f64,
}

/// Linear slip weakening and its variants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlipWeakeningConfig {
    pub mu_s: f64,
    pub mu_d: f64,
    pub d_c: f64,
    pub cohesion: f64,
    /// Time over which forced rupture ramps friction down (`t0`).
    pub forced_rupture_duration: f64,
    /// Prakash-Clifton reference velocity `v*`.
    pub prakash_clifton_velocity: f64,
    /// Prakash-Clifton reference length `L`.
    pub prakash_clifton_length: f64,
}

/// Rate-and-state laws, including fast velocity weakening.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateAndStateConfig {
    pub f0: f64,
    pub a: f64,
    pub b: f64,
    /// Characteristic slip distance `L`.
    pub sl0: f64,
    /// Reference slip rate `V0`.
    pub v0: f64,
    pub initial_slip_rate: f64,
    /// Fully weakened friction `mu_w`.
    pub mu_w: f64,
    /// Weakening slip rate `V_w`.
    pub srw: f64,
    pub newton_tolerance: f64,
    pub max_newton_iterations: u32,
}

/// Thermal pressurisation of the fault zone.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThermalConfig {
    /// Volumetric heat capacity `rho c` in J/(m^3 K).
    pub heat_capacity: f64,
    /// Undrained pore-pressure response `Lambda` in Pa/K.
    pub undrained_response: f64,
    /// Shear-zone half width `w` in m.
    pub half_width: f64,
    pub thermal_diffusivity: f64,
    pub hydraulic_diffusivity: f64,
    pub initial_temperature: f64,
    pub initial_pressure: f64,
}

/// Prescribed slip-rate history.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImposedSlipConfig {
    pub rise_time: f64,
}

/// Global tracing setup, consumed by the logger.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Full `EnvFilter` directive; overrides `level` when set.
    pub filter: Option<String>,
    /// Enables rolling file output into this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for FaultConfig {
    fn default() -> Self {
        Self { impedance: 4.6e6, shear_loading_rate: 0.0, rupture_slip_rate: 1e-3 }
    }
}

impl Default for SlipWeakeningConfig {
    fn default() -> Self {
        Self {
            mu_s: 0.677,
            mu_d: 0.525,
            d_c: 0.4,
            cohesion: 0.0,
            forced_rupture_duration: 0.5,
            prakash_clifton_velocity: 0.1,
            prakash_clifton_length: 0.1,
        }
    }
}

impl Default for RateAndStateConfig {
    fn default() -> Self {
        Self {
            f0: 0.6,
            a: 0.01,
            b: 0.014,
            sl0: 0.02,
            v0: 1e-6,
            initial_slip_rate: 1e-16,
            mu_w: 0.1,
            srw: 0.1,
            newton_tolerance: 1e-8,
            max_newton_iterations: 60,
        }
    }
}

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            heat_capacity: 2.7e6,
            undrained_response: 0.1e6,
            half_width: 0.02,
            thermal_diffusivity: 1e-6,
            hydraulic_diffusivity: 1e-4,
            initial_temperature: 483.15,
            initial_pressure: 0.0,
        }
    }
}

impl Default for ImposedSlipConfig {
    fn default() -> Self {
        Self { rise_time: 0.5 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            directory: None,
            file_prefix: "rupture".to_owned(),
            json: false,
            max_files: 10,
        }
    }
}
