use rupture_domain::FrictionLaw;
use rupture_domain::config::{
    FaultConfig, LoggingConfig, RateAndStateConfig, RuptureConfig, SlipWeakeningConfig,
};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let fault = FaultConfig::default();
    assert!(fault.impedance > 0.0);
    assert!(fault.rupture_slip_rate > 0.0);

    let sw = SlipWeakeningConfig::default();
    assert!(sw.mu_d < sw.mu_s);
    assert!(sw.d_c > 0.0);

    let rs = RateAndStateConfig::default();
    assert!(rs.b > rs.a, "default rate-and-state parameters are velocity weakening");
    assert_eq!(rs.max_newton_iterations, 60);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());

    let cfg = RuptureConfig::default();
    assert_eq!(cfg.law(), Some(FrictionLaw::NoFault));
    assert!(!cfg.thermal_pressurisation);
}

#[test]
fn rupture_config_deserializes() {
    let raw = json!({
        "friction_law": 103,
        "thermal_pressurisation": true,
        "rate_and_state": { "a": 0.02, "b": 0.025 },
        "thermal": { "half_width": 0.05 },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: RuptureConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.law(), Some(FrictionLaw::RateAndStateFastVelocityWeakening));
    assert!(cfg.thermal_pressurisation);
    assert!((cfg.rate_and_state.a - 0.02).abs() < f64::EPSILON);
    // Unset keys keep their defaults.
    assert!((cfg.rate_and_state.f0 - 0.6).abs() < f64::EPSILON);
    assert!((cfg.thermal.half_width - 0.05).abs() < f64::EPSILON);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn legacy_thermal_flag_name_is_accepted() {
    let raw = json!({ "friction_law": 103, "is_thermal_pressure_on": true });
    let cfg: RuptureConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!(cfg.thermal_pressurisation);
}

#[test]
fn unknown_code_survives_loading() {
    let cfg: RuptureConfig =
        serde_json::from_value(json!({ "friction_law": 5 })).expect("config deserialize");
    assert_eq!(cfg.friction_law, 5);
    assert_eq!(cfg.law(), None);
}

#[test]
fn clones_share_until_written() {
    let cfg = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakening);
    let mut copy = cfg.clone();
    assert!(cfg.ptr_eq(&copy));

    copy.slip_weakening.d_c = 0.8;
    assert!(!cfg.ptr_eq(&copy));
    assert!((cfg.slip_weakening.d_c - 0.4).abs() < f64::EPSILON);
}
