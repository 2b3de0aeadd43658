use rupture_imposed_slip::{ImposedSlipRatesBuilder, ImposedSlipStorage, brune_slip_rate};
use rupture_kernel::domain::FrictionLaw;
use rupture_kernel::domain::constants::input::{
    INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS, ONSET_TIME, RISE_TIME, TOTAL_SLIP,
};
use rupture_kernel::domain::constants::output::{PEAK_SLIP_RATE, RUPTURE_TIME, SLIP};
use rupture_kernel::output::NOT_RUPTURED;
use rupture_kernel::prelude::*;
use rupture_kernel::state::FAULT_QUANTITIES;

const DT: f64 = 0.01;

fn input() -> FaultInput {
    FaultInput::new(2)
        .uniform(INITIAL_SHEAR_STRESS, 70e6)
        .uniform(INITIAL_NORMAL_STRESS, -120e6)
        .uniform(TOTAL_SLIP, 2.0)
        .with(ONSET_TIME, vec![0.0, 1e9])
}

#[test]
fn brune_history_integrates_to_total_slip() {
    let config = RuptureConfig::with_law(FrictionLaw::ImposedSlipRates);
    let mut bundle = ImposedSlipRatesBuilder::new(&config).build().expect("builds");
    assert_eq!(bundle.family(), Family::ImposedSlipRates);
    assert_eq!(bundle.fields(), FieldSet::FAULT | FieldSet::IMPOSED_SLIP);
    assert_eq!(bundle.writer().quantities(), FAULT_QUANTITIES);

    bundle.initialize(&input()).expect("initialize");
    for n in 1..=400 {
        bundle.evaluate(TimeStep::nth(n, DT)).expect("evaluate");
    }
    let frame = bundle.write(4.0).expect("write");

    let slip = frame.get(SLIP).expect("slip");
    let peak = frame.get(PEAK_SLIP_RATE).expect("peak");
    let rupture = frame.get(RUPTURE_TIME).expect("rupture time");
    assert!((slip[0] - 2.0).abs() < 0.01, "slip {}", slip[0]);
    assert!(slip[1].abs() < f64::EPSILON, "onset not reached");
    // Peak of the Brune pulse is D / (T e).
    let expected_peak = 2.0 / (config.imposed.rise_time * std::f64::consts::E);
    assert!((peak[0] - expected_peak).abs() < 1e-3);
    assert!((rupture[0] - DT).abs() < 1e-12);
    assert!((rupture[1] - NOT_RUPTURED).abs() < f64::EPSILON);
}

#[test]
fn traction_drops_by_radiation_damping() {
    let config = RuptureConfig::with_law(FrictionLaw::ImposedSlipRates);
    let mut bundle = ImposedSlipRatesBuilder::new(&config).build().expect("builds");
    bundle.initialize(&input()).expect("initialize");
    bundle.evaluate(TimeStep::nth(50, DT)).expect("evaluate");

    let storage = storage_ref::<ImposedSlipStorage>(bundle.storage()).expect("own layout");
    let v = brune_slip_rate(2.0, config.imposed.rise_time, 0.5);
    let expected = config.fault.impedance.mul_add(-v, 70e6);
    assert!((storage.fault.shear_stress[0] - expected).abs() < 1e-3);
    assert!((storage.fault.shear_stress[1] - 70e6).abs() < f64::EPSILON);
    assert!((storage.fault.mu[0] - expected / 120e6).abs() < 1e-12);
}

#[test]
fn rise_time_can_vary_per_point() {
    let config = RuptureConfig::with_law(FrictionLaw::ImposedSlipRates);
    let mut bundle = ImposedSlipRatesBuilder::new(&config).build().expect("builds");
    bundle.initialize(&input().with(RISE_TIME, vec![0.1, 2.0])).expect("initialize");
    let storage = storage_ref::<ImposedSlipStorage>(bundle.storage()).expect("own layout");
    assert_eq!(storage.rise_time, vec![0.1, 2.0]);

    let err = bundle
        .initialize(&input().with(RISE_TIME, vec![0.1, 0.0]))
        .expect_err("zero rise time");
    assert!(err.to_string().contains("point 1"), "{err}");
}

#[test]
fn slip_history_is_required() {
    let config = RuptureConfig::with_law(FrictionLaw::ImposedSlipRates);
    let mut bundle = ImposedSlipRatesBuilder::new(&config).build().expect("builds");
    let input = FaultInput::new(1)
        .uniform(INITIAL_SHEAR_STRESS, 70e6)
        .uniform(INITIAL_NORMAL_STRESS, -120e6)
        .uniform(ONSET_TIME, 0.0);
    let err = bundle.initialize(&input).expect_err("no total slip");
    assert!(matches!(err, ComponentError::MissingParameter { name, .. } if name == TOTAL_SLIP));
}

#[test]
fn invalid_rise_time_fails_the_build() {
    let mut config = RuptureConfig::with_law(FrictionLaw::ImposedSlipRates);
    config.imposed.rise_time = 0.0;
    let err = ImposedSlipRatesBuilder::new(&config).build().expect_err("zero rise time");
    assert!(err.to_string().contains("Building ImposedSlipRates"), "{err}");
}

#[test]
fn no_slip_before_onset() {
    assert!(brune_slip_rate(1.0, 0.5, -1.0).abs() < f64::EPSILON);
    assert!(brune_slip_rate(1.0, 0.5, 0.0).abs() < f64::EPSILON);
    assert!(brune_slip_rate(1.0, 0.5, 0.5) > 0.0);
}
