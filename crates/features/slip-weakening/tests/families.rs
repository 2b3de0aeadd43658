use rupture_kernel::domain::FrictionLaw;
use rupture_kernel::domain::constants::input::{
    D_C, FORCED_RUPTURE_TIME, INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS,
};
use rupture_kernel::domain::constants::output::{
    REGULARIZED_NORMAL_STRESS, RUPTURE_TIME, SLIP, SLIP_RATE,
};
use rupture_kernel::output::NOT_RUPTURED;
use rupture_kernel::prelude::*;
use rupture_slip_weakening::storage::{BimaterialStorage, SlipWeakeningStorage};
use rupture_slip_weakening::{
    BimaterialBuilder, ForcedRuptureTimeBuilder, LinearSlipWeakeningBuilder,
};

const DT: f64 = 0.01;

/// One point above static strength, one well below it.
fn two_points() -> FaultInput {
    FaultInput::new(2)
        .with(INITIAL_SHEAR_STRESS, vec![81.6e6, 70e6])
        .uniform(INITIAL_NORMAL_STRESS, -120e6)
}

fn run(bundle: &mut ComponentBundle, input: &FaultInput, steps: usize) -> OutputFrame {
    bundle.initialize(input).expect("initialize");
    for n in 1..=steps {
        bundle.evaluate(TimeStep::nth(n, DT)).expect("evaluate");
    }
    bundle.write(TimeStep::nth(steps, DT).time).expect("write")
}

fn assert_single_family(bundle: &ComponentBundle, family: Family) {
    assert_eq!(bundle.family(), family);
    assert_eq!(bundle.storage().family(), family);
    assert_eq!(bundle.initializer().family(), family);
    assert_eq!(bundle.kernel().family(), family);
    assert_eq!(bundle.writer().family(), family);
}

#[test]
fn overstressed_point_ruptures_and_weakens() {
    let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakening);
    let mut bundle = LinearSlipWeakeningBuilder::new(&config).build().expect("builds");
    assert_single_family(&bundle, Family::LinearSlipWeakening);
    assert_eq!(bundle.fields(), FieldSet::FAULT | FieldSet::SLIP_WEAKENING);

    let frame = run(&mut bundle, &two_points(), 20);
    let slip = frame.get(SLIP).expect("slip");
    let rate = frame.get(SLIP_RATE).expect("slip rate");
    let rupture = frame.get(RUPTURE_TIME).expect("rupture time");

    assert!(slip[0] > 0.0);
    assert!(slip[1].abs() < f64::EPSILON);
    assert!((rupture[0] - DT).abs() < 1e-12, "ruptured on the first step");
    assert!((rupture[1] - NOT_RUPTURED).abs() < f64::EPSILON);

    let storage = storage_ref::<SlipWeakeningStorage>(bundle.storage()).expect("own layout");
    assert!(storage.fault.mu[0] < config.slip_weakening.mu_s, "friction weakened with slip");
    assert!(rate[0] > storage.fault.peak_slip_rate[1]);
}

#[test]
fn forced_rupture_nucleates_on_schedule() {
    let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakeningForcedRuptureTime);
    let mut bundle = ForcedRuptureTimeBuilder::new(&config).build().expect("builds");
    assert_single_family(&bundle, Family::LinearSlipWeakeningForcedRuptureTime);
    assert!(bundle.fields().contains(FieldSet::FORCED_RUPTURE));
    assert!(bundle.initializer().required_parameters().contains(&FORCED_RUPTURE_TIME));

    let input = FaultInput::new(2)
        .uniform(INITIAL_SHEAR_STRESS, 70e6)
        .uniform(INITIAL_NORMAL_STRESS, -120e6)
        .with(FORCED_RUPTURE_TIME, vec![0.0, 1e9]);
    let frame = run(&mut bundle, &input, 60);
    let slip = frame.get(SLIP).expect("slip");

    assert!(slip[0] > 0.0, "forced point slips once friction ramps to mu_d");
    assert!(slip[1].abs() < f64::EPSILON, "unforced point stays locked");
}

#[test]
fn forced_rupture_requires_its_schedule() {
    let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakeningForcedRuptureTime);
    let mut bundle = ForcedRuptureTimeBuilder::new(&config).build().expect("builds");
    let err = bundle.initialize(&two_points()).expect_err("no forced rupture time");
    assert!(
        matches!(err, ComponentError::MissingParameter { name, .. } if name == FORCED_RUPTURE_TIME)
    );
}

#[test]
fn bimaterial_writes_regularized_normal_stress() {
    let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakeningBimaterial);
    let mut bundle = BimaterialBuilder::new(&config).build().expect("builds");
    assert_single_family(&bundle, Family::LinearSlipWeakeningBimaterial);
    assert_eq!(bundle.writer().quantities().last(), Some(&REGULARIZED_NORMAL_STRESS));

    let frame = run(&mut bundle, &two_points(), 5);
    let regularized = frame.get(REGULARIZED_NORMAL_STRESS).expect("regularized");
    // Constant normal stress: the regularised value stays on it.
    assert!(regularized.iter().all(|s| (s - 120e6).abs() < 1e-3));
    assert_eq!(frame.names().collect::<Vec<_>>(), bundle.writer().quantities());
}

#[test]
fn invalid_parameters_fail_the_build() {
    let mut config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakening);
    config.slip_weakening.d_c = 0.0;
    let err = LinearSlipWeakeningBuilder::new(&config).build().expect_err("d_c must be positive");
    assert_eq!(
        err.to_string(),
        "Invalid parameter (Building LinearSlipWeakening): slip_weakening.d_c = 0 (must be positive)"
    );

    let mut config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakeningBimaterial);
    config.slip_weakening.prakash_clifton_length = -1.0;
    assert!(BimaterialBuilder::new(&config).build().is_err());

    let mut config = RuptureConfig::default();
    config.slip_weakening.mu_d = 0.9;
    assert!(ForcedRuptureTimeBuilder::new(&config).build().is_err());
}

#[test]
fn per_point_parameters_are_checked() {
    let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakening);
    let mut bundle = LinearSlipWeakeningBuilder::new(&config).build().expect("builds");
    let input = two_points().with(D_C, vec![0.4, -0.1]);
    let err = bundle.initialize(&input).expect_err("negative d_c");
    assert!(err.to_string().contains("point 1"), "{err}");
}

#[test]
fn foreign_storage_is_rejected() {
    let config = RuptureConfig::with_law(FrictionLaw::LinearSlipWeakening);
    let bundle = LinearSlipWeakeningBuilder::new(&config).build().expect("builds");
    let mut foreign = BimaterialStorage::new();
    foreign.allocate(2);

    let err = bundle
        .initializer()
        .initialize(&mut foreign, &two_points())
        .expect_err("wrong layout");
    assert!(matches!(
        err,
        ComponentError::StorageMismatch { found: Family::LinearSlipWeakeningBimaterial, .. }
    ));
}
