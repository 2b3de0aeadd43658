use rupture_kernel::component::{FamilyBound, TimeStep};
use rupture_kernel::domain::constants::input::{INITIAL_NORMAL_STRESS, INITIAL_SHEAR_STRESS};
use rupture_kernel::domain::{Family, FrictionLaw};
use rupture_kernel::prelude::*;
use rupture_no_fault::{NoFaultBuilder, NoFaultStorage};

fn input() -> FaultInput {
    FaultInput::new(3)
        .uniform(INITIAL_SHEAR_STRESS, 90e6)
        .uniform(INITIAL_NORMAL_STRESS, -120e6)
}

#[test]
fn all_components_report_no_fault() {
    let bundle = NoFaultBuilder::new(&RuptureConfig::with_law(FrictionLaw::NoFault))
        .build()
        .expect("default configuration builds");
    assert_eq!(bundle.family(), Family::NoFault);
    assert_eq!(bundle.storage().family(), Family::NoFault);
    assert_eq!(bundle.initializer().family(), Family::NoFault);
    assert_eq!(bundle.kernel().family(), Family::NoFault);
    assert_eq!(bundle.writer().family(), Family::NoFault);
    assert!(bundle.writer().quantities().is_empty());
}

#[test]
fn fault_never_slips_and_frames_are_empty() {
    let mut config = RuptureConfig::with_law(FrictionLaw::NoFault);
    config.fault.shear_loading_rate = 1e6;
    let mut bundle = NoFaultBuilder::new(&config).build().expect("builds");
    bundle.initialize(&input()).expect("initialize");
    for n in 1..=10 {
        bundle.evaluate(TimeStep::nth(n, 0.01)).expect("evaluate");
    }

    let frame = bundle.write(0.1).expect("write");
    assert_eq!(frame.points, 3);
    assert!(frame.quantities.is_empty());

    let storage = rupture_kernel::component::storage_ref::<NoFaultStorage>(bundle.storage())
        .expect("own layout");
    assert!(storage.fault.slip.iter().all(|s| s.abs() < f64::EPSILON));
    assert!(storage.fault.rupture_time.iter().all(Option::is_none));
    assert!((storage.fault.shear_stress[0] - (90e6 + 1e6 * 0.1)).abs() < 1e-3);
}

#[test]
fn missing_stress_is_reported() {
    let mut bundle = NoFaultBuilder::new(&RuptureConfig::default()).build().expect("builds");
    let err = bundle
        .initialize(&FaultInput::new(2).uniform(INITIAL_SHEAR_STRESS, 1.0))
        .expect_err("normal stress missing");
    assert!(matches!(
        err,
        ComponentError::MissingParameter { name, .. } if name == INITIAL_NORMAL_STRESS
    ));
}

#[test]
fn invalid_impedance_fails_the_build() {
    let mut config = RuptureConfig::default();
    config.fault.impedance = 0.0;
    let err = NoFaultBuilder::new(&config).build().expect_err("zero impedance");
    assert!(err.to_string().contains("fault.impedance"));
}
