use rupture_kernel::prelude::*;

#[rupture_derive::component]
struct PointStorage {
    family: Family,
    fields: FieldSet,
    fault: FaultState,
}

impl PointStorage {
    fn new(family: Family, fields: FieldSet) -> Self {
        Self { family, fields, fault: FaultState::default() }
    }
}

impl StateStorage for PointStorage {
    fn fields(&self) -> FieldSet {
        self.fields
    }

    fn points(&self) -> usize {
        self.fault.points()
    }

    fn allocate(&mut self, points: usize) {
        self.fault.allocate(points);
    }
}

#[rupture_derive::component]
#[derive(Clone, Copy)]
struct Creep {
    family: Family,
    needs: FieldSet,
    requires: &'static [&'static str],
}

impl Initializer for Creep {
    fn required_parameters(&self) -> &'static [&'static str] {
        self.requires
    }

    fn initialize(
        &self,
        storage: &mut dyn StateStorage,
        _input: &FaultInput,
    ) -> Result<(), ComponentError> {
        storage_mut::<PointStorage>(storage).map(|_| ())
    }
}

impl FrictionKernel for Creep {
    fn required_fields(&self) -> FieldSet {
        self.needs
    }

    fn evaluate(
        &mut self,
        storage: &mut dyn StateStorage,
        step: TimeStep,
    ) -> Result<(), ComponentError> {
        let storage = storage_mut::<PointStorage>(storage)?;
        for slip in &mut storage.fault.slip {
            *slip += step.dt;
        }
        Ok(())
    }
}

impl OutputWriter for Creep {
    fn quantities(&self) -> &'static [&'static str] {
        &["slip"]
    }

    fn write(&self, storage: &dyn StateStorage, time: f64) -> Result<OutputFrame, ComponentError> {
        let storage = storage_ref::<PointStorage>(storage)?;
        Ok(OutputFrame::new(self.family, time, storage.points())
            .with("slip", storage.fault.slip.clone()))
    }
}

#[rupture_derive::component]
struct OtherStorage {
    family: Family,
}

impl StateStorage for OtherStorage {
    fn fields(&self) -> FieldSet {
        FieldSet::all()
    }

    fn points(&self) -> usize {
        0
    }

    fn allocate(&mut self, _points: usize) {}
}

fn creep(family: Family) -> Creep {
    Creep { family, needs: FieldSet::FAULT, requires: &[] }
}

#[test]
fn assembled_bundle_drives_its_components() {
    let family = Family::LinearSlipWeakening;
    let mut bundle = ComponentBundle::assemble(
        Box::new(PointStorage::new(family, FieldSet::FAULT)),
        Box::new(creep(family)),
        Box::new(creep(family)),
        Box::new(creep(family)),
    )
    .expect("matching components assemble");

    assert_eq!(bundle.family(), family);
    assert_eq!(bundle.storage().family(), family);
    assert_eq!(bundle.kernel().family(), family);

    bundle.initialize(&FaultInput::new(3)).expect("initialize");
    bundle.evaluate(TimeStep::new(0.5, 0.5)).expect("evaluate");
    let frame = bundle.write(0.5).expect("write");
    assert_eq!(frame.family, family);
    assert_eq!(frame.get("slip"), Some(&[0.5, 0.5, 0.5][..]));

    let parts = bundle.into_parts();
    assert_eq!(parts.writer.family(), family);
    assert_eq!(parts.storage.points(), 3);
}

#[test]
fn foreign_component_is_rejected() {
    let family = Family::RateAndStateAging;
    let err = ComponentBundle::assemble(
        Box::new(PointStorage::new(family, FieldSet::FAULT)),
        Box::new(creep(family)),
        Box::new(creep(Family::RateAndStateSlip)),
        Box::new(creep(family)),
    )
    .expect_err("kernel belongs to another family");

    assert!(matches!(
        err,
        ComponentError::FamilyMismatch {
            component: "kernel",
            expected: Family::RateAndStateAging,
            found: Family::RateAndStateSlip,
            ..
        }
    ));
}

#[test]
fn kernel_needing_absent_fields_is_rejected() {
    let family = Family::ThermalPressurisation;
    let coupled = Creep {
        family,
        needs: FieldSet::FAULT | FieldSet::RATE_AND_STATE | FieldSet::THERMAL_PRESSURISATION,
        requires: &[],
    };
    let err = ComponentBundle::assemble(
        Box::new(PointStorage::new(family, FieldSet::FAULT | FieldSet::RATE_AND_STATE)),
        Box::new(creep(family)),
        Box::new(coupled),
        Box::new(creep(family)),
    )
    .expect_err("storage lacks thermal fields");

    match err {
        ComponentError::MissingFields { missing, .. } => {
            assert_eq!(missing, FieldSet::THERMAL_PRESSURISATION);
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn wrong_layout_is_never_read() {
    let mut other = OtherStorage { family: Family::NoFault };
    let mut kernel = creep(Family::NoFault);
    let err = kernel.evaluate(&mut other, TimeStep::new(1.0, 1.0)).expect_err("foreign layout");
    assert!(matches!(err, ComponentError::StorageMismatch { found: Family::NoFault, .. }));
    assert!(storage_ref::<PointStorage>(&other).is_err());
    assert!(storage_ref::<OtherStorage>(&other).is_ok());
}

#[test]
fn errors_take_context() {
    let result: Result<(), ComponentError> = Err(ComponentError::missing("mu_s"));
    let err = result.context("Loading slip weakening").expect_err("still an error");
    assert_eq!(err.to_string(), "Missing input parameter (Loading slip weakening): mu_s");
}

#[test]
fn oversized_fault_without_parameters_is_rejected_before_allocation() {
    let family = Family::RateAndStateAging;
    let stressed = Creep { requires: &["initial_shear_stress"], ..creep(family) };
    let mut bundle = ComponentBundle::assemble(
        Box::new(PointStorage::new(family, FieldSet::FAULT)),
        Box::new(stressed),
        Box::new(creep(family)),
        Box::new(creep(family)),
    )
    .expect("matching components assemble");

    let input = FaultInput::from_json(r#"{ "num_points": 1152921504606846976 }"#)
        .expect("an empty parameter table has no shape to check");
    let err = bundle.initialize(&input).expect_err("nothing bounds the point count");

    assert!(matches!(
        err,
        ComponentError::MissingParameter { name, .. } if name == "initial_shear_stress"
    ));
    assert_eq!(bundle.storage().points(), 0);
}

#[test]
fn misshapen_input_is_rejected_before_allocation() {
    let family = Family::LinearSlipWeakening;
    let mut bundle = ComponentBundle::assemble(
        Box::new(PointStorage::new(family, FieldSet::FAULT)),
        Box::new(creep(family)),
        Box::new(creep(family)),
        Box::new(creep(family)),
    )
    .expect("matching components assemble");

    let input = FaultInput::new(1 << 40).with("initial_shear_stress", vec![1.0]);
    let err = bundle.initialize(&input).expect_err("one value for 2^40 points");

    assert!(matches!(err, ComponentError::ShapeMismatch { .. }));
    assert_eq!(bundle.storage().points(), 0);
}
