use rupture_kernel::component::FamilyBound;
use rupture_kernel::domain::Family;

#[rupture_derive::component]
pub struct Plain {
    family: Family,
}

#[rupture_derive::component]
#[derive(Debug, Clone)]
pub struct WithDebug<T: Clone + std::fmt::Debug> {
    family: Family,
    payload: Vec<T>,
}

fn main() {
    let plain = Plain { family: Family::NoFault };
    let generic = WithDebug { family: Family::ImposedSlipRates, payload: vec![1u8] };
    assert_eq!(plain.family(), Family::NoFault);
    assert_eq!(generic.family(), Family::ImposedSlipRates);
    let _ = format!("{plain:?} {generic:?} {:?}", generic.payload);
}
