use rupture::domain::Family;
use rupture::{Entry, Registry};

/// Prints the standard registry, ordered by code.
pub fn list_laws() {
    println!("{:<6} {:<38} {:<10} Families", "Code", "Friction law", "Policy");
    println!("{:-<100}", "");

    for (law, entry) in Registry::standard().entries() {
        let (policy, detail) = match entry {
            Entry::Enabled(_) => {
                let families: Vec<&str> =
                    Family::all().filter(|f| f.law() == law).map(Family::name).collect();
                ("enabled", families.join(" / "))
            },
            Entry::Disabled { reason } => ("disabled", reason.to_owned()),
        };
        println!("{:<6} {:<38} {:<10} {detail}", law.code(), law.name(), policy);
    }
}
