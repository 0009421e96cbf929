//! Process-wide registry mapping formula identifiers to function pointers.
//!
//! Every worker process resolves formulas through its own copy of this
//! table, so an evaluation snapshot only ever carries the identifier and
//! plain parameter values, never code. The table is append-only: builtins
//! are seeded on first access and an identifier, once registered, is never
//! replaced.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use mdaf_functions as funcs;
use mdaf_functions::Formula;

use crate::error::{Error, Result};

static REGISTRY: OnceLock<RwLock<HashMap<String, Formula>>> = OnceLock::new();

fn table() -> &'static RwLock<HashMap<String, Formula>> {
    REGISTRY.get_or_init(|| {
        let mut functions: HashMap<String, Formula> = HashMap::new();

        // Unimodal functions
        functions.insert("sphere".to_string(), funcs::sphere as Formula);
        functions.insert("sum_squares".to_string(), funcs::sum_squares as Formula);
        functions.insert("rosenbrock".to_string(), funcs::rosenbrock as Formula);
        functions.insert("zakharov".to_string(), funcs::zakharov as Formula);
        functions.insert("booth".to_string(), funcs::booth as Formula);
        functions.insert("matyas".to_string(), funcs::matyas as Formula);

        // Multimodal functions
        functions.insert("rastrigin".to_string(), funcs::rastrigin as Formula);
        functions.insert("ackley".to_string(), funcs::ackley as Formula);
        functions.insert("griewank".to_string(), funcs::griewank as Formula);
        functions.insert("schwefel".to_string(), funcs::schwefel as Formula);
        functions.insert("levy".to_string(), funcs::levy as Formula);
        functions.insert(
            "styblinski_tang".to_string(),
            funcs::styblinski_tang as Formula,
        );
        functions.insert("michalewicz".to_string(), funcs::michalewicz as Formula);
        functions.insert("beale".to_string(), funcs::beale as Formula);
        functions.insert("himmelblau".to_string(), funcs::himmelblau as Formula);
        functions.insert("branin".to_string(), funcs::branin as Formula);
        functions.insert("easom".to_string(), funcs::easom as Formula);
        functions.insert("eggholder".to_string(), funcs::eggholder as Formula);
        functions.insert("drop_wave".to_string(), funcs::drop_wave as Formula);
        functions.insert(
            "goldstein_price".to_string(),
            funcs::goldstein_price as Formula,
        );
        functions.insert(
            "six_hump_camel".to_string(),
            funcs::six_hump_camel as Formula,
        );
        functions.insert("happy_cat".to_string(), funcs::happy_cat as Formula);
        functions.insert("alpine_n2".to_string(), funcs::alpine_n2 as Formula);

        RwLock::new(functions)
    })
}

/// Registers a formula under an identifier.
///
/// The registry is append-only: if the identifier already exists the table
/// is left untouched and `false` is returned. A formula registered here is
/// only known to the current process; the stock `mdaf-worker` binary seeds
/// builtins only, so a custom formula evaluates serially but fails
/// per-task in a parallel batch unless the worker process registers it
/// too.
pub fn register(id: &str, formula: Formula) -> bool {
    let mut functions = table().write().unwrap_or_else(|e| e.into_inner());
    match functions.entry(id.to_string()) {
        Entry::Occupied(_) => false,
        Entry::Vacant(slot) => {
            slot.insert(formula);
            true
        }
    }
}

/// Resolves a formula by identifier.
pub fn resolve(id: &str) -> Result<Formula> {
    let functions = table().read().unwrap_or_else(|e| e.into_inner());
    functions
        .get(id)
        .copied()
        .ok_or_else(|| Error::UnknownFormula {
            name: id.to_string(),
            registered: {
                let mut names: Vec<_> = functions.keys().cloned().collect();
                names.sort();
                names.join(", ")
            },
        })
}

/// Lists all registered formula identifiers, sorted alphabetically.
pub fn registered_functions() -> Vec<String> {
    let functions = table().read().unwrap_or_else(|e| e.into_inner());
    let mut names: Vec<_> = functions.keys().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdaf_functions::Parameters;
    use ndarray::Array1;

    #[test]
    fn builtins_are_seeded() {
        let sphere = resolve("sphere").expect("sphere is a builtin");
        let value = sphere(&Array1::from_vec(vec![2.0, 2.0]), &Parameters::new());
        assert_eq!(value, 8.0);
        assert!(registered_functions().contains(&"rastrigin".to_string()));
    }

    #[test]
    fn unknown_formula_reports_registered_names() {
        let err = resolve("definitely_not_registered").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("definitely_not_registered"));
        assert!(message.contains("sphere"));
    }

    #[test]
    fn registration_is_append_only() {
        fn custom(x: &Array1<f64>, _params: &Parameters) -> f64 {
            x.sum()
        }
        fn other(_x: &Array1<f64>, _params: &Parameters) -> f64 {
            42.0
        }

        assert!(register("registry_test_custom_sum", custom));
        // Second registration under the same id is refused.
        assert!(!register("registry_test_custom_sum", other));

        let resolved = resolve("registry_test_custom_sum").unwrap();
        let value = resolved(&Array1::from_vec(vec![1.0, 2.0]), &Parameters::new());
        assert_eq!(value, 3.0);
    }

    #[test]
    fn builtin_ids_cannot_be_replaced() {
        fn impostor(_x: &Array1<f64>, _params: &Parameters) -> f64 {
            f64::NAN
        }
        assert!(!register("sphere", impostor));
        let sphere = resolve("sphere").unwrap();
        let value = sphere(&Array1::zeros(2), &Parameters::new());
        assert_eq!(value, 0.0);
    }
}
