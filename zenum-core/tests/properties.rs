// Property-based tests for zenum instances over generated constant tables

mod common;

use common::*;
use proptest::prelude::*;
use zenum_core::{Coercion, ConstantSet, Declaration, EnumError, Instance, Lineage, Value};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every declared value is selectable and lands on its first occurrence
    #[test]
    fn test_declared_values_are_selectable(table in arb_constant_table(12)) {
        let lineage = lineage_of("Generated", &table, None, Coercion::Exact);

        for (name, value) in &table {
            let instance = Instance::with_value(&lineage, value.clone())?;
            let first = table.iter().position(|(_, v)| v == value).unwrap();

            prop_assert_eq!(instance.value(), value);
            prop_assert_eq!(instance.ordinal(), first);
            prop_assert_eq!(instance.name(), table[first].0.as_str());
            if first == table.iter().position(|(n, _)| n == name).unwrap() {
                prop_assert_eq!(instance.name(), name.as_str());
            }
        }
    }

    /// Selected values are always one of the stored constants
    #[test]
    fn test_selection_is_canonical(
        table in arb_constant_table(12),
        candidate in arb_value(),
        coercion in arb_coercion()
    ) {
        let lineage = lineage_of("Generated", &table, None, coercion);
        let expected = table.iter().find(|(_, v)| v.loose_eq(&candidate, coercion));

        match (Instance::with_value(&lineage, candidate.clone()), expected) {
            (Ok(instance), Some((_, stored))) => {
                prop_assert_eq!(instance.value(), stored);
                prop_assert!(instance.constants().values().any(|v| v == instance.value()));
                prop_assert_eq!(instance.name(), instance.constants().name_of(stored).unwrap());
            }
            (Err(EnumError::UnknownValue { value, .. }), None) => {
                prop_assert_eq!(value, candidate);
            }
            (result, expected) => {
                prop_assert!(false, "unexpected outcome {:?} for {:?}", result, expected);
            }
        }
    }

    /// A rejected update leaves value, name and ordinal unchanged
    #[test]
    fn test_set_value_is_atomic(
        table in arb_constant_table(12),
        pick in any::<prop::sample::Index>(),
        candidate in arb_value()
    ) {
        let lineage = lineage_of("Generated", &table, None, Coercion::Numeric);
        let (_, selected) = &table[pick.index(table.len())];
        let mut instance = Instance::with_value(&lineage, selected.clone())?;
        let before = (instance.value().clone(), instance.name().to_string(), instance.ordinal());

        if instance.set_value(candidate).is_err() {
            prop_assert_eq!(instance.value(), &before.0);
            prop_assert_eq!(instance.name(), before.1.as_str());
            prop_assert_eq!(instance.ordinal(), before.2);
        }
    }

    /// Memoization never changes the ordinal
    #[test]
    fn test_ordinal_is_idempotent(
        table in arb_constant_table(12),
        pick in any::<prop::sample::Index>()
    ) {
        let lineage = lineage_of("Generated", &table, None, Coercion::Numeric);
        let (_, selected) = &table[pick.index(table.len())];
        let instance = Instance::with_value(&lineage, selected.clone())?;

        let first = instance.ordinal();
        prop_assert_eq!(instance.ordinal(), first);
        prop_assert_eq!(instance.constants().position_of(instance.value()), Some(first));
    }

    /// Parent entries come first, child overrides keep the parent position
    #[test]
    fn test_merge_order(
        parent in arb_constant_table(8),
        child in arb_constant_table(8)
    ) {
        let mut lineage = Lineage::new(
            Declaration { name: "Child".to_string(), constants: child.clone(), default: None },
            Coercion::Numeric,
        );
        lineage.push_ancestor(Declaration {
            name: "Parent".to_string(),
            constants: parent.clone(),
            default: None,
        });

        let merged = ConstantSet::from_lineage(&lineage)?;

        let mut expected: Vec<&str> = parent.iter().map(|(n, _)| n.as_str()).collect();
        for (name, _) in &child {
            if !expected.contains(&name.as_str()) {
                expected.push(name.as_str());
            }
        }
        prop_assert_eq!(merged.names().collect::<Vec<_>>(), expected);

        for (name, value) in &child {
            prop_assert_eq!(merged.get(name), Some(value));
        }
        for (name, value) in &parent {
            if !child.iter().any(|(n, _)| n == name) {
                prop_assert_eq!(merged.get(name), Some(value));
            }
        }
    }

    /// The declared default drives construction without a candidate
    #[test]
    fn test_default_selection(
        table in arb_constant_table(12),
        default in arb_value()
    ) {
        let lineage = lineage_of("Generated", &table, Some(default.clone()), Coercion::Numeric);
        let explicit = Instance::with_value(&lineage, default);
        let implicit = Instance::new(&lineage);

        match (implicit, explicit) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(EnumError::UnknownValue { .. }), Err(EnumError::UnknownValue { .. })) => {}
            (a, b) => prop_assert!(false, "default and explicit disagree: {:?} vs {:?}", a, b),
        }
    }
}

#[test]
fn test_nan_is_never_selectable() {
    let lineage = lineage_of(
        "Floating",
        &[
            ("ONE".to_string(), Value::Double(1.0)),
            ("NAN".to_string(), Value::Double(f64::NAN)),
        ],
        Some(Value::Double(1.0)),
        Coercion::Numeric,
    );
    for outcome in [
        Instance::with_value(&lineage, f64::NAN),
        Instance::new(&lineage),
        Instance::by_name(&lineage, "NAN"),
    ] {
        assert!(matches!(outcome, Err(EnumError::NanConstant { .. })));
    }

    let finite = lineage_of("Finite", &[("ONE".to_string(), Value::Double(1.0))], None, Coercion::Numeric);
    assert!(matches!(
        Instance::with_value(&finite, f64::NAN),
        Err(EnumError::UnknownValue { .. })
    ));
}
