// Fixture variants and generators for zenum tests

#![allow(dead_code)]

use proptest::prelude::*;
use std::collections::HashSet;
use zenum_core::{enumeration, Coercion, Declaration, Lineage, Value};

enumeration! {
    pub struct WithDefault {
        ONE = 1,
        TWO = 2,
    }
    default = 1;
}

enumeration! {
    pub struct WithNullConstant {
        NONE = Value::Null,
        ONE = 1,
        TWO = 2,
    }
}

enumeration! {
    pub struct WithoutDefault {
        ONE = 1,
        TWO = 2,
    }
}

enumeration! {
    pub struct Empty {}
}

enumeration! {
    pub struct Colors {
        RED = "red",
        GREEN = "green",
        BLUE = "blue",
    }
    default = "green";
}

enumeration! {
    /// Values that only match across kinds under weak comparison
    pub struct Falsy {
        NOTHING = Value::Null,
        NO = false,
        ZERO = 0,
        HALF = 0.5,
        TEXT = "0",
    }
}

enumeration! {
    pub struct Repeated {
        FIRST = 1,
        SECOND = 1,
        THIRD = 2,
    }
    default = 1;
}

enumeration! {
    pub struct StrictNumbers {
        ONE = 1,
        TWO = 2,
    }
    default = 1;
    coercion = Coercion::Exact;
}

enumeration! {
    pub struct Base {
        A = 1,
        B = 2,
    }
    default = 2;
}

enumeration! {
    pub struct Derived extends Base {
        C = 3,
        A = 10,
    }
}

enumeration! {
    pub struct Grandchild extends Derived {
        D = "d",
    }
    default = "d";
}

/// Build a single-level lineage from a generated table
pub fn lineage_of(
    name: &str,
    constants: &[(String, Value)],
    default: Option<Value>,
    coercion: Coercion,
) -> Lineage {
    Lineage::new(
        Declaration {
            name: name.to_string(),
            constants: constants.to_vec(),
            default,
        },
        coercion,
    )
}

/// Generate primitive values, NaN excluded
pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-50i64..50).prop_map(Value::Int),
        (-50i64..50).prop_map(|n| Value::Double(n as f64)),
        (-50.0f64..50.0).prop_map(Value::Double),
        "[a-z0-9]{0,4}".prop_map(Value::Str),
    ]
}

/// Generate constant names
pub fn arb_constant_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_]{0,6}"
}

/// Generate a constant table with unique names
pub fn arb_constant_table(max: usize) -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::vec((arb_constant_name(), arb_value()), 1..max).prop_map(|entries| {
        let mut seen = HashSet::new();
        entries
            .into_iter()
            .filter(|(name, _)| seen.insert(name.clone()))
            .collect()
    })
}

pub fn arb_coercion() -> impl Strategy<Value = Coercion> {
    prop_oneof![Just(Coercion::Exact), Just(Coercion::Numeric)]
}
