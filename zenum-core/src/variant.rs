// Variant declarations and lineage discovery
//
// A variant declares its own constants, an optional default and an optional
// parent. Discovery walks parent links into a `Lineage`, most-derived level
// first, which `ConstantSet::from_lineage` then merges root first.

use crate::error::{EnumError, Result};
use crate::value::{Coercion, Value};
use std::any::TypeId;

/// One level of an inheritance chain: the constants a variant declares itself
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub constants: Vec<(String, Value)>,
    pub default: Option<Value>,
}

/// Discovered declaration chain of a variant, most-derived level first
#[derive(Debug, Clone, PartialEq)]
pub struct Lineage {
    levels: Vec<Declaration>,
    coercion: Coercion,
}

impl Lineage {
    /// Start a chain at the concrete variant
    pub fn new(concrete: Declaration, coercion: Coercion) -> Self {
        Self {
            levels: vec![concrete],
            coercion,
        }
    }

    /// Append the next ancestor above the current root
    pub fn push_ancestor(&mut self, ancestor: Declaration) {
        self.levels.push(ancestor);
    }

    /// Walk the static declarations of `V` and its ancestors
    pub fn of<V: Variant>() -> Result<Self> {
        let mut seen = vec![TypeId::of::<V>()];
        let mut lineage = Lineage::new(declaration::<V>(), V::coercion());

        let mut next = V::parent();
        while let Some(ancestor) = next {
            if seen.contains(&ancestor.type_id) {
                return Err(EnumError::CyclicLineage {
                    variant: V::NAME.to_string(),
                });
            }
            seen.push(ancestor.type_id);
            lineage.push_ancestor((ancestor.declare)());
            next = (ancestor.parent)();
        }

        Ok(lineage)
    }

    /// Name of the concrete variant
    pub fn variant(&self) -> &str {
        &self.levels[0].name
    }

    pub fn levels(&self) -> &[Declaration] {
        &self.levels
    }

    pub fn coercion(&self) -> Coercion {
        self.coercion
    }

    /// Nearest declared default, or `Null` when no level declares one
    pub fn default_value(&self) -> Value {
        self.levels
            .iter()
            .find_map(|level| level.default.clone())
            .unwrap_or(Value::Null)
    }
}

/// A statically declared enumeration variant
///
/// Usually implemented through [`enumeration!`](crate::enumeration).
pub trait Variant: 'static {
    const NAME: &'static str;

    /// Constants declared by this variant itself, in declaration order
    fn own_constants() -> Vec<(&'static str, Value)>;

    /// Value selected when construction omits a candidate
    fn default_value() -> Option<Value> {
        None
    }

    fn parent() -> Option<Ancestor> {
        None
    }

    fn coercion() -> Coercion {
        Coercion::default()
    }
}

/// Type-erased link to a parent variant
#[derive(Clone, Copy)]
pub struct Ancestor {
    type_id: TypeId,
    declare: fn() -> Declaration,
    parent: fn() -> Option<Ancestor>,
}

impl Ancestor {
    pub fn of<V: Variant>() -> Self {
        Self {
            type_id: TypeId::of::<V>(),
            declare: declaration::<V>,
            parent: V::parent,
        }
    }
}

fn declaration<V: Variant>() -> Declaration {
    Declaration {
        name: V::NAME.to_string(),
        constants: V::own_constants()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
        default: V::default_value(),
    }
}

/// Declare an enumeration variant
///
/// ```
/// use zenum_core::enumeration;
/// use zenum_core::Enum;
///
/// enumeration! {
///     pub struct Priority {
///         LOW = 1,
///         HIGH = 2,
///     }
///     default = 1;
/// }
///
/// enumeration! {
///     pub struct Escalation extends Priority {
///         URGENT = 3,
///     }
/// }
///
/// let level = Enum::<Escalation>::new().unwrap();
/// assert_eq!(level.name(), "LOW");
/// assert_eq!(Enum::<Escalation>::with_value(3).unwrap().ordinal(), 2);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(extends $parent:ty)? {
            $($constant:ident = $value:expr),* $(,)?
        }
        $(default = $default:expr;)?
        $(coercion = $coercion:expr;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::variant::Variant for $name {
            const NAME: &'static str = stringify!($name);

            fn own_constants() -> ::std::vec::Vec<(&'static str, $crate::value::Value)> {
                ::std::vec![$((stringify!($constant), $crate::value::Value::from($value))),*]
            }

            $(
                fn default_value() -> ::std::option::Option<$crate::value::Value> {
                    ::std::option::Option::Some($crate::value::Value::from($default))
                }
            )?

            $(
                fn parent() -> ::std::option::Option<$crate::variant::Ancestor> {
                    ::std::option::Option::Some($crate::variant::Ancestor::of::<$parent>())
                }
            )?

            $(
                fn coercion() -> $crate::value::Coercion {
                    $coercion
                }
            )?
        }
    };
}
