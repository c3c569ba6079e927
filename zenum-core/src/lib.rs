//! Closed sets of named primitive constants.
//!
//! A variant declares name → value pairs, optionally on top of a parent
//! variant. Creating an [`Enum`] (or an untyped [`Instance`]) merges the whole
//! declaration chain ancestor-first, validates the requested value against
//! it and stores the matching constant verbatim.
//!
//! ```
//! use zenum_core::{enumeration, Enum, EnumError};
//!
//! enumeration! {
//!     pub struct Numbers {
//!         ONE = 1,
//!         TWO = 2,
//!     }
//!     default = 1;
//! }
//!
//! let mut number = Enum::<Numbers>::new().unwrap();
//! assert_eq!((number.name(), number.ordinal()), ("ONE", 0));
//!
//! // Integral doubles canonicalize to the declared integer
//! number.set_value(2.0).unwrap();
//! assert_eq!(number.value(), &zenum_core::Value::Int(2));
//!
//! // Strings never coerce to numbers
//! assert!(matches!(number.set_value("2"), Err(EnumError::UnknownValue { .. })));
//! assert_eq!(number.name(), "TWO");
//! ```

pub mod catalog;
pub mod constants;
pub mod enumeration;
pub mod error;
pub mod instance;
pub mod value;
pub mod variant;

pub use catalog::{Catalog, VariantDef};
pub use constants::ConstantSet;
pub use enumeration::Enum;
pub use error::{EnumError, Result};
pub use instance::Instance;
pub use value::{Coercion, Value};
pub use variant::{Ancestor, Declaration, Lineage, Variant};
