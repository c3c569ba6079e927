// Enumeration instances: one variant bound to one selected value

use crate::constants::ConstantSet;
use crate::error::{EnumError, Result};
use crate::value::{Coercion, Value};
use crate::variant::Lineage;
use std::cell::Cell;
use std::fmt;
use tracing::{debug, trace};

/// A variant's merged constants with one canonical value selected
///
/// The selected value is always stored verbatim in `constants`. The
/// constant set is resolved once at construction and never changes; only
/// the value does, through [`Instance::set_value`].
#[derive(Debug, Clone)]
pub struct Instance {
    variant: String,
    coercion: Coercion,
    constants: ConstantSet,
    value: Value,
    ordinal: Cell<Option<usize>>,
}

impl Instance {
    /// Select the lineage's default value
    pub fn new(lineage: &Lineage) -> Result<Self> {
        Self::construct(lineage, None)
    }

    pub fn with_value(lineage: &Lineage, value: impl Into<Value>) -> Result<Self> {
        Self::construct(lineage, Some(value.into()))
    }

    /// Select the constant declared under `name`
    pub fn by_name(lineage: &Lineage, name: &str) -> Result<Self> {
        let constants = ConstantSet::from_lineage(lineage)?;
        let value = match constants.get(name) {
            Some(value) => value.clone(),
            None => {
                return Err(EnumError::UnknownName {
                    variant: lineage.variant().to_string(),
                    name: name.to_string(),
                })
            }
        };
        Ok(Self::assemble(lineage, constants, value))
    }

    fn construct(lineage: &Lineage, requested: Option<Value>) -> Result<Self> {
        let constants = ConstantSet::from_lineage(lineage)?;
        let candidate = requested.unwrap_or_else(|| lineage.default_value());
        let value = canonicalize(lineage.variant(), &constants, lineage.coercion(), candidate)?;
        Ok(Self::assemble(lineage, constants, value))
    }

    fn assemble(lineage: &Lineage, constants: ConstantSet, value: Value) -> Self {
        Self {
            variant: lineage.variant().to_string(),
            coercion: lineage.coercion(),
            constants,
            value,
            ordinal: Cell::new(None),
        }
    }

    /// Name of the concrete variant
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn coercion(&self) -> Coercion {
        self.coercion
    }

    pub fn constants(&self) -> &ConstantSet {
        &self.constants
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Name of the first constant exactly equal to the selected value
    pub fn name(&self) -> &str {
        match self.constants.name_of(&self.value) {
            Some(name) => name,
            None => self.undefined_value(),
        }
    }

    /// Zero-based position of the selected value, memoized until the value
    /// changes
    pub fn ordinal(&self) -> usize {
        if let Some(ordinal) = self.ordinal.get() {
            return ordinal;
        }

        match self.constants.position_of(&self.value) {
            Some(ordinal) => {
                self.ordinal.set(Some(ordinal));
                ordinal
            }
            None => self.undefined_value(),
        }
    }

    /// Select another value. On error the instance is left untouched.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = canonicalize(&self.variant, &self.constants, self.coercion, value.into())?;
        self.value = value;
        self.ordinal.set(None);
        Ok(())
    }

    // Only reachable if the selected value escaped validation.
    #[cold]
    fn undefined_value(&self) -> ! {
        panic!(
            "Current value '{}' ({}) isn't defined within {}",
            self.value,
            self.value.kind(),
            self.variant
        )
    }
}

/// Swap a candidate for the first loosely equal stored constant
fn canonicalize(
    variant: &str,
    constants: &ConstantSet,
    coercion: Coercion,
    candidate: Value,
) -> Result<Value> {
    match constants.find(&candidate, coercion) {
        Some((ordinal, name, stored)) => {
            if *stored != candidate {
                trace!(
                    variant,
                    constant = name,
                    ordinal,
                    from = candidate.kind(),
                    to = stored.kind(),
                    "canonicalized value"
                );
            }
            Ok(stored.clone())
        }
        None => {
            debug!(variant, value = %candidate, kind = candidate.kind(), "rejected value");
            Err(EnumError::UnknownValue {
                variant: variant.to_string(),
                value: candidate,
            })
        }
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant && self.value == other.value
    }
}

/// Renders the selected value, not its name
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
