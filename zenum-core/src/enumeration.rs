// Typed enumeration instances over statically declared variants

use crate::constants::ConstantSet;
use crate::error::{EnumError, Result};
use crate::instance::Instance;
use crate::value::Value;
use crate::variant::{Lineage, Variant};
use std::fmt;
use std::marker::PhantomData;

/// An [`Instance`] tied to the variant type `V`
pub struct Enum<V: Variant> {
    inner: Instance,
    marker: PhantomData<fn() -> V>,
}

impl<V: Variant> Enum<V> {
    /// Select the variant's default value
    pub fn new() -> Result<Self> {
        Instance::new(&Lineage::of::<V>()?).map(Self::wrap)
    }

    pub fn with_value(value: impl Into<Value>) -> Result<Self> {
        Instance::with_value(&Lineage::of::<V>()?, value).map(Self::wrap)
    }

    pub fn by_name(name: &str) -> Result<Self> {
        Instance::by_name(&Lineage::of::<V>()?, name).map(Self::wrap)
    }

    /// Merged constants of `V` without selecting a value
    pub fn constants_of() -> Result<ConstantSet> {
        ConstantSet::from_lineage(&Lineage::of::<V>()?)
    }

    pub fn variant_name() -> &'static str {
        V::NAME
    }

    fn wrap(inner: Instance) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }

    pub fn constants(&self) -> &ConstantSet {
        self.inner.constants()
    }

    pub fn value(&self) -> &Value {
        self.inner.value()
    }

    pub fn into_value(self) -> Value {
        self.inner.into_value()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn ordinal(&self) -> usize {
        self.inner.ordinal()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> Result<()> {
        self.inner.set_value(value)
    }

    /// Drop the variant type, keeping the selected state
    pub fn into_instance(self) -> Instance {
        self.inner
    }
}

impl<V: Variant> TryFrom<Value> for Enum<V> {
    type Error = EnumError;

    fn try_from(value: Value) -> Result<Self> {
        Self::with_value(value)
    }
}

impl<V: Variant> AsRef<Instance> for Enum<V> {
    fn as_ref(&self) -> &Instance {
        &self.inner
    }
}

impl<V: Variant> Clone for Enum<V> {
    fn clone(&self) -> Self {
        Self::wrap(self.inner.clone())
    }
}

impl<V: Variant> PartialEq for Enum<V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<V: Variant> fmt::Debug for Enum<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enum")
            .field("variant", &V::NAME)
            .field("value", self.inner.value())
            .finish()
    }
}

impl<V: Variant> fmt::Display for Enum<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
