//! Validation of the value handed to the resolver.
//!
//! Only a mutable reference to a [`Record`] can be resolved, since bindings
//! write parsed values back into the record. Other shapes are accepted by the
//! type system so that they fail with a descriptive [`FlagError`] instead of
//! a compile error at the call site.

use std::collections::{BTreeMap, HashMap};

use crate::{FlagError, FlagResult, Record};

/// A value that may be resolved into flag bindings.
///
/// | Input                               | Outcome                         |
/// |-------------------------------------|---------------------------------|
/// | `&mut R` where `R: Record`          | resolved                        |
/// | `None`                              | [`FlagError::NilValue`]         |
/// | `&R`, or a plain value              | [`FlagError::MustBePointer`]    |
/// | `&mut` to a map, vector or scalar   | [`FlagError::InvalidStruct`]    |
pub trait Target<'a> {
    /// Yields the record behind this value.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::NilValue`], [`FlagError::MustBePointer`] or
    /// [`FlagError::InvalidStruct`] when the value cannot be resolved.
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)>;
}

impl<'a, R: Record + 'a> Target<'a> for &'a mut R {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Ok(self)
    }
}

impl<'a, R: Record + 'a> Target<'a> for &'a R {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::MustBePointer)
    }
}

impl<'a, T: Target<'a>> Target<'a> for Option<T> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        self.ok_or(FlagError::NilValue)?.into_record()
    }
}

macro_rules! not_a_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> Target<'a> for $ty {
                fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
                    Err(FlagError::MustBePointer)
                }
            }

            impl<'a> Target<'a> for &'a mut $ty {
                fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
                    Err(FlagError::InvalidStruct)
                }
            }
        )*
    };
}

not_a_record!(String, i64, bool, f64);

impl<'a, T> Target<'a> for Vec<T> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::MustBePointer)
    }
}

impl<'a, T> Target<'a> for &'a mut Vec<T> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::InvalidStruct)
    }
}

impl<'a, K, V, S> Target<'a> for HashMap<K, V, S> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::MustBePointer)
    }
}

impl<'a, K, V, S> Target<'a> for &'a mut HashMap<K, V, S> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::InvalidStruct)
    }
}

impl<'a, K, V> Target<'a> for BTreeMap<K, V> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::MustBePointer)
    }
}

impl<'a, K, V> Target<'a> for &'a mut BTreeMap<K, V> {
    fn into_record(self) -> FlagResult<&'a mut (dyn Record + 'a)> {
        Err(FlagError::InvalidStruct)
    }
}
