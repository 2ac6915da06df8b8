//! Field descriptors for configuration records.
//!
//! `#[derive(FlagTags)]` implements [`Record`] by listing every field of the
//! struct together with its annotations and a [`Slot`] that mutably borrows
//! the field's storage. The resolver walks these descriptors instead of
//! inspecting the struct at runtime.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;

use crate::binding::Binding;
use crate::{FlagResult, Options};

/// A configuration struct whose fields can be bound to flags.
///
/// Implementations are normally generated by `#[derive(FlagTags)]`.
///
/// # Examples
///
/// ```
/// use flag_tags::{FlagTags, Record};
///
/// #[derive(FlagTags, Default)]
/// struct Config {
///     #[flag(usage = "Listen port", value = "3001")]
///     pub port: i64,
///     pub host_url: String,
/// }
///
/// let mut config = Config::default();
/// let names: Vec<_> = config.fields().iter().map(|f| f.name).collect();
/// assert_eq!(names, ["port", "host_url"]);
/// ```
pub trait Record {
    /// Lists the record's fields in declaration order.
    ///
    /// Each [`Field`] borrows its own storage, so the returned descriptors
    /// can be written through independently of one another.
    fn fields(&mut self) -> Vec<Field<'_>>;

    /// Resolves the record's bindings using default [`Options`].
    ///
    /// # Errors
    ///
    /// Returns a [`crate::FlagError`] when a field cannot be bound.
    fn bindings(&mut self) -> FlagResult<Vec<Binding<'_>>>
    where
        Self: Sized,
    {
        crate::resolve(self)
    }

    /// Resolves the record's bindings using `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::FlagError`] when a field cannot be bound.
    fn bindings_with(&mut self, options: &Options) -> FlagResult<Vec<Binding<'_>>>
    where
        Self: Sized,
    {
        crate::resolve_with(self, options)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// Per-field annotations given through `#[flag(...)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Overrides the inferred flag name.
    pub name: Option<&'static str>,
    /// Overrides the inferred environment variable name.
    pub env: Option<&'static str>,
    /// Literal default, parsed according to the field's type.
    pub value: Option<&'static str>,
    /// Help text shown for the flag.
    pub usage: Option<&'static str>,
}

/// Mutable access to a single field, tagged with its binding kind.
#[derive(Debug)]
#[non_exhaustive]
pub enum Slot<'a> {
    /// A `String` field.
    Str(&'a mut String),
    /// An `i64` field.
    Int(&'a mut i64),
    /// A `bool` field.
    Bool(&'a mut bool),
    /// An `f64` field.
    Float(&'a mut f64),
    /// A nested record; `None` when an optional child is absent.
    Record(Option<&'a mut (dyn Record + 'a)>),
    /// A field whose type has no binding rule, carrying the type's name.
    Unsupported(&'static str),
}

impl std::fmt::Debug for dyn Record + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Record")
    }
}

/// Descriptor for one field of a [`Record`].
#[derive(Debug)]
#[non_exhaustive]
pub struct Field<'a> {
    /// The field's identifier, without any `r#` prefix.
    pub name: &'static str,
    /// Annotations attached to the field.
    pub annotations: Annotations,
    /// `false` when the field has no visibility modifier.
    pub accessible: bool,
    /// `true` when a nested record is flattened into its parent's namespace.
    pub embedded: bool,
    /// Typed access to the field's storage.
    pub slot: Slot<'a>,
}

impl<'a> Field<'a> {
    /// Creates a public, non-embedded field without annotations.
    #[must_use]
    pub fn new(name: &'static str, slot: Slot<'a>) -> Self {
        Self {
            name,
            annotations: Annotations::default(),
            accessible: true,
            embedded: false,
            slot,
        }
    }

    /// Sets the field's annotations.
    #[must_use]
    pub const fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Marks whether the field is visible outside its module.
    #[must_use]
    pub const fn accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    /// Marks whether a nested record is flattened into its parent.
    #[must_use]
    pub const fn embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }
}

/// Maps a field's type to the [`Slot`] the resolver dispatches on.
///
/// Implemented for the supported leaves (`String`, `i64`, `bool`, `f64`),
/// for every [`Record`], for `Option` of a record, and for common standard
/// library types which resolve to [`Slot::Unsupported`].
pub trait FieldValue {
    /// Borrows the value as a typed slot.
    fn slot(&mut self) -> Slot<'_>;
}

impl FieldValue for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Str(self)
    }
}

impl FieldValue for i64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Int(self)
    }
}

impl FieldValue for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl FieldValue for f64 {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Float(self)
    }
}

impl<R: Record> FieldValue for R {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Record(Some(self))
    }
}

impl<R: Record> FieldValue for Option<R> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Record(self.as_mut().map(|child| child as &mut dyn Record))
    }
}

macro_rules! unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

unsupported!(
    i8, i16, i32, i128, isize, u8, u16, u32, u64, u128, usize, f32, char, PathBuf, Duration,
    Option<String>, Option<i64>, Option<bool>, Option<f64>,
);

impl<T> FieldValue for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<K, V, S> FieldValue for HashMap<K, V, S> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}

impl<K, V> FieldValue for BTreeMap<K, V> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(std::any::type_name::<Self>())
    }
}
