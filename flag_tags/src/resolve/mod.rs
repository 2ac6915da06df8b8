//! Resolution of record fields into flag bindings.
//!
//! The resolver walks the descriptors returned by [`Record::fields`] in
//! declaration order, descending depth-first into nested records. Names are
//! inferred from the field identifier unless a `name` or `env` annotation
//! overrides them, and every name is prefixed with the active [`Options`].
//! Resolution stops at the first field that cannot be bound.

mod value;

use tracing::{debug, trace};

use crate::binding::{Binding, BoundValue};
use crate::case::{to_kebab_case, to_screaming_snake_case};
use crate::record::{Field, Slot};
use crate::{FlagError, FlagResult, Options, Record, Target};

use value::{parse_bool, parse_float, parse_int};

/// Resolves the bindings of `target` using default [`Options`].
///
/// # Errors
///
/// See [`resolve_with`].
pub fn resolve<'a, T: Target<'a>>(target: T) -> FlagResult<Vec<Binding<'a>>> {
    resolve_with(target, &Options::default())
}

/// Resolves the bindings of `target`, applying the prefixes in `options`.
///
/// Flag names default to the field name in `kebab-case` and environment
/// variables to the field name in `SCREAMING_SNAKE_CASE`. The annotations
/// `name`, `env`, `value` and `usage` override the flag name, the environment
/// variable, the default value and the help text respectively.
///
/// # Examples
///
/// ```
/// use flag_tags::{FlagTags, Options, resolve_with};
///
/// #[derive(FlagTags, Default)]
/// struct Config {
///     pub host_url: String,
/// }
///
/// let mut config = Config::default();
/// let options = Options::default().with_env_prefix("MYAPP_");
/// let bindings = resolve_with(&mut config, &options)?;
/// assert_eq!(bindings[0].flag_name, "host-url");
/// assert_eq!(bindings[0].env_name, "MYAPP_HOST_URL");
/// # Ok::<(), flag_tags::FlagError>(())
/// ```
///
/// # Errors
///
/// Fails without returning any bindings when:
/// - `target` is not a mutable reference to a record
///   ([`FlagError::NilValue`], [`FlagError::MustBePointer`],
///   [`FlagError::InvalidStruct`]);
/// - a field is private ([`FlagError::PrivateField`]);
/// - a nested record is `None` ([`FlagError::NilNestedRecord`]);
/// - a field's type is not supported ([`FlagError::UnsupportedType`]);
/// - a `value` annotation does not parse ([`FlagError::ValueParse`]).
pub fn resolve_with<'a, T: Target<'a>>(
    target: T,
    options: &Options,
) -> FlagResult<Vec<Binding<'a>>> {
    let record = target.into_record()?;
    let mut bindings = Vec::new();
    resolve_record(record, options, &mut bindings)?;
    Ok(bindings)
}

fn resolve_record<'a>(
    record: &'a mut (dyn Record + 'a),
    options: &Options,
    out: &mut Vec<Binding<'a>>,
) -> FlagResult<()> {
    for field in record.fields() {
        let name = field.name;
        resolve_field(field, options, out).inspect_err(|err| {
            debug!(field = name, error = %err, "failed to resolve field");
        })?;
    }
    Ok(())
}

fn resolve_field<'a>(
    field: Field<'a>,
    options: &Options,
    out: &mut Vec<Binding<'a>>,
) -> FlagResult<()> {
    let Field {
        name,
        annotations,
        accessible,
        embedded,
        slot,
    } = field;

    if !accessible {
        return Err(FlagError::private_field(name));
    }

    let flag_name = format!(
        "{}{}",
        options.flag_prefix,
        annotations.name.map_or_else(|| to_kebab_case(name), str::to_owned)
    );
    // An explicit flag name also drives the inferred environment variable.
    let env_base = annotations.name.unwrap_or(name);
    let env_name = format!(
        "{}{}",
        options.env_prefix,
        annotations
            .env
            .map_or_else(|| to_screaming_snake_case(env_base), str::to_owned)
    );
    let usage = annotations.usage.unwrap_or_default().to_owned();
    let raw = annotations.value.filter(|literal| !literal.is_empty());

    let value = match slot {
        Slot::Str(storage) => BoundValue::String {
            default: annotations.value.unwrap_or_default().to_owned(),
            storage,
        },
        Slot::Int(storage) => BoundValue::Int {
            default: raw.map(|literal| parse_int(name, literal)).transpose()?.unwrap_or(0),
            storage,
        },
        Slot::Bool(storage) => BoundValue::Bool {
            default: raw
                .map(|literal| parse_bool(name, literal))
                .transpose()?
                .unwrap_or(false),
            storage,
        },
        Slot::Float(storage) => BoundValue::Float {
            default: raw
                .map(|literal| parse_float(name, literal))
                .transpose()?
                .unwrap_or(0.0),
            storage,
        },
        Slot::Record(None) => return Err(FlagError::nil_nested_record(name)),
        Slot::Record(Some(child)) => {
            let child_options = if embedded {
                options.clone()
            } else {
                let prefix_source = annotations.name.unwrap_or(name);
                options.nested(
                    &to_kebab_case(prefix_source),
                    &to_screaming_snake_case(prefix_source),
                )
            };
            trace!(
                field = name,
                embedded,
                flag_prefix = %child_options.flag_prefix,
                env_prefix = %child_options.env_prefix,
                "descending into nested record"
            );
            return resolve_record(child, &child_options, out);
        }
        Slot::Unsupported(kind) => return Err(FlagError::unsupported_type(name, kind)),
    };

    debug!(
        flag = %flag_name,
        env = %env_name,
        kind = %value.kind(),
        "resolved binding"
    );
    out.push(Binding::new(flag_name, env_name, usage, value));
    Ok(())
}

#[cfg(test)]
mod tests;
