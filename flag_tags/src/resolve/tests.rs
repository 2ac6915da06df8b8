//! Unit tests for binding resolution over hand-written records.

use super::*;
use crate::record::{Annotations, FieldValue};
use crate::{BoundValue, ValueKind};
use rstest::rstest;

#[derive(Default)]
struct Tagged {
    first_name: String,
    age: i64,
    active: bool,
}

impl Record for Tagged {
    fn fields(&mut self) -> Vec<Field<'_>> {
        let Self {
            first_name,
            age,
            active,
        } = self;
        vec![
            Field::new("first_name", first_name.slot()).with_annotations(Annotations {
                usage: Some("Given name"),
                value: Some("Ada"),
                ..Annotations::default()
            }),
            Field::new("age", age.slot()).with_annotations(Annotations {
                name: Some("years"),
                value: Some("36"),
                ..Annotations::default()
            }),
            Field::new("active", active.slot()).with_annotations(Annotations {
                env: Some("IS_ACTIVE"),
                value: Some("T"),
                ..Annotations::default()
            }),
        ]
    }
}

#[derive(Default)]
struct Database {
    host: String,
    port: i64,
}

impl Record for Database {
    fn fields(&mut self) -> Vec<Field<'_>> {
        let Self { host, port } = self;
        vec![
            Field::new("host", host.slot()),
            Field::new("port", port.slot()).with_annotations(Annotations {
                value: Some("5432"),
                ..Annotations::default()
            }),
        ]
    }
}

/// A record with one nested child, optionally renamed or flattened.
#[derive(Default)]
struct Service {
    database: Database,
    replica: Option<Database>,
    rename: Option<&'static str>,
    flatten: bool,
    ratio: f64,
}

impl Record for Service {
    fn fields(&mut self) -> Vec<Field<'_>> {
        let Self {
            database,
            replica,
            rename,
            flatten,
            ratio,
        } = self;
        vec![
            Field::new("database", database.slot())
                .with_annotations(Annotations {
                    name: *rename,
                    ..Annotations::default()
                })
                .embedded(*flatten),
            Field::new("replica", replica.slot()),
            Field::new("ratio", ratio.slot()),
        ]
    }
}

fn service() -> Service {
    Service {
        replica: Some(Database::default()),
        ..Service::default()
    }
}

fn names(bindings: &[Binding<'_>]) -> Vec<(String, String)> {
    bindings
        .iter()
        .map(|binding| (binding.flag_name.clone(), binding.env_name.clone()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(flag, env)| ((*flag).to_owned(), (*env).to_owned()))
        .collect()
}

#[test]
fn resolves_annotated_fields_in_order() -> FlagResult<()> {
    let mut record = Tagged::default();
    let bindings = resolve(&mut record)?;
    assert_eq!(
        names(&bindings),
        pairs(&[
            ("first-name", "FIRST_NAME"),
            ("years", "YEARS"),
            ("active", "IS_ACTIVE"),
        ])
    );
    assert_eq!(bindings[0].usage, "Given name");
    assert_eq!(bindings[1].usage, "");
    assert!(matches!(
        &bindings[0].value,
        BoundValue::String { default, .. } if default == "Ada"
    ));
    assert!(matches!(bindings[1].value, BoundValue::Int { default: 36, .. }));
    assert!(matches!(bindings[2].value, BoundValue::Bool { default: true, .. }));
    Ok(())
}

#[test]
fn resolution_leaves_fields_untouched() -> FlagResult<()> {
    let mut record = Tagged {
        first_name: "Grace".into(),
        ..Tagged::default()
    };
    let bindings = resolve(&mut record)?;
    drop(bindings);
    assert_eq!(record.first_name, "Grace");
    assert_eq!(record.age, 0);
    Ok(())
}

#[test]
fn bindings_write_through_to_the_record() -> FlagResult<()> {
    let mut record = Tagged::default();
    let mut bindings = resolve(&mut record)?;
    for binding in &mut bindings {
        binding.value.reset();
    }
    if let BoundValue::Int { storage, .. } = &mut bindings[1].value {
        **storage += 1;
    }
    drop(bindings);
    assert_eq!(record.first_name, "Ada");
    assert_eq!(record.age, 37);
    assert!(record.active);
    Ok(())
}

#[test]
fn applies_prefixes_from_options() -> FlagResult<()> {
    let mut record = Tagged::default();
    let options = Options::default()
        .with_env_prefix("MYAPP_")
        .with_flag_prefix("app-");
    let bindings = resolve_with(&mut record, &options)?;
    assert_eq!(
        names(&bindings),
        pairs(&[
            ("app-first-name", "MYAPP_FIRST_NAME"),
            ("app-years", "MYAPP_YEARS"),
            ("app-active", "MYAPP_IS_ACTIVE"),
        ])
    );
    Ok(())
}

#[test]
fn nested_records_prefix_their_children() -> FlagResult<()> {
    let mut record = service();
    let bindings = resolve(&mut record)?;
    assert_eq!(
        names(&bindings),
        pairs(&[
            ("database-host", "DATABASE_HOST"),
            ("database-port", "DATABASE_PORT"),
            ("replica-host", "REPLICA_HOST"),
            ("replica-port", "REPLICA_PORT"),
            ("ratio", "RATIO"),
        ])
    );
    assert!(matches!(bindings[1].value, BoundValue::Int { default: 5432, .. }));
    assert_eq!(bindings[4].kind(), ValueKind::Float);
    Ok(())
}

#[test]
fn renamed_nested_record_uses_its_name_as_prefix() -> FlagResult<()> {
    let mut record = Service {
        rename: Some("db"),
        ..service()
    };
    let options = Options::default().with_env_prefix("APP_");
    let bindings = resolve_with(&mut record, &options)?;
    assert_eq!(
        names(&bindings)[..2],
        pairs(&[("db-host", "APP_DB_HOST"), ("db-port", "APP_DB_PORT")])[..]
    );
    Ok(())
}

#[test]
fn flattened_record_shares_the_parent_namespace() -> FlagResult<()> {
    let mut record = Service {
        flatten: true,
        ..service()
    };
    let options = Options::default()
        .with_env_prefix("APP_")
        .with_flag_prefix("app-");
    let bindings = resolve_with(&mut record, &options)?;
    assert_eq!(
        names(&bindings),
        pairs(&[
            ("app-host", "APP_HOST"),
            ("app-port", "APP_PORT"),
            ("app-replica-host", "APP_REPLICA_HOST"),
            ("app-replica-port", "APP_REPLICA_PORT"),
            ("app-ratio", "APP_RATIO"),
        ])
    );
    Ok(())
}

#[test]
fn missing_nested_record_is_rejected() {
    let mut record = Service::default();
    let outcome = resolve(&mut record);
    assert!(
        matches!(&outcome, Err(FlagError::NilNestedRecord { field }) if field == "replica"),
        "unexpected outcome: {outcome:?}"
    );
}

struct Guarded {
    visible: String,
    hidden: String,
}

impl Record for Guarded {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("visible", self.visible.slot()),
            Field::new("hidden", self.hidden.slot()).accessible(false),
        ]
    }
}

#[test]
fn private_field_is_rejected() {
    let mut record = Guarded {
        visible: String::new(),
        hidden: String::new(),
    };
    let outcome = resolve(&mut record);
    assert!(
        matches!(&outcome, Err(FlagError::PrivateField { field }) if field == "hidden"),
        "unexpected outcome: {outcome:?}"
    );
}

#[derive(Default)]
struct Unsupported {
    count: u32,
    tags: Vec<String>,
}

impl Record for Unsupported {
    fn fields(&mut self) -> Vec<Field<'_>> {
        let Self { count, tags } = self;
        vec![
            Field::new("count", count.slot()),
            Field::new("tags", tags.slot()),
        ]
    }
}

#[test]
fn unsupported_types_are_rejected_with_their_name() {
    let mut record = Unsupported::default();
    let outcome = resolve(&mut record);
    assert!(
        matches!(
            &outcome,
            Err(FlagError::UnsupportedType { field, kind }) if field == "count" && kind == "u32"
        ),
        "unexpected outcome: {outcome:?}"
    );
}

/// A record with a single leaf of the given kind and default literal.
struct Literal {
    kind: ValueKind,
    value: &'static str,
    text: String,
    number: i64,
    flag: bool,
    ratio: f64,
}

impl Literal {
    const fn new(kind: ValueKind, value: &'static str) -> Self {
        Self {
            kind,
            value,
            text: String::new(),
            number: 0,
            flag: false,
            ratio: 0.0,
        }
    }
}

impl Record for Literal {
    fn fields(&mut self) -> Vec<Field<'_>> {
        let slot = match self.kind {
            ValueKind::String => self.text.slot(),
            ValueKind::Int => self.number.slot(),
            ValueKind::Bool => self.flag.slot(),
            ValueKind::Float => self.ratio.slot(),
        };
        vec![Field::new("setting", slot).with_annotations(Annotations {
            value: Some(self.value),
            ..Annotations::default()
        })]
    }
}

#[rstest]
#[case(ValueKind::Int, "3.5")]
#[case(ValueKind::Int, "seven")]
#[case(ValueKind::Bool, "yes")]
#[case(ValueKind::Float, "half")]
fn malformed_defaults_are_rejected(#[case] kind: ValueKind, #[case] literal: &'static str) {
    let mut record = Literal::new(kind, literal);
    let outcome = resolve(&mut record);
    assert!(
        matches!(
            &outcome,
            Err(FlagError::ValueParse { field, raw, kind: reported, .. })
                if field == "setting" && raw == literal && *reported == kind
        ),
        "unexpected outcome: {outcome:?}"
    );
}

#[rstest]
#[case(ValueKind::String, "")]
#[case(ValueKind::Int, "")]
#[case(ValueKind::Bool, "")]
#[case(ValueKind::Float, "")]
#[case(ValueKind::Int, "-12")]
#[case(ValueKind::Float, "2.5")]
#[case(ValueKind::Bool, "0")]
fn well_formed_defaults_resolve(
    #[case] kind: ValueKind,
    #[case] literal: &'static str,
) -> FlagResult<()> {
    let mut record = Literal::new(kind, literal);
    let bindings = resolve(&mut record)?;
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].kind(), kind);
    let rendered = bindings[0].value.default_string();
    let expected = match (kind, literal) {
        (ValueKind::Int | ValueKind::Float, "") => "0",
        (ValueKind::Bool, "" | "0") => "false",
        (_, other) => other,
    };
    assert_eq!(rendered, expected);
    Ok(())
}

#[test]
fn first_failure_stops_resolution() {
    let mut record = Unsupported::default();
    let outcome = resolve(&mut record);
    assert!(matches!(
        outcome,
        Err(FlagError::UnsupportedType { ref field, .. }) if field == "count"
    ));
}

#[test]
fn sibling_records_do_not_share_prefixes() -> FlagResult<()> {
    let mut record = service();
    let options = Options::default().with_flag_prefix("root-");
    let bindings = resolve_with(&mut record, &options)?;
    let flags: Vec<_> = bindings.iter().map(|b| b.flag_name.as_str()).collect();
    assert_eq!(
        flags,
        [
            "root-database-host",
            "root-database-port",
            "root-replica-host",
            "root-replica-port",
            "root-ratio",
        ]
    );
    assert_eq!(options.flag_prefix, "root-");
    Ok(())
}

#[test]
fn boxed_records_resolve_like_their_contents() -> FlagResult<()> {
    let mut boxed = Box::new(Database::default());
    let bindings = resolve(&mut boxed)?;
    assert_eq!(
        names(&bindings),
        pairs(&[("host", "HOST"), ("port", "PORT")])
    );
    Ok(())
}

#[test]
fn top_level_shape_errors_are_reported() {
    let none: Option<&mut Database> = None;
    assert!(matches!(resolve(none), Err(FlagError::NilValue)));
    let database = Database::default();
    assert!(matches!(resolve(&database), Err(FlagError::MustBePointer)));
    let mut text = String::new();
    assert!(matches!(resolve(&mut text), Err(FlagError::InvalidStruct)));
}
