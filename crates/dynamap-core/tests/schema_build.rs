use dynamap_core::convert::ConverterRegistry;
use dynamap_core::schema::{AutoConfig, Builder, KeyRole, RecordSchema};
use dynamap_core::value::Type;
use dynamap_core::GenerateStrategy;
use pretty_assertions::assert_eq;

fn build(builder: &Builder) -> dynamap_core::Result<RecordSchema> {
    builder.build_with(&ConverterRegistry::standard())
}

#[test]
fn attributes_keep_declaration_order() {
    let mut builder = RecordSchema::builder("Event");
    builder.attribute("stream", Type::String).partition_key();
    builder.attribute("seq", Type::U64).sort_key();
    builder
        .attribute("recorded_at", Type::Zoned)
        .auto(AutoConfig::Timestamp(GenerateStrategy::Create));
    builder.attribute("payload", Type::Bytes);

    let schema = build(&builder).unwrap();

    assert_eq!(schema.name(), "Event");
    assert_eq!(
        schema
            .attributes()
            .iter()
            .map(|attr| (attr.index, attr.name(), attr.key_role()))
            .collect::<Vec<_>>(),
        vec![
            (0, "stream", KeyRole::PartitionKey),
            (1, "seq", KeyRole::SortKey),
            (2, "recorded_at", KeyRole::None),
            (3, "payload", KeyRole::None),
        ]
    );
    assert_eq!(schema.partition_key().name(), "stream");
    assert_eq!(schema.sort_key().unwrap().name(), "seq");
    assert_eq!(
        schema.generated().map(|attr| attr.name()).collect::<Vec<_>>(),
        vec!["recorded_at"]
    );
    assert_eq!(schema.attribute("recorded_at").unwrap().full_name(), "Event.recorded_at");
    assert!(schema.attribute("missing").is_none());
}

#[test]
fn missing_converter_fails_the_build() {
    let mut builder = Builder::new("Event");
    builder
        .attribute("stream", Type::I32)
        .partition_key()
        .auto(AutoConfig::Key);

    let err = build(&builder).unwrap_err();
    assert!(err.is_converter_not_found());
    assert_eq!(
        err.to_string(),
        "attribute `Event.stream`: no type converter registered from Uuid to I32"
    );
}

#[test]
fn timestamp_into_string_fails_the_build() {
    let mut builder = Builder::new("Event");
    builder.attribute("stream", Type::String).partition_key();
    builder
        .attribute("at", Type::String)
        .auto(AutoConfig::timestamp());

    assert!(build(&builder).unwrap_err().is_converter_not_found());
}

#[test]
fn build_uses_the_given_registry() {
    let mut builder = Builder::new("Event");
    builder
        .attribute("stream", Type::String)
        .partition_key()
        .auto(AutoConfig::Key);

    let err = builder.build_with(&ConverterRegistry::empty()).unwrap_err();
    assert!(err.is_converter_not_found());
}

#[test]
fn duplicate_attribute() {
    let mut builder = Builder::new("Event");
    builder.attribute("stream", Type::String).partition_key();
    builder.attribute("stream", Type::String);

    let err = build(&builder).unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate attribute `stream` in `Event`"
    );
}

#[test]
fn empty_names() {
    let mut builder = Builder::new("");
    builder.attribute("stream", Type::String).partition_key();
    assert!(build(&builder).unwrap_err().is_invalid_schema());

    let mut builder = Builder::new("Event");
    builder.attribute("", Type::String).partition_key();
    assert!(build(&builder).unwrap_err().is_invalid_schema());
}

#[test]
fn partition_key_is_required() {
    let mut builder = Builder::new("Event");
    builder.attribute("seq", Type::U64).sort_key();

    let err = build(&builder).unwrap_err();
    assert_eq!(err.to_string(), "invalid schema: `Event` has no partition key");
}

#[test]
fn one_partition_key_and_at_most_one_sort_key() {
    let mut builder = Builder::new("Event");
    builder.attribute("a", Type::String).partition_key();
    builder.attribute("b", Type::String).partition_key();
    assert_eq!(
        build(&builder).unwrap_err().to_string(),
        "invalid schema: `Event` has 2 partition keys; expected one"
    );

    let mut builder = Builder::new("Event");
    builder.attribute("a", Type::String).partition_key();
    builder.attribute("b", Type::String).sort_key();
    builder.attribute("c", Type::String).sort_key();
    assert_eq!(
        build(&builder).unwrap_err().to_string(),
        "invalid schema: `Event` has 2 sort keys; expected at most one"
    );
}

#[test]
fn primary_key_cannot_be_regenerated_on_every_write() {
    let mut builder = Builder::new("Event");
    builder.attribute("stream", Type::String).partition_key();
    builder
        .attribute("at", Type::I64)
        .sort_key()
        .auto(AutoConfig::Timestamp(GenerateStrategy::Always));

    let err = build(&builder).unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: key attribute `Event.at` cannot use an ALWAYS generator"
    );
}

#[test]
fn primary_key_may_be_stamped_once() {
    let mut builder = Builder::new("Event");
    builder.attribute("stream", Type::String).partition_key();
    builder
        .attribute("at", Type::I64)
        .sort_key()
        .auto(AutoConfig::Timestamp(GenerateStrategy::Create));

    let schema = build(&builder).unwrap();
    assert_eq!(
        schema.sort_key().unwrap().strategy(),
        Some(GenerateStrategy::Create)
    );
}

#[test]
fn index_key_may_be_regenerated_on_every_write() {
    let mut builder = Builder::new("Event");
    builder.attribute("stream", Type::String).partition_key();
    builder
        .attribute("touched_at", Type::I64)
        .index_key()
        .auto(AutoConfig::timestamp());

    let schema = build(&builder).unwrap();
    let attr = schema.attribute("touched_at").unwrap();
    assert!(attr.is_key());
    assert_eq!(attr.strategy(), Some(GenerateStrategy::Always));
}

#[test]
fn later_auto_replaces_earlier() {
    let mut builder = Builder::new("Event");
    builder
        .attribute("stream", Type::String)
        .partition_key()
        .auto(AutoConfig::timestamp())
        .auto(AutoConfig::Key);

    let schema = build(&builder).unwrap();
    assert_eq!(
        schema.partition_key().strategy(),
        Some(GenerateStrategy::Create)
    );
}
