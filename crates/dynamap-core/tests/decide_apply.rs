use dynamap_core::convert::ConverterRegistry;
use dynamap_core::schema::{AutoConfig, Builder, RecordSchema};
use dynamap_core::value::{Type, Value};
use dynamap_core::{apply, should_generate, Generate, GenerateStrategy, Result, WriteKind};

const CREATING: [WriteKind; 2] = [WriteKind::Put, WriteKind::Clobber];
const UPDATING: [WriteKind; 3] = [
    WriteKind::Update,
    WriteKind::UpdateSkipNulls,
    WriteKind::AppendSet,
];

fn schema() -> RecordSchema {
    let mut builder = Builder::new("Order");
    builder
        .attribute("id", Type::String)
        .partition_key()
        .auto(AutoConfig::Key);
    builder.attribute("line", Type::String).sort_key();
    builder.attribute("customer", Type::String).index_key();
    builder
        .attribute("created_at", Type::Timestamp)
        .auto(AutoConfig::Timestamp(GenerateStrategy::Create));
    builder
        .attribute("updated_at", Type::I64)
        .auto(AutoConfig::timestamp());
    builder.attribute("note", Type::String);
    builder.build_with(&ConverterRegistry::standard()).unwrap()
}

#[derive(Debug)]
struct Fixed(Value);

impl Generate for Fixed {
    fn strategy(&self) -> GenerateStrategy {
        GenerateStrategy::Always
    }

    fn generate(&self, _current: &Value) -> Result<Value> {
        Ok(self.0.clone())
    }
}

#[test]
fn create_strategy_keeps_present_value_on_update() {
    let schema = schema();

    for name in ["id", "created_at"] {
        let attr = schema.attribute(name).unwrap();
        let current = attr
            .generator()
            .unwrap()
            .generate(&Value::Null)
            .unwrap();

        for kind in UPDATING {
            assert!(!should_generate(attr, &current, kind).unwrap());
            assert_eq!(apply(attr, current.clone(), kind).unwrap(), current);
        }
    }
}

#[test]
fn create_strategy_generates_when_unset_on_update() {
    let schema = schema();
    let attr = schema.attribute("id").unwrap();

    for kind in UPDATING {
        assert!(kind.is_update() && !kind.is_creation());
        let value = apply(attr, Value::Null, kind).unwrap();
        assert!(value.as_str().is_some());
    }
}

#[test]
fn create_strategy_generates_on_creating_writes() {
    let schema = schema();
    let attr = schema.attribute("id").unwrap();

    for kind in CREATING {
        assert!(should_generate(attr, &Value::Null, kind).unwrap());

        let current = Value::from("caller-supplied");
        assert!(should_generate(attr, &current, kind).unwrap());

        let value = apply(attr, current.clone(), kind).unwrap();
        assert_ne!(value, current);
        assert!(value.is_a(&Type::String));
    }
}

#[test]
fn always_strategy_generates_on_every_write() {
    let schema = schema();
    let attr = schema.attribute("updated_at").unwrap();

    for kind in CREATING.into_iter().chain(UPDATING) {
        for current in [Value::Null, Value::I64(1)] {
            assert!(should_generate(attr, &current, kind).unwrap());
            let value = apply(attr, current.clone(), kind).unwrap();
            assert!(value.as_i64().unwrap() > 1);
        }
    }
}

#[test]
fn unbound_attributes_are_never_generated() {
    let schema = schema();
    let note = schema.attribute("note").unwrap();

    for kind in CREATING.into_iter().chain(UPDATING) {
        assert!(!should_generate(note, &Value::Null, kind).unwrap());
        assert_eq!(apply(note, Value::Null, kind).unwrap(), Value::Null);
        assert_eq!(
            apply(note, Value::from("hi"), kind).unwrap(),
            Value::from("hi")
        );
    }
}

#[test]
fn unbound_key_without_value_on_create_is_missing_key() {
    let schema = schema();

    for name in ["line", "customer"] {
        let attr = schema.attribute(name).unwrap();

        for kind in CREATING {
            let err = should_generate(attr, &Value::Null, kind).unwrap_err();
            assert!(err.is_missing_key());

            let err = apply(attr, Value::Null, kind).unwrap_err();
            assert!(err.is_missing_key());
        }
    }

    let err = apply(schema.attribute("line").unwrap(), Value::Null, WriteKind::Put).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing key: attribute `line` of `Order` has no value and no generator"
    );
}

#[test]
fn unbound_key_with_value_or_on_update_passes_through() {
    let schema = schema();
    let line = schema.attribute("line").unwrap();

    assert_eq!(
        apply(line, Value::from("1"), WriteKind::Put).unwrap(),
        Value::from("1")
    );

    for kind in UPDATING {
        assert_eq!(apply(line, Value::Null, kind).unwrap(), Value::Null);
    }
}

#[test]
fn generator_output_of_wrong_type_is_rejected() {
    let mut builder = Builder::new("Order");
    builder.attribute("id", Type::String).partition_key();
    builder
        .attribute("score", Type::I64)
        .auto(AutoConfig::custom(Fixed(Value::from("not a number"))));
    let schema = builder.build_with(&ConverterRegistry::standard()).unwrap();

    let err = apply(schema.attribute("score").unwrap(), Value::Null, WriteKind::Put).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "generated value for `Order.score`: cannot convert String to I64"
    );
}

#[test]
fn custom_generator_is_used() {
    let mut builder = Builder::new("Order");
    builder.attribute("id", Type::String).partition_key();
    builder
        .attribute("score", Type::I64)
        .auto(AutoConfig::custom(Fixed(Value::I64(7))));
    let schema = builder.build_with(&ConverterRegistry::standard()).unwrap();
    let score = schema.attribute("score").unwrap();

    assert_eq!(score.strategy(), Some(GenerateStrategy::Always));
    assert_eq!(
        apply(score, Value::I64(3), WriteKind::Update).unwrap(),
        Value::I64(7)
    );
}
