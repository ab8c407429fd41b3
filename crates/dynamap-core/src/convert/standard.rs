use super::{ConverterRegistry, RawType, RawValue};
use crate::value::{Type, Value};
use crate::{Error, Result};
use jiff::tz::TimeZone;

pub(super) fn register(registry: &mut ConverterRegistry) {
    registry
        .register(RawType::Uuid, Type::String, uuid_to_string)
        .register(RawType::Uuid, Type::Uuid, uuid_to_uuid)
        .register(RawType::Uuid, Type::Bytes, uuid_to_bytes)
        .register(RawType::Timestamp, Type::Timestamp, timestamp_to_timestamp)
        .register(RawType::Timestamp, Type::Zoned, timestamp_to_zoned)
        .register(RawType::Timestamp, Type::I64, timestamp_to_epoch_millis)
        .register(RawType::EpochMillis, Type::I64, epoch_millis_to_i64)
        .register(RawType::EpochMillis, Type::U64, epoch_millis_to_u64)
        .register(RawType::EpochMillis, Type::Timestamp, epoch_millis_to_timestamp);
}

fn uuid_to_string(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::Uuid(id) => Ok(Value::String(id.hyphenated().to_string())),
        raw => Err(Error::type_conversion(raw.into_value(), "String")),
    }
}

fn uuid_to_uuid(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::Uuid(id) => Ok(Value::Uuid(id)),
        raw => Err(Error::type_conversion(raw.into_value(), "Uuid")),
    }
}

fn uuid_to_bytes(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::Uuid(id) => Ok(Value::Bytes(id.as_bytes().to_vec())),
        raw => Err(Error::type_conversion(raw.into_value(), "Bytes")),
    }
}

fn timestamp_to_timestamp(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::Timestamp(ts) => Ok(Value::Timestamp(ts)),
        raw => Err(Error::type_conversion(raw.into_value(), "Timestamp")),
    }
}

fn timestamp_to_zoned(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::Timestamp(ts) => Ok(Value::Zoned(ts.to_zoned(TimeZone::UTC))),
        raw => Err(Error::type_conversion(raw.into_value(), "Zoned")),
    }
}

fn timestamp_to_epoch_millis(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::Timestamp(ts) => Ok(Value::I64(ts.as_millisecond())),
        raw => Err(Error::type_conversion(raw.into_value(), "I64")),
    }
}

fn epoch_millis_to_i64(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::EpochMillis(ms) => Ok(Value::I64(ms)),
        raw => Err(Error::type_conversion(raw.into_value(), "I64")),
    }
}

fn epoch_millis_to_u64(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::EpochMillis(ms) => u64::try_from(ms)
            .map(Value::U64)
            .map_err(|_| Error::type_conversion(Value::I64(ms), "U64")),
        raw => Err(Error::type_conversion(raw.into_value(), "U64")),
    }
}

fn epoch_millis_to_timestamp(raw: RawValue) -> Result<Value> {
    match raw {
        RawValue::EpochMillis(ms) => jiff::Timestamp::from_millisecond(ms)
            .map(Value::Timestamp)
            .map_err(|_| Error::type_conversion(Value::I64(ms), "Timestamp")),
        raw => Err(Error::type_conversion(raw.into_value(), "Timestamp")),
    }
}
