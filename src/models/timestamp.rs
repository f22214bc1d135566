use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{
    error::BoxDynError,
    postgres::{PgTypeInfo, PgValueRef},
    Decode, Postgres, Type, ValueRef,
};

/// A `created_at` value as stored: either a plain `timestamp` or a
/// `timestamptz`. Zoned values keep their offset when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Naive(NaiveDateTime),
    Zoned(DateTime<Utc>),
}

impl Timestamp {
    pub fn to_iso(&self) -> String {
        match self {
            Timestamp::Naive(ts) => ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            Timestamp::Zoned(ts) => ts.format("%Y-%m-%dT%H:%M:%S%.f%:z").to_string(),
        }
    }
}

impl Type<Postgres> for Timestamp {
    fn type_info() -> PgTypeInfo {
        <NaiveDateTime as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <NaiveDateTime as Type<Postgres>>::compatible(ty)
            || <DateTime<Utc> as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for Timestamp {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let zoned = <DateTime<Utc> as Type<Postgres>>::compatible(&value.type_info());

        if zoned {
            Ok(Timestamp::Zoned(<DateTime<Utc> as Decode<Postgres>>::decode(value)?))
        } else {
            Ok(Timestamp::Naive(<NaiveDateTime as Decode<Postgres>>::decode(value)?))
        }
    }
}
