use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

///
/// Full ticket record sent by the client.
/// `id` is ignored on creation and must match the path on update.
///
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub id: i32,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(with = "de_date")]
    pub date: OffsetDateTime,
}

mod de_date {
    //!
    //! Accepts RFC 3339 timestamps and ISO 8601 timestamps
    //! without an offset. The latter are taken as UTC.
    //!

    use serde::{Deserialize, Deserializer};
    use time::{
        format_description::well_known::{Iso8601, Rfc3339},
        OffsetDateTime, PrimitiveDateTime,
    };

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<OffsetDateTime, D::Error> {
        let string = String::deserialize(d)?;
        let date = match OffsetDateTime::parse(&string, &Rfc3339) {
            Ok(date) => date,
            Err(_) => PrimitiveDateTime::parse(&string, &Iso8601::DEFAULT)
                .map_err(|e| serde::de::Error::custom(e))?
                .assume_utc(),
        };

        Ok(date)
    }
}
