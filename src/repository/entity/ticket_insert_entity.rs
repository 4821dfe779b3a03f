use bson::DateTime;
use rust_decimal::Decimal;
use serde::Serialize;

///
/// Used both for inserts and full-row replaces,
/// price is stored as a string to keep it exact.
///
#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub _id: i32,

    pub name: Option<&'a str>,

    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    pub date: DateTime,
}
