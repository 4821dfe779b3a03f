use bson::DateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: i32,

    pub name: Option<String>,

    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,

    pub date: DateTime,
}
