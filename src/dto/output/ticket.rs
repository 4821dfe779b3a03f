use crate::repository;
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    pub id: i32,
    pub name: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            date: value.date,
        }
    }
}
