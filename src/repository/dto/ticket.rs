use crate::repository::entity::TicketFindEntity;
use rust_decimal::Decimal;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub name: Option<String>,
    pub price: Decimal,
    pub date: OffsetDateTime,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            price: value.price,
            date: value.date.into(),
        }
    }
}
