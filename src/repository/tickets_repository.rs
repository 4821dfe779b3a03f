use super::{dto::Ticket, error::Error};
use axum::async_trait;
use rust_decimal::Decimal;
use time::OffsetDateTime;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Finds every ticket, order is not specified
    ///
    async fn find_all(&self) -> Result<Vec<Ticket>, Error>;

    async fn find(&self, id: i32) -> Result<Option<Ticket>, Error>;

    async fn exists(&self, id: i32) -> Result<bool, Error>;

    ///
    /// Inserts new ticket with the next free id.
    ///
    /// ### Returns
    /// Inserted ticket
    ///
    async fn insert(
        &self,
        name: Option<String>,
        price: Decimal,
        date: OffsetDateTime,
    ) -> Result<Ticket, Error>;

    ///
    /// Replaces every field of the ticket
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - ticket does not exist (anymore)
    ///
    async fn replace(
        &self,
        id: i32,
        name: Option<String>,
        price: Decimal,
        date: OffsetDateTime,
    ) -> Result<(), Error>;

    ///
    /// ### Errors
    /// - [Error::NoDocumentDeleted] when
    ///     - ticket does not exist (anymore)
    ///
    async fn delete(&self, id: i32) -> Result<(), Error>;
}
