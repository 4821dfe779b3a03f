use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    async fn find_tickets(&self) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// ### Returns
    /// None when ticket does not exist
    ///
    async fn find_ticket(&self, id: i32) -> Result<Option<output::Ticket>, Error>;

    ///
    /// Saves new ticket, id sent by the client is ignored
    ///
    /// ### Returns
    /// Saved ticket with assigned id
    ///
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error>;

    ///
    /// Replaces all fields of the ticket
    ///
    /// ### Returns
    /// false when
    ///     - id differs from ticket.id
    ///     - ticket does not exist
    ///
    /// ### Errors
    /// - [Error::UpdateConflict] when
    ///     - ticket changed during update but still exists
    ///
    async fn update_ticket(&self, id: i32, ticket: input::Ticket) -> Result<bool, Error>;

    ///
    /// ### Returns
    /// false when ticket does not exist
    ///
    async fn delete_ticket(&self, id: i32) -> Result<bool, Error>;
}
