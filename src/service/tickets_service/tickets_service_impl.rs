use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn find_tickets(&self) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding tickets");

        let tickets = self.repository.find_all().await?;
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets.into_iter().map(output::Ticket::from).collect();

        Ok(tickets)
    }

    async fn find_ticket(&self, id: i32) -> Result<Option<output::Ticket>, Error> {
        tracing::info!(id, "finding ticket");

        let ticket = self.repository.find(id).await?;
        tracing::info!(found = ticket.is_some(), "finished finding ticket");

        Ok(ticket.map(output::Ticket::from))
    }

    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");
        tracing::trace!(?ticket);

        let input::Ticket {
            name, price, date, ..
        } = ticket;

        let ticket = self.repository.insert(name, price, date).await?;
        tracing::info!(id = ticket.id, "created ticket");

        Ok(ticket.into())
    }

    async fn update_ticket(&self, id: i32, ticket: input::Ticket) -> Result<bool, Error> {
        tracing::info!(id, "updating ticket");
        tracing::trace!(?ticket);

        if id != ticket.id {
            tracing::info!(body_id = ticket.id, "ticket id mismatch");
            return Ok(false);
        }

        let input::Ticket {
            name, price, date, ..
        } = ticket;

        match self.repository.replace(id, name, price, date).await {
            Ok(()) => {
                tracing::info!("updated ticket");
                Ok(true)
            }
            Err(repository::Error::NoDocumentUpdated) => {
                match self.repository.exists(id).await? {
                    true => Err(Error::UpdateConflict),
                    false => {
                        tracing::info!("ticket not exist");
                        Ok(false)
                    }
                }
            }
            Err(err) => Err(Error::Database(err)),
        }
    }

    async fn delete_ticket(&self, id: i32) -> Result<bool, Error> {
        tracing::info!(id, "deleting ticket");

        if self.repository.find(id).await?.is_none() {
            tracing::info!("ticket not exist");
            return Ok(false);
        }

        self.repository.delete(id).await?;
        tracing::info!("deleted ticket");

        Ok(true)
    }
}
