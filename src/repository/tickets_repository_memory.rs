use super::{Error, Ticket, TicketsRepository};
use axum::async_trait;
use bson::DateTime;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use time::OffsetDateTime;
use tokio::sync::Mutex;

///
/// In-memory tickets store used by HTTP tests
///
#[derive(Default)]
pub struct TicketsRepositoryMemory {
    state: Mutex<TicketsRepositoryMemoryState>,
}

#[derive(Default)]
struct TicketsRepositoryMemoryState {
    last_id: i32,
    tickets: BTreeMap<i32, Ticket>,
}

impl TicketsRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same truncation to UTC milliseconds a BSON datetime applies
fn normalize_date(date: OffsetDateTime) -> OffsetDateTime {
    DateTime::from(date).into()
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryMemory {
    async fn find_all(&self) -> Result<Vec<Ticket>, Error> {
        let state = self.state.lock().await;

        Ok(state.tickets.values().cloned().collect())
    }

    async fn find(&self, id: i32) -> Result<Option<Ticket>, Error> {
        let state = self.state.lock().await;

        Ok(state.tickets.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, Error> {
        let state = self.state.lock().await;

        Ok(state.tickets.contains_key(&id))
    }

    async fn insert(
        &self,
        name: Option<String>,
        price: Decimal,
        date: OffsetDateTime,
    ) -> Result<Ticket, Error> {
        let date = normalize_date(date);
        let mut state = self.state.lock().await;

        state.last_id += 1;
        let ticket = Ticket {
            id: state.last_id,
            name,
            price,
            date,
        };
        state.tickets.insert(ticket.id, ticket.clone());

        Ok(ticket)
    }

    async fn replace(
        &self,
        id: i32,
        name: Option<String>,
        price: Decimal,
        date: OffsetDateTime,
    ) -> Result<(), Error> {
        let date = normalize_date(date);
        let mut state = self.state.lock().await;

        let ticket = state
            .tickets
            .get_mut(&id)
            .ok_or(Error::NoDocumentUpdated)?;
        ticket.name = name;
        ticket.price = price;
        ticket.date = date;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        let mut state = self.state.lock().await;

        match state.tickets.remove(&id) {
            Some(_) => Ok(()),
            None => Err(Error::NoDocumentDeleted),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[tokio::test]
    async fn insert_date_truncated_to_utc_millis() {
        let repository = TicketsRepositoryMemory::new();

        let ticket = repository
            .insert(
                None,
                Decimal::from(1),
                datetime!(2024-05-01 12:00:00.123456789 +2),
            )
            .await
            .unwrap();

        let expected = datetime!(2024-05-01 10:00:00.123 UTC);
        assert_eq!(ticket.date, expected);
        assert!(ticket.date.offset().is_utc());
        let found = repository.find(ticket.id).await.unwrap().unwrap();
        assert_eq!(found.date, expected);
    }

    #[tokio::test]
    async fn replace_date_truncated_to_utc_millis() {
        let repository = TicketsRepositoryMemory::new();
        let ticket = repository
            .insert(None, Decimal::from(1), datetime!(2024-05-01 10:00:00 UTC))
            .await
            .unwrap();

        repository
            .replace(
                ticket.id,
                None,
                Decimal::from(1),
                datetime!(2024-06-01 08:30:00.987654 -1),
            )
            .await
            .unwrap();

        let found = repository.find(ticket.id).await.unwrap().unwrap();
        assert_eq!(found.date, datetime!(2024-06-01 09:30:00.987 UTC));
        assert!(found.date.offset().is_utc());
    }
}
