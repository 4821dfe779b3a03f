use super::{
    entity::{CounterFindEntity, TicketFindEntity, TicketInsertEntity},
    Error, Ticket, TicketsRepository,
};
use axum::async_trait;
use bson::{doc, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::ErrorKind,
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Database,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use time::OffsetDateTime;

const TICKETS: &str = "tickets";
const COUNTERS: &str = "counters";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        tracing::debug!("fetching collection names");
        let collection_names = database.list_collection_names().await?;

        if !collection_names.iter().any(|name| name == TICKETS) {
            tracing::debug!(collection = TICKETS, "creating collection");
            database.create_collection(TICKETS).await?;
        }

        Ok(Self { database })
    }

    ///
    /// Atomically increments tickets counter.
    /// Counter document is created on first use, so the first id is 1.
    ///
    async fn next_id(&self) -> Result<i32, Error> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .database
            .collection::<CounterFindEntity>(COUNTERS)
            .find_one_and_update(
                doc! {
                    "_id": TICKETS,
                },
                doc! {
                    "$inc": {
                        "seq": 1,
                    }
                },
            )
            .with_options(options)
            .await?;

        match counter {
            Some(counter) => Ok(counter.seq),
            None => {
                tracing::error!(collection = COUNTERS, "upsert returned no document");
                Err(Error::Mongo(
                    ErrorKind::Custom(Arc::new("counter document not returned")).into(),
                ))
            }
        }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Ticket>, Error> {
        let tickets = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find(doc! {})
            .await?
            .map_ok(Ticket::from)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(tickets)
    }

    async fn find(&self, id: i32) -> Result<Option<Ticket>, Error> {
        let ticket = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn exists(&self, id: i32) -> Result<bool, Error> {
        let count = self
            .database
            .collection::<Document>(TICKETS)
            .count_documents(doc! {
                "_id": id,
            })
            .await?;

        Ok(count > 0)
    }

    async fn insert(
        &self,
        name: Option<String>,
        price: Decimal,
        date: OffsetDateTime,
    ) -> Result<Ticket, Error> {
        let id = self.next_id().await?;
        let date = DateTime::from(date);

        let insert_entity = TicketInsertEntity {
            _id: id,
            name: name.as_deref(),
            price,
            date,
        };

        self.database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await?;

        // returned date has the precision it was stored with
        Ok(Ticket {
            id,
            name,
            price,
            date: date.into(),
        })
    }

    async fn replace(
        &self,
        id: i32,
        name: Option<String>,
        price: Decimal,
        date: OffsetDateTime,
    ) -> Result<(), Error> {
        let replacement = TicketInsertEntity {
            _id: id,
            name: name.as_deref(),
            price,
            date: date.into(),
        };

        let update_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .replace_one(
                doc! {
                    "_id": id,
                },
                &replacement,
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(TICKETS)
            .delete_one(doc! {
                "_id": id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentDeleted),
        }
    }
}
