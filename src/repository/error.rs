#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("no document deleted")]
    NoDocumentDeleted,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
