use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::ErrorKind,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Collection,
};

use crate::store::{
    CollectionName, DeleteOutcome, DocumentStore, InsertOutcome, StoreError, StoreResult,
    UpdateOutcome,
};

/// MongoDB-backed [`DocumentStore`]. Cloning shares the driver's pool.
#[derive(Clone, Debug)]
pub struct Database {
    client: Client,
    db: mongodb::Database,
}

impl Database {
    /// Builds a client pinned to Stable API v1. The driver connects lazily,
    /// so reachability is only known after [`DocumentStore::ping`].
    pub async fn connect(uri: &str, db_name: &str) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let db = client.database(db_name);

        Ok(Database { client, db })
    }

    fn collection(&self, name: CollectionName) -> Collection<Document> {
        self.db.collection(name.as_str())
    }
}

#[async_trait]
impl DocumentStore for Database {
    async fn insert_one(
        &self,
        collection: CollectionName,
        document: Document,
    ) -> StoreResult<InsertOutcome> {
        let result = self.collection(collection).insert_one(document).await?;

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: result.inserted_id,
        })
    }

    async fn find_all(&self, collection: CollectionName) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection).find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn update_one(
        &self,
        collection: CollectionName,
        filter: Document,
        fields: Document,
        upsert: bool,
    ) -> StoreResult<UpdateOutcome> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": fields })
            .upsert(upsert)
            .await?;

        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_count: u64::from(result.upserted_id.is_some()),
            upserted_id: result.upserted_id,
        })
    }

    async fn delete_one(
        &self,
        collection: CollectionName,
        filter: Document,
    ) -> StoreResult<DeleteOutcome> {
        let result = self.collection(collection).delete_one(filter).await?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn ping(&self) -> StoreResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        match *err.kind {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. } => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Operation(err.to_string()),
        }
    }
}
