//! Generic store for singleton-document collections.
//!
//! Skills, approach items, certifications, dashboard metrics, and personal
//! info each live in a collection holding at most one logical document. Reads
//! match the empty filter; writes upsert against it, replacing the payload
//! wholesale. "At most one" is upheld by the store's atomic upsert rather
//! than a uniqueness constraint, so concurrent first writes resolve
//! last-writer-wins on the filter match.

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{stamp_now, StoreError};

/// Database shape of a singleton: the payload plus its replacement stamp.
/// The driver-generated `_id` is never surfaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingletonDoc<T> {
    #[serde(flatten)]
    pub payload: T,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Wire shape of a singleton, timestamps as RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingletonOut<T> {
    #[serde(flatten)]
    pub payload: T,
    pub updated_at: DateTime<Utc>,
}

impl<T> From<SingletonDoc<T>> for SingletonOut<T> {
    fn from(doc: SingletonDoc<T>) -> Self {
        Self {
            payload: doc.payload,
            updated_at: doc.updated_at,
        }
    }
}

pub struct SingletonStore<T>
where
    T: Send + Sync,
{
    collection: Collection<SingletonDoc<T>>,
}

impl<T> SingletonStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + Unpin,
{
    pub fn new(db: &Database, name: &str) -> Self {
        Self {
            collection: db.collection(name),
        }
    }

    /// The one document, or the empty payload when none has been written yet.
    /// Emptiness is valid initial state for these resources, never an error.
    pub async fn fetch(&self) -> Result<SingletonDoc<T>, StoreError>
    where
        T: Default,
    {
        Ok(self.fetch_existing().await?.unwrap_or_else(|| SingletonDoc {
            payload: T::default(),
            updated_at: stamp_now(),
        }))
    }

    /// The one document, if any. Personal info is the one resource whose GET
    /// reports absence instead of defaulting.
    pub async fn fetch_existing(&self) -> Result<Option<SingletonDoc<T>>, StoreError> {
        Ok(self.collection.find_one(doc! {}).await?)
    }

    /// Replace the document wholesale with `payload`, stamping a fresh
    /// `updated_at` and creating the document if absent. Idempotent up to the
    /// advancing timestamp.
    pub async fn replace(&self, payload: T) -> Result<SingletonDoc<T>, StoreError> {
        let doc = SingletonDoc {
            payload,
            updated_at: stamp_now(),
        };
        let update: Document = mongodb::bson::to_document(&doc)?;

        self.collection
            .find_one_and_update(doc! {}, doc! { "$set": update })
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)
    }
}
