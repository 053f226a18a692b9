//! Generic repository over a collection-of-records resource.
//!
//! Projects, work experience, testimonials, and contact messages all share the
//! same lifecycle: MongoDB generates the identity, the store stamps
//! `created_at`/`updated_at`, and updates replace the client-settable fields
//! wholesale while preserving `created_at`.

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{stamp_now, StoreError};

/// Database shape of a record: driver-owned `_id` plus timestamps wrapped
/// around the resource's fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: T,
}

/// Wire shape of a record: the identifier coerced to its stable 24-char hex
/// form under `id`, timestamps as RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordOut<T> {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> From<Stored<T>> for RecordOut<T> {
    fn from(stored: Stored<T>) -> Self {
        Self {
            id: stored.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
            fields: stored.fields,
        }
    }
}

/// Parse a path-parameter identifier, short-circuiting before any store
/// round trip when it is not a well-formed ObjectId.
fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

pub struct Repository<T>
where
    T: Send + Sync,
{
    collection: Collection<Stored<T>>,
}

impl<T> Repository<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + Unpin,
{
    pub fn new(db: &Database, name: &str) -> Self {
        Self {
            collection: db.collection(name),
        }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Result<Vec<Stored<T>>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// All records, newest creation first. Contact messages are read this way.
    pub async fn list_newest_first(&self) -> Result<Vec<Stored<T>>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Insert a new record, stamping both timestamps with the same instant.
    pub async fn create(&self, fields: T) -> Result<Stored<T>, StoreError> {
        let now = stamp_now();
        let mut record = Stored {
            id: None,
            created_at: now,
            updated_at: now,
            fields,
        };

        let result = self.collection.insert_one(&record).await?;
        record.id = result.inserted_id.as_object_id();
        Ok(record)
    }

    /// Replace the client-settable fields of the record with `id`, preserving
    /// `created_at` and refreshing `updated_at`. Returns the updated record.
    pub async fn replace(&self, id: &str, fields: T) -> Result<Stored<T>, StoreError> {
        let oid = parse_id(id)?;

        let mut update = mongodb::bson::to_document(&fields)?;
        update.insert("updated_at", mongodb::bson::DateTime::from_chrono(stamp_now()));

        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": update })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Set specific fields of the record with `id` without touching the rest.
    /// Used for the contact message `read` flag.
    pub async fn set_fields(&self, id: &str, fields: Document) -> Result<Stored<T>, StoreError> {
        let oid = parse_id(id)?;

        self.collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Remove exactly the record with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let oid = parse_id(id)?;

        let result = self.collection.delete_one(doc! { "_id": oid }).await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectFields;

    #[test]
    fn malformed_identifiers_short_circuit() {
        for bad in ["nope", "12345", "zzzzzzzzzzzzzzzzzzzzzzzz", ""] {
            assert!(matches!(parse_id(bad), Err(StoreError::InvalidId(_))));
        }

        let hex = ObjectId::new().to_hex();
        assert!(parse_id(&hex).is_ok());
    }

    #[test]
    fn record_out_flattens_fields_and_hexes_id() {
        let oid = ObjectId::new();
        let now = stamp_now();
        let stored = Stored {
            id: Some(oid),
            created_at: now,
            updated_at: now,
            fields: ProjectFields {
                title: "X".to_string(),
                description: "d".to_string(),
                technologies: vec!["Py".to_string()],
                github: "http://g".to_string(),
                demo: None,
                featured: true,
                metrics: vec![],
            },
        };

        let out = serde_json::to_value(RecordOut::from(stored)).unwrap();
        assert_eq!(out["id"], oid.to_hex());
        assert_eq!(out["title"], "X");
        assert_eq!(out["featured"], true);
        assert!(out["created_at"].is_string());
    }
}
