pub mod records;
pub mod singleton;

use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::AppConfig;
use crate::models::{
    ApproachPayload, CertificationsPayload, ContactMessageFields, MetricsPayload, PersonalInfo,
    ProjectFields, SkillsPayload, TestimonialFields, WorkExperienceFields,
};
use records::Repository;
use singleton::SingletonStore;

/// Errors surfaced by the store layer; mapped onto the API taxonomy via
/// `StoreError::into_api`, never returned to clients raw.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed identifier: {0}")]
    InvalidId(String),
    #[error("document not found")]
    NotFound,
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    #[error("BSON encoding failed: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
}

/// Shared handle to the MongoDB database, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    /// Connect using the configured URL and database name. The driver
    /// establishes connections lazily, on first operation.
    pub async fn connect(config: &AppConfig) -> Result<Self, mongodb::error::Error> {
        Self::connect_with(&config.database.mongo_url, &config.database.db_name).await
    }

    pub async fn connect_with(
        mongo_url: &str,
        db_name: &str,
    ) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(mongo_url).await?;
        Ok(Self {
            db: client.database(db_name),
        })
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await.map(|_| ())
    }

    pub fn projects(&self) -> Repository<ProjectFields> {
        Repository::new(&self.db, "projects")
    }

    pub fn work_experience(&self) -> Repository<WorkExperienceFields> {
        Repository::new(&self.db, "work_experience")
    }

    pub fn testimonials(&self) -> Repository<TestimonialFields> {
        Repository::new(&self.db, "testimonials")
    }

    pub fn contact_messages(&self) -> Repository<ContactMessageFields> {
        Repository::new(&self.db, "contact_messages")
    }

    pub fn personal_info(&self) -> SingletonStore<PersonalInfo> {
        SingletonStore::new(&self.db, "personal_info")
    }

    pub fn skills(&self) -> SingletonStore<SkillsPayload> {
        SingletonStore::new(&self.db, "skills")
    }

    pub fn approach(&self) -> SingletonStore<ApproachPayload> {
        SingletonStore::new(&self.db, "approach")
    }

    pub fn certifications(&self) -> SingletonStore<CertificationsPayload> {
        SingletonStore::new(&self.db, "certifications")
    }

    pub fn dashboard_metrics(&self) -> SingletonStore<MetricsPayload> {
        SingletonStore::new(&self.db, "dashboard_metrics")
    }
}

/// Mongo datetimes carry millisecond precision; stamp at the same resolution
/// so a freshly written record serializes identically to a later read.
pub(crate) fn stamp_now() -> DateTime<Utc> {
    let millis = Utc::now().timestamp_millis();
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}
