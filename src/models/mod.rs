//! Resource payload types.
//!
//! Each collection-of-records resource has a single payload struct holding the
//! client-settable fields; identifiers and timestamps are layered on by the
//! store (`db::records::Stored` / `db::records::RecordOut`). Singleton
//! resources have one payload struct per collection, wrapped by
//! `db::singleton::SingletonDoc`.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::validation::{
    indexed, require_email, require_non_empty, require_range, FieldErrors, Validate,
};

// ---------------------------------------------------------------------------
// Projects

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub metrics: Vec<ProjectMetric>,
}

impl Validate for ProjectFields {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "title", &self.title);
        require_non_empty(&mut errors, "description", &self.description);
        require_non_empty(&mut errors, "github", &self.github);
        for (i, metric) in self.metrics.iter().enumerate() {
            require_non_empty(&mut errors, &indexed("metrics", i, "label"), &metric.label);
            require_non_empty(&mut errors, &indexed("metrics", i, "value"), &metric.value);
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Work experience

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperienceFields {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
}

impl Validate for WorkExperienceFields {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "title", &self.title);
        require_non_empty(&mut errors, "company", &self.company);
        require_non_empty(&mut errors, "period", &self.period);
        require_non_empty(&mut errors, "description", &self.description);
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Testimonials

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialFields {
    pub name: String,
    pub position: String,
    pub company: String,
    pub content: String,
    pub rating: i32,
}

impl Validate for TestimonialFields {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "position", &self.position);
        require_non_empty(&mut errors, "company", &self.company);
        require_non_empty(&mut errors, "content", &self.content);
        require_range(&mut errors, "rating", self.rating as i64, 1, 5);
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Contact messages

/// Public submission shape: `read` is server-assigned and not accepted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "projectType", default)]
    pub project_type: Option<String>,
}

impl ContactMessageCreate {
    pub fn into_fields(self) -> ContactMessageFields {
        ContactMessageFields {
            name: self.name,
            email: self.email,
            message: self.message,
            project_type: self.project_type,
            read: false,
        }
    }
}

impl Validate for ContactMessageCreate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "message", &self.message);
        require_email(&mut errors, "email", &self.email);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageFields {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "projectType", default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub read: bool,
}

// ---------------------------------------------------------------------------
// Skills (singleton)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsPayload {
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Validate for SkillsPayload {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        for (i, skill) in self.skills.iter().enumerate() {
            require_non_empty(&mut errors, &indexed("skills", i, "name"), &skill.name);
            require_range(&mut errors, &indexed("skills", i, "level"), skill.level as i64, 0, 100);
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Approach (singleton)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachItem {
    pub id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApproachPayload {
    #[serde(default)]
    pub items: Vec<ApproachItem>,
}

impl Validate for ApproachPayload {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        for (i, item) in self.items.iter().enumerate() {
            require_non_empty(&mut errors, &indexed("items", i, "id"), &item.id);
            require_non_empty(&mut errors, &indexed("items", i, "title"), &item.title);
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Certifications (singleton)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationsPayload {
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

impl Validate for CertificationsPayload {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        for (i, cert) in self.certifications.iter().enumerate() {
            require_non_empty(&mut errors, &indexed("certifications", i, "title"), &cert.title);
            require_non_empty(&mut errors, &indexed("certifications", i, "issuer"), &cert.issuer);
            require_non_empty(&mut errors, &indexed("certifications", i, "date"), &cert.date);
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Dashboard metrics (singleton)

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsPayload {
    #[serde(default)]
    pub metrics: Vec<DashboardMetric>,
}

impl Validate for MetricsPayload {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        for (i, metric) in self.metrics.iter().enumerate() {
            require_non_empty(&mut errors, &indexed("metrics", i, "label"), &metric.label);
            require_non_empty(&mut errors, &indexed("metrics", i, "value"), &metric.value);
        }
        errors.into_result()
    }
}

// ---------------------------------------------------------------------------
// Personal info (singleton)

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
}

impl Validate for PersonalInfo {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require_non_empty(&mut errors, "name", &self.name);
        require_non_empty(&mut errors, "title", &self.title);
        require_non_empty(&mut errors, "description", &self.description);
        require_email(&mut errors, "email", &self.email);
        errors.into_result()
    }
}
