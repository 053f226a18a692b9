//! Seed the database with starter portfolio content.
//!
//! Clears the content collections and writes one example document set, so a
//! fresh deployment has something to render. Pass `--keep` to skip the
//! destructive clear and only add the starter records.

use clap::Parser;
use mongodb::bson::{doc, Document};

use portfolio_api::config;
use portfolio_api::db::AppState;
use portfolio_api::models::{
    ApproachItem, ApproachPayload, Certification, CertificationsPayload, DashboardMetric,
    MetricsPayload, PersonalInfo, ProjectFields, Skill, SkillsPayload, TestimonialFields,
    WorkExperienceFields,
};

#[derive(Parser, Debug)]
#[command(name = "portfolio-seed", about = "Populate MongoDB with starter portfolio content")]
struct Args {
    /// MongoDB connection string (defaults to the configured MONGO_URL)
    #[arg(long)]
    mongo_url: Option<String>,

    /// Database name (defaults to the configured DB_NAME)
    #[arg(long)]
    db_name: Option<String>,

    /// Keep existing documents instead of clearing collections first
    #[arg(long)]
    keep: bool,
}

const COLLECTIONS: &[&str] = &[
    "personal_info",
    "projects",
    "work_experience",
    "testimonials",
    "skills",
    "approach",
    "certifications",
    "dashboard_metrics",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_api=info".into()),
        )
        .init();

    let args = Args::parse();
    let config = config::config();

    let mongo_url = args
        .mongo_url
        .unwrap_or_else(|| config.database.mongo_url.clone());
    let db_name = args.db_name.unwrap_or_else(|| config.database.db_name.clone());

    let state = AppState::connect_with(&mongo_url, &db_name).await?;

    println!("🌱 Seeding database '{}'...", db_name);

    if !args.keep {
        for name in COLLECTIONS {
            state
                .db
                .collection::<Document>(name)
                .delete_many(doc! {})
                .await?;
        }
        println!("✓ Cleared existing content");
    }

    state.personal_info().replace(personal_info()).await?;
    println!("✓ Personal info: 1 document");

    let projects = projects();
    let project_count = projects.len();
    for project in projects {
        state.projects().create(project).await?;
    }
    println!("✓ Projects: {} documents", project_count);

    let experience = work_experience();
    let experience_count = experience.len();
    for entry in experience {
        state.work_experience().create(entry).await?;
    }
    println!("✓ Work experience: {} documents", experience_count);

    let testimonials = testimonials();
    let testimonial_count = testimonials.len();
    for testimonial in testimonials {
        state.testimonials().create(testimonial).await?;
    }
    println!("✓ Testimonials: {} documents", testimonial_count);

    let skills = skills();
    println!("✓ Skills: {} skills", skills.skills.len());
    state.skills().replace(skills).await?;

    let approach = approach();
    println!("✓ Approach: {} items", approach.items.len());
    state.approach().replace(approach).await?;

    let certifications = certifications();
    println!("✓ Certifications: {} entries", certifications.certifications.len());
    state.certifications().replace(certifications).await?;

    let metrics = dashboard_metrics();
    println!("✓ Dashboard metrics: {} entries", metrics.metrics.len());
    state.dashboard_metrics().replace(metrics).await?;

    println!("\n✅ Seeding complete");
    Ok(())
}

fn personal_info() -> PersonalInfo {
    PersonalInfo {
        name: "Alex Carter".to_string(),
        title: "Backend Developer, Distributed Systems Enthusiast".to_string(),
        description: "Building reliable services and developer tools, with a focus on \
                      observability and data-heavy backends."
            .to_string(),
        email: "alex.carter@example.com".to_string(),
        phone: Some("555-0142".to_string()),
        location: Some("Berlin, Germany".to_string()),
        github: Some("https://github.com/alexcarter".to_string()),
        linkedin: Some("https://linkedin.com/in/alexcarter".to_string()),
        twitter: None,
    }
}

fn projects() -> Vec<ProjectFields> {
    vec![
        ProjectFields {
            title: "Telemetry Pipeline".to_string(),
            description: "High-throughput ingestion service turning raw device events into \
                          queryable time series."
                .to_string(),
            technologies: vec![
                "Rust".to_string(),
                "Kafka".to_string(),
                "ClickHouse".to_string(),
            ],
            github: "https://github.com/alexcarter/telemetry-pipeline".to_string(),
            demo: None,
            featured: true,
            metrics: vec![],
        },
        ProjectFields {
            title: "Shelfmark".to_string(),
            description: "Self-hosted reading tracker with full-text search across notes and \
                          highlights."
                .to_string(),
            technologies: vec![
                "Rust".to_string(),
                "Axum".to_string(),
                "MongoDB".to_string(),
            ],
            github: "https://github.com/alexcarter/shelfmark".to_string(),
            demo: Some("https://shelfmark.example.com".to_string()),
            featured: true,
            metrics: vec![],
        },
        ProjectFields {
            title: "CLI Toolbox".to_string(),
            description: "A grab bag of small command-line utilities for log wrangling and \
                          release automation."
                .to_string(),
            technologies: vec!["Rust".to_string(), "Clap".to_string()],
            github: "https://github.com/alexcarter/cli-toolbox".to_string(),
            demo: None,
            featured: false,
            metrics: vec![],
        },
    ]
}

fn work_experience() -> Vec<WorkExperienceFields> {
    vec![
        WorkExperienceFields {
            title: "Backend Engineer".to_string(),
            company: "Northwind Analytics".to_string(),
            period: "2022 - present".to_string(),
            description: "Own the event ingestion tier: schema evolution, backpressure \
                          handling, and the on-call rotation that keeps it honest."
                .to_string(),
            technologies: vec![
                "Rust".to_string(),
                "Kafka".to_string(),
                "Kubernetes".to_string(),
            ],
        },
        WorkExperienceFields {
            title: "Software Developer".to_string(),
            company: "Brightline Studio".to_string(),
            period: "2019 - 2022".to_string(),
            description: "Built client-facing APIs and internal admin tooling for a portfolio \
                          of e-commerce sites."
                .to_string(),
            technologies: vec![
                "Python".to_string(),
                "FastAPI".to_string(),
                "PostgreSQL".to_string(),
            ],
        },
    ]
}

fn testimonials() -> Vec<TestimonialFields> {
    vec![
        TestimonialFields {
            name: "Maya Lindgren".to_string(),
            position: "Engineering Manager".to_string(),
            company: "Northwind Analytics".to_string(),
            content: "Alex takes vague operational pain and turns it into concrete, shippable \
                      fixes. The ingestion tier has never been calmer."
                .to_string(),
            rating: 5,
        },
        TestimonialFields {
            name: "Jonas Weber".to_string(),
            position: "Product Lead".to_string(),
            company: "Brightline Studio".to_string(),
            content: "Rare combination of backend depth and genuine care for the people using \
                      the admin tools."
                .to_string(),
            rating: 5,
        },
        TestimonialFields {
            name: "Priya Raman".to_string(),
            position: "SRE".to_string(),
            company: "Northwind Analytics".to_string(),
            content: "Dashboards, runbooks, sensible alerts. Working an incident with Alex is \
                      as good as it gets."
                .to_string(),
            rating: 4,
        },
    ]
}

fn skills() -> SkillsPayload {
    SkillsPayload {
        skills: vec![
            Skill { name: "Rust".to_string(), level: 90 },
            Skill { name: "Distributed Systems".to_string(), level: 85 },
            Skill { name: "MongoDB".to_string(), level: 80 },
            Skill { name: "Python".to_string(), level: 80 },
            Skill { name: "Kubernetes".to_string(), level: 70 },
            Skill { name: "Observability".to_string(), level: 85 },
        ],
    }
}

fn approach() -> ApproachPayload {
    ApproachPayload {
        items: vec![
            ApproachItem {
                id: "1".to_string(),
                title: "Understand the problem".to_string(),
                description: "Dig into requirements and constraints before reaching for a \
                              solution."
                    .to_string(),
            },
            ApproachItem {
                id: "2".to_string(),
                title: "Design for failure".to_string(),
                description: "Assume the network partitions and the disk fills; decide up \
                              front what happens then."
                    .to_string(),
            },
            ApproachItem {
                id: "3".to_string(),
                title: "Ship incrementally".to_string(),
                description: "Small reversible changes with tests and metrics at every step."
                    .to_string(),
            },
            ApproachItem {
                id: "4".to_string(),
                title: "Leave it observable".to_string(),
                description: "Logs, traces, and docs so the next person can debug at 3am."
                    .to_string(),
            },
        ],
    }
}

fn certifications() -> CertificationsPayload {
    CertificationsPayload {
        certifications: vec![
            Certification {
                title: "Certified Kubernetes Administrator".to_string(),
                issuer: "CNCF".to_string(),
                date: "2023".to_string(),
                credential_id: Some("CKA-2300-417".to_string()),
                url: Some("https://training.linuxfoundation.org/certification/verify".to_string()),
                image: None,
                logo: None,
                color: None,
            },
            Certification {
                title: "MongoDB Associate Developer".to_string(),
                issuer: "MongoDB University".to_string(),
                date: "2022".to_string(),
                credential_id: None,
                url: None,
                image: None,
                logo: None,
                color: None,
            },
        ],
    }
}

fn dashboard_metrics() -> MetricsPayload {
    MetricsPayload {
        metrics: vec![
            DashboardMetric {
                label: "Years of experience".to_string(),
                value: "6+".to_string(),
            },
            DashboardMetric {
                label: "Projects shipped".to_string(),
                value: "24".to_string(),
            },
            DashboardMetric {
                label: "Open-source contributions".to_string(),
                value: "120+".to_string(),
            },
        ],
    }
}
