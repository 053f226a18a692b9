// One handler module per resource, plus the login/verify pair.
//
// Public reads and the contact form take no credential; every mutation and
// the contact inbox sit behind the bearer middleware, wired in `app.rs`.

pub mod approach;
pub mod auth;
pub mod certifications;
pub mod contact;
pub mod metrics;
pub mod personal_info;
pub mod projects;
pub mod skills;
pub mod testimonials;
pub mod work_experience;
