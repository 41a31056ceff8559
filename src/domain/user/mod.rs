//! User domain - Student accounts and their editable profile.

mod profile_update;
mod user;

pub use profile_update::ProfileUpdate;
pub use user::{normalize_email, DashboardCache, Registration, User};
