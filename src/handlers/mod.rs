pub mod health;
pub mod persons;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use persons::{get_person, list_persons};
