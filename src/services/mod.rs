pub mod database;
pub mod metrics;
pub mod repository;
pub mod seed;

pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics};
pub use repository::{MongoPersonStore, PersonStore, PersonStream};
