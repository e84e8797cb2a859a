pub mod persons;

pub use persons::PersonResponse;
