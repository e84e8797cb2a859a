use serde::{Deserialize, Serialize};

/// A person record. `id` stays `None` until the store persists the record
/// and assigns one; it never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub nome: String,
    pub age: i32,
}

impl Person {
    pub fn new(nome: String, age: i32) -> Self {
        Self {
            id: None,
            nome,
            age,
        }
    }
}
