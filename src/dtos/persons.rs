use crate::models::Person;
use serde::{Deserialize, Serialize};

/// HTTP representation of a person. The stored model serializes its id as
/// `_id` for MongoDB; the wire shape exposes it as `id`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: String,
    pub nome: String,
    pub age: i32,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.unwrap_or_default(),
            nome: person.nome,
            age: person.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_plain_id_field() {
        let person = Person {
            id: Some("abc-123".to_string()),
            nome: "Bruno Rocha".to_string(),
            age: 30,
        };

        let json = serde_json::to_value(PersonResponse::from(person)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "abc-123", "nome": "Bruno Rocha", "age": 30 })
        );
    }
}
