use crate::error::AppError;
use crate::models::Person;
use crate::services::MongoDb;
use async_trait::async_trait;
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use mongodb::bson::doc;
use mongodb::Collection;
use uuid::Uuid;

/// Finite stream over the person collection, consumed once. Dropping it
/// cancels the underlying cursor.
pub type PersonStream = BoxStream<'static, Result<Person, AppError>>;

/// Persistence contract for the person collection, independent of the
/// storage engine.
///
/// Lookup by id resolves to at most one record; a missing record is
/// `Ok(None)`, never an error. Enumeration is a lazy stream so callers can
/// forward records without collecting them first.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Persist a person, assigning an id if it does not carry one yet.
    async fn save(&self, person: Person) -> Result<Person, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>, AppError>;

    /// Enumerate every record, in whatever order the engine yields them.
    async fn all(&self) -> Result<PersonStream, AppError>;
}

#[derive(Clone)]
pub struct MongoPersonStore {
    collection: Collection<Person>,
}

impl MongoPersonStore {
    pub fn new(db: &MongoDb) -> Self {
        Self {
            collection: db.persons(),
        }
    }
}

#[async_trait]
impl PersonStore for MongoPersonStore {
    async fn save(&self, mut person: Person) -> Result<Person, AppError> {
        if person.id.is_none() {
            person.id = Some(Uuid::new_v4().to_string());
        }
        self.collection.insert_one(&person, None).await?;
        Ok(person)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Person>, AppError> {
        let person = self.collection.find_one(doc! { "_id": id }, None).await?;
        Ok(person)
    }

    async fn all(&self) -> Result<PersonStream, AppError> {
        let cursor = self.collection.find(doc! {}, None).await?;
        Ok(cursor.map_err(AppError::from).boxed())
    }
}
