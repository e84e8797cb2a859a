//! Startup seeding. Inserts a few sample persons and logs the resulting
//! collection. Runs once from `main` before the server starts serving; ids
//! are freshly assigned on every run, so restarts add new records.

use crate::error::AppError;
use crate::models::Person;
use crate::services::PersonStore;
use futures::TryStreamExt;
use rand::Rng;

const SEED_NAMES: [&str; 3] = ["Bruno Rocha", "Marli de Fatima", "Melina"];

pub async fn run(store: &dyn PersonStore) -> Result<(), AppError> {
    for nome in SEED_NAMES {
        let age = rand::thread_rng().gen_range(0..100);
        let person = store.save(Person::new(nome.to_string(), age)).await?;
        tracing::info!(
            id = person.id.as_deref().unwrap_or("-"),
            nome = %person.nome,
            age = person.age,
            "Seeded person"
        );
    }

    let mut persons = store.all().await?;
    while let Some(person) = persons.try_next().await? {
        tracing::info!(
            id = person.id.as_deref().unwrap_or("-"),
            nome = %person.nome,
            age = person.age,
            "Person in collection"
        );
    }

    Ok(())
}
