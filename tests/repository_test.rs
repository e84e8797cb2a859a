mod common;

use common::TestApp;
use futures::TryStreamExt;
use person_service::models::Person;
use uuid::Uuid;

#[tokio::test]
async fn save_assigns_an_id_and_keeps_an_existing_one() {
    let app = TestApp::spawn().await;

    let saved = app
        .store
        .save(Person::new("Bruno Rocha".to_string(), 30))
        .await
        .expect("Failed to save person");
    assert!(saved.id.is_some());

    let mut preset = Person::new("Melina".to_string(), 4);
    preset.id = Some("fixed-id".to_string());
    let saved = app.store.save(preset).await.expect("Failed to save person");
    assert_eq!(Some("fixed-id".to_string()), saved.id);

    app.cleanup().await;
}

#[tokio::test]
async fn find_by_id_roundtrips_a_saved_person() {
    let app = TestApp::spawn().await;

    let saved = app
        .store
        .save(Person::new("Bruno Rocha".to_string(), 30))
        .await
        .expect("Failed to save person");

    let found = app
        .store
        .find_by_id(saved.id.as_deref().expect("save assigns an id"))
        .await
        .expect("Lookup failed")
        .expect("Person not found");

    assert_eq!(saved, found);
    assert_eq!("Bruno Rocha", found.nome);
    assert_eq!(30, found.age);

    app.cleanup().await;
}

#[tokio::test]
async fn find_by_id_with_unknown_id_returns_none() {
    let app = TestApp::spawn().await;

    let found = app
        .store
        .find_by_id(&Uuid::new_v4().to_string())
        .await
        .expect("Lookup failed");

    assert!(found.is_none());

    app.cleanup().await;
}

#[tokio::test]
async fn all_yields_each_saved_person_exactly_once() {
    let app = TestApp::spawn().await;

    let mut ids = Vec::new();
    for (nome, age) in [("Bruno Rocha", 30), ("Marli de Fatima", 56), ("Melina", 4)] {
        let saved = app
            .store
            .save(Person::new(nome.to_string(), age))
            .await
            .expect("Failed to save person");
        ids.push(saved.id.expect("save assigns an id"));
    }

    let mut seen = Vec::new();
    let mut persons = app.store.all().await.expect("Query failed");
    while let Some(person) = persons.try_next().await.expect("Cursor failed") {
        seen.push(person.id.expect("stored person has an id"));
    }

    seen.sort_unstable();
    ids.sort_unstable();
    assert_eq!(ids, seen);

    app.cleanup().await;
}

#[tokio::test]
async fn all_on_empty_collection_yields_nothing() {
    let app = TestApp::spawn().await;

    let mut persons = app.store.all().await.expect("Query failed");
    assert!(persons
        .try_next()
        .await
        .expect("Cursor failed")
        .is_none());

    app.cleanup().await;
}
