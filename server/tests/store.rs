//! Contract tests shared by every `ItemStore` implementation.

use std::sync::Arc;

use rstest::rstest;
use todo_server::{seed_if_empty, ItemStore, MemoryStore, NewItem, SqliteStore, TodoItem};

#[derive(Debug, Clone, Copy)]
enum Backend {
    Memory,
    Sqlite,
}

fn open(backend: Backend) -> Arc<dyn ItemStore> {
    match backend {
        Backend::Memory => Arc::new(MemoryStore::new()),
        Backend::Sqlite => Arc::new(SqliteStore::open_in_memory().unwrap()),
    }
}

#[rstest]
#[tokio::test]
async fn add_assigns_fresh_ids(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
    let store = open(backend);
    let a = store.add(NewItem::named("a")).await.unwrap();
    let b = store.add(NewItem::named("b")).await.unwrap();

    assert_ne!(a.id, b.id);
    assert!(!a.is_complete);
    assert_eq!(store.list().await.unwrap(), vec![a, b]);
}

#[rstest]
#[tokio::test]
async fn find_by_id_round_trips(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
    let store = open(backend);
    let added = store
        .add(NewItem {
            name: "done".to_string(),
            is_complete: true,
        })
        .await
        .unwrap();

    assert_eq!(store.find_by_id(added.id).await.unwrap(), Some(added.clone()));
    assert_eq!(store.find_by_id(added.id + 1).await.unwrap(), None);
}

#[rstest]
#[tokio::test]
async fn update_overwrites_mutable_fields(
    #[values(Backend::Memory, Backend::Sqlite)] backend: Backend,
) {
    let store = open(backend);
    let added = store.add(NewItem::named("before")).await.unwrap();
    let changed = TodoItem {
        id: added.id,
        name: "after".to_string(),
        is_complete: true,
    };
    store.update(&changed).await.unwrap();

    assert_eq!(store.find_by_id(added.id).await.unwrap(), Some(changed));
}

#[rstest]
#[tokio::test]
async fn remove_then_add_never_reuses_id(
    #[values(Backend::Memory, Backend::Sqlite)] backend: Backend,
) {
    let store = open(backend);
    let first = store.add(NewItem::named("first")).await.unwrap();
    let second = store.add(NewItem::named("second")).await.unwrap();
    store.remove(&second).await.unwrap();

    let third = store.add(NewItem::named("third")).await.unwrap();
    assert!(third.id > second.id);
    assert_eq!(store.count().await.unwrap(), 2);
    assert_eq!(store.list().await.unwrap(), vec![first, third]);
}

#[rstest]
#[tokio::test]
async fn count_tracks_adds_and_removes(
    #[values(Backend::Memory, Backend::Sqlite)] backend: Backend,
) {
    let store = open(backend);
    let mut added = Vec::new();
    for n in 0..4 {
        added.push(store.add(NewItem::named(format!("item {n}"))).await.unwrap());
    }
    store.remove(&added[0]).await.unwrap();
    store.remove(&added[2]).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 2);
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[rstest]
#[tokio::test]
async fn seed_runs_once(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
    let store = open(backend);
    assert!(seed_if_empty(store.as_ref()).await.unwrap());
    assert!(!seed_if_empty(store.as_ref()).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");

    let added = {
        let store = SqliteStore::open(&path).unwrap();
        store.add(NewItem::named("durable")).await.unwrap()
    };

    let reopened = SqliteStore::open(&path).unwrap();
    assert_eq!(reopened.find_by_id(added.id).await.unwrap(), Some(added));
    assert!(!seed_if_empty(&reopened).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn remove_and_update_report_missing_rows(
    #[values(Backend::Memory, Backend::Sqlite)] backend: Backend,
) {
    let store = open(backend);
    let added = store.add(NewItem::named("once")).await.unwrap();

    assert!(store.remove(&added).await.unwrap());
    assert!(!store.remove(&added).await.unwrap());
    assert!(!store.update(&added).await.unwrap());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[rstest]
#[tokio::test]
async fn update_reports_existing_row(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
    let store = open(backend);
    let added = store.add(NewItem::named("here")).await.unwrap();
    assert!(store.update(&added).await.unwrap());
}
