use docbatch_store::{
    BatchWrite, CollectionRef, DocumentStore, MemoryStore, MemoryStoreConfig, StoreError,
    WriteKind, DEFAULT_MAX_BATCH_SIZE,
};
use docbatch_types::{CollectionPath, Document, DocumentId, DocumentPath};
use pretty_assertions::assert_eq;
use serde_json::json;

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().unwrap()
}

fn users(store: &MemoryStore) -> CollectionRef {
    store.collection(CollectionPath::root("users").unwrap())
}

fn id(s: &str) -> DocumentId {
    DocumentId::new(s).unwrap()
}

fn path(s: &str) -> DocumentPath {
    DocumentPath::parse(s).unwrap()
}

// ── References ───────────────────────────────────────────────────

#[test]
fn new_doc_generates_distinct_ids() {
    let store = MemoryStore::new();
    let col = users(&store);
    let a = col.new_doc();
    let b = col.new_doc();
    assert_ne!(a.id(), b.id());
    assert_eq!(a.parent(), col);
}

#[test]
fn doc_ref_display_is_path() {
    let store = MemoryStore::new();
    let r = users(&store).doc(id("u1"));
    assert_eq!(r.to_string(), "users/u1");
    assert_eq!(r.id().as_str(), "u1");
}

#[test]
fn write_constructors() {
    let store = MemoryStore::new();
    let r = users(&store).doc(id("u1"));
    assert_eq!(BatchWrite::create(r.clone(), Document::new()).kind, WriteKind::Create);
    assert_eq!(BatchWrite::update(r.clone(), Document::new()).kind, WriteKind::Update);
    let delete = BatchWrite::delete(r);
    assert_eq!(delete.kind, WriteKind::Delete);
    assert!(delete.data.is_none());
    assert_eq!(WriteKind::Update.to_string(), "update");
}

// ── Batch semantics ──────────────────────────────────────────────

#[tokio::test]
async fn create_then_update_in_one_batch() {
    let store = MemoryStore::new();
    let u1 = users(&store).doc(id("u1"));

    store
        .commit_batch(vec![
            BatchWrite::create(u1.clone(), doc(json!({"name": "Ada", "born": 1815}))),
            BatchWrite::update(u1.clone(), doc(json!({"name": "Ada L."}))),
        ])
        .await
        .unwrap();

    assert_eq!(
        store.get(u1.path()).await.unwrap(),
        doc(json!({"name": "Ada L.", "born": 1815}))
    );
}

#[tokio::test]
async fn create_overwrites_existing() {
    let store = MemoryStore::new();
    store.insert(&path("users/u1"), doc(json!({"a": 1, "b": 2}))).await;
    let u1 = users(&store).doc(id("u1"));

    store
        .commit_batch(vec![BatchWrite::create(u1.clone(), doc(json!({"a": 3})))])
        .await
        .unwrap();

    assert_eq!(store.get(u1.path()).await.unwrap(), doc(json!({"a": 3})));
}

#[tokio::test]
async fn last_write_wins_within_batch() {
    let store = MemoryStore::new();
    let u1 = users(&store).doc(id("u1"));

    store
        .commit_batch(vec![
            BatchWrite::create(u1.clone(), doc(json!({"v": 1}))),
            BatchWrite::delete(u1.clone()),
        ])
        .await
        .unwrap();

    assert!(store.get(u1.path()).await.is_none());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn delete_missing_is_ok() {
    let store = MemoryStore::new();
    let ghost = users(&store).doc(id("ghost"));
    store.commit_batch(vec![BatchWrite::delete(ghost)]).await.unwrap();
}

#[tokio::test]
async fn update_missing_fails_whole_batch() {
    let store = MemoryStore::new();
    let col = users(&store);

    let err = store
        .commit_batch(vec![
            BatchWrite::create(col.doc(id("u1")), doc(json!({"v": 1}))),
            BatchWrite::update(col.doc(id("ghost")), doc(json!({"v": 2}))),
        ])
        .await
        .unwrap_err();

    assert_eq!(err, StoreError::NotFound("users/ghost".into()));
    assert_eq!(store.len().await, 0);
    assert!(store.committed_batches().await.is_empty());
}

#[tokio::test]
async fn oversized_batch_rejected() {
    let store = MemoryStore::with_config(MemoryStoreConfig { max_batch_size: 2 });
    let col = users(&store);
    let writes = (0..3)
        .map(|i| BatchWrite::create(col.new_doc(), doc(json!({"i": i}))))
        .collect();

    let err = store.commit_batch(writes).await.unwrap_err();
    assert_eq!(err, StoreError::BatchTooLarge { size: 3, limit: 2 });
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn injected_failure_is_one_shot() {
    let store = MemoryStore::new();
    let u1 = users(&store).doc(id("u1"));
    store.fail_next(StoreError::Network("connection reset".into())).await;

    let write = BatchWrite::create(u1.clone(), doc(json!({"v": 1})));
    let err = store.commit_batch(vec![write.clone()]).await.unwrap_err();
    assert_eq!(err, StoreError::Network("connection reset".into()));
    assert!(store.get(u1.path()).await.is_none());

    store.commit_batch(vec![write]).await.unwrap();
    assert!(store.get(u1.path()).await.is_some());
    assert_eq!(store.request_count(), 2);
}

#[tokio::test]
async fn history_preserves_order() {
    let store = MemoryStore::new();
    let col = users(&store);
    let writes = vec![
        BatchWrite::create(col.doc(id("a")), Document::new()),
        BatchWrite::create(col.doc(id("b")), Document::new()),
        BatchWrite::delete(col.doc(id("a"))),
    ];
    store.commit_batch(writes.clone()).await.unwrap();

    assert_eq!(store.committed_batches().await, vec![writes]);
}

#[test]
fn default_config() {
    assert_eq!(MemoryStoreConfig::default().max_batch_size, DEFAULT_MAX_BATCH_SIZE);
    let config: MemoryStoreConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(config.max_batch_size, 500);
}
