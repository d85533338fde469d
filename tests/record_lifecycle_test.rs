//! Record lifecycle tests
//!
//! Exercises a record type composing every lifecycle mixin (timestamps,
//! soft deletion, a generic link) the way an application would wire one
//! up by hand: embedded columns, hand-written metadata and executor impls,
//! and the persist hook routed through `touch()`.

use std::collections::HashMap;
use std::sync::Arc;

use groundwork::prelude::*;
use record_store::generic_store::bulk_flag_sql;
use serde_json::json;

/// An uploaded photo: timestamped and soft-deletable
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    pub id: i64,
    pub caption: String,
    pub path: String,
    pub added: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub is_deleted: bool,
}

impl Photo {
    pub fn new(id: i64, caption: String, path: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            caption,
            path,
            added: now,
            updated: now,
            is_deleted: false,
        }
    }
}

impl Timestamped for Photo {
    fn added(&self) -> DateTime<Utc> {
        self.added
    }

    fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    fn set_updated(&mut self, at: DateTime<Utc>) {
        self.updated = at;
    }
}

impl SoftDelete for Photo {
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn set_deleted(&mut self, deleted: bool) {
        self.is_deleted = deleted;
    }
}

impl RecordMetadata for Photo {
    type Id = i64;

    fn table_name() -> &'static str {
        "photos"
    }

    fn create_sql() -> &'static str {
        "INSERT INTO photos (id, caption, path, added, updated, is_deleted) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *"
    }

    fn update_sql() -> &'static str {
        "UPDATE photos SET caption = $2, path = $3, updated = $4, is_deleted = $5 \
         WHERE id = $1 RETURNING *"
    }

    fn list_all_sql() -> &'static str {
        "SELECT * FROM photos ORDER BY id"
    }

    fn delete_by_id_sql() -> &'static str {
        "DELETE FROM photos WHERE id = $1"
    }

    fn get_by_id_sql() -> &'static str {
        "SELECT * FROM photos WHERE id = $1"
    }

    fn count_all_sql() -> &'static str {
        "SELECT COUNT(*) as total FROM photos"
    }

    fn select_base_sql() -> &'static str {
        "SELECT * FROM photos"
    }

    fn count_base_sql() -> &'static str {
        "SELECT COUNT(*) as total FROM photos"
    }

    fn supports_soft_delete() -> bool {
        true
    }

    fn soft_delete_field() -> Option<&'static str> {
        Some("is_deleted")
    }

    fn extract_id(&self) -> Self::Id {
        self.id
    }

    fn primary_key_field() -> &'static str {
        "id"
    }

    fn create_table_sql() -> String {
        "CREATE TABLE IF NOT EXISTS photos (
            id BIGINT PRIMARY KEY,
            caption TEXT NOT NULL,
            path TEXT NOT NULL,
            added TIMESTAMPTZ NOT NULL,
            updated TIMESTAMPTZ NOT NULL,
            is_deleted BOOLEAN NOT NULL DEFAULT false
        )"
        .to_string()
    }

    fn create_indexes_sql() -> Vec<String> {
        vec![
            "CREATE INDEX IF NOT EXISTS idx_photos_added ON photos (added)".to_string(),
            "CREATE INDEX IF NOT EXISTS idx_photos_is_deleted ON photos (is_deleted)".to_string(),
        ]
    }

    fn before_save(&mut self) {
        self.touch();
    }
}

#[async_trait]
impl RecordExecutor for Photo {
    async fn execute_create(&self, pool: &PgPool) -> Result<Self, RecordStoreError> {
        sqlx::query_as::<_, Self>(Self::create_sql())
            .bind(self.id)
            .bind(&self.caption)
            .bind(&self.path)
            .bind(self.added)
            .bind(self.updated)
            .bind(self.is_deleted)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                RecordStoreError::query_execution(Self::table_name(), Self::create_sql(), e)
            })
    }

    async fn execute_update(&self, pool: &PgPool) -> Result<Self, RecordStoreError> {
        sqlx::query_as::<_, Self>(Self::update_sql())
            .bind(self.id)
            .bind(&self.caption)
            .bind(&self.path)
            .bind(self.updated)
            .bind(self.is_deleted)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                RecordStoreError::query_execution(Self::table_name(), Self::update_sql(), e)
            })
    }
}

/// A moderation note attached to any linkable record via a generic link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub body: String,
    pub content_type: String,
    pub object_id: i64,
}

impl Linked for Note {
    fn content_ref(&self) -> ContentRef {
        ContentRef::new(self.content_type.clone(), self.object_id)
    }
}

/// In-memory resolver standing in for a store-backed one
struct MapResolver {
    records: HashMap<i64, serde_json::Value>,
}

#[async_trait]
impl ContentResolver for MapResolver {
    async fn resolve(
        &self,
        object_id: i64,
    ) -> Result<Option<serde_json::Value>, RecordStoreError> {
        Ok(self.records.get(&object_id).cloned())
    }
}

fn photo_registry() -> ContentTypeRegistry {
    let photo = Photo::new(1, "sunrise".to_string(), "photos/1.jpg".to_string());
    let mut records = HashMap::new();
    records.insert(1, serde_json::to_value(&photo).unwrap());

    let mut registry = ContentTypeRegistry::new();
    registry
        .register("photo", Arc::new(MapResolver { records }))
        .unwrap();
    registry
}

#[test]
fn new_record_has_matching_timestamps() {
    let photo = Photo::new(1, "sunrise".to_string(), "photos/1.jpg".to_string());
    assert_eq!(photo.added(), photo.updated());
    assert!(!photo.is_deleted());
}

#[test]
fn persist_hook_refreshes_updated_only() {
    let mut photo = Photo::new(1, "sunrise".to_string(), "photos/1.jpg".to_string());
    let added_before = photo.added();
    let updated_before = photo.updated();

    std::thread::sleep(std::time::Duration::from_millis(2));
    // The store runs exactly this hook before every single-record persist
    photo.before_save();

    assert_eq!(photo.added(), added_before);
    assert!(photo.updated() > updated_before);
    assert!(photo.updated() >= photo.added());
}

#[test]
fn repeated_persists_keep_updated_monotonic() {
    let mut photo = Photo::new(1, "sunrise".to_string(), "photos/1.jpg".to_string());
    let mut last = photo.updated();

    for _ in 0..3 {
        std::thread::sleep(std::time::Duration::from_millis(2));
        photo.before_save();
        assert!(photo.updated() > last);
        last = photo.updated();
    }
}

#[test]
fn flagging_is_reversible_at_the_model_layer() {
    let mut photo = Photo::new(1, "sunrise".to_string(), "photos/1.jpg".to_string());

    photo.set_deleted(true);
    assert!(photo.is_deleted());

    photo.set_deleted(false);
    assert!(!photo.is_deleted());
}

#[test]
fn soft_delete_metadata_is_wired() {
    assert!(Photo::supports_soft_delete());
    assert_eq!(Photo::soft_delete_field(), Some("is_deleted"));
    assert_eq!(Photo::primary_key_field(), "id");
    assert_eq!(Photo::extract_id(&Photo::new(7, String::new(), String::new())), 7);
}

#[test]
fn bulk_soft_delete_sql_bypasses_hook_columns() {
    let query = QueryBuilder::new().filter(QueryFilter::eq("caption", json!("sunrise")));
    let (where_clause, params) = query.build_where_clause();

    let sql = bulk_flag_sql(
        Photo::table_name(),
        Photo::soft_delete_field().unwrap(),
        &where_clause,
    );

    assert_eq!(
        sql,
        "UPDATE photos SET is_deleted = true WHERE caption = $1"
    );
    assert_eq!(params, vec![json!("sunrise")]);
    // One statement, no per-record hooks: the timestamp column stays out
    assert!(!sql.contains("updated"));
}

#[test]
fn active_and_deleted_filters_target_the_flag_column() {
    let (where_clause, params) = QueryBuilder::new()
        .filter(QueryFilter::active("is_deleted"))
        .build_where_clause();
    assert_eq!(where_clause, " WHERE is_deleted = $1");
    assert_eq!(params, vec![json!(false)]);

    let (where_clause, params) = QueryBuilder::new()
        .filter(QueryFilter::deleted("is_deleted"))
        .build_where_clause();
    assert_eq!(where_clause, " WHERE is_deleted = $1");
    assert_eq!(params, vec![json!(true)]);
}

#[test]
fn ddl_covers_every_mixin_column() {
    let ddl = Photo::create_table_sql();
    assert!(ddl.contains("added TIMESTAMPTZ NOT NULL"));
    assert!(ddl.contains("updated TIMESTAMPTZ NOT NULL"));
    assert!(ddl.contains("is_deleted BOOLEAN NOT NULL DEFAULT false"));
    assert_eq!(Photo::drop_table_sql(), "DROP TABLE IF EXISTS photos");
    assert_eq!(Photo::create_indexes_sql().len(), 2);
}

#[tokio::test]
async fn generic_link_resolves_to_the_referenced_record() {
    let registry = photo_registry();
    let note = Note {
        id: 10,
        body: "needs rotation".to_string(),
        content_type: "photo".to_string(),
        object_id: 1,
    };

    let value = registry.resolve(&note.content_ref()).await.unwrap();
    assert_eq!(value["path"], "photos/1.jpg");
    assert_eq!(value["caption"], "sunrise");
}

#[tokio::test]
async fn dangling_generic_link_reports_not_found() {
    let registry = photo_registry();

    // Referenced record no longer exists; the link dangles
    let dangling = ContentRef::new("photo", 42);
    let err = registry.resolve(&dangling).await.unwrap_err();
    assert!(err.is_not_found());

    // Unregistered record type
    let unknown = ContentRef::new("video", 1);
    let err = registry.resolve(&unknown).await.unwrap_err();
    assert!(err.is_not_found());
}
