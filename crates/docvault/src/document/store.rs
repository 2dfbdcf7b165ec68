use crate::config::paths::Paths;
use crate::document::{require_version, DocumentDraft, DocumentRecord, DocumentStatus};
use crate::error::StoreError;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const CURRENT_SCHEMA_VERSION: i32 = 1;
pub const VAULT_FOLDER: &str = "vault";
pub const DB_NAME: &str = "documents.db";

/// Creates the vault data directory if it does not exist yet.
pub fn ensure_vault_dir() -> Result<PathBuf, StoreError> {
    let vault_dir = Paths::data_dir().join(VAULT_FOLDER);

    if !vault_dir.exists() {
        fs::create_dir_all(&vault_dir)?;
    }

    Ok(vault_dir)
}

/// Durable keeper of document records.
///
/// Construct one at process start and pass it to every caller that needs
/// it; there is no ambient global. Each statement checks a connection out
/// of the pool and releases it on every exit path, and every operation is
/// a single-row, single-commit effect.
pub struct DocumentStore {
    pool: Pool<Sqlite>,
}

impl DocumentStore {
    /// Opens the store at the platform data directory, creating the
    /// directory and database on first use.
    pub async fn open_default() -> Result<Self, StoreError> {
        let vault_dir = ensure_vault_dir()?;
        Self::open(&vault_dir.join(DB_NAME)).await
    }

    /// Opens (or creates) the database at `db_path` and ensures the
    /// schema exists. Idempotent: repeated opens neither fail nor alter
    /// an existing schema.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        let pool = Self::get_pool(db_path).await?;
        let store = Self { pool };
        store.initialize_schema().await?;
        Ok(store)
    }

    async fn get_pool(db_path: &Path) -> Result<Pool<Sqlite>, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .busy_timeout(std::time::Duration::from_secs(5))
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = sqlx::SqlitePool::connect_with(options).await?;
        info!("Opened document database at {}", db_path.display());
        Ok(pool)
    }

    async fn initialize_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY,
                applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        let version = sqlx::query_scalar::<_, Option<i32>>("SELECT MAX(version) FROM schema_version")
            .fetch_one(&self.pool)
            .await?;

        if version.is_none() {
            sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
                .bind(CURRENT_SCHEMA_VERSION)
                .execute(&self.pool)
                .await?;
        }

        // AUTOINCREMENT keeps ids monotonic and never reused after delete.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                doc_type TEXT NOT NULL,
                department TEXT NOT NULL,
                owner TEXT NOT NULL,
                version TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'active',
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                file_path TEXT
            )
        "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_created ON documents(created_at DESC)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_status ON documents(status)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Inserts a new record, assigning the next id and stamping
    /// `created_at`, and returns the stored row.
    pub async fn create(&self, draft: DocumentDraft) -> Result<DocumentRecord, StoreError> {
        let draft = draft.normalized()?;

        let record = sqlx::query_as::<_, DocumentRecord>(
            r#"
            INSERT INTO documents (name, doc_type, department, owner, version, status, file_path)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
        "#,
        )
        .bind(&draft.name)
        .bind(&draft.doc_type)
        .bind(&draft.department)
        .bind(&draft.owner)
        .bind(&draft.version)
        .bind(draft.status.to_string())
        .bind(&draft.file_path)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn get(&self, id: i64) -> Result<DocumentRecord, StoreError> {
        sqlx::query_as::<_, DocumentRecord>(
            r#"
            SELECT id, name, doc_type, department, owner, version, status, created_at, file_path
            FROM documents
            WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    /// Lists records, most recent first. A non-empty filter restricts to
    /// rows where it appears as a substring in name, doc_type, department
    /// or owner. The id tie-break keeps ordering stable across rows that
    /// share a second-granularity timestamp.
    pub async fn list(&self, filter: &str) -> Result<Vec<DocumentRecord>, StoreError> {
        let records = if filter.is_empty() {
            sqlx::query_as::<_, DocumentRecord>(
                r#"
                SELECT id, name, doc_type, department, owner, version, status, created_at, file_path
                FROM documents
                ORDER BY created_at DESC, id DESC
            "#,
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            let like = format!("%{}%", filter);
            sqlx::query_as::<_, DocumentRecord>(
                r#"
                SELECT id, name, doc_type, department, owner, version, status, created_at, file_path
                FROM documents
                WHERE name LIKE ? OR doc_type LIKE ? OR department LIKE ? OR owner LIKE ?
                ORDER BY created_at DESC, id DESC
            "#,
            )
            .bind(&like)
            .bind(&like)
            .bind(&like)
            .bind(&like)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(records)
    }

    /// Replaces all mutable fields of the record with the given id.
    /// Matching zero rows is a tolerated no-op; `created_at` is never
    /// touched.
    pub async fn update(&self, id: i64, draft: DocumentDraft) -> Result<(), StoreError> {
        let draft = draft.normalized()?;

        sqlx::query(
            r#"
            UPDATE documents
            SET name = ?, doc_type = ?, department = ?, owner = ?, version = ?, status = ?, file_path = ?
            WHERE id = ?
        "#,
        )
        .bind(&draft.name)
        .bind(&draft.doc_type)
        .bind(&draft.department)
        .bind(&draft.owner)
        .bind(&draft.version)
        .bind(draft.status.to_string())
        .bind(&draft.file_path)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Physically removes the record; no-op when the id is absent.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Patches only the status field.
    pub async fn update_status(&self, id: i64, status: DocumentStatus) -> Result<(), StoreError> {
        sqlx::query("UPDATE documents SET status = ? WHERE id = ?")
            .bind(status.to_string())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Patches only the version field.
    pub async fn update_version(&self, id: i64, version: &str) -> Result<(), StoreError> {
        let version = require_version(version)?;

        sqlx::query("UPDATE documents SET version = ? WHERE id = ?")
            .bind(&version)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(name: &str, owner: &str) -> DocumentDraft {
        DocumentDraft {
            name: name.to_string(),
            doc_type: "PDF".to_string(),
            department: "HR".to_string(),
            owner: owner.to_string(),
            version: "1.0".to_string(),
            status: DocumentStatus::Active,
            file_path: None,
        }
    }

    async fn open_store(temp_dir: &TempDir) -> DocumentStore {
        DocumentStore::open(&temp_dir.path().join("test_documents.db"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let mut input = draft("Policy A", "Alice");
        input.file_path = Some("/home/alice/policy-a.pdf".to_string());
        let created = store.create(input).await.unwrap();

        let listed = store.list("").await.unwrap();
        assert_eq!(listed.len(), 1);
        let record = &listed[0];
        assert_eq!(record.id, created.id);
        assert_eq!(record.name, "Policy A");
        assert_eq!(record.doc_type, "PDF");
        assert_eq!(record.department, "HR");
        assert_eq!(record.owner, "Alice");
        assert_eq!(record.version, "1.0");
        assert_eq!(record.status, DocumentStatus::Active);
        assert_eq!(record.file_path.as_deref(), Some("/home/alice/policy-a.pdf"));
        assert_eq!(record.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_repeated_open_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test_documents.db");

        let store = DocumentStore::open(&db_path).await.unwrap();
        store.create(draft("Policy A", "Alice")).await.unwrap();
        drop(store);

        let reopened = DocumentStore::open(&db_path).await.unwrap();
        let listed = reopened.list("").await.unwrap();
        assert_eq!(listed.len(), 1);

        let version =
            sqlx::query_scalar::<_, i32>("SELECT MAX(version) FROM schema_version")
                .fetch_one(&reopened.pool)
                .await
                .unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);
        let version_rows =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM schema_version")
                .fetch_one(&reopened.pool)
                .await
                .unwrap();
        assert_eq!(version_rows, 1);
    }

    #[tokio::test]
    async fn test_filter_matches_any_of_four_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        store.create(draft("Onboarding Guide", "Alice")).await.unwrap();
        let mut finance = draft("Budget 2026", "Bob");
        finance.department = "Finance".to_string();
        finance.doc_type = "Spreadsheet".to_string();
        store.create(finance).await.unwrap();

        let all = store.list("").await.unwrap();
        assert_eq!(all.len(), 2);

        for (filter, expected_name) in [
            ("Onboarding", "Onboarding Guide"),
            ("Spreadsheet", "Budget 2026"),
            ("Finance", "Budget 2026"),
            ("Bob", "Budget 2026"),
        ] {
            let matched = store.list(filter).await.unwrap();
            assert_eq!(matched.len(), 1, "filter {:?}", filter);
            assert_eq!(matched[0].name, expected_name);
            // Every filtered result is also in the unfiltered listing.
            assert!(all.iter().any(|r| r.id == matched[0].id));
        }

        assert!(store.list("no such text").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ordering_is_most_recent_first() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let older = store.create(draft("Older", "Alice")).await.unwrap();
        let newer = store.create(draft("Newer", "Alice")).await.unwrap();

        // Backdate the first row so the timestamps differ even within a
        // single second of test execution.
        sqlx::query("UPDATE documents SET created_at = datetime('now', '-1 day') WHERE id = ?")
            .bind(older.id)
            .execute(&store.pool)
            .await
            .unwrap();

        let listed = store.list("").await.unwrap();
        assert_eq!(listed[0].id, newer.id);
        assert_eq!(listed[1].id, older.id);
    }

    #[tokio::test]
    async fn test_full_update_leaves_no_stale_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let created = store.create(draft("Policy A", "Alice")).await.unwrap();

        let replacement = DocumentDraft {
            name: "Policy A (rev)".to_string(),
            doc_type: "DOCX".to_string(),
            department: "Legal".to_string(),
            owner: "Carol".to_string(),
            version: "2.0".to_string(),
            status: DocumentStatus::InReview,
            file_path: Some("/srv/docs/policy-a.docx".to_string()),
        };
        store.update(created.id, replacement).await.unwrap();

        let listed = store.list("").await.unwrap();
        assert_eq!(listed.len(), 1);
        let record = &listed[0];
        assert_eq!(record.name, "Policy A (rev)");
        assert_eq!(record.doc_type, "DOCX");
        assert_eq!(record.department, "Legal");
        assert_eq!(record.owner, "Carol");
        assert_eq!(record.version, "2.0");
        assert_eq!(record.status, DocumentStatus::InReview);
        assert_eq!(record.file_path.as_deref(), Some("/srv/docs/policy-a.docx"));
        assert_eq!(record.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        store.update(9999, draft("Ghost", "Nobody")).await.unwrap();
        assert!(store.list("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_semantics() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let kept = store.create(draft("Kept", "Alice")).await.unwrap();
        let removed = store.create(draft("Removed", "Bob")).await.unwrap();

        // Missing id: no error, row count unchanged.
        store.delete(9999).await.unwrap();
        assert_eq!(store.list("").await.unwrap().len(), 2);

        store.delete(removed.id).await.unwrap();
        let listed = store.list("").await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, kept.id);
        assert!(matches!(
            store.get(removed.id).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_patches_touch_only_their_field() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let created = store.create(draft("Policy A", "Alice")).await.unwrap();

        store
            .update_status(created.id, DocumentStatus::Obsolete)
            .await
            .unwrap();
        let after_status = store.get(created.id).await.unwrap();
        assert_eq!(after_status.status, DocumentStatus::Obsolete);
        assert_eq!(after_status.name, created.name);
        assert_eq!(after_status.version, created.version);
        assert_eq!(after_status.created_at, created.created_at);

        store.update_version(created.id, "2.0").await.unwrap();
        let after_version = store.get(created.id).await.unwrap();
        assert_eq!(after_version.version, "2.0");
        assert_eq!(after_version.status, DocumentStatus::Obsolete);
        assert_eq!(after_version.owner, created.owner);
    }

    #[tokio::test]
    async fn test_store_rejects_empty_required_fields() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let mut bad = draft("", "Alice");
        bad.name = "   ".to_string();
        assert!(matches!(
            store.create(bad).await.unwrap_err(),
            StoreError::Validation(_)
        ));

        let created = store.create(draft("Policy A", "Alice")).await.unwrap();
        assert!(matches!(
            store.update_version(created.id, "  ").await.unwrap_err(),
            StoreError::Validation(_)
        ));
        // Failed validation changed nothing.
        assert_eq!(store.get(created.id).await.unwrap().version, "1.0");
    }

    #[tokio::test]
    async fn test_catalog_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let store = open_store(&temp_dir).await;

        let created = store.create(draft("Policy A", "Alice")).await.unwrap();
        assert_eq!(created.id, 1);

        let by_owner = store.list("Alice").await.unwrap();
        assert_eq!(by_owner.len(), 1);
        assert_eq!(by_owner[0].id, created.id);

        store
            .update_status(created.id, DocumentStatus::Obsolete)
            .await
            .unwrap();
        let listed = store.list("").await.unwrap();
        assert_eq!(listed[0].status, DocumentStatus::Obsolete);
        assert_eq!(listed[0].version, "1.0");

        store.delete(created.id).await.unwrap();
        assert!(store.list("").await.unwrap().is_empty());
    }
}
