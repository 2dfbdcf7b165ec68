pub mod store;

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Closed lifecycle tag of a catalogued document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Active,
    InReview,
    Obsolete,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::InReview => write!(f, "in_review"),
            Self::Obsolete => write!(f, "obsolete"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "in_review" => Ok(Self::InReview),
            "obsolete" => Ok(Self::Obsolete),
            _ => Err(anyhow::anyhow!("Invalid document status: {}", s)),
        }
    }
}

/// One catalogued entry: a document's metadata and optional file location.
/// The id is assigned by the store and never reused; `created_at` is
/// stamped at insert and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: i64,
    pub name: String,
    pub doc_type: String,
    pub department: String,
    pub owner: String,
    pub version: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub file_path: Option<String>,
}

impl sqlx::FromRow<'_, sqlx::sqlite::SqliteRow> for DocumentRecord {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;

        let status_str: String = row.try_get("status")?;
        let status = status_str.parse().unwrap_or_default();

        Ok(DocumentRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            doc_type: row.try_get("doc_type")?,
            department: row.try_get("department")?,
            owner: row.try_get("owner")?,
            version: row.try_get("version")?,
            status,
            created_at: row.try_get("created_at")?,
            file_path: row.try_get("file_path")?,
        })
    }
}

/// Caller-supplied fields for create and full update. Required text fields
/// must be non-empty after trimming; the store rejects drafts that are not.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub name: String,
    pub doc_type: String,
    pub department: String,
    pub owner: String,
    pub version: String,
    pub status: DocumentStatus,
    #[serde(default)]
    pub file_path: Option<String>,
}

impl DocumentDraft {
    /// Trims every text field and rejects the draft if a required one
    /// came out empty. An all-whitespace file path collapses to None.
    pub(crate) fn normalized(self) -> Result<Self, StoreError> {
        Ok(Self {
            name: require_field("name", &self.name)?,
            doc_type: require_field("doc_type", &self.doc_type)?,
            department: require_field("department", &self.department)?,
            owner: require_field("owner", &self.owner)?,
            version: require_field("version", &self.version)?,
            status: self.status,
            file_path: normalize_file_path(self.file_path),
        })
    }
}

fn require_field(field: &str, value: &str) -> Result<String, StoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Validation(format!(
            "field '{}' must not be empty",
            field
        )));
    }
    Ok(trimmed.to_string())
}

fn normalize_file_path(path: Option<String>) -> Option<String> {
    path.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn require_version(version: &str) -> Result<String, StoreError> {
    require_field("version", version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DocumentDraft {
        DocumentDraft {
            name: "  Policy A  ".to_string(),
            doc_type: "PDF".to_string(),
            department: "HR".to_string(),
            owner: "Alice".to_string(),
            version: "1.0".to_string(),
            status: DocumentStatus::Active,
            file_path: Some("   ".to_string()),
        }
    }

    #[test]
    fn normalized_trims_and_drops_blank_file_path() {
        let normalized = draft().normalized().unwrap();
        assert_eq!(normalized.name, "Policy A");
        assert_eq!(normalized.file_path, None);
    }

    #[test]
    fn normalized_rejects_blank_required_field() {
        let mut bad = draft();
        bad.owner = " \t ".to_string();
        let err = bad.normalized().unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("owner"));
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            DocumentStatus::Active,
            DocumentStatus::InReview,
            DocumentStatus::Obsolete,
        ] {
            let parsed: DocumentStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("archived".parse::<DocumentStatus>().is_err());
    }
}
