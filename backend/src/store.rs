//! SQLite-backed template store.
//!
//! One row per template, keyed by name. Both artifacts of a save are kept
//! side by side: the rendered `html` for consumers that just send email, and
//! the `json` block list the builder re-hydrates for editing. Connections
//! are opened per operation; SQLite serializes writers itself at this scale.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection, OptionalExtension};

use common::model::block::Block;
use common::requests::{name_is_well_formed, TemplateSummary};

use crate::error::StoreError;

#[derive(Debug)]
pub struct TemplateRecord {
    pub name: String,
    pub json: String,
    pub html: String,
    pub updated_at: i64,
}

#[derive(Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Opens the store at `path`, creating the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS templates (
                name TEXT PRIMARY KEY,
                json TEXT NOT NULL,
                html TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Persists both artifacts under `name`.
    ///
    /// Without `overwrite`, an existing row under the same name is a
    /// conflict; with it, the row is replaced. The JSON artifact is checked
    /// to deserialize back into a block list before anything is written, so
    /// a malformed payload can never shadow a loadable template.
    pub fn save(
        &self,
        name: &str,
        html: &str,
        json: &str,
        overwrite: bool,
    ) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if !name_is_well_formed(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        let _blocks: Vec<Block> = serde_json::from_str(json)?;

        let conn = self.connect()?;
        if !overwrite {
            let exists: Option<String> = conn
                .query_row(
                    "SELECT name FROM templates WHERE name = ?1",
                    params![name],
                    |row| row.get(0),
                )
                .optional()?;
            if exists.is_some() {
                return Err(StoreError::DuplicateName(name.to_string()));
            }
        }

        conn.execute(
            "INSERT OR REPLACE INTO templates (name, json, html, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![name, json, html, now_millis()],
        )?;
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<TemplateRecord, StoreError> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT name, json, html, updated_at FROM templates WHERE name = ?1",
            params![name],
            |row| {
                Ok(TemplateRecord {
                    name: row.get(0)?,
                    json: row.get(1)?,
                    html: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            },
        )
        .optional()?
        .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// All saved templates, most recently updated first.
    pub fn list(&self) -> Result<Vec<TemplateSummary>, StoreError> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT name, updated_at FROM templates ORDER BY updated_at DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(TemplateSummary {
                name: row.get(0)?,
                updated_at: row.get(1)?,
            })
        })?;
        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?);
        }
        Ok(summaries)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
