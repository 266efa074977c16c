use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::ItemStore;
use crate::error::StoreError;
use crate::model::{NewItem, TodoItem};

// AUTOINCREMENT keeps SQLite from handing out the id of a deleted row again.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todo_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        is_complete INTEGER NOT NULL DEFAULT 0
    );
"#;

/// SQLite-backed store. Queries run on the blocking pool.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (or create) a database file and make sure the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::init(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    async fn with_conn<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().map_err(|_| StoreError::Poisoned)?;
            f(&conn).map_err(StoreError::from)
        })
        .await?
    }
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<TodoItem> {
    Ok(TodoItem {
        id: row.get(0)?,
        name: row.get(1)?,
        is_complete: row.get(2)?,
    })
}

#[async_trait]
impl ItemStore for SqliteStore {
    async fn list(&self) -> Result<Vec<TodoItem>, StoreError> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, name, is_complete FROM todo_items ORDER BY id")?;
            let rows = stmt.query_map([], row_to_item)?;
            rows.collect()
        })
        .await
    }

    async fn add(&self, item: NewItem) -> Result<TodoItem, StoreError> {
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO todo_items (name, is_complete) VALUES (?1, ?2)",
                params![item.name, item.is_complete],
            )?;
            Ok(TodoItem {
                id: conn.last_insert_rowid(),
                name: item.name,
                is_complete: item.is_complete,
            })
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, StoreError> {
        self.with_conn(move |conn| {
            conn.query_row(
                "SELECT id, name, is_complete FROM todo_items WHERE id = ?1",
                params![id],
                row_to_item,
            )
            .optional()
        })
        .await
    }

    async fn update(&self, item: &TodoItem) -> Result<bool, StoreError> {
        let item = item.clone();
        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE todo_items SET name = ?1, is_complete = ?2 WHERE id = ?3",
                params![item.name, item.is_complete, item.id],
            )?;
            Ok(changed > 0)
        })
        .await
    }

    async fn remove(&self, item: &TodoItem) -> Result<bool, StoreError> {
        let id = item.id;
        self.with_conn(move |conn| {
            let deleted = conn.execute("DELETE FROM todo_items WHERE id = ?1", params![id])?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .with_conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM todo_items", [], |row| row.get(0))
            })
            .await?;
        Ok(count as usize)
    }
}
