//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use super::connection::NOTES_SUBDIR;
use super::transaction::Transaction;
use crate::domain::{
    LoadedNote, NoteId, NoteRecord, NoteSummary, count_words, title_for_create,
    title_update_intent,
};
use crate::infra::{ContentSnapshot, content_filename, read_content, write_content};
use crate::store::{NoteStore, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const SELECT_COLUMNS: &str = "SELECT id, title, content_path, created_at, updated_at, \
     word_count, is_deleted, deleted_at FROM notes";

const ORDER_BY: &str = "ORDER BY updated_at DESC, id DESC";

// ===========================================
// Row Mapping
// ===========================================

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<NoteRecord> {
    Ok(NoteRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        content_path: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
        word_count: row.get(5)?,
        is_deleted: row.get::<_, i64>(6)? != 0,
        deleted_at: row.get(7)?,
    })
}

/// Maps row-level conversion failures to `Corrupt`, everything else to
/// `Database`.
fn read_error(err: rusqlite::Error) -> StoreError {
    match err {
        rusqlite::Error::InvalidColumnType(idx, name, ty) => {
            StoreError::Corrupt(format!("column {idx} ({name}) has unexpected type {ty}"))
        }
        rusqlite::Error::FromSqlConversionFailure(idx, ty, source) => {
            StoreError::Corrupt(format!("column {idx} ({ty}) failed to convert: {source}"))
        }
        rusqlite::Error::IntegralValueOutOfRange(idx, value) => {
            StoreError::Corrupt(format!("column {idx} value {value} is out of range"))
        }
        other => StoreError::Database(other),
    }
}

fn query_summaries(
    conn: &Connection,
    sql: &str,
    params: impl rusqlite::Params,
) -> StoreResult<Vec<NoteSummary>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, row_to_record)?;

    let mut notes = Vec::new();
    for row in rows {
        let record = row.map_err(read_error)?;
        notes.push(NoteSummary::try_from(record)?);
    }
    Ok(notes)
}

fn live_record(conn: &Connection, id: &NoteId) -> StoreResult<Option<NoteRecord>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1 AND is_deleted = 0");
    conn.query_row(&sql, params![id.as_str()], row_to_record)
        .optional()
        .map_err(read_error)
}

fn note_exists(conn: &Connection, id: &NoteId) -> StoreResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM notes WHERE id = ?1",
            params![id.as_str()],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Escapes `%`, `_` and `\` for a LIKE pattern using `ESCAPE '\'`.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Writes a body, then runs `commit`. If the commit fails the file is put
/// back the way it was, so a failed write leaves no new body behind.
fn write_then_commit<F>(file: &Path, body: &str, commit: F) -> StoreResult<()>
where
    F: FnOnce() -> StoreResult<()>,
{
    let snapshot = ContentSnapshot::take(file)?;
    write_content(file, body)?;
    if let Err(err) = commit() {
        let path = snapshot.path().to_path_buf();
        if let Err(restore_err) = snapshot.restore() {
            log::warn!(
                "failed to restore {} after aborted write: {restore_err}",
                path.display()
            );
        }
        return Err(err);
    }
    Ok(())
}

// ===========================================
// NoteStore Implementation
// ===========================================

#[async_trait]
impl NoteStore for SqliteStore {
    async fn list(&self, include_deleted: bool) -> StoreResult<Vec<NoteSummary>> {
        let conn = self.lock()?;
        let sql = if include_deleted {
            format!("{SELECT_COLUMNS} {ORDER_BY}")
        } else {
            format!("{SELECT_COLUMNS} WHERE is_deleted = 0 {ORDER_BY}")
        };
        query_summaries(&conn, &sql, [])
    }

    async fn fetch_one(&self, id: &NoteId) -> StoreResult<LoadedNote> {
        let record = {
            let conn = self.lock()?;
            live_record(&conn, id)?
        };
        let record = record.ok_or_else(|| StoreError::not_found(id))?;
        let summary = NoteSummary::try_from(record)?;
        let content = read_content(&self.content_file(summary.content_path()))?;
        Ok(LoadedNote::new(summary, content))
    }

    async fn create(&self, title: &str, content: &str) -> StoreResult<NoteSummary> {
        let id = NoteId::generate();
        let title = title_for_create(title);
        let now = Utc::now();
        let content_path = format!("{}/{}", NOTES_SUBDIR, content_filename(&id, title));
        let file = self.content_file(&content_path);
        let word_count = count_words(content);

        let conn = self.lock()?;
        let tx = Transaction::begin(&conn)?;
        tx.execute(
            "INSERT INTO notes (id, title, content_path, created_at, updated_at, word_count, is_deleted, deleted_at)
             VALUES (?1, ?2, ?3, ?4, ?4, ?5, 0, NULL)",
            params![
                id.as_str(),
                title,
                content_path,
                now.timestamp(),
                word_count as i64
            ],
        )?;
        write_then_commit(&file, content, || tx.commit())?;

        log::info!("created note {} ({} words)", id, word_count);
        let created_at = chrono::DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);
        Ok(NoteSummary::new(
            id,
            title,
            content_path,
            created_at,
            created_at,
            word_count,
        ))
    }

    async fn update(
        &self,
        id: &NoteId,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StoreResult<()> {
        let conn = self.lock()?;
        let record = live_record(&conn, id)?.ok_or_else(|| StoreError::not_found(id))?;
        let existing = NoteSummary::try_from(record)?;

        let title = title_update_intent(title).unwrap_or(existing.title());
        let word_count = content.map_or(existing.word_count(), count_words);
        let now = Utc::now().timestamp();

        let tx = Transaction::begin(&conn)?;
        tx.execute(
            "UPDATE notes SET title = ?2, word_count = ?3, updated_at = ?4
             WHERE id = ?1 AND is_deleted = 0",
            params![id.as_str(), title, word_count as i64, now],
        )?;
        match content {
            Some(body) => {
                let file = self.content_file(existing.content_path());
                write_then_commit(&file, body, || tx.commit())?;
            }
            None => tx.commit()?,
        }

        log::info!("updated note {}", id);
        Ok(())
    }

    async fn soft_delete(&self, id: &NoteId) -> StoreResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE notes SET is_deleted = 1, deleted_at = ?2 WHERE id = ?1 AND is_deleted = 0",
            params![id.as_str(), Utc::now().timestamp()],
        )?;
        if changed == 0 && !note_exists(&conn, id)? {
            return Err(StoreError::not_found(id));
        }
        log::info!("soft-deleted note {}", id);
        Ok(())
    }

    async fn restore(&self, id: &NoteId) -> StoreResult<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE notes SET is_deleted = 0, deleted_at = NULL WHERE id = ?1",
            params![id.as_str()],
        )?;
        if changed == 0 {
            return Err(StoreError::not_found(id));
        }
        log::info!("restored note {}", id);
        Ok(())
    }

    async fn search_titles(
        &self,
        query: &str,
        include_deleted: bool,
    ) -> StoreResult<Vec<NoteSummary>> {
        let conn = self.lock()?;
        let filter = if include_deleted {
            ""
        } else {
            "AND is_deleted = 0"
        };
        let sql = format!(
            "{SELECT_COLUMNS} WHERE title LIKE '%' || ?1 || '%' ESCAPE '\\' {filter} {ORDER_BY}"
        );
        query_summaries(&conn, &sql, params![escape_like(query)])
    }
}
