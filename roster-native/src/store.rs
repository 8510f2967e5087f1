//! SQLite access for the search routine.

use crate::error::{NativeError, NativeResult};
use roster_codec::Encoder;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags};
use std::borrow::Cow;
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY,
        name TEXT,
        grade INTEGER,
        course TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_name ON students (name);
";

const SEARCH_SQL: &str = "SELECT id, name, grade, course FROM students \
     WHERE LOWER(name) LIKE LOWER('%' || ?1 || '%') ORDER BY id";

/// Opens (creating if needed) the store at `locator`.
pub fn open_store(locator: &str) -> NativeResult<Connection> {
    Ok(Connection::open(locator)?)
}

/// Opens an existing store read-only. A missing file is an error rather
/// than an empty database.
pub fn open_for_search(locator: &str) -> NativeResult<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Ok(Connection::open_with_flags(locator, flags)?)
}

/// Creates the `students` table and its name index if they do not exist.
pub fn init_schema(conn: &Connection) -> NativeResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Inserts a student and returns its id.
pub fn insert_student(
    conn: &Connection,
    name: &str,
    grade: Option<i64>,
    course: Option<&str>,
) -> NativeResult<i64> {
    if name.is_empty() {
        return Err(NativeError::InvalidArgument("name is required".to_string()));
    }
    conn.execute(
        "INSERT INTO students (name, grade, course) VALUES (?1, ?2, ?3)",
        params![name, grade, course],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Runs the name search and encodes every matching row as wire text.
///
/// Column values are written in SQLite's own text form, so a non-integer
/// value stored in `grade` reaches the wire as-is.
pub fn search_wire(conn: &Connection, term: &str) -> NativeResult<String> {
    let mut stmt = conn.prepare(SEARCH_SQL)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

    let mut encoder = Encoder::new();
    let mut rows = stmt.query(params![term])?;
    while let Some(row) = rows.next()? {
        for (idx, column) in columns.iter().enumerate() {
            let text = column_text(row.get_ref(idx)?);
            encoder.field(column, text.as_deref());
        }
        encoder.end_record();
    }

    debug!(term = %term, matches = encoder.record_count(), "Student search complete");
    Ok(encoder.finish())
}

fn column_text(value: ValueRef<'_>) -> Option<Cow<'_, str>> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(Cow::Owned(i.to_string())),
        ValueRef::Real(f) => Some(Cow::Owned(format!("{f:?}"))),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(String::from_utf8_lossy(bytes)),
    }
}
