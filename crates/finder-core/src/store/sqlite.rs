//! SQLite-backed candidate store
//!
//! Reads candidate rows from an existing database. The schema belongs to the
//! surrounding application; this adapter only needs, per search method, the
//! table to read and the column to probe.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use serde::{Deserialize, Serialize};

use crate::candidate::{Candidate, FieldValue};
use crate::error::{FinderError, Result};
use crate::map_store_err;

use super::{probe_tokens, CandidateStore, SearchMethod};

/// Table and probe column backing one search method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMapping {
    pub table: String,
    pub column: String,
}

impl TableMapping {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        TableMapping {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Default table layout of a swimming results database
    pub fn default_for(method: SearchMethod) -> Self {
        match method {
            SearchMethod::SwimmersByName => TableMapping::new("swimmers", "complete_name"),
            SearchMethod::TeamsByName => TableMapping::new("teams", "name"),
            SearchMethod::PoolsByName => TableMapping::new("swimming_pools", "name"),
            SearchMethod::MeetingsByDescription => TableMapping::new("meetings", "description"),
            SearchMethod::CitiesByName => TableMapping::new("cities", "name"),
        }
    }
}

/// Candidate store reading rows from SQLite
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
    tables: HashMap<SearchMethod, TableMapping>,
}

impl SqliteStore {
    /// Open an existing database read-only
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FinderError::not_found(
                "database",
                path.display().to_string(),
            ));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| {
                FinderError::store_operation(&format!("open database at {}", path.display()), e)
            })?;
        Ok(Self::from_connection(conn))
    }

    /// Wrap an already open connection, using the default table layout
    pub fn from_connection(conn: Connection) -> Self {
        let tables = SearchMethod::ALL
            .iter()
            .map(|method| (*method, TableMapping::default_for(*method)))
            .collect();
        SqliteStore {
            conn: Mutex::new(conn),
            tables,
        }
    }

    /// Override the table backing `method`
    pub fn with_table(mut self, method: SearchMethod, mapping: TableMapping) -> Self {
        self.tables.insert(method, mapping);
        self
    }

    fn build_query(mapping: &TableMapping, probes: usize) -> String {
        let mut sql = format!("SELECT * FROM {}", quote_identifier(&mapping.table));
        if probes > 0 {
            let column = quote_identifier(&mapping.column);
            let clauses: Vec<String> = (1..=probes)
                .map(|i| format!("{} LIKE ?{}", column, i))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" OR "));
        }
        sql.push_str(" ORDER BY rowid");
        sql
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Convert one column value into a candidate field.
///
/// Every searchable [`Field`](crate::candidate::Field) is text or integer, so
/// a REAL column can only be an extra display column and never takes part in
/// filter equality. It is kept as its decimal text (`25.5` reads back as
/// `Text("25.5")`). BLOB columns are dropped.
fn to_field_value(value: ValueRef<'_>) -> Option<FieldValue> {
    match value {
        ValueRef::Null => Some(FieldValue::Null),
        ValueRef::Integer(n) => Some(FieldValue::Integer(n)),
        ValueRef::Real(f) => Some(FieldValue::Text(f.to_string())),
        ValueRef::Text(bytes) => Some(FieldValue::Text(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
        ValueRef::Blob(_) => None,
    }
}

impl CandidateStore for SqliteStore {
    fn coarse_search(&self, method: SearchMethod, target_value: &str) -> Result<Vec<Candidate>> {
        let mapping = self.tables.get(&method).ok_or_else(|| {
            FinderError::unsupported("search method", method, "a configured table mapping")
        })?;

        let probes: Vec<String> = probe_tokens(target_value)
            .into_iter()
            .map(|token| format!("%{}%", token))
            .collect();
        let sql = Self::build_query(mapping, probes.len());

        let conn = self
            .conn
            .lock()
            .map_err(|e| map_store_err!("lock database connection", e))?;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| map_store_err!(&format!("prepare lookup on {}", mapping.table), e))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

        let mut rows = stmt.query(rusqlite::params_from_iter(probes.iter()))?;
        let mut candidates = Vec::new();
        while let Some(row) = rows.next()? {
            let mut candidate = Candidate::default();
            for (i, column) in columns.iter().enumerate() {
                let Some(value) = to_field_value(row.get_ref(i)?) else {
                    continue;
                };
                if column == "id" {
                    if let FieldValue::Integer(id) = value {
                        candidate.id = Some(id);
                        continue;
                    }
                }
                candidate.fields.insert(column.clone(), value);
            }
            candidates.push(candidate);
        }

        tracing::debug!(
            method = %method,
            probes = probes.len(),
            found = candidates.len(),
            "coarse_search"
        );
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams_db() -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE teams (id INTEGER PRIMARY KEY, name TEXT NOT NULL, city_id INTEGER, logo BLOB);
             INSERT INTO teams (id, name, city_id) VALUES (1, 'Nuoto Carpi', 3);
             INSERT INTO teams (id, name, city_id) VALUES (2, 'CSI Nuoto Ober Ferrari', 5);
             INSERT INTO teams (id, name, city_id) VALUES (3, 'Reggiana Nuoto', NULL);",
        )
        .unwrap();
        SqliteStore::from_connection(conn)
    }

    #[test]
    fn test_probe_narrows_domain() {
        let store = teams_db();
        let domain = store
            .coarse_search(SearchMethod::TeamsByName, "Carpi")
            .unwrap();
        assert_eq!(domain.len(), 1);
        assert_eq!(domain[0].id, Some(1));
        assert_eq!(domain[0].get("city_id"), Some(&FieldValue::Integer(3)));
    }

    #[test]
    fn test_probes_are_or_combined() {
        let store = teams_db();
        let domain = store
            .coarse_search(SearchMethod::TeamsByName, "Ferrari Reggiana")
            .unwrap();
        let ids: Vec<_> = domain.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![Some(2), Some(3)]);
        assert_eq!(domain[1].get("city_id"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_short_query_loads_whole_table() {
        let store = teams_db();
        let domain = store.coarse_search(SearchMethod::TeamsByName, "CN").unwrap();
        assert_eq!(domain.len(), 3);
    }

    #[test]
    fn test_custom_mapping() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE atleti (id INTEGER PRIMARY KEY, nome TEXT);
             INSERT INTO atleti (id, nome) VALUES (10, 'Rossi Mario');",
        )
        .unwrap();
        let store = SqliteStore::from_connection(conn).with_table(
            SearchMethod::SwimmersByName,
            TableMapping::new("atleti", "nome"),
        );
        let domain = store
            .coarse_search(SearchMethod::SwimmersByName, "rossi")
            .unwrap();
        assert_eq!(domain.len(), 1);
        assert_eq!(domain[0].get("nome"), Some(&FieldValue::from("Rossi Mario")));
    }

    #[test]
    fn test_missing_table_is_a_store_error() {
        let store = teams_db();
        let err = store
            .coarse_search(SearchMethod::PoolsByName, "Ferretti")
            .unwrap_err();
        assert!(matches!(err, FinderError::Store { .. }));
    }

    #[test]
    fn test_real_columns_read_back_as_text() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE swimming_pools (id INTEGER PRIMARY KEY, name TEXT, length REAL, plan BLOB);
             INSERT INTO swimming_pools (id, name, length, plan) VALUES (1, 'Piscina Ferretti', 25.5, x'00');",
        )
        .unwrap();
        let store = SqliteStore::from_connection(conn);
        let domain = store
            .coarse_search(SearchMethod::PoolsByName, "Ferretti")
            .unwrap();
        assert_eq!(domain[0].get("length"), Some(&FieldValue::from("25.5")));
        assert_eq!(domain[0].get("plan"), None);
    }

    #[test]
    fn test_identifiers_are_quoted() {
        let mapping = TableMapping::new("we\"ird", "name");
        let sql = SqliteStore::build_query(&mapping, 2);
        assert_eq!(
            sql,
            "SELECT * FROM \"we\"\"ird\" WHERE \"name\" LIKE ?1 OR \"name\" LIKE ?2 ORDER BY rowid"
        );
    }
}
