use anyhow::{Context, Result};
use rusqlite::Connection;

// Children first so every drop is a no-op cascade.
const TABLES: [&str; 5] = [
    "match_results",
    "matches",
    "registrations",
    "tournaments",
    "players",
];

/// Creates any missing tables and indexes. Safe to run on every start.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    let schema_sql = include_str!("schema.sql");
    let statements = split_sql_statements(schema_sql);

    for (idx, statement) in statements.iter().enumerate() {
        execute_sql(conn, statement)
            .with_context(|| format!("Failed to execute statement {}", idx + 1))?;
    }

    log::debug!("Database schema ensured ({} statements)", statements.len());
    Ok(())
}

/// Drops every table and recreates the schema from scratch.
pub fn reset_database(conn: &Connection) -> Result<()> {
    for table in TABLES {
        execute_sql(conn, &format!("DROP TABLE IF EXISTS {table}"))
            .with_context(|| format!("Failed to drop table {table}"))?;
    }
    ensure_schema(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn execute_sql(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute(sql, [])
        .context("Failed to execute SQL statement")
        .map(|_| ())
}
