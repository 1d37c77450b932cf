//! # sqlforge
//!
//! A fluent builder that assembles SQL statement text (SELECT, INSERT,
//! UPDATE, DELETE) from method-chained calls.
//!
//! The crate only emits text: no connections, no execution, no result
//! mapping. The single contract with the rest of a system is "produce a
//! string; the caller executes it". Clause fragments are trusted SQL as
//! written; only ORDER BY / LIMIT / OFFSET pass through literal escaping.
//!
//! ```
//! use sqlforge::{delete, insert, select, update};
//!
//! // SELECT
//! let sql = select()
//!     .from("tbl_test")
//!     .where_and("status='active'")
//!     .end()
//!     .build()?;
//! assert_eq!(sql, "SELECT * FROM tbl_test WHERE status='active';");
//!
//! // INSERT with auto-generated placeholders
//! let sql = insert("test_id,name")
//!     .into_table("tbl_test")
//!     .entry()
//!     .returning("test_id")
//!     .build()?;
//! assert_eq!(sql, "INSERT INTO tbl_test(test_id,name) VALUES ($1,$2) RETURNING test_id");
//!
//! // UPDATE
//! let sql = update("tbl_test").set("name='x'").build()?;
//! assert_eq!(sql, "UPDATE tbl_test SET name='x'");
//!
//! // DELETE
//! let sql = delete().from("tbl_test").where_and("test_id=1").build()?;
//! assert_eq!(sql, "DELETE FROM tbl_test WHERE test_id=1");
//! # Ok::<(), sqlforge::BuildError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod escape;
pub mod fragments;
pub mod normalize;

pub use builder::{Builder, StatementKind};
pub use config::{ClauseInput, QueryConfig};
pub use error::{BuildError, BuildResult};
pub use fragments::IntoFragments;
pub use normalize::SplitRule;

/// Start an empty draft with no statement kind.
pub fn builder() -> Builder {
    Builder::new()
}

/// Start a SELECT draft; result fields default to `*` at build time.
pub fn select() -> Builder {
    let mut draft = Builder::new();
    draft.kind = Some(StatementKind::Select);
    draft
}

/// Start a SELECT draft over the given result fields.
pub fn select_fields(fields: impl IntoFragments) -> Builder {
    Builder::new().select(fields)
}

/// Start an INSERT draft; comma-delimited fields are pre-split into columns.
pub fn insert(fields: impl IntoFragments) -> Builder {
    Builder::new().insert(fields)
}

/// Start an UPDATE draft targeting the given table.
pub fn update(table: impl Into<String>) -> Builder {
    Builder::new().update(table)
}

/// Start a DELETE draft; tables come from [`Builder::from`].
pub fn delete() -> Builder {
    Builder::new().delete()
}

/// Alias for [`delete`].
pub fn del() -> Builder {
    delete()
}

/// Build a statement from a bulk [`QueryConfig`] in one call.
pub fn build(config: QueryConfig) -> BuildResult<String> {
    config.into_builder().build()
}
