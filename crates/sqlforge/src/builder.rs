//! The statement draft: clause accumulation and SQL text assembly.

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};
use crate::escape;
use crate::fragments::IntoFragments;
use crate::normalize::SplitRule;

/// Which serializer a draft uses when it is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

/// A mutable draft of one SQL statement.
///
/// Clause fragments accumulate through chained calls in call order; order
/// among different clause kinds is irrelevant, order within a kind is
/// preserved. [`Builder::build`] consumes the draft and renders the final
/// statement text.
///
/// ```
/// use sqlforge::select;
///
/// let sql = select().from("tbl_test").end().build()?;
/// assert_eq!(sql, "SELECT * FROM tbl_test;");
/// # Ok::<(), sqlforge::BuildError>(())
/// ```
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct Builder {
    pub(crate) kind: Option<StatementKind>,
    pub(crate) result_fields: Vec<String>,
    pub(crate) tables: Vec<String>,
    pub(crate) conditions_and: Vec<String>,
    pub(crate) conditions_or: Vec<String>,
    pub(crate) groups: Vec<String>,
    pub(crate) orders: Vec<String>,
    pub(crate) limit: Option<i64>,
    pub(crate) offset: Option<i64>,
    pub(crate) terminate: bool,
    pub(crate) insert_fields: Vec<String>,
    pub(crate) insert_entries: Vec<Vec<String>>,
    pub(crate) update_setters: Vec<String>,
}

impl Builder {
    /// Create an empty draft with no statement kind.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== SELECT ====================

    /// Switch the draft to SELECT and append result fields.
    ///
    /// With no fields registered by build time, a single `*` is used.
    pub fn select(mut self, fields: impl IntoFragments) -> Self {
        self.kind = Some(StatementKind::Select);
        self.result_fields.extend(fields.into_fragments());
        self
    }

    /// Append target tables.
    pub fn from(mut self, tables: impl IntoFragments) -> Self {
        self.tables.extend(tables.into_fragments());
        self
    }

    /// Append AND-joined WHERE predicates.
    ///
    /// Predicates are trusted SQL fragments and are emitted verbatim.
    pub fn where_and(mut self, conditions: impl IntoFragments) -> Self {
        self.conditions_and.extend(conditions.into_fragments());
        self
    }

    /// Append OR-joined WHERE predicates.
    ///
    /// The whole OR list renders as one parenthesized group, ANDed to any
    /// predicates registered via [`Builder::where_and`].
    pub fn where_or(mut self, conditions: impl IntoFragments) -> Self {
        self.conditions_or.extend(conditions.into_fragments());
        self
    }

    /// Append GROUP BY columns.
    pub fn group(mut self, columns: impl IntoFragments) -> Self {
        self.groups.extend(columns.into_fragments());
        self
    }

    /// Append ORDER BY expressions.
    pub fn order(mut self, expressions: impl IntoFragments) -> Self {
        self.orders.extend(expressions.into_fragments());
        self
    }

    /// Set the row cap. Later calls overwrite; negative values render no
    /// LIMIT clause.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    /// Set the row skip. Later calls overwrite.
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }

    // ==================== INSERT ====================

    /// Switch the draft to INSERT and append column names.
    ///
    /// Each argument may itself be comma-delimited; it is split into
    /// individual column names before appending.
    pub fn insert(mut self, fields: impl IntoFragments) -> Self {
        self.kind = Some(StatementKind::Insert);
        for field in fields.into_fragments() {
            self.insert_fields.extend(SplitRule::Comma.split(&field));
        }
        self
    }

    /// Set the INSERT target table, replacing any previously supplied tables.
    ///
    /// Named `into_table` because `into` collides with [`std::convert::Into`].
    pub fn into_table(mut self, table: impl Into<String>) -> Self {
        self.tables = vec![table.into()];
        self
    }

    /// Open a new value tuple with auto-generated positional placeholders.
    ///
    /// One `$N` placeholder is generated per declared insert field, numbered
    /// after the slots used by previous entries: entry `i` over `k` fields
    /// gets `$(i*k+1)` through `$(i*k+k)`.
    pub fn entry(mut self) -> Self {
        let index = self.insert_entries.len();
        let width = self.insert_fields.len();
        let placeholders: Vec<String> = (1..=width)
            .map(|position| format!("${}", index * width + position))
            .collect();
        self.insert_entries.push(Vec::new());
        self.values(placeholders)
    }

    /// Open a new value tuple with explicit value expressions.
    ///
    /// An empty list falls back to [`Builder::entry`] placeholder generation.
    pub fn entry_with(mut self, values: impl IntoFragments) -> Self {
        let values = values.into_fragments();
        if values.is_empty() {
            return self.entry();
        }
        self.insert_entries.push(Vec::new());
        self.values(values)
    }

    /// Append value expressions to the current tuple, opening the first
    /// tuple implicitly if none exists yet.
    pub fn values(mut self, values: impl IntoFragments) -> Self {
        if self.insert_entries.is_empty() {
            self.insert_entries.push(Vec::new());
        }
        if let Some(entry) = self.insert_entries.last_mut() {
            entry.extend(values.into_fragments());
        }
        self
    }

    /// Append RETURNING columns.
    ///
    /// RETURNING shares storage with SELECT result fields; for INSERT,
    /// UPDATE and DELETE the accumulated fields render as a trailing
    /// `RETURNING` clause.
    pub fn returning(mut self, fields: impl IntoFragments) -> Self {
        self.result_fields.extend(fields.into_fragments());
        self
    }

    // ==================== UPDATE ====================

    /// Switch the draft to UPDATE, replacing tables with the given one.
    pub fn update(mut self, table: impl Into<String>) -> Self {
        self.kind = Some(StatementKind::Update);
        self.tables = vec![table.into()];
        self
    }

    /// Append `column = expression` assignments.
    pub fn set(mut self, setters: impl IntoFragments) -> Self {
        self.update_setters.extend(setters.into_fragments());
        self
    }

    // ==================== DELETE ====================

    /// Switch the draft to DELETE. Tables come from [`Builder::from`].
    pub fn delete(mut self) -> Self {
        self.kind = Some(StatementKind::Delete);
        self
    }

    /// Alias for [`Builder::delete`].
    pub fn del(self) -> Self {
        self.delete()
    }

    // ==================== terminal ====================

    /// Terminate the statement with a semicolon.
    pub fn end(mut self) -> Self {
        self.terminate = true;
        self
    }

    /// Serialize the draft into its final SQL text.
    ///
    /// Fails with a [`BuildError`] when the draft is incomplete: no
    /// statement kind, no tables, an INSERT without entries or an UPDATE
    /// without setters.
    pub fn build(mut self) -> BuildResult<String> {
        let kind = self.kind.ok_or(BuildError::MissingStatementType)?;
        if self.tables.is_empty() {
            return Err(BuildError::MissingTable);
        }

        let mut sql = match kind {
            StatementKind::Select => self.render_select(),
            StatementKind::Insert => self.render_insert()?,
            StatementKind::Update => self.render_update()?,
            StatementKind::Delete => self.render_delete(),
        };

        if self.terminate {
            sql.push(';');
        }

        tracing::debug!(kind = ?kind, len = sql.len(), "statement built");
        Ok(sql)
    }

    // ==================== serializers ====================

    fn render_select(&mut self) -> String {
        if self.result_fields.is_empty() {
            self.result_fields.push("*".to_string());
        }

        let mut sql = format!(
            "SELECT {} FROM {}",
            self.result_fields.join(","),
            self.tables.join(",")
        );

        sql.push_str(&self.render_where());

        if !self.groups.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.groups.join(","));
        }

        // ORDER BY, LIMIT and OFFSET are the only literal-escaped clauses;
        // everything else is a caller-trusted fragment.
        if !self.orders.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&escape::literal(&self.orders.join(",")));
        }

        if let Some(limit) = self.limit {
            if limit >= 0 {
                sql.push_str(" LIMIT ");
                sql.push_str(&escape::literal(&limit.to_string()));
            }
        }

        if let Some(offset) = self.offset {
            sql.push_str(" OFFSET ");
            sql.push_str(&escape::literal(&offset.to_string()));
        }

        sql
    }

    fn render_where(&self) -> String {
        let has_and = !self.conditions_and.is_empty();
        let has_or = !self.conditions_or.is_empty();
        let mut sql = String::new();

        if !has_and && !has_or {
            return sql;
        }

        sql.push_str(" WHERE ");

        if has_and {
            sql.push_str(&self.conditions_and.join(" AND "));
        }

        if has_or {
            if has_and {
                sql.push_str(" AND ");
            }
            sql.push('(');
            sql.push_str(&self.conditions_or.join(" OR "));
            sql.push(')');
        }

        sql
    }

    fn render_insert(&self) -> BuildResult<String> {
        if self.insert_entries.is_empty() {
            return Err(BuildError::MissingInsertEntry);
        }

        let mut sql = format!("INSERT INTO {}", self.tables[0]);

        if !self.insert_fields.is_empty() {
            sql.push('(');
            sql.push_str(&self.insert_fields.join(","));
            sql.push(')');
        }

        sql.push_str(" VALUES");

        for entry in &self.insert_entries {
            sql.push_str(" (");
            sql.push_str(&entry.join(","));
            sql.push(')');
        }

        sql.push_str(&self.render_returning());
        Ok(sql)
    }

    fn render_update(&self) -> BuildResult<String> {
        if self.update_setters.is_empty() {
            return Err(BuildError::MissingUpdateSetter);
        }

        let mut sql = format!(
            "UPDATE {} SET {}",
            self.tables[0],
            self.update_setters.join(",")
        );

        sql.push_str(&self.render_where());
        sql.push_str(&self.render_returning());
        Ok(sql)
    }

    fn render_delete(&self) -> String {
        let mut sql = format!("DELETE FROM {}", self.tables.join(","));
        sql.push_str(&self.render_where());
        sql.push_str(&self.render_returning());
        sql
    }

    fn render_returning(&self) -> String {
        if self.result_fields.is_empty() {
            String::new()
        } else {
            format!(" RETURNING {}", self.result_fields.join(","))
        }
    }
}
