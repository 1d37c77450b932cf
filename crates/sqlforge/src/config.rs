//! Bulk draft configuration.
//!
//! The chain API builds clause sequences incrementally; `QueryConfig` is the
//! bulk path: a plain data structure whose clauses may be supplied either as
//! already-split sequences or as raw delimited strings, normalized with the
//! same splitting rules before serialization. Field names deserialize from
//! the camelCase object shape, so a JSON statement description maps onto the
//! config directly.

use serde::{Deserialize, Serialize};

use crate::builder::{Builder, StatementKind};
use crate::normalize::SplitRule;

/// One clause of a [`QueryConfig`]: a raw delimited string or an ordered
/// sequence of fragments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseInput {
    Raw(String),
    Items(Vec<String>),
}

impl ClauseInput {
    /// Normalize into an ordered fragment sequence.
    ///
    /// Raw strings are split with the given rule; sequences pass through
    /// untouched, so normalizing twice is a no-op.
    pub fn normalize(self, rule: SplitRule) -> Vec<String> {
        match self {
            ClauseInput::Raw(raw) => rule.split(&raw),
            ClauseInput::Items(items) => items,
        }
    }
}

impl From<&str> for ClauseInput {
    fn from(raw: &str) -> Self {
        ClauseInput::Raw(raw.to_string())
    }
}

impl From<String> for ClauseInput {
    fn from(raw: String) -> Self {
        ClauseInput::Raw(raw)
    }
}

impl From<Vec<String>> for ClauseInput {
    fn from(items: Vec<String>) -> Self {
        ClauseInput::Items(items)
    }
}

impl From<Vec<&str>> for ClauseInput {
    fn from(items: Vec<&str>) -> Self {
        ClauseInput::Items(items.into_iter().map(str::to_string).collect())
    }
}

/// A whole statement described at once.
///
/// Every clause is optional; absent clauses leave the fresh draft untouched.
///
/// ```
/// use sqlforge::{QueryConfig, StatementKind};
///
/// let sql = sqlforge::build(QueryConfig {
///     kind: Some(StatementKind::Select),
///     tables: Some("tbl_test".into()),
///     result_fields: Some("test_id,name,ts".into()),
///     ..QueryConfig::default()
/// })?;
/// assert_eq!(sql, "SELECT test_id,name,ts FROM tbl_test");
/// # Ok::<(), sqlforge::BuildError>(())
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryConfig {
    /// Statement kind; serialized as `type` (`"SELECT"`, `"INSERT"`, ...).
    #[serde(rename = "type")]
    pub kind: Option<StatementKind>,
    /// Comma-delimited when raw.
    pub tables: Option<ClauseInput>,
    /// Selected/returned columns; comma-delimited when raw.
    pub result_fields: Option<ClauseInput>,
    /// AND-joined predicates; `and`-delimited when raw.
    pub conditions_and: Option<ClauseInput>,
    /// OR-joined predicates; `or`-delimited when raw.
    pub conditions_or: Option<ClauseInput>,
    /// GROUP BY columns; comma-delimited when raw.
    pub groups: Option<ClauseInput>,
    /// ORDER BY expressions; comma-delimited when raw.
    pub orders: Option<ClauseInput>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Append a trailing semicolon.
    pub terminate: bool,
    /// INSERT column list; comma-delimited when raw.
    pub insert_fields: Option<ClauseInput>,
    /// One value tuple per entry; each comma-delimited when raw.
    pub insert_entries: Vec<ClauseInput>,
    /// UPDATE assignments; comma-delimited when raw.
    pub update_setters: Option<ClauseInput>,
}

impl QueryConfig {
    /// Overlay this configuration onto a fresh draft, normalizing every raw
    /// clause with its per-clause delimiter rule.
    pub fn into_builder(self) -> Builder {
        let mut draft = Builder::new();
        draft.kind = self.kind;

        if let Some(tables) = self.tables {
            draft.tables = tables.normalize(SplitRule::Comma);
        }
        if let Some(fields) = self.result_fields {
            draft.result_fields = fields.normalize(SplitRule::Comma);
        }
        if let Some(conditions) = self.conditions_and {
            draft.conditions_and = conditions.normalize(SplitRule::And);
        }
        if let Some(conditions) = self.conditions_or {
            draft.conditions_or = conditions.normalize(SplitRule::Or);
        }
        if let Some(groups) = self.groups {
            draft.groups = groups.normalize(SplitRule::Comma);
        }
        if let Some(orders) = self.orders {
            draft.orders = orders.normalize(SplitRule::Comma);
        }

        draft.limit = self.limit;
        draft.offset = self.offset;
        draft.terminate = self.terminate;

        if let Some(fields) = self.insert_fields {
            draft.insert_fields = fields.normalize(SplitRule::Comma);
        }
        draft.insert_entries = self
            .insert_entries
            .into_iter()
            .map(|entry| entry.normalize(SplitRule::Comma))
            .collect();
        if let Some(setters) = self.update_setters {
            draft.update_setters = setters.normalize(SplitRule::Comma);
        }

        draft
    }
}

impl From<QueryConfig> for Builder {
    fn from(config: QueryConfig) -> Self {
        config.into_builder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_clauses_are_split() {
        let config = QueryConfig {
            kind: Some(StatementKind::Select),
            tables: Some("tbl_test".into()),
            result_fields: Some("test_id,name,ts".into()),
            conditions_and: Some("name='lettuce' and test_id=1".into()),
            ..QueryConfig::default()
        };
        assert_eq!(
            config.into_builder().build().unwrap(),
            "SELECT test_id,name,ts FROM tbl_test WHERE name='lettuce' AND test_id=1"
        );
    }

    #[test]
    fn item_clauses_pass_through() {
        let config = QueryConfig {
            kind: Some(StatementKind::Select),
            tables: Some(vec!["t1", "t2"].into()),
            ..QueryConfig::default()
        };
        assert_eq!(config.into_builder().build().unwrap(), "SELECT * FROM t1,t2");
    }

    #[test]
    fn normalize_is_idempotent() {
        let items = vec!["a".to_string(), "b".to_string()];
        let once = ClauseInput::Items(items.clone()).normalize(SplitRule::Comma);
        let twice = ClauseInput::Items(once.clone()).normalize(SplitRule::Comma);
        assert_eq!(once, items);
        assert_eq!(twice, items);
    }

    #[test]
    fn insert_entries_normalize_per_entry() {
        let config = QueryConfig {
            kind: Some(StatementKind::Insert),
            tables: Some("t".into()),
            insert_fields: Some("id,name".into()),
            insert_entries: vec!["1, 'a'".into(), ClauseInput::Items(vec!["2".into(), "'b'".into()])],
            ..QueryConfig::default()
        };
        assert_eq!(
            config.into_builder().build().unwrap(),
            "INSERT INTO t(id,name) VALUES (1,'a') (2,'b')"
        );
    }

    #[test]
    fn terminate_flag_carries_over() {
        let config = QueryConfig {
            kind: Some(StatementKind::Delete),
            tables: Some("t".into()),
            terminate: true,
            ..QueryConfig::default()
        };
        assert_eq!(config.into_builder().build().unwrap(), "DELETE FROM t;");
    }
}
