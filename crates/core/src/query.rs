//! List query types shared by every entity service.
//!
//! A [`ListQuery`] carries pagination (`skip`/`limit`), an ordered list of
//! [`FilterCondition`]s and an optional sort. Conditions are opaque to the
//! client: they are forwarded to the backend verbatim and never evaluated
//! locally.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Default `limit` sent with list requests when the caller does not set one.
pub const DEFAULT_LIST_LIMIT: u64 = 100;

/// A single `(field, operator, value)` filter triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

impl FilterCondition {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    /// Parse `field:operator:value`.
    ///
    /// The value is read as JSON when it parses as JSON (numbers, booleans,
    /// quoted strings) and as a plain string otherwise. Only the first two
    /// colons split, so values may themselves contain colons.
    ///
    /// # Examples
    ///
    /// ```
    /// use histdom_core::query::FilterCondition;
    /// let cond = FilterCondition::parse("pg:gte:1").unwrap();
    /// assert_eq!(cond.value, serde_json::json!(1));
    /// let cond = FilterCondition::parse("idfed_jugador:eq:0100001").unwrap();
    /// assert_eq!(cond.value, serde_json::json!("0100001"));
    /// ```
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let mut parts = input.splitn(3, ':');
        let field = parts.next().unwrap_or_default().trim();
        let operator = parts.next().unwrap_or_default().trim();
        let raw_value = parts.next().map(str::trim);

        let raw_value = match raw_value {
            Some(value) if !field.is_empty() && !operator.is_empty() => value,
            _ => {
                return Err(CoreError::Validation(format!(
                    "Invalid filter '{input}'. Expected field:operator:value"
                )))
            }
        };

        let value = serde_json::from_str(raw_value)
            .unwrap_or_else(|_| serde_json::Value::String(raw_value.to_string()));

        Ok(Self::new(field, operator, value))
    }
}

/// Sort direction understood by the backend (`asc` / `desc`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Pagination, filter conditions and sort for one list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub skip: u64,
    pub limit: u64,
    pub conditions: Vec<FilterCondition>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDirection>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIST_LIMIT,
            conditions: Vec::new(),
            sort_by: None,
            sort_dir: None,
        }
    }
}

impl ListQuery {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit,
            ..Self::default()
        }
    }

    /// Query for a 1-based page. Page 0 is treated as page 1 and a zero
    /// page size as 1.
    pub fn page(page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1) as u64;
        let skip = (page.max(1) as u64 - 1) * page_size;
        Self::new(skip, page_size)
    }

    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = FilterCondition>) -> Self {
        self.conditions.extend(conditions);
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.sort_dir = Some(direction);
        self
    }

    /// Same filters and sort, different window.
    pub fn with_window(&self, skip: u64, limit: u64) -> Self {
        Self {
            skip,
            limit,
            ..self.clone()
        }
    }

    /// `true` when the query is pagination only (no conditions, no sort).
    pub fn is_plain(&self) -> bool {
        self.conditions.is_empty() && self.sort_by.is_none() && self.sort_dir.is_none()
    }
}

/// One page of a list response: the items plus the backend's total count
/// for the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}
