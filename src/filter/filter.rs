use serde::{Serialize, Deserialize};

/// A validated filter value in canonical form, with an optional label
/// shown instead of the value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilterValue {
    pub v:       String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// One filter clause; its values are OR'd together.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub values: Vec<FilterValue>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value:   String,
    pub display: String,
}

/// Active filter clauses, at most one per column, in insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Filters(Vec<Filter>);

impl FilterValue {
    pub fn new<S: Into<String>>(v: S) -> Self {
        Self {
            v:       v.into(),
            display: None,
        }
    }

    pub fn with_display<S: Into<String>>(v: S, display: Option<&str>) -> Self {
        Self {
            v:       v.into(),
            display: display.map(str::to_owned),
        }
    }

    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.v)
    }
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to the column's clause, creating it if needed. Values
    /// already present are ignored.
    pub fn add(&mut self, column: &str, value: FilterValue) {
        match self.0.iter_mut().find(|f| f.column == column) {
            Some(f) if f.values.iter().any(|v| v.v == value.v) => (),
            Some(f) => f.values.push(value),
            None    => self.0.push(Filter {
                column: column.to_owned(),
                values: vec![value],
            }),
        }
    }

    pub fn remove(&mut self, column: &str, v: &str) {
        for f in self.0.iter_mut().filter(|f| f.column == column) {
            f.values.retain(|value| value.v != v);
        }
        self.0.retain(|f| !f.values.is_empty());
    }

    pub fn clear(&mut self, column: &str) {
        self.0.retain(|f| f.column != column);
    }

    pub fn get(&self, column: &str) -> Option<&Filter> {
        self.0.iter().find(|f| f.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
