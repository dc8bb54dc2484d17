use std::cmp::Ordering;
use std::fmt;
use crate::compare::Compare;
use crate::error::{invalid, Result};
use crate::filter::{FilterKind, FilterOption, FilterValue};
use crate::flow::Record;
use crate::value::{Value, ValueType};
use super::Getter;

/// A compiled column: presentation metadata plus its bound value and
/// comparison functions.
pub struct Column {
    pub id:           String,
    pub name:         String,
    pub group:        Option<String>,
    pub tooltip:      Option<String>,
    pub doc_url:      Option<String>,
    pub filter:       Option<FilterKind>,
    pub quick_filter: Option<String>,
    pub kind:         ValueType,
    pub width:        u32,
    pub visible:      bool,
    pub(super) value: Getter,
    pub(super) order: Compare,
}

impl Column {
    pub fn value(&self, r: &Record) -> Option<Value> {
        (self.value)(r)
    }

    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.compare_values(self.value(a).as_ref(), self.value(b).as_ref())
    }

    pub fn compare_values(&self, a: Option<&Value>, b: Option<&Value>) -> Ordering {
        (self.order)(a, b)
    }

    pub fn validate(&self, raw: &str) -> Result<FilterValue> {
        match self.filter {
            Some(kind) => kind.validate(raw),
            None       => invalid(format!("column {} is not filterable", self.id)),
        }
    }

    pub fn accept(&self, raw: &str, max: usize) -> Result<FilterValue> {
        match self.filter {
            Some(kind) => kind.accept(raw, max),
            None       => invalid(format!("column {} is not filterable", self.id)),
        }
    }

    pub fn complete(&self, input: &str, max: usize) -> Vec<FilterOption> {
        self.filter.map(|kind| kind.complete(input, max)).unwrap_or_default()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Column")
            .field("id",     &self.id)
            .field("kind",   &self.kind)
            .field("filter", &self.filter)
            .finish()
    }
}
