//! Record filtering.
//!
//! This module provides a unified way to narrow the visible record set.
//! A [`FilterSpec`] combines one global free-text constraint (matched
//! against title, category, and brand simultaneously) with per-field
//! constraints; [`FilterEngine`] owns the active spec and evaluates it
//! against a record snapshot.
//!
//! Evaluation is conjunctive: a record is visible only when every active
//! constraint accepts it. A null or empty constraint is always satisfied.
//! Comparisons are case-sensitive.
//!
//! Filtering is a pure projection over the snapshot it is handed — nothing
//! is cached, so the result can never go stale under concurrent edits.

use crate::model::Product;

/// Comparison semantics for a single constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Substring containment.
    Contains,
    /// Prefix match.
    StartsWith,
    /// Membership in a set of accepted values ("is any of").
    In,
}

/// The value a constraint compares against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    AnyOf(Vec<String>),
}

/// A single filter condition: a match mode plus an optional value.
///
/// A constraint with no value (or an empty text / empty set) is inactive
/// and satisfied by every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub value: Option<FilterValue>,
    pub mode: MatchMode,
}

impl Constraint {
    pub fn contains(value: Option<String>) -> Self {
        Self {
            value: value.map(FilterValue::Text),
            mode: MatchMode::Contains,
        }
    }

    pub fn starts_with(value: Option<String>) -> Self {
        Self {
            value: value.map(FilterValue::Text),
            mode: MatchMode::StartsWith,
        }
    }

    pub fn any_of(values: Option<Vec<String>>) -> Self {
        Self {
            value: values.map(FilterValue::AnyOf),
            mode: MatchMode::In,
        }
    }

    /// Whether this constraint actually narrows anything.
    pub fn is_active(&self) -> bool {
        match &self.value {
            None => false,
            Some(FilterValue::Text(t)) => !t.is_empty(),
            Some(FilterValue::AnyOf(vs)) => !vs.is_empty(),
        }
    }

    /// Evaluate against a field value. An absent field fails any active
    /// constraint; a mode/value mismatch never matches.
    pub fn matches(&self, field: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(field) = field else {
            return false;
        };

        match (&self.mode, self.value.as_ref()) {
            (MatchMode::Contains, Some(FilterValue::Text(t))) => field.contains(t.as_str()),
            (MatchMode::StartsWith, Some(FilterValue::Text(t))) => field.starts_with(t.as_str()),
            (MatchMode::In, Some(FilterValue::AnyOf(vs))) => vs.iter().any(|v| v == field),
            _ => false, // Mode and value shape disagree
        }
    }
}

/// How multiple constraints on one field combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

/// The constraints attached to a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFilter {
    pub operator: Operator,
    pub constraints: Vec<Constraint>,
}

impl FieldFilter {
    pub fn new(operator: Operator, constraints: Vec<Constraint>) -> Self {
        Self {
            operator,
            constraints,
        }
    }

    pub fn matches(&self, field: Option<&str>) -> bool {
        match self.operator {
            Operator::And => self.constraints.iter().all(|c| c.matches(field)),
            Operator::Or => {
                let mut any_active = false;
                for c in &self.constraints {
                    if c.is_active() {
                        any_active = true;
                        if c.matches(field) {
                            return true;
                        }
                    }
                }
                !any_active
            }
        }
    }
}

/// The full set of user-specified filter constraints for the table view.
///
/// Always fully populated: clearing restores the baseline rather than
/// removing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    /// Free-text constraint applied across title, category, and brand.
    pub global: Constraint,
    pub title: FieldFilter,
    pub category: FieldFilter,
    pub brand: Constraint,
}

impl FilterSpec {
    /// The all-null baseline: every constraint present but inactive.
    pub fn baseline() -> Self {
        Self {
            global: Constraint::contains(None),
            title: FieldFilter::new(Operator::And, vec![Constraint::starts_with(None)]),
            category: FieldFilter::new(Operator::And, vec![Constraint::starts_with(None)]),
            brand: Constraint::any_of(None),
        }
    }

    /// Evaluate every active constraint conjunctively against one record.
    pub fn matches(&self, record: &Product) -> bool {
        let category = record.category.map(|c| c.as_str());
        let brand = record.brand.as_deref();

        let global_ok = !self.global.is_active()
            || self.global.matches(Some(&record.title))
            || self.global.matches(category)
            || self.global.matches(brand);

        global_ok
            && self.title.matches(Some(&record.title))
            && self.category.matches(category)
            && self.brand.matches(brand)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Projects the records matching `spec`, preserving input order.
pub fn filter<'a>(records: &'a [Product], spec: &FilterSpec) -> Vec<&'a Product> {
    records.iter().filter(|r| spec.matches(r)).collect()
}

/// Owns the currently-active [`FilterSpec`] and applies it to snapshots.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    spec: FilterSpec,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Current global search text, empty when unset.
    pub fn global_text(&self) -> &str {
        match &self.spec.global.value {
            Some(FilterValue::Text(t)) => t,
            _ => "",
        }
    }

    pub fn set_global_text(&mut self, text: &str) {
        self.spec.global = Constraint::contains(Some(text.to_string()));
    }

    pub fn set_title_prefix(&mut self, prefix: Option<String>) {
        self.spec.title = FieldFilter::new(Operator::And, vec![Constraint::starts_with(prefix)]);
    }

    pub fn set_category_prefix(&mut self, prefix: Option<String>) {
        self.spec.category = FieldFilter::new(Operator::And, vec![Constraint::starts_with(prefix)]);
    }

    pub fn set_brands(&mut self, brands: Option<Vec<String>>) {
        self.spec.brand = Constraint::any_of(brands);
    }

    /// Restore the baseline spec and clear the global text.
    pub fn reset(&mut self) {
        self.spec = FilterSpec::baseline();
    }

    /// Apply the active spec to a snapshot, preserving order.
    pub fn filter<'a>(&self, records: &'a [Product]) -> Vec<&'a Product> {
        filter(records, &self.spec)
    }
}
