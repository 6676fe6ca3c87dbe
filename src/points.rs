//! Rows, the sorted point set, and the extent the scales are built from.
//!
//! The two host columns are zipped positionally. A category must land on the
//! linear axis, so it has to be a number, a date, or text that reads as one of
//! those; values must be finite numbers.

use crate::error::{Result, VisualError};
use crate::models::{DataView, PrimitiveValue};
use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;

/// Axis value of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum Category {
    Number(f64),
    Date(DateTime<Utc>),
    /// Text that parsed as a number, kept verbatim.
    Text(String),
}

/// How the x-axis labels are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Numeric,
    Temporal,
}

impl Category {
    /// Coerce a host cell into a category plus its position on the axis.
    pub fn from_primitive(value: &PrimitiveValue) -> Option<(Self, f64)> {
        match value {
            PrimitiveValue::Number(n) if n.is_finite() => Some((Category::Number(*n), *n)),
            PrimitiveValue::Text(s) => {
                let trimmed = s.trim();
                if let Ok(n) = trimmed.parse::<f64>() {
                    return n.is_finite().then(|| (Category::Text(s.clone()), n));
                }
                parse_date(trimmed).map(|d| (Category::Date(d), d.timestamp_millis() as f64))
            }
            _ => None,
        }
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Category::Date(_))
    }
}

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(d) = DateTime::parse_from_rfc3339(s) {
        return Some(d.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// One plotted (category, value) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub category: Category,
    /// Position of `category` on the horizontal axis.
    pub x: f64,
    pub value: f64,
}

impl Row {
    /// Total order on the axis position; equal positions compare equal.
    pub fn cmp_category(&self, other: &Row) -> Ordering {
        self.x.total_cmp(&other.x)
    }
}

/// Min/max of both columns over the current point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_category: f64,
    pub max_category: f64,
    pub min_value: f64,
    pub max_value: f64,
}

/// Rows sorted ascending by category, rebuilt on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    rows: Vec<Row>,
    kind: CategoryKind,
    dropped: usize,
}

impl PointSet {
    /// Zip the first category column with the first values column.
    pub fn from_data_view(view: &DataView) -> Result<Self> {
        let categorical = view
            .categorical
            .as_ref()
            .ok_or(VisualError::MissingCategories)?;
        let categories = categorical
            .categories
            .first()
            .ok_or(VisualError::MissingCategories)?;
        let values = categorical
            .values
            .first()
            .ok_or(VisualError::MissingValues)?;
        Self::from_columns(&categories.values, &values.values)
    }

    /// Zip two parallel columns. The shorter column decides the row count.
    pub fn from_columns(categories: &[PrimitiveValue], values: &[PrimitiveValue]) -> Result<Self> {
        let len = categories.len().min(values.len());
        let dropped = categories.len().max(values.len()) - len;
        if len == 0 {
            return Err(VisualError::EmptyTable);
        }

        let mut rows = Vec::with_capacity(len);
        for (index, (c, v)) in categories.iter().zip(values).enumerate() {
            let (category, x) = Category::from_primitive(c)
                .ok_or_else(|| VisualError::invalid_category(index, c.to_string()))?;
            let value = numeric_value(v)
                .ok_or_else(|| VisualError::invalid_value(index, v.to_string()))?;
            rows.push(Row { category, x, value });
        }
        // Stable, so equal categories keep their input order.
        rows.sort_by(Row::cmp_category);

        let kind = if rows.iter().all(|r| r.category.is_temporal()) {
            CategoryKind::Temporal
        } else {
            CategoryKind::Numeric
        };
        Ok(Self {
            rows,
            kind,
            dropped,
        })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// Rows lost because the columns had different lengths.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn extent(&self) -> Option<Extent> {
        let first = self.rows.first()?;
        let init = Extent {
            min_category: first.x,
            max_category: first.x,
            min_value: first.value,
            max_value: first.value,
        };
        Some(self.rows.iter().fold(init, |e, r| Extent {
            min_category: e.min_category.min(r.x),
            max_category: e.max_category.max(r.x),
            min_value: e.min_value.min(r.value),
            max_value: e.max_value.max(r.value),
        }))
    }
}

fn numeric_value(v: &PrimitiveValue) -> Option<f64> {
    let n = match v {
        PrimitiveValue::Number(n) => *n,
        PrimitiveValue::Text(s) => s.trim().parse::<f64>().ok()?,
        PrimitiveValue::Null | PrimitiveValue::Bool(_) => return None,
    };
    n.is_finite().then_some(n)
}
