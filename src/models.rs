use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of the area the host gives the visual, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whole-pixel surface size. Negative or non-finite sizes clamp to zero.
    pub fn pixels(&self) -> (u32, u32) {
        fn px(v: f64) -> u32 {
            if v.is_finite() && v > 0.0 {
                v.round().min(u32::MAX as f64) as u32
            } else {
                0
            }
        }
        (px(self.width), px(self.height))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Everything the host hands over on one update call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptions {
    #[serde(default)]
    pub data_views: Vec<DataView>,
    #[serde(default)]
    pub viewport: Viewport,
}

impl UpdateOptions {
    pub fn new(data_view: DataView, viewport: Viewport) -> Self {
        Self {
            data_views: vec![data_view],
            viewport,
        }
    }

    /// The visual only reads the first data view.
    pub fn data_view(&self) -> Option<&DataView> {
        self.data_views.first()
    }
}

/// Snapshot of the host's table, reduced to the categorical mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    #[serde(default)]
    pub metadata: DataViewMetadata,
    #[serde(default)]
    pub categorical: Option<DataViewCategorical>,
}

impl DataView {
    /// Build a data view with one axis column and one values column.
    pub fn categorical<C, V>(categories: C, values: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<PrimitiveValue>,
        V: IntoIterator,
        V::Item: Into<PrimitiveValue>,
    {
        Self {
            metadata: DataViewMetadata::default(),
            categorical: Some(DataViewCategorical {
                categories: vec![DataColumn::new("Axis", categories)],
                values: vec![DataColumn::new("Values", values)],
            }),
        }
    }

    /// Attach persisted formatting objects (the `metadata.objects` map).
    pub fn with_objects(mut self, objects: serde_json::Value) -> Self {
        self.metadata.objects = Some(objects);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewMetadata {
    #[serde(default)]
    pub columns: Vec<ColumnMetadata>,
    /// Formatting objects as persisted by the property pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewCategorical {
    #[serde(default)]
    pub categories: Vec<DataColumn>,
    #[serde(default)]
    pub values: Vec<DataColumn>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

/// One column of cells plus the field it came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DataColumn {
    #[serde(default)]
    pub source: ColumnMetadata,
    #[serde(default)]
    pub values: Vec<PrimitiveValue>,
}

impl DataColumn {
    pub fn new<I>(display_name: &str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PrimitiveValue>,
    {
        Self {
            source: ColumnMetadata {
                display_name: display_name.to_string(),
                query_name: None,
            },
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single table cell as the host serializes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::Null => write!(f, "null"),
            PrimitiveValue::Bool(b) => write!(f, "{b}"),
            PrimitiveValue::Number(n) => write!(f, "{n}"),
            PrimitiveValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for PrimitiveValue {
    fn from(v: f64) -> Self {
        PrimitiveValue::Number(v)
    }
}

impl From<i32> for PrimitiveValue {
    fn from(v: i32) -> Self {
        PrimitiveValue::Number(v as f64)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(v: &str) -> Self {
        PrimitiveValue::Text(v.to_string())
    }
}

impl From<String> for PrimitiveValue {
    fn from(v: String) -> Self {
        PrimitiveValue::Text(v)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(v: bool) -> Self {
        PrimitiveValue::Bool(v)
    }
}

impl<T: Into<PrimitiveValue>> From<Option<T>> for PrimitiveValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(PrimitiveValue::Null)
    }
}
