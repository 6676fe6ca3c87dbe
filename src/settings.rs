//! Typed formatting settings.
//!
//! Settings are read from the data view's `metadata.objects` on every update.
//! Missing objects or properties fall back to the defaults below; unknown
//! properties are ignored.
//!
//! | object      | property            | default   |
//! |-------------|---------------------|-----------|
//! | `dataPoint` | `defaultColor`      | `#01B8AA` |
//! | `dataPoint` | `showAllDataPoints` | `true`    |
//! | `line`      | `lineColor`         | `#374649` |

use crate::error::Result;
use crate::models::DataView;
use crate::style::Rgb;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Object name for marker settings.
pub const DATA_POINT: &str = "dataPoint";
/// Object name for line settings.
pub const LINE: &str = "line";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualSettings {
    pub data_point: DataPointSettings,
    pub line: LineSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataPointSettings {
    /// Marker fill.
    pub default_color: Rgb,
    /// Markers are drawn only when set.
    pub show_all_data_points: bool,
}

impl Default for DataPointSettings {
    fn default() -> Self {
        Self {
            default_color: Rgb::new(0x01, 0xB8, 0xAA),
            show_all_data_points: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineSettings {
    /// Stroke of the connecting path.
    pub line_color: Rgb,
}

impl Default for LineSettings {
    fn default() -> Self {
        Self {
            line_color: Rgb::new(0x37, 0x46, 0x49),
        }
    }
}

/// One entry of the property pane: an object name and its current values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    pub object_name: String,
    /// Always empty; the line has no per-point selectors.
    pub selector: Option<Value>,
    pub properties: Map<String, Value>,
}

impl VisualSettings {
    /// Read settings from a data view. No view, or no persisted objects, yields the defaults.
    pub fn parse(view: Option<&DataView>) -> Result<Self> {
        match view.and_then(|v| v.metadata.objects.as_ref()) {
            Some(objects) => Self::from_objects(objects),
            None => Ok(Self::default()),
        }
    }

    /// Read settings from a `metadata.objects` map.
    pub fn from_objects(objects: &Value) -> Result<Self> {
        if objects.is_null() {
            return Ok(Self::default());
        }
        Ok(Self::deserialize(objects)?)
    }

    /// Properties of `object_name` the user may edit. Unknown objects yield nothing.
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        let properties = match object_name {
            DATA_POINT => object_properties(&self.data_point),
            LINE => object_properties(&self.line),
            _ => return Vec::new(),
        };
        vec![VisualObjectInstance {
            object_name: object_name.to_string(),
            selector: None,
            properties,
        }]
    }
}

fn object_properties<T: Serialize>(object: &T) -> Map<String, Value> {
    match serde_json::to_value(object) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
