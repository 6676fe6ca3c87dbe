//! What the visual declares to the host: data roles, the categorical mapping,
//! and the formatting objects shown in the property pane.

use crate::settings::{DATA_POINT, LINE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleKind {
    Grouping,
    Measure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRole {
    pub name: String,
    pub display_name: String,
    pub kind: RoleKind,
}

/// Value type of a formatting property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyType {
    /// Solid color picker.
    Fill,
    Bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectProperty {
    pub display_name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingObject {
    pub display_name: String,
    pub properties: BTreeMap<String, ObjectProperty>,
}

/// Binds one grouping role to categories and one measure role to values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalMapping {
    pub categories: String,
    pub values: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub data_roles: Vec<DataRole>,
    pub data_view_mappings: Vec<CategoricalMapping>,
    pub objects: BTreeMap<String, FormattingObject>,
}

impl Capabilities {
    /// Capabilities of the line chart.
    pub fn line_chart() -> Self {
        let data_roles = vec![
            DataRole {
                name: "category".into(),
                display_name: "Axis".into(),
                kind: RoleKind::Grouping,
            },
            DataRole {
                name: "measure".into(),
                display_name: "Values".into(),
                kind: RoleKind::Measure,
            },
        ];

        let mut objects = BTreeMap::new();
        objects.insert(
            DATA_POINT.to_string(),
            FormattingObject {
                display_name: "Data colors".into(),
                properties: BTreeMap::from([
                    property("defaultColor", "Default color", PropertyType::Fill),
                    property("showAllDataPoints", "Show all", PropertyType::Bool),
                ]),
            },
        );
        objects.insert(
            LINE.to_string(),
            FormattingObject {
                display_name: "Line".into(),
                properties: BTreeMap::from([property(
                    "lineColor",
                    "Line color",
                    PropertyType::Fill,
                )]),
            },
        );

        Self {
            data_roles,
            data_view_mappings: vec![CategoricalMapping {
                categories: "category".into(),
                values: "measure".into(),
            }],
            objects,
        }
    }
}

fn property(
    name: &str,
    display_name: &str,
    property_type: PropertyType,
) -> (String, ObjectProperty) {
    (
        name.to_string(),
        ObjectProperty {
            display_name: display_name.to_string(),
            property_type,
        },
    )
}
