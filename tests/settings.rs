use linechart::capabilities::Capabilities;
use linechart::settings::{DATA_POINT, LINE, VisualSettings};
use linechart::style::Rgb;
use linechart::{DataView, VisualError};
use serde_json::json;

#[test]
fn defaults_when_nothing_is_persisted() {
    let s = VisualSettings::parse(None).unwrap();
    assert_eq!(s, VisualSettings::default());
    assert_eq!(s.data_point.default_color, Rgb::new(0x01, 0xB8, 0xAA));
    assert!(s.data_point.show_all_data_points);
    assert_eq!(s.line.line_color, Rgb::new(0x37, 0x46, 0x49));

    let view = DataView::categorical([1], [1]);
    assert_eq!(VisualSettings::parse(Some(&view)).unwrap(), s);
}

#[test]
fn parses_fill_objects_and_partial_objects() {
    let view = DataView::categorical([1], [1]).with_objects(json!({
        "dataPoint": {
            "defaultColor": { "solid": { "color": "#FF0000" } },
            "showAllDataPoints": false
        },
        "line": { "lineColor": "#00f" },
        "legend": { "show": true }
    }));
    let s = VisualSettings::parse(Some(&view)).unwrap();
    assert_eq!(s.data_point.default_color, Rgb::new(255, 0, 0));
    assert!(!s.data_point.show_all_data_points);
    assert_eq!(s.line.line_color, Rgb::new(0, 0, 255));

    let partial = VisualSettings::from_objects(&json!({ "line": { "lineColor": "#123456" } })).unwrap();
    assert_eq!(partial.data_point, VisualSettings::default().data_point);
    assert_eq!(partial.line.line_color, Rgb::new(0x12, 0x34, 0x56));
}

#[test]
fn invalid_values_are_validation_faults() {
    let bad_color = json!({ "line": { "lineColor": "teal" } });
    assert!(matches!(
        VisualSettings::from_objects(&bad_color),
        Err(VisualError::InvalidSettings(_))
    ));

    let bad_flag = json!({ "dataPoint": { "showAllDataPoints": "yes" } });
    assert!(matches!(
        VisualSettings::from_objects(&bad_flag),
        Err(VisualError::InvalidSettings(_))
    ));
}

#[test]
fn enumerates_editable_properties_as_hex() {
    let s = VisualSettings::default();

    let dp = s.enumerate_object_instances(DATA_POINT);
    assert_eq!(dp.len(), 1);
    assert_eq!(dp[0].object_name, "dataPoint");
    assert_eq!(dp[0].properties["defaultColor"], json!("#01B8AA"));
    assert_eq!(dp[0].properties["showAllDataPoints"], json!(true));

    let line = s.enumerate_object_instances(LINE);
    assert_eq!(line[0].properties["lineColor"], json!("#374649"));

    assert!(s.enumerate_object_instances("legend").is_empty());
}

#[test]
fn every_declared_object_is_enumerable() {
    let caps = Capabilities::line_chart();
    let settings = VisualSettings::default();
    for (name, object) in &caps.objects {
        let instances = settings.enumerate_object_instances(name);
        assert_eq!(instances.len(), 1, "object {name}");
        for property in object.properties.keys() {
            assert!(
                instances[0].properties.contains_key(property),
                "{name}.{property} not enumerated"
            );
        }
    }
}

#[test]
fn capabilities_serialize_in_host_shape() {
    let v = serde_json::to_value(Capabilities::line_chart()).unwrap();
    assert_eq!(v["dataRoles"][0]["kind"], json!("Grouping"));
    assert_eq!(v["dataRoles"][1]["kind"], json!("Measure"));
    assert_eq!(v["objects"]["dataPoint"]["properties"]["defaultColor"]["type"], json!("fill"));
    assert_eq!(v["objects"]["line"]["properties"]["lineColor"]["type"], json!("fill"));
}
