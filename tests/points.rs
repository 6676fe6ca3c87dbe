use linechart::models::{DataColumn, DataView, DataViewCategorical, PrimitiveValue};
use linechart::points::{Category, CategoryKind, PointSet};
use linechart::VisualError;

fn cells<T: Into<PrimitiveValue> + Clone>(xs: &[T]) -> Vec<PrimitiveValue> {
    xs.iter().cloned().map(Into::into).collect()
}

#[test]
fn rows_sort_by_category_and_extent_covers_both_columns() {
    let set = PointSet::from_columns(&cells(&[2019, 2018, 2020]), &cells(&[10, 5, 20])).unwrap();

    let pairs: Vec<(f64, f64)> = set.rows().iter().map(|r| (r.x, r.value)).collect();
    assert_eq!(pairs, vec![(2018.0, 5.0), (2019.0, 10.0), (2020.0, 20.0)]);
    assert_eq!(set.rows()[0].category, Category::Number(2018.0));

    let e = set.extent().unwrap();
    assert_eq!((e.min_category, e.max_category), (2018.0, 2020.0));
    assert_eq!((e.min_value, e.max_value), (5.0, 20.0));
    assert_eq!(set.kind(), CategoryKind::Numeric);
    assert_eq!(set.dropped(), 0);
}

#[test]
fn sorted_regardless_of_input_order() {
    let cats = [5, 3, 9, 1, 7, 2];
    let vals = [50, 30, 90, 10, 70, 20];
    let set = PointSet::from_columns(&cells(&cats), &cells(&vals)).unwrap();
    let xs: Vec<f64> = set.rows().iter().map(|r| r.x).collect();
    assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    // pairing survives the sort
    assert!(set.rows().iter().all(|r| r.value == r.x * 10.0));
}

#[test]
fn mismatched_columns_truncate_to_shorter() {
    let set = PointSet::from_columns(&cells(&[1, 2, 3, 4]), &cells(&[10, 20])).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.dropped(), 2);

    let set = PointSet::from_columns(&cells(&[1]), &cells(&[10, 20, 30])).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.dropped(), 2);
}

#[test]
fn empty_and_invalid_tables_are_errors() {
    let none: Vec<PrimitiveValue> = Vec::new();
    assert!(matches!(
        PointSet::from_columns(&none, &none),
        Err(VisualError::EmptyTable)
    ));

    let cats = vec![PrimitiveValue::from(1), PrimitiveValue::from("east")];
    let err = PointSet::from_columns(&cats, &cells(&[1, 2])).unwrap_err();
    assert!(matches!(err, VisualError::InvalidCategory { index: 1, .. }));

    let vals = vec![PrimitiveValue::from(1), PrimitiveValue::Null];
    let err = PointSet::from_columns(&cells(&[1, 2]), &vals).unwrap_err();
    assert!(matches!(err, VisualError::InvalidValue { index: 1, .. }));
}

#[test]
fn numeric_text_values_are_accepted() {
    let set = PointSet::from_columns(&cells(&["3", "1"]), &cells(&["2.5", "-1"])).unwrap();
    let values: Vec<f64> = set.rows().iter().map(|r| r.value).collect();
    assert_eq!(values, vec![-1.0, 2.5]);
}

#[test]
fn date_categories_are_temporal() {
    let cats = cells(&["2020-03-01", "2020-01-01", "2020-02-01"]);
    let set = PointSet::from_columns(&cats, &cells(&[3, 1, 2])).unwrap();
    assert_eq!(set.kind(), CategoryKind::Temporal);
    let values: Vec<f64> = set.rows().iter().map(|r| r.value).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn data_view_without_columns_reports_which_is_missing() {
    let mut view = DataView::default();
    assert!(matches!(
        PointSet::from_data_view(&view),
        Err(VisualError::MissingCategories)
    ));

    view.categorical = Some(DataViewCategorical {
        categories: vec![DataColumn::new("Year", [2018, 2019])],
        values: Vec::new(),
    });
    assert!(matches!(
        PointSet::from_data_view(&view),
        Err(VisualError::MissingValues)
    ));
}
