use linechart::scale::{LinearScale, range, ticks, value_tick_step, value_ticks};

#[test]
fn linear_scale_maps_and_inverts() {
    let s = LinearScale::new((5.0, 20.0), (540.0, 30.0));
    assert_eq!(s.apply(5.0), 540.0);
    assert_eq!(s.apply(20.0), 30.0);
    assert!((s.apply(10.0) - 370.0).abs() < 1e-9);
    assert!((s.invert(370.0) - 10.0).abs() < 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_middle() {
    let s = LinearScale::new((7.0, 7.0), (540.0, 30.0));
    assert_eq!(s.apply(7.0), 285.0);
    assert_eq!(s.apply(100.0), 285.0);
}

#[test]
fn nice_ticks_for_year_domain() {
    assert_eq!(
        ticks(2018.0, 2020.0, 3),
        vec![2018.0, 2018.5, 2019.0, 2019.5, 2020.0]
    );
    assert_eq!(ticks(0.0, 100.0, 3), vec![0.0, 50.0, 100.0]);
    assert_eq!(ticks(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    assert_eq!(ticks(3.0, 3.0, 3), vec![3.0]);
    assert!(ticks(0.0, 1.0, 0).is_empty());
}

#[test]
fn value_ticks_follow_fixed_step() {
    assert_eq!(value_tick_step(5.0, 20.0), 6.5);
    assert_eq!(value_ticks(5.0, 20.0), vec![5.0, 11.5, 18.0]);
    assert_eq!(value_ticks(0.0, 1000.0), range(0.0, 1000.0, 499.0));
    assert_eq!(value_ticks(0.0, 1000.0).len(), 3);
}

#[test]
fn degenerate_value_range_has_no_ticks() {
    assert!(value_tick_step(7.0, 7.0) <= 0.0);
    assert!(value_ticks(7.0, 7.0).is_empty());
    // a spread of exactly 2 gives a zero step
    assert!(value_ticks(1.0, 3.0).is_empty());
}

#[test]
fn runaway_tick_counts_are_dropped() {
    // step 0.00005 would need ~40k ticks
    assert!(value_ticks(0.0, 2.0001).is_empty());
}
