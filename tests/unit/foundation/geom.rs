use super::*;

#[test]
fn contains_is_inclusive_on_bounds() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0, 100.0)));
    assert!(outer.contains(&Rect::new(10.0, 10.0, 90.0, 90.0)));
    assert!(!outer.contains(&Rect::new(10.0, 10.0, 91.0, 80.0)));
    assert!(!outer.contains(&Rect::new(-1.0, 0.0, 50.0, 50.0)));
}

#[test]
fn contains_treats_zero_size_as_point() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(outer.contains(&Rect::new(100.0, 100.0, 0.0, 0.0)));
    assert!(!outer.contains(&Rect::new(100.1, 100.0, 0.0, 0.0)));
}

#[test]
fn overlaps_excludes_touching_edges() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(a.overlaps(&Rect::new(50.0, 50.0, 100.0, 100.0)));
    assert!(!a.overlaps(&Rect::new(100.0, 0.0, 50.0, 50.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 100.0, 50.0, 50.0)));
    assert!(!a.overlaps(&Rect::new(200.0, 200.0, 10.0, 10.0)));
}

#[test]
fn maximal_free_rects_returns_none_without_overlap() {
    let free = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(free.maximal_free_rects(&Rect::new(100.0, 0.0, 50.0, 50.0)), None);
}

#[test]
fn corner_occupant_leaves_two_strips() {
    let free = Rect::new(0.0, 0.0, 200.0, 200.0);
    let strips = free
        .maximal_free_rects(&Rect::new(0.0, 0.0, 80.0, 60.0))
        .unwrap();
    assert_eq!(
        strips,
        vec![
            Rect::new(80.0, 0.0, 120.0, 200.0),
            Rect::new(0.0, 60.0, 200.0, 140.0),
        ]
    );
}

#[test]
fn interior_occupant_leaves_four_overlapping_strips() {
    let free = Rect::new(0.0, 0.0, 100.0, 100.0);
    let strips = free
        .maximal_free_rects(&Rect::new(20.0, 30.0, 40.0, 20.0))
        .unwrap();
    assert_eq!(strips.len(), 4);
    // the strips cover the free rect's corners redundantly
    let top = strips[0];
    let left = strips[3];
    assert!(top.overlaps(&left));
}

#[test]
fn exact_cover_leaves_no_strips() {
    let free = Rect::new(10.0, 10.0, 50.0, 50.0);
    let strips = free
        .maximal_free_rects(&Rect::new(10.0, 10.0, 50.0, 50.0))
        .unwrap();
    assert!(strips.is_empty());
}

#[test]
fn can_fit_tolerates_sub_unit_oversize() {
    let free = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert!(free.can_fit(&Rect::new(0.0, 0.0, 100.5, 50.0)));
    assert!(!free.can_fit(&Rect::new(0.0, 0.0, 101.5, 50.0)));
    assert!(free.can_fit(&Rect::new(0.0, 0.0, 50.0, 100.5)));
    assert!(!free.can_fit(&Rect::new(0.0, 0.0, 50.0, 101.5)));
}

#[test]
fn can_fit_is_trivial_against_unbounded_axis() {
    let free = Rect::new(0.0, 0.0, 200.0, f64::INFINITY);
    assert!(free.can_fit(&Rect::new(0.0, 0.0, 200.0, 1.0e12)));
}

#[test]
fn transposed_swaps_axes() {
    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(r.transposed(), Rect::new(2.0, 1.0, 4.0, 3.0));
}
