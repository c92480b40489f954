use super::*;

fn ctx(container_width: f64, cell: f64, gutter: f64) -> StrategyContext {
    StrategyContext {
        container: Size::new(container_width, 600.0),
        cell_size: cell,
        column_width: Some(cell),
        row_height: None,
        gutter,
        horizontal: false,
        fit_width: false,
    }
}

#[test]
fn column_count_divides_evenly() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    assert_eq!(masonry.column_count(), 3);
    assert_eq!(masonry.column_heights(), &[0.0, 0.0, 0.0]);
}

#[test]
fn column_count_rounds_up_within_one_unit() {
    let mut masonry = Masonry::new();
    // 299.5 / 100: the leftover gap is 0.5, within one unit of a full
    // column, so a sub-pixel measurement cannot drop the third column
    masonry.reset_layout(&ctx(299.5, 100.0, 0.0));
    assert_eq!(masonry.column_count(), 3);

    // a gap of 20 floors
    masonry.reset_layout(&ctx(280.0, 100.0, 0.0));
    assert_eq!(masonry.column_count(), 2);
}

#[test]
fn column_count_accounts_for_gutter() {
    let mut masonry = Masonry::new();
    // effective cell 110; (320 + 10) / 110 = 3
    masonry.reset_layout(&ctx(320.0, 100.0, 10.0));
    assert_eq!(masonry.column_count(), 3);
}

#[test]
fn items_balance_onto_the_shortest_column() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));

    let first = masonry.item_position(Size::new(100.0, 120.0));
    assert_eq!(first, Point::new(0.0, 0.0));
    assert_eq!(masonry.column_heights(), &[120.0, 0.0, 0.0]);

    // ties break leftmost: columns 1 and 2 are both empty
    let second = masonry.item_position(Size::new(100.0, 80.0));
    assert_eq!(second, Point::new(100.0, 0.0));
    assert_eq!(masonry.column_heights(), &[120.0, 80.0, 0.0]);
}

#[test]
fn wide_items_use_the_group_maximum() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    masonry.item_position(Size::new(100.0, 120.0));
    masonry.item_position(Size::new(100.0, 80.0));

    // span 2: groups max at [120, 80]; the (1,2) group wins
    let wide = masonry.item_position(Size::new(200.0, 50.0));
    assert_eq!(wide, Point::new(100.0, 80.0));
    assert_eq!(masonry.column_heights(), &[120.0, 130.0, 130.0]);
}

#[test]
fn column_span_rounds_within_one_unit_else_ceils() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));

    // 100.5 wide: remainder 0.5 rounds down to a single column
    masonry.item_position(Size::new(100.5, 10.0));
    assert_eq!(masonry.column_heights(), &[10.0, 0.0, 0.0]);

    // 150 wide: remainder 50 ceils to two columns
    masonry.item_position(Size::new(150.0, 10.0));
    assert_eq!(masonry.column_heights(), &[10.0, 10.0, 10.0]);
}

#[test]
fn column_span_is_clamped_to_the_column_count() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    let pos = masonry.item_position(Size::new(900.0, 10.0));
    assert_eq!(pos, Point::new(0.0, 0.0));
    assert_eq!(masonry.column_heights(), &[10.0, 10.0, 10.0]);
}

#[test]
fn unreset_strategy_places_at_origin_without_panicking() {
    let mut masonry = Masonry::new();
    assert_eq!(masonry.column_count(), 0);
    let pos = masonry.item_position(Size::new(100.0, 50.0));
    assert_eq!(pos, Point::new(0.0, 0.0));
    assert!(masonry.column_heights().is_empty());
}

#[test]
fn heights_never_decrease_within_a_pass() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    let mut previous = masonry.column_heights().to_vec();
    for (w, h) in [(100.0, 30.0), (200.0, 20.0), (100.0, 50.0), (300.0, 10.0)] {
        masonry.item_position(Size::new(w, h));
        let current = masonry.column_heights().to_vec();
        for (before, after) in previous.iter().zip(&current) {
            assert!(after >= before);
        }
        previous = current;
    }
}

#[test]
fn stamps_raise_the_columns_they_touch() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    masonry.manage_stamp(&Rect::new(50.0, 0.0, 100.0, 40.0));
    // the stamp spans columns 0 and 1
    assert_eq!(masonry.column_heights(), &[40.0, 40.0, 0.0]);

    let pos = masonry.item_position(Size::new(100.0, 30.0));
    assert_eq!(pos, Point::new(200.0, 0.0));
}

#[test]
fn stamp_ending_on_a_boundary_spares_the_next_column() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    masonry.manage_stamp(&Rect::new(0.0, 0.0, 100.0, 40.0));
    assert_eq!(masonry.column_heights(), &[40.0, 0.0, 0.0]);
}

#[test]
fn content_height_is_the_tallest_column() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&ctx(300.0, 100.0, 0.0));
    masonry.item_position(Size::new(100.0, 120.0));
    masonry.item_position(Size::new(100.0, 80.0));
    assert_eq!(masonry.content_size(), Size::new(300.0, 120.0));
}

#[test]
fn fit_width_trims_trailing_unused_columns() {
    let mut masonry = Masonry::new();
    let mut c = ctx(300.0, 100.0, 0.0);
    c.fit_width = true;
    masonry.reset_layout(&c);
    masonry.item_position(Size::new(100.0, 50.0));
    assert_eq!(masonry.content_size(), Size::new(100.0, 50.0));
}

#[test]
fn horizontal_axis_balances_rows() {
    let mut masonry = Masonry::new();
    masonry.reset_layout(&StrategyContext {
        container: Size::new(600.0, 300.0),
        cell_size: 100.0,
        column_width: None,
        row_height: Some(100.0),
        gutter: 0.0,
        horizontal: true,
        fit_width: false,
    });
    assert_eq!(masonry.column_count(), 3);

    let first = masonry.item_position(Size::new(120.0, 100.0));
    let second = masonry.item_position(Size::new(80.0, 100.0));
    assert_eq!(first, Point::new(0.0, 0.0));
    assert_eq!(second, Point::new(0.0, 100.0));
    assert_eq!(masonry.column_heights(), &[120.0, 80.0, 0.0]);
    assert_eq!(masonry.content_size(), Size::new(120.0, 300.0));
}
