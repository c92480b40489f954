use super::*;

fn vertical_packer(width: f64) -> Packer {
    let mut packer = Packer::new();
    packer.reset(width, f64::INFINITY, SortDirection::DownwardLeftToRight);
    packer
}

fn assert_merged(spaces: &[Rect]) {
    for (i, a) in spaces.iter().enumerate() {
        for (j, b) in spaces.iter().enumerate() {
            if i != j {
                assert!(!b.contains(a), "space {a:?} is contained by {b:?}");
            }
        }
    }
}

#[test]
fn first_fit_fills_the_top_row_before_splitting_further() {
    let mut packer = vertical_packer(200.0);

    let mut first = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(packer.pack(&mut first));
    assert_eq!((first.x, first.y), (0.0, 0.0));

    let mut second = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(packer.pack(&mut second));
    assert_eq!((second.x, second.y), (100.0, 0.0));
}

#[test]
fn downward_order_prefers_the_top_free_rect() {
    let mut packer = vertical_packer(200.0);
    let mut wide = Rect::new(0.0, 0.0, 150.0, 50.0);
    packer.pack(&mut wide);

    // remaining space: a 50-wide strip at the top right and everything
    // below y=50; a small rect goes top right first
    let mut small = Rect::new(0.0, 0.0, 40.0, 40.0);
    assert!(packer.pack(&mut small));
    assert_eq!((small.x, small.y), (150.0, 0.0));
}

#[test]
fn rightward_order_prefers_the_left_free_rect() {
    let mut packer = Packer::new();
    packer.reset(f64::INFINITY, 200.0, SortDirection::RightwardTopToBottom);

    let mut tall = Rect::new(0.0, 0.0, 50.0, 150.0);
    packer.pack(&mut tall);

    let mut small = Rect::new(0.0, 0.0, 40.0, 40.0);
    assert!(packer.pack(&mut small));
    assert_eq!((small.x, small.y), (0.0, 150.0));
}

#[test]
fn free_space_stays_merged_after_every_placement() {
    let mut packer = vertical_packer(300.0);
    for (w, h) in [(120.0, 40.0), (90.0, 80.0), (300.0, 10.0), (45.0, 45.0)] {
        let mut rect = Rect::new(0.0, 0.0, w, h);
        assert!(packer.pack(&mut rect));
        assert_merged(packer.spaces());
    }
}

#[test]
fn placed_carves_an_arbitrary_obstacle() {
    let mut packer = vertical_packer(200.0);
    packer.placed(Rect::new(0.0, 0.0, 100.0, 50.0));

    let mut rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(packer.pack(&mut rect));
    assert_eq!((rect.x, rect.y), (100.0, 0.0));
}

#[test]
fn add_space_makes_a_freed_region_packable_again() {
    let mut packer = vertical_packer(200.0);
    let mut a = Rect::new(0.0, 0.0, 100.0, 50.0);
    let mut b = Rect::new(0.0, 0.0, 100.0, 50.0);
    packer.pack(&mut a);
    packer.pack(&mut b);

    packer.add_space(Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_merged(packer.spaces());

    let mut c = Rect::new(0.0, 0.0, 100.0, 50.0);
    assert!(packer.pack(&mut c));
    assert_eq!((c.x, c.y), (0.0, 0.0));
}

#[test]
fn failed_pack_leaves_rect_and_free_space_untouched() {
    let mut packer = Packer::new();
    packer.reset(100.0, 100.0, SortDirection::DownwardLeftToRight);
    let before = packer.spaces().to_vec();

    let mut rect = Rect::new(0.0, 0.0, 500.0, 500.0);
    assert!(!packer.pack(&mut rect));
    assert_eq!((rect.x, rect.y), (0.0, 0.0));
    assert_eq!(packer.spaces(), &before[..]);
}

#[test]
fn strategy_packs_with_gutter_inflation() {
    let mut strategy = BinPack::new();
    strategy.reset_layout(&StrategyContext {
        container: Size::new(220.0, 600.0),
        cell_size: 100.0,
        column_width: None,
        row_height: None,
        gutter: 10.0,
        horizontal: false,
        fit_width: false,
    });

    let first = strategy.item_position(Size::new(100.0, 50.0));
    let second = strategy.item_position(Size::new(100.0, 50.0));
    assert_eq!(first, Point::new(0.0, 0.0));
    // 100 + 10 gutter footprint pushes the second item to x=110
    assert_eq!(second, Point::new(110.0, 0.0));
    // content trims the trailing gutter
    assert_eq!(strategy.content_size(), Size::new(220.0, 50.0));
}

#[test]
fn strategy_snaps_to_explicit_columns() {
    let mut strategy = BinPack::new();
    strategy.reset_layout(&StrategyContext {
        container: Size::new(300.0, 600.0),
        cell_size: 100.0,
        column_width: Some(100.0),
        row_height: None,
        gutter: 0.0,
        horizontal: false,
        fit_width: false,
    });

    // 70 wide snaps up to a full 100 column
    let first = strategy.item_position(Size::new(70.0, 50.0));
    let second = strategy.item_position(Size::new(70.0, 50.0));
    assert_eq!(first, Point::new(0.0, 0.0));
    assert_eq!(second, Point::new(100.0, 0.0));
}

#[test]
fn stamp_is_routed_around() {
    let mut strategy = BinPack::new();
    strategy.reset_layout(&StrategyContext {
        container: Size::new(200.0, 600.0),
        cell_size: 100.0,
        column_width: None,
        row_height: None,
        gutter: 0.0,
        horizontal: false,
        fit_width: false,
    });

    strategy.manage_stamp(&Rect::new(0.0, 0.0, 100.0, 50.0));
    let pos = strategy.item_position(Size::new(100.0, 50.0));
    assert_eq!(pos, Point::new(100.0, 0.0));
}

#[test]
fn horizontal_bin_grows_rightward() {
    let mut strategy = BinPack::new();
    strategy.reset_layout(&StrategyContext {
        container: Size::new(600.0, 100.0),
        cell_size: 100.0,
        column_width: None,
        row_height: None,
        gutter: 0.0,
        horizontal: true,
        fit_width: false,
    });

    let first = strategy.item_position(Size::new(50.0, 100.0));
    let second = strategy.item_position(Size::new(50.0, 100.0));
    assert_eq!(first, Point::new(0.0, 0.0));
    assert_eq!(second, Point::new(50.0, 0.0));
    assert_eq!(strategy.content_size(), Size::new(100.0, 100.0));
}
