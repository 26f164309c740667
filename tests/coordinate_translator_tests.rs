use canvas_rs::core::{translator, GlobalPixel, Level, LocalCoord, SectionAddress, ZoomPath};

fn level(value: u8) -> Level {
    Level::new(value).expect("valid level")
}

fn local(x: u8, y: u8) -> LocalCoord {
    LocalCoord::new(x, y).expect("valid local coordinate")
}

fn pixel(x: u16, y: u16) -> GlobalPixel {
    GlobalPixel::new(x, y).expect("valid pixel")
}

#[test]
fn pixel_span_follows_power_of_three_table() {
    let expected = [(1, 243), (2, 81), (3, 27), (4, 9), (5, 3), (6, 1)];
    for (l, span) in expected {
        assert_eq!(level(l).pixel_span(), span, "span at level {l}");
    }
}

#[test]
fn pixel_base_is_three_times_span() {
    assert_eq!(level(4).pixel_base(), 27);
    assert_eq!(level(5).pixel_base(), 9);
    assert_eq!(level(6).pixel_base(), 3);
    for l in 1..=6 {
        assert_eq!(level(l).pixel_base(), 3 * level(l).pixel_span());
    }
}

#[test]
fn section_address_accumulates_base_three_digits() {
    let mut path = ZoomPath::new();
    path.set(level(1), local(0, 0)).expect("set level 1");
    assert_eq!(
        translator::section_address(&path, level(2)),
        Some(SectionAddress::new(0, 0))
    );

    path.set(level(2), local(2, 1)).expect("set level 2");
    assert_eq!(
        translator::section_address(&path, level(3)),
        Some(SectionAddress::new(2, 1))
    );
}

#[test]
fn section_address_matches_deep_worked_example() {
    // level1 (1,0), level2 (0,2), level3 (1,1) => (1*9 + 0*3 + 1, 0*9 + 2*3 + 1)
    let mut path = ZoomPath::new();
    path.set(level(1), local(1, 0)).expect("set level 1");
    path.set(level(2), local(0, 2)).expect("set level 2");
    path.set(level(3), local(1, 1)).expect("set level 3");

    assert_eq!(
        translator::section_address(&path, level(4)),
        Some(SectionAddress::new(10, 7))
    );
}

#[test]
fn section_address_is_none_for_root_and_gaps() {
    let mut path = ZoomPath::new();
    assert_eq!(translator::section_address(&path, level(1)), None);
    assert_eq!(translator::section_address(&path, level(2)), None);

    path.set(level(1), local(1, 1)).expect("set level 1");
    assert_eq!(translator::section_address(&path, level(3)), None);
    assert!(translator::section_address(&path, level(2)).is_some());
}

#[test]
fn section_address_is_idempotent() {
    let mut path = ZoomPath::new();
    for l in 1..=5 {
        path.set(level(l), local(2, 0)).expect("set slot");
    }
    let first = translator::section_address(&path, level(6));
    let second = translator::section_address(&path, level(6));
    assert_eq!(first, second);
    assert_eq!(first, Some(SectionAddress::new(242, 0)));
}

#[test]
fn terminal_pixel_scales_parent_by_grid_side() {
    let p = translator::terminal_pixel(SectionAddress::new(1, 2), local(0, 1))
        .expect("terminal pixel");
    assert_eq!((p.x(), p.y()), (3, 7));

    let corner = translator::terminal_pixel(SectionAddress::new(242, 242), local(2, 2))
        .expect("corner pixel");
    assert_eq!((corner.x(), corner.y()), (728, 728));
}

#[test]
fn cell_pixel_uses_per_level_base() {
    // Drawing mode at level 5 paints on a 9x9 grid.
    let p = translator::cell_pixel(level(5), SectionAddress::new(3, 1), 4, 8)
        .expect("level 5 cell pixel");
    assert_eq!((p.x(), p.y()), (3 * 9 + 4, 1 * 9 + 8));

    // Drawing mode at level 4 paints on a 27x27 grid.
    let p = translator::cell_pixel(level(4), SectionAddress::new(2, 0), 26, 0)
        .expect("level 4 cell pixel");
    assert_eq!((p.x(), p.y()), (2 * 27 + 26, 0));
}

#[test]
fn cell_pixel_rejects_out_of_grid_cells() {
    assert!(translator::cell_pixel(level(6), SectionAddress::new(0, 0), 3, 0).is_err());
    assert!(translator::cell_pixel(level(5), SectionAddress::new(0, 0), 0, 9).is_err());
}

#[test]
fn cell_pixel_rejects_out_of_range_section() {
    assert!(translator::cell_pixel(level(6), SectionAddress::new(243, 0), 0, 0).is_err());
}

#[test]
fn view_to_pixel_inverts_cell_rendering_size() {
    // 729 view units over a 3-cell terminal grid: 243 units per cell.
    let p = translator::view_to_pixel(level(6), SectionAddress::new(0, 0), 10.0, 480.0, 729.0)
        .expect("view to pixel");
    assert_eq!((p.x(), p.y()), (0, 1));

    let p = translator::view_to_pixel(level(6), SectionAddress::new(5, 7), 700.0, 250.0, 729.0)
        .expect("view to pixel");
    assert_eq!((p.x(), p.y()), (5 * 3 + 2, 7 * 3 + 1));
}

#[test]
fn view_to_pixel_clamps_to_view_edges() {
    let p = translator::view_to_pixel(level(6), SectionAddress::new(0, 0), -40.0, 9_999.0, 729.0)
        .expect("clamped sample");
    assert_eq!((p.x(), p.y()), (0, 2));
}

#[test]
fn view_to_pixel_rejects_degenerate_input() {
    let parent = SectionAddress::new(0, 0);
    assert!(translator::view_to_pixel(level(6), parent, 1.0, 1.0, 0.0).is_err());
    assert!(translator::view_to_pixel(level(6), parent, 1.0, 1.0, f64::NAN).is_err());
    assert!(translator::view_to_pixel(level(6), parent, f64::INFINITY, 1.0, 729.0).is_err());
}

#[test]
fn chebyshev_is_max_axis_distance() {
    assert_eq!(translator::chebyshev(pixel(3, 3), pixel(3, 3)), 0);
    assert_eq!(translator::chebyshev(pixel(0, 0), pixel(1, 1)), 1);
    assert_eq!(translator::chebyshev(pixel(10, 2), pixel(4, 5)), 6);
}

#[test]
fn interpolate_fills_gaps_without_holes() {
    let steps = translator::interpolate(pixel(0, 0), pixel(4, 2));
    assert_eq!(steps.len(), 4);
    assert_eq!(*steps.last().expect("nonempty"), pixel(4, 2));

    let mut prev = pixel(0, 0);
    for &step in &steps {
        assert!(translator::chebyshev(prev, step) <= 1, "hole in drag line");
        prev = step;
    }
}

#[test]
fn interpolate_is_empty_for_identical_endpoints() {
    assert!(translator::interpolate(pixel(7, 7), pixel(7, 7)).is_empty());
}

#[test]
fn interpolate_handles_reverse_direction() {
    let steps = translator::interpolate(pixel(10, 10), pixel(7, 10));
    assert_eq!(steps.len(), 3);
    assert_eq!(*steps.last().expect("nonempty"), pixel(7, 10));
}
