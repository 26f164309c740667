use canvas_rs::core::{
    translator, GlobalPixel, Level, LocalCoord, NavigationState, SectionAddress, ZoomPath,
};
use proptest::prelude::*;

fn local_coord() -> impl Strategy<Value = LocalCoord> {
    (0u8..3, 0u8..3).prop_map(|(x, y)| LocalCoord::new(x, y).expect("valid local coordinate"))
}

fn global_pixel() -> impl Strategy<Value = GlobalPixel> {
    (0u16..729, 0u16..729).prop_map(|(x, y)| GlobalPixel::new(x, y).expect("valid pixel"))
}

proptest! {
    #[test]
    fn section_address_stays_in_range_for_its_level(
        locals in prop::collection::vec(local_coord(), 1..=5)
    ) {
        let mut path = ZoomPath::new();
        for (i, local) in locals.iter().enumerate() {
            let level = Level::new(i as u8 + 1).expect("valid level");
            path.set(level, *local).expect("set slot");
        }

        let target = Level::new(locals.len() as u8 + 1).expect("valid level");
        let address = translator::section_address(&path, target).expect("contiguous path");
        prop_assert!(address.in_range_for(target));
    }

    #[test]
    fn zoom_in_then_go_back_restores_fetch_params(
        prefix in prop::collection::vec(local_coord(), 0..=4),
        last in local_coord()
    ) {
        let mut nav = NavigationState::new();
        for local in &prefix {
            nav.zoom_in(*local).expect("zoom in");
        }
        let before = nav.fetch_params();

        nav.zoom_in(last).expect("zoom in");
        let restored = nav.go_back().expect("go back");

        prop_assert_eq!(restored, before);
        prop_assert_eq!(nav.fetch_params(), before);
        prop_assert_eq!(nav.history_len(), usize::from(nav.level().get() - 1));
    }

    #[test]
    fn terminal_pixel_appends_the_final_base_three_digit(
        locals in prop::collection::vec(local_coord(), 5),
        child in local_coord()
    ) {
        let mut path = ZoomPath::new();
        for (i, local) in locals.iter().enumerate() {
            let level = Level::new(i as u8 + 1).expect("valid level");
            path.set(level, *local).expect("set slot");
        }
        let parent = translator::section_address(&path, Level::TERMINAL)
            .expect("contiguous path");

        let terminal = translator::terminal_pixel(parent, child).expect("terminal pixel");
        prop_assert_eq!(u32::from(terminal.x()), parent.x * 3 + u32::from(child.x()));
        prop_assert_eq!(u32::from(terminal.y()), parent.y * 3 + u32::from(child.y()));
    }

    #[test]
    fn interpolation_has_no_holes_and_ends_at_the_target(
        from in global_pixel(),
        to in global_pixel()
    ) {
        let steps = translator::interpolate(from, to);
        let distance = translator::chebyshev(from, to);
        prop_assert_eq!(steps.len(), usize::from(distance));

        if distance > 0 {
            prop_assert_eq!(*steps.last().expect("nonempty"), to);
        }
        let mut prev = from;
        for &step in &steps {
            prop_assert!(translator::chebyshev(prev, step) <= 1);
            prev = step;
        }
    }

    #[test]
    fn view_samples_always_map_inside_the_parent_region(
        cell in (0u32..243, 0u32..243),
        view_x in -2_000.0f64..2_000.0,
        view_y in -2_000.0f64..2_000.0
    ) {
        let parent = SectionAddress::new(cell.0, cell.1);
        let pixel = translator::view_to_pixel(Level::TERMINAL, parent, view_x, view_y, 729.0)
            .expect("clamped sample");
        prop_assert!(u32::from(pixel.x()) / 3 == cell.0);
        prop_assert!(u32::from(pixel.y()) / 3 == cell.1);
    }
}
