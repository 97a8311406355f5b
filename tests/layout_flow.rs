use responsive_layout::{
    LayoutConfig, LayoutEvent, LayoutState, ScaleFactor, ThemeMode, reduce, resolve,
};

fn mounted(width_pixels: u32) -> (LayoutConfig, LayoutState) {
    let config = LayoutConfig::builtin().unwrap();
    let state = LayoutState::new(config.resolve_section(None));
    let state = reduce(state, LayoutEvent::Resized { width_pixels });
    (config, state)
}

#[test]
fn mount_applies_the_initial_width() {
    let (config, state) = mounted(1280);

    assert_eq!(state.scale(), ScaleFactor::Large);
    assert_eq!(config.section_label(&state.active_section), Some("Dashboard"));
    assert!(state.visibility().nav_links);
    assert!(state.visibility().notifications);
}

#[test]
fn shrinking_the_window_walks_down_the_breakpoints() {
    let (_, mut state) = mounted(1920);
    assert_eq!(state.scale().value(), 1.0);

    let steps = [(1200, 0.9), (900, 1.0), (750, 0.8), (650, 0.75), (320, 0.5)];
    for (width, expected) in steps {
        state = reduce(state, LayoutEvent::Resized { width_pixels: width });
        assert_eq!(state.scale().value(), expected, "width {width}");
    }

    assert!(!state.visibility().nav_links);
    assert!(state.visibility().footer_stacked);
}

#[test]
fn interactions_do_not_disturb_each_other() {
    let (config, state) = mounted(1024);

    let events = [
        LayoutEvent::ToggleTheme,
        LayoutEvent::ToggleMenu,
        LayoutEvent::SelectSection("messages".to_owned()),
        LayoutEvent::Resized { width_pixels: 700 },
    ];
    let state = events.into_iter().fold(state, reduce);

    assert_eq!(state.theme, ThemeMode::Dark);
    assert!(!state.menu_open);
    assert_eq!(config.section_label(&state.active_section), Some("Messages"));
    assert_eq!(state.scale(), resolve(700));
    assert_eq!(config.themes.palette(state.theme), &config.themes.dark);
}
