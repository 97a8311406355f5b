#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod assets;
mod colors;
mod config_watcher;
mod constants;
mod resize;
mod ui;

use clap::Parser;
use config_watcher::ConfigWatcher;
use constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use resize::ResizeSubscription;
use responsive_layout::{LayoutConfig, LayoutEvent, LayoutState, ThemeMode, reduce};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "responsive-layout")]
#[command(about = "Responsive single-page layout shell", long_about = None)]
#[command(version)]
struct Cli {
    /// Layout config file (RON). Defaults to <config dir>/responsive-layout/layout.ron
    /// when that file exists, otherwise the built-in layout.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start in dark mode
    #[arg(long)]
    dark: bool,
    /// Start with the side menu collapsed
    #[arg(long)]
    collapsed: bool,
    /// Menu section selected at startup
    #[arg(long)]
    section: Option<String>,
    /// Do not reload the config file when it changes
    #[arg(long)]
    no_watch: bool,
    /// Initial window width
    #[arg(long, default_value_t = DEFAULT_WINDOW_WIDTH)]
    width: f32,
    /// Initial window height
    #[arg(long, default_value_t = DEFAULT_WINDOW_HEIGHT)]
    height: f32,
}

/// Main application state for the layout shell.
pub struct LayoutApp {
    config: LayoutConfig,
    state: LayoutState,
    resize: ResizeSubscription,
    config_watcher: Option<ConfigWatcher>,
    banner: Option<egui::ImageSource<'static>>,
    toasts: Toasts,
}

impl LayoutApp {
    fn new(cc: &eframe::CreationContext<'_>, cli: Cli) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        // The zoom factor carries the layout scale, so keep it away from Ctrl +/-
        cc.egui_ctx.options_mut(|o| o.zoom_with_keyboard = false);

        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 74.0))
            .direction(egui::Direction::TopDown);

        let config_path = cli.config.clone().or_else(user_config_path);
        let config = load_config(config_path.as_deref(), &mut toasts);
        cc.egui_ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(config.title.clone()));

        let mut state = LayoutState::new(config.resolve_section(cli.section.as_deref()));
        if cli.dark {
            state = reduce(state, LayoutEvent::ToggleTheme);
        }
        if cli.collapsed {
            state = reduce(state, LayoutEvent::ToggleMenu);
        }

        let config_watcher = match &config_path {
            Some(path) if !cli.no_watch => {
                let watcher = ConfigWatcher::new(path, cc.egui_ctx.clone());
                if watcher.is_none() {
                    log::info!("Config watcher not available - live reload disabled");
                }
                watcher
            }
            _ => None,
        };

        let banner = assets::banner_image();
        if banner.is_none() {
            log::warn!("Banner image missing from embedded assets");
        }

        Self {
            config,
            state,
            resize: ResizeSubscription::new(),
            config_watcher,
            banner,
            toasts,
        }
    }

    fn dispatch(&mut self, event: LayoutEvent) {
        log::debug!("{event:?}");
        self.state = reduce(self.state.clone(), event);
    }

    /// Pushes scale and theme from the layout state into egui.
    fn apply_state(&self, ctx: &egui::Context) {
        let scale = self.state.scale().value();
        if ctx.zoom_factor() != scale {
            log::info!(
                "Scaling layout to {scale} at {}px",
                self.state.width_pixels().unwrap_or_default()
            );
            ctx.set_zoom_factor(scale);
        }

        let theme = match self.state.theme {
            ThemeMode::Light => egui::Theme::Light,
            ThemeMode::Dark => egui::Theme::Dark,
        };
        if ctx.theme() != theme {
            ctx.set_theme(theme);
        }
    }

    /// Applies a reloaded config, keeping the current one if it is invalid.
    fn poll_config_reload(&mut self, ctx: &egui::Context) {
        let Some(watcher) = &mut self.config_watcher else {
            return;
        };
        let Some(result) = watcher.poll() else {
            return;
        };

        match result {
            Ok(config) => {
                log::info!("Reloaded layout config from {}", watcher.path().display());
                if config.title != self.config.title {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Title(config.title.clone()));
                }
                let section = config.resolve_section(Some(&self.state.active_section));
                self.config = config;
                if section != self.state.active_section {
                    self.dispatch(LayoutEvent::SelectSection(section));
                }
                self.toasts.add(Toast {
                    kind: ToastKind::Info,
                    text: "Layout config reloaded".into(),
                    options: ToastOptions::default().duration_in_seconds(3.0),
                    ..Default::default()
                });
            }
            Err(err) => {
                log::error!("Failed to reload layout config: {err}");
                show_error(&mut self.toasts, format!("Config not reloaded: {err}"));
            }
        }
    }
}

impl eframe::App for LayoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_config_reload(ctx);

        let mut events = Vec::new();
        events.extend(self.resize.poll(ctx));
        events.extend(ctx.input(keyboard_events));

        self.show_navbar(ctx, &mut events);
        self.show_footer(ctx);
        self.show_side_menu(ctx, &mut events);
        self.show_notifications(ctx);
        self.show_central_panel(ctx);

        for event in events {
            self.dispatch(event);
        }
        self.apply_state(ctx);

        self.toasts.show(ctx);
    }
}

/// Keyboard shortcuts: `M` toggles the side menu, `T` the theme.
fn keyboard_events(input: &egui::InputState) -> Vec<LayoutEvent> {
    let mut events = Vec::new();
    if input.key_pressed(egui::Key::M) {
        events.push(LayoutEvent::ToggleMenu);
    }
    if input.key_pressed(egui::Key::T) {
        events.push(LayoutEvent::ToggleTheme);
    }
    events
}

/// Per-user config file, if one has been created.
fn user_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?
        .join("responsive-layout")
        .join("layout.ron");
    path.exists().then_some(path)
}

/// Loads the config at `path`, falling back to the built-in layout on error.
fn load_config(path: Option<&std::path::Path>, toasts: &mut Toasts) -> LayoutConfig {
    if let Some(path) = path {
        match LayoutConfig::load(path) {
            Ok(config) => {
                log::info!("Loaded layout config from {}", path.display());
                return config;
            }
            Err(err) => {
                log::error!("{err}");
                show_error(toasts, err.to_string());
            }
        }
    }

    match LayoutConfig::builtin() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            show_error(toasts, err.to_string());
            LayoutConfig::default()
        }
    }
}

fn show_error(toasts: &mut Toasts, text: String) {
    toasts.add(Toast {
        kind: ToastKind::Error,
        text: text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(10.0)
            .show_icon(true),
        ..Default::default()
    });
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([cli.width, cli.height])
        .with_min_inner_size([240.0, 240.0]);
    match assets::load_icon() {
        Ok(icon) => viewport = viewport.with_icon(Arc::new(icon)),
        Err(err) => log::warn!("Window icon unavailable: {err}"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Responsive Layout",
        options,
        Box::new(|cc| Ok(Box::new(LayoutApp::new(cc, cli)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(keys: &[egui::Key]) -> Vec<LayoutEvent> {
        let raw_input = egui::RawInput {
            events: keys
                .iter()
                .map(|&key| egui::Event::Key {
                    key,
                    physical_key: None,
                    pressed: true,
                    repeat: false,
                    modifiers: egui::Modifiers::NONE,
                })
                .collect(),
            ..Default::default()
        };

        let ctx = egui::Context::default();
        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| events = ctx.input(keyboard_events));
        events
    }

    #[test]
    fn m_and_t_map_to_the_toggles() {
        assert_eq!(press(&[egui::Key::M]), [LayoutEvent::ToggleMenu]);
        assert_eq!(press(&[egui::Key::T]), [LayoutEvent::ToggleTheme]);
        assert_eq!(
            press(&[egui::Key::T, egui::Key::M]),
            [LayoutEvent::ToggleMenu, LayoutEvent::ToggleTheme]
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(press(&[]).is_empty());
        assert!(press(&[egui::Key::A, egui::Key::Space]).is_empty());
    }
}
