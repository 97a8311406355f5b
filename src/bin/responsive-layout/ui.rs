//! UI rendering methods for the layout application.
//!
//! Rendering only reads `self.state`; interactions are pushed onto `events`
//! and applied by the caller once the frame is laid out.

use crate::LayoutApp;
use crate::colors::{self, color};
use crate::constants::{
    CARD_RADIUS, CONTENT_PADDING, NAVBAR_HEIGHT, NOTIFICATIONS_WIDTH, PANEL_PADDING,
    SIDE_MENU_WIDTH, SMALL_RADIUS,
};
use eframe::egui::{self, RichText};
use responsive_layout::{LayoutEvent, Link, Palette};

impl LayoutApp {
    /// Renders the top navigation bar: menu toggle, title, theme toggle and links.
    pub fn show_navbar(&self, ctx: &egui::Context, events: &mut Vec<LayoutEvent>) {
        let palette = self.palette();
        let visibility = self.state.visibility();

        egui::TopBottomPanel::top("navbar")
            .exact_height(NAVBAR_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(color(palette.primary))
                    .inner_margin(egui::Margin::symmetric(PANEL_PADDING, 0)),
            )
            .show(ctx, |ui| {
                bar_button_visuals(ui, palette);
                ui.horizontal_centered(|ui| {
                    if bar_button(ui, "☰")
                        .on_hover_text("Toggle menu (M)")
                        .clicked()
                    {
                        events.push(LayoutEvent::ToggleMenu);
                    }
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new(&self.config.title)
                            .size(20.0)
                            .strong()
                            .color(colors::BAR_TEXT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if visibility.nav_links {
                            for link in self.config.nav_links.iter().rev() {
                                link_label(ui, link, colors::NAV_LINK_HOVER);
                                ui.add_space(8.0);
                            }
                        }

                        let theme_icon = if self.state.is_dark() { "☀" } else { "🌙" };
                        if bar_button(ui, theme_icon)
                            .on_hover_text("Toggle theme (T)")
                            .clicked()
                        {
                            events.push(LayoutEvent::ToggleTheme);
                        }
                    });
                });
            });
    }

    /// Renders the collapsible side menu.
    pub fn show_side_menu(&self, ctx: &egui::Context, events: &mut Vec<LayoutEvent>) {
        let palette = self.palette();
        let hover = if self.state.is_dark() {
            colors::MENU_HOVER_DARK
        } else {
            colors::MENU_HOVER_LIGHT
        };

        egui::SidePanel::left("side_menu")
            .exact_width(SIDE_MENU_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(color(palette.secondary))
                    .inner_margin(PANEL_PADDING),
            )
            .show_animated(ctx, self.state.menu_open, |ui| {
                ui.visuals_mut().override_text_color = Some(color(palette.text));
                ui.visuals_mut().selection.bg_fill = color(palette.selected);
                ui.visuals_mut().widgets.hovered.weak_bg_fill = hover;

                ui.strong("Menu");
                ui.add_space(12.0);

                ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                    for item in &self.config.menu {
                        let selected = item.id == self.state.active_section;
                        let text = RichText::new(format!("{}  {}", item.icon, item.label));
                        if ui.selectable_label(selected, text).clicked() && !selected {
                            events.push(LayoutEvent::SelectSection(item.id.clone()));
                        }
                        ui.add_space(4.0);
                    }
                });
            });
    }

    /// Renders the notification panel on wide viewports.
    pub fn show_notifications(&self, ctx: &egui::Context) {
        if !self.state.visibility().notifications {
            return;
        }

        let palette = self.palette();
        egui::SidePanel::right("notifications")
            .exact_width(NOTIFICATIONS_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::new()
                    .fill(color(palette.secondary))
                    .inner_margin(PANEL_PADDING),
            )
            .show(ctx, |ui| {
                ui.label(RichText::new("Notifications").strong().color(color(palette.text)));
                ui.add_space(12.0);

                if self.config.notifications.is_empty() {
                    ui.label(RichText::new("Nothing new").color(color(palette.muted)));
                }

                for notification in &self.config.notifications {
                    egui::Frame::new()
                        .fill(color(palette.surface))
                        .corner_radius(SMALL_RADIUS)
                        .inner_margin(egui::Margin::same(12))
                        .shadow(colors::CARD_SHADOW)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(&notification.message).color(color(palette.text)));
                            ui.label(
                                RichText::new(&notification.age)
                                    .small()
                                    .color(color(palette.muted)),
                            );
                        });
                    ui.add_space(16.0);
                }
            });
    }

    /// Renders the footer with copyright and links; stacked on narrow viewports.
    pub fn show_footer(&self, ctx: &egui::Context) {
        let palette = self.palette();
        let stacked = self.state.visibility().footer_stacked;

        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::new()
                    .fill(color(palette.primary))
                    .inner_margin(CONTENT_PADDING),
            )
            .show(ctx, |ui| {
                let copyright = RichText::new(&self.config.copyright).color(colors::BAR_TEXT);

                if stacked {
                    ui.vertical_centered(|ui| {
                        ui.label(copyright);
                        ui.add_space(16.0);
                        ui.horizontal(|ui| {
                            for link in &self.config.footer_links {
                                link_label(ui, link, colors::FOOTER_LINK_HOVER);
                                ui.add_space(8.0);
                            }
                        });
                    });
                } else {
                    ui.horizontal(|ui| {
                        ui.label(copyright);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            for link in self.config.footer_links.iter().rev() {
                                link_label(ui, link, colors::FOOTER_LINK_HOVER);
                                ui.add_space(8.0);
                            }
                        });
                    });
                }
            });
    }

    /// Renders the central panel containing the content card.
    pub fn show_central_panel(&self, ctx: &egui::Context) {
        let palette = self.palette();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(color(palette.background))
                    .inner_margin(CONTENT_PADDING),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Frame::new()
                        .fill(color(palette.surface))
                        .corner_radius(CARD_RADIUS)
                        .inner_margin(CONTENT_PADDING)
                        .shadow(colors::CARD_SHADOW)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.visuals_mut().override_text_color = Some(color(palette.text));
                            self.show_content(ui);
                        });
                });
            });
    }

    fn show_content(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new(&self.config.welcome_heading).size(24.0).strong());
        ui.add_space(16.0);

        if let Some(banner) = &self.banner {
            let width = ui.available_width();
            ui.add(
                egui::Image::new(banner.clone())
                    .fit_to_exact_size(egui::vec2(width, width / 3.0))
                    .corner_radius(CARD_RADIUS),
            );
            ui.add_space(24.0);
        }

        ui.label(&self.config.welcome_text);
        ui.add_space(16.0);
        ui.label(format!("Current theme: {} mode", self.state.theme.label()));
        ui.label(format!(
            "Active section: {}",
            self.config
                .section_label(&self.state.active_section)
                .unwrap_or_default()
        ));
    }

    fn palette(&self) -> &Palette {
        self.config.themes.palette(self.state.theme)
    }
}

/// Styles nav bar buttons: transparent until hovered, then the hover color.
fn bar_button_visuals(ui: &mut egui::Ui, palette: &Palette) {
    let widgets = &mut ui.visuals_mut().widgets;
    widgets.inactive.weak_bg_fill = egui::Color32::TRANSPARENT;
    widgets.inactive.bg_stroke = egui::Stroke::NONE;
    widgets.hovered.weak_bg_fill = color(palette.hover);
    widgets.hovered.bg_stroke = egui::Stroke::NONE;
    widgets.active.weak_bg_fill = color(palette.hover);
    widgets.active.bg_stroke = egui::Stroke::NONE;
}

fn bar_button(ui: &mut egui::Ui, icon: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(icon).size(22.0).color(colors::BAR_TEXT))
            .min_size(egui::vec2(40.0, 40.0)),
    )
}

/// Renders a link as clickable text; opens its url in the browser if it has one.
fn link_label(ui: &mut egui::Ui, link: &Link, hover_color: egui::Color32) {
    let font_id = egui::TextStyle::Body.resolve(ui.style());
    let galley = ui
        .painter()
        .layout_no_wrap(link.label.clone(), font_id, egui::Color32::PLACEHOLDER);
    let (rect, response) = ui.allocate_exact_size(galley.size(), egui::Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    let text_color = if response.hovered() {
        hover_color
    } else {
        colors::BAR_TEXT
    };
    ui.painter().galley(rect.min, galley, text_color);

    if response.clicked() {
        match &link.url {
            Some(url) => {
                if let Err(err) = open::that(url) {
                    log::warn!("Failed to open {url}: {err}");
                }
            }
            None => log::info!("Link '{}' has no target", link.label),
        }
    }
}
