//! Fanfold showcase application.
//!
//! Wires the three fanfold widgets into a small eframe app:
//! - a gradient title label
//! - a pill "Share" button whose icon swaps when clicked
//! - a fan-fold menu of five icon slots; clicking a slot selects it and
//!   triggers a partial close over slots 1..=3
//!
//! Theme and menu configuration persist across sessions via eframe storage.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use fanfold::{
    FanMenu, GradientLabel, MenuAdapter, MenuConfig, MenuStatus, Orientation, PillButton,
    SequenceKind, SequenceObserver, SlotStyle, SlotVisual, ThemeColors, ThemeManager,
};

const THEME_KEY: &str = "theme_preference";
const MENU_CONFIG_KEY: &str = "menu_config";

/// The sub-range closed when a menu slot is clicked. A demo choice, passed to
/// the menu per click rather than baked into the widget.
const CLICK_CLOSE_RANGE: (isize, isize) = (1, 3);

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0])
            .with_title("Fanfold Showcase"),
        ..Default::default()
    };

    eframe::run_native(
        "Fanfold Showcase",
        options,
        Box::new(|cc| Ok(Box::new(ShowcaseApp::new(cc)))),
    )
}

/// One menu entry: an icon plus its normal and clicked fill colors.
struct ShowcaseItem {
    icon: &'static str,
    normal_color: egui::Color32,
    clicked_color: egui::Color32,
}

/// Menu adapter over a fixed list of showcase items.
struct ShowcaseAdapter {
    items: Vec<ShowcaseItem>,
    icon_color: egui::Color32,
}

impl ShowcaseAdapter {
    fn new(colors: &ThemeColors) -> Self {
        let icons = ["\u{1F3E0}", "\u{2B50}", "\u{1F4C1}", "\u{1F514}", "\u{2699}"];
        let items = icons
            .iter()
            .map(|&icon| ShowcaseItem {
                icon,
                normal_color: colors.slot_normal,
                clicked_color: colors.slot_clicked,
            })
            .collect();
        Self {
            items,
            icon_color: colors.slot_icon,
        }
    }
}

impl MenuAdapter for ShowcaseAdapter {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn build_slot(&mut self, position: usize) -> SlotVisual {
        let item = &self.items[position];
        SlotVisual {
            icon: item.icon.to_string(),
            fill: item.normal_color,
            icon_color: self.icon_color,
        }
    }

    fn restyle(&mut self, position: usize, style: SlotStyle, visual: &mut SlotVisual) {
        let item = &self.items[position];
        visual.fill = match style {
            SlotStyle::Selected => item.clicked_color,
            SlotStyle::Normal => item.normal_color,
        };
    }
}

/// Observer that keeps the latest sequence notification for the status bar.
struct EventLog {
    last: Rc<RefCell<String>>,
}

impl SequenceObserver for EventLog {
    fn on_sequence_start(&mut self, kind: SequenceKind) {
        *self.last.borrow_mut() = format!("{:?} sequence started", kind);
    }

    fn on_sequence_end(&mut self, kind: SequenceKind) {
        *self.last.borrow_mut() = format!("{:?} sequence finished", kind);
    }
}

struct ShowcaseApp {
    theme_manager: ThemeManager,
    menu_config: MenuConfig,
    menu: FanMenu,
    last_sequence_event: Rc<RefCell<String>>,
    share_icon_swapped: bool,
}

impl ShowcaseApp {
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = load_theme_from_storage(cc.storage);
        let mut theme_manager = ThemeManager::new();
        // Unknown stored names fall back to the manager's default
        let _ = theme_manager.set_current_theme(&theme_name);

        let menu_config: MenuConfig = load_setting_or(cc.storage, MENU_CONFIG_KEY, MenuConfig::default());

        let last_sequence_event = Rc::new(RefCell::new(String::from("no sequence yet")));
        let menu = build_menu(&theme_manager, menu_config.clone(), &last_sequence_event);

        Self {
            theme_manager,
            menu_config,
            menu,
            last_sequence_event,
            share_icon_swapped: false,
        }
    }

    /// Rebuilds the menu after a construction-time option (orientation,
    /// reverse) or the theme changed.
    fn rebuild_menu(&mut self) {
        self.menu = build_menu(
            &self.theme_manager,
            self.menu_config.clone(),
            &self.last_sequence_event,
        );
    }
}

fn build_menu(
    theme_manager: &ThemeManager,
    config: MenuConfig,
    last_event: &Rc<RefCell<String>>,
) -> FanMenu {
    let colors = &theme_manager.current_theme().colors;
    let adapter = ShowcaseAdapter::new(colors);
    let mut menu = FanMenu::new(config, Box::new(adapter));
    menu.set_observer(Box::new(EventLog {
        last: last_event.clone(),
    }));
    // Default selection at startup, programmatic path
    menu.make_slot_selected(0);
    menu
}

impl eframe::App for ShowcaseApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.theme_manager.current_theme().name.clone());
        save_setting(storage, MENU_CONFIG_KEY, &self.menu_config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_current_theme(ctx, &self.theme_manager);
        let colors = self.theme_manager.current_theme().colors.clone();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    GradientLabel::new("Fanfold")
                        .colors(colors.label_gradient.0, colors.label_gradient.1)
                        .text_size(28.0),
                );
                ui.separator();
                self.theme_selector(ui);
                ui.separator();
                self.menu_controls(ui);
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Menu: {:?}", self.menu.status()));
                ui.separator();
                ui.label(self.last_sequence_event.borrow().clone());
                ui.separator();
                match self.menu.selection().current_selected() {
                    Some(position) => ui.label(format!("Selected slot: {}", position)),
                    None => ui.label("No slot selected"),
                };
            });
        });

        egui::SidePanel::left("menu_panel")
            .default_width(90.0)
            .show(ctx, |ui| {
                ui.heading("Menu");
                ui.separator();
                if let Some(position) = self.menu.show(ui) {
                    log::info!("slot {} clicked", position);
                    self.menu
                        .notify_slot_clicked(position, Some(CLICK_CLOSE_RANGE));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(
                    GradientLabel::new("Custom-drawn widgets for egui")
                        .colors(colors.text, colors.text_dim)
                        .text_size(18.0),
                );
                ui.add_space(24.0);

                let icon = if self.share_icon_swapped {
                    "\u{1F504}"
                } else {
                    "\u{1F517}"
                };
                let share = ui.add(
                    PillButton::new("Share")
                        .colors(colors.button_gradient.0, colors.button_gradient.1)
                        .border(colors.button_border, 1.0)
                        .text_color(colors.button_text)
                        .icon(icon),
                );
                if share.clicked() {
                    log::info!("share button clicked");
                    self.share_icon_swapped = !self.share_icon_swapped;
                }

                ui.add_space(24.0);
                ui.add(
                    PillButton::new("Round")
                        .colors(colors.button_gradient.1, colors.button_gradient.0)
                        .fixed_size(egui::vec2(48.0, 64.0)),
                );
            });
        });
    }
}

impl ShowcaseApp {
    fn theme_selector(&mut self, ui: &mut egui::Ui) {
        let current = self.theme_manager.current_theme().name.clone();
        let mut selected = current.clone();
        egui::ComboBox::from_label("Theme")
            .selected_text(&current)
            .show_ui(ui, |ui| {
                for name in self
                    .theme_manager
                    .list_themes()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
                {
                    ui.selectable_value(&mut selected, name.clone(), name);
                }
            });
        if selected != current && self.theme_manager.set_current_theme(&selected).is_ok() {
            self.rebuild_menu();
        }
    }

    fn menu_controls(&mut self, ui: &mut egui::Ui) {
        if ui.button("Open").clicked() {
            self.menu.open();
        }
        if ui.button("Close").clicked() {
            self.menu.close();
        }

        let mut horizontal = self.menu_config.orientation == Orientation::Horizontal;
        if ui.checkbox(&mut horizontal, "Horizontal").changed() {
            self.menu_config.orientation = if horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            self.rebuild_menu();
        }

        let mut reverse = self.menu_config.reverse;
        if ui.checkbox(&mut reverse, "Reverse").changed() {
            self.menu_config.reverse = reverse;
            self.rebuild_menu();
        }

        if self.menu.status() == MenuStatus::Animating {
            ui.spinner();
        }
    }
}

// ===== Settings persistence (stored as JSON strings) =====

fn load_theme_from_storage(storage: Option<&dyn eframe::Storage>) -> String {
    storage
        .and_then(|storage| storage.get_string(THEME_KEY))
        .unwrap_or_else(|| "Dark".to_string())
}

fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
where
    T: for<'de> Deserialize<'de>,
{
    if let Some(storage) = storage {
        if let Some(json_str) = storage.get_string(key) {
            if let Ok(value) = serde_json::from_str(&json_str) {
                return value;
            }
        }
    }
    default
}

fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
where
    T: Serialize,
{
    if let Ok(json_str) = serde_json::to_string(value) {
        storage.set_string(key, json_str);
        storage.flush();
    }
}

fn apply_current_theme(ctx: &egui::Context, theme_manager: &ThemeManager) {
    let theme = theme_manager.current_theme();
    let mut visuals = if theme.name == "Light" {
        egui::Visuals::light()
    } else {
        egui::Visuals::dark()
    };
    theme_manager.apply_theme(theme, &mut visuals);
    ctx.set_visuals(visuals);
}
