//! Control strip above the wheels.

use std::path::PathBuf;

use eframe::egui;
use timewheel::{BuiltinLocales, ClockHourFormat, FormatSpec, PickerConfig};

/// Actions requested from the control strip.
pub enum ControlAction {
    LocaleSelected(String),
    ClockSelected(ClockHourFormat),
    NowRequested,
    OpenConfigRequested(PathBuf),
}

fn clock_label(clock: ClockHourFormat) -> &'static str {
    match clock {
        ClockHourFormat::LocalePreferred => "Locale preferred",
        ClockHourFormat::Twelve => "12-hour",
        ClockHourFormat::TwentyFour => "24-hour",
    }
}

/// Renders the locale and clock selectors and the action buttons.
///
/// # Returns
/// The action requested this frame, if any
pub fn render_controls(ui: &mut egui::Ui, config: &PickerConfig) -> Option<ControlAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        egui::ComboBox::from_label("Locale")
            .selected_text(config.locale.as_str())
            .show_ui(ui, |ui| {
                for tag in BuiltinLocales.known_locales() {
                    if ui.selectable_label(config.locale == tag, tag).clicked() {
                        action = Some(ControlAction::LocaleSelected(tag.to_string()));
                    }
                }
            });

        let current_clock = match &config.format {
            FormatSpec::Clock(clock) => Some(*clock),
            _ => None,
        };
        egui::ComboBox::from_label("Clock")
            .selected_text(current_clock.map(clock_label).unwrap_or("Custom"))
            .show_ui(ui, |ui| {
                for clock in [
                    ClockHourFormat::LocalePreferred,
                    ClockHourFormat::Twelve,
                    ClockHourFormat::TwentyFour,
                ] {
                    if ui
                        .selectable_label(current_clock == Some(clock), clock_label(clock))
                        .clicked()
                    {
                        action = Some(ControlAction::ClockSelected(clock));
                    }
                }
            });

        ui.separator();

        if ui.button("Now").clicked() {
            action = Some(ControlAction::NowRequested);
        }

        if ui.button("Open config…").clicked() {
            let mut dialog = rfd::FileDialog::new().add_filter("Picker config", &["json"]);
            if let Some(dir) = PickerConfig::default_path().and_then(|p| p.parent().map(|d| d.to_path_buf())) {
                dialog = dialog.set_directory(dir);
            }
            if let Some(path) = dialog.pick_file() {
                action = Some(ControlAction::OpenConfigRequested(path));
            }
        }
    });

    action
}
