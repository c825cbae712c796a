//! Time wheel demo application.
//!
//! Shows a locale-aware time picker built from egui scroll areas. The window
//! features:
//! - One infinitely scrolling wheel per time field, ordered by the locale
//! - Locale and clock style selection, remembered between runs
//! - Loading a picker configuration file
//! - Arrow-key stepping of the focused wheel
//! - A log of the picker's notifications
//!
//! Usage: `timewheel-gui [config.json]`. Without an argument the config at
//! the platform's default location is used if it exists.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use eframe::egui;
use timewheel::{BuiltinLocales, PickerConfig, PickerLocale, TimePicker, WheelSpec};
use tracing_subscriber::EnvFilter;

mod gui;

use gui::controls::{render_controls, ControlAction};
use gui::egui_wheel::EguiWheel;
use gui::event_log::EventLog;
use gui::picker_panel::{render_wheels, DemoPicker, WHEEL_HEIGHT};
use gui::settings::PickerSettings;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timewheel=info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 520.0])
            .with_title("Time Wheel"),
        ..Default::default()
    };

    eframe::run_native(
        "Time Wheel",
        options,
        Box::new(move |cc| Ok(Box::new(TimeWheelApp::new(cc, config_path)))),
    )
}

/// Builds a picker showing the current local time.
fn build_picker(config: &PickerConfig, log: &EventLog) -> anyhow::Result<DemoPicker> {
    let mut picker = TimePicker::from_config(
        config,
        Local::now(),
        Box::new(BuiltinLocales),
        Box::new(|spec: &WheelSpec| Some(EguiWheel::new(spec, WHEEL_HEIGHT))),
    )
    .context("failed to build picker")?;
    picker
        .register_observer(Box::new(log.observer()))
        .map_err(|rejected| rejected.error)
        .context("failed to attach the event log")?;
    Ok(picker)
}

struct TimeWheelApp {
    config: PickerConfig,
    picker: Option<DemoPicker>,
    log: EventLog,
    /// Wheel driven by the arrow keys
    focused: usize,
    error_message: Option<String>,
}

impl TimeWheelApp {
    /// Loads the configuration named on the command line, or the default
    /// one overlaid with the choices saved by the last run.
    fn new(cc: &eframe::CreationContext, config_path: Option<PathBuf>) -> Self {
        let mut error_message = None;
        let config = match config_path {
            Some(path) => PickerConfig::load(&path).unwrap_or_else(|err| {
                error_message = Some(err.to_string());
                PickerConfig::default()
            }),
            None => {
                let mut config = PickerConfig::load_or_default(PickerConfig::default_path().as_deref());
                if let Some(settings) = PickerSettings::load(cc.storage) {
                    settings.apply_to(&mut config);
                }
                config
            }
        };

        let mut app = Self {
            config,
            picker: None,
            log: EventLog::new(),
            focused: 0,
            error_message,
        };
        app.rebuild();
        app
    }

    fn rebuild(&mut self) {
        match build_picker(&self.config, &self.log) {
            Ok(picker) => {
                self.focused = self.focused.min(picker.wheels().len().saturating_sub(1));
                self.log.push(format!(
                    "{} wheels from pattern {:?}",
                    picker.wheels().len(),
                    picker.coordinator().pattern()
                ));
                self.picker = Some(picker);
            }
            Err(err) => {
                tracing::error!("{:#}", err);
                self.error_message = Some(format!("{:#}", err));
                self.picker = None;
            }
        }
    }

    fn handle_control_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::LocaleSelected(tag) => {
                self.config.locale = tag;
                if let Some(picker) = self.picker.as_mut() {
                    if let Err(err) = picker.set_locale(PickerLocale::parse(&self.config.locale)) {
                        self.error_message = Some(err.to_string());
                    }
                }
            }
            ControlAction::ClockSelected(clock) => {
                self.config.format = clock.into();
                if let Some(picker) = self.picker.as_mut() {
                    if let Err(err) = picker.set_format(self.config.format.clone()) {
                        self.error_message = Some(err.to_string());
                    }
                }
            }
            ControlAction::NowRequested => {
                if let Some(picker) = self.picker.as_mut() {
                    let changes = picker.set_time(Local::now(), true);
                    self.log.push(format!("set to now, {} wheels moved", changes.len()));
                }
            }
            ControlAction::OpenConfigRequested(path) => match PickerConfig::load(&path) {
                Ok(config) => {
                    self.config = config;
                    self.error_message = None;
                    self.rebuild();
                }
                Err(err) => self.error_message = Some(err.to_string()),
            },
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        let wheel_count = picker.wheels().len();
        if wheel_count == 0 {
            return;
        }

        let (left, right, up, down) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
            )
        });

        if left {
            self.focused = (self.focused + wheel_count - 1) % wheel_count;
        }
        if right {
            self.focused = (self.focused + 1) % wheel_count;
        }
        if up {
            picker.step_selection(self.focused, -1);
        }
        if down {
            picker.step_selection(self.focused, 1);
        }
        if up || down {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for TimeWheelApp {
    /// Remembers the locale and clock style for the next run.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        PickerSettings::from_config(&self.config).save(storage);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.log.drain();
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            if let Some(action) = render_controls(ui, &self.config) {
                self.handle_control_action(action);
            }
        });

        egui::TopBottomPanel::bottom("event_log")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong("Events");
                    if ui.small_button("Clear").clicked() {
                        self.log.clear();
                    }
                });
                egui::ScrollArea::vertical()
                    .id_salt("event_log_scroll")
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in self.log.lines() {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.error_message {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }

            let Some(picker) = self.picker.as_mut() else {
                return;
            };

            let time = picker.time();
            ui.heading(time.format("%H:%M").to_string());
            ui.label(time.format("%A, %e %B %Y").to_string());
            ui.add_space(12.0);

            if picker.wheels().is_empty() {
                ui.label("The format has no hour or minute fields.");
                return;
            }
            render_wheels(ui, picker, self.focused);
        });
    }
}
