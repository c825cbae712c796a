//! Wheel rendering and gesture forwarding.
//!
//! Each wheel is an egui `ScrollArea` showing only its visible rows. After
//! the areas are drawn, every wheel's frame output is turned into gestures
//! which are forwarded to the picker by wheel position.

use chrono::{DateTime, Local};
use eframe::egui;
use egui::scroll_area::ScrollBarVisibility;
use egui::{Align2, FontId, Rect, ScrollArea, Sense};
use timewheel::{ScrollWidget, TimePicker};

use super::egui_wheel::{EguiWheel, WheelGesture};

pub type DemoPicker = TimePicker<DateTime<Local>, EguiWheel>;

/// Height of every wheel in points.
pub const WHEEL_HEIGHT: f64 = 220.0;

const TITLE_FONT_SIZE: f32 = 18.0;
const SPACER_FONT_SIZE: f32 = 20.0;

struct WheelFrame {
    position: usize,
    offset: f64,
    rect: Rect,
}

/// Renders all wheels side by side and forwards this frame's gestures.
///
/// # Arguments
/// * `ui` - The egui UI context
/// * `picker` - The picker whose wheels are drawn
/// * `focused` - Position of the wheel driven by the arrow keys
pub fn render_wheels(ui: &mut egui::Ui, picker: &mut DemoPicker, focused: usize) {
    let frames = ui
        .horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            let mut frames = Vec::new();
            for position in 0..picker.wheels().len() {
                if let Some(frame) = render_wheel(ui, picker, position, position == focused) {
                    frames.push(frame);
                }
                if let Some(spacer) = picker.spacer_after(position) {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(spacer.width as f32, WHEEL_HEIGHT as f32),
                        Sense::hover(),
                    );
                    if let Some(label) = spacer.label {
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            label,
                            FontId::proportional(SPACER_FONT_SIZE),
                            ui.visuals().text_color(),
                        );
                    }
                }
            }
            frames
        })
        .inner;

    let (held, pointer, velocity) = ui.input(|i| {
        (
            i.pointer.primary_down(),
            i.pointer.interact_pos(),
            i.pointer.velocity().y as f64,
        )
    });

    let mut resized = false;
    let mut animating = false;
    for frame in frames {
        let over = pointer.is_some_and(|p| frame.rect.contains(p));
        let Some(widget) = picker.widget_mut(frame.position) else {
            continue;
        };
        let held_here = held && (over || widget.is_dragging());
        let gestures = widget.update(frame.offset, frame.rect.height() as f64, held_here, velocity);

        for gesture in gestures {
            resized |= dispatch(picker, frame.position, gesture);
        }
        animating |= picker
            .wheel(frame.position)
            .is_some_and(|wheel| wheel.widget().is_animating());
    }

    if resized {
        picker.layout_changed();
    }
    if animating {
        ui.ctx().request_repaint();
    }
}

fn render_wheel(ui: &mut egui::Ui, picker: &mut DemoPicker, position: usize, focused: bool) -> Option<WheelFrame> {
    let widget = picker.widget_mut(position)?;
    let forced_offset = widget.take_frame_offset();
    let width = widget.width();
    let row_height = widget.row_height() as f32;
    let total_rows = widget.total_rows();

    let mut area = ScrollArea::vertical()
        .id_salt(("wheel", position))
        .max_height(WHEEL_HEIGHT as f32)
        .auto_shrink([false, false])
        .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden);
    if let Some(offset) = forced_offset {
        area = area.vertical_scroll_offset(offset as f32);
    }

    let picker: &DemoPicker = picker;
    let output = ui
        .allocate_ui(egui::vec2(width, WHEEL_HEIGHT as f32), |ui| {
            ui.set_width(width);
            ui.spacing_mut().item_spacing.y = 0.0;
            area.show_rows(ui, row_height, total_rows, |ui, rows| {
                for row in rows {
                    let title = picker.title_for_row(position, row).unwrap_or_default();
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, row_height), Sense::hover());
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        title,
                        FontId::proportional(TITLE_FONT_SIZE),
                        ui.visuals().text_color(),
                    );
                }
            })
        })
        .inner;

    // selection band
    let rect = output.inner_rect;
    let centre = rect.center().y;
    let stroke = if focused {
        ui.visuals().selection.stroke
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };
    ui.painter().hline(rect.x_range(), centre - row_height / 2.0, stroke);
    ui.painter().hline(rect.x_range(), centre + row_height / 2.0, stroke);

    Some(WheelFrame {
        position,
        offset: output.state.offset.y as f64,
        rect,
    })
}

/// Forwards one gesture. Returns `true` for a resize, which is handled once
/// for all wheels.
fn dispatch(picker: &mut DemoPicker, position: usize, gesture: WheelGesture) -> bool {
    match gesture {
        WheelGesture::Began => picker.begin_dragging(position),
        WheelGesture::Scrolled => picker.did_scroll(position),
        WheelGesture::Released {
            velocity,
            proposed_offset,
        } => {
            if let Some(target) = picker.will_end_dragging(position, velocity, proposed_offset) {
                if let Some(widget) = picker.widget_mut(position) {
                    widget.set_content_offset(target, true);
                }
            }
        }
        WheelGesture::Settled => {
            picker.did_end_decelerating(position);
        }
        WheelGesture::Resized => return true,
    }
    false
}
