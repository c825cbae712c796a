//! Picker notifications shown in the demo window.

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

use chrono::{DateTime, TimeZone};
use timewheel::{ComponentUnit, PickerComponent, PickerObserver};

/// Lines kept in the log panel.
const LOG_CAPACITY: usize = 200;

/// Receives notification lines and keeps the most recent ones.
pub struct EventLog {
    sender: Sender<String>,
    receiver: Receiver<String>,
    lines: VecDeque<String>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLog {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            lines: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// An observer that writes into this log.
    pub fn observer(&self) -> LogObserver {
        LogObserver {
            sender: self.sender.clone(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.lines.len() == LOG_CAPACITY {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Moves pending notifications into the visible lines.
    pub fn drain(&mut self) {
        while let Ok(line) = self.receiver.try_recv() {
            self.push(line);
        }
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &String> {
        self.lines.iter()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Forwards picker notifications to an [`EventLog`] and puts a colon
/// between the hour and minute wheels.
pub struct LogObserver {
    sender: Sender<String>,
}

impl<Tz> PickerObserver<DateTime<Tz>> for LogObserver
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    fn on_selection_changed(&mut self, component: PickerComponent, item: usize) {
        let _ = self.sender.send(format!(
            "wheel {} ({:?}) selected item {}",
            component.position, component.unit, item
        ));
    }

    fn on_time_changed(&mut self, time: &DateTime<Tz>) {
        let _ = self
            .sender
            .send(format!("time changed to {}", time.format("%Y-%m-%d %H:%M")));
    }

    fn on_item_scrolled(&mut self, component: PickerComponent, item: usize, offset_from_center: f64) {
        tracing::trace!(
            "wheel {} item {} at {:.1} from centre",
            component.position,
            item,
            offset_from_center
        );
    }

    fn spacer_between(&self, left: PickerComponent, right: PickerComponent) -> Option<String> {
        let is_hour = |unit: ComponentUnit| matches!(unit, ComponentUnit::Hour12 | ComponentUnit::Hour24);
        (is_hour(left.unit) && right.unit == ComponentUnit::Minute).then(|| ":".to_string())
    }
}
