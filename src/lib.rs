//! Locale-aware time picker core.
//!
//! A picker is a row of wheels (hour, minute, day period) laid out from a
//! locale's time pattern. Wheels scroll without bound by repeating their
//! items, and their selections combine into a single time value.
//!
//! The crate is organised as:
//! - `locale/` - Locale identifiers, the locale service and pattern resolution
//! - `component/` - Wheel kinds and the layout engine
//! - `state/` - Per-wheel selection and gesture phase
//! - `domain/` - Infinite scroll geometry
//! - `app/` - The coordinator and the complete picker
//! - `ui/` - Wheel views on top of host scroll widgets

pub mod app;
pub mod component;
pub mod config;
pub mod domain;
pub mod error;
pub mod locale;
pub mod state;
pub mod time;
pub mod traits;
pub mod ui;

// Export traits
pub use traits::{PickerObserver, ScrollWidget};

// Export picker
pub use app::{PickerCoordinator, RejectedObserver, SelectionChange, Spacer, TimePicker, WheelFactory, WheelSpec};
pub use ui::{ItemScroll, WheelSelection, WheelView};

// Export wheel model
pub use component::{layout, CalendarField, ComponentUnit, PartialFields, PickerComponent};
pub use domain::{ScrollDirection, ScrollGeometry, ScrollMode, Snap};
pub use state::{ComponentSelectionState, ScrollPhase, ScrollPhaseState};

// Export locale support
pub use locale::{
    BuiltinLocales, ClockHourFormat, FormatResolver, FormatSpec,
    HourCycle, LocaleService, PickerLocale,
};

// Export configuration, errors and time values
pub use config::{PickerConfig, PickerMetrics, DEFAULT_COMPONENT_WIDTH, DEFAULT_ITEM_HEIGHT, DEFAULT_SPACER_WIDTH};
pub use error::{PickerError, Result};
pub use time::{HourMinute, TimeFields};
