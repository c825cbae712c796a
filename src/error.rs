//! Error type shared by the picker library.
//!
//! Only construction-time failures surface as errors. Range problems coming
//! from wheel callbacks (stale positions, out-of-range items) are absorbed
//! where they happen and logged instead.

use std::path::PathBuf;

use crate::component::ComponentUnit;

/// Errors produced while building a picker or loading its configuration.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// The host could not supply a scroll widget for one of the wheels.
    #[error("no scroll widget available for wheel {position} ({unit:?})")]
    MissingWidget { position: usize, unit: ComponentUnit },

    /// Row heights must be finite and strictly positive.
    #[error("invalid row height {0}")]
    InvalidRowHeight(f64),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PickerError>;
