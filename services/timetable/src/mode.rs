//! Transport mode codes.
//!
//! The service addresses modes by integer route type. The well-known names
//! map onto codes by position:
//!
//! | code | mode |
//! |---|---|
//! | 0 | train (metropolitan) |
//! | 1 | tram |
//! | 2 | bus (metropolitan and regional, not V/Line) |
//! | 3 | vline (regional train and coach) |
//! | 4 | nightrider |

use ptvsign_core::{Error, Result};

/// Known mode names, ordered by their route type code.
pub const MODE_NAMES: [&str; 5] = ["train", "tram", "bus", "vline", "nightrider"];

/// A transport mode, given either as a numeric route type or by name.
///
/// Callers that already hold the integer code pass it through untouched;
/// names are resolved against [`MODE_NAMES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Numeric route type, used as-is.
    Id(i32),
    /// Mode name to be resolved against the known table.
    Name(String),
}

impl Mode {
    /// Resolve this mode to its numeric route type.
    ///
    /// Fails with a mode-invalid error when the name is not in the table.
    pub fn resolve(&self) -> Result<i32> {
        match self {
            Mode::Id(id) => Ok(*id),
            Mode::Name(name) => MODE_NAMES
                .iter()
                .position(|m| *m == name.as_str())
                .map(|idx| idx as i32)
                .ok_or_else(|| Error::mode_invalid(format!("unknown transport mode: {name}"))),
        }
    }
}

impl From<i32> for Mode {
    fn from(id: i32) -> Self {
        Mode::Id(id)
    }
}

impl From<&str> for Mode {
    fn from(name: &str) -> Self {
        Mode::Name(name.to_string())
    }
}

impl From<String> for Mode {
    fn from(name: String) -> Self {
        Mode::Name(name)
    }
}

/// Resolve anything mode-like to its numeric route type.
pub fn route_type(mode: impl Into<Mode>) -> Result<i32> {
    mode.into().resolve()
}
