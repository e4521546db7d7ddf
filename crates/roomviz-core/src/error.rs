//! Error types for the placement engine.

use thiserror::Error;

/// Errors reported by fallible engine entry points.
///
/// Interactive paths (pointer handling, snapping) never fail; these only
/// surface from object creation and from parsing user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// The requested furniture kind has no template.
    #[error("unknown furniture kind: {0}")]
    UnknownKind(String),

    /// Dimensions must be finite and strictly positive.
    #[error("invalid dimensions {width} x {height} x {depth}")]
    InvalidDimensions { width: f32, height: f32, depth: f32 },

    /// The footprint is wider or deeper than the room floor.
    #[error("a {width} x {depth} footprint does not fit in a {room_width} x {room_length} room")]
    DoesNotFit {
        width: f32,
        depth: f32,
        room_width: f32,
        room_length: f32,
    },

    /// An object was added less than the cooldown ago.
    #[error("add requested during cooldown ({remaining_ms} ms remaining)")]
    CoolingDown { remaining_ms: u64 },

    /// A length field could not be parsed.
    #[error("invalid length: {0}")]
    InvalidLength(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, PlacementError>;
