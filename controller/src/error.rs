use thiserror::Error;

/// Rejected construction-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("capsule radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("capsule height {height} must exceed twice the radius {radius}")]
    DegenerateCapsule { radius: f32, height: f32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("air control must lie in [0, 1], got {0}")]
    AirControlOutOfRange(f32),
}

/// Failure of a controller operation against its physics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The rigid body is gone: the controller is being driven against the wrong
    /// world, or its body was removed behind its back.
    #[error("character rigid body is missing from the physics world")]
    MissingBody,
}
