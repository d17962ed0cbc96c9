/*!
Character controller defaults and tolerances.

These constants centralize the values used when a `ControllerOptions` field is
left unset, plus the fixed tolerances of the ground probe. Keeping them together
makes tuning easier.

Notes
- Distances are in meters, time in seconds, speeds in meters per second.
- The physics engine owns gravity; nothing here integrates it.
*/

/// Capsule radius (meters).
pub const DEFAULT_RADIUS: f32 = 0.5;

/// Total capsule height, tip to tip (meters).
/// Must stay greater than `2 * DEFAULT_RADIUS` so the capsule has a cylinder segment.
pub const DEFAULT_HEIGHT: f32 = 2.0;

/// Spawn position of the capsule center (meters).
pub const DEFAULT_POSITION: [f32; 3] = [0.0, 3.0, 0.0];

/// Top planar speed on the ground (meters per second).
pub const DEFAULT_MAX_SPEED: f32 = 5.0;

/// Planar speed gained per second while a movement key is held.
pub const DEFAULT_ACCELERATION: f32 = 20.0;

/// Planar speed lost per second once movement keys are released.
pub const DEFAULT_DECELERATION: f32 = 25.0;

/// Facing slerp rate. `rotation_speed * dt` is the blend factor per tick.
pub const DEFAULT_ROTATION_SPEED: f32 = 5.0;

/// Upward impulse applied on a jump (newton-seconds, i.e. mass * m/s).
pub const DEFAULT_JUMP_IMPULSE: f32 = 10.0;

/// Air-control multiplier for planar movement while airborne.
///
/// Convention:
/// - 1.0 = full ground control in air
/// - 0.0 = no air control
pub const DEFAULT_AIR_CONTROL: f32 = 0.3;

/// Linear damping of the character body.
pub const DEFAULT_LINEAR_DAMPING: f32 = 0.5;

/// Angular damping of the character body. Rotations are locked, so this only
/// matters if a caller unlocks them on the engine side.
pub const DEFAULT_ANGULAR_DAMPING: f32 = 1.0;

/// Friction coefficient of the capsule collider.
pub const DEFAULT_FRICTION: f32 = 0.7;

/// Restitution (bounciness) of the capsule collider.
pub const DEFAULT_RESTITUTION: f32 = 0.2;

/// How far below the capsule bottom the ground probe reaches (meters).
/// Long enough to catch contact-margin gaps, short enough to ignore distant ground.
pub const DEFAULT_GROUND_PROBE_DISTANCE: f32 = 0.15;

/// The ground ray starts this far above the capsule's bottom tip (meters).
/// The character's own collider is excluded, so starting inside it is safe.
pub const GROUND_PROBE_EPSILON: f32 = 0.01;

/// Squared length below which a direction is treated as "not moving".
pub const DIRECTION_EPS_SQ: f32 = 1.0e-8;

/// Minimum planar motion required to derive a yaw.
pub const YAW_EPS: f32 = 1.0e-6;
