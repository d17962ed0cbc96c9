/// Per-tick snapshot of the player's movement keys.
///
/// Supplied fresh every tick by whatever polls the devices. The controller keeps
/// the previous jump value itself (see [`crate::JumpEdge`]), so callers only
/// report what is held right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Nothing held.
    pub const IDLE: Self = Self {
        forward: false,
        backward: false,
        left: false,
        right: false,
        jump: false,
    };

    pub fn forward() -> Self {
        Self {
            forward: true,
            ..Self::IDLE
        }
    }

    pub fn with_jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    /// True if any directional key is held, even if they cancel out.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}
