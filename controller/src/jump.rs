/// Rising-edge tracker for the jump key.
///
/// Holding the key must not re-trigger, so a jump is only offered on the tick the
/// key goes from released to pressed. The previous value is updated exactly once
/// per tick, after the check, whether or not the jump fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JumpEdge {
    was_pressed: bool,
}

impl JumpEdge {
    pub fn was_pressed(&self) -> bool {
        self.was_pressed
    }

    /// Feed this tick's key state. Returns true if a jump should fire now.
    pub fn update(&mut self, pressed: bool, grounded: bool) -> bool {
        let rising = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        rising && grounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_press() {
        let mut edge = JumpEdge::default();
        let fired: Vec<bool> = (0..10).map(|_| edge.update(true, true)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[0]);
    }

    #[test]
    fn release_rearms() {
        let mut edge = JumpEdge::default();
        assert!(edge.update(true, true));
        assert!(!edge.update(true, true));
        assert!(!edge.update(false, true));
        assert!(edge.update(true, true));
    }

    #[test]
    fn airborne_never_fires() {
        let mut edge = JumpEdge::default();
        assert!(!edge.update(true, false));
        // The press was consumed while airborne; landing with the key still held
        // must not jump.
        assert!(!edge.update(true, true));
        assert!(edge.was_pressed());
    }

    #[test]
    fn state_updates_even_without_jump() {
        let mut edge = JumpEdge::default();
        edge.update(false, true);
        assert!(!edge.was_pressed());
        edge.update(true, false);
        assert!(edge.was_pressed());
        edge.update(false, false);
        assert!(!edge.was_pressed());
    }
}
