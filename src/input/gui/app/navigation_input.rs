use crate::core::navigation::NavigationControlsSnapshot;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Keyboard state between display ticks.
///
/// Held keys are level-triggered. `Home`, `Tab` and `Escape` are edges that
/// fire once per physical press, however many repeats the OS sends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInputState {
    w_held: bool,
    a_held: bool,
    s_held: bool,
    d_held: bool,
    r_held: bool,
    f_held: bool,
    home_held: bool,
    tab_held: bool,
    reset_edge_pending: bool,
    hud_toggle_edge_pending: bool,
    quit_edge_pending: bool,
}

impl NavigationInputState {
    pub fn handle_key_event(&mut self, key_code: KeyCode, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match key_code {
            KeyCode::KeyW => self.w_held = pressed,
            KeyCode::KeyA => self.a_held = pressed,
            KeyCode::KeyS => self.s_held = pressed,
            KeyCode::KeyD => self.d_held = pressed,
            KeyCode::KeyR => self.r_held = pressed,
            KeyCode::KeyF => self.f_held = pressed,
            KeyCode::Home => {
                if pressed && !self.home_held {
                    self.reset_edge_pending = true;
                }
                self.home_held = pressed;
            }
            KeyCode::Tab => {
                if pressed && !self.tab_held {
                    self.hud_toggle_edge_pending = true;
                }
                self.tab_held = pressed;
            }
            KeyCode::Escape if pressed => {
                self.quit_edge_pending = true;
            }
            _ => {}
        }
    }

    /// Controls for one display tick. Consumes the pending reset edge.
    pub fn snapshot(&mut self) -> NavigationControlsSnapshot {
        let snapshot = NavigationControlsSnapshot {
            up: self.w_held,
            down: self.s_held,
            left: self.a_held,
            right: self.d_held,
            zoom_in: self.r_held,
            zoom_out: self.f_held,
            reset_view_edge: self.reset_edge_pending,
        };

        self.reset_edge_pending = false;
        snapshot
    }

    pub fn take_hud_toggle(&mut self) -> bool {
        std::mem::take(&mut self.hud_toggle_edge_pending)
    }

    pub fn take_quit_request(&mut self) -> bool {
        std::mem::take(&mut self.quit_edge_pending)
    }

    /// Forgets every held key. A pending quit survives.
    pub fn reset(&mut self) {
        *self = Self {
            quit_edge_pending: self.quit_edge_pending,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationInputState;
    use crate::core::navigation::NavigationControlsSnapshot;
    use winit::{event::ElementState, keyboard::KeyCode};

    #[test]
    fn press_and_release_updates_held_flags() {
        let mut input = NavigationInputState::default();

        for key in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::KeyR,
            KeyCode::KeyF,
        ] {
            input.handle_key_event(key, ElementState::Pressed);
        }

        let pressed = input.snapshot();
        assert!(pressed.up);
        assert!(pressed.left);
        assert!(pressed.down);
        assert!(pressed.right);
        assert!(pressed.zoom_in);
        assert!(pressed.zoom_out);

        for key in [
            KeyCode::KeyW,
            KeyCode::KeyA,
            KeyCode::KeyS,
            KeyCode::KeyD,
            KeyCode::KeyR,
            KeyCode::KeyF,
        ] {
            input.handle_key_event(key, ElementState::Released);
        }

        assert_eq!(input.snapshot(), NavigationControlsSnapshot::default());
    }

    #[test]
    fn held_keys_persist_across_snapshots() {
        let mut input = NavigationInputState::default();

        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);

        assert!(input.snapshot().zoom_in);
        assert!(input.snapshot().zoom_in);
    }

    #[test]
    fn home_press_sets_single_reset_edge_even_with_repeats() {
        let mut input = NavigationInputState::default();

        input.handle_key_event(KeyCode::Home, ElementState::Pressed);
        input.handle_key_event(KeyCode::Home, ElementState::Pressed);

        assert!(input.snapshot().reset_view_edge);
        assert!(!input.snapshot().reset_view_edge);

        input.handle_key_event(KeyCode::Home, ElementState::Released);
        input.handle_key_event(KeyCode::Home, ElementState::Pressed);

        assert!(input.snapshot().reset_view_edge);
    }

    #[test]
    fn tab_toggles_once_per_press() {
        let mut input = NavigationInputState::default();

        input.handle_key_event(KeyCode::Tab, ElementState::Pressed);
        input.handle_key_event(KeyCode::Tab, ElementState::Pressed);

        assert!(input.take_hud_toggle());
        assert!(!input.take_hud_toggle());
    }

    #[test]
    fn escape_is_a_one_shot_quit_edge() {
        let mut input = NavigationInputState::default();

        assert!(!input.take_quit_request());

        input.handle_key_event(KeyCode::Escape, ElementState::Pressed);

        assert!(input.take_quit_request());
        assert!(!input.take_quit_request());
    }

    #[test]
    fn escape_release_does_not_quit() {
        let mut input = NavigationInputState::default();

        input.handle_key_event(KeyCode::Escape, ElementState::Released);

        assert!(!input.take_quit_request());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut input = NavigationInputState::default();

        input.handle_key_event(KeyCode::KeyJ, ElementState::Pressed);
        input.handle_key_event(KeyCode::Space, ElementState::Pressed);

        assert_eq!(input.snapshot(), NavigationControlsSnapshot::default());
    }

    #[test]
    fn reset_clears_held_keys_and_edges_but_keeps_quit() {
        let mut input = NavigationInputState::default();
        input.handle_key_event(KeyCode::KeyW, ElementState::Pressed);
        input.handle_key_event(KeyCode::KeyR, ElementState::Pressed);
        input.handle_key_event(KeyCode::Home, ElementState::Pressed);
        input.handle_key_event(KeyCode::Tab, ElementState::Pressed);
        input.handle_key_event(KeyCode::Escape, ElementState::Pressed);

        input.reset();

        assert_eq!(input.snapshot(), NavigationControlsSnapshot::default());
        assert!(!input.take_hud_toggle());
        assert!(input.take_quit_request());
    }
}
