use serde::{Deserialize, Serialize};

// navigation controller
//
// the only mutable state on the page: whether the mobile overlay is open.  the flag
// starts closed and changes only through toggle(), which the menu icon, the overlay's
// dismiss control and every link inside the overlay all call.  viewport changes never
// write it -- the composer masks it on desktop layouts instead
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavController {
    overlay_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum OverlayState {
    Open,
    Closed,
}

// keyboard dismissal: DOM `key` values that close an open overlay through the same
// toggle as the backdrop.  "Esc" is what older browsers report
pub const DISMISS_KEYS: &[&str] = &["Escape", "Esc"];

pub fn dismisses_overlay(key: &str) -> bool {
    DISMISS_KEYS.contains(&key)
}

impl NavController {
    pub fn new() -> Self {
        NavController::default()
    }

    pub fn toggle(&mut self) {
        self.overlay_open = !self.overlay_open;
    }

    pub fn is_open(&self) -> bool {
        self.overlay_open
    }

    pub fn state(&self) -> OverlayState {
        if self.overlay_open {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(NavController::new().state(), OverlayState::Closed);
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        for start_open in [false, true] {
            let mut nav = NavController::new();
            if start_open {
                nav.toggle();
            }
            let before = nav;

            nav.toggle();
            assert_ne!(nav, before);
            nav.toggle();
            assert_eq!(nav, before);
        }
    }

    #[test]
    fn escape_dismisses_an_open_overlay() {
        let mut nav = NavController::new();
        nav.toggle();

        for key in ["Enter", "e", " ", "Tab", "Escape"] {
            if dismisses_overlay(key) {
                nav.toggle();
            }
        }

        assert_eq!(nav.state(), OverlayState::Closed);
        assert!(dismisses_overlay("Esc"));
        assert!(!dismisses_overlay("escape"));
    }

    #[test]
    fn odd_toggles_from_closed_open() {
        for n in 1..=9 {
            let mut nav = NavController::new();
            for _ in 0..n {
                nav.toggle();
            }

            let expected = if n % 2 == 1 {
                OverlayState::Open
            } else {
                OverlayState::Closed
            };
            assert_eq!(nav.state(), expected, "after {n} toggles");
        }
    }
}
