use serde::{Deserialize, Serialize};

pub const IDLE_SCALE: &str = "scale(1)";
pub const HOVER_SCALE: &str = "scale(1.02)";

/// Top-left corner of the tracking area in client coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaOrigin {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MouseTracker {
    origin: AreaOrigin,
    x: i64,
    y: i64,
    hovered: bool,
}

impl MouseTracker {
    pub fn new(origin: AreaOrigin) -> Self {
        Self {
            origin,
            x: 0,
            y: 0,
            hovered: false,
        }
    }

    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }

    pub fn coords_text(&self) -> String {
        format!("X: {}, Y: {}", self.x, self.y)
    }

    pub fn transform(&self) -> &'static str {
        if self.hovered {
            HOVER_SCALE
        } else {
            IDLE_SCALE
        }
    }

    pub fn move_to(&mut self, client_x: f64, client_y: f64) -> (i64, i64) {
        self.x = round_half_up(client_x - self.origin.left);
        self.y = round_half_up(client_y - self.origin.top);
        self.position()
    }

    pub fn enter(&mut self) {
        self.hovered = true;
        tracing::info!("Mouse entered tracking area");
    }

    pub fn leave(&mut self) {
        self.hovered = false;
        self.x = 0;
        self.y = 0;
        tracing::info!("Mouse left tracking area");
    }
}

/// `Math.round`: halves go toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_are_relative_and_rounded() {
        let mut tracker = MouseTracker::new(AreaOrigin {
            left: 100.0,
            top: 50.0,
        });
        assert_eq!(tracker.move_to(120.4, 80.5), (20, 31));
        assert_eq!(tracker.coords_text(), "X: 20, Y: 31");
        assert_eq!(tracker.move_to(99.5, 49.4), (0, -1));
    }

    #[test]
    fn test_enter_and_leave() {
        let mut tracker = MouseTracker::new(AreaOrigin::default());
        tracker.enter();
        assert_eq!(tracker.transform(), HOVER_SCALE);
        tracker.move_to(12.0, 7.0);
        tracker.leave();
        assert_eq!(tracker.transform(), IDLE_SCALE);
        assert_eq!(tracker.coords_text(), "X: 0, Y: 0");
    }

    #[test]
    fn test_round_half_up_matches_math_round() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }
}
