use serde::Serialize;

pub const POSITIVE_COLOR: &str = "#27ae60";
pub const NEGATIVE_COLOR: &str = "#e74c3c";
pub const ZERO_COLOR: &str = "#3498db";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn display(&self) -> String {
        self.value.to_string()
    }

    pub fn color(&self) -> &'static str {
        match self.value.signum() {
            1 => POSITIVE_COLOR,
            -1 => NEGATIVE_COLOR,
            _ => ZERO_COLOR,
        }
    }

    pub fn increase(&mut self) -> i64 {
        self.value = self.value.saturating_add(1);
        tracing::info!("Counter increased to: {}", self.value);
        self.value
    }

    pub fn decrease(&mut self) -> i64 {
        self.value = self.value.saturating_sub(1);
        tracing::info!("Counter decreased to: {}", self.value);
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = 0;
        tracing::info!("Counter reset to: {}", self.value);
        self.value
    }

    /// Arrow keys step the counter and `r` resets it. Returns whether the
    /// key was handled.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowUp" => {
                self.increase();
            }
            "ArrowDown" => {
                self.decrease();
            }
            "r" | "R" => {
                self.reset();
            }
            _ => return false,
        }
        true
    }
}
