use crate::domain::model::FieldId;
use serde::{Deserialize, Serialize};

/// One user interaction with the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    ToggleTheme,
    SelectTab {
        index: usize,
    },
    CounterIncrease,
    CounterDecrease,
    CounterReset,
    KeyDown {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        meta: bool,
    },
    MouseEnter,
    MouseMove {
        x: f64,
        y: f64,
    },
    MouseLeave,
    ColorInput {
        color: String,
    },
    ColorApply,
    Input {
        field: FieldId,
        value: String,
    },
    Check {
        field: FieldId,
        checked: bool,
    },
    Blur {
        field: FieldId,
    },
    Submit,
    FaqClick {
        index: usize,
    },
}

impl PageEvent {
    pub fn key(key: impl Into<String>) -> Self {
        PageEvent::KeyDown {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn input(field: FieldId, value: impl Into<String>) -> Self {
        PageEvent::Input {
            field,
            value: value.into(),
        }
    }
}
