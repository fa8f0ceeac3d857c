//! Content of the "show text" dialog

use crate::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDialog {
    pub title: String,
    pub message: String,
}

impl TextDialog {
    pub fn from_state(state: &AppState) -> Self {
        match state.describe_text() {
            None => Self {
                title: "Info".to_string(),
                message: "No has escrito nada aún.".to_string(),
            },
            Some(text) => Self {
                title: "Texto ingresado".to_string(),
                message: format!("Escribiste:\n\n\"{text}\""),
            },
        }
    }
}
