//! Counter and entered-text state driven by the window's buttons

/// Glyph repeated once per click while the counter is small.
pub const MARKER_GLYPH: &str = "⭐";

/// Largest counter value still drawn as a run of glyphs.
pub const MAX_GLYPHS: u32 = 10;

/// Appended to the numeric form once the glyph run would be unreadable.
pub const MANY_MARKERS_SUFFIX: &str = " (¡Muchas estrellas!)";

const COUNTER_PREFIX: &str = "Contador: ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    counter: u32,
    last_text: String,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn last_text(&self) -> &str {
        &self.last_text
    }

    pub fn increment(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// Store the latest entry-field value, replacing the previous one.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.last_text = text.into();
    }

    pub fn clear(&mut self) {
        self.counter = 0;
        self.last_text.clear();
    }

    /// Glyph run for small counters, decimal value plus suffix above [`MAX_GLYPHS`].
    pub fn display(&self) -> String {
        if self.counter <= MAX_GLYPHS {
            MARKER_GLYPH.repeat(self.counter as usize)
        } else {
            format!("{}{MANY_MARKERS_SUFFIX}", self.counter)
        }
    }

    /// `None` until something non-empty has been typed.
    pub fn describe_text(&self) -> Option<&str> {
        if self.last_text.is_empty() {
            None
        } else {
            Some(&self.last_text)
        }
    }

    /// Text for the counter label. Zero is spelled out as a digit.
    pub fn counter_label(&self) -> String {
        if self.counter == 0 {
            format!("{COUNTER_PREFIX}0")
        } else {
            format!("{COUNTER_PREFIX}{}", self.display())
        }
    }
}
