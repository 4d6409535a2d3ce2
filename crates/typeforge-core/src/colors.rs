//! Escape sequences for colored type outlines and trace lines.
//!
//! Colors are assigned by role rather than by hue, so every renderer agrees
//! on what a color means: type and member names, literal values, and the
//! structural noise around them (keywords, handles, trace tags).

/// Per-role escape sequences. Every field is empty when color is off, which
/// lets renderers interpolate them unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Type names, field names, variant names.
    pub name: &'static str,
    /// Enum values, vector elements, widened results.
    pub value: &'static str,
    /// Kind keywords, `#N` handles, trace tags and notes.
    pub meta: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Blue names, green values, dim metadata.
    pub const ON: Self = Self {
        name: "\x1b[34m",
        value: "\x1b[32m",
        meta: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        value: "",
        meta: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
