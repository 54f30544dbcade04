use std::fmt;

/// Font selection for canvas text: a pixel size and a family name.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Size in user-space pixels.
    pub size: f32,
    pub family: String,
}

impl Font {
    pub fn new(size: f32, family: impl Into<String>) -> Self {
        Self { size, family: family.into() }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(10.0, "sans-serif")
    }
}

/// Formats like the CSS shorthand a 2D context reports, e.g. `16px Arial`.
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {}", self.size, self.family)
    }
}
