//! Font descriptor for text rendering.

/// Font configuration for placed text.
///
/// Sizes are in pixels, matching how the board measures everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono")
    pub family: String,
    /// Font size in pixels
    pub size: f64,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            size: 10.0,
        }
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Format: "Family Npx", e.g. "Sans 10px". The `px` suffix asks Pango for
    /// an absolute size so the result does not depend on the output resolution.
    pub fn to_pango_string(&self) -> String {
        format!("{} {}px", self.family, self.size.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pango_string_default() {
        assert_eq!(FontDescriptor::default().to_pango_string(), "Sans 10px");
    }

    #[test]
    fn test_pango_string_custom() {
        let font = FontDescriptor::new("JetBrains Mono", 15.6);
        assert_eq!(font.to_pango_string(), "JetBrains Mono 16px");
    }
}
