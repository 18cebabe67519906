//! Styling for the essential line and the full help grid.
//!
//! Every piece of rendered help has its own [`Style`] slot, and the two kinds
//! of separators also carry the literal text they render. The defaults are
//! deliberately plain (bold keys, italic descriptions) so they read well on
//! both light and dark terminals without any colour.
//!
//! ```rust
//! use bubblehelp::style::Styles;
//! use lipgloss_extras::prelude::*;
//!
//! let styles = Styles::default()
//!     .with_essential_separators(" ", " | ")
//!     .with_full_key(Style::new().foreground(Color::from("212")).bold(true));
//! assert_eq!(styles.essential_col_separator_value, " | ");
//! ```

use lipgloss_extras::prelude::*;

/// Default separator between a key and its description.
pub const KEY_SEPARATOR: &str = " - ";
/// Default separator between entries on the essential line.
pub const ESSENTIAL_COLUMN_SEPARATOR: &str = " • ";
/// Default gap between columns of the full grid.
pub const FULL_COLUMN_SEPARATOR: &str = "   ";

/// A set of styles used by the layout engine.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Key names on the essential line.
    pub essential_key: Style,
    /// Descriptions on the essential line.
    pub essential_desc: Style,
    /// The key/description separator on the essential line.
    pub essential_separator: Style,
    /// Literal key/description separator on the essential line.
    pub essential_separator_value: String,
    /// The separator between entries on the essential line.
    pub essential_col_separator: Style,
    /// Literal separator between entries on the essential line.
    pub essential_col_separator_value: String,
    /// Key names in the full grid.
    pub full_key: Style,
    /// Descriptions in the full grid.
    pub full_desc: Style,
    /// The key/description separator in the full grid.
    pub full_separator: Style,
    /// Literal key/description separator in the full grid.
    pub full_separator_value: String,
    /// The gap between columns of the full grid.
    pub full_col_separator: Style,
    /// Literal gap between columns of the full grid.
    pub full_col_separator_value: String,
}

impl Default for Styles {
    fn default() -> Self {
        let key = Style::new().bold(true);
        let desc = Style::new().italic(true);

        Self {
            essential_key: key.clone(),
            essential_desc: desc.clone(),
            essential_separator: desc.clone(),
            essential_separator_value: KEY_SEPARATOR.to_string(),
            essential_col_separator: key.clone(),
            essential_col_separator_value: ESSENTIAL_COLUMN_SEPARATOR.to_string(),
            full_key: key,
            full_desc: desc.clone(),
            full_separator: desc.clone(),
            full_separator_value: KEY_SEPARATOR.to_string(),
            full_col_separator: desc,
            full_col_separator_value: FULL_COLUMN_SEPARATOR.to_string(),
        }
    }
}

impl Styles {
    /// Creates the default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the essential line's key/description separator and entry separator.
    pub fn with_essential_separators(
        mut self,
        key_separator: impl Into<String>,
        column_separator: impl Into<String>,
    ) -> Self {
        self.essential_separator_value = key_separator.into();
        self.essential_col_separator_value = column_separator.into();
        self
    }

    /// Sets the full grid's key/description separator and column gap.
    pub fn with_full_separators(
        mut self,
        key_separator: impl Into<String>,
        column_separator: impl Into<String>,
    ) -> Self {
        self.full_separator_value = key_separator.into();
        self.full_col_separator_value = column_separator.into();
        self
    }

    /// Sets the key style for the essential line.
    pub fn with_essential_key(mut self, style: Style) -> Self {
        self.essential_key = style;
        self
    }

    /// Sets the description style for the essential line.
    pub fn with_essential_desc(mut self, style: Style) -> Self {
        self.essential_desc = style;
        self
    }

    /// Sets the key style for the full grid.
    pub fn with_full_key(mut self, style: Style) -> Self {
        self.full_key = style;
        self
    }

    /// Sets the description style for the full grid.
    pub fn with_full_desc(mut self, style: Style) -> Self {
        self.full_desc = style;
        self
    }

    // Inline rendering keeps a style from introducing line breaks or padding
    // inside a cell.
    pub(crate) fn paint(style: &Style, text: &str) -> String {
        style.clone().inline(true).render(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lipgloss_extras::lipgloss;

    #[test]
    fn test_default_separator_values() {
        let styles = Styles::default();
        assert_eq!(styles.essential_separator_value, " - ");
        assert_eq!(styles.full_separator_value, " - ");
        assert_eq!(styles.essential_col_separator_value, " • ");
        assert_eq!(styles.full_col_separator_value, "   ");
    }

    #[test]
    fn test_paint_preserves_text() {
        let styles = Styles::default();
        let out = Styles::paint(&styles.essential_key, "ctrl+c");
        assert_eq!(lipgloss::strip_ansi(&out), "ctrl+c");
    }

    #[test]
    fn test_builders() {
        let styles = Styles::new().with_full_separators(": ", " | ");
        assert_eq!(styles.full_separator_value, ": ");
        assert_eq!(styles.full_col_separator_value, " | ");
        assert_eq!(styles.essential_separator_value, KEY_SEPARATOR);
    }
}
