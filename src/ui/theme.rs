//! Visual theme and styling.

use console::Style;

/// Ladle's visual theme.
#[derive(Debug, Clone)]
pub struct LadleTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers and section titles (cyan bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for the favorite marker (red).
    pub favorite: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for LadleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LadleTheme {
    /// Create the default ladle theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            favorite: Style::new().red(),
            key: Style::new().bold(),
        }
    }

    /// The marker shown next to a recipe name.
    pub fn favorite_marker(&self, is_favorite: bool) -> String {
        if is_favorite {
            self.favorite.apply_to("\u{2665}").to_string()
        } else {
            self.dim.apply_to("\u{2661}").to_string()
        }
    }
}

/// Whether colored output should be used.
///
/// Respects the `NO_COLOR` convention and requires a terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorite_marker_distinguishes_states() {
        let theme = LadleTheme::new();
        let on = theme.favorite_marker(true);
        let off = theme.favorite_marker(false);

        assert!(on.contains('\u{2665}'));
        assert!(off.contains('\u{2661}'));
    }
}
