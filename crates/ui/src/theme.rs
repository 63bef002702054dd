use ratatui::style::{Color, Modifier, Style};
use valueview_core::ThemeName;

/// Theme variants offered by the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    /// Iceberg dark
    #[default]
    Dark,
    /// Iceberg light
    Light,
}

impl ThemeVariant {
    pub fn toggle(self) -> Self {
        match self {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ThemeName> for ThemeVariant {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => ThemeVariant::Dark,
            ThemeName::Light => ThemeVariant::Light,
        }
    }
}

/// Resolved colors for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub bg: Color,
    pub fg: Color,
    pub panel_bg: Color,
    pub active: Color,
    pub muted: Color,
    pub blue: Color,
    pub cyan: Color,
    pub purple: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub border: Color,
}

impl ThemePalette {
    /// Base style for all text
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg).bg(self.panel_bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Field labels in the entry panel
    pub fn label(&self) -> Style {
        Style::default().fg(self.blue).bg(self.bg).add_modifier(Modifier::BOLD)
    }

    /// Selected tab or list row
    pub fn selected(&self) -> Style {
        Style::default().fg(self.fg).bg(self.active).add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.cyan).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.red).bg(self.bg)
    }
}

/// Iceberg color theme
///
/// Based on iceberg.vim color scheme (https://github.com/cocopon/iceberg.vim)
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    pub const DARK: ThemePalette = ThemePalette {
        bg: Color::Rgb(22, 24, 33),
        fg: Color::Rgb(198, 200, 209),
        panel_bg: Color::Rgb(30, 33, 50),
        active: Color::Rgb(39, 44, 66),
        muted: Color::Rgb(107, 112, 137),
        blue: Color::Rgb(132, 160, 198),
        cyan: Color::Rgb(137, 184, 194),
        purple: Color::Rgb(160, 147, 199),
        green: Color::Rgb(180, 190, 130),
        yellow: Color::Rgb(226, 164, 120),
        red: Color::Rgb(226, 120, 120),
        border: Color::Rgb(60, 65, 90),
    };

    pub const LIGHT: ThemePalette = ThemePalette {
        bg: Color::Rgb(232, 233, 236),
        fg: Color::Rgb(51, 55, 76),
        panel_bg: Color::Rgb(220, 223, 231),
        active: Color::Rgb(201, 205, 215),
        muted: Color::Rgb(133, 137, 155),
        blue: Color::Rgb(45, 83, 155),
        cyan: Color::Rgb(63, 131, 166),
        purple: Color::Rgb(119, 89, 180),
        green: Color::Rgb(102, 138, 61),
        yellow: Color::Rgb(193, 103, 48),
        red: Color::Rgb(204, 81, 122),
        border: Color::Rgb(167, 172, 188),
    };

    pub fn palette(variant: ThemeVariant) -> ThemePalette {
        match variant {
            ThemeVariant::Dark => Self::DARK,
            ThemeVariant::Light => Self::LIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_values() {
        assert!(matches!(Theme::DARK.bg, Color::Rgb(_, _, _)));
        assert!(matches!(Theme::LIGHT.fg, Color::Rgb(_, _, _)));
        assert_ne!(Theme::DARK.bg, Theme::LIGHT.bg);
    }

    #[test]
    fn test_variant_toggle() {
        assert_eq!(ThemeVariant::default(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.toggle(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.toggle().to_string(), "dark");
    }

    #[test]
    fn test_variant_from_config_name() {
        assert_eq!(ThemeVariant::from(ThemeName::Light), ThemeVariant::Light);
        assert_eq!(Theme::palette(ThemeName::Dark.into()), Theme::DARK);
    }

    #[test]
    fn test_styles() {
        let theme = Theme::palette(ThemeVariant::Dark);
        let base = theme.base();
        assert_eq!(base.fg, Some(theme.fg));
        assert_eq!(base.bg, Some(theme.bg));

        let panel = theme.panel();
        assert_eq!(panel.bg, Some(theme.panel_bg));
        assert!(theme.selected().add_modifier.contains(Modifier::BOLD));
    }
}
