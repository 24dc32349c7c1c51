use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ThemeVariant {
    /// Dark theme (default)
    #[default]
    Mocha,
    /// Light theme
    Latte,
}

/// Semantic color roles, resolved from a Catppuccin variant
#[derive(Debug, Clone)]
pub struct Theme {
    // Accent colors
    pub accent_primary: Color,   // Focus, selection, primary highlight
    pub accent_secondary: Color, // Info, links, secondary actions
    pub accent_tertiary: Color,  // Special emphasis, headers
    pub accent_error: Color,     // Errors, failures
    pub accent_warning: Color,   // Warnings, pending
    pub accent_success: Color,   // Success, completion
    pub accent_info: Color,      // Informational messages
    pub accent_muted: Color,     // Labels, keys, subtle highlights

    // Text hierarchy
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // UI structure
    pub border_primary: Color,
    pub border_secondary: Color,
    pub border_tertiary: Color,
    pub bg_base: Color,
    pub bg_surface: Color,
    pub bg_elevated: Color,
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    fn mocha() -> Self {
        Self {
            // Accent colors (from Catppuccin Mocha)
            accent_primary: Color::Rgb(0xb4, 0xbe, 0xfe),   // lavender
            accent_secondary: Color::Rgb(0x89, 0xb4, 0xfa), // blue
            accent_tertiary: Color::Rgb(0xcb, 0xa6, 0xf7),  // mauve
            accent_error: Color::Rgb(0xf3, 0x8b, 0xa8),     // red
            accent_warning: Color::Rgb(0xf9, 0xe2, 0xaf),   // yellow
            accent_success: Color::Rgb(0xa6, 0xe3, 0xa1),   // green
            accent_info: Color::Rgb(0x94, 0xe2, 0xd5),      // teal
            accent_muted: Color::Rgb(0xfa, 0xb3, 0x87),     // peach

            // Text
            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),   // text
            text_secondary: Color::Rgb(0xba, 0xc2, 0xde), // subtext1
            text_tertiary: Color::Rgb(0xa6, 0xad, 0xc8),  // subtext0

            // UI structure
            border_primary: Color::Rgb(0x7f, 0x84, 0x9c),   // overlay1
            border_secondary: Color::Rgb(0x6c, 0x70, 0x86), // overlay0
            border_tertiary: Color::Rgb(0x93, 0x99, 0xb2),  // overlay2
            bg_base: Color::Rgb(0x1e, 0x1e, 0x2e),          // base
            bg_surface: Color::Rgb(0x31, 0x32, 0x44),       // surface0
            bg_elevated: Color::Rgb(0x45, 0x47, 0x5a),      // surface1
        }
    }

    fn latte() -> Self {
        Self {
            // Accent colors (from Catppuccin Latte)
            accent_primary: Color::Rgb(0x72, 0x87, 0xfd),   // lavender
            accent_secondary: Color::Rgb(0x1e, 0x66, 0xf5), // blue
            accent_tertiary: Color::Rgb(0x88, 0x39, 0xef),  // mauve
            accent_error: Color::Rgb(0xd2, 0x0f, 0x39),     // red
            accent_warning: Color::Rgb(0xdf, 0x8e, 0x1d),   // yellow
            accent_success: Color::Rgb(0x40, 0xa0, 0x2b),   // green
            accent_info: Color::Rgb(0x17, 0x92, 0x99),      // teal
            accent_muted: Color::Rgb(0xfe, 0x64, 0x0b),     // peach

            // Text
            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),   // text
            text_secondary: Color::Rgb(0x5c, 0x5f, 0x77), // subtext1
            text_tertiary: Color::Rgb(0x6c, 0x6f, 0x85),  // subtext0

            // UI structure
            border_primary: Color::Rgb(0x8c, 0x8f, 0xa1),   // overlay1
            border_secondary: Color::Rgb(0x9c, 0xa0, 0xb0), // overlay0
            border_tertiary: Color::Rgb(0x7c, 0x7f, 0x93),  // overlay2
            bg_base: Color::Rgb(0xef, 0xf1, 0xf5),          // base
            bg_surface: Color::Rgb(0xcc, 0xd0, 0xda),       // surface0
            bg_elevated: Color::Rgb(0xbc, 0xc0, 0xcc),      // surface1
        }
    }

    // Helper methods following semantic naming
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.accent_error)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.accent_warning)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.accent_success)
    }

    pub fn info_style(&self) -> Style {
        Style::default().fg(self.accent_info)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}
