mod theme;

pub use theme::{Theme, ThemeVariant};

/// Process-wide settings resolved at startup from CLI flags. Stored
/// behind an `ArcSwap` in main so reads are lock-free on the render
/// path.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub theme_variant: ThemeVariant,
}

impl RuntimeConfig {
    pub fn theme(&self) -> Theme {
        Theme::new(self.theme_variant)
    }
}
