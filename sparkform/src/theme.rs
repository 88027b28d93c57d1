//! Theme collaborator: sizes and colors consumed for display only.

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Semantic color slots a field presentation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Regular text.
    Foreground,
    /// Focus accent.
    Primary,
    /// Labels and hints at rest.
    Placeholder,
    /// Visible validation errors.
    Error,
    /// Disabled text.
    Disabled,
    /// Input background behind the label.
    InputBackground,
}

/// Sizes and colors supplied by the host toolkit.
pub trait Theme {
    /// Body text size.
    fn text_size(&self) -> f32;

    /// Caption text size (stacked label).
    fn caption_text_size(&self) -> f32;

    /// Width of the input underline/border.
    fn input_border_size(&self) -> f32;

    /// Base padding unit.
    fn padding(&self) -> f32;

    /// Resolve a color role.
    fn color(&self, role: ColorRole) -> Color;

    /// Hint text size.
    fn hint_text_size(&self) -> f32 {
        self.caption_text_size() - 1.0
    }
}

/// Light theme with stock sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn text_size(&self) -> f32 {
        14.0
    }

    fn caption_text_size(&self) -> f32 {
        11.0
    }

    fn input_border_size(&self) -> f32 {
        2.0
    }

    fn padding(&self) -> f32 {
        4.0
    }

    fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Foreground => Color::rgb(0x21, 0x21, 0x21),
            ColorRole::Primary => Color::rgb(0x29, 0x6f, 0xf6),
            ColorRole::Placeholder => Color::rgb(0x88, 0x88, 0x88),
            ColorRole::Error => Color::rgb(0xf4, 0x43, 0x36),
            ColorRole::Disabled => Color::rgba(0x00, 0x00, 0x00, 0x42),
            ColorRole::InputBackground => Color::rgba(0x00, 0x00, 0x00, 0x19),
        }
    }
}
