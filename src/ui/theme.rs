use ratatui::style::Color;

/// Form color constants
pub struct Theme;

impl Theme {
    pub const MODAL_BG: Color = Color::Rgb(0x15, 0x19, 0x26);

    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Cyan;

    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const INPUT_BORDER: Color = Color::DarkGray;
    pub const ERROR: Color = Color::Red;
    pub const SUCCESS: Color = Color::Green;

    /// Highlight for the gateway IP, shown like inline code.
    pub const CODE_FG: Color = Color::LightRed;

    pub const KEY_CHIP_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const KEY_CHIP_FG: Color = Color::White;
}
