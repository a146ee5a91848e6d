use ratatui::style::{Color, Modifier, Style};

/// Muted slate theme with a teal accent.
///
/// - light grey text on a dark slate background
/// - teal for focus and the call to action
/// - green/amber/red reserved for results, notes and errors
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(22, 26, 33);
    pub const FG: Color = Color::Rgb(220, 223, 228);
    pub const FG_DIM: Color = Color::Rgb(150, 156, 166);
    pub const FG_MUTED: Color = Color::Rgb(92, 99, 112);

    pub const ACCENT: Color = Color::Rgb(45, 212, 191);
    pub const OK: Color = Color::Rgb(74, 222, 128);
    pub const WARN: Color = Color::Rgb(250, 204, 21);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// Border of the field that has the focus.
    pub fn focus() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// The submit button while focused.
    pub fn button_active() -> Style {
        Style::default()
            .fg(Self::BG)
            .bg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ok() -> Style {
        Style::default().fg(Self::OK).add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default().fg(Self::WARN)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
