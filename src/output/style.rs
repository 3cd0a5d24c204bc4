//! Terminal styling configuration.

use std::time::Duration;

use colored::Color;

/// How rendered text looks on the terminal.
///
/// Built once from [`crate::Config`] and handed to the [`super::Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Emit ANSI colors
    pub color: bool,
    /// Pause after each rendered character
    pub char_delay: Duration,
}

impl Style {
    /// No colors and no delay; what tests and piped output want.
    pub const PLAIN: Style = Style {
        color: false,
        char_delay: Duration::ZERO,
    };
}

/// Semantic category of a rendered line; decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Progress information
    Info,
    /// Record section headers
    Heading,
    /// Record values
    Data,
    /// WHOIS output and registrant search notices
    Notice,
    /// Questions asked of the user
    Prompt,
}

impl Category {
    /// Terminal color used for this category.
    pub fn color(self) -> Color {
        match self {
            Category::Info => Color::Cyan,
            Category::Heading | Category::Data => Color::Green,
            Category::Notice => Color::Yellow,
            Category::Prompt => Color::Red,
        }
    }
}
