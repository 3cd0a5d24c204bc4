//! Opening and closing banners.

use std::io::{self, Write};

use colored::Color;

use super::render::Renderer;

const OPENING: &str = r#"
  ____  _   _ ____    _     ___   ___  _  ___   _ ____
 |  _ \| \ | / ___|  | |   / _ \ / _ \| |/ / | | |  _ \
 | | | |  \| \___ \  | |  | | | | | | | ' /| | | | |_) |
 | |_| | |\  |___) | | |__| |_| | |_| | . \| |_| |  __/
 |____/|_| \_|____/  |_____\___/ \___/|_|\_\\___/|_|
"#;

const CLOSING: &str = r#"
   ____                 _ _
  / ___| ___   ___   __| | |__  _   _  ___
 | |  _ / _ \ / _ \ / _` | '_ \| | | |/ _ \
 | |_| | (_) | (_) | (_| | |_) | |_| |  __/
  \____|\___/ \___/ \__,_|_.__/ \__, |\___|
                                |___/
"#;

const RAINBOW: &[Color] = &[
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];

const STRIPES: &[Color] = &[Color::Red, Color::White, Color::Green, Color::Red];

/// Prints the banner shown once when the session starts.
pub fn print_opening<W: Write>(renderer: &Renderer, out: &mut W) -> io::Result<()> {
    renderer.rainbow(out, OPENING, RAINBOW)
}

/// Prints the banner shown when the session ends.
pub fn print_closing<W: Write>(renderer: &Renderer, out: &mut W) -> io::Result<()> {
    renderer.striped(out, CLOSING, STRIPES)
}
