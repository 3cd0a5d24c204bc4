//! Paced, colored line rendering.

use std::io::{self, Write};
use std::thread;

use colored::{Color, Colorize};

use super::style::{Category, Style};

/// Writes lines character by character in the color of their category.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    style: Style,
}

impl Renderer {
    /// Creates a renderer for the given style.
    pub fn new(style: Style) -> Self {
        Self { style }
    }

    /// Renders `text` followed by a newline.
    ///
    /// Embedded newlines split the text into several rendered lines.
    pub fn line<W: Write>(&self, out: &mut W, category: Category, text: &str) -> io::Result<()> {
        for line in text.split('\n') {
            self.paced(out, category.color(), line.trim_end_matches('\r'))?;
            writeln!(out)?;
        }
        out.flush()
    }

    /// Renders an empty line.
    pub fn blank<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        out.flush()
    }

    /// Writes a prompt without delay and without a trailing newline.
    pub fn prompt<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.style.color {
            write!(out, "{}", text.color(Category::Prompt.color()))?;
        } else {
            write!(out, "{text}")?;
        }
        out.flush()
    }

    /// Writes multi-line text with each character in the next color of `palette`.
    pub fn rainbow<W: Write>(&self, out: &mut W, text: &str, palette: &[Color]) -> io::Result<()> {
        for (i, ch) in text.chars().enumerate() {
            if ch == '\n' || palette.is_empty() {
                write!(out, "{ch}")?;
            } else {
                self.write_char(out, ch, palette[i % palette.len()], false)?;
            }
        }
        writeln!(out)?;
        out.flush()
    }

    /// Writes multi-line text with each line in the next color of `palette`.
    pub fn striped<W: Write>(&self, out: &mut W, text: &str, palette: &[Color]) -> io::Result<()> {
        for (i, line) in text.lines().enumerate() {
            match palette.get(i % palette.len().max(1)) {
                Some(color) if self.style.color => writeln!(out, "{}", line.color(*color))?,
                _ => writeln!(out, "{line}")?,
            }
        }
        out.flush()
    }

    fn paced<W: Write>(&self, out: &mut W, color: Color, line: &str) -> io::Result<()> {
        for ch in line.chars() {
            self.write_char(out, ch, color, true)?;
            if !self.style.char_delay.is_zero() {
                out.flush()?;
                thread::sleep(self.style.char_delay);
            }
        }
        Ok(())
    }

    fn write_char<W: Write>(&self, out: &mut W, ch: char, color: Color, bold: bool) -> io::Result<()> {
        if !self.style.color {
            return write!(out, "{ch}");
        }
        let mut buf = [0u8; 4];
        let ch: &str = ch.encode_utf8(&mut buf);
        let styled = ch.color(color);
        if bold {
            write!(out, "{}", styled.bold())
        } else {
            write!(out, "{styled}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(text: &str, category: Category) -> String {
        let mut out = Vec::new();
        Renderer::new(Style::PLAIN)
            .line(&mut out, category, text)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_line_is_verbatim() {
        assert_eq!(
            render_plain("IPv4 record(s) for example.com:", Category::Heading),
            "IPv4 record(s) for example.com:\n"
        );
    }

    #[test]
    fn test_embedded_newlines_render_separate_lines() {
        assert_eq!(
            render_plain("first\r\nsecond\n", Category::Notice),
            "first\nsecond\n\n"
        );
    }

    #[test]
    fn test_empty_line_renders_newline() {
        assert_eq!(render_plain("", Category::Info), "\n");
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut out = Vec::new();
        Renderer::new(Style::PLAIN)
            .prompt(&mut out, "Continue? (y/n) ")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Continue? (y/n) ");
    }

    #[test]
    fn test_colored_output_keeps_characters() {
        colored::control::set_override(true);
        let mut out = Vec::new();
        let style = Style {
            color: true,
            ..Style::PLAIN
        };
        Renderer::new(style)
            .line(&mut out, Category::Data, "- 93.184.216.34")
            .unwrap();
        colored::control::unset_override();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'), "expected ANSI escapes in {text:?}");
        let stripped = crate::output::strip_ansi(&text);
        assert_eq!(stripped, "- 93.184.216.34\n");
    }

    #[test]
    fn test_striped_and_rainbow_plain() {
        let mut out = Vec::new();
        let renderer = Renderer::new(Style::PLAIN);
        renderer
            .striped(&mut out, "one\ntwo", &[Color::Red, Color::White])
            .unwrap();
        renderer.rainbow(&mut out, "ab\ncd", &[Color::Red]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\nab\ncd\n");
    }
}
