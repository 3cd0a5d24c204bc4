//! Line-oriented questions on standard input.

use std::io::{self, BufRead, Write};

use crate::output::Renderer;

/// Asks `question` and reads one line of input.
///
/// Returns `None` at end of input. The trailing line break and surrounding
/// whitespace are removed.
pub(crate) fn ask<R: BufRead, W: Write>(
    renderer: &Renderer,
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    renderer.prompt(out, question)?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // Keep the terminal tidy when input ends without a newline
        renderer.blank(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// True for an explicit affirmative answer (`y` or `yes`, any case).
pub(crate) fn is_yes(answer: Option<&str>) -> bool {
    matches!(answer, Some(a) if a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
}
