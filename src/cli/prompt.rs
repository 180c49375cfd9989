//! Keep-or-skip prompt shown after each rendered image.

use std::io::{self, BufRead, Write};

/// Question printed after each image.
pub const KEEP_PROMPT: &str = "Do you want to keep this image ? (y/n)";

/// User response to [`KEEP_PROMPT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Stop here with the current image
    Keep,
    /// Show the next image
    Skip,
    /// Input closed; stop without keeping anything
    Quit,
}

/// Parse a typed answer. Only `y` (any case, surrounding whitespace ignored) keeps.
pub fn parse_answer(line: &str) -> Answer {
    if line.trim().eq_ignore_ascii_case("y") {
        Answer::Keep
    } else {
        Answer::Skip
    }
}

/// Print the prompt and read one line.
pub fn ask_keep<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Answer> {
    write!(output, "{}", KEEP_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(Answer::Quit);
    }
    Ok(parse_answer(&line))
}
