//! Startup resolution prompt.

use std::io::{self, BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

const PROMPT: &str = "Screen resolution (1728x1080 or 1920x1080, Enter for 1920x1080)";

/// Ask for the screen resolution.
///
/// Returns the raw answer; parsing and validation happen in the caller.
/// Interactive terminals get a dialoguer prompt, anything else a plain line
/// read from stdin.
pub fn ask_resolution() -> io::Result<String> {
    if atty::is(atty::Stream::Stdin) {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    } else {
        read_answer(&mut io::stdin().lock(), &mut io::stdout())
    }
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{}: ", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
