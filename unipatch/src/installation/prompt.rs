//! Interactive executable-path prompt for the advance-mode installation.

use std::io::{self, BufRead, Write};

/// Fixed prompt written before reading the executable path.
pub const EXECUTABLE_PROMPT: &str = "Please enter the file path of Unity.exe:";

/// Source of a user-supplied executable path.
///
/// The advance-mode installation defers its executable location to an
/// external input source instead of deriving it from a directory. Callers
/// that need timeouts or cancellation wrap the call themselves; the
/// implementations here block until a full line is available.
pub trait PathPrompt {
    /// Ask the source for an executable path.
    ///
    /// The answer is returned exactly as supplied — no validation, no
    /// trimming, empty input passes through unchanged.
    fn request_path(&mut self) -> io::Result<String>;
}

/// Prompts for the executable path on standard input/output.
///
/// Writes [`EXECUTABLE_PROMPT`] to stdout and blocks reading one line from
/// stdin.
#[derive(Debug, Default)]
pub struct StdioPrompt;

impl StdioPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PathPrompt for StdioPrompt {
    fn request_path(&mut self) -> io::Result<String> {
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        prompt_line(&mut stdin.lock(), &mut stdout)
    }
}

/// Write the prompt to `writer` and read one line from `reader`.
///
/// Only the line terminator is removed; leading and trailing whitespace in
/// the answer is preserved. End of input yields an empty string.
fn prompt_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> io::Result<String> {
    writeln!(writer, "{}", EXECUTABLE_PROMPT)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_prompt(input: &str) -> (String, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let answer = prompt_line(&mut reader, &mut output).unwrap();
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_writes_fixed_prompt_line() {
        let (_, output) = run_prompt("/opt/unity/Unity\n");
        assert_eq!(output, format!("{}\n", EXECUTABLE_PROMPT));
    }

    #[test]
    fn test_prompt_returns_line_without_terminator() {
        let (answer, _) = run_prompt("/opt/unity/Unity\n");
        assert_eq!(answer, "/opt/unity/Unity");
    }

    #[test]
    fn test_prompt_handles_crlf_terminator() {
        let (answer, _) = run_prompt("C:\\Unity\\Editor\\Unity.exe\r\n");
        assert_eq!(answer, "C:\\Unity\\Editor\\Unity.exe");
    }

    #[test]
    fn test_prompt_preserves_surrounding_whitespace() {
        let (answer, _) = run_prompt("  /path with spaces/Unity  \n");
        assert_eq!(answer, "  /path with spaces/Unity  ");
    }

    #[test]
    fn test_prompt_empty_line_passes_through() {
        let (answer, _) = run_prompt("\n");
        assert_eq!(answer, "");
    }

    #[test]
    fn test_prompt_end_of_input_yields_empty() {
        let (answer, _) = run_prompt("");
        assert_eq!(answer, "");
    }
}
