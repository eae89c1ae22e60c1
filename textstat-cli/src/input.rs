//! Manual text entry.

use std::io::{self, BufRead, Read};

/// Reads lines from `reader` until an empty line or end of input.
///
/// The terminating empty line is not part of the text. Lines are joined
/// with `\n`; a trailing `\r` from CRLF input is dropped.
pub fn read_manual_text<R: BufRead>(reader: R) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            break;
        }
        lines.push(line.to_owned());
    }

    Ok(lines.join("\n"))
}

/// Reads all of `reader`, for text piped or redirected into stdin.
pub fn read_piped_text<R: Read>(mut reader: R) -> io::Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
