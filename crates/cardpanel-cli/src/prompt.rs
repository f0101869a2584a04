use std::io::{self, BufRead, Write};

/// Ask a yes/no question; anything but `y`/`yes` (any case) declines.
///
/// End of input declines as well.
pub fn confirm(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
