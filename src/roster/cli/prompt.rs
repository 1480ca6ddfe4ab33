use roster::error::Result;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on the terminal. Anything but "y"/"yes" is a no.
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ask(&mut stdin.lock(), &mut stdout, question)
}

pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> (bool, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let confirmed = ask(&mut input, &mut output, "Continue?").unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn yes_answers_confirm() {
        assert!(answer("y\n").0);
        assert!(answer("YES\n").0);
    }

    #[test]
    fn anything_else_declines() {
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("").0);
    }

    #[test]
    fn question_is_written_with_hint() {
        assert_eq!(answer("y\n").1, "Continue? [y/N] ");
    }
}
