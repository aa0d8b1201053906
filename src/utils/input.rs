use std::io;
use std::io::Write;

/// Prints `prompt` and reads one trimmed line. EOF reads as an empty line.
pub fn input(prompt: &str) -> io::Result<String> {
    print!("{} ", prompt);
    io::stdout().flush()?; // prompt before blocking on stdin

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Empty input reads as `None`.
pub fn input_optional(prompt: &str) -> io::Result<Option<String>> {
    let value = input(prompt)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

pub fn input_number(prompt: &str) -> io::Result<Option<u32>> {
    Ok(input_optional(prompt)?.and_then(|value| value.parse().ok()))
}
