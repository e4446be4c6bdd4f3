use std::io::{self, BufRead, Write};

/// Shows `names` as a numbered list and asks for one of them.
///
/// Re-prompts until a valid number is entered. Returns the 0-based index.
pub fn choose<R: BufRead, W: Write>(
    heading: &str,
    label: &str,
    names: &[String],
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    writeln!(output, "\n{}:", heading)?;
    for (i, name) in names.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, name)?;
    }

    let question = format!("Select {} (1-{}): ", label, names.len());
    loop {
        if let Some(choice) = ask_number(&question, input, output)? {
            if (1..=names.len()).contains(&choice) {
                return Ok(choice - 1);
            }
        }
        writeln!(output, "Invalid choice. Try again.")?;
    }
}

/// Asks how many listings to show, between 1 and `total`
pub fn ask_limit<R: BufRead, W: Write>(total: usize, input: &mut R, output: &mut W) -> io::Result<usize> {
    let question = format!("How many jobs to show? (1-{}): ", total);
    loop {
        if let Some(limit) = ask_number(&question, input, output)? {
            if (1..=total).contains(&limit) {
                return Ok(limit);
            }
        }
        writeln!(output, "Please enter a number between 1 and {}.", total)?;
    }
}

fn ask_number<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<usize>> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim().parse().ok())
}
