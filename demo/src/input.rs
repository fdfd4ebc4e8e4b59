use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("error! File Is Not Found! ({})", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {text:?} is not an integer")]
    Parse { line: usize, text: String },
}

/// Parses one integer per line. Blank lines are skipped.
pub fn parse_integers<R: BufRead>(reader: R) -> Result<Vec<i64>, InputError> {
    let mut ints = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let v = text.parse::<i64>().map_err(|_| InputError::Parse {
            line: n + 1,
            text: text.to_string(),
        })?;
        ints.push(v);
    }
    Ok(ints)
}

pub fn read_integers(path: &Path) -> Result<Vec<i64>, InputError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io(e),
    })?;
    parse_integers(BufReader::new(file))
}

/// Like [`read_integers`], but reports any failure on stderr and degrades to
/// an empty sequence.
pub fn read_integers_or_empty(path: &Path) -> Vec<i64> {
    match read_integers(path) {
        Ok(ints) => ints,
        Err(e) => {
            eprintln!("{e}");
            Vec::new()
        }
    }
}

/// Asks for a branching factor until a usable one is typed.
///
/// Fails only when `input` ends before a valid value arrives.
pub fn prompt_branching_factor<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<usize> {
    let mut line = String::new();
    loop {
        write!(out, "Enter your d value: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended before a d value was given");
        }
        match line.trim().parse::<i64>() {
            Err(_) => writeln!(out, "Please enter a valid integer value. Lets Try again.")?,
            Ok(d) if d < 2 => writeln!(out, "The d value must be at least 2. Lets Try again.")?,
            Ok(d) => return usize::try_from(d).context("d value does not fit in memory"),
        }
    }
}
