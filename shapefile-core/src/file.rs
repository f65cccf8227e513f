//! Input file acquisition with a single interactive retry

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

/// A file opened for reading
#[derive(Debug)]
pub struct OpenedFile {
    pub path: PathBuf,
    pub file: File,
}

impl OpenedFile {
    fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }
}

impl Read for OpenedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// Outcome of [`open_for_reading`]
#[derive(Debug)]
pub enum Acquisition {
    /// The initial name opened
    Primary(OpenedFile),
    /// The initial name failed and the alternate opened
    Alternate(OpenedFile),
    /// Both names failed. Callers must end the process with status 1.
    Exhausted,
}

impl Acquisition {
    /// The open file, unless acquisition was exhausted
    pub fn into_file(self) -> Option<OpenedFile> {
        match self {
            Acquisition::Primary(file) | Acquisition::Alternate(file) => Some(file),
            Acquisition::Exhausted => None,
        }
    }
}

/// Open `initial`, falling back to one alternate name read from `prompt`.
///
/// Status lines for every attempt are written to `out`. The returned error
/// only covers failures to read `prompt` or write `out`.
pub fn open_for_reading<R: BufRead, W: Write>(
    initial: &str,
    prompt: &mut Prompt<R>,
    out: &mut W,
) -> io::Result<Acquisition> {
    match OpenedFile::open(Path::new(initial)) {
        Ok(file) => {
            debug!(path = initial, "opened input file");
            writeln!(out, "File opened successfully: {}", initial)?;
            return Ok(Acquisition::Primary(file));
        }
        Err(e) => {
            debug!(path = initial, error = %e, "failed to open input file");
            writeln!(out, "Error: File could not be opened: {}", initial)?;
        }
    }

    write!(out, "Enter alternative filename: ")?;
    out.flush()?;

    let alternate = match prompt.read_filename()? {
        Some(name) => name,
        None => {
            debug!("no alternative filename given");
            writeln!(out)?;
            writeln!(out, "Error: Failed to open alternative file. Exiting.")?;
            return Ok(Acquisition::Exhausted);
        }
    };

    match OpenedFile::open(Path::new(&alternate)) {
        Ok(file) => {
            debug!(path = %alternate, "opened alternative file");
            writeln!(out, "Alternative file opened successfully: {}", alternate)?;
            Ok(Acquisition::Alternate(file))
        }
        Err(e) => {
            debug!(path = %alternate, error = %e, "failed to open alternative file");
            writeln!(out, "Error: Failed to open alternative file. Exiting.")?;
            Ok(Acquisition::Exhausted)
        }
    }
}

/// Interactive input read one whitespace-delimited name at a time.
///
/// Names left over on a line are kept for the next read.
#[derive(Debug)]
pub struct Prompt<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next name, skipping blank lines. `None` once the input is exhausted.
    pub fn read_filename(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        loop {
            if let Some(name) = self.pending.pop_front() {
                return Ok(Some(name));
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }
}
