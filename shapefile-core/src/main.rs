use std::io::{self, Write};
use std::process;

use shapefile_core::{open_for_reading, process_reader, Acquisition, Config, Prompt};

fn main() {
    shapefile_core::init_tracing();

    if let Err(e) = run() {
        eprintln!("I/O error: {}", e);
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    write!(out, "Enter filename: ")?;
    out.flush()?;
    // An exhausted stdin falls through to the retry path like a bad name
    let filename = prompt.read_filename()?.unwrap_or_default();

    let file = match open_for_reading(&filename, &mut prompt, &mut out)? {
        Acquisition::Primary(file) | Acquisition::Alternate(file) => file,
        Acquisition::Exhausted => {
            out.flush()?;
            process::exit(1);
        }
    };

    process_reader(file, &mut out, &Config::default())?;
    Ok(())
}
