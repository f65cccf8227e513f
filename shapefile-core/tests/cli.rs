use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shapefile"))
}

fn make_temp_dir(name: &str) -> Result<PathBuf, String> {
    let base = std::env::temp_dir().join("shapefile_cli_tests");
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| e.to_string())?
        .as_nanos();
    let dir = base.join(format!("{}_{}", name, now));
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    Ok(dir)
}

struct CommandResult {
    code: Option<i32>,
    stdout: String,
}

fn run_with_input(input: &str) -> Result<CommandResult, String> {
    let mut child = Command::new(bin_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .map_err(|e| e.to_string())?;

    if let Some(mut handle) = child.stdin.take() {
        handle
            .write_all(input.as_bytes())
            .map_err(|e| e.to_string())?;
    }

    let output = child.wait_with_output().map_err(|e| e.to_string())?;
    Ok(CommandResult {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
    })
}

#[test]
fn processes_named_file() -> Result<(), String> {
    let dir = make_temp_dir("named")?;
    let file = dir.join("shapes.txt");
    fs::write(&file, "square 4\nrectangle 3 5\ncircle 2\ntriangle 1 1 1\nsquare 2\n")
        .map_err(|e| e.to_string())?;
    let name = file.to_str().ok_or("bad path")?;

    let result = run_with_input(&format!("{}\n", name))?;
    if result.code != Some(0) {
        return Err(format!("expected exit 0, got {:?}", result.code));
    }
    let expected = format!(
        "Enter filename: File opened successfully: {}\n\
         --- Processing Shapes ---\n\
         Line 1: Square Area: 16.00\n\
         Line 2: Rectangle Area: 15.00\n\
         Line 3: Circle Area: 12.57\n\
         Parse error at record 4: Unknown shape type: triangle\n\
         --- Processing Complete ---\n",
        name
    );
    if result.stdout != expected {
        return Err(format!("unexpected output:\n{}", result.stdout));
    }
    Ok(())
}

#[test]
fn falls_back_to_alternate_file() -> Result<(), String> {
    let dir = make_temp_dir("alternate")?;
    let missing = dir.join("missing.txt");
    let file = dir.join("shapes.txt");
    fs::write(&file, "circle 1\n").map_err(|e| e.to_string())?;

    let input = format!(
        "{}\n{}\n",
        missing.to_str().ok_or("bad path")?,
        file.to_str().ok_or("bad path")?
    );
    let result = run_with_input(&input)?;
    if result.code != Some(0) {
        return Err(format!("expected exit 0, got {:?}", result.code));
    }
    if !result.stdout.contains("Error: File could not be opened") {
        return Err(format!("expected open failure, got: {}", result.stdout));
    }
    if !result.stdout.contains("Alternative file opened successfully") {
        return Err(format!("expected alternate open, got: {}", result.stdout));
    }
    if !result.stdout.contains("Line 1: Circle Area: 3.14") {
        return Err(format!("expected alternate contents, got: {}", result.stdout));
    }
    Ok(())
}

#[test]
fn exits_one_when_both_files_fail() -> Result<(), String> {
    let dir = make_temp_dir("both")?;
    let input = format!(
        "{}\n{}\n",
        dir.join("a.txt").display(),
        dir.join("b.txt").display()
    );

    let result = run_with_input(&input)?;
    if result.code != Some(1) {
        return Err(format!("expected exit 1, got {:?}", result.code));
    }
    if !result
        .stdout
        .contains("Error: Failed to open alternative file. Exiting.")
    {
        return Err(format!("expected exit message, got: {}", result.stdout));
    }
    if result.stdout.contains("Processing Shapes") {
        return Err("shape processing should not start".into());
    }
    Ok(())
}

#[test]
fn exits_one_on_empty_stdin() -> Result<(), String> {
    let result = run_with_input("")?;
    if result.code != Some(1) {
        return Err(format!("expected exit 1, got {:?}", result.code));
    }
    Ok(())
}

#[test]
fn bytes_after_unknown_tag_do_not_matter() -> Result<(), String> {
    let dir = make_temp_dir("trailing_bytes")?;
    let file = dir.join("shapes.txt");
    fs::write(&file, b"square 4\ntriangle 1 1 1\n\xff\xfe junk\n".as_slice())
        .map_err(|e| e.to_string())?;

    let result = run_with_input(&format!("{}\n", file.to_str().ok_or("bad path")?))?;
    if result.code != Some(0) {
        return Err(format!("expected exit 0, got {:?}", result.code));
    }
    for expected in [
        "Line 1: Square Area: 16.00",
        "Parse error at record 2: Unknown shape type: triangle",
        "--- Processing Complete ---",
    ] {
        if !result.stdout.contains(expected) {
            return Err(format!("expected {:?}, got: {}", expected, result.stdout));
        }
    }
    Ok(())
}

#[cfg(unix)]
#[test]
fn unreadable_handle_is_empty_input() -> Result<(), String> {
    let dir = make_temp_dir("directory")?;

    let result = run_with_input(&format!("{}\n", dir.to_str().ok_or("bad path")?))?;
    if result.code != Some(0) {
        return Err(format!("expected exit 0, got {:?}", result.code));
    }
    if !result
        .stdout
        .ends_with("--- Processing Shapes ---\n--- Processing Complete ---\n")
    {
        return Err(format!("expected empty scan, got: {}", result.stdout));
    }
    Ok(())
}

#[test]
fn alternate_name_on_same_line() -> Result<(), String> {
    let dir = make_temp_dir("same_line")?;
    let file = dir.join("shapes.txt");
    fs::write(&file, "square 3\n").map_err(|e| e.to_string())?;

    let input = format!(
        "{} {}\n",
        dir.join("missing.txt").to_str().ok_or("bad path")?,
        file.to_str().ok_or("bad path")?
    );
    let result = run_with_input(&input)?;
    if result.code != Some(0) {
        return Err(format!("expected exit 0, got {:?}", result.code));
    }
    if !result.stdout.contains("Line 1: Square Area: 9.00") {
        return Err(format!("expected alternate contents, got: {}", result.stdout));
    }
    Ok(())
}
