//! File I/O: reading, writing, paths, directory walks
//!
//! Run with: cargo run --bin p13_file_io

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn whole_file_round_trip(dir: &Path) -> Result<()> {
    println!("=== Whole-File Read and Write ===\n");

    let path = dir.join("greeting.txt");
    fs::write(&path, "Hello, World!\n").context("writing greeting")?;

    let content = fs::read_to_string(&path).context("reading greeting")?;
    println!("wrote then read: {:?}", content);

    // Missing files are a value to handle, not a crash.
    let missing = fs::read_to_string(dir.join("nope.txt"));
    println!("missing file -> {:?}", missing.map_err(|e| e.kind()));
    Ok(())
}

fn line_oriented(dir: &Path) -> Result<()> {
    println!("\n=== Lines, Buffers, Appends ===\n");

    let path = dir.join("log.txt");

    // Buffered writer: one syscall per flush, not per line.
    let mut writer = BufWriter::new(File::create(&path)?);
    writeln!(writer, "Line 1")?;
    writeln!(writer, "Line 2")?;
    writer.flush()?;

    OpenOptions::new()
        .append(true)
        .open(&path)?
        .write_all(b"Line 3 (appended)\n")?;

    let reader = BufReader::new(File::open(&path)?);
    for (number, line) in reader.lines().enumerate() {
        println!("  {}: {}", number + 1, line?);
    }
    Ok(())
}

fn metadata_and_paths(dir: &Path) -> Result<()> {
    println!("\n=== Metadata and Paths ===\n");

    let path = dir.join("greeting.txt");
    println!("exists:  {}", path.exists());
    println!("size:    {} bytes", fs::metadata(&path)?.len());
    println!("is_dir:  {} (dir itself: {})", path.is_dir(), dir.is_dir());

    let example = Path::new("/path/to/file.txt");
    println!("file_name: {:?}", example.file_name());
    println!("parent:    {:?}", example.parent());
    println!("extension: {:?}", example.extension());
    println!("stem:      {:?}", example.file_stem());
    println!("joined:    {:?}", Path::new("/base").join("sub").join("file.rs"));
    Ok(())
}

fn directories(dir: &Path) -> Result<()> {
    println!("\n=== Directories ===\n");

    let nested = dir.join("project").join("src");
    fs::create_dir_all(&nested)?;
    fs::write(nested.join("main.rs"), "fn main() {}\n")?;
    fs::write(nested.join("lib.rs"), "// lib\n")?;
    fs::write(dir.join("project").join("README.md"), "# demo\n")?;

    let mut entries: Vec<String> = fs::read_dir(dir.join("project"))?
        .filter_map(|entry| Some(entry.ok()?.file_name().to_string_lossy().into_owned()))
        .collect();
    entries.sort();
    println!("read_dir(project): {:?}", entries);

    // Recursive walk, files only.
    let mut walked: Vec<String> = walkdir::WalkDir::new(dir.join("project"))
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Some(e.path().file_name()?.to_string_lossy().into_owned()))
        .collect();
    walked.sort();
    println!("recursive files:   {:?}", walked);

    let pattern = format!("{}/**/*.rs", dir.join("project").display());
    let mut matched: Vec<String> = glob::glob(&pattern)?
        .filter_map(|p| p.ok())
        .filter_map(|p| Some(p.file_name()?.to_string_lossy().into_owned()))
        .collect();
    matched.sort();
    println!("glob **/*.rs:      {:?}", matched);
    Ok(())
}

fn main() -> Result<()> {
    println!("=== File I/O Demo ===\n");

    // All scratch files live under a temp dir that removes itself on drop.
    let scratch = tempfile::tempdir().context("creating scratch dir")?;
    let dir = scratch.path();
    println!("scratch space: {}\n", dir.display());

    whole_file_round_trip(dir)?;
    line_oriented(dir)?;
    metadata_and_paths(dir)?;
    directories(dir)?;

    println!("\n=== Key Points ===");
    println!("1. fs::read_to_string / fs::write cover the one-shot cases");
    println!("2. BufReader::lines streams without loading the whole file");
    println!("3. Path decomposes into name, stem, extension, parent");
    println!("4. The TempDir guard deletes the scratch space on drop");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("data.txt");
        fs::write(&path, "payload")?;
        assert_eq!(fs::read_to_string(&path)?, "payload");
        Ok(())
    }

    #[test]
    fn append_adds_lines() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("log.txt");
        fs::write(&path, "one\n")?;
        OpenOptions::new()
            .append(true)
            .open(&path)?
            .write_all(b"two\n")?;
        let lines: Vec<String> = BufReader::new(File::open(&path)?)
            .lines()
            .collect::<std::io::Result<_>>()?;
        assert_eq!(lines, vec!["one", "two"]);
        Ok(())
    }

    #[test]
    fn path_decomposition() {
        let p = Path::new("/path/to/file.txt");
        assert_eq!(p.file_name().unwrap(), "file.txt");
        assert_eq!(p.extension().unwrap(), "txt");
        assert_eq!(p.parent().unwrap(), Path::new("/path/to"));
    }

    #[test]
    fn walk_finds_nested_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested)?;
        fs::write(nested.join("deep.txt"), "x")?;
        fs::write(dir.path().join("top.txt"), "y")?;

        let count = walkdir::WalkDir::new(dir.path())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count();
        assert_eq!(count, 2);
        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = fs::read_to_string("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
