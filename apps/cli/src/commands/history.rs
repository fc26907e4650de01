//! Export, import and reset of learning history.

use anyhow::{Context, Result};
use dictation_core::{ExportFormat, KeyValueStore, RecordStore};
use std::io::{BufRead, Write};
use std::path::Path;

/// Serialize the history to `dest`, or to `out` when no destination is given.
pub fn export_history<S: KeyValueStore, W: Write>(
    store: &RecordStore<S>,
    format: ExportFormat,
    dest: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let snapshot = store.export_snapshot(format)?;
    match dest {
        Some(path) => {
            std::fs::write(path, &snapshot)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(
                out,
                "Exported {} records to {} ({}).",
                store.len(),
                path.display(),
                format.as_str()
            )?;
        }
        None => out.write_all(snapshot.as_bytes())?,
    }
    Ok(())
}

/// Replace the history with the JSON snapshot at `path`.
pub fn import_history<S: KeyValueStore, W: Write>(
    store: &mut RecordStore<S>,
    path: &Path,
    out: &mut W,
) -> Result<usize> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let imported = store
        .import_snapshot(&data)
        .with_context(|| format!("{} was not imported, history is unchanged", path.display()))?;
    writeln!(out, "Imported {imported} records.")?;
    Ok(imported)
}

/// Erase all history, asking first unless `confirmed`.
pub fn reset_history<S, R, W>(
    store: &mut RecordStore<S>,
    confirmed: bool,
    input: &mut R,
    out: &mut W,
) -> Result<bool>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if !confirmed {
        write!(out, "Erase all {} learning records? [y/N] ", store.len())?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            writeln!(out, "Nothing changed.")?;
            return Ok(false);
        }
    }
    store.reset();
    writeln!(out, "Learning history erased.")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use dictation_core::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn populated() -> RecordStore<MemoryStore> {
        let mut store = RecordStore::load(MemoryStore::new());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        store.upsert("cat", Some("The cat sleeps."), true, now);
        store.upsert("dog", None, false, now);
        store
    }

    #[test]
    fn export_to_file_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = populated();
        let mut out: Vec<u8> = Vec::new();

        export_history(&store, ExportFormat::Json, Some(&path), &mut out).unwrap();

        let mut fresh = RecordStore::load(MemoryStore::new());
        let imported = import_history(&mut fresh, &path, &mut out).unwrap();
        assert_eq!(imported, 2);
        assert_eq!(fresh.to_vec(), store.to_vec());
    }

    #[test]
    fn csv_export_to_stdout() {
        let store = populated();
        let mut out: Vec<u8> = Vec::new();
        export_history(&store, ExportFormat::Csv, None, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("word,correctCount,skipCount,lastAnswered,sentence\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn invalid_import_keeps_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"word":"cat"}"#).unwrap();

        let mut store = populated();
        let before = store.to_vec();
        let err = import_history(&mut store, &path, &mut Vec::<u8>::new()).unwrap_err();

        assert!(err.to_string().contains("history is unchanged"));
        assert_eq!(store.to_vec(), before);
    }

    #[test]
    fn reset_requires_confirmation() {
        let mut store = populated();
        let mut out: Vec<u8> = Vec::new();

        let erased = reset_history(&mut store, false, &mut Cursor::new("n\n"), &mut out).unwrap();
        assert!(!erased);
        assert_eq!(store.len(), 2);

        let erased = reset_history(&mut store, false, &mut Cursor::new("yes\n"), &mut out).unwrap();
        assert!(erased);
        assert!(store.is_empty());
    }
}
