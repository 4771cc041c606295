//! Content loaders for reading calculator data from JSON files.

pub mod catalog;
pub mod factory;
pub mod prices;
pub mod profile;
pub mod rules;

pub use catalog::CatalogLoader;
pub use factory::ContentFactory;
pub use prices::{LoadedPrices, PriceSource, PricesLoader};
pub use profile::ProfileLoader;
pub use rules::RulesLoader;

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Read a JSON file for lenient callers.
///
/// `None` when the file does not exist or does not parse; the latter is logged.
pub(crate) fn read_json_lenient(path: &Path) -> Option<serde_json::Value> {
    if !path.exists() {
        return None;
    }
    let parsed: LoadResult<serde_json::Value> = read_file(path).and_then(|content| {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON {}", path.display()))
    });
    match parsed {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable JSON file");
            None
        }
    }
}

/// Write `value` as pretty JSON without ever leaving a half-written file.
///
/// Parent directories are created as needed. The document goes to a temporary
/// file in the target directory, which is then renamed over `path`.
pub fn write_json_atomic(path: &Path, value: &impl Serialize) -> LoadResult<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create directory {}", parent.display()))?;

    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    json.push('\n');

    let mut tmp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    tmp.write_all(json.as_bytes())
        .with_context(|| format!("Failed to write temp file for {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| anyhow::anyhow!("Failed to replace {}: {}", path.display(), e.error))?;

    tracing::debug!(path = %path.display(), "wrote JSON atomically");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_creates_parents_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/data.json");

        write_json_atomic(&path, &serde_json::json!({"a": 1})).unwrap();
        write_json_atomic(&path, &serde_json::json!({"b": 2})).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({"b": 2}));

        // no temp files left behind
        let entries = std::fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn lenient_read_tolerates_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_json_lenient(&dir.path().join("missing.json")).is_none());

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(read_json_lenient(&bad).is_none());

        let good = dir.path().join("good.json");
        std::fs::write(&good, "[1, 2]").unwrap();
        assert_eq!(read_json_lenient(&good), Some(serde_json::json!([1, 2])));
    }
}
