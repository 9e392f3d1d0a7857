//! Writing the transformed collection to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::monster::Monster;

/// Write the collection as a pretty-printed JSON array at `path`.
///
/// Creates the parent directory when missing and overwrites any
/// existing file. Serializes to memory and writes in one shot; any
/// I/O failure surfaces as an error.
pub fn write_monsters(path: impl AsRef<Path>, monsters: &[Monster]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec_pretty(monsters)?)?;
    info!("wrote {} monsters to {}", monsters.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("monster-forge-{}-{}", label, std::process::id()))
    }

    fn sample() -> Monster {
        Monster {
            name: "Merrow".to_string(),
            max_hit_points: 45,
            ..Monster::default()
        }
    }

    #[test]
    fn test_writes_pretty_json_and_creates_parent() {
        let dir = scratch_dir("write");
        let path = dir.join("user_data").join("monsters.json");

        write_monsters(&path, &[sample()]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n"), "output should be pretty-printed");
        let parsed: Vec<Monster> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Merrow");
        assert_eq!(parsed[0].max_hit_points, 45);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("monsters.json");

        write_monsters(&path, &[sample(), sample()]).unwrap();
        write_monsters(&path, &[sample()]).unwrap();

        let parsed: Vec<Monster> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_empty_collection_writes_empty_array() {
        let dir = scratch_dir("empty");
        let path = dir.join("monsters.json");

        write_monsters(&path, &[]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), "[]");

        fs::remove_dir_all(&dir).ok();
    }

    // /dev/full accepts the open but fails every write with ENOSPC.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_is_reported() {
        let result = write_monsters("/dev/full", &[sample()]);
        assert!(result.is_err(), "a failed write must not report success");
    }
}
