//! `.proto` file discovery

use crate::console::Console;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find `.proto` files under `dir`, recursively, in sorted path order
pub fn discover_protos(dir: &Path, console: &Console) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let mut protos = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to walk directory {}", dir.display()))?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("proto") {
            continue;
        }

        console.detail(format!("Found: {}", path.display()));
        protos.push(path.to_path_buf());
    }

    console.success(format!("Discovered {} proto files", protos.len()));

    Ok(protos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_sorted_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("b.proto"), "").unwrap();
        fs::write(dir.path().join("a.proto"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested/deeper/c.proto"), "").unwrap();

        let protos = discover_protos(dir.path(), &Console::stderr(false)).unwrap();
        let names: Vec<_> = protos
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.proto"),
                PathBuf::from("b.proto"),
                PathBuf::from("nested/deeper/c.proto"),
            ]
        );
    }

    #[test]
    fn test_discover_requires_directory() {
        assert!(discover_protos(Path::new("/no/such/dir"), &Console::stderr(false)).is_err());
    }
}
