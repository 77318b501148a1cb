use std::path::{Path, PathBuf};
use crate::utils::{AssetError, AssetResult};

/// Maps `path` under `input_root` onto the same relative location under `output_root`.
pub fn relocate(path: &Path, input_root: &Path, output_root: &Path) -> AssetResult<PathBuf> {
    let relative = path.strip_prefix(input_root).map_err(|_| {
        AssetError::processing(format!(
            "{} is not inside {}",
            path.display(),
            input_root.display()
        ))
    })?;
    Ok(output_root.join(relative))
}

/// Returns `path` with `(n)` inserted between the file stem and the extension.
///
/// `a.png` with `n = 2` becomes `a(2).png`; a name without extension just gets
/// the suffix appended. Only the last extension counts, so `a.tar.png` becomes
/// `a.tar(1).png`.
pub fn disambiguated(path: &Path, n: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{stem}({n}).{}", ext.to_string_lossy()),
        None => format!("{stem}({n})"),
    };
    path.with_file_name(name)
}

/// First of `path`, `stem(1).ext`, `stem(2).ext`, ... that does not exist yet.
///
/// Not atomic: another process can claim the name between the check and the write.
pub fn unique_output_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let mut counter = 1;
    loop {
        let candidate = disambiguated(path, counter);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Create a directory and all of its parents
pub fn create_dir_all(path: impl AsRef<Path>) -> AssetResult<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path)
        .map_err(|e| AssetError::io(format!("Failed to create {}: {}", path.display(), e)))
}
