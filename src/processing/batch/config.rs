use std::path::{Path, PathBuf};

/// Roots of a batch run. The output tree mirrors the input tree.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
}

impl BatchConfig {
    /// `output_root` defaults to `input_root`, which puts the run in in-place mode.
    pub fn new(input_root: impl Into<PathBuf>, output_root: Option<PathBuf>) -> Self {
        let input_root = input_root.into();
        let output_root = output_root.unwrap_or_else(|| input_root.clone());
        Self {
            input_root,
            output_root,
        }
    }

    /// Whether both roots name the same directory.
    ///
    /// Compares canonical paths so `dir` and `./dir/` agree; falls back to a
    /// literal comparison while either root does not exist yet.
    pub fn in_place(&self) -> bool {
        match (
            canonical(&self.input_root),
            canonical(&self.output_root),
        ) {
            (Some(input), Some(output)) => input == output,
            _ => self.input_root == self.output_root,
        }
    }
}

fn canonical(path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path).ok()
}
