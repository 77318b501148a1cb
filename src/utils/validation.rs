use std::path::Path;
use crate::core::RgbColor;
use crate::utils::ValidationError;

/// Validates that the input root exists and is a directory
pub fn validate_input_dir(path: &Path) -> Result<(), ValidationError> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path));
    }

    if !path.is_dir() {
        return Err(ValidationError::not_a_directory(path));
    }

    Ok(())
}

/// Validates raw colour components coming from the command line
pub fn validate_color(components: &[i64]) -> Result<RgbColor, ValidationError> {
    let [r, g, b] = components else {
        return Err(ValidationError::settings(format!(
            "Expected 3 colour components, got {}",
            components.len()
        )));
    };

    let channel = |value: i64| {
        u8::try_from(value).map_err(|_| {
            ValidationError::settings(format!(
                "Invalid colour component: {}. Must be between 0 and 255",
                value
            ))
        })
    };

    Ok(RgbColor::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::PathError;
    use tempfile::TempDir;

    #[test]
    fn missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            validate_input_dir(&missing),
            Err(ValidationError::Path(PathError::NotFound(_)))
        ));
        assert!(validate_input_dir(dir.path()).is_ok());
    }

    #[test]
    fn file_is_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.png");
        std::fs::write(&file, b"").unwrap();
        assert!(matches!(
            validate_input_dir(&file),
            Err(ValidationError::Path(PathError::NotDirectory(_)))
        ));
    }

    #[test]
    fn colour_components_must_fit_a_byte() {
        assert_eq!(validate_color(&[255, 0, 10]).unwrap(), RgbColor::new(255, 0, 10));
        assert!(validate_color(&[256, 0, 0]).is_err());
        assert!(validate_color(&[-1, 0, 0]).is_err());
        assert!(validate_color(&[1, 2]).is_err());
    }
}
