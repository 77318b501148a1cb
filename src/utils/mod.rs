pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{AssetError, AssetResult, PathError, ValidationError};
pub use validation::{validate_color, validate_input_dir};
pub use formats::{ImageFormat, has_extension_in};
pub use fs::{create_dir_all, disambiguated, relocate, unique_output_path};
