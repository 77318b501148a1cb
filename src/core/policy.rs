//! Resize policy: the single target-size rule applied to every image of a run.

use std::fmt;
use std::str::FromStr;
use crate::utils::ValidationError;

/// How the resizer picks a new size for each image.
///
/// Exactly one mode is active per run. Build it through [`ResizePolicy::scale`],
/// [`ResizePolicy::height`], [`ResizePolicy::width`], [`ResizePolicy::from_parts`]
/// or by parsing a `s=`/`h=`/`w=` flag; all of them reject values outside the
/// allowed range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizePolicy {
    /// Multiply both sides by a factor in the open interval (0, 1)
    Scale(f64),
    /// Shrink to this height, keeping the aspect ratio
    TargetHeight(u32),
    /// Shrink to this width, keeping the aspect ratio
    TargetWidth(u32),
}

impl ResizePolicy {
    pub fn scale(factor: f64) -> Result<Self, ValidationError> {
        let policy = Self::Scale(factor);
        policy.validate()?;
        Ok(policy)
    }

    pub fn height(px: i64) -> Result<Self, ValidationError> {
        Ok(Self::TargetHeight(positive_px(px, "Height")?))
    }

    pub fn width(px: i64) -> Result<Self, ValidationError> {
        Ok(Self::TargetWidth(positive_px(px, "Width")?))
    }

    /// Builds a policy from optional settings, exactly one of which must be present.
    pub fn from_parts(
        scale: Option<f64>,
        height: Option<i64>,
        width: Option<i64>,
    ) -> Result<Self, ValidationError> {
        match (scale, height, width) {
            (Some(factor), None, None) => Self::scale(factor),
            (None, Some(px), None) => Self::height(px),
            (None, None, Some(px)) => Self::width(px),
            (None, None, None) => Err(ValidationError::policy(
                "Specify either scale (s), height (h), or width (w)",
            )),
            _ => Err(ValidationError::policy(
                "Only one of scale (s), height (h), or width (w) may be given",
            )),
        }
    }

    /// Re-checks the range invariant of the active mode.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Self::Scale(factor) if !(factor > 0.0 && factor < 1.0) => Err(
                ValidationError::policy("Scale must be between 0 and 1"),
            ),
            Self::TargetHeight(0) => Err(ValidationError::policy("Height must be greater than 0")),
            Self::TargetWidth(0) => Err(ValidationError::policy("Width must be greater than 0")),
            _ => Ok(()),
        }
    }
}

fn positive_px(px: i64, what: &str) -> Result<u32, ValidationError> {
    if px <= 0 {
        return Err(ValidationError::policy(format!("{what} must be greater than 0")));
    }
    u32::try_from(px).map_err(|_| ValidationError::policy(format!("{what} is too large: {px}")))
}

impl FromStr for ResizePolicy {
    type Err = ValidationError;

    /// Parses `s=<factor>`, `h=<pixels>` or `w=<pixels>`.
    fn from_str(flag: &str) -> Result<Self, Self::Err> {
        let (key, value) = flag.split_once('=').ok_or_else(|| {
            ValidationError::policy(format!("Expected s=, h= or w=, got '{flag}'"))
        })?;
        let value = value.trim();

        match key.trim() {
            "s" => {
                let factor = value.parse::<f64>().map_err(|_| {
                    ValidationError::policy(format!("Scale is not a number: '{value}'"))
                })?;
                Self::scale(factor)
            }
            "h" => Self::height(parse_px(value, "Height")?),
            "w" => Self::width(parse_px(value, "Width")?),
            other => Err(ValidationError::policy(format!(
                "Unknown resize mode '{other}' (use s, h or w)"
            ))),
        }
    }
}

fn parse_px(value: &str, what: &str) -> Result<i64, ValidationError> {
    value
        .parse::<i64>()
        .map_err(|_| ValidationError::policy(format!("{what} is not a whole number: '{value}'")))
}

impl fmt::Display for ResizePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(factor) => write!(f, "s={factor}"),
            Self::TargetHeight(px) => write!(f, "h={px}"),
            Self::TargetWidth(px) => write!(f, "w={px}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_mode() {
        assert_eq!("s=0.5".parse::<ResizePolicy>().unwrap(), ResizePolicy::Scale(0.5));
        assert_eq!("h=300".parse::<ResizePolicy>().unwrap(), ResizePolicy::TargetHeight(300));
        assert_eq!("w=64".parse::<ResizePolicy>().unwrap(), ResizePolicy::TargetWidth(64));
    }

    #[test]
    fn scale_must_be_strictly_between_zero_and_one() {
        for flag in ["s=1.5", "s=1", "s=0", "s=-0.2", "s=nan"] {
            assert!(
                matches!(flag.parse::<ResizePolicy>(), Err(ValidationError::Policy(_))),
                "{flag} should be rejected"
            );
        }
    }

    #[test]
    fn pixel_targets_must_be_positive_integers() {
        for flag in ["h=0", "h=-3", "w=0", "w=12.5", "h=abc", "w=99999999999"] {
            assert!(flag.parse::<ResizePolicy>().is_err(), "{flag} should be rejected");
        }
    }

    #[test]
    fn malformed_flags_are_rejected() {
        for flag in ["", "s", "x=3", "0.5", "=0.5"] {
            assert!(flag.parse::<ResizePolicy>().is_err(), "{flag:?} should be rejected");
        }
    }

    #[test]
    fn exactly_one_part_required() {
        assert!(ResizePolicy::from_parts(None, None, None).is_err());
        assert!(ResizePolicy::from_parts(Some(0.5), Some(10), None).is_err());
        assert!(ResizePolicy::from_parts(None, Some(10), Some(10)).is_err());
        assert_eq!(
            ResizePolicy::from_parts(None, None, Some(10)).unwrap(),
            ResizePolicy::TargetWidth(10)
        );
    }

    #[test]
    fn validate_catches_hand_built_policies() {
        assert!(ResizePolicy::Scale(2.0).validate().is_err());
        assert!(ResizePolicy::TargetHeight(0).validate().is_err());
        assert!(ResizePolicy::Scale(0.25).validate().is_ok());
    }

    #[test]
    fn displays_as_flag() {
        assert_eq!(ResizePolicy::Scale(0.5).to_string(), "s=0.5");
        assert_eq!(ResizePolicy::TargetWidth(8).to_string(), "w=8");
    }
}
