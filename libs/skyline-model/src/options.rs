//! Run-time options.
//!
//! Every field defaults to the matching `config` constant, so a partial JSON
//! document only overrides what it names.

use config::constants::{DEFAULT_STL_HEADER, EMBLEM_IMAGE, MAX_YEARS, PRIMARY_FONT};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Which maximum count a column height is normalized against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightScaling {
    /// Each year against its own busiest day.
    #[default]
    PerYear,
    /// Every year against the busiest day of the whole range.
    Global,
}

/// Options controlling one generation run.
///
/// # Examples
/// ```
/// use skyline_model::{HeightScaling, SkylineOptions};
/// let json = r#"{"height_scaling": "global", "emblem": false}"#;
/// let options = SkylineOptions::from_json(json).unwrap();
/// assert_eq!(options.height_scaling, HeightScaling::Global);
/// assert!(!options.emblem);
/// assert!(options.captions);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkylineOptions {
    /// Text stored in the 80-byte STL header (truncated if longer).
    pub header: String,
    pub height_scaling: HeightScaling,
    /// Upper bound on stacked years.
    pub max_years: usize,
    /// Build the subject and year captions.
    pub captions: bool,
    /// Build the emblem.
    pub emblem: bool,
    /// Asset name of the TrueType caption font.
    pub primary_font: String,
    /// Asset name of the emblem PNG.
    pub emblem_image: String,
}

impl Default for SkylineOptions {
    fn default() -> Self {
        Self {
            header: DEFAULT_STL_HEADER.to_string(),
            height_scaling: HeightScaling::default(),
            max_years: MAX_YEARS,
            captions: true,
            emblem: true,
            primary_font: PRIMARY_FONT.to_string(),
            emblem_image: EMBLEM_IMAGE.to_string(),
        }
    }
}

impl SkylineOptions {
    /// Parses options from JSON and validates them.
    ///
    /// # Errors
    ///
    /// [`ModelError::Options`] for malformed JSON, [`ModelError::InvalidInput`]
    /// for out-of-range values.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] when `max_years` is 0 or above
    /// [`MAX_YEARS`].
    pub fn validate(&self) -> ModelResult<()> {
        if self.max_years == 0 || self.max_years > MAX_YEARS {
            return Err(ModelError::invalid_input(format!(
                "max_years must be within 1..={MAX_YEARS}, got {}",
                self.max_years
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_constants() {
        let options = SkylineOptions::default();
        assert_eq!(options.max_years, MAX_YEARS);
        assert_eq!(options.height_scaling, HeightScaling::PerYear);
        assert_eq!(options.primary_font, PRIMARY_FONT);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(SkylineOptions::from_json("{}").unwrap(), SkylineOptions::default());
    }

    #[test]
    fn test_malformed_document() {
        let err = SkylineOptions::from_json("{\"captions\": 3}").unwrap_err();
        assert!(matches!(err, ModelError::Options(_)));
    }

    #[test]
    fn test_out_of_range_max_years() {
        let err = SkylineOptions::from_json("{\"max_years\": 0}").unwrap_err();
        assert!(matches!(err, ModelError::InvalidInput { .. }));
        assert!(SkylineOptions::from_json("{\"max_years\": 54}").is_err());
    }
}
