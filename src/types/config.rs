use crate::error::CropfitError;
use crate::types::crop::CropProfile;
use serde::Deserialize;

pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CropfitConfig {
    pub output: Option<OutputConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub default_count: Option<usize>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    #[serde(default)]
    pub crops: Vec<CropProfile>,
}

fn default_include_builtin() -> bool {
    true
}

impl CropfitConfig {
    pub fn default_count(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|output| output.default_count)
            .unwrap_or(DEFAULT_RECOMMENDATION_COUNT)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    pub fn include_builtin(&self) -> bool {
        self.catalog
            .as_ref()
            .map(|catalog| catalog.include_builtin)
            .unwrap_or(true)
    }

    pub fn extra_crops(&self) -> &[CropProfile] {
        self.catalog
            .as_ref()
            .map(|catalog| catalog.crops.as_slice())
            .unwrap_or(&[])
    }

    pub fn validate(&self) -> Result<(), CropfitError> {
        if let Some(output) = &self.output {
            if output.default_count == Some(0) {
                return Err(CropfitError::ConfigParse(
                    "output.default_count must be greater than 0".to_string(),
                ));
            }
            if let Some(format) = &output.format {
                if !matches!(format.as_str(), "md" | "json") {
                    return Err(CropfitError::ConfigParse(format!(
                        "unsupported output.format: {format}"
                    )));
                }
            }
        }

        if !self.include_builtin() && self.extra_crops().is_empty() {
            return Err(CropfitError::ConfigParse(
                "catalog.crops cannot be empty when include_builtin = false".to_string(),
            ));
        }

        Ok(())
    }
}
