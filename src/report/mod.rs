pub mod json;
pub mod md;

use crate::error::CropfitError;
use crate::types::report::{CatalogEntry, CategoryReport, RecommendationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render_recommendations(
    report: &RecommendationReport,
    format: OutputFormat,
) -> Result<String, CropfitError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CropfitError::Json),
        OutputFormat::Md => Ok(md::recommendations_to_markdown(report)),
    }
}

pub fn render_categories(
    report: &CategoryReport,
    format: OutputFormat,
) -> Result<String, CropfitError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CropfitError::Json),
        OutputFormat::Md => Ok(md::categories_to_markdown(report)),
    }
}

pub fn render_catalog(
    entries: &[CatalogEntry],
    format: OutputFormat,
) -> Result<String, CropfitError> {
    match format {
        OutputFormat::Json => json::to_json(&entries).map_err(CropfitError::Json),
        OutputFormat::Md => Ok(md::catalog_to_markdown(entries)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_formats_only() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Md));
        assert_eq!(OutputFormat::parse("sarif"), None);
    }
}
