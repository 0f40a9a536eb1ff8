use crate::types::crop::{CropCategory, CropProfile};
use crate::types::scoring::{CategoryRollup, ScoredCrop};
use crate::types::weather::WeatherAggregate;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub generated_at: String,
    pub forecast_days: usize,
    pub aggregate: Option<WeatherAggregate>,
    pub recommendations: Vec<ScoredCrop>,
}

impl RecommendationReport {
    pub fn new(aggregate: Option<WeatherAggregate>, recommendations: Vec<ScoredCrop>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            forecast_days: aggregate.map(|weather| weather.days).unwrap_or(0),
            aggregate,
            recommendations,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub generated_at: String,
    pub forecast_days: usize,
    pub aggregate: Option<WeatherAggregate>,
    pub categories: CategoryRollup,
}

impl CategoryReport {
    pub fn new(aggregate: Option<WeatherAggregate>, categories: CategoryRollup) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            forecast_days: aggregate.map(|weather| weather.days).unwrap_or(0),
            aggregate,
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub profile: CropProfile,
    pub category: CropCategory,
}

impl From<&CropProfile> for CatalogEntry {
    fn from(profile: &CropProfile) -> Self {
        Self {
            profile: profile.clone(),
            category: profile.category(),
        }
    }
}
