use crate::error::{CropfitError, Result};
use crate::types::config::CropfitConfig;
use crate::types::crop::{Band, CropProfile};
use std::collections::HashSet;

type BandRow = (f64, f64);

/// name, temperature (°C), rainfall (mm/week), humidity (%), growth period (days)
const BUILTIN_CROPS: [(&str, BandRow, BandRow, BandRow, BandRow); 20] = [
    ("Rice", (20.0, 35.0), (50.0, 100.0), (70.0, 90.0), (100.0, 150.0)),
    ("Wheat", (12.0, 25.0), (10.0, 25.0), (50.0, 70.0), (110.0, 130.0)),
    ("Maize", (18.0, 32.0), (15.0, 30.0), (55.0, 80.0), (90.0, 120.0)),
    ("Tomatoes", (18.0, 29.0), (20.0, 40.0), (65.0, 85.0), (60.0, 85.0)),
    ("Potatoes", (15.0, 20.0), (15.0, 30.0), (60.0, 80.0), (75.0, 120.0)),
    ("Onions", (13.0, 24.0), (10.0, 20.0), (60.0, 70.0), (90.0, 150.0)),
    ("Lettuce", (10.0, 21.0), (20.0, 30.0), (60.0, 80.0), (45.0, 65.0)),
    ("Spinach", (5.0, 16.0), (15.0, 25.0), (60.0, 80.0), (40.0, 50.0)),
    ("Carrots", (10.0, 22.0), (15.0, 25.0), (60.0, 80.0), (70.0, 80.0)),
    ("Peas", (7.0, 17.0), (15.0, 25.0), (55.0, 75.0), (60.0, 70.0)),
    ("Cabbage", (8.0, 17.0), (20.0, 30.0), (60.0, 90.0), (70.0, 120.0)),
    ("Cotton", (21.0, 37.0), (10.0, 25.0), (50.0, 70.0), (150.0, 180.0)),
    ("Sugarcane", (20.0, 35.0), (30.0, 60.0), (70.0, 85.0), (300.0, 365.0)),
    ("Soybeans", (20.0, 30.0), (15.0, 30.0), (60.0, 80.0), (90.0, 120.0)),
    ("Chickpeas", (18.0, 26.0), (5.0, 15.0), (40.0, 60.0), (90.0, 110.0)),
    ("Pearl Millet", (25.0, 35.0), (5.0, 15.0), (40.0, 60.0), (70.0, 90.0)),
    ("Sorghum", (25.0, 32.0), (10.0, 20.0), (40.0, 70.0), (100.0, 120.0)),
    ("Groundnut", (22.0, 30.0), (12.0, 25.0), (50.0, 75.0), (100.0, 130.0)),
    ("Mustard", (10.0, 25.0), (5.0, 12.0), (50.0, 70.0), (90.0, 110.0)),
    ("Bananas", (26.0, 30.0), (25.0, 50.0), (75.0, 85.0), (270.0, 365.0)),
];

/// Ordered, read-only set of crop profiles. Order breaks score ties.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    crops: Vec<CropProfile>,
}

impl Catalog {
    pub fn new(crops: Vec<CropProfile>) -> Result<Self> {
        let catalog = Self { crops };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        let crops = BUILTIN_CROPS
            .iter()
            .map(
                |(name, temperature, rainfall, humidity, growth)| CropProfile {
                    name: (*name).to_string(),
                    ideal_temperature: Band::new(temperature.0, temperature.1),
                    ideal_rainfall: Band::new(rainfall.0, rainfall.1),
                    ideal_humidity: Band::new(humidity.0, humidity.1),
                    growth_period: Band::new(growth.0, growth.1),
                },
            )
            .collect();
        Self { crops }
    }

    pub fn from_config(config: &CropfitConfig) -> Result<Self> {
        let mut crops = if config.include_builtin() {
            Self::builtin().crops
        } else {
            Vec::new()
        };
        crops.extend(config.extra_crops().iter().cloned());
        tracing::debug!(
            crops = crops.len(),
            include_builtin = config.include_builtin(),
            "building crop catalog"
        );
        Self::new(crops)
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&CropProfile> {
        self.crops
            .iter()
            .find(|crop| crop.name.eq_ignore_ascii_case(name))
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::<String>::new();
        for crop in &self.crops {
            let name = crop.name.trim();
            if name.is_empty() {
                return Err(CropfitError::InvalidCatalog(
                    "crop names must be non-empty".to_string(),
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(CropfitError::InvalidCatalog(format!(
                    "duplicate crop: {name}"
                )));
            }
            for (field, band) in [
                ("ideal_temperature", &crop.ideal_temperature),
                ("ideal_rainfall", &crop.ideal_rainfall),
                ("ideal_humidity", &crop.ideal_humidity),
                ("growth_period", &crop.growth_period),
            ] {
                validate_band(name, field, band)?;
            }
        }
        Ok(())
    }
}

fn validate_band(crop: &str, field: &str, band: &Band) -> Result<()> {
    if !band.min.is_finite() || !band.max.is_finite() {
        return Err(CropfitError::InvalidCatalog(format!(
            "{crop}.{field} must have finite bounds"
        )));
    }
    if band.min > band.max {
        return Err(CropfitError::InvalidCatalog(format!(
            "{crop}.{field} min ({}) exceeds max ({})",
            band.min, band.max
        )));
    }
    Ok(())
}
