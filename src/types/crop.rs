use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive ideal band for one growing condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    /// Degrees Celsius.
    #[serde(alias = "idealTemperature")]
    pub ideal_temperature: Band,
    /// Millimetres per week.
    #[serde(alias = "idealRainfall")]
    pub ideal_rainfall: Band,
    /// Percent relative humidity.
    #[serde(alias = "idealHumidity")]
    pub ideal_humidity: Band,
    /// Days to harvest. Carried for display only.
    #[serde(alias = "growthPeriod")]
    pub growth_period: Band,
}

impl CropProfile {
    pub fn category(&self) -> CropCategory {
        CropCategory::for_max_temperature(self.ideal_temperature.max)
    }
}

/// Temperature-tolerance bucket used by the category rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CropCategory {
    #[serde(rename = "Cool Weather Crops")]
    Cool,
    #[serde(rename = "Moderate Weather Crops")]
    Moderate,
    #[serde(rename = "Warm Weather Crops")]
    Warm,
    #[serde(rename = "Heat-Tolerant Crops")]
    HeatTolerant,
}

impl CropCategory {
    pub const ALL: [CropCategory; 4] = [
        CropCategory::Cool,
        CropCategory::Moderate,
        CropCategory::Warm,
        CropCategory::HeatTolerant,
    ];

    pub fn for_max_temperature(max_temperature: f64) -> Self {
        if max_temperature < 18.0 {
            CropCategory::Cool
        } else if max_temperature < 24.0 {
            CropCategory::Moderate
        } else if max_temperature < 30.0 {
            CropCategory::Warm
        } else {
            CropCategory::HeatTolerant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CropCategory::Cool => "Cool Weather Crops",
            CropCategory::Moderate => "Moderate Weather Crops",
            CropCategory::Warm => "Warm Weather Crops",
            CropCategory::HeatTolerant => "Heat-Tolerant Crops",
        }
    }
}

impl fmt::Display for CropCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
