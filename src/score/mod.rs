pub mod axis;

use crate::catalog::Catalog;
use crate::types::crop::CropProfile;
use crate::types::scoring::{AxisScores, CategoryRollup, ScoredCrop};
use crate::types::weather::{Forecast, WeatherAggregate};

/// Number of top-ranked crops folded into the category rollup.
pub const CATEGORY_SAMPLE_SIZE: usize = 10;

pub fn score_crop(crop: &CropProfile, weather: &WeatherAggregate) -> ScoredCrop {
    let axes = AxisScores::new(
        axis::temperature_score(weather.average_temperature, &crop.ideal_temperature),
        axis::rainfall_score(weather.weekly_rainfall, &crop.ideal_rainfall),
        axis::humidity_score(weather.average_humidity, &crop.ideal_humidity),
    );
    let scored = ScoredCrop::new(crop.clone(), axes);
    tracing::trace!(
        crop = %crop.name,
        score = scored.suitability_score,
        temperature = axes.temperature,
        rainfall = axes.rainfall,
        humidity = axes.humidity,
        "scored crop"
    );
    scored
}

/// Every crop in the catalog, best first. Equal scores keep catalog order.
pub fn rank(catalog: &Catalog, weather: &WeatherAggregate) -> Vec<ScoredCrop> {
    let mut scored = catalog
        .crops()
        .iter()
        .map(|crop| score_crop(crop, weather))
        .collect::<Vec<_>>();
    // sort_by is stable
    scored.sort_by(|a, b| b.suitability_score.total_cmp(&a.suitability_score));
    scored
}

pub fn recommend(catalog: &Catalog, forecast: &Forecast, count: usize) -> Vec<ScoredCrop> {
    let Some(weather) = WeatherAggregate::from_forecast(forecast) else {
        tracing::debug!("forecast has no days; returning no recommendations");
        return Vec::new();
    };
    let mut ranked = rank(catalog, &weather);
    ranked.truncate(count);
    tracing::debug!(
        requested = count,
        returned = ranked.len(),
        "computed crop recommendations"
    );
    ranked
}

pub fn top_categories(catalog: &Catalog, forecast: &Forecast) -> CategoryRollup {
    let mut rollup = CategoryRollup::default();
    for crop in recommend(catalog, forecast, CATEGORY_SAMPLE_SIZE) {
        rollup.add(crop.profile.category(), crop.suitability_score);
    }
    rollup
}
