use crate::types::crop::{CropCategory, CropProfile};
use serde::Serialize;
use std::collections::BTreeMap;

pub type Score = f64;

pub const TEMPERATURE_WEIGHT: Score = 0.4;
pub const RAINFALL_WEIGHT: Score = 0.3;
pub const HUMIDITY_WEIGHT: Score = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisScores {
    pub temperature: Score,
    pub rainfall: Score,
    pub humidity: Score,
}

impl AxisScores {
    pub fn new(temperature: Score, rainfall: Score, humidity: Score) -> Self {
        Self {
            temperature: temperature.clamp(0.0, 1.0),
            rainfall: rainfall.clamp(0.0, 1.0),
            humidity: humidity.clamp(0.0, 1.0),
        }
    }

    pub fn combined(&self) -> Score {
        (TEMPERATURE_WEIGHT * self.temperature
            + RAINFALL_WEIGHT * self.rainfall
            + HUMIDITY_WEIGHT * self.humidity)
            .clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCrop {
    #[serde(flatten)]
    pub profile: CropProfile,
    pub suitability_score: Score,
    pub axis_scores: AxisScores,
}

impl ScoredCrop {
    pub fn new(profile: CropProfile, axis_scores: AxisScores) -> Self {
        Self {
            profile,
            suitability_score: axis_scores.combined(),
            axis_scores,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}

/// Summed suitability per temperature category. Always holds all four categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryRollup {
    totals: BTreeMap<CropCategory, Score>,
}

impl Default for CategoryRollup {
    fn default() -> Self {
        Self {
            totals: CropCategory::ALL
                .iter()
                .map(|category| (*category, 0.0))
                .collect(),
        }
    }
}

impl CategoryRollup {
    pub fn add(&mut self, category: CropCategory, score: Score) {
        *self.totals.entry(category).or_insert(0.0) += score;
    }

    pub fn get(&self, category: CropCategory) -> Score {
        self.totals.get(&category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CropCategory, Score)> + '_ {
        self.totals.iter().map(|(category, score)| (*category, *score))
    }

    /// Chart-ready values: each total multiplied by 100.
    pub fn as_percentages(&self) -> Vec<(CropCategory, Score)> {
        CropCategory::ALL
            .iter()
            .map(|category| (*category, self.get(*category) * 100.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let sum = TEMPERATURE_WEIGHT + RAINFALL_WEIGHT + HUMIDITY_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn combined_applies_fixed_weights() {
        let axes = AxisScores::new(1.0, 0.5, 0.0);
        assert!((axes.combined() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn axis_scores_are_clamped() {
        let axes = AxisScores::new(1.5, -0.2, 0.3);
        assert_eq!(axes.temperature, 1.0);
        assert_eq!(axes.rainfall, 0.0);
        assert_eq!(axes.humidity, 0.3);
    }

    #[test]
    fn default_rollup_has_all_categories_at_zero() {
        let rollup = CategoryRollup::default();
        let entries = rollup.iter().collect::<Vec<_>>();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|(_, score)| *score == 0.0));
        assert_eq!(entries[0].0, CropCategory::Cool);
        assert_eq!(entries[3].0, CropCategory::HeatTolerant);
    }

    #[test]
    fn percentages_scale_totals_in_fixed_order() {
        let mut rollup = CategoryRollup::default();
        rollup.add(CropCategory::Moderate, 0.5);
        rollup.add(CropCategory::Moderate, 0.25);
        let percentages = rollup.as_percentages();
        assert_eq!(
            percentages.iter().map(|(category, _)| *category).collect::<Vec<_>>(),
            CropCategory::ALL.to_vec()
        );
        assert!((percentages[1].1 - 75.0).abs() < 1e-9);
        assert_eq!(percentages[0].1, 0.0);
    }

    #[test]
    fn rollup_serializes_as_label_keyed_object() {
        let mut rollup = CategoryRollup::default();
        rollup.add(CropCategory::Warm, 0.75);
        let rendered = serde_json::to_string(&rollup).expect("rollup should serialize");
        assert_eq!(
            rendered,
            r#"{"Cool Weather Crops":0.0,"Moderate Weather Crops":0.0,"Warm Weather Crops":0.75,"Heat-Tolerant Crops":0.0}"#
        );
    }
}
