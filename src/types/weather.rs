use crate::error::{CropfitError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Degrees Celsius.
    #[serde(alias = "averageTemperature")]
    pub average_temperature: f64,
    /// Millimetres.
    #[serde(alias = "totalPrecipitation")]
    pub total_precipitation: f64,
    /// Percent relative humidity.
    #[serde(alias = "averageHumidity")]
    pub average_humidity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    pub fn new(days: Vec<ForecastDay>) -> Self {
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Parses either the native `{"forecast": {"days": [...]}}` document or the
    /// provider's `{"forecast": {"forecastday": [{"date", "day": {...}}]}}` shape.
    /// The shape is picked by the presence of `forecastday`.
    pub fn from_json(content: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(content).map_err(parse_error)?;
        let forecast = document.get("forecast").ok_or_else(|| {
            CropfitError::ForecastParse("missing `forecast` object".to_string())
        })?;
        if forecast.get("forecastday").is_some() {
            let provider = ProviderForecast::deserialize(forecast).map_err(parse_error)?;
            Ok(provider.into_forecast())
        } else {
            Forecast::deserialize(forecast).map_err(parse_error)
        }
    }
}

fn parse_error(err: serde_json::Error) -> CropfitError {
    CropfitError::ForecastParse(err.to_string())
}

#[derive(Debug, Deserialize)]
struct ProviderForecast {
    forecastday: Vec<ProviderForecastDay>,
}

impl ProviderForecast {
    fn into_forecast(self) -> Forecast {
        Forecast::new(
            self.forecastday
                .into_iter()
                .map(|entry| ForecastDay {
                    date: entry.date,
                    average_temperature: entry.day.avgtemp_c,
                    total_precipitation: entry.day.totalprecip_mm,
                    average_humidity: entry.day.avghumidity,
                })
                .collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ProviderForecastDay {
    #[serde(default)]
    date: Option<NaiveDate>,
    day: ProviderDaySummary,
}

#[derive(Debug, Deserialize)]
struct ProviderDaySummary {
    avgtemp_c: f64,
    totalprecip_mm: f64,
    avghumidity: f64,
}

/// Summary statistics the scorer works from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherAggregate {
    pub average_temperature: f64,
    /// Sum over every supplied day, whether or not that is seven.
    pub weekly_rainfall: f64,
    pub average_humidity: f64,
    pub days: usize,
}

impl WeatherAggregate {
    /// Returns `None` when the forecast has no days.
    pub fn from_forecast(forecast: &Forecast) -> Option<Self> {
        if forecast.is_empty() {
            return None;
        }
        let count = forecast.len() as f64;
        let temperature_sum: f64 = forecast.days.iter().map(|d| d.average_temperature).sum();
        let rainfall_sum: f64 = forecast.days.iter().map(|d| d.total_precipitation).sum();
        let humidity_sum: f64 = forecast.days.iter().map(|d| d.average_humidity).sum();

        Some(Self {
            average_temperature: temperature_sum / count,
            weekly_rainfall: rainfall_sum,
            average_humidity: humidity_sum / count,
            days: forecast.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(temperature: f64, precipitation: f64, humidity: f64) -> ForecastDay {
        ForecastDay {
            date: None,
            average_temperature: temperature,
            total_precipitation: precipitation,
            average_humidity: humidity,
        }
    }

    #[test]
    fn aggregate_averages_temperature_and_humidity_and_sums_rain() {
        let forecast = Forecast::new(vec![
            day(20.0, 5.0, 60.0),
            day(24.0, 10.0, 70.0),
            day(28.0, 0.0, 80.0),
        ]);
        let aggregate = WeatherAggregate::from_forecast(&forecast).expect("aggregate");
        assert!((aggregate.average_temperature - 24.0).abs() < 1e-9);
        assert!((aggregate.weekly_rainfall - 15.0).abs() < 1e-9);
        assert!((aggregate.average_humidity - 70.0).abs() < 1e-9);
        assert_eq!(aggregate.days, 3);
    }

    #[test]
    fn aggregate_is_none_for_empty_forecast() {
        assert!(WeatherAggregate::from_forecast(&Forecast::default()).is_none());
    }

    #[test]
    fn parses_native_camel_case_document() {
        let json = r#"{"forecast": {"days": [
            {"averageTemperature": 25.0, "totalPrecipitation": 5.0, "averageHumidity": 75.0},
            {"date": "2026-10-20", "average_temperature": 23.0, "total_precipitation": 1.5, "average_humidity": 70.0}
        ]}}"#;
        let forecast = Forecast::from_json(json).expect("native forecast should parse");
        assert_eq!(forecast.len(), 2);
        assert_eq!(
            forecast.days[1].date,
            NaiveDate::from_ymd_opt(2026, 10, 20)
        );
    }

    #[test]
    fn parses_provider_document() {
        let json = r#"{"location": {"name": "Pune"}, "forecast": {"forecastday": [
            {"date": "2026-10-19", "day": {"avgtemp_c": 26.4, "totalprecip_mm": 3.2, "avghumidity": 71, "maxtemp_c": 31.0}}
        ]}}"#;
        let forecast = Forecast::from_json(json).expect("provider forecast should parse");
        assert_eq!(forecast.len(), 1);
        assert!((forecast.days[0].average_temperature - 26.4).abs() < 1e-9);
        assert!((forecast.days[0].average_humidity - 71.0).abs() < 1e-9);
    }

    #[test]
    fn parses_empty_days_list() {
        let forecast =
            Forecast::from_json(r#"{"forecast": {"days": []}}"#).expect("empty list should parse");
        assert!(forecast.is_empty());
    }

    #[test]
    fn rejects_provider_day_missing_humidity() {
        let json = r#"{"forecast": {"forecastday": [
            {"date": "2026-10-19", "day": {"avgtemp_c": 26.4, "totalprecip_mm": 3.2}}
        ]}}"#;
        let err = Forecast::from_json(json).expect_err("incomplete provider day should fail");
        assert!(err.to_string().contains("forecast parse error"));
        assert!(err.to_string().contains("avghumidity"));
    }

    #[test]
    fn rejects_native_document_with_misspelled_days() {
        let json = r#"{"forecast": {"dayz": [
            {"averageTemperature": 25.0, "totalPrecipitation": 5.0, "averageHumidity": 75.0}
        ]}}"#;
        let err = Forecast::from_json(json).expect_err("unknown key should fail");
        assert!(err.to_string().contains("forecast parse error"));
        assert!(err.to_string().contains("dayz"));
    }

    #[test]
    fn rejects_native_document_without_days() {
        let err = Forecast::from_json(r#"{"forecast": {}}"#).expect_err("missing days should fail");
        assert!(err.to_string().contains("missing field `days`"));
    }

    #[test]
    fn rejects_document_without_forecast() {
        let err = Forecast::from_json(r#"{"current": {}}"#).expect_err("parse should fail");
        assert!(err.to_string().contains("forecast parse error"));
    }
}
