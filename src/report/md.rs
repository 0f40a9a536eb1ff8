use crate::types::crop::Band;
use crate::types::report::{CatalogEntry, CategoryReport, RecommendationReport};
use crate::types::weather::WeatherAggregate;

pub fn recommendations_to_markdown(report: &RecommendationReport) -> String {
    let mut output = String::new();
    output.push_str("# Crop Recommendations\n\n");
    push_weather(&mut output, report.aggregate.as_ref());

    output.push_str("## Ranking\n\n");
    if report.recommendations.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| # | Crop | Score | Temperature | Rainfall | Humidity |\n");
    output.push_str("|---|------|-------|-------------|----------|----------|\n");
    for (index, crop) in report.recommendations.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {:.3} | {:.2} | {:.2} | {:.2} |\n",
            index + 1,
            crop.name(),
            crop.suitability_score,
            crop.axis_scores.temperature,
            crop.axis_scores.rainfall,
            crop.axis_scores.humidity
        ));
    }

    output
}

pub fn categories_to_markdown(report: &CategoryReport) -> String {
    let mut output = String::new();
    output.push_str("# Crop Categories\n\n");
    push_weather(&mut output, report.aggregate.as_ref());

    output.push_str("## Category Scores\n\n");
    for (category, percentage) in report.categories.as_percentages() {
        output.push_str(&format!("- {}: {:.1}\n", category, percentage));
    }

    output
}

pub fn catalog_to_markdown(entries: &[CatalogEntry]) -> String {
    let mut output = String::new();
    output.push_str("# Crop Catalog\n\n");
    if entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| Crop | Temperature (°C) | Rainfall (mm/week) | Humidity (%) | Growth (days) | Category | Ideal (°C / mm / %) |\n");
    output.push_str("|------|------------------|--------------------|--------------|---------------|----------|---------------------|\n");
    for entry in entries {
        let profile = &entry.profile;
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} / {} / {} |\n",
            profile.name,
            band(&profile.ideal_temperature),
            band(&profile.ideal_rainfall),
            band(&profile.ideal_humidity),
            band(&profile.growth_period),
            entry.category,
            profile.ideal_temperature.midpoint(),
            profile.ideal_rainfall.midpoint(),
            profile.ideal_humidity.midpoint()
        ));
    }

    output
}

fn push_weather(output: &mut String, aggregate: Option<&WeatherAggregate>) {
    output.push_str("## Weather\n\n");
    match aggregate {
        Some(weather) => output.push_str(&format!(
            "- days: {}\n- average temperature: {:.1} °C\n- rainfall: {:.1} mm\n- average humidity: {:.1} %\n\n",
            weather.days,
            weather.average_temperature,
            weather.weekly_rainfall,
            weather.average_humidity
        )),
        None => output.push_str("- no forecast days\n\n"),
    }
}

fn band(band: &Band) -> String {
    format!("{}–{}", band.min, band.max)
}
