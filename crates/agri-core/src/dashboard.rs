//! Dashboard Analytics
//!
//! Aggregations behind the dashboard tabs and the sensor CSV export.

use serde::Serialize;

use crate::error::{AgriError, Result};
use crate::model::{Farm, Prediction, SensorData, SoilAnalysis};

/// Predictions listed under "Recent Activity"
pub const RECENT_ACTIVITY: usize = 3;
/// Sensor rows shown in the data center table
pub const SENSOR_TABLE_ROWS: usize = 10;

/// Numbers on the overview tab
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewStats {
    pub farm_count: usize,
    /// Combined farm area, normalized to hectares
    pub total_hectares: f64,
    pub prediction_count: usize,
    pub recent: Vec<Prediction>,
}

impl OverviewStats {
    pub fn for_user(farms: &[Farm], predictions: &[Prediction]) -> Self {
        Self {
            farm_count: farms.len(),
            total_hectares: round1(farms.iter().map(Farm::size_in_hectares).sum()),
            prediction_count: predictions.len(),
            recent: predictions.iter().take(RECENT_ACTIVITY).cloned().collect(),
        }
    }
}

/// One bar in the prediction history chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct YieldPoint {
    pub crop: String,
    pub predicted_yield: f64,
    pub confidence: u8,
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn prediction_series(predictions: &[Prediction]) -> Vec<YieldPoint> {
    predictions
        .iter()
        .map(|p| YieldPoint {
            crop: p.crop_type.clone(),
            predicted_yield: round1(p.predicted_yield),
            confidence: p.confidence,
        })
        .collect()
}

/// Mean values over a set of sensor readings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorAverages {
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub rainfall: f64,
    pub sunlight: f64,
}

impl SensorAverages {
    /// `None` when there are no readings
    pub fn from_readings(readings: &[SensorData]) -> Option<Self> {
        if readings.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = readings.len() as f64;
        let mean = |f: fn(&SensorData) -> f64| readings.iter().map(f).sum::<f64>() / n;

        Some(Self {
            temperature: mean(|r| r.temperature),
            humidity: mean(|r| r.humidity),
            soil_moisture: mean(|r| r.soil_moisture),
            rainfall: mean(|r| r.rainfall),
            sunlight: mean(|r| r.sunlight),
        })
    }
}

/// Which nutrient a pie slice represents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nitrogen => "N",
            Self::Phosphorus => "P",
            Self::Potassium => "K",
        }
    }
}

/// N/P/K slices for the most recent stored analysis (the first in the list)
pub fn npk_distribution(analyses: &[SoilAnalysis]) -> Option<[(Nutrient, f64); 3]> {
    analyses.first().map(|a| {
        [
            (Nutrient::Nitrogen, a.nitrogen),
            (Nutrient::Phosphorus, a.phosphorus),
            (Nutrient::Potassium, a.potassium),
        ]
    })
}

#[derive(Serialize)]
struct SensorRow<'a> {
    date: String,
    farm_id: &'a str,
    temperature: String,
    humidity: String,
    soil_moisture: String,
    rainfall: String,
    sunlight: String,
    source: &'static str,
}

/// CSV with a header row and one line per reading
pub fn export_sensor_csv(readings: &[SensorData]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if readings.is_empty() {
        writer.write_record([
            "date",
            "farm_id",
            "temperature",
            "humidity",
            "soil_moisture",
            "rainfall",
            "sunlight",
            "source",
        ])?;
    }
    for r in readings {
        writer.serialize(SensorRow {
            date: r.timestamp.format("%Y-%m-%d").to_string(),
            farm_id: &r.farm_id,
            temperature: format!("{:.1}", r.temperature),
            humidity: format!("{:.1}", r.humidity),
            soil_moisture: format!("{:.1}", r.soil_moisture),
            rainfall: format!("{:.1}", r.rainfall),
            sunlight: format!("{:.1}", r.sunlight),
            source: r.source.as_str(),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AgriError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AgriError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SensorSimulator;
    use crate::model::SizeUnit;
    use crate::store::seed;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const HEADER: &str = "date,farm_id,temperature,humidity,soil_moisture,rainfall,sunlight,source";

    #[test]
    fn test_overview_stats() {
        let mut predictions = seed::predictions();
        predictions.extend(seed::predictions());
        let stats = OverviewStats::for_user(&seed::farms(), &predictions);
        assert_eq!(stats.farm_count, 2);
        assert!((stats.total_hectares - 13.5).abs() < 1e-9);
        assert_eq!(stats.prediction_count, 4);
        assert_eq!(stats.recent.len(), RECENT_ACTIVITY);
    }

    #[test]
    fn test_total_area_converts_units() {
        let mut farms = seed::farms();
        farms[1].size = 10.0;
        farms[1].size_unit = SizeUnit::Acres;
        let stats = OverviewStats::for_user(&farms, &[]);
        // 5.5 ha + 4.05 ha
        assert!((stats.total_hectares - 9.5).abs() < 1e-9);
        assert!(stats.recent.is_empty());
    }

    #[test]
    fn test_prediction_series_rounds() {
        let mut predictions = seed::predictions();
        predictions[0].predicted_yield = 4.2678;
        let series = prediction_series(&predictions);
        assert!((series[0].predicted_yield - 4.3).abs() < 1e-9);
        assert_eq!(series[1].crop, "wheat");
    }

    #[test]
    fn test_averages() {
        assert!(SensorAverages::from_readings(&[]).is_none());

        let mut readings = SensorSimulator::new(StdRng::seed_from_u64(2)).readings(Utc::now(), 2);
        readings[0].temperature = 20.0;
        readings[1].temperature = 30.0;
        let avg = SensorAverages::from_readings(&readings).unwrap();
        assert!((avg.temperature - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_npk_uses_first_analysis() {
        assert!(npk_distribution(&[]).is_none());
        let slices = npk_distribution(&seed::soil_analyses()).unwrap();
        assert_eq!(slices[0], (Nutrient::Nitrogen, 45.0));
        assert_eq!(slices[2].0.symbol(), "K");
    }

    #[test]
    fn test_csv_export() {
        let readings = SensorSimulator::new(StdRng::seed_from_u64(9)).readings(Utc::now(), 4);
        let csv = export_sensor_csv(&readings).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].contains(",farm_1,"));

        let empty = export_sensor_csv(&[]).unwrap();
        assert_eq!(empty.trim_end(), HEADER);
    }
}
