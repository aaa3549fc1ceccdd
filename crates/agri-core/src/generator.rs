//! Synthetic Data Generators
//!
//! Placeholder "AI" output. Nothing here looks at its inputs beyond
//! copying them into the record; values are uniform random draws in fixed
//! ranges. Every generator takes its RNG by injection so tests can seed it.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Prediction, SensorData, SensorSource, SoilAnalysis};
use crate::store::seed::DEFAULT_FARM_ID;

pub const YIELD_UNIT: &str = "tons/hectare";
/// Used when the farm size field is empty or not a number
pub const DEFAULT_FARM_SIZE: f64 = 5.0;

const PREDICTION_RECOMMENDATIONS: [&str; 3] = [
    "Apply fertilizer at optimal time",
    "Monitor soil moisture levels",
    "Watch for pest activity",
];

const SOIL_RECOMMENDATIONS: [&str; 3] = [
    "Apply urea to increase nitrogen levels",
    "Soil pH is optimal for most crops",
    "Consider adding compost to improve organic matter",
];

fn new_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

/// Form input for a yield prediction
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub crop: String,
    pub soil: String,
    pub weather: String,
    /// Free text as typed
    pub farm_size: String,
}

impl PredictionRequest {
    /// Leading number of the size field, in ASCII or Bengali digits.
    /// Empty, zero or unparsable input gives [`DEFAULT_FARM_SIZE`].
    pub fn parsed_farm_size(&self) -> f64 {
        let normalized: String = self
            .farm_size
            .trim()
            .chars()
            .map(|c| match c {
                '০'..='৯' => char::from(b'0' + (c as u32 - '০' as u32) as u8),
                _ => c,
            })
            .collect();

        let mut seen_dot = false;
        let prefix: String = normalized
            .chars()
            .take_while(|c| {
                if *c == '.' && !seen_dot {
                    seen_dot = true;
                    true
                } else {
                    c.is_ascii_digit()
                }
            })
            .collect();

        match prefix.parse::<f64>() {
            Ok(size) if size > 0.0 && size.is_finite() => size,
            _ => DEFAULT_FARM_SIZE,
        }
    }
}

/// Random yield "predictions"
pub struct PredictionGenerator<R> {
    rng: R,
}

impl PredictionGenerator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> PredictionGenerator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Yield is drawn from `[3.5, 5.5)` and confidence from `75..=94`
    pub fn predict(&mut self, user_id: &str, request: &PredictionRequest, now: DateTime<Utc>) -> Prediction {
        let predicted_yield = 3.5 + self.rng.gen_range(0.0..2.0);
        let confidence = 75 + self.rng.gen_range(0..20);

        Prediction {
            id: new_id("pred"),
            farm_id: DEFAULT_FARM_ID.into(),
            user_id: user_id.into(),
            crop_type: request.crop.clone(),
            soil_type: request.soil.clone(),
            weather_condition: request.weather.clone(),
            farm_size: request.parsed_farm_size(),
            predicted_yield,
            yield_unit: YIELD_UNIT.into(),
            confidence,
            recommendations: PREDICTION_RECOMMENDATIONS.map(String::from).to_vec(),
            created_at: now,
        }
    }
}

/// Random soil report "analysis"
pub struct SoilAnalyzer<R> {
    rng: R,
}

impl SoilAnalyzer<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SoilAnalyzer<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn analyze(&mut self, user_id: &str, now: DateTime<Utc>) -> SoilAnalysis {
        SoilAnalysis {
            id: new_id("soil"),
            farm_id: DEFAULT_FARM_ID.into(),
            user_id: user_id.into(),
            nitrogen: 40.0 + self.rng.gen_range(0.0..30.0),
            phosphorus: 25.0 + self.rng.gen_range(0.0..25.0),
            potassium: 50.0 + self.rng.gen_range(0.0..30.0),
            ph: 5.5 + self.rng.gen_range(0.0..2.0),
            organic_matter: 2.0 + self.rng.gen_range(0.0..3.0),
            recommendations: SOIL_RECOMMENDATIONS.map(String::from).to_vec(),
            created_at: now,
        }
    }
}

/// Daily environmental readings alternating between the two demo farms
pub struct SensorSimulator<R> {
    rng: R,
}

impl SensorSimulator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SensorSimulator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// `count` readings, the i-th dated `i` days before `now`
    pub fn readings(&mut self, now: DateTime<Utc>, count: usize) -> Vec<SensorData> {
        (0..count).map(|i| self.reading(now, i)).collect()
    }

    fn reading(&mut self, now: DateTime<Utc>, day: usize) -> SensorData {
        let days_back = i64::try_from(day).unwrap_or(i64::MAX);
        // Rain on roughly three days in ten
        let rainfall = if self.rng.gen_bool(0.3) {
            self.rng.gen_range(0.0..50.0)
        } else {
            0.0
        };

        SensorData {
            id: format!("sensor_{day}"),
            farm_id: if day % 2 == 0 { "farm_1" } else { "farm_2" }.into(),
            timestamp: now - Duration::days(days_back),
            temperature: 25.0 + self.rng.gen_range(0.0..10.0),
            humidity: 60.0 + self.rng.gen_range(0.0..30.0),
            soil_moisture: 40.0 + self.rng.gen_range(0.0..40.0),
            rainfall,
            sunlight: 4.0 + self.rng.gen_range(0.0..8.0),
            source: SensorSource::ALL[self.rng.gen_range(0..SensorSource::ALL.len())],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn request(size: &str) -> PredictionRequest {
        PredictionRequest {
            crop: "rice".into(),
            soil: "alluvial".into(),
            weather: "monsoon".into(),
            farm_size: size.into(),
        }
    }

    #[test]
    fn test_prediction_ranges() {
        let mut generator = PredictionGenerator::new(rng(7));
        let now = Utc::now();
        for _ in 0..500 {
            let p = generator.predict("user_1", &request("3"), now);
            assert!((75..=94).contains(&p.confidence));
            assert!(p.predicted_yield >= 3.5 && p.predicted_yield < 5.5);
        }
    }

    #[test]
    fn test_prediction_copies_inputs() {
        let p = PredictionGenerator::new(rng(1)).predict("user_9", &request("2.5"), Utc::now());
        assert_eq!(p.user_id, "user_9");
        assert_eq!(p.crop_type, "rice");
        assert_eq!(p.farm_id, DEFAULT_FARM_ID);
        assert_eq!(p.yield_unit, YIELD_UNIT);
        assert!((p.farm_size - 2.5).abs() < f64::EPSILON);
        assert_eq!(p.recommendations.len(), 3);
        assert!(p.id.starts_with("pred_"));
    }

    #[test]
    fn test_farm_size_parsing() {
        let size = |s: &str| request(s).parsed_farm_size();
        assert!((size("7.5 hectares") - 7.5).abs() < f64::EPSILON);
        assert!((size("৩") - 3.0).abs() < f64::EPSILON);
        assert!((size("") - DEFAULT_FARM_SIZE).abs() < f64::EPSILON);
        assert!((size("abc") - DEFAULT_FARM_SIZE).abs() < f64::EPSILON);
        assert!((size("0") - DEFAULT_FARM_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_soil_ranges() {
        let mut analyzer = SoilAnalyzer::new(rng(3));
        for _ in 0..200 {
            let a = analyzer.analyze("user_1", Utc::now());
            assert!((40.0..70.0).contains(&a.nitrogen));
            assert!((25.0..50.0).contains(&a.phosphorus));
            assert!((50.0..80.0).contains(&a.potassium));
            assert!((5.5..7.5).contains(&a.ph));
            assert!((2.0..5.0).contains(&a.organic_matter));
        }
    }

    #[test]
    fn test_sensor_readings() {
        let now = Utc::now();
        let readings = SensorSimulator::new(rng(11)).readings(now, 20);
        assert_eq!(readings.len(), 20);
        assert_eq!(readings[0].farm_id, "farm_1");
        assert_eq!(readings[1].farm_id, "farm_2");
        assert_eq!(readings[3].timestamp, now - Duration::days(3));
        for r in &readings {
            assert!((25.0..35.0).contains(&r.temperature));
            assert!((60.0..90.0).contains(&r.humidity));
            assert!((40.0..80.0).contains(&r.soil_moisture));
            assert!((0.0..50.0).contains(&r.rainfall));
            assert!((4.0..12.0).contains(&r.sunlight));
        }
    }

    #[test]
    fn test_seeded_generators_repeat() {
        let now = Utc::now();
        let a = SensorSimulator::new(rng(5)).readings(now, 5);
        let b = SensorSimulator::new(rng(5)).readings(now, 5);
        assert_eq!(a, b);
    }
}
