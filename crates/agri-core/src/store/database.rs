//! Typed collections over a key/value store

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{KeyValueStore, keys, seed};
use crate::error::Result;
use crate::model::{Farm, Prediction, SensorData, SoilAnalysis, User};

/// JSON collections stored one list per key, seeded on first read
#[derive(Clone, Debug)]
pub struct MockDatabase<S> {
    store: S,
}

impl<S: KeyValueStore> MockDatabase<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read a collection.
    ///
    /// An absent (or empty) key is filled with `seed` and persisted. A value
    /// that fails to parse yields the seed without overwriting what is stored.
    pub fn get<T, F>(&self, key: &str, seed: F) -> Result<Vec<T>>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        match self.store.get_item(key)? {
            Some(raw) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(records) => Ok(records),
                Err(e) => {
                    tracing::warn!(key, error = %e, "Stored collection is malformed, using seed data");
                    Ok(seed())
                }
            },
            _ => {
                let records = seed();
                tracing::debug!(key, count = records.len(), "Seeding collection");
                self.set(key, &records)?;
                Ok(records)
            }
        }
    }

    /// Overwrite a collection
    pub fn set<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.store.set_item(key, &json)
    }

    fn push<T, F>(&self, key: &str, seed: F, record: T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Vec<T>,
    {
        let mut records = self.get(key, seed)?;
        records.push(record);
        self.set(key, &records)
    }

    // Users

    pub fn users(&self) -> Result<Vec<User>> {
        self.get(keys::USERS, seed::users)
    }

    pub fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.users()?.into_iter().find(|u| u.email == email))
    }

    pub fn user_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users()?.into_iter().find(|u| u.id == id))
    }

    pub fn add_user(&self, user: User) -> Result<()> {
        self.push(keys::USERS, seed::users, user)
    }

    /// Replace the stored user with the same id. Returns `false` when no
    /// such user exists; nothing is written in that case.
    pub fn update_user(&self, user: &User) -> Result<bool> {
        let mut users = self.users()?;
        let Some(slot) = users.iter_mut().find(|u| u.id == user.id) else {
            return Ok(false);
        };
        *slot = user.clone();
        self.set(keys::USERS, &users)?;
        Ok(true)
    }

    // Farms

    pub fn farms(&self, user_id: Option<&str>) -> Result<Vec<Farm>> {
        let farms = self.get(keys::FARMS, seed::farms)?;
        Ok(filter_by(farms, user_id, |f| &f.user_id))
    }

    pub fn add_farm(&self, farm: Farm) -> Result<()> {
        self.push(keys::FARMS, seed::farms, farm)
    }

    // Predictions

    pub fn predictions(&self, user_id: Option<&str>) -> Result<Vec<Prediction>> {
        let predictions = self.get(keys::PREDICTIONS, seed::predictions)?;
        Ok(filter_by(predictions, user_id, |p| &p.user_id))
    }

    pub fn add_prediction(&self, prediction: Prediction) -> Result<()> {
        self.push(keys::PREDICTIONS, seed::predictions, prediction)
    }

    // Sensor data

    pub fn sensor_data(&self, farm_id: Option<&str>) -> Result<Vec<SensorData>> {
        let readings = self.get(keys::SENSOR_DATA, seed::sensor_data)?;
        Ok(filter_by(readings, farm_id, |r| &r.farm_id))
    }

    // Soil analyses

    pub fn soil_analyses(&self, user_id: Option<&str>) -> Result<Vec<SoilAnalysis>> {
        let analyses = self.get(keys::SOIL_ANALYSES, seed::soil_analyses)?;
        Ok(filter_by(analyses, user_id, |a| &a.user_id))
    }

    pub fn add_soil_analysis(&self, analysis: SoilAnalysis) -> Result<()> {
        self.push(keys::SOIL_ANALYSES, seed::soil_analyses, analysis)
    }

    /// Drop every collection; the next read re-seeds it
    pub fn reset(&self) -> Result<()> {
        for key in keys::COLLECTIONS {
            self.store.remove_item(key)?;
        }
        tracing::info!("Mock database reset");
        Ok(())
    }
}

fn filter_by<T>(records: Vec<T>, id: Option<&str>, field: impl Fn(&T) -> &String) -> Vec<T> {
    match id {
        Some(id) => records.into_iter().filter(|r| field(r) == id).collect(),
        None => records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn db() -> MockDatabase<MemoryStore> {
        MockDatabase::new(MemoryStore::new())
    }

    #[test]
    fn test_first_read_seeds_and_persists() {
        let db = db();
        assert!(db.store().get_item(keys::USERS).unwrap().is_none());

        let users = db.users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, seed::DEMO_EMAIL);
        assert!(db.store().get_item(keys::USERS).unwrap().is_some());
    }

    #[test]
    fn test_malformed_collection_falls_back_without_rewrite() {
        let db = db();
        db.store().set_item(keys::FARMS, "{not json").unwrap();

        let farms = db.farms(None).unwrap();
        assert_eq!(farms.len(), 2);
        assert_eq!(
            db.store().get_item(keys::FARMS).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_add_and_lookup_user() {
        let db = db();
        let user = User::new("new@farm.bd", "New Farmer");
        let id = user.id.clone();
        db.add_user(user).unwrap();

        assert_eq!(db.users().unwrap().len(), 2);
        assert_eq!(db.user_by_id(&id).unwrap().unwrap().name, "New Farmer");
        assert!(db.user_by_email("nobody@farm.bd").unwrap().is_none());
    }

    #[test]
    fn test_update_unknown_user_is_noop() {
        let db = db();
        let stranger = User::new("x@y.z", "Stranger");
        assert!(!db.update_user(&stranger).unwrap());
        assert_eq!(db.users().unwrap().len(), 1);

        let mut demo = db.user_by_email(seed::DEMO_EMAIL).unwrap().unwrap();
        demo.name = "Renamed".into();
        assert!(db.update_user(&demo).unwrap());
        assert_eq!(db.users().unwrap()[0].name, "Renamed");
    }

    #[test]
    fn test_filters() {
        let db = db();
        assert_eq!(db.farms(Some(seed::DEMO_USER_ID)).unwrap().len(), 2);
        assert!(db.farms(Some("user_2")).unwrap().is_empty());
        assert_eq!(db.predictions(None).unwrap().len(), 2);

        let readings = db.sensor_data(Some("farm_1")).unwrap();
        assert_eq!(readings.len(), seed::SENSOR_READINGS / 2);
        assert!(readings.iter().all(|r| r.farm_id == "farm_1"));
    }

    #[test]
    fn test_sensor_seed_is_stable_once_stored() {
        let db = db();
        let seeded = db.sensor_data(None).unwrap();
        let first = db.sensor_data(None).unwrap();
        let second = db.sensor_data(None).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            seeded.iter().map(|r| &r.id).collect::<Vec<_>>(),
            first.iter().map(|r| &r.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_reset_reseeds() {
        let db = db();
        db.add_soil_analysis(seed::soil_analyses().remove(0)).unwrap();
        assert_eq!(db.soil_analyses(None).unwrap().len(), 2);

        db.reset().unwrap();
        assert!(db.store().is_empty());
        assert_eq!(db.soil_analyses(None).unwrap().len(), 1);
    }
}
