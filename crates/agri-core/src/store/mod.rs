//! Persistence
//!
//! Everything the app remembers lives in a string key/value store: the
//! browser's `localStorage` in the web build, a [`MemoryStore`] in tests.
//! [`MockDatabase`] layers typed JSON collections with seed defaults on top.

mod database;
mod memory;
pub mod seed;

pub use database::MockDatabase;
pub use memory::MemoryStore;

use crate::error::Result;

/// Storage keys shared with existing browser data
pub mod keys {
    pub const USERS: &str = "agri_db_users";
    pub const FARMS: &str = "agri_db_farms";
    pub const PREDICTIONS: &str = "agri_db_predictions";
    pub const SENSOR_DATA: &str = "agri_db_sensor";
    pub const SOIL_ANALYSES: &str = "agri_db_soil";
    pub const SESSION: &str = "agri-session";
    pub const LANGUAGE: &str = "agri-language";

    /// The mock database collections
    pub const COLLECTIONS: [&str; 5] = [USERS, FARMS, PREDICTIONS, SENSOR_DATA, SOIL_ANALYSES];
}

/// String key/value storage
///
/// Single-threaded by contract: the browser store is only reachable from
/// the UI thread, so implementations need not be `Send`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}
