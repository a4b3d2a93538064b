//! File-backed document collection with owner-scoped access.
//!
//! Each collection is one JSON file holding a `Vec<T>`. Writes go through a
//! tmp-file + rename so a crash mid-save never leaves a torn file. The mutex
//! also gives per-document atomicity for the read-modify-write paths (funds
//! merge), which is the only coordination this system needs.

use crate::error::ApiError;
use crate::records::{Owned, Windowed};
use std::fs;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

#[derive(Clone)]
pub struct CollectionDb<T>
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + Clone,
{
    db: Arc<Mutex<BaseCollectionDb<T>>>,
}

impl<T> CollectionDb<T>
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + Clone,
{
    pub fn new(file_path: String) -> Result<Self, StoreError> {
        Ok(CollectionDb::<T> {
            db: Arc::new(Mutex::new(BaseCollectionDb::<T>::new(file_path)?)),
        })
    }

    pub fn data(&self) -> Vec<T> {
        let mutex = self.db.lock().unwrap();
        mutex.data.clone()
    }

    pub fn is_data_empty(&self) -> bool {
        let mutex = self.db.lock().unwrap();
        mutex.data.is_empty()
    }
}

impl<T> CollectionDb<T>
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Owned,
{
    pub fn insert(&self, doc: T) -> Result<(), StoreError> {
        let mut mutex = self.db.lock().unwrap();
        debug!(
            "Insert {} with id {}",
            std::any::type_name::<T>(),
            doc.id()
        );
        mutex.data.push(doc);
        mutex.save()
    }

    /// Insert or replace the document with the same id.
    pub fn upsert(&self, doc: T) -> Result<(), StoreError> {
        let mut mutex = self.db.lock().unwrap();
        let index = mutex.data.iter().position(|x| x.id() == doc.id());
        if let Some(index) = index {
            debug!(
                "Update {} with id {}",
                std::any::type_name::<T>(),
                doc.id()
            );
            mutex.data[index] = doc;
        } else {
            debug!(
                "Insert {} with id {}",
                std::any::type_name::<T>(),
                doc.id()
            );
            mutex.data.push(doc);
        }
        mutex.save()
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        let mutex = self.db.lock().unwrap();
        mutex.data.iter().find(|x| x.id() == id).cloned()
    }

    /// All documents owned by `uid`, in insertion order.
    pub fn list_owned(&self, uid: &str) -> Vec<T> {
        let mutex = self.db.lock().unwrap();
        mutex
            .data
            .iter()
            .filter(|x| x.owner_id() == uid)
            .cloned()
            .collect()
    }

    /// Delete `id` if it exists AND belongs to `uid`. A missing document and
    /// a document owned by someone else both come back as `NotFound`, so the
    /// response never reveals whether the id exists.
    pub fn delete_owned(&self, uid: &str, id: &str) -> Result<(), ApiError> {
        let mut mutex = self.db.lock().unwrap();
        let found = mutex
            .data
            .iter()
            .any(|x| x.id() == id && belongs_to_caller(x, uid));
        if !found {
            return Err(ApiError::NotFound);
        }
        mutex.data.retain(|x| x.id() != id);
        mutex.save()?;
        Ok(())
    }
}

impl<T> CollectionDb<T>
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Owned + Windowed,
{
    /// Owner filter first, then the (year) or (year, month) window.
    pub fn list_window(&self, uid: &str, year: i64, month: Option<i64>) -> Vec<T> {
        let mutex = self.db.lock().unwrap();
        mutex
            .data
            .iter()
            .filter(|x| x.owner_id() == uid)
            .filter(|x| x.year() == year)
            .filter(|x| month.is_none_or(|m| x.month() == m))
            .cloned()
            .collect()
    }
}

/// The one ownership predicate used by every get/delete path.
pub fn belongs_to_caller<T: Owned>(doc: &T, caller_id: &str) -> bool {
    doc.owner_id() == caller_id
}

struct BaseCollectionDb<T: serde::Serialize + for<'de> serde::Deserialize<'de>> {
    file_path: String,
    data: Vec<T>,
}

impl<T: serde::Serialize + for<'de> serde::Deserialize<'de>> BaseCollectionDb<T> {
    fn new(file_path: String) -> Result<Self, StoreError> {
        let mut content = String::new();

        if !fs::exists(&file_path)? {
            if let Some(folder) = Path::new(&file_path).parent() {
                if !folder.as_os_str().is_empty() && !folder.exists() {
                    fs::create_dir_all(folder)?;
                    info!("Created folder: {}", folder.display());
                }
            }

            File::create(&file_path)?;
            info!("Created file: {}", file_path);
        } else {
            let mut file = File::open(&file_path)?;
            file.read_to_string(&mut content)?;
        } // file closed

        let data: Vec<T> = if content.is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&content)?
        };

        Ok(BaseCollectionDb::<T> { file_path, data })
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.data)?;

        let tmp_path = format!("{}.tmp", &self.file_path);
        let mut file = File::create(&tmp_path)?; // this truncates the exiting file if any
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &self.file_path)?; // this replaces the existing file

        debug!("Saved file: {}", self.file_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Salary;
    use tempfile::tempdir;

    fn salary(id: &str, uid: &str, year: i64, month: i64) -> Salary {
        Salary {
            id: id.to_string(),
            user_id: uid.to_string(),
            person: "alice@example.com".to_string(),
            amount: 1000.0,
            date: format!("{year}-{month:02}-01"),
            month,
            year,
        }
    }

    fn open_db(dir: &Path) -> CollectionDb<Salary> {
        CollectionDb::new(dir.join("salaries.json").to_string_lossy().into_owned()).unwrap()
    }

    #[test]
    fn list_owned_is_scoped_to_owner() {
        let dir = tempdir().unwrap();
        let db = open_db(dir.path());
        db.insert(salary("a", "u1", 2024, 3)).unwrap();
        db.insert(salary("b", "u2", 2024, 3)).unwrap();
        db.insert(salary("c", "u1", 2024, 4)).unwrap();

        let owned = db.list_owned("u1");
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|s| s.user_id == "u1"));
    }

    #[test]
    fn window_by_month_is_subset_of_window_by_year() {
        let dir = tempdir().unwrap();
        let db = open_db(dir.path());
        db.insert(salary("a", "u1", 2024, 3)).unwrap();
        db.insert(salary("b", "u1", 2024, 4)).unwrap();
        db.insert(salary("c", "u1", 2023, 3)).unwrap();

        let by_year = db.list_window("u1", 2024, None);
        let by_month = db.list_window("u1", 2024, Some(3));
        assert_eq!(by_year.len(), 2);
        assert_eq!(by_month.len(), 1);
        assert!(by_month.iter().all(|s| by_year.contains(s)));
    }

    #[test]
    fn delete_owned_rejects_non_owner_as_not_found() {
        let dir = tempdir().unwrap();
        let db = open_db(dir.path());
        db.insert(salary("a", "u1", 2024, 3)).unwrap();

        // someone else's id looks exactly like a missing id
        let err = db.delete_owned("u2", "a").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
        let err = db.delete_owned("u1", "nope").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));

        db.delete_owned("u1", "a").unwrap();
        assert!(db.is_data_empty());
        // second delete of the same id is again a plain not-found
        let err = db.delete_owned("u1", "a").unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let db = open_db(dir.path());
            db.insert(salary("a", "u1", 2024, 3)).unwrap();
        }
        let db = open_db(dir.path());
        assert_eq!(db.data().len(), 1);
        assert_eq!(db.find_by_id("a").unwrap().user_id, "u1");
    }

    #[test]
    fn upsert_replaces_by_id() {
        let dir = tempdir().unwrap();
        let db = open_db(dir.path());
        db.insert(salary("a", "u1", 2024, 3)).unwrap();
        let mut updated = salary("a", "u1", 2024, 3);
        updated.amount = 2000.0;
        db.upsert(updated).unwrap();
        assert_eq!(db.data().len(), 1);
        assert_eq!(db.find_by_id("a").unwrap().amount, 2000.0);
    }
}
