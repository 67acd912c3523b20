//! JSON-file collection store.
//!
//! Each entity type persists as one JSON array file under the data
//! directory (`users.json`, `attendance.json`, `assignments.json`,
//! `notices.json`). Every mutation is a full read-modify-write cycle;
//! an async mutex per collection serializes those cycles so concurrent
//! writers cannot clobber each other. Reads take the same lock briefly.
//!
//! A missing collection file reads as the empty collection, which is how
//! first boot looks before anything has been written.

use std::fmt;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::sync::Mutex;

use crate::modules::assignments::model::Assignment;
use crate::modules::attendance::model::AttendanceRecord;
use crate::modules::notices::model::Notice;
use crate::modules::users::model::User;

/// Error type for collection persistence.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Storage I/O error: {}", e),
            Self::Serde(e) => write!(f, "Storage serialization error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e)
    }
}

/// One persisted collection: a JSON array file plus its write lock.
#[derive(Debug)]
pub struct Collection<T> {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            lock: Arc::clone(&self.lock),
            _entity: PhantomData,
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(data_dir: &Path, file_name: &str) -> Self {
        Self {
            path: data_dir.join(file_name),
            lock: Arc::new(Mutex::new(())),
            _entity: PhantomData,
        }
    }

    /// Read the full collection.
    pub async fn read(&self) -> Result<Vec<T>, StoreError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Run one read-modify-write cycle under the collection lock.
    ///
    /// The closure receives the current state and may mutate it freely;
    /// the file is rewritten only when the closure returns `Ok`, so a
    /// failed mutation leaves the collection untouched.
    pub async fn update<F, R, E>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut items = self.load().await.map_err(E::from)?;
        let out = mutate(&mut items)?;
        self.persist(&items).await.map_err(E::from)?;
        Ok(out)
    }

    async fn load(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn persist(&self, items: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

/// Handle to every persisted collection.
#[derive(Clone, Debug)]
pub struct JsonStore {
    pub users: Collection<User>,
    pub attendance: Collection<AttendanceRecord>,
    pub assignments: Collection<Assignment>,
    pub notices: Collection<Notice>,
}

impl JsonStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed.
    pub async fn open(data_dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(data_dir).await?;

        Ok(Self {
            users: Collection::new(data_dir, "users.json"),
            attendance: Collection::new(data_dir, "attendance.json"),
            assignments: Collection::new(data_dir, "assignments.json"),
            notices: Collection::new(data_dir, "notices.json"),
        })
    }
}
