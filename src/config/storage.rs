use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct StorageConfig {
    /// Directory holding one JSON array file per entity type.
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
        }
    }
}
