pub mod config;
pub mod device;
pub mod kv;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{AuthConfig, ClientConfig, ConfigError, StorageKeys, ToastConfig};
pub use device::{get_or_create_device_id, is_device_id};
pub use kv::{scoped_key, KeyValueStore};
