pub mod config;
pub mod kv;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{MapConfig, ProviderConfig, TrackerConfig};
pub use kv::KeyValueStore;
pub use models::SessionRecord;
pub use session::{SessionStore, LOGGED_IN_KEY, USER_KEY};
