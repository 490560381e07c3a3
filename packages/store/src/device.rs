//! # Device identity
//!
//! A device id recognises a browser instance across sessions. It is generated
//! lazily on first use, written to storage, and returned unchanged from then on
//! until the storage is cleared. There is no expiry and no rotation.
//!
//! Format: `device_<fragment>_<millis>` where `<fragment>` is
//! [`FRAGMENT_LEN`] random base-36 characters and `<millis>` is the Unix time
//! in milliseconds at creation. Collisions are merely improbable.
//!
//! Randomness and time are platform-aware: `js_sys` on WASM, `rand` and
//! `std::time::SystemTime` on native.

use crate::config::DEVICE_ID_KEY;
use crate::kv::KeyValueStore;

const PREFIX: &str = "device_";
pub const FRAGMENT_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Return the stored device id, creating and persisting one if absent.
pub fn get_or_create_device_id<S: KeyValueStore>(store: &S) -> String {
    get_or_create_device_id_at(store, DEVICE_ID_KEY)
}

/// Same as [`get_or_create_device_id`] with a custom storage key.
pub fn get_or_create_device_id_at<S: KeyValueStore>(store: &S, key: &str) -> String {
    if let Some(existing) = store.get(key).filter(|id| !id.is_empty()) {
        return existing;
    }
    let id = generate_device_id();
    store.set(key, &id);
    tracing::info!("Created device id {}", id);
    id
}

/// Build a fresh device id. Does not touch storage.
pub fn generate_device_id() -> String {
    let fragment: String = (0..FRAGMENT_LEN)
        .map(|_| ALPHABET[random_index(ALPHABET.len())] as char)
        .collect();
    format!("{PREFIX}{fragment}_{}", current_timestamp_millis())
}

/// Whether `id` has the `device_<alnum>_<digits>` shape.
pub fn is_device_id(id: &str) -> bool {
    let Some(rest) = id.strip_prefix(PREFIX) else {
        return false;
    };
    let Some((fragment, millis)) = rest.split_once('_') else {
        return false;
    };
    !fragment.is_empty()
        && fragment.bytes().all(|b| b.is_ascii_alphanumeric())
        && !millis.is_empty()
        && millis.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(target_arch = "wasm32")]
fn random_index(len: usize) -> usize {
    ((js_sys::Math::random() * len as f64) as usize).min(len - 1)
}

#[cfg(not(target_arch = "wasm32"))]
fn random_index(len: usize) -> usize {
    use rand::Rng;
    rand::thread_rng().gen_range(0..len)
}

#[cfg(target_arch = "wasm32")]
fn current_timestamp_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn current_timestamp_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
