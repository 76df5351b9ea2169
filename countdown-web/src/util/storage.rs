//! Browser localStorage persistence for the single countdown slot.
//!
//! TRADE-OFFS
//! ==========
//! A present-but-unreadable record is logged and treated as absent, so a
//! corrupt slot can never wedge the page at startup; the next submit simply
//! overwrites it. SSR and native test builds safely no-op.

use countdown::record::SavedCountdown;

/// Fixed key for the single persisted countdown slot.
pub const STORAGE_KEY: &str = "countdown";

/// Load the saved countdown, if any.
pub fn load() -> Option<SavedCountdown> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                leptos::logging::warn!("discarding unreadable countdown slot: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Save `record` to the slot, overwriting any prior value.
pub fn save(record: &SavedCountdown) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(record) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
    }
}

/// Remove the persisted slot. Absence means "no active countdown".
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;
