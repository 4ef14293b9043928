//! Load/save entry points tying the footer, checksum, codec and presence walk
//! together.

use log::{debug, info, warn};
use serde::Serialize;

use crate::codec;
use crate::error::NvsError;
use crate::schema::errors::SchemaError;
use crate::schema::{Schema, presence};
use crate::storage::ByteStore;
use crate::storage::footer::{self, Footer, FooterReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadStatus {
    Loaded,
    DefaultInit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveStatus {
    Saved,
    EncodingFailed,
}

/// Settings persisted in the trailing bytes of a byte store.
#[derive(Debug)]
pub struct SettingsStore<B: ByteStore> {
    store: B,
}

impl<B: ByteStore> SettingsStore<B> {
    pub fn new(store: B) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &B {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut B {
        &mut self.store
    }

    pub fn into_inner(self) -> B {
        self.store
    }

    /// Reads the stored record.
    ///
    /// Any problem with the stored bytes (bad magic, impossible size,
    /// checksum mismatch, undecodable payload) yields a default record and
    /// `DefaultInit`. The cause is only logged.
    pub fn load<S: Schema>(&self) -> (S, LoadStatus) {
        match self.try_load::<S>() {
            Ok(record) => (record, LoadStatus::Loaded),
            Err(e) => {
                debug!("{} settings not loaded: {}", S::LABEL, e);
                (S::default(), LoadStatus::DefaultInit)
            }
        }
    }

    fn try_load<S: Schema>(&self) -> Result<S, NvsError> {
        let payload = footer::read(&self.store)?;
        payload.verify()?;
        Ok(codec::decode(payload.bytes)?)
    }

    /// Marks every field of `record` present, encodes it and writes it with a
    /// fresh footer.
    ///
    /// Only encoding problems are reported. A failed commit is logged and
    /// still reported as `Saved`; callers that need durability should check
    /// with [`SettingsStore::inspect`] or a subsequent `load`.
    pub fn save<S: Schema>(&mut self, record: &mut S) -> Result<SaveStatus, SchemaError> {
        presence::set_all_present(record)?;

        let payload = match codec::encode(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("{} settings not saved: {}", S::LABEL, e);
                return Ok(SaveStatus::EncodingFailed);
            }
        };

        let capacity = self.store.size().saturating_sub(footer::FOOTER_SIZE);
        if payload.len() > capacity {
            warn!(
                "{} settings not saved: {} bytes exceed the {} bytes available",
                S::LABEL,
                payload.len(),
                capacity
            );
            return Ok(SaveStatus::EncodingFailed);
        }

        match footer::write(&mut self.store, &payload) {
            Ok(Footer {
                data_size,
                data_crc,
                ..
            }) => info!(
                "saved {} settings: {} bytes, crc 0x{:08X}",
                S::LABEL,
                data_size,
                data_crc
            ),
            Err(e) => warn!("{} settings write not confirmed: {}", S::LABEL, e),
        }
        Ok(SaveStatus::Saved)
    }

    pub fn inspect(&self) -> FooterReport {
        footer::inspect(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::settings_v0::{InputMode, Settings};
    use crate::storage::MemoryStore;

    #[test]
    fn test_blank_region_loads_defaults() {
        let store = SettingsStore::new(MemoryStore::new(256));
        let (record, status) = store.load::<Settings>();
        assert_eq!(status, LoadStatus::DefaultInit);
        assert_eq!(record, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = SettingsStore::new(MemoryStore::new(256));
        let mut s = Settings::new();
        s.gamepad_options
            .mut_or_insert_default()
            .set_input_mode(InputMode::INPUT_MODE_HID);

        assert_eq!(store.save(&mut s).expect("save"), SaveStatus::Saved);
        assert_eq!(store.store().commits(), 1);

        let (loaded, status) = store.load::<Settings>();
        assert_eq!(status, LoadStatus::Loaded);
        assert_eq!(loaded, s);
        assert!(loaded.gamepad_options.has_socd_mode());
    }

    #[test]
    fn test_region_too_small_for_payload() {
        let mut store = SettingsStore::new(MemoryStore::new(16));
        let mut s = Settings::new();
        assert_eq!(store.save(&mut s).expect("save"), SaveStatus::EncodingFailed);
        assert_eq!(store.load::<Settings>().1, LoadStatus::DefaultInit);
    }

    #[test]
    fn test_failed_commit_is_not_distinguished() {
        let mut store = SettingsStore::new(MemoryStore::new(256).with_failing_commits());
        let mut s = Settings::new();
        assert_eq!(store.save(&mut s).expect("save"), SaveStatus::Saved);
    }
}
