//! Trailer at the end of the settings region.
//!
//! ```text
//! R-12 .. R-9 : data_size  (u32, native endian)
//! R-8  .. R-5 : data_crc   (u32, native endian)
//! R-4  .. R-1 : magic      (u32, native endian)
//! payload     : [R-12-data_size, R-12)
//! ```

use log::debug;

use super::ByteStore;
use super::checksum::crc32;
use super::errors::{FooterError, StoreError};

/// "CP24" read as a little-endian word.
pub const FOOTER_MAGIC: u32 = 0x3432_5043;

pub const FOOTER_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub data_size: u32,
    pub data_crc: u32,
    pub magic: u32,
}

impl Footer {
    pub fn for_payload(payload: &[u8]) -> Self {
        Self {
            data_size: payload.len() as u32,
            data_crc: crc32(payload),
            magic: FOOTER_MAGIC,
        }
    }

    pub fn from_bytes(bytes: [u8; FOOTER_SIZE]) -> Self {
        let word = |i: usize| {
            u32::from_ne_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
        };
        Self {
            data_size: word(0),
            data_crc: word(4),
            magic: word(8),
        }
    }

    pub fn to_bytes(&self) -> [u8; FOOTER_SIZE] {
        let mut bytes = [0u8; FOOTER_SIZE];
        bytes[0..4].copy_from_slice(&self.data_size.to_ne_bytes());
        bytes[4..8].copy_from_slice(&self.data_crc.to_ne_bytes());
        bytes[8..12].copy_from_slice(&self.magic.to_ne_bytes());
        bytes
    }
}

/// Byte offset of the footer in a region of `region_size` bytes.
pub fn footer_offset(region_size: usize) -> Option<usize> {
    region_size.checked_sub(FOOTER_SIZE)
}

/// Candidate payload located by a structurally valid footer. Not yet checksummed.
#[derive(Debug)]
pub struct Payload<'a> {
    pub footer: Footer,
    pub bytes: &'a [u8],
}

impl Payload<'_> {
    pub fn verify(&self) -> Result<(), FooterError> {
        let computed = crc32(self.bytes);
        if computed != self.footer.data_crc {
            return Err(FooterError::Integrity {
                stored: self.footer.data_crc,
                computed,
            });
        }
        Ok(())
    }
}

/// Reads the footer and returns the payload it describes.
pub fn read<B: ByteStore + ?Sized>(store: &B) -> Result<Payload<'_>, FooterError> {
    let region_size = store.size();
    let footer = read_footer(store).ok_or(FooterError::Size {
        data_size: 0,
        region_size,
    })?;

    if footer.magic != FOOTER_MAGIC {
        return Err(FooterError::Format { found: footer.magic });
    }

    let too_large = FooterError::Size {
        data_size: footer.data_size,
        region_size,
    };
    let total = (footer.data_size as usize)
        .checked_add(FOOTER_SIZE)
        .ok_or(too_large.clone())?;
    if total > region_size {
        return Err(too_large);
    }

    let start = region_size - total;
    let bytes = &store.cache()[start..start + footer.data_size as usize];
    Ok(Payload { footer, bytes })
}

/// Writes `payload` and its footer into the cache, then commits.
///
/// The payload ends where the footer begins; nothing else in the region is
/// touched.
pub fn write<B: ByteStore + ?Sized>(store: &mut B, payload: &[u8]) -> Result<Footer, StoreError> {
    let region_size = store.size();
    let out_of_bounds = StoreError::OutOfBounds {
        offset: 0,
        len: payload.len() + FOOTER_SIZE,
        size: region_size,
    };
    let footer_at = footer_offset(region_size).ok_or(out_of_bounds.clone())?;
    let payload_at = footer_at.checked_sub(payload.len()).ok_or(out_of_bounds)?;

    let footer = Footer::for_payload(payload);
    store.set(footer_at, &footer.to_bytes())?;
    store.set(payload_at, payload)?;
    store.commit()?;

    debug!(
        "wrote footer: size={} crc=0x{:08X} at offset {}",
        footer.data_size, footer.data_crc, footer_at
    );
    Ok(footer)
}

fn read_footer<B: ByteStore + ?Sized>(store: &B) -> Option<Footer> {
    let offset = footer_offset(store.size())?;
    let bytes: [u8; FOOTER_SIZE] = store.get(offset, FOOTER_SIZE).ok()?.try_into().ok()?;
    Some(Footer::from_bytes(bytes))
}

/// Diagnostic view of the footer region.
#[derive(Debug, Clone)]
pub struct FooterReport {
    pub region_size: usize,
    pub footer: Option<Footer>,
    pub computed_crc: Option<u32>,
    pub verdict: Result<(), FooterError>,
}

/// Decodes the footer without interpreting the payload.
pub fn inspect<B: ByteStore + ?Sized>(store: &B) -> FooterReport {
    let footer = read_footer(store);
    let (computed_crc, verdict) = match read(store) {
        Ok(payload) => (Some(crc32(payload.bytes)), payload.verify()),
        Err(e) => (None, Err(e)),
    };

    FooterReport {
        region_size: store.size(),
        footer,
        computed_crc,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_footer_layout_is_native_endian() {
        let footer = Footer {
            data_size: 7,
            data_crc: 0xAABB_CCDD,
            magic: FOOTER_MAGIC,
        };
        let bytes = footer.to_bytes();
        assert_eq!(&bytes[0..4], &7u32.to_ne_bytes());
        assert_eq!(&bytes[4..8], &0xAABB_CCDDu32.to_ne_bytes());
        assert_eq!(&bytes[8..12], &FOOTER_MAGIC.to_ne_bytes());
        assert_eq!(Footer::from_bytes(bytes), footer);
    }

    #[test]
    fn test_write_places_payload_before_footer() {
        let mut store = MemoryStore::new(64);
        let footer = write(&mut store, &[1, 2, 3]).expect("write");

        assert_eq!(footer.data_size, 3);
        assert_eq!(&store.cache()[49..52], &[1, 2, 3]);
        assert_eq!(&store.cache()[52..64], &footer.to_bytes());
        assert_eq!(store.cache()[48], 0xFF);
        assert_eq!(store.commits(), 1);

        let payload = read(&store).expect("read");
        assert_eq!(payload.bytes, &[1, 2, 3]);
        payload.verify().expect("checksum");
    }

    #[test]
    fn test_erased_region_has_bad_magic() {
        let store = MemoryStore::new(64);
        assert_eq!(
            read(&store).unwrap_err(),
            FooterError::Format { found: 0xFFFF_FFFF }
        );
    }

    #[test]
    fn test_oversized_data_size_is_rejected() {
        let mut store = MemoryStore::new(64);
        let footer = Footer {
            data_size: 53,
            data_crc: crc32(&store.cache()[0..53]),
            magic: FOOTER_MAGIC,
        };
        store.set(52, &footer.to_bytes()).expect("set");
        assert!(matches!(read(&store), Err(FooterError::Size { data_size: 53, .. })));

        let footer = Footer {
            data_size: u32::MAX,
            ..footer
        };
        store.set(52, &footer.to_bytes()).expect("set");
        assert!(matches!(read(&store), Err(FooterError::Size { .. })));
    }

    #[test]
    fn test_payload_filling_region_is_accepted() {
        let mut store = MemoryStore::new(16);
        write(&mut store, &[9, 8, 7, 6]).expect("write");
        assert_eq!(read(&store).expect("read").bytes, &[9, 8, 7, 6]);

        assert!(write(&mut store, &[0; 5]).is_err());
    }

    #[test]
    fn test_inspect_reports_checksum_mismatch() {
        let mut store = MemoryStore::new(32);
        write(&mut store, &[1, 2, 3, 4]).expect("write");
        store.cache_mut()[17] ^= 0x01;

        let report = inspect(&store);
        assert!(report.footer.is_some());
        assert!(matches!(report.verdict, Err(FooterError::Integrity { .. })));
        assert_ne!(report.computed_crc, report.footer.map(|f| f.data_crc));
    }

    #[test]
    fn test_region_smaller_than_footer() {
        let mut store = MemoryStore::new(8);
        assert!(read(&store).is_err());
        assert!(write(&mut store, &[]).is_err());
    }
}
