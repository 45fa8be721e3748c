//! Item identifier generation

use regex::Regex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use uuid::{Builder, Uuid};

static UUID_V4_REGEX: OnceLock<Regex> = OnceLock::new();

/// Source of ids for newly parsed cart items
pub trait IdGenerator: Send + Sync {
    /// Produce the id for the next item
    fn next_id(&self) -> Uuid;
}

/// Random version 4 ids
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic, version-4 shaped ids built from a counter.
///
/// Useful for reproducible output; the ids carry the v4 version and variant
/// bits so they pass the same shape checks as random ones.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Start counting at `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        let counter = self.next.fetch_add(1, Ordering::Relaxed);
        let mut bytes = [0u8; 16];
        bytes[8..].copy_from_slice(&counter.to_be_bytes());
        Builder::from_random_bytes(bytes).into_uuid()
    }
}

/// True when `id` looks like a version 4 UUID: `8-4-4-4-12` hex groups, a `4`
/// version nibble and an RFC 4122 variant
pub fn is_uuid_v4(id: &str) -> bool {
    UUID_V4_REGEX
        .get_or_init(|| {
            Regex::new(
                r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
            )
            .expect("uuid pattern is valid")
        })
        .is_match(id)
}
