//! Checksum calculation for booking export deduplication.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of an uploaded export document.
///
/// The checksum covers the raw bytes as received, so two uploads with the
/// same bookings but different formatting are stored separately.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
