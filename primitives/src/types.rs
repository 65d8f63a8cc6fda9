//! Core type aliases, constants and storage key derivation.
//!
//! Keys have the form `HASH_<roundNum>` where `<roundNum>` is the plain
//! decimal representation of a positive round number.

/// Round number as accepted at the API boundary.
///
/// Signed so that zero and negative inputs reach validation instead of
/// failing at parse time. Stored records always hold a value `>= 1`.
pub type RoundNum = i64;

/// Seconds since the Unix epoch.
pub type Timestamp = i64;

/// Prefix of every record key in world state.
pub const KEY_PREFIX: &str = "HASH_";

/// Maximum key length accepted by the host state API.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum value length accepted by the host state API.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Derive the world-state key for a round.
///
/// Callers validate `round >= 1` first; the function itself is total and
/// injective over all `i64` values.
pub fn round_key(round: RoundNum) -> String {
    format!("{}{}", KEY_PREFIX, round)
}
