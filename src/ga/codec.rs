//! Fixed-width binary string form of a member.

use super::error::GaError;
use super::types::Member;

/// Renders `member` as `bits` binary digits, most-significant bit first, zero-padded.
pub fn encode(member: Member, bits: u32) -> String {
    format!("{:0width$b}", member, width = bits as usize)
}

/// Parses a binary string produced by [`encode`].
pub fn decode(binary: &str) -> Result<Member, GaError> {
    if binary.is_empty() || !binary.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(GaError::InvalidBinary(binary.to_string()));
    }
    Member::from_str_radix(binary, 2)
        .map_err(|_| GaError::InvalidBinary(binary.to_string()))
}
