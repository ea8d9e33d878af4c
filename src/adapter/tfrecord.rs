//! TFRecord framing.
//!
//! Each frame is `len: u64 LE | crc(len): u32 | data: [u8; len] | crc(data): u32`.
//! The CRC fields are skipped, not verified.

use crate::error::AppError;

const LENGTH_BYTES: usize = 8;
const CRC_BYTES: usize = 4;

/// Split a TFRecord file into its payloads.
///
/// # Errors
/// `Format` if the buffer ends in the middle of a frame.
pub fn split_records(bytes: &[u8]) -> Result<Vec<Vec<u8>>, AppError> {
    let mut records = Vec::new();
    let mut rest = bytes;

    while !rest.is_empty() {
        let header_len = LENGTH_BYTES + CRC_BYTES;
        if rest.len() < header_len {
            return Err(AppError::Format(format!(
                "truncated record header at offset {}",
                bytes.len() - rest.len()
            )));
        }

        let mut len_bytes = [0u8; LENGTH_BYTES];
        len_bytes.copy_from_slice(&rest[..LENGTH_BYTES]);
        let data_len = usize::try_from(u64::from_le_bytes(len_bytes))
            .map_err(|_| AppError::Format("record length overflows usize".to_string()))?;

        let frame_len = data_len
            .checked_add(header_len + CRC_BYTES)
            .ok_or_else(|| AppError::Format("record length overflows usize".to_string()))?;
        if rest.len() < frame_len {
            return Err(AppError::Format(format!(
                "truncated record at offset {}: need {frame_len} bytes, have {}",
                bytes.len() - rest.len(),
                rest.len()
            )));
        }

        records.push(rest[header_len..header_len + data_len].to_vec());
        rest = &rest[frame_len..];
    }

    Ok(records)
}

#[cfg(test)]
pub(crate) fn frame(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 16);
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&[0u8; CRC_BYTES]);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0u8; CRC_BYTES]);
    out
}
