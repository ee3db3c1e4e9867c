use super::cursor::WireCursor;
use ferrous_relay_domain::{DecoderConfig, DomainName, WireError};

const POINTER_MASK: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// Decodes the (possibly compressed) domain name at the cursor position.
///
/// On success the cursor sits just past the name as it appears at the call
/// site: after the terminator for an uncompressed name, or after the first
/// 2-byte pointer otherwise. Each pointer hop must land strictly below the
/// offset where the current segment started, and at most
/// `max_pointer_depth` hops are followed, so the walk always terminates.
pub fn read_name(
    cursor: &mut WireCursor<'_>,
    config: &DecoderConfig,
) -> Result<DomainName, WireError> {
    let start = cursor.position();
    let mut name = DomainName::root();
    let mut pos = start;
    let mut segment_start = start;
    let mut resume_at: Option<usize> = None;
    let mut hops = 0usize;
    let mut wire_len = 1usize;

    loop {
        let octet = cursor.u8_at(pos)?;

        match octet & POINTER_MASK {
            0x00 if octet == 0 => {
                pos += 1;
                break;
            }
            0x00 => {
                let len = usize::from(octet);
                let label = cursor.bytes_at(pos + 1, len)?;
                wire_len += len + 1;
                if wire_len > config.max_name_length {
                    return Err(WireError::NameTooLong {
                        offset: start,
                        length: wire_len,
                    });
                }
                name.push_label(label);
                pos += len + 1;
            }
            POINTER_MASK => {
                let target = usize::from(cursor.u16_at(pos)? & POINTER_OFFSET_MASK);
                if target >= segment_start || hops >= config.max_pointer_depth {
                    return Err(WireError::PointerCycle {
                        offset: pos,
                        target,
                    });
                }
                hops += 1;
                if resume_at.is_none() {
                    resume_at = Some(pos + 2);
                }
                segment_start = target;
                pos = target;
            }
            _ => return Err(WireError::UnsupportedLabelType { offset: pos, octet }),
        }
    }

    cursor.seek(resume_at.unwrap_or(pos))?;
    Ok(name)
}
