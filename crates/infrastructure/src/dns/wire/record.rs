use super::cursor::WireCursor;
use super::name::read_name;
use super::rdata::read_record_data;
use ferrous_relay_domain::{
    DecoderConfig, RecordClass, RecordType, ResourceRecord, WireError,
};

/// TYPE, CLASS, TTL and RDLENGTH following the owner name.
const RECORD_FIXED_LEN: usize = 10;

pub fn read_record(
    cursor: &mut WireCursor<'_>,
    config: &DecoderConfig,
) -> Result<ResourceRecord, WireError> {
    let name = read_name(cursor, config)?;
    cursor.require(RECORD_FIXED_LEN)?;
    let record_type = RecordType::from_u16(cursor.read_u16()?);
    let record_class = RecordClass::from_u16(cursor.read_u16()?);
    let ttl = cursor.read_u32()?;
    let rdlength = usize::from(cursor.read_u16()?);

    let data_offset = cursor.position();
    cursor.advance(rdlength)?;
    let data = read_record_data(cursor, record_type, data_offset, rdlength, config)?;

    Ok(ResourceRecord::new(
        name,
        record_type,
        record_class,
        ttl,
        data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_record_with_compressed_owner() {
        // 0: "example.com" (13 bytes), 13: record owned by pointer to 0
        let mut buf = b"\x07example\x03com\x00".to_vec();
        buf.extend_from_slice(&[0xC0, 0x00]);
        buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        buf.extend_from_slice(&3600u32.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x04, 192, 0, 2, 1]);

        let mut cursor = WireCursor::new(&buf).at(13);
        let record = read_record(&mut cursor, &DecoderConfig::default()).unwrap();

        assert_eq!(record.name.to_string(), "example.com");
        assert_eq!(record.ttl, 3600);
        assert_eq!(record.data.address(), Some(Ipv4Addr::new(192, 0, 2, 1)));
        assert_eq!(record.rdlength(), 4);
        assert_eq!(cursor.position(), buf.len());
    }

    #[test]
    fn test_rdata_past_end() {
        let mut buf = vec![0x00, 0x00, 0x10, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00];
        buf.extend_from_slice(&[0x00, 0x05, b'a', b'b']);

        let mut cursor = WireCursor::new(&buf);
        assert_eq!(
            read_record(&mut cursor, &DecoderConfig::default()).unwrap_err(),
            WireError::TruncatedInput {
                offset: 11,
                needed: 5,
                available: 2
            }
        );
    }

    #[test]
    fn test_ttl_is_unsigned() {
        let mut buf = vec![0x00, 0x00, 0x10, 0x00, 0x01];
        buf.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        buf.extend_from_slice(&[0x00, 0x00]);

        let mut cursor = WireCursor::new(&buf);
        let record = read_record(&mut cursor, &DecoderConfig::default()).unwrap();
        assert_eq!(record.ttl, u32::MAX);
        assert_eq!(record.record_type, RecordType::TXT);
        assert!(record.name.is_root());
    }
}
