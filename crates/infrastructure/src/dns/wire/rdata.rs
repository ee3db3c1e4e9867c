use super::cursor::WireCursor;
use super::name::read_name;
use ferrous_relay_domain::{DecoderConfig, RecordData, RecordType, WireError};
use std::net::Ipv4Addr;

/// Decodes the payload of a record whose `rdlength` bytes start at
/// `data_offset`.
///
/// The caller has already checked that the declared payload is present.
/// Name-bearing payloads are decoded against the whole message so that
/// compression pointers resolve; they are not limited by `rdlength`.
pub fn read_record_data(
    message: &WireCursor<'_>,
    record_type: RecordType,
    data_offset: usize,
    rdlength: usize,
    config: &DecoderConfig,
) -> Result<RecordData, WireError> {
    let mut rdata = message.window(data_offset, rdlength)?;
    let raw = rdata.bytes_at(data_offset, rdlength)?.to_vec();

    let data = match record_type {
        RecordType::A => {
            let octets = rdata.read_bytes(4)?;
            RecordData::A {
                address: Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]),
                raw,
            }
        }
        RecordType::NS => RecordData::NS {
            nameserver: read_name(&mut message.at(data_offset), config)?,
            raw,
        },
        RecordType::CNAME => RecordData::CNAME {
            alias: read_name(&mut message.at(data_offset), config)?,
            raw,
        },
        RecordType::MX => {
            let preference = rdata.read_u16()?;
            RecordData::MX {
                preference,
                exchange: read_name(&mut message.at(data_offset + 2), config)?,
                raw,
            }
        }
        _ => RecordData::Opaque { raw },
    };

    Ok(data)
}
