use crate::dns_message::DomainName;
use std::fmt;
use std::net::Ipv4Addr;

/// Typed payload of a resource record.
///
/// Every variant keeps the record's original `rdlength` bytes in `raw`.
/// Name-bearing variants hold the decompressed name, which may have been
/// read from outside `raw` through compression pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A {
        address: Ipv4Addr,
        raw: Vec<u8>,
    },
    CNAME {
        alias: DomainName,
        raw: Vec<u8>,
    },
    NS {
        nameserver: DomainName,
        raw: Vec<u8>,
    },
    MX {
        preference: u16,
        exchange: DomainName,
        raw: Vec<u8>,
    },
    Opaque {
        raw: Vec<u8>,
    },
}

impl RecordData {
    pub fn raw(&self) -> &[u8] {
        match self {
            RecordData::A { raw, .. }
            | RecordData::CNAME { raw, .. }
            | RecordData::NS { raw, .. }
            | RecordData::MX { raw, .. }
            | RecordData::Opaque { raw } => raw,
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            RecordData::A { .. } => "A",
            RecordData::CNAME { .. } => "CNAME",
            RecordData::NS { .. } => "NS",
            RecordData::MX { .. } => "MX",
            RecordData::Opaque { .. } => "OPAQUE",
        }
    }

    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            RecordData::A { address, .. } => Some(*address),
            _ => None,
        }
    }

    /// The domain name carried by CNAME, NS and MX payloads.
    pub fn target_name(&self) -> Option<&DomainName> {
        match self {
            RecordData::CNAME { alias, .. } => Some(alias),
            RecordData::NS { nameserver, .. } => Some(nameserver),
            RecordData::MX { exchange, .. } => Some(exchange),
            RecordData::A { .. } | RecordData::Opaque { .. } => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A { address, .. } => write!(f, "{}", address),
            RecordData::CNAME { alias, .. } => write!(f, "{}", alias),
            RecordData::NS { nameserver, .. } => write!(f, "{}", nameserver),
            RecordData::MX {
                preference,
                exchange,
                ..
            } => write!(f, "{} {}", preference, exchange),
            // RFC 3597 generic presentation
            RecordData::Opaque { raw } => {
                write!(f, "\\# {}", raw.len())?;
                if !raw.is_empty() {
                    f.write_str(" ")?;
                    for byte in raw {
                        write!(f, "{:02x}", byte)?;
                    }
                }
                Ok(())
            }
        }
    }
}
