use super::DomainName;
use crate::dns_record::{RecordClass, RecordData, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub record_type: RecordType,
    pub record_class: RecordClass,
    /// Seconds, unsigned as on the wire.
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(
        name: DomainName,
        record_type: RecordType,
        record_class: RecordClass,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Self {
            name,
            record_type,
            record_class,
            ttl,
            data,
        }
    }

    pub fn rdlength(&self) -> usize {
        self.data.raw().len()
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, self.record_class, self.record_type, self.data
        )
    }
}
