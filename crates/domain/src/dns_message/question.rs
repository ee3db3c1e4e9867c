use super::DomainName;
use crate::dns_record::{RecordClass, RecordType};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: DomainName,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl Question {
    pub fn new(name: DomainName, record_type: RecordType, record_class: RecordClass) -> Self {
        Self {
            name,
            record_type,
            record_class,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_class, self.record_type)
    }
}
