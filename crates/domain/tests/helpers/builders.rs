#![allow(dead_code)]

use ferrous_relay_domain::{
    DomainName, Flags, Header, Message, Question, RecordClass, RecordData, RecordType,
    ResourceRecord,
};
use std::net::Ipv4Addr;

pub struct MessageBuilder {
    id: u16,
    flags: u16,
    questions: Vec<Question>,
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
    additionals: Vec<ResourceRecord>,
}

impl MessageBuilder {
    pub fn query(id: u16) -> Self {
        Self {
            id,
            flags: 0x0100,
            questions: Vec::new(),
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    pub fn response(id: u16) -> Self {
        Self {
            flags: 0x8180,
            ..Self::query(id)
        }
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.questions.push(Question::new(
            DomainName::from(name),
            record_type,
            RecordClass::IN,
        ));
        self
    }

    pub fn answer(mut self, record: ResourceRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn build(self) -> Message {
        Message {
            header: Header {
                id: self.id,
                flags: Flags::from_raw(self.flags),
                question_count: self.questions.len() as u16,
                answer_count: self.answers.len() as u16,
                authority_count: self.authorities.len() as u16,
                additional_count: self.additionals.len() as u16,
            },
            questions: self.questions,
            answers: self.answers,
            authorities: self.authorities,
            additionals: self.additionals,
        }
    }
}

pub fn a_record(name: &str, ttl: u32, address: Ipv4Addr) -> ResourceRecord {
    ResourceRecord::new(
        DomainName::from(name),
        RecordType::A,
        RecordClass::IN,
        ttl,
        RecordData::A {
            address,
            raw: address.octets().to_vec(),
        },
    )
}

pub fn cname_record(name: &str, ttl: u32, alias: &str) -> ResourceRecord {
    let alias = DomainName::from(alias);
    ResourceRecord::new(
        DomainName::from(name),
        RecordType::CNAME,
        RecordClass::IN,
        ttl,
        RecordData::CNAME {
            raw: vec![0; alias.wire_len()],
            alias,
        },
    )
}

pub fn opaque_record(name: &str, code: u16, ttl: u32, raw: Vec<u8>) -> ResourceRecord {
    ResourceRecord::new(
        DomainName::from(name),
        RecordType::from_u16(code),
        RecordClass::IN,
        ttl,
        RecordData::Opaque { raw },
    )
}
