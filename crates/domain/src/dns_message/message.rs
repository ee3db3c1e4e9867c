use super::{Header, Question, ResourceRecord};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully decoded message. Each section holds exactly as many entries as
/// the header declares for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn is_response(&self) -> bool {
        self.header.flags.is_response()
    }

    pub fn first_question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Answer, authority and additional records, in wire order.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authorities.iter())
            .chain(self.additionals.iter())
    }

    pub fn min_answer_ttl(&self) -> Option<u32> {
        self.answers.iter().map(|record| record.ttl).min()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for question in &self.questions {
            write!(f, "; question: {}", question)?;
        }
        for (section, records) in [
            (Section::Answer, &self.answers),
            (Section::Authority, &self.authorities),
            (Section::Additional, &self.additionals),
        ] {
            for record in records {
                write!(f, "; {}: {}", section, record)?;
            }
        }
        Ok(())
    }
}
