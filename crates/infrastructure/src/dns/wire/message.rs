use super::cursor::WireCursor;
use super::question::read_question;
use super::record::read_record;
use ferrous_relay_application::ports::MessageDecoder;
use ferrous_relay_domain::dns_message::HEADER_LEN;
use ferrous_relay_domain::{DecoderConfig, Flags, Header, Message, Section, WireError};
use tracing::debug;

/// Decoder for complete wire-format messages.
///
/// Holds only its limits; decoding borrows the input and keeps no state
/// between calls, so one instance can be shared freely across tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireDecoder {
    config: DecoderConfig,
}

impl WireDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode(&self, buf: &[u8]) -> Result<Message, WireError> {
        let mut cursor = WireCursor::new(buf);
        let header = read_header(&mut cursor)?;

        let questions = read_section(
            &mut cursor,
            Section::Question,
            header.question_count,
            |c| read_question(c, &self.config),
        )?;
        let answers = read_section(&mut cursor, Section::Answer, header.answer_count, |c| {
            read_record(c, &self.config)
        })?;
        let authorities = read_section(
            &mut cursor,
            Section::Authority,
            header.authority_count,
            |c| read_record(c, &self.config),
        )?;
        let additionals = read_section(
            &mut cursor,
            Section::Additional,
            header.additional_count,
            |c| read_record(c, &self.config),
        )?;

        if !cursor.is_at_end() {
            debug!(
                id = header.id,
                trailing = cursor.remaining(),
                "Ignoring trailing bytes after last record"
            );
        }

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

impl MessageDecoder for WireDecoder {
    fn decode(&self, buf: &[u8]) -> Result<Message, WireError> {
        WireDecoder::decode(self, buf)
    }
}

/// Decodes `buf` with the default limits.
pub fn decode_message(buf: &[u8]) -> Result<Message, WireError> {
    WireDecoder::default().decode(buf)
}

fn read_header(cursor: &mut WireCursor<'_>) -> Result<Header, WireError> {
    cursor.require(HEADER_LEN)?;
    Ok(Header {
        id: cursor.read_u16()?,
        flags: Flags::from_raw(cursor.read_u16()?),
        question_count: cursor.read_u16()?,
        answer_count: cursor.read_u16()?,
        authority_count: cursor.read_u16()?,
        additional_count: cursor.read_u16()?,
    })
}

fn read_section<'a, T, F>(
    cursor: &mut WireCursor<'a>,
    section: Section,
    declared: u16,
    mut read_entry: F,
) -> Result<Vec<T>, WireError>
where
    F: FnMut(&mut WireCursor<'a>) -> Result<T, WireError>,
{
    // a declared count is a claim, not a size; never reserve more than the
    // remaining bytes could possibly hold
    let mut entries = Vec::with_capacity(usize::from(declared).min(cursor.remaining()));

    for decoded in 0..declared {
        if cursor.is_at_end() {
            return Err(WireError::MalformedCount {
                section,
                declared,
                decoded,
            });
        }
        entries.push(read_entry(cursor)?);
    }

    Ok(entries)
}
