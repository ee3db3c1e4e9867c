use super::cursor::WireCursor;
use super::name::read_name;
use ferrous_relay_domain::{DecoderConfig, Question, RecordClass, RecordType, WireError};

const QUESTION_FIXED_LEN: usize = 4;

pub fn read_question(
    cursor: &mut WireCursor<'_>,
    config: &DecoderConfig,
) -> Result<Question, WireError> {
    let name = read_name(cursor, config)?;
    cursor.require(QUESTION_FIXED_LEN)?;
    let record_type = RecordType::from_u16(cursor.read_u16()?);
    let record_class = RecordClass::from_u16(cursor.read_u16()?);

    Ok(Question::new(name, record_type, record_class))
}
