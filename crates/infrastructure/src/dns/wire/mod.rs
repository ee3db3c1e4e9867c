//! Decoding of wire-format messages into the structured message model.
//!
//! All reads go through [`WireCursor`], which rejects any access past the
//! end of the buffer. Lengths, offsets and counts taken from the input are
//! only ever used after that check.

mod cursor;
mod message;
mod name;
mod question;
mod rdata;
mod record;

pub use cursor::WireCursor;
pub use message::{decode_message, WireDecoder};
pub use name::read_name;
pub use question::read_question;
pub use rdata::read_record_data;
pub use record::read_record;
