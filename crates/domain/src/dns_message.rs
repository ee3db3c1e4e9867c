pub mod domain_name;
pub mod header;
pub mod message;
pub mod question;
pub mod resource_record;

pub use domain_name::DomainName;
pub use header::{Flags, Header, Opcode, ResponseCode, HEADER_LEN};
pub use message::{Message, Section};
pub use question::Question;
pub use resource_record::ResourceRecord;
