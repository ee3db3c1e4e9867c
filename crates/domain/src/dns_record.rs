pub mod record_class;
pub mod record_data;
pub mod record_type;

pub use record_class::RecordClass;
pub use record_data::RecordData;
pub use record_type::RecordType;
