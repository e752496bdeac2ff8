pub mod entity;
pub mod value;

pub use entity::AuditHistory;
pub use value::{decode_value, encode_value};
