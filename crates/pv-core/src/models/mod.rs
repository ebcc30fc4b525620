pub mod field;
pub mod field_attributes;
pub mod field_limits;
pub mod identity;
pub mod profile_fields;
