pub const DEFAULT_MAX_FIELDS: usize = 4;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 255;
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 255;

/// Bounds applied when an identity's fields are replaced.
/// Lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLimits {
    pub max_fields: usize,
    pub max_name_length: usize,
    pub max_value_length: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_fields: DEFAULT_MAX_FIELDS,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
        }
    }
}
