pub mod error;
pub mod html;
pub mod models;
pub mod url_analysis;
pub mod verification;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use html::anchor_extractor::{SoleLink, extract_sole_link};
pub use html::fragment_parser::{FragmentParser, ParseError};
pub use html::node::{Element, Node};
pub use models::field::Field;
pub use models::field_attributes::FieldAttributes;
pub use models::field_limits::FieldLimits;
pub use models::identity::{Identity, IdentityKind};
pub use models::profile_fields::ProfileFields;
pub use url_analysis::url_analyzer::{analyze, has_userinfo, parse_url, raw_authority};
pub use url_analysis::url_components::UrlComponents;
pub use verification::value_classifier::{is_verifiable, link_target};
pub use verification::verification_policy::VerificationPolicy;
