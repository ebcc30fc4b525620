pub mod value_classifier;
pub mod verification_policy;
