//! Field entity - a profile field viewed through its owning identity.

use crate::verification::value_classifier;
use crate::{FieldAttributes, Identity, VerificationPolicy};

use chrono::{DateTime, TimeDelta, Utc};
use log::info;

/// A name/value pair attached to an identity, with its verification state.
///
/// The field borrows the stored attributes, so [`Field::mark_verified`]
/// writes straight into the record the persistence layer saves.
#[derive(Debug)]
pub struct Field<'a, I: Identity + ?Sized> {
    identity: &'a I,
    attributes: &'a mut FieldAttributes,
}

impl<'a, I: Identity + ?Sized> Field<'a, I> {
    pub fn new(identity: &'a I, attributes: &'a mut FieldAttributes) -> Self {
        Self {
            identity,
            attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn value(&self) -> &str {
        &self.attributes.value
    }

    pub fn verified_at(&self) -> Option<DateTime<Utc>> {
        self.attributes.verified_at
    }

    /// Check if an ownership check has succeeded for this field
    pub fn is_verified(&self) -> bool {
        self.attributes.is_verified()
    }

    /// Check if the value is a link an ownership check may be attempted on
    pub fn is_verifiable(&self) -> bool {
        self.is_verifiable_with(&VerificationPolicy::default())
    }

    pub fn is_verifiable_with(&self, policy: &VerificationPolicy) -> bool {
        self.value_for_verification_with(policy).is_some()
    }

    /// The URL the ownership checker should fetch, if the field is verifiable
    pub fn value_for_verification(&self) -> Option<String> {
        self.value_for_verification_with(&VerificationPolicy::default())
    }

    pub fn value_for_verification_with(&self, policy: &VerificationPolicy) -> Option<String> {
        value_classifier::link_target(&self.attributes.value, self.identity.is_local(), policy)
    }

    /// Record that ownership was confirmed out of band.
    ///
    /// Does not re-check eligibility. The new timestamp is always later than
    /// any previous one, even if the clock has not moved.
    pub fn mark_verified(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let verified_at = match self.attributes.verified_at {
            Some(previous) if previous >= now => previous + TimeDelta::microseconds(1),
            _ => now,
        };

        self.attributes.verified_at = Some(verified_at);
        info!(
            "Field {:?} marked verified at {}",
            self.attributes.name,
            verified_at.to_rfc3339()
        );

        verified_at
    }

    pub fn attributes(&self) -> &FieldAttributes {
        self.attributes
    }
}
