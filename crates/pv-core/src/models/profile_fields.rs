use crate::{CoreError, CoreResult, Field, FieldAttributes, FieldLimits, Identity};

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// The ordered profile fields stored on an identity record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileFields {
    entries: Vec<FieldAttributes>,
}

impl ProfileFields {
    pub fn new(entries: Vec<FieldAttributes>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FieldAttributes] {
        &self.entries
    }

    pub fn field<'a, I: Identity + ?Sized>(
        &'a mut self,
        identity: &'a I,
        index: usize,
    ) -> Option<Field<'a, I>> {
        self.entries
            .get_mut(index)
            .map(|attributes| Field::new(identity, attributes))
    }

    pub fn fields<'a, I: Identity + ?Sized>(
        &'a mut self,
        identity: &'a I,
    ) -> impl Iterator<Item = Field<'a, I>> {
        self.entries
            .iter_mut()
            .map(move |attributes| Field::new(identity, attributes))
    }

    pub fn verified(&self) -> impl Iterator<Item = &FieldAttributes> {
        self.entries.iter().filter(|entry| entry.is_verified())
    }

    /// Mark the field at `index` as verified
    #[track_caller]
    pub fn mark_verified<I: Identity + ?Sized>(
        &mut self,
        identity: &I,
        index: usize,
    ) -> CoreResult<DateTime<Utc>> {
        let len = self.len();
        match self.field(identity, index) {
            Some(mut field) => Ok(field.mark_verified()),
            None => Err(CoreError::field_not_found(index, len)),
        }
    }

    /// Replace all fields from submitted name/value pairs.
    ///
    /// Pairs with a blank name are dropped. A new field keeps the
    /// verification of any previous field with the same value, so relabelling
    /// a verified link does not lose the proof. Nothing is changed when the
    /// submission breaks `limits`.
    #[track_caller]
    pub fn assign<P>(&mut self, pairs: P, limits: &FieldLimits) -> CoreResult<()>
    where
        P: IntoIterator<Item = (String, String)>,
    {
        let mut submitted: Vec<FieldAttributes> = pairs
            .into_iter()
            .filter(|(name, _)| !name.trim().is_empty())
            .map(|(name, value)| FieldAttributes::new(name, value))
            .collect();

        if submitted.len() > limits.max_fields {
            return Err(CoreError::validation(format!(
                "at most {} fields allowed, got {}",
                limits.max_fields,
                submitted.len()
            )));
        }

        for entry in &submitted {
            if entry.name.chars().count() > limits.max_name_length {
                return Err(CoreError::validation(format!(
                    "field name must not exceed {} characters",
                    limits.max_name_length
                )));
            }
            if entry.value.chars().count() > limits.max_value_length {
                return Err(CoreError::validation(format!(
                    "value of field {:?} must not exceed {} characters",
                    entry.name, limits.max_value_length
                )));
            }
        }

        let mut carried = 0;
        for entry in &mut submitted {
            let previous = self
                .entries
                .iter()
                .filter(|old| old.value == entry.value)
                .find_map(|old| old.verified_at);

            if previous.is_some() {
                entry.verified_at = previous;
                carried += 1;
            }
        }

        info!(
            "Assigned {} profile fields ({} verifications carried over)",
            submitted.len(),
            carried
        );
        self.entries = submitted;

        Ok(())
    }
}
