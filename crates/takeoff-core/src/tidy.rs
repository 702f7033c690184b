use crate::model::CandidateRecord;
use crate::profile::schema::ProfileDef;

/// Result of the tidy pass.
#[derive(Debug, Clone, Default)]
pub struct TidyOutcome {
    pub records: Vec<CandidateRecord>,
    /// Bare weak-code mentions that were removed.
    pub dropped: usize,
    /// Records whose code had no description in the profile.
    pub unknown_codes: usize,
}

/// Removes noise records and attaches descriptions.
pub struct Tidier<'a> {
    profile: &'a ProfileDef,
}

impl<'a> Tidier<'a> {
    pub fn new(profile: &'a ProfileDef) -> Self {
        Tidier { profile }
    }

    pub fn tidy(&self, records: Vec<CandidateRecord>) -> TidyOutcome {
        let mut outcome = TidyOutcome::default();

        for mut record in records {
            if self.is_bare_weak_mention(&record) {
                outcome.dropped += 1;
                continue;
            }

            if let Some(code) = record.code.as_deref() {
                let description = match self.profile.description_for(code) {
                    Some(d) => d.to_string(),
                    None => {
                        tracing::warn!(
                            code,
                            page = record.page,
                            "Equipment code has no description, using the code itself"
                        );
                        outcome.unknown_codes += 1;
                        code.to_string()
                    }
                };
                record.description = Some(description);
            }

            outcome.records.push(record);
        }

        outcome
    }

    /// A weak code with nothing but the page beside it.
    fn is_bare_weak_mention(&self, record: &CandidateRecord) -> bool {
        match record.code.as_deref() {
            Some(code) => self.profile.is_weak(code) && record.field_count() == 2,
            None => false,
        }
    }
}
