use crate::error::TakeoffError;
use crate::model::CandidateRecord;
use regex::Regex;
use std::sync::LazyLock;

/// Model/detail number: 2-5 capitals, optional separator, 1-4 digits.
static MODEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2,5}[-\s]?\d{1,4})\b").expect("Invalid model number pattern")
});

/// Pipe run length callout, e.g. `BE = 10'-6"`.
static RUN_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"BE\s*=\s*([\d'\- ]+[/\d"]+)"#).expect("Invalid run length pattern")
});

/// A single typed value pulled out of one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Mounting(String),
    Code(String),
    Model(String),
    RunLength(String),
    Dimensions {
        size: Option<String>,
        extra: Option<String>,
    },
}

impl Field {
    /// Store this value on the record it was extracted for.
    pub fn apply_to(self, record: &mut CandidateRecord) {
        match self {
            Field::Mounting(v) => record.mounting = Some(v),
            Field::Code(v) => record.code = Some(v),
            Field::Model(v) => record.model = Some(v),
            Field::RunLength(v) => record.run_len = Some(v),
            Field::Dimensions { size, extra } => {
                if size.is_some() {
                    record.size = size;
                }
                if extra.is_some() {
                    record.extra_dims = extra;
                }
            }
        }
    }
}

/// Recognizes one field type in a line of drawing text.
///
/// Extractors never see each other's results. A line is run through every
/// extractor and the fields are merged afterwards.
pub trait FieldExtractor: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    fn extract(&self, line: &str) -> Option<Field>;
}

/// Matches the first mounting phrase, in list order, contained in the line.
pub struct MountingExtractor {
    /// (phrase as configured, lowercased phrase)
    phrases: Vec<(String, String)>,
}

impl MountingExtractor {
    pub fn new(phrases: &[String]) -> Self {
        MountingExtractor {
            phrases: phrases
                .iter()
                .map(|p| (p.clone(), p.to_lowercase()))
                .collect(),
        }
    }
}

impl FieldExtractor for MountingExtractor {
    fn name(&self) -> &'static str {
        "mounting"
    }

    fn extract(&self, line: &str) -> Option<Field> {
        let lower = line.to_lowercase();
        self.phrases
            .iter()
            .find(|(_, needle)| lower.contains(needle.as_str()))
            .map(|(phrase, _)| Field::Mounting(phrase.clone()))
    }
}

/// Matches the leftmost whole-word equipment code.
pub struct CodeExtractor {
    pattern: Regex,
}

impl CodeExtractor {
    pub fn new<'a>(codes: impl IntoIterator<Item = &'a str>) -> Result<Self, TakeoffError> {
        let alternation: Vec<String> = codes.into_iter().map(regex::escape).collect();
        if alternation.is_empty() {
            return Err(TakeoffError::ProfileInvalid(
                "no equipment codes to match".into(),
            ));
        }
        let pattern = Regex::new(&format!(r"\b({})\b", alternation.join("|")))?;
        Ok(CodeExtractor { pattern })
    }
}

impl FieldExtractor for CodeExtractor {
    fn name(&self) -> &'static str {
        "code"
    }

    fn extract(&self, line: &str) -> Option<Field> {
        self.pattern
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| Field::Code(m.as_str().to_string()))
    }
}

/// Matches the first model/detail number and strips its separator.
pub struct ModelExtractor;

impl FieldExtractor for ModelExtractor {
    fn name(&self) -> &'static str {
        "model"
    }

    fn extract(&self, line: &str) -> Option<Field> {
        let m = MODEL_RE.captures(line)?.get(1)?;
        let model: String = m.as_str().chars().filter(|c| c.is_alphanumeric()).collect();
        Some(Field::Model(model))
    }
}

/// Matches a `BE = <length>` pipe run callout.
pub struct RunLengthExtractor;

impl FieldExtractor for RunLengthExtractor {
    fn name(&self) -> &'static str {
        "run_len"
    }

    fn extract(&self, line: &str) -> Option<Field> {
        let m = RUN_LENGTH_RE.captures(line)?.get(1)?;
        Some(Field::RunLength(m.as_str().trim().to_string()))
    }
}
