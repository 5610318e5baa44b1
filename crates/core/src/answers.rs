//! Answer set — the structured record of every questionnaire response.
//!
//! The record is always fully populated: `Default` supplies every field and
//! deserialization fills missing keys from the same defaults. Callers mutate
//! it through discrete operations (field set, list append, list remove by
//! index) and `reset()` discards it entirely.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Minimum objective length (in characters, after trimming) before a caller
/// should offer prompt generation. The renderer itself never checks this.
pub const MIN_OBJECTIVE_CHARS: usize = 8;

pub const DEFAULT_OUTPUT_FORMAT: &str = "structured topic response";
pub const DEFAULT_PERSONA: &str = "senior specialist in the requested field";
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// Voice the model should answer with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Didactic,
    Casual,
    Technical,
    Formal,
    Friendly,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Didactic,
        Tone::Casual,
        Tone::Technical,
        Tone::Formal,
        Tone::Friendly,
    ];

    pub const NAMES: &'static [&'static str] = &[
        "professional",
        "didactic",
        "casual",
        "technical",
        "formal",
        "friendly",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Didactic => "didactic",
            Self::Casual => "casual",
            Self::Technical => "technical",
            Self::Formal => "formal",
            Self::Friendly => "friendly",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| Error::InvalidField {
                field: Field::Tone.to_string(),
                reason: format!("expected one of {}, got '{s}'", Self::NAMES.join(", ")),
            })
    }
}

/// Expected size of the response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub const ALL: [Length; 3] = [Length::Short, Length::Medium, Length::Long];

    pub const NAMES: &'static [&'static str] = &["short", "medium", "long"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Length {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| Error::InvalidField {
                field: Field::Length.to_string(),
                reason: format!("expected one of {}, got '{s}'", Self::NAMES.join(", ")),
            })
    }
}

/// Every addressable field of the answer set.
///
/// `Display` yields the serialized (camelCase) name; `FromStr` also accepts
/// snake_case and kebab-case spellings, case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Objective,
    Audience,
    Context,
    Inputs,
    Tone,
    Constraints,
    OutputFormat,
    Examples,
    Tools,
    QualityCriteria,
    Persona,
    Language,
    Length,
    StyleGuides,
    RequireClarifications,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::Objective,
        Field::Audience,
        Field::Context,
        Field::Inputs,
        Field::Tone,
        Field::Constraints,
        Field::OutputFormat,
        Field::Examples,
        Field::Tools,
        Field::QualityCriteria,
        Field::Persona,
        Field::Language,
        Field::Length,
        Field::StyleGuides,
        Field::RequireClarifications,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Objective => "objective",
            Self::Audience => "audience",
            Self::Context => "context",
            Self::Inputs => "inputs",
            Self::Tone => "tone",
            Self::Constraints => "constraints",
            Self::OutputFormat => "outputFormat",
            Self::Examples => "examples",
            Self::Tools => "tools",
            Self::QualityCriteria => "qualityCriteria",
            Self::Persona => "persona",
            Self::Language => "language",
            Self::Length => "length",
            Self::StyleGuides => "styleGuides",
            Self::RequireClarifications => "requireClarifications",
        }
    }

    /// The list-valued view of this field, if it is one.
    pub fn as_list(&self) -> Option<ListField> {
        match self {
            Self::Inputs => Some(ListField::Inputs),
            Self::Constraints => Some(ListField::Constraints),
            Self::Tools => Some(ListField::Tools),
            Self::QualityCriteria => Some(ListField::QualityCriteria),
            Self::StyleGuides => Some(ListField::StyleGuides),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        self.as_list().is_some()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == normalized)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// The ordered, duplicate-tolerant sequence fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Inputs,
    Constraints,
    Tools,
    QualityCriteria,
    StyleGuides,
}

impl ListField {
    pub fn field(&self) -> Field {
        match self {
            Self::Inputs => Field::Inputs,
            Self::Constraints => Field::Constraints,
            Self::Tools => Field::Tools,
            Self::QualityCriteria => Field::QualityCriteria,
            Self::StyleGuides => Field::StyleGuides,
        }
    }
}

impl fmt::Display for ListField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.field(), f)
    }
}

impl FromStr for ListField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let field: Field = s.parse()?;
        field.as_list().ok_or_else(|| Error::InvalidField {
            field: field.to_string(),
            reason: "not a list field".into(),
        })
    }
}

/// The full set of questionnaire answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerSet {
    /// What the prompt should achieve (gates generation, see [`MIN_OBJECTIVE_CHARS`])
    pub objective: String,

    /// Who consumes the output
    pub audience: String,

    /// Business/domain context, rendered verbatim
    pub context: String,

    /// Placeholder variable names, rendered as `{{name}}`
    pub inputs: Vec<String>,

    pub tone: Tone,

    pub constraints: Vec<String>,

    /// Free-text output format (topics, JSON, Markdown table...)
    pub output_format: String,

    /// Examples of a good response, rendered verbatim
    pub examples: String,

    /// Links, APIs, knowledge bases
    pub tools: Vec<String>,

    /// Rendered as a checklist
    pub quality_criteria: Vec<String>,

    pub persona: String,

    /// Output locale tag, free text
    pub language: String,

    pub length: Length,

    pub style_guides: Vec<String>,

    /// Whether the prompt asks the model to clarify before answering
    pub require_clarifications: bool,
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self {
            objective: String::new(),
            audience: String::new(),
            context: String::new(),
            inputs: vec![],
            tone: Tone::default(),
            constraints: vec![],
            output_format: DEFAULT_OUTPUT_FORMAT.into(),
            examples: String::new(),
            tools: vec![],
            quality_criteria: vec![],
            persona: DEFAULT_PERSONA.into(),
            language: DEFAULT_LANGUAGE.into(),
            length: Length::default(),
            style_guides: vec![],
            require_clarifications: true,
        }
    }
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its documented default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the objective is long enough for a caller to offer generation.
    pub fn can_generate(&self) -> bool {
        self.objective.trim().chars().count() >= MIN_OBJECTIVE_CHARS
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Inputs => &self.inputs,
            ListField::Constraints => &self.constraints,
            ListField::Tools => &self.tools,
            ListField::QualityCriteria => &self.quality_criteria,
            ListField::StyleGuides => &self.style_guides,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Inputs => &mut self.inputs,
            ListField::Constraints => &mut self.constraints,
            ListField::Tools => &mut self.tools,
            ListField::QualityCriteria => &mut self.quality_criteria,
            ListField::StyleGuides => &mut self.style_guides,
        }
    }

    /// Append an entry to a list field. Duplicates are kept.
    pub fn push(&mut self, field: ListField, value: impl Into<String>) {
        self.list_mut(field).push(value.into());
    }

    /// Remove the entry at `index`. Out-of-range indexes are ignored.
    pub fn remove(&mut self, field: ListField, index: usize) -> Option<String> {
        let list = self.list_mut(field);
        (index < list.len()).then(|| list.remove(index))
    }

    /// Set a scalar field from its textual form.
    ///
    /// Enum fields parse from their lowercase names, `requireClarifications`
    /// accepts `true/false/yes/no/on/off/1/0`. List fields are rejected; use
    /// [`AnswerSet::push`] instead.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Objective => self.objective = value.into(),
            Field::Audience => self.audience = value.into(),
            Field::Context => self.context = value.into(),
            Field::OutputFormat => self.output_format = value.into(),
            Field::Examples => self.examples = value.into(),
            Field::Persona => self.persona = value.into(),
            Field::Language => self.language = value.into(),
            Field::Tone => self.tone = value.parse()?,
            Field::Length => self.length = value.parse()?,
            Field::RequireClarifications => {
                self.require_clarifications = parse_flag(value).ok_or_else(|| {
                    Error::InvalidField {
                        field: field.to_string(),
                        reason: format!("expected true or false, got '{value}'"),
                    }
                })?;
            }
            Field::Inputs
            | Field::Constraints
            | Field::Tools
            | Field::QualityCriteria
            | Field::StyleGuides => {
                return Err(Error::InvalidField {
                    field: field.to_string(),
                    reason: "list fields are edited with add/remove".into(),
                });
            }
        }
        Ok(())
    }

    /// Human-readable value of any field (lists joined with `, `).
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Objective => self.objective.clone(),
            Field::Audience => self.audience.clone(),
            Field::Context => self.context.clone(),
            Field::OutputFormat => self.output_format.clone(),
            Field::Examples => self.examples.clone(),
            Field::Persona => self.persona.clone(),
            Field::Language => self.language.clone(),
            Field::Tone => self.tone.to_string(),
            Field::Length => self.length.to_string(),
            Field::RequireClarifications => self.require_clarifications.to_string(),
            Field::Inputs
            | Field::Constraints
            | Field::Tools
            | Field::QualityCriteria
            | Field::StyleGuides => match field.as_list() {
                Some(list) => self.list(list).join(", "),
                None => String::new(),
            },
        }
    }

    /// Overwrite every field present in `patch`, leaving the rest untouched.
    ///
    /// Returns the fields that were overwritten, in declaration order.
    pub fn merge(&mut self, patch: AnswerPatch) -> Vec<Field> {
        let mut touched = Vec::new();

        if let Some(value) = patch.objective {
            self.objective = value;
            touched.push(Field::Objective);
        }
        if let Some(value) = patch.audience {
            self.audience = value;
            touched.push(Field::Audience);
        }
        if let Some(value) = patch.context {
            self.context = value;
            touched.push(Field::Context);
        }
        if let Some(value) = patch.inputs {
            self.inputs = value;
            touched.push(Field::Inputs);
        }
        if let Some(value) = patch.tone {
            self.tone = value;
            touched.push(Field::Tone);
        }
        if let Some(value) = patch.constraints {
            self.constraints = value;
            touched.push(Field::Constraints);
        }
        if let Some(value) = patch.output_format {
            self.output_format = value;
            touched.push(Field::OutputFormat);
        }
        if let Some(value) = patch.examples {
            self.examples = value;
            touched.push(Field::Examples);
        }
        if let Some(value) = patch.tools {
            self.tools = value;
            touched.push(Field::Tools);
        }
        if let Some(value) = patch.quality_criteria {
            self.quality_criteria = value;
            touched.push(Field::QualityCriteria);
        }
        if let Some(value) = patch.persona {
            self.persona = value;
            touched.push(Field::Persona);
        }
        if let Some(value) = patch.language {
            self.language = value;
            touched.push(Field::Language);
        }
        if let Some(value) = patch.length {
            self.length = value;
            touched.push(Field::Length);
        }
        if let Some(value) = patch.style_guides {
            self.style_guides = value;
            touched.push(Field::StyleGuides);
        }
        if let Some(value) = patch.require_clarifications {
            self.require_clarifications = value;
            touched.push(Field::RequireClarifications);
        }

        tracing::debug!(fields = touched.len(), "Merged answer patch");
        touched
    }
}

/// Accept the usual spellings of a boolean flag.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// A partial answer set, as read from an imported document.
///
/// Absent (or `null`) keys stay `None` and leave the target untouched on
/// [`AnswerSet::merge`]. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_criteria: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_guides: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_clarifications: Option<bool>,
}

impl From<AnswerSet> for AnswerPatch {
    fn from(a: AnswerSet) -> Self {
        Self {
            objective: Some(a.objective),
            audience: Some(a.audience),
            context: Some(a.context),
            inputs: Some(a.inputs),
            tone: Some(a.tone),
            constraints: Some(a.constraints),
            output_format: Some(a.output_format),
            examples: Some(a.examples),
            tools: Some(a.tools),
            quality_criteria: Some(a.quality_criteria),
            persona: Some(a.persona),
            language: Some(a.language),
            length: Some(a.length),
            style_guides: Some(a.style_guides),
            require_clarifications: Some(a.require_clarifications),
        }
    }
}
