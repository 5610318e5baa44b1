//! Questionnaire steps — the ordered questions a caller walks through.
//!
//! Presentation (one step at a time, progress bar) belongs to the caller;
//! this module only fixes the step order and what each step edits.

use crate::answers::{Field, Length, Tone};

/// How a step collects its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text
    Text,
    /// Multi-line text
    LongText,
    /// Add/remove entries of a list field
    List,
    /// One of a fixed set of values
    Choice(&'static [&'static str]),
}

/// A single questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub field: Field,
    pub label: &'static str,
    pub help: &'static str,
    pub placeholder: &'static str,
    pub kind: InputKind,
}

pub const STEPS: &[Step] = &[
    Step {
        field: Field::Objective,
        label: "Main objective",
        help: "What exactly do you want to obtain?",
        placeholder: "What exactly do you want to obtain?",
        kind: InputKind::LongText,
    },
    Step {
        field: Field::Audience,
        label: "Target audience",
        help: "Who will consume the output?",
        placeholder: "Who will consume the output?",
        kind: InputKind::LongText,
    },
    Step {
        field: Field::Context,
        label: "Essential context",
        help: "Business information, domain, restrictions, sources.",
        placeholder: "Business information, domain, restrictions, sources.",
        kind: InputKind::LongText,
    },
    Step {
        field: Field::Inputs,
        label: "Inputs/variables",
        help: "Which data will the model receive? Add them as a list.",
        placeholder: "e.g. client_id, period, csv_file",
        kind: InputKind::List,
    },
    Step {
        field: Field::Tone,
        label: "Tone and voice",
        help: "e.g. professional, casual, technical, didactic.",
        placeholder: "professional",
        kind: InputKind::Choice(Tone::NAMES),
    },
    Step {
        field: Field::Constraints,
        label: "Constraints",
        help: "Limits, prohibitions, regulatory requirements.",
        placeholder: "e.g. no sensitive data; cite sources; avoid jargon",
        kind: InputKind::List,
    },
    Step {
        field: Field::OutputFormat,
        label: "Output format",
        help: "Topics, JSON, Markdown table, etc.",
        placeholder: "e.g. topics; JSON with keys X,Y; Markdown table",
        kind: InputKind::Text,
    },
    Step {
        field: Field::Examples,
        label: "Examples of good output",
        help: "Optional: one or more examples.",
        placeholder: "Optional: one or more examples.",
        kind: InputKind::LongText,
    },
    Step {
        field: Field::Tools,
        label: "Tools/extra context",
        help: "Links, APIs, knowledge bases, documents.",
        placeholder: "e.g. API X, drive link, internal KB",
        kind: InputKind::List,
    },
    Step {
        field: Field::QualityCriteria,
        label: "Quality criteria",
        help: "How should the answer be evaluated? A clear checklist.",
        placeholder: "e.g. covers edge cases; includes examples; explains decisions",
        kind: InputKind::List,
    },
    Step {
        field: Field::Persona,
        label: "Assistant persona",
        help: "Who the model should \"be\" when answering.",
        placeholder: "e.g. senior prompt engineer, doctor, lawyer, teacher",
        kind: InputKind::Text,
    },
    Step {
        field: Field::Language,
        label: "Output language",
        help: "e.g. pt-BR, en-US, es-ES.",
        placeholder: "pt-BR",
        kind: InputKind::Text,
    },
    Step {
        field: Field::Length,
        label: "Expected length",
        help: "short | medium | long.",
        placeholder: "medium",
        kind: InputKind::Choice(Length::NAMES),
    },
    Step {
        field: Field::StyleGuides,
        label: "Style guidelines",
        help: "Forbidden words, structure, references, etc.",
        placeholder: "e.g. step by step; cite references; avoid acronyms",
        kind: InputKind::List,
    },
];

/// Number of questionnaire steps.
pub fn total() -> usize {
    STEPS.len()
}

/// The step at `index`, if any.
pub fn step(index: usize) -> Option<&'static Step> {
    STEPS.get(index)
}

/// Rounded completion percentage when standing on step `index` (0-based).
///
/// Indexes past the end report 100.
pub fn progress(index: usize) -> u8 {
    let total = total();
    let current = index.saturating_add(1).min(total);
    ((current as f64 / total as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourteen_steps_in_questionnaire_order() {
        assert_eq!(total(), 14);
        assert_eq!(STEPS[0].field, Field::Objective);
        assert_eq!(STEPS[4].field, Field::Tone);
        assert_eq!(STEPS[13].field, Field::StyleGuides);
    }

    #[test]
    fn list_steps_target_list_fields() {
        for s in STEPS {
            assert_eq!(s.kind == InputKind::List, s.field.is_list(), "{}", s.field);
        }
    }

    #[test]
    fn clarification_flag_has_no_step() {
        assert!(STEPS.iter().all(|s| s.field != Field::RequireClarifications));
    }

    #[test]
    fn progress_rounds_like_a_percentage() {
        assert_eq!(progress(0), 7);
        assert_eq!(progress(6), 50);
        assert_eq!(progress(13), 100);
        assert_eq!(progress(99), 100);
        assert_eq!(progress(usize::MAX), 100);
    }

    #[test]
    fn out_of_range_step_is_none() {
        assert!(step(14).is_none());
        assert_eq!(step(1).map(|s| s.field), Some(Field::Audience));
    }
}
