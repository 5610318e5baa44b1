//! Template renderer — turns an answer set into the final prompt text.
//!
//! The document is an ordered list of sections, each conditionally included,
//! joined by a single blank line:
//!
//! 1. **Preamble** (persona, language, tone) — always
//! 2. `1) Objective` — always
//! 3. `2) Target audience` — when audience is set
//! 4. `3) Essential context` — when context is set (verbatim, no bullet)
//! 5. `4) Expected inputs/variables` — when inputs exist, as `{{name}}`
//! 6. `5) Rules and constraints` — length, format, constraints, style guides
//! 7. `6) Examples of a good response` — when examples are set
//! 8. `7) Tools/resources` — when tools exist
//! 9. `8) Quality criteria (checklist)` — when criteria exist
//! 10. `9) Before starting:` — when clarifications are required
//! 11. **Closing** instruction — always
//!
//! Header numbers are fixed literals: omitting a section never renumbers the
//! ones after it. Downstream consumers rely on the exact header text.
//!
//! Rendering is pure and total. It never consults the objective length gate
//! and holds no cache, so every call reflects exactly the snapshot passed.

use crate::answers::AnswerSet;

pub const OBJECTIVE_HEADER: &str = "1) Objective";
pub const AUDIENCE_HEADER: &str = "2) Target audience";
pub const CONTEXT_HEADER: &str = "3) Essential context";
pub const INPUTS_HEADER: &str = "4) Expected inputs/variables";
pub const RULES_HEADER: &str = "5) Rules and constraints";
pub const EXAMPLES_HEADER: &str = "6) Examples of a good response";
pub const TOOLS_HEADER: &str = "7) Tools/resources";
pub const CRITERIA_HEADER: &str = "8) Quality criteria (checklist)";
pub const CLARIFICATIONS_HEADER: &str = "9) Before starting:";

pub const GUIDELINES_LINE: &str = "Strictly follow the guidelines below.";
pub const INPUTS_TRAILER: &str = "Fill in every variable before requesting the answer.";
pub const ASK_WHEN_AMBIGUOUS: &str =
    "- If anything is ambiguous, ask the necessary clarifying questions BEFORE producing the response.";
pub const ASK_FOR_MISSING_VARIABLES: &str =
    "- If any variable in {{braces}} is missing, ask the user for it.";
pub const CLOSING_LINE: &str =
    "When you are ready, produce the response strictly following the items above.";

/// Which part of the document a section is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Preamble,
    Objective,
    Audience,
    Context,
    Inputs,
    Rules,
    Examples,
    Tools,
    QualityCriteria,
    Clarifications,
    Closing,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preamble => "preamble",
            Self::Objective => "objective",
            Self::Audience => "audience",
            Self::Context => "context",
            Self::Inputs => "inputs",
            Self::Rules => "rules",
            Self::Examples => "examples",
            Self::Tools => "tools",
            Self::QualityCriteria => "quality_criteria",
            Self::Clarifications => "clarifications",
            Self::Closing => "closing",
        }
    }
}

/// One rendered block of the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

impl Section {
    fn new(kind: SectionKind, lines: Vec<String>) -> Self {
        Self { kind, lines }
    }

    /// A header line followed by the given body lines.
    fn headed(kind: SectionKind, header: &str, body: impl IntoIterator<Item = String>) -> Self {
        let mut lines = vec![header.to_string()];
        lines.extend(body);
        Self { kind, lines }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn bullet(text: &str) -> String {
    format!("- {text}")
}

fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// The rule entries of section 5, in output order.
pub fn rules(answers: &AnswerSet) -> Vec<String> {
    let mut rules = Vec::with_capacity(
        2 + answers.constraints.len() + answers.style_guides.len(),
    );
    rules.push(format!("Length: {}", answers.length));
    if !answers.output_format.is_empty() {
        rules.push(format!("Output format: {}", answers.output_format));
    }
    rules.extend(answers.constraints.iter().cloned());
    rules.extend(answers.style_guides.iter().map(|s| format!("Style: {s}")));
    rules
}

/// Build the ordered list of sections present for `answers`.
pub fn sections(answers: &AnswerSet) -> Vec<Section> {
    let mut out = Vec::with_capacity(11);

    out.push(Section::new(
        SectionKind::Preamble,
        vec![
            format!(
                "You are {}. Respond in {} with a {} tone.",
                answers.persona, answers.language, answers.tone
            ),
            GUIDELINES_LINE.to_string(),
        ],
    ));

    out.push(Section::headed(
        SectionKind::Objective,
        OBJECTIVE_HEADER,
        [bullet(&answers.objective)],
    ));

    if !answers.audience.is_empty() {
        out.push(Section::headed(
            SectionKind::Audience,
            AUDIENCE_HEADER,
            [bullet(&answers.audience)],
        ));
    }

    if !answers.context.is_empty() {
        out.push(Section::headed(
            SectionKind::Context,
            CONTEXT_HEADER,
            [answers.context.clone()],
        ));
    }

    if !answers.inputs.is_empty() {
        let body = answers
            .inputs
            .iter()
            .map(|name| bullet(&placeholder(name)))
            .chain(std::iter::once(INPUTS_TRAILER.to_string()));
        out.push(Section::headed(SectionKind::Inputs, INPUTS_HEADER, body));
    }

    let rules = rules(answers);
    if !rules.is_empty() {
        out.push(Section::headed(
            SectionKind::Rules,
            RULES_HEADER,
            rules.iter().map(|r| bullet(r)),
        ));
    }

    if !answers.examples.is_empty() {
        out.push(Section::headed(
            SectionKind::Examples,
            EXAMPLES_HEADER,
            [answers.examples.clone()],
        ));
    }

    if !answers.tools.is_empty() {
        out.push(Section::headed(
            SectionKind::Tools,
            TOOLS_HEADER,
            answers.tools.iter().map(|t| bullet(t)),
        ));
    }

    if !answers.quality_criteria.is_empty() {
        out.push(Section::headed(
            SectionKind::QualityCriteria,
            CRITERIA_HEADER,
            answers.quality_criteria.iter().map(|c| format!("- [ ] {c}")),
        ));
    }

    if answers.require_clarifications {
        out.push(Section::headed(
            SectionKind::Clarifications,
            CLARIFICATIONS_HEADER,
            [
                ASK_WHEN_AMBIGUOUS.to_string(),
                ASK_FOR_MISSING_VARIABLES.to_string(),
            ],
        ));
    }

    out.push(Section::new(
        SectionKind::Closing,
        vec![CLOSING_LINE.to_string()],
    ));

    out
}

/// Render the full prompt document.
pub fn render(answers: &AnswerSet) -> String {
    let sections = sections(answers);
    tracing::debug!(sections = sections.len(), "Rendered prompt");
    sections
        .iter()
        .map(Section::text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{Length, ListField, Tone};

    fn kinds(a: &AnswerSet) -> Vec<SectionKind> {
        sections(a).into_iter().map(|s| s.kind).collect()
    }

    #[test]
    fn default_scenario_renders_exact_document() {
        let mut a = AnswerSet::default();
        a.objective = "Write a summary".into();

        let expected = "\
You are senior specialist in the requested field. Respond in pt-BR with a professional tone.
Strictly follow the guidelines below.

1) Objective
- Write a summary

5) Rules and constraints
- Length: medium
- Output format: structured topic response

9) Before starting:
- If anything is ambiguous, ask the necessary clarifying questions BEFORE producing the response.
- If any variable in {{braces}} is missing, ask the user for it.

When you are ready, produce the response strictly following the items above.";

        assert_eq!(render(&a), expected);
    }

    #[test]
    fn default_scenario_omits_optional_sections() {
        let mut a = AnswerSet::default();
        a.objective = "Write a summary".into();
        assert_eq!(
            kinds(&a),
            vec![
                SectionKind::Preamble,
                SectionKind::Objective,
                SectionKind::Rules,
                SectionKind::Clarifications,
                SectionKind::Closing,
            ]
        );
    }

    #[test]
    fn inputs_render_as_placeholders_with_trailer() {
        let mut a = AnswerSet::default();
        a.push(ListField::Inputs, "client_id");
        a.push(ListField::Inputs, "period");

        let out = render(&a);
        assert!(out.contains(
            "4) Expected inputs/variables\n- {{client_id}}\n- {{period}}\nFill in every variable before requesting the answer."
        ));
    }

    #[test]
    fn headers_are_not_renumbered_when_sections_are_missing() {
        let mut a = AnswerSet::default();
        a.context = "Quarterly sales data for LATAM".into();
        let out = render(&a);
        assert!(!out.contains(AUDIENCE_HEADER));
        assert!(out.contains("3) Essential context\nQuarterly sales data for LATAM"));
        assert!(!out.contains("2) Essential context"));
    }

    #[test]
    fn rules_combine_length_format_constraints_and_styles_in_order() {
        let mut a = AnswerSet::default();
        a.length = Length::Short;
        a.output_format = "Markdown table".into();
        a.push(ListField::Constraints, "cite sources");
        a.push(ListField::Constraints, "no sensitive data");
        a.push(ListField::StyleGuides, "step by step");

        assert_eq!(
            rules(&a),
            vec![
                "Length: short",
                "Output format: Markdown table",
                "cite sources",
                "no sensitive data",
                "Style: step by step",
            ]
        );
    }

    #[test]
    fn empty_output_format_drops_only_that_rule() {
        let mut a = AnswerSet::default();
        a.output_format.clear();
        assert_eq!(rules(&a), vec!["Length: medium"]);
        assert!(render(&a).contains("5) Rules and constraints\n- Length: medium\n\n"));
    }

    #[test]
    fn every_optional_section_in_fixed_order() {
        let mut a = AnswerSet::default();
        a.objective = "Design an onboarding email".into();
        a.audience = "new customers".into();
        a.context = "SaaS product".into();
        a.examples = "Subject: Welcome!".into();
        a.tone = Tone::Friendly;
        a.push(ListField::Inputs, "first_name");
        a.push(ListField::Tools, "brand guide");
        a.push(ListField::QualityCriteria, "under 150 words");

        assert_eq!(
            kinds(&a),
            vec![
                SectionKind::Preamble,
                SectionKind::Objective,
                SectionKind::Audience,
                SectionKind::Context,
                SectionKind::Inputs,
                SectionKind::Rules,
                SectionKind::Examples,
                SectionKind::Tools,
                SectionKind::QualityCriteria,
                SectionKind::Clarifications,
                SectionKind::Closing,
            ]
        );

        let out = render(&a);
        assert!(out.contains("with a friendly tone."));
        assert!(out.contains("2) Target audience\n- new customers"));
        assert!(out.contains("6) Examples of a good response\nSubject: Welcome!"));
        assert!(out.contains("7) Tools/resources\n- brand guide"));
        assert!(out.contains("8) Quality criteria (checklist)\n- [ ] under 150 words"));
    }

    #[test]
    fn clarifications_can_be_disabled() {
        let mut a = AnswerSet::default();
        a.require_clarifications = false;
        assert!(!render(&a).contains(CLARIFICATIONS_HEADER));
    }

    #[test]
    fn empty_record_still_renders_preamble_and_closing() {
        let mut a = AnswerSet::default();
        a.persona.clear();
        a.language.clear();
        let out = render(&a);
        assert!(out.starts_with("You are . Respond in  with a professional tone.\n"));
        assert!(out.contains("1) Objective\n- "));
        assert!(out.ends_with(CLOSING_LINE));
    }

    #[test]
    fn render_is_pure_and_tracks_each_snapshot() {
        let mut a = AnswerSet::default();
        a.objective = "Explain ownership".into();
        let first = render(&a);
        assert_eq!(first, render(&a));

        let mut b = a.clone();
        b.audience = "Rust beginners".into();
        assert_ne!(render(&b), first);
        assert_eq!(render(&a), first);
    }
}
