//! End-to-end integration tests for PromptSmith.
//!
//! These tests drive a session the way the CLI does: edit answers, render,
//! move them through a share token or a document, and persist them in a
//! session store.

use promptsmith_config::{AppConfig, StoreConfig};
use promptsmith_core::codec::{self, DocumentFormat};
use promptsmith_core::{
    AnswerSet, CodecError, Field, Length, ListField, Session, SessionStore, Tone,
};
use promptsmith_store::{FileStore, InMemoryStore, build_from_config};

fn filled_session() -> Session {
    let mut s = Session::new();
    let a = s.answers_mut();
    a.objective = "Summarize quarterly sales".into();
    a.audience = "Regional managers".into();
    a.context = "Data comes from the LATAM warehouse.".into();
    a.push(ListField::Inputs, "region");
    a.push(ListField::Inputs, "quarter");
    a.tone = Tone::Technical;
    a.push(ListField::Constraints, "No speculation");
    a.output_format = "Markdown table".into();
    a.push(ListField::QualityCriteria, "Numbers add up");
    a.persona = "a data analyst".into();
    a.language = "en-US".into();
    a.length = Length::Short;
    a.push(ListField::StyleGuides, "Plain English");
    s
}

// ── E2E: Questionnaire → Render ─────────────────────────────────────────

#[test]
fn e2e_gate_opens_after_objective() {
    let mut s = Session::new();
    assert!(!s.can_generate());

    s.answers_mut().set_field(Field::Objective, "   short  ").unwrap();
    assert!(!s.can_generate());

    s.answers_mut()
        .set_field(Field::Objective, "Write a release note")
        .unwrap();
    assert!(s.can_generate());
}

#[test]
fn e2e_full_answers_render_every_section_in_order() {
    let out = filled_session().render();

    let order = [
        "You are a data analyst. Respond in en-US with a technical tone.",
        "1) Objective\n- Summarize quarterly sales",
        "2) Target audience\n- Regional managers",
        "3) Essential context\nData comes from the LATAM warehouse.",
        "4) Expected inputs/variables\n- {{region}}\n- {{quarter}}",
        "5) Rules and constraints\n- Length: short\n- Output format: Markdown table\n- No speculation\n- Style: Plain English",
        "8) Quality criteria (checklist)\n- [ ] Numbers add up",
        "9) Before starting:",
        "When you are ready, produce the response strictly following the items above.",
    ];
    let mut cursor = 0;
    for needle in order {
        let found = out[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing or out of order: {needle}"));
        cursor += found + needle.len();
    }

    assert!(!out.contains("6) Examples"));
    assert!(!out.contains("7) Tools"));
}

#[test]
fn e2e_clarifications_can_be_turned_off() {
    let mut s = filled_session();
    s.answers_mut()
        .set_field(Field::RequireClarifications, "no")
        .unwrap();
    let out = s.render();
    assert!(!out.contains("9) Before starting:"));
    assert!(out.ends_with("When you are ready, produce the response strictly following the items above."));
}

#[test]
fn e2e_render_is_deterministic() {
    let s = filled_session();
    assert_eq!(s.render(), s.render());
    assert_eq!(s.render(), promptsmith_core::render(s.answers()));
}

// ── E2E: Share Tokens ───────────────────────────────────────────────────

#[test]
fn e2e_share_link_round_trip() {
    let source = filled_session();
    let link = codec::share_link("https://prompts.example.com/app", source.answers()).unwrap();
    assert!(link.starts_with("https://prompts.example.com/app?s="));

    let mut target = Session::new();
    target.load_token(&link).unwrap();
    assert_eq!(target.answers(), source.answers());
    assert_eq!(target.render(), source.render());
}

#[test]
fn e2e_token_is_url_safe() {
    let mut s = filled_session();
    s.answers_mut().examples = "Ação: ✓ — resposta «curta» ??? >>>".into();
    let token = s.share_token().unwrap();
    assert!(
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(codec::decode_token(&token).unwrap(), *s.answers());
}

#[test]
fn e2e_bad_token_keeps_answers() {
    let mut s = filled_session();
    let before = s.answers().clone();

    let err = s.load_token("definitely not a token!").unwrap_err();
    assert!(matches!(err, CodecError::InvalidBase64(_)));
    assert_eq!(s.answers(), &before);
}

// ── E2E: Documents ──────────────────────────────────────────────────────

#[test]
fn e2e_export_import_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = filled_session();

    for (name, format) in [
        ("answers.json", DocumentFormat::Json),
        ("answers.toml", DocumentFormat::Toml),
    ] {
        let path = dir.path().join(name);
        assert_eq!(DocumentFormat::from_path(&path), format);
        std::fs::write(&path, source.export(format).unwrap()).unwrap();

        let mut target = Session::new();
        let text = std::fs::read_to_string(&path).unwrap();
        target.import(&text, format).unwrap();
        assert_eq!(target.answers(), source.answers());
    }
}

#[test]
fn e2e_partial_import_merges_into_existing_answers() {
    let mut s = filled_session();
    let touched = s
        .import(r#"{"tone": "friendly", "tools": ["CRM API"]}"#, DocumentFormat::Json)
        .unwrap();

    assert_eq!(touched, vec![Field::Tone, Field::Tools]);
    assert_eq!(s.answers().tone, Tone::Friendly);
    assert_eq!(s.answers().tools, vec!["CRM API".to_string()]);
    assert_eq!(s.answers().objective, "Summarize quarterly sales");
    assert!(s.render().contains("7) Tools/resources\n- CRM API"));
}

#[test]
fn e2e_malformed_import_is_rejected_whole() {
    let mut s = filled_session();
    let before = s.answers().clone();

    assert!(s.import("{\"objective\": ", DocumentFormat::Json).is_err());
    assert!(s.import("[1, 2, 3]", DocumentFormat::Json).is_err());
    assert!(
        s.import(r#"{"objective": "New", "tone": "sarcastic"}"#, DocumentFormat::Json)
            .is_err()
    );
    assert_eq!(s.answers(), &before);
}

// ── E2E: Session Stores ─────────────────────────────────────────────────

#[tokio::test]
async fn e2e_file_store_resumes_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let mut s = filled_session();
    s.go_to(6);

    let store = FileStore::new(path.clone());
    assert!(store.load().await.unwrap().is_none());
    store.save(&s.snapshot()).await.unwrap();

    let reopened = FileStore::new(path.clone());
    let restored = Session::from_snapshot(reopened.load().await.unwrap().unwrap());
    assert_eq!(restored, s);

    reopened.clear().await.unwrap();
    assert!(reopened.load().await.unwrap().is_none());
}

#[tokio::test]
async fn e2e_corrupt_session_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileStore::new(path.clone());
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn e2e_store_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        store: StoreConfig {
            path: Some(dir.path().join("s.json").to_string_lossy().into_owned()),
            ..StoreConfig::default()
        },
        ..AppConfig::default()
    };

    let store = build_from_config(&config);
    assert_eq!(store.name(), "file");
    store.save(&filled_session().snapshot()).await.unwrap();
    assert!(dir.path().join("s.json").exists());
}

#[tokio::test]
async fn e2e_reset_then_persist() {
    let store = InMemoryStore::new();
    let mut s = filled_session();
    store.save(&s.snapshot()).await.unwrap();

    s.reset();
    store.save(&s.snapshot()).await.unwrap();

    let restored = Session::from_snapshot(store.load().await.unwrap().unwrap());
    assert_eq!(restored.answers(), &AnswerSet::default());
    assert_eq!(restored.step(), 0);
}
