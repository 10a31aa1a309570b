use docx_rs::{DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild};
use scriptmark::document::{
    classify_text, load_docx, mark_docx, mark_file, save_docx, Classification, SkipReason, Span,
};
use scriptmark::Settings;

fn text_of(run: &Run) -> String {
    run.children
        .iter()
        .filter_map(|child| match child {
            RunChild::Text(text) => Some(text.text.clone()),
            _ => None,
        })
        .collect()
}

fn runs_of(docx: &Docx, index: usize) -> Vec<Run> {
    let paragraphs: Vec<&Paragraph> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some::<&Paragraph>(para),
            _ => None,
        })
        .collect();

    paragraphs[index]
        .children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(Run::clone(run)),
            _ => None,
        })
        .collect()
}

fn is_emphasized(run: &Run) -> bool {
    run.run_property.bold.is_some() && run.run_property.color.is_some()
}

fn script() -> Docx {
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("【第一场】客厅：夜").size(28)))
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("老王：我们走吧").size(28))
                .add_run(Run::new().add_text("（停顿）然后继续").size(36)),
        )
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("旁白描述没有冒号").italic()))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("小李:好（笑）")))
}

#[test]
fn test_colon_variant_equivalence() {
    let markers = Settings::default();
    let markers = markers.markers();

    assert_eq!(
        classify_text("角色：你好（笑）", &markers),
        Classification::Dialogue {
            label: "角色：".to_string(),
            utterance: "你好（笑）".to_string(),
        }
    );
    assert_eq!(
        classify_text("角色:你好（笑）", &markers),
        Classification::Dialogue {
            label: "角色:".to_string(),
            utterance: "你好（笑）".to_string(),
        }
    );
}

#[test]
fn test_dialogue_runs_are_split_and_styled() {
    let mut docx = script();
    mark_docx(&mut docx, &Settings::default());

    let runs = runs_of(&docx, 1);
    let texts: Vec<String> = runs.iter().map(text_of).collect();
    assert_eq!(texts, vec!["老王：", "我们走吧", "（停顿）", "然后继续"]);

    assert!(!is_emphasized(&runs[0]));
    assert!(is_emphasized(&runs[1]));
    assert!(runs[2].run_property.bold.is_none());
    assert!(runs[2].run_property.color.is_none());
    assert!(is_emphasized(&runs[3]));
}

#[test]
fn test_font_size_comes_from_first_run() {
    let mut docx = script();
    mark_docx(&mut docx, &Settings::default());

    let sizes: Vec<_> = runs_of(&docx, 1)
        .iter()
        .map(|run| serde_json::to_value(&run.run_property.sz).unwrap())
        .collect();
    assert_eq!(sizes.len(), 4);
    assert!(sizes.iter().all(|size| *size == sizes[0]));
    assert_eq!(sizes[0], serde_json::to_value(&Run::new().size(28).run_property.sz).unwrap());
}

#[test]
fn test_marked_text_is_lossless() {
    let original = script();
    let mut marked = script();
    mark_docx(&mut marked, &Settings::default());

    for index in 0..4 {
        let before: String = runs_of(&original, index).iter().map(text_of).collect();
        let after: String = runs_of(&marked, index).iter().map(text_of).collect();
        assert_eq!(before, after, "paragraph {index} text changed");
    }
}

#[test]
fn test_skipped_paragraphs_keep_their_runs() {
    let mut docx = script();
    let report = mark_docx(&mut docx, &Settings::default());

    assert_eq!(report.dialogue, 2);
    assert_eq!(report.skipped_marker, 1);
    assert_eq!(report.skipped_no_colon, 1);

    // Marker paragraph has a colon but stays a single run
    let marker_runs = runs_of(&docx, 0);
    assert_eq!(marker_runs.len(), 1);
    assert!(!is_emphasized(&marker_runs[0]));

    // No-colon paragraph keeps its original styling
    let narration = runs_of(&docx, 2);
    assert_eq!(narration.len(), 1);
    assert!(narration[0].run_property.italic.is_some());
}

#[test]
fn test_ascii_colon_label_is_preserved() {
    let mut docx = script();
    mark_docx(&mut docx, &Settings::default());

    let texts: Vec<String> = runs_of(&docx, 3).iter().map(text_of).collect();
    assert_eq!(texts, vec!["小李:", "好", "（笑）"]);
}

#[test]
fn test_custom_markers_from_settings() {
    let settings = Settings {
        marker_prefixes: vec!["老王".to_string()],
        ..Settings::default()
    };
    let mut docx = script();
    let report = mark_docx(&mut docx, &settings);

    // 【 is no longer a marker, 老王 is
    assert_eq!(report.skipped_marker, 1);
    assert_eq!(runs_of(&docx, 1).len(), 2);

    let texts: Vec<String> = runs_of(&docx, 0).iter().map(text_of).collect();
    assert_eq!(texts, vec!["【第一场】客厅：", "夜"]);
}

#[test]
fn test_mark_file_writes_prefixed_copy() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene1.docx");
    save_docx(script(), &input).unwrap();

    let outcome = mark_file(&input, &Settings::default()).unwrap();

    assert_eq!(outcome.output_path, dir.path().join("标红_scene1.docx"));
    assert!(outcome.output_path.exists());
    assert_eq!(outcome.report.dialogue, 2);

    let marked = load_docx(&outcome.output_path).unwrap();
    let texts: Vec<String> = runs_of(&marked, 1).iter().map(text_of).collect();
    assert_eq!(texts, vec!["老王：", "我们走吧", "（停顿）", "然后继续"]);

    // The input itself is not modified
    let untouched = load_docx(&input).unwrap();
    assert_eq!(runs_of(&untouched, 1).len(), 2);
}

#[test]
fn test_mark_file_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scene1.docx");
    save_docx(script(), &input).unwrap();
    std::fs::write(dir.path().join("标红_scene1.docx"), b"stale").unwrap();

    let outcome = mark_file(&input, &Settings::default()).unwrap();
    assert!(load_docx(&outcome.output_path).is_ok());
}

#[test]
fn test_mark_file_rejects_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    assert!(mark_file(&dir.path().join("missing.docx"), &Settings::default()).is_err());
}

#[test]
fn test_parenthetical_isolation_spans() {
    assert_eq!(
        scriptmark::document::segment_utterance("我们走吧（停顿）然后继续"),
        vec![
            Span::Speech("我们走吧".to_string()),
            Span::Parenthetical("（停顿）".to_string()),
            Span::Speech("然后继续".to_string()),
        ]
    );
    assert_eq!(
        classify_text("旁白描述没有冒号", &["【"]),
        Classification::Skipped(SkipReason::NoColon)
    );
}
