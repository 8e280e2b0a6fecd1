//! Integration tests for the segmentation pass.

use minuteset::{segment, LineRole};

const FULL_MINUTES: &str = "\
TOWNSHIP OF EDISON
MINUTES
A Regular Meeting of the Council was held...
1. CALL TO ORDER
The meeting was called to order at 7:00 PM.
4. DISCUSSION ITEMS
Councilmember Smith raised [REVIEW: budget concern @12:05]
On a motion, the meeting was adjourned.
_________________        _________________
Jane Doe                 John Roe
Council President         Township Clerk
";

#[test]
fn test_full_minutes_scenario() {
    let doc = segment(FULL_MINUTES);

    assert_eq!(doc.title_lines, vec!["TOWNSHIP OF EDISON", "MINUTES"]);

    // "A Regular..." boundary line is full-width body text.
    assert_eq!(doc.body[0].role, LineRole::FullWidth);

    // "1. CALL TO ORDER" bold header, followed by one indented body line.
    let header = &doc.body[1];
    assert_eq!(header.role, LineRole::SectionHeader);
    assert_eq!(header.section_number.as_deref(), Some("1."));
    assert_eq!(header.text, "CALL TO ORDER");
    assert!(header.bold);

    let call_body = &doc.body[2];
    assert_eq!(call_body.role, LineRole::SectionBody);
    assert_eq!(call_body.indent_level, 1);
    assert!(!call_body.bold);

    // "4. DISCUSSION ITEMS" enables speaker emphasis.
    let discussion = &doc.body[3];
    assert_eq!(discussion.section_number.as_deref(), Some("4."));
    let speaker = &doc.body[4];
    assert_eq!(speaker.role, LineRole::SectionBody);
    assert!(speaker.bold);
    assert!(speaker.text.starts_with("Councilmember"));

    // The motion line is full-width and un-indented.
    let motion = &doc.body[5];
    assert_eq!(motion.role, LineRole::FullWidth);
    assert_eq!(motion.indent_level, 0);

    assert_eq!(doc.signature.names(), ["Jane Doe", "John Roe"]);
    assert_eq!(
        doc.signature.titles(),
        ["Council President", "Township Clerk"]
    );
}

#[test]
fn test_marker_in_scenario_line() {
    let doc = segment(FULL_MINUTES);
    let extractor = minuteset::AnnotationExtractor::new();
    let segments = extractor.extract(&doc.body[4].text, None);

    let marker = segments
        .iter()
        .find_map(|s| match s {
            minuteset::Inline::Marker { marker, .. } => Some(marker),
            _ => None,
        })
        .expect("scenario line carries one marker");
    assert_eq!(marker.timestamp_seconds, Some(725));
    assert_eq!(marker.display_text, "[REVIEW: budget concern]");
}

#[test]
fn test_idempotence() {
    let first = segment(FULL_MINUTES);
    let second = segment(FULL_MINUTES);
    assert_eq!(first, second);
}

#[test]
fn test_document_with_no_structure_at_all() {
    let doc = segment("Just a note.\nAnother note.\n");
    assert!(doc.title_lines.is_empty());
    assert!(doc.signature.is_empty());
    assert_eq!(doc.section_count(), 0);
    assert!(doc
        .body
        .iter()
        .all(|l| l.role == LineRole::FullWidth && l.indent_level == 0));
}

#[test]
fn test_all_caps_bold_rule() {
    let doc = segment(
        "A Regular Meeting was held.\n\
         1. ITEMS\n\
         RESOLUTIONS\n\
         Resolutions and other business\n",
    );
    assert!(doc.body[2].bold);
    assert!(!doc.body[3].bold);
}

#[test]
fn test_section_state_resumes_after_full_width_exception() {
    let doc = segment(
        "A Regular Meeting was held.\n\
         2. ROLL CALL\n\
         Present were Councilmembers Smith and Jones.\n\
         Smith answered the roll.\n",
    );
    // "Present were" is a full-width exception that does not end the section.
    assert_eq!(doc.body[2].role, LineRole::FullWidth);
    assert_eq!(doc.body[3].role, LineRole::SectionBody);
}

#[test]
fn test_motion_line_ends_indentation() {
    let doc = segment(
        "A Regular Meeting was held.\n\
         3. OLD BUSINESS\n\
         Discussion of the road project.\n\
         On a motion, the item was tabled.\n\
         Correspondence was read aloud.\n",
    );
    assert_eq!(doc.body[2].indent_level, 1);
    assert_eq!(doc.body[3].indent_level, 0);
    // After the motion, plain lines are no longer indented.
    assert_eq!(doc.body[4].role, LineRole::FullWidth);
}

#[test]
fn test_blank_lines_preserved() {
    let doc = segment("A Regular Meeting was held.\n\nSecond paragraph.\n");
    assert_eq!(doc.body[1].role, LineRole::Blank);
}

#[test]
fn test_signature_only_document() {
    let doc = segment("____    ____\nJane Doe    John Roe\n");
    // The rule line is the first line, so there is no body at all.
    assert!(doc.body.is_empty());
    assert_eq!(doc.signature.names(), ["Jane Doe", "John Roe"]);
}
