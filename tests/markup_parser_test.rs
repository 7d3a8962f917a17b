use screenplay_bridge::error::ImportError;
use screenplay_bridge::models::{ElementKind, SourceFormat};
use screenplay_bridge::parser::markup_parser::MarkupParser;
use screenplay_bridge::parser::{detect_format, import_script, import_script_with, ImportOptions};

const SAMPLE_FDX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FinalDraft DocumentType="Script" Template="No" Version="1">
  <TitlePage>
    <Content>
      <Paragraph><Text>Title: Markup Test</Text></Paragraph>
      <Paragraph><Text>Author: Jane Doe</Text></Paragraph>
    </Content>
  </TitlePage>
  <Content>
    <Paragraph Type="Scene Heading"><Text>INT. DINER - NIGHT</Text></Paragraph>
    <Paragraph Type="Character"><Text>JOE (V.O.)</Text></Paragraph>
    <Paragraph Type="Dialogue"><Text>I need coffee.</Text></Paragraph>
    <Paragraph Type="Dialogue"><Text>Right now.</Text></Paragraph>
    <Paragraph Type="Action"><Text>She pours it.</Text></Paragraph>
    <Paragraph Type="Transition"><Text>CUT TO:</Text></Paragraph>
    <Paragraph Type="Slug Line"><Text>EXT. STREET - DAY</Text></Paragraph>
    <Paragraph><Text>Empty street.</Text></Paragraph>
  </Content>
</FinalDraft>
"#;

#[test]
fn test_markup_document() {
    let doc = MarkupParser::new().parse(SAMPLE_FDX).expect("sample must parse");

    assert_eq!(doc.source_format, SourceFormat::StructuredMarkup);
    assert_eq!(doc.title, "Markup Test");
    assert_eq!(doc.authors, vec!["Jane Doe".to_string()]);
    assert_eq!(doc.scenes.len(), 2);

    let diner = &doc.scenes[0];
    assert_eq!(diner.scene_number, 1);
    assert_eq!(diner.location, "DINER");
    assert_eq!(diner.time_of_day, "NIGHT");
    assert!(diner.interior);

    // The tag is authoritative: the cue keeps its extension in the text but
    // the stripped name flows into attribution.
    assert_eq!(diner.content[0].kind, ElementKind::Character);
    assert_eq!(diner.content[0].text, "JOE (V.O.)");
    assert_eq!(diner.content[0].character.as_deref(), Some("JOE"));

    // Tagged dialogue paragraphs stay separate, unlike the Fountain merge.
    assert_eq!(diner.content[1].kind, ElementKind::Dialogue);
    assert_eq!(diner.content[1].text, "I need coffee.");
    assert_eq!(diner.content[1].character.as_deref(), Some("JOE"));
    assert_eq!(diner.content[2].kind, ElementKind::Dialogue);
    assert_eq!(diner.content[2].text, "Right now.");
    assert_eq!(diner.content[2].character.as_deref(), Some("JOE"));

    assert_eq!(diner.content[3].kind, ElementKind::Action);
    assert_eq!(diner.content[4].kind, ElementKind::Transition);

    // Untyped paragraphs default to action.
    let street = &doc.scenes[1];
    assert_eq!(street.scene_number, 2);
    assert_eq!(street.location, "STREET");
    assert!(!street.interior);
    assert_eq!(street.content[0].kind, ElementKind::Action);

    assert_eq!(doc.characters, vec!["JOE".to_string()]);
    assert_eq!(
        doc.locations,
        vec!["DINER".to_string(), "STREET".to_string()]
    );
}

#[test]
fn test_raw_text_reconstruction() {
    let doc = MarkupParser::new().parse(SAMPLE_FDX).expect("sample must parse");

    let expected = "\
INT. DINER - NIGHT

JOE (V.O.)
I need coffee.
Right now.

She pours it.

CUT TO:

EXT. STREET - DAY

Empty street.";
    assert_eq!(doc.raw_text, expected);
}

#[test]
fn test_malformed_markup_is_fatal() {
    let result = MarkupParser::new().parse("this is not xml at all");
    match result {
        Err(ImportError::MalformedMarkup(_)) => {}
        other => panic!("expected MalformedMarkup, got {:?}", other),
    }

    // Well-formed XML without a script body is still malformed for us.
    let result = MarkupParser::new().parse("<notes><item>hi</item></notes>");
    match result {
        Err(ImportError::MalformedMarkup(_)) => {}
        other => panic!("expected MalformedMarkup, got {:?}", other),
    }
}

#[test]
fn test_format_detection() {
    assert_eq!(
        detect_format("whatever", Some("script.fountain")),
        SourceFormat::Fountain
    );
    assert_eq!(
        detect_format("whatever", Some("script.txt")),
        SourceFormat::Fountain
    );
    assert_eq!(
        detect_format("whatever", Some("script.fdx")),
        SourceFormat::StructuredMarkup
    );
    assert_eq!(detect_format(SAMPLE_FDX, None), SourceFormat::StructuredMarkup);
    assert_eq!(
        detect_format("<FinalDraft></FinalDraft>", None),
        SourceFormat::StructuredMarkup
    );
    assert_eq!(detect_format("INT. ROOM - DAY", Some("a.dat")), SourceFormat::Unknown);

    // Unrecognized inputs default to Fountain through the front door...
    let doc = import_script("INT. ROOM - DAY\n\nHi.", Some("a.dat")).unwrap();
    assert_eq!(doc.source_format, SourceFormat::Fountain);

    // ...unless the caller disables the fallback.
    let err = import_script_with(
        "INT. ROOM - DAY\n\nHi.",
        Some("a.dat"),
        ImportOptions {
            fountain_fallback: false,
        },
    );
    match err {
        Err(ImportError::UnsupportedFormat(name)) => assert_eq!(name, "a.dat"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_extracted_text_import() {
    use screenplay_bridge::parser::import_extracted_text;

    let doc = import_extracted_text("INT. ROOM - DAY\n\nHi.").unwrap();
    assert_eq!(doc.scenes.len(), 1);

    match import_extracted_text("   \n\t\n") {
        Err(ImportError::ExtractionUnavailable) => {}
        other => panic!("expected ExtractionUnavailable, got {:?}", other),
    }
}
