use xmltree::{Element, XMLNode};

use crate::error::ImportError;
use crate::models::{ScriptDocument, SourceFormat};
use crate::parser::document_builder::DocumentBuilder;
use crate::parser::line_classifier::split_heading;
use crate::utils::LINE_REGEX;

/// Final-Draft-style XML front-end. Paragraph `Type` attributes are
/// authoritative, so no line heuristics apply here; malformed input is a
/// hard `MalformedMarkup` failure rather than a best-effort parse.
pub struct MarkupParser;

impl MarkupParser {
    pub fn new() -> Self {
        MarkupParser
    }

    pub fn parse(&self, input: &str) -> Result<ScriptDocument, ImportError> {
        let root = Element::parse(input.as_bytes())
            .map_err(|e| ImportError::MalformedMarkup(e.to_string()))?;

        let content = root
            .get_child("Content")
            .ok_or_else(|| ImportError::MalformedMarkup("missing Content element".to_string()))?;

        let mut builder = DocumentBuilder::new(SourceFormat::StructuredMarkup);

        if let Some(title_page) = root.get_child("TitlePage") {
            self.scan_title_page(title_page, &mut builder);
        }

        for node in &content.children {
            let paragraph = match node {
                XMLNode::Element(el) if el.name == "Paragraph" => el,
                _ => continue,
            };
            let text = paragraph_text(paragraph);
            if text.is_empty() {
                continue;
            }
            let kind = paragraph
                .attributes
                .get("Type")
                .map(|t| t.to_lowercase())
                .unwrap_or_default();
            match kind.as_str() {
                "scene heading" | "slug line" => {
                    builder.open_scene(&text, split_heading(&text));
                }
                "character" => {
                    let name = LINE_REGEX["cue_extension"].replace(&text, "");
                    builder.push_character(&text, name.trim());
                }
                // Each tagged dialogue paragraph is already one unit, so
                // adjacent paragraphs are never merged.
                "dialogue" => builder.push_dialogue(&text, false),
                "parenthetical" => builder.push_parenthetical(&text),
                "transition" => builder.push_transition(&text),
                _ => builder.push_action(&text),
            }
        }

        let mut doc = builder.finish();
        doc.raw_text = doc.reconstruct_text();
        Ok(doc)
    }

    /// The title page block reuses the `Title:` / `Author:` field convention;
    /// a block with no recognized field falls back to its first non-empty
    /// paragraph as the title.
    fn scan_title_page(&self, title_page: &Element, builder: &mut DocumentBuilder) {
        let content = title_page.get_child("Content").unwrap_or(title_page);
        let mut explicit_title = false;
        let mut fallback: Option<String> = None;

        for node in &content.children {
            let paragraph = match node {
                XMLNode::Element(el) if el.name == "Paragraph" => el,
                _ => continue,
            };
            let text = paragraph_text(paragraph);
            if text.is_empty() {
                continue;
            }
            if let Some(caps) = LINE_REGEX["title_field"].captures(&text) {
                let value = caps.get(2).map_or("", |m| m.as_str());
                if caps[1].to_lowercase() == "title" {
                    builder.set_title(value);
                    explicit_title = true;
                } else {
                    builder.add_author(value);
                }
            } else if fallback.is_none() {
                fallback = Some(text);
            }
        }

        if !explicit_title {
            if let Some(title) = fallback {
                builder.set_title(&title);
            }
        }
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenates a paragraph's direct text with the text of its `<Text>`
/// children (Final Draft splits styled runs across several of them).
fn paragraph_text(paragraph: &Element) -> String {
    let mut out = String::new();
    for node in &paragraph.children {
        match node {
            XMLNode::Text(t) => out.push_str(t),
            XMLNode::Element(el) if el.name == "Text" => {
                if let Some(t) = el.get_text() {
                    out.push_str(&t);
                }
            }
            _ => {}
        }
    }
    out.trim().to_string()
}
