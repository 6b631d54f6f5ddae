//! Deck document assembly and the stage-3 shape contract.
//!
//! The compiler is deterministic: same content set, same document. All
//! interpolated text is escaped; the chart's rows travel as a JSON array in
//! a `data-chart-data` attribute for the runtime to parse when the slide
//! becomes active. JSON keeps labels containing colons intact.

use thiserror::Error;

use crate::model::{DeckDocument, SlideContent, SlideContentSet};

use super::nav::NavState;
use super::runtime::{deck_css, deck_js};
use super::theme::Theme;

/// Violations of the compiled-document shape contract.
#[derive(Debug, Error)]
pub enum DocumentShapeError {
    #[error("document does not start with an HTML doctype")]
    MissingDoctype,

    #[error("document carries {found} slides, expected {expected}")]
    SlideCountMismatch { expected: usize, found: usize },

    #[error("content set has a chart slide but the document has no chart container")]
    MissingChart,

    #[error("document has a chart container but the content set has no chart slide")]
    UnexpectedChart,

    #[error("document references an external resource ({tag})")]
    ExternalResource { tag: &'static str },
}

/// Compile a content set into one self-contained HTML document.
pub fn compile_deck(set: &SlideContentSet) -> DeckDocument {
    let theme = Theme::for_style(&set.style);
    let nav = NavState::new(set.slides.len().max(1));

    let mut slides_html = String::new();
    for (i, slide) in set.slides.iter().enumerate() {
        slides_html.push_str(&render_slide(slide, &theme, i == 0));
    }

    let title = set
        .slides
        .first()
        .map(|s| s.title().to_string())
        .unwrap_or_else(|| "Presentation".to_string());

    let html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{css}</style>\n\
         </head>\n<body data-theme=\"{theme_name}\">\n\n\
         <button id=\"prevButton\" class=\"nav-button\" aria-label=\"Previous slide\"{prev_state}>\u{25c0}</button>\n\
         <button id=\"nextButton\" class=\"nav-button\" aria-label=\"Next slide\"{next_state}>\u{25b6}</button>\n\n\
         <div class=\"slides-container\">\n{slides}</div>\n\n\
         <script>\n{js}</script>\n</body>\n</html>\n",
        title = escape_html(&title),
        css = deck_css(&theme),
        theme_name = theme.name,
        prev_state = disabled_attrs(nav.is_first()),
        next_state = disabled_attrs(nav.is_last()),
        slides = slides_html,
        js = deck_js(),
    );

    DeckDocument {
        html,
        slide_count: set.slides.len(),
        has_chart: set.has_chart(),
    }
}

/// Validate a compiled document against the content set it was built from.
///
/// This is the stage-3 shape contract: whatever produced the markup, the
/// pipeline refuses to hand out a document that is not a self-contained
/// deck of the expected shape.
pub fn validate_document(
    doc: &DeckDocument,
    set: &SlideContentSet,
) -> Result<(), DocumentShapeError> {
    if !doc
        .html
        .trim_start()
        .to_lowercase()
        .starts_with("<!doctype html")
    {
        return Err(DocumentShapeError::MissingDoctype);
    }

    let found = count_occurrences(&doc.html, "<div class=\"slide\">")
        + count_occurrences(&doc.html, "<div class=\"slide active\">");
    if found != set.slides.len() {
        return Err(DocumentShapeError::SlideCountMismatch {
            expected: set.slides.len(),
            found,
        });
    }

    let has_container = doc.html.contains("class=\"bar-chart\"");
    if set.has_chart() && !has_container {
        return Err(DocumentShapeError::MissingChart);
    }
    if !set.has_chart() && has_container {
        return Err(DocumentShapeError::UnexpectedChart);
    }

    // Escaped text cannot introduce a `<`, so scanning for tags is exact.
    for tag in ["<link", "<script src", "<img", "<iframe"] {
        if doc.html.contains(tag) {
            return Err(DocumentShapeError::ExternalResource { tag });
        }
    }

    Ok(())
}

/// Render one slide. Exactly the first slide of the deck is active.
fn render_slide(slide: &SlideContent, theme: &Theme, active: bool) -> String {
    let class = if active { "slide active" } else { "slide" };

    match slide {
        SlideContent::Bulleted { title, bullets } => {
            let mut items = String::new();
            for bullet in bullets {
                // The marker is literal text, not a CSS decoration.
                items.push_str(&format!(
                    "<li>{} {}</li>\n",
                    theme.marker,
                    escape_html(bullet)
                ));
            }
            format!(
                "<div class=\"{class}\">\n<h1>{}</h1>\n<ul>\n{items}</ul>\n</div>\n",
                escape_html(title)
            )
        }
        SlideContent::Chart { title, rows } => {
            // Row values are finite by construction (JSON numbers and the
            // fence parser both reject non-finite), so serialization
            // cannot fail.
            let data = serde_json::to_string(rows).unwrap_or_else(|_| String::from("[]"));
            format!(
                "<div class=\"{class}\">\n<h1>{title}</h1>\n\
                 <div class=\"bar-chart\" role=\"img\" aria-label=\"{title} bar chart\" \
                 data-chart-data=\"{data}\"></div>\n</div>\n",
                title = escape_html(title),
                data = escape_html(&data),
            )
        }
    }
}

fn disabled_attrs(disabled: bool) -> &'static str {
    if disabled {
        " disabled aria-disabled=\"true\""
    } else {
        " aria-disabled=\"false\""
    }
}

/// Escape text for use in HTML element bodies and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChartRow;

    fn text_slide(title: &str) -> SlideContent {
        SlideContent::Bulleted {
            title: title.to_string(),
            bullets: (0..5).map(|i| format!("point {i}")).collect(),
        }
    }

    fn chart_slide() -> SlideContent {
        SlideContent::Chart {
            title: "Bar Chart: Missions".to_string(),
            rows: vec![
                ChartRow::new("NASA", 150.0),
                ChartRow::new("ESA", 45.0),
                ChartRow::new("Roscosmos", 35.0),
            ],
        }
    }

    fn set(slides: Vec<SlideContent>) -> SlideContentSet {
        SlideContentSet {
            style: "vintage".to_string(),
            slides,
        }
    }

    // -- compile_deck tests --

    #[test]
    fn first_slide_is_the_only_active_one() {
        let doc = compile_deck(&set(vec![text_slide("A"), text_slide("B")]));
        assert_eq!(doc.html.matches("class=\"slide active\"").count(), 1);
        assert_eq!(doc.html.matches("<div class=\"slide\">").count(), 1);
        assert!(doc.html.find("slide active").unwrap() < doc.html.find("<h1>B</h1>").unwrap());
    }

    #[test]
    fn prev_starts_disabled_next_enabled() {
        let doc = compile_deck(&set(vec![text_slide("A"), text_slide("B")]));
        assert!(doc.html.contains(
            "id=\"prevButton\" class=\"nav-button\" aria-label=\"Previous slide\" disabled aria-disabled=\"true\""
        ));
        assert!(doc.html.contains(
            "id=\"nextButton\" class=\"nav-button\" aria-label=\"Next slide\" aria-disabled=\"false\""
        ));
    }

    #[test]
    fn single_slide_deck_disables_both_buttons() {
        let doc = compile_deck(&set(vec![text_slide("Only")]));
        assert_eq!(doc.html.matches("disabled aria-disabled=\"true\"").count(), 2);
    }

    #[test]
    fn bullets_carry_the_theme_marker() {
        let doc = compile_deck(&set(vec![text_slide("A")]));
        // Vintage theme marker.
        assert!(doc.html.contains("<li>\u{26a1} point 0</li>"));
        assert!(!doc.html.contains("::before"));
    }

    fn unescape_html(text: &str) -> String {
        text.replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    fn chart_data_attribute(html: &str) -> String {
        let start = html.find("data-chart-data=\"").unwrap() + "data-chart-data=\"".len();
        let len = html[start..].find('"').unwrap();
        unescape_html(&html[start..start + len])
    }

    #[test]
    fn chart_container_carries_rows_and_aria() {
        let doc = compile_deck(&set(vec![text_slide("A"), chart_slide()]));
        assert!(doc.has_chart);
        assert!(doc.html.contains(
            "class=\"bar-chart\" role=\"img\" aria-label=\"Bar Chart: Missions bar chart\""
        ));
        let rows: Vec<ChartRow> = serde_json::from_str(&chart_data_attribute(&doc.html)).unwrap();
        assert_eq!(
            rows,
            vec![
                ChartRow::new("NASA", 150.0),
                ChartRow::new("ESA", 45.0),
                ChartRow::new("Roscosmos", 35.0),
            ]
        );
    }

    #[test]
    fn chart_labels_with_colons_survive_the_data_attribute() {
        let slide = SlideContent::Chart {
            title: "Bar Chart: Programs".to_string(),
            rows: vec![
                ChartRow::new("Artemis: crewed", 35.0),
                ChartRow::new("Voyager", 2.0),
            ],
        };
        let doc = compile_deck(&set(vec![text_slide("A"), slide]));
        let rows: Vec<ChartRow> = serde_json::from_str(&chart_data_attribute(&doc.html)).unwrap();
        assert_eq!(rows[0].label, "Artemis: crewed");
        assert_eq!(rows[0].value, 35.0);
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let slide = SlideContent::Bulleted {
            title: "<script>alert(1)</script>".to_string(),
            bullets: vec!["a & b \"quoted\"".to_string()],
        };
        let doc = compile_deck(&set(vec![slide]));
        assert!(!doc.html.contains("<script>alert"));
        assert!(doc.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(doc.html.contains("a &amp; b &quot;quoted&quot;"));
    }

    #[test]
    fn document_is_self_contained() {
        let doc = compile_deck(&set(vec![text_slide("A"), chart_slide()]));
        assert!(doc.html.contains("<meta charset=\"UTF-8\">"));
        assert!(doc.html.contains("<style>"));
        assert!(doc.html.contains("<script>"));
        assert!(!doc.html.contains("<link"));
        assert!(!doc.html.contains("<img"));
    }

    #[test]
    fn theme_attribute_reflects_style() {
        let doc = compile_deck(&set(vec![text_slide("A")]));
        assert!(doc.html.contains("data-theme=\"vintage\""));
    }

    // -- validate_document tests --

    #[test]
    fn compiled_documents_pass_validation() {
        let s = set(vec![text_slide("A"), chart_slide()]);
        let doc = compile_deck(&s);
        validate_document(&doc, &s).expect("compiled deck should validate");
    }

    #[test]
    fn catches_missing_doctype() {
        let s = set(vec![text_slide("A")]);
        let mut doc = compile_deck(&s);
        doc.html = doc.html.replacen("<!DOCTYPE html>", "", 1);
        assert!(matches!(
            validate_document(&doc, &s),
            Err(DocumentShapeError::MissingDoctype)
        ));
    }

    #[test]
    fn catches_slide_count_mismatch() {
        let s = set(vec![text_slide("A"), text_slide("B")]);
        let doc = compile_deck(&set(vec![text_slide("A")]));
        assert!(matches!(
            validate_document(&doc, &s),
            Err(DocumentShapeError::SlideCountMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn catches_missing_chart_container() {
        let s = set(vec![text_slide("A"), chart_slide()]);
        let doc = compile_deck(&set(vec![text_slide("A"), text_slide("B")]));
        assert!(matches!(
            validate_document(&doc, &s),
            Err(DocumentShapeError::MissingChart)
        ));
    }

    #[test]
    fn catches_unexpected_chart_container() {
        let s = set(vec![text_slide("A"), text_slide("B")]);
        let doc = compile_deck(&set(vec![text_slide("A"), chart_slide()]));
        assert!(matches!(
            validate_document(&doc, &s),
            Err(DocumentShapeError::UnexpectedChart)
        ));
    }

    #[test]
    fn catches_external_resources() {
        let s = set(vec![text_slide("A")]);
        let mut doc = compile_deck(&s);
        doc.html = doc
            .html
            .replacen("<body", "<img src=\"http://x/y.png\"><body", 1);
        assert!(matches!(
            validate_document(&doc, &s),
            Err(DocumentShapeError::ExternalResource { tag: "<img" })
        ));
    }

    // -- escape_html tests --

    #[test]
    fn escapes_all_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
