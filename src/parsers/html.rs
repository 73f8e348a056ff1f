use crate::parsers::text::normalize_whitespace;
use crate::parsers::{LinkRef, Segment};
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

/// Elements whose contents are never treated as visible text
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript"];

static BLOCK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("p, li, h1, h2, h3, h4, h5, h6, td, th").expect("block selector is valid")
});

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("link selector is valid"));

fn is_hidden(element: &ElementRef<'_>) -> bool {
    HIDDEN_TAGS.contains(&element.value().name())
}

/// True if the element sits anywhere inside a script/style/noscript block
fn inside_hidden(element: &ElementRef<'_>) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| is_hidden(&ancestor))
}

fn collect_text<'a>(element: ElementRef<'a>, out: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push(&**text),
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    if !is_hidden(&child_element) {
                        collect_text(child_element, out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Whitespace-normalized text of an element, skipping hidden blocks
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    collect_text(element, &mut pieces);
    normalize_whitespace(&pieces.join(" "))
}

/// Links strictly within an element, minus empty and fragment-only targets
fn element_links(element: ElementRef<'_>) -> Vec<LinkRef> {
    element
        .select(&LINK_SELECTOR)
        .filter(|link| !inside_hidden(link))
        .filter_map(|link| {
            let href = link.value().attr("href")?.trim();
            if href.is_empty() || href.starts_with('#') {
                return None;
            }
            Some(LinkRef::new(href, visible_text(link)))
        })
        .collect()
}

/// Splits a document into block-level segments in document order.
///
/// html5ever recovers from malformed markup on its own, so this never
/// fails; unusable fragments simply produce no segments.
pub fn extract_segments(html: &str) -> Vec<Segment> {
    let doc = Html::parse_document(html);

    let segments: Vec<Segment> = doc
        .select(&BLOCK_SELECTOR)
        .filter(|element| !inside_hidden(element))
        .filter_map(|element| {
            let text = visible_text(element);
            if text.is_empty() {
                return None;
            }
            Some(Segment::new(text, element_links(element)))
        })
        .collect();

    ::log::debug!("HTML parser found {} segments", segments.len());
    segments
}

/// Visible text of a whole page, used as evidence for link and claim checks
pub fn page_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    visible_text(doc.root_element())
}
