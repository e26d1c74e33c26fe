use lexi_core::markup::{Document, NodeId};
use scraper::{ElementRef, Html, Node};

/// Parse an HTML page into the pipeline's markup tree.
///
/// Comments, doctypes and processing instructions are dropped; elements keep
/// their attributes and text nodes their raw content.
pub fn parse_document(html: &str) -> Document {
    let parsed = Html::parse_document(html);
    let mut doc = Document::new();
    let root = doc.root_id();
    copy_element(parsed.root_element(), root, &mut doc);
    doc
}

fn copy_element(element: ElementRef<'_>, parent: NodeId, doc: &mut Document) {
    let value = element.value();
    let attrs: Vec<(&str, &str)> = value.attrs().collect();
    let id = doc.append_element(parent, value.name(), &attrs);

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                doc.append_text(id, text);
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    copy_element(child, id, doc);
                }
            }
            _ => {}
        }
    }
}
