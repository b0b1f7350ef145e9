//! Headless in-memory page.
//!
//! Holds a whole document as a [`dom::Element`](crate::dom::Element) tree
//! rooted at `<html>`. Existing pages are read with `scraper`, so the same
//! mount sequence used in the browser can run over saved HTML files and in
//! tests.

use scraper::{ElementRef, Html};

use super::Page;
use crate::dom::{Element, Node};

/// Child-index path from the `<html>` root to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath(Vec<usize>);

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryPage {
    root: Element,
}

impl MemoryPage {
    /// An empty document with `<head>` and `<body>`
    pub fn new() -> Self {
        Self {
            root: Element::new("html")
                .with_child(Element::new("head"))
                .with_child(Element::new("body")),
        }
    }

    /// Parse an HTML document. Parsing is lenient; missing `<head>` or
    /// `<body>` elements are synthesized.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        Self {
            root: convert(document.root_element()),
        }
    }

    /// The `<html>` element
    pub fn document(&self) -> &Element {
        &self.root
    }

    pub fn head(&self) -> Option<&Element> {
        self.root.child_elements().find(|e| e.tag() == "head")
    }

    pub fn body_element(&self) -> Option<&Element> {
        self.root.child_elements().find(|e| e.tag() == "body")
    }

    /// Serialize the document, doctype included
    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>{}", self.root.outer_html())
    }

    fn element_mut(&mut self, path: &NodePath) -> Option<&mut Element> {
        let mut current = &mut self.root;
        for &index in &path.0 {
            current = match current.children_mut().get_mut(index) {
                Some(Node::Element(e)) => e,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Path to the direct `<html>` child named `tag`, creating it if absent
    fn top_level(&mut self, tag: &str) -> NodePath {
        let existing = self
            .root
            .children()
            .iter()
            .position(|n| matches!(n, Node::Element(e) if e.tag() == tag));
        let index = existing.unwrap_or_else(|| {
            self.root.push(Node::Element(Element::new(tag)));
            self.root.children().len() - 1
        });
        NodePath(vec![index])
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for MemoryPage {
    type Handle = NodePath;

    fn find_footer(&self) -> Option<NodePath> {
        find_path(&self.root, &mut Vec::new(), &|e| e.tag() == "footer").map(NodePath)
    }

    fn body(&mut self) -> Option<NodePath> {
        Some(self.top_level("body"))
    }

    fn clear_children(&mut self, target: &NodePath) {
        match self.element_mut(target) {
            Some(el) => el.clear_children(),
            None => log::warn!("clear_children: no element at {:?}", target),
        }
    }

    fn set_style(&mut self, target: &NodePath, property: &str, value: &str) {
        match self.element_mut(target) {
            Some(el) => el.set_style(property, value),
            None => log::warn!("set_style: no element at {:?}", target),
        }
    }

    fn append(&mut self, parent: &NodePath, element: &Element) -> Option<NodePath> {
        let Some(el) = self.element_mut(parent) else {
            log::warn!("append: no element at {:?}", parent);
            return None;
        };
        el.push(Node::Element(element.clone()));
        let mut path = parent.0.clone();
        path.push(el.children().len() - 1);
        Some(NodePath(path))
    }

    fn has_element_with_id(&self, id: &str) -> bool {
        self.root.find_by_id(id).is_some()
    }

    fn has_stylesheet(&self, href_fragment: &str) -> bool {
        self.root
            .find(&|e| {
                e.tag() == "link"
                    && e.attr("href")
                        .map(|href| href.contains(href_fragment))
                        .unwrap_or(false)
            })
            .is_some()
    }

    fn append_stylesheet(&mut self, href: &str) {
        let head = self.top_level("head");
        let link = Element::new("link")
            .with_attr("rel", "stylesheet")
            .with_attr("href", href);
        self.append(&head, &link);
    }
}

fn find_path(
    el: &Element,
    prefix: &mut Vec<usize>,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<Vec<usize>> {
    for (index, child) in el.children().iter().enumerate() {
        if let Node::Element(child) = child {
            prefix.push(index);
            if pred(child) {
                return Some(prefix.clone());
            }
            if let Some(found) = find_path(child, prefix, pred) {
                return Some(found);
            }
            prefix.pop();
        }
    }
    None
}

fn convert(el: ElementRef<'_>) -> Element {
    let mut out = Element::new(el.value().name());
    for (name, value) in el.value().attrs() {
        out.set_attr(name, value);
    }
    for child in el.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            out.push(Node::Element(convert(child_el)));
        } else {
            match child.value() {
                scraper::Node::Text(text) => out.push(Node::Text(String::from(&**text))),
                scraper::Node::Comment(comment) => {
                    out.push(Node::Comment(String::from(&**comment)))
                }
                _ => {}
            }
        }
    }
    out
}
