//! Live browser DOM backend (wasm, feature `web`).
//!
//! DOM calls that fail are logged and skipped so a broken host page never
//! aborts the mount.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::Page;
use crate::dom::{self, Node};

pub struct WebPage {
    document: Document,
}

impl WebPage {
    /// The page of the current window, if running in a browser
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    fn materialize(&self, el: &dom::Element) -> Result<web_sys::Element, JsValue> {
        let out = self.document.create_element(el.tag())?;
        for (name, value) in el.attributes() {
            out.set_attribute(name, value)?;
        }
        if let Some(style) = el.style_attr() {
            out.set_attribute("style", &style)?;
        }
        for child in el.children() {
            match child {
                Node::Element(e) => {
                    out.append_child(&self.materialize(e)?)?;
                }
                Node::Text(t) => {
                    out.append_child(&self.document.create_text_node(t))?;
                }
                Node::Comment(c) => {
                    out.append_child(&self.document.create_comment(c))?;
                }
            }
        }
        Ok(out)
    }
}

impl Page for WebPage {
    type Handle = web_sys::Element;

    fn find_footer(&self) -> Option<web_sys::Element> {
        self.document.query_selector("footer").ok().flatten()
    }

    fn body(&mut self) -> Option<web_sys::Element> {
        self.document.body().map(Into::into)
    }

    fn clear_children(&mut self, target: &web_sys::Element) {
        target.set_inner_html("");
    }

    fn set_style(&mut self, target: &web_sys::Element, property: &str, value: &str) {
        let Some(el) = target.dyn_ref::<HtmlElement>() else {
            log::warn!("set_style: <{}> is not an HTML element", target.tag_name());
            return;
        };
        if let Err(e) = el.style().set_property(property, value) {
            log::warn!("set_style {}: {:?}", property, e);
        }
    }

    fn append(
        &mut self,
        parent: &web_sys::Element,
        element: &dom::Element,
    ) -> Option<web_sys::Element> {
        let result = self
            .materialize(element)
            .and_then(|node| parent.append_child(&node).map(|_| node));
        match result {
            Ok(node) => Some(node),
            Err(e) => {
                log::warn!("append <{}>: {:?}", element.tag(), e);
                None
            }
        }
    }

    fn has_element_with_id(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn has_stylesheet(&self, href_fragment: &str) -> bool {
        let selector = format!("link[href*=\"{}\"]", href_fragment);
        matches!(self.document.query_selector(&selector), Ok(Some(_)))
    }

    fn append_stylesheet(&mut self, href: &str) {
        let Some(head) = self.document.head() else {
            log::warn!("document has no head; stylesheet {} not linked", href);
            return;
        };
        let link = dom::Element::new("link")
            .with_attr("rel", "stylesheet")
            .with_attr("href", href);
        let head: web_sys::Element = head.into();
        self.append(&head, &link);
    }
}

/// Mount the footer into the current page. `overrides_json` is a JSON
/// object of configuration overrides (`"{}"` for the defaults).
#[wasm_bindgen(js_name = applyFooter)]
pub fn apply_footer(overrides_json: &str) -> Result<(), JsValue> {
    let overrides =
        crate::config::parse_overrides(overrides_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mut page = WebPage::current().ok_or_else(|| JsValue::from_str("no document available"))?;
    crate::FooterBuilder::new(&overrides).apply(&mut page);
    Ok(())
}
