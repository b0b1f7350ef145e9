//! A small, detached element tree.
//!
//! Footer trees are built here before they touch any page. Inline styles
//! are kept as an ordered declaration list so individual properties can be
//! overwritten (`padding: 0` on an existing footer) without re-parsing the
//! `style` attribute.

use std::fmt;

/// Elements serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is serialized verbatim
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    /// Set an attribute. A `style` attribute is parsed into declarations.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_style(mut self, declarations: &[(&str, &str)]) -> Self {
        for (property, value) in declarations {
            self.set_style(property, value);
        }
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if name.eq_ignore_ascii_case("style") {
            self.style = parse_style(value);
            return;
        }
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    /// Attributes other than `style`, in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The serialized `style` attribute, `None` without inline styles
    pub fn style_attr(&self) -> Option<String> {
        (!self.style.is_empty()).then(|| style_text(&self.style))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Value of an inline style property
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        match self.style.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.to_string(),
            None => self.style.push((property.to_string(), value.to_string())),
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Direct element children, skipping text
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// All descendant elements in document order (excluding `self`)
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }

    /// First element in document order (including `self`) matching `pred`
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|c| c.find(pred))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|e| e.id() == Some(id))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        write_children(self, &mut out);
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outer_html())
    }
}

fn collect_descendants<'a>(el: &'a Element, out: &mut Vec<&'a Element>) {
    for child in el.child_elements() {
        out.push(child);
        collect_descendants(child, out);
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
            Node::Comment(_) => {}
        }
    }
}

fn write_children(el: &Element, out: &mut String) {
    let raw = RAW_TEXT_ELEMENTS.contains(&el.tag.as_str());
    for child in &el.children {
        match child {
            Node::Text(t) if raw => out.push_str(t),
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Comment(c) => {
                out.push_str("<!--");
                out.push_str(c);
                out.push_str("-->");
            }
            Node::Element(e) => write_element(e, out),
        }
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
    }
    if let Some(style) = el.style_attr() {
        out.push_str(&format!(" style=\"{}\"", escape_attr(&style)));
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }
    write_children(el, out);
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn style_text(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(p, v)| format!("{}: {};", p, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a `style` attribute into `(property, value)` pairs. Semicolons
/// inside quotes or parentheses (`url(data:...;base64,...)`) do not end a
/// declaration.
pub fn parse_style(text: &str) -> Vec<(String, String)> {
    split_declarations(text)
        .into_iter()
        .filter_map(|decl| {
            let (p, v) = decl.split_once(':')?;
            let p = p.trim();
            if p.is_empty() {
                return None;
            }
            Some((p.to_ascii_lowercase(), v.trim().to_string()))
        })
        .collect()
}

fn split_declarations(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                out.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&text[start..]);
    out
}

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_attributes_style_and_void_elements() {
        let el = Element::new("p")
            .with_id("x")
            .with_style(&[("font-size", "12px"), ("margin", "0")])
            .with_text("a")
            .with_child(Element::new("br"))
            .with_text("b");
        assert_eq!(
            el.outer_html(),
            "<p id=\"x\" style=\"font-size: 12px; margin: 0;\">a<br>b</p>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("a")
            .with_attr("href", "https://x/?a=1&b=\"2\"")
            .with_text("<b>&</b>");
        assert_eq!(
            el.outer_html(),
            "<a href=\"https://x/?a=1&amp;b=&quot;2&quot;\">&lt;b&gt;&amp;&lt;/b&gt;</a>"
        );
    }

    #[test]
    fn set_style_overwrites_in_place() {
        let mut el = Element::new("footer").with_attr("style", "padding: 10px; color: red");
        el.set_style("padding", "0");
        assert_eq!(el.style("padding"), Some("0"));
        assert_eq!(el.style("color"), Some("red"));
        assert_eq!(el.outer_html(), "<footer style=\"padding: 0; color: red;\"></footer>");
    }

    #[test]
    fn find_and_text_content_walk_in_document_order() {
        let el = Element::new("div")
            .with_child(Element::new("span").with_id("a").with_text("one"))
            .with_child(Element::new("div").with_child(Element::new("span").with_text("two")));
        assert_eq!(el.find(&|e| e.tag() == "span").and_then(|e| e.id()), Some("a"));
        assert_eq!(el.descendants().len(), 3);
        assert_eq!(el.text_content(), "onetwo");
        assert!(el.find_by_id("missing").is_none());
    }

    #[test]
    fn raw_text_elements_and_comments_serialize_verbatim() {
        let mut head = Element::new("head")
            .with_child(Element::new("script").with_text("if (a < b && c) { go(); }"))
            .with_child(Element::new("style").with_text("nav > a { color: red }"));
        head.push(Node::Comment(" Google Tag Manager ".to_string()));
        assert_eq!(
            head.outer_html(),
            "<head><script>if (a < b && c) { go(); }</script><style>nav > a { color: red }</style><!-- Google Tag Manager --></head>"
        );
        assert_eq!(head.text_content(), "if (a < b && c) { go(); }nav > a { color: red }");
    }

    #[test]
    fn style_split_ignores_semicolons_in_urls_and_quotes() {
        let decls = parse_style(
            "background: url('data:image/png;base64,AAAA'); content: \"a;b\"; color: red",
        );
        assert_eq!(
            decls,
            vec![
                ("background".to_string(), "url('data:image/png;base64,AAAA')".to_string()),
                ("content".to_string(), "\"a;b\"".to_string()),
                ("color".to_string(), "red".to_string()),
            ]
        );
        let unquoted = parse_style("background-image: url(data:image/gif;base64,R0lG);margin:0");
        assert_eq!(unquoted[0].1, "url(data:image/gif;base64,R0lG)");
        assert_eq!(unquoted[1], ("margin".to_string(), "0".to_string()));
    }

    #[test]
    fn has_class_matches_whole_tokens() {
        let el = Element::new("i").with_class("fab fa-instagram fa-2x");
        assert!(el.has_class("fa-2x"));
        assert!(!el.has_class("fa"));
    }
}
