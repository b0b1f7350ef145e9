//! Footer tree construction.
//!
//! [`build`] turns a resolved [`FooterConfig`] into a detached
//! [`WidgetTree`]. Nothing here touches a page; mounting happens in
//! [`crate::page`] and serialization in [`crate::snippet`].

use crate::config::FooterConfig;
use crate::content::{
    LinkItem, COLUMN_CLASS, CONTAINER_ID, CONTENT_CLASS, INFO_LINKS, NAVIGATION_CLEARANCE,
    NAVIGATION_ID, NAV_BUTTONS, PARTNER_LINKS, SOCIAL_CHANNELS,
};
use crate::dom::Element;

/// The content columns a footer can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Channels,
    Links,
    Partners,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Channels, Section::Links, Section::Partners];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Channels => "Canais",
            Section::Links => "iFood",
            Section::Partners => "Parceiros e Parceiras",
        }
    }

    fn enabled(self, config: &FooterConfig) -> bool {
        match self {
            Section::Channels => config.show_channels,
            Section::Links => config.show_links,
            Section::Partners => config.show_partners,
        }
    }
}

/// A built footer: the container for the footer region and, when
/// enabled, the fixed bottom navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetTree {
    pub container: Element,
    pub navigation: Option<Element>,
}

impl WidgetTree {
    /// The flex row holding the section columns
    pub fn content_row(&self) -> Option<&Element> {
        self.container
            .child_elements()
            .find(|e| e.has_class(CONTENT_CLASS))
            .and_then(|content| content.child_elements().next())
    }

    /// Section columns in display order
    pub fn sections(&self) -> Vec<&Element> {
        self.content_row()
            .map(|row| row.child_elements().collect())
            .unwrap_or_default()
    }

    /// Headings of the sections present, in order
    pub fn section_headings(&self) -> Vec<String> {
        self.sections()
            .iter()
            .filter_map(|s| s.find(&|e| e.tag() == "h3"))
            .map(|h| h.text_content())
            .collect()
    }

    /// Anchors of the navigation bar, empty when it was not built
    pub fn navigation_buttons(&self) -> Vec<&Element> {
        match &self.navigation {
            Some(nav) => nav.descendants().into_iter().filter(|e| e.tag() == "a").collect(),
            None => Vec::new(),
        }
    }

    /// Markup of the container followed by the navigation bar
    pub fn to_markup(&self) -> String {
        let mut out = self.container.outer_html();
        if let Some(nav) = &self.navigation {
            out.push_str(&nav.outer_html());
        }
        out
    }
}

/// Build the footer tree for `config`
pub fn build(config: &FooterConfig) -> WidgetTree {
    let mut row = Element::new("div").with_style(&[
        ("display", "flex"),
        ("flex-wrap", "wrap"),
        ("justify-content", "space-between"),
        ("margin-bottom", "20px"),
    ]);
    for section in Section::ALL {
        if section.enabled(config) {
            row = row.with_child(section_column(section, config));
        }
    }

    let copyright = Element::new("div")
        .with_style(&[
            ("text-align", "center"),
            ("padding-top", "20px"),
            ("border-top", "1px solid #eee"),
            ("margin-top", "20px"),
        ])
        .with_child(
            Element::new("p")
                .with_style(&[("font-size", "12px"), ("margin", "0")])
                .with_text(&config.copyright_text)
                .with_child(Element::new("br"))
                .with_text(&config.company_text),
        );

    let content = Element::new("div")
        .with_class(CONTENT_CLASS)
        .with_style(&[
            ("max-width", "1200px"),
            ("margin", "0 auto"),
            ("padding", "0 15px"),
        ])
        .with_child(row)
        .with_child(copyright);

    let clearance = if config.show_navigation {
        NAVIGATION_CLEARANCE
    } else {
        "0"
    };
    let container = Element::new("div")
        .with_id(CONTAINER_ID)
        .with_style(&[
            ("background-color", config.background_color.as_str()),
            ("width", "100%"),
            ("margin", "0"),
            ("padding", "20px 0"),
            ("font-family", "Inter, sans-serif"),
            ("color", config.text_color.as_str()),
            ("margin-bottom", clearance),
        ])
        .with_child(content);

    let navigation = config.show_navigation.then(|| navigation_bar(config));

    log::debug!(
        "built footer with {} section(s), navigation: {}",
        Section::ALL.iter().filter(|s| s.enabled(config)).count(),
        navigation.is_some()
    );

    WidgetTree {
        container,
        navigation,
    }
}

fn section_column(section: Section, config: &FooterConfig) -> Element {
    let column = Element::new("div")
        .with_class(COLUMN_CLASS)
        .with_style(&[
            ("flex", "1"),
            ("min-width", "250px"),
            ("margin-bottom", "20px"),
        ])
        .with_child(
            Element::new("h3")
                .with_style(&[
                    ("color", config.primary_color.as_str()),
                    ("font-size", "15px"),
                    ("font-weight", "bold"),
                    ("margin-top", "10px"),
                    ("margin-bottom", "15px"),
                ])
                .with_text(section.heading()),
        );

    match section {
        Section::Channels => channels(column, config),
        Section::Links => link_list(column, &INFO_LINKS, config),
        Section::Partners => link_list(column, &PARTNER_LINKS, config),
    }
}

fn channels(column: Element, config: &FooterConfig) -> Element {
    let mut icons = Element::new("div").with_style(&[
        ("display", "flex"),
        ("flex-wrap", "wrap"),
        ("margin-bottom", "15px"),
    ]);
    for channel in &SOCIAL_CHANNELS {
        icons = icons.with_child(
            Element::new("a")
                .with_attr("href", channel.url)
                .with_attr("target", "_blank")
                .with_style(&[
                    ("margin-right", "10px"),
                    ("margin-bottom", "10px"),
                    ("text-decoration", "none"),
                ])
                .with_child(
                    Element::new("i")
                        .with_class(&format!("{} fa-2x", channel.icon))
                        .with_style(&[("color", config.primary_color.as_str())]),
                ),
        );
    }

    let address = Element::new("p")
        .with_style(&[("font-size", "12px"), ("margin-top", "10px")])
        .with_text(&format!("CNPJ {}", config.tax_id))
        .with_child(Element::new("br"))
        .with_text(&config.address);

    column.with_child(icons).with_child(address)
}

fn link_list(mut column: Element, links: &[LinkItem], config: &FooterConfig) -> Element {
    for link in links {
        column = column.with_child(
            Element::new("p")
                .with_style(&[("margin-bottom", "10px")])
                .with_child(
                    Element::new("a")
                        .with_attr("href", link.url)
                        .with_attr("target", "_blank")
                        .with_style(&[
                            ("text-decoration", "none"),
                            ("color", config.text_color.as_str()),
                        ])
                        .with_text(link.label),
                ),
        );
    }
    column
}

fn navigation_bar(config: &FooterConfig) -> Element {
    let mut row = Element::new("div").with_style(&[
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "space-around"),
        ("height", "100%"),
        ("max-width", "600px"),
        ("margin", "0 auto"),
    ]);
    for button in &NAV_BUTTONS {
        row = row.with_child(
            Element::new("a")
                .with_attr("href", button.url)
                .with_id(&format!("ifood-nav-{}", button.id))
                .with_style(&[
                    ("display", "flex"),
                    ("flex-direction", "column"),
                    ("align-items", "center"),
                    ("text-decoration", "none"),
                    ("color", "#71797C"),
                    ("font-size", "12px"),
                ])
                .with_child(
                    Element::new("i")
                        .with_class(&format!("{} fa-2x", button.icon))
                        .with_style(&[("margin-bottom", "5px")]),
                )
                .with_child(Element::new("span").with_text(button.label)),
        );
    }

    Element::new("div")
        .with_id(NAVIGATION_ID)
        .with_style(&[
            ("width", "100%"),
            ("height", "80px"),
            ("position", "fixed"),
            ("bottom", "0"),
            ("left", "0"),
            ("z-index", "1000"),
            ("background-color", config.background_color.as_str()),
            ("box-shadow", "0 -2px 10px rgba(0, 0, 0, 0.1)"),
        ])
        .with_child(row)
}
