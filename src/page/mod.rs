//! Page surface: the document operations a footer needs to mount itself.
//!
//! Backends expose these primitives over whatever document they wrap.
//! [`MemoryPage`] keeps a headless document in memory; `WebPage` (feature
//! `web`) drives the live browser DOM. [`mount`] composes the primitives
//! into the footer's mount sequence and is the same for every backend.

pub mod memory;
#[cfg(feature = "web")]
pub mod web;

pub use memory::MemoryPage;
#[cfg(feature = "web")]
pub use web::WebPage;

use crate::content::{ICON_STYLESHEET_MARKERS, ICON_STYLESHEET_URL};
use crate::dom::Element;
use crate::tree::WidgetTree;

/// Document operations used while mounting a footer.
///
/// None of these report failure: a backend that cannot perform an
/// operation logs it and carries on.
pub trait Page {
    /// Reference to an element living in the document
    type Handle;

    /// First `<footer>` in document order, if any
    fn find_footer(&self) -> Option<Self::Handle>;

    /// The document body
    fn body(&mut self) -> Option<Self::Handle>;

    /// Remove every child of `target`
    fn clear_children(&mut self, target: &Self::Handle);

    /// Set one inline style property on `target`
    fn set_style(&mut self, target: &Self::Handle, property: &str, value: &str);

    /// Append a copy of `element` as the last child of `parent` and return
    /// a handle to the inserted element
    fn append(&mut self, parent: &Self::Handle, element: &Element) -> Option<Self::Handle>;

    /// Whether any element carries `id`
    fn has_element_with_id(&self, id: &str) -> bool;

    /// Whether a stylesheet `<link>` whose href contains `href_fragment`
    /// is present
    fn has_stylesheet(&self, href_fragment: &str) -> bool;

    /// Append `<link rel="stylesheet" href=...>` to the head
    fn append_stylesheet(&mut self, href: &str);
}

/// What [`mount`] did to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MountReport {
    /// An existing footer was reused (otherwise one was created)
    pub reused_footer: bool,
    pub navigation_appended: bool,
    pub stylesheet_appended: bool,
}

/// Mount `tree` into `page`.
///
/// The footer region is replaced (or created in the body), the navigation
/// bar is appended to the body unless the page already has one, and the
/// icon stylesheet is linked unless already present. Mounting the same
/// tree repeatedly leaves the page with one footer, one bar and one
/// stylesheet link.
pub fn mount<P: Page + ?Sized>(page: &mut P, tree: &WidgetTree) -> MountReport {
    let mut report = MountReport::default();

    match page.find_footer() {
        Some(footer) => {
            page.clear_children(&footer);
            page.set_style(&footer, "padding", "0");
            page.append(&footer, &tree.container);
            report.reused_footer = true;
        }
        None => {
            let footer = page
                .body()
                .and_then(|body| page.append(&body, &Element::new("footer")));
            match footer {
                Some(footer) => {
                    page.append(&footer, &tree.container);
                }
                None => log::warn!("page has no body; footer not mounted"),
            }
        }
    }

    if let Some(nav) = &tree.navigation {
        let already_present = nav.id().map(|id| page.has_element_with_id(id)).unwrap_or(false);
        if already_present {
            log::debug!("navigation bar already on page; not appending another");
        } else if let Some(body) = page.body() {
            report.navigation_appended = page.append(&body, nav).is_some();
        }
    }

    let linked = ICON_STYLESHEET_MARKERS
        .iter()
        .any(|marker| page.has_stylesheet(marker));
    if !linked {
        page.append_stylesheet(ICON_STYLESHEET_URL);
        report.stylesheet_appended = true;
    }

    log::debug!("mounted footer: {:?}", report);
    report
}
