//! Footer Builder
//!
//! Builds a configurable site footer (social channels, institutional and
//! partner links, copyright line and an optional fixed bottom navigation
//! bar) and delivers it in one of two ways:
//!
//! - **Mount**: insert it into a document through the [`Page`] trait,
//!   replacing the page's `<footer>` or creating one.
//! - **Snippet**: serialize it into a `<link>` + `<script>` snippet for a
//!   tag manager's custom HTML tag. The script loads jQuery when missing
//!   and mounts the footer once it is available.
//!
//! # Features
//!
//! - **Permissive configuration**: overrides are a JSON object; wrong-typed
//!   values are ignored and unknown keys pass through
//! - **Headless pages**: [`MemoryPage`] parses and edits HTML in memory
//! - **Live DOM** (feature `web`): `WebPage` drives `web_sys::Document`
//!
//! # Example
//!
//! ```
//! use footerbuilder::{FooterBuilder, MemoryPage};
//! use serde_json::json;
//!
//! let overrides = json!({ "mostrarNavegacao": true });
//! let mut footer = FooterBuilder::new(overrides.as_object().unwrap());
//!
//! let mut page = MemoryPage::parse("<html><body><main>Hi</main></body></html>");
//! footer.apply(&mut page);
//! assert!(page.to_html().contains("ifood-navegacao-inferior"));
//!
//! let snippet = footer.to_snippet();
//! assert!(snippet.starts_with("<link rel=\"stylesheet\""));
//! ```

use serde_json::{Map, Value};

pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod page;
pub mod snippet;
pub mod tree;

pub use config::FooterConfig;
pub use error::{Error, Result};
pub use page::{MemoryPage, MountReport, Page};
pub use snippet::{Snippet, SnippetOptions};
pub use tree::{Section, WidgetTree};

#[cfg(feature = "web")]
pub use page::WebPage;

/// A footer widget instance.
///
/// Owns its resolved configuration and the tree built from it. The tree
/// is built on first use by [`apply`](Self::apply) or
/// [`to_snippet`](Self::to_snippet) and reused afterwards; call
/// [`build`](Self::build) to rebuild it explicitly.
#[derive(Debug, Clone)]
pub struct FooterBuilder {
    config: FooterConfig,
    tree: Option<WidgetTree>,
    snippet_options: SnippetOptions,
}

impl FooterBuilder {
    /// Resolve `overrides` over the defaults
    pub fn new(overrides: &Map<String, Value>) -> Self {
        Self::from_config(config::resolve(overrides))
    }

    pub fn from_config(config: FooterConfig) -> Self {
        Self {
            config,
            tree: None,
            snippet_options: SnippetOptions::default(),
        }
    }

    pub fn with_snippet_options(mut self, options: SnippetOptions) -> Self {
        self.snippet_options = options;
        self
    }

    pub fn config(&self) -> &FooterConfig {
        &self.config
    }

    /// The cached tree, if one has been built
    pub fn tree(&self) -> Option<&WidgetTree> {
        self.tree.as_ref()
    }

    /// Build (or rebuild) the tree from the configuration
    pub fn build(&mut self) -> &WidgetTree {
        self.tree.insert(tree::build(&self.config))
    }

    /// The cached tree, building it first if needed
    pub fn ensure_built(&mut self) -> &WidgetTree {
        let config = &self.config;
        self.tree.get_or_insert_with(|| tree::build(config))
    }

    /// Mount the footer into `page`. See [`page::mount`].
    pub fn apply<P: Page + ?Sized>(&mut self, page: &mut P) -> &mut Self {
        self.apply_with_report(page);
        self
    }

    /// Like [`apply`](Self::apply), returning what was changed
    pub fn apply_with_report<P: Page + ?Sized>(&mut self, page: &mut P) -> MountReport {
        let tree = self.ensure_built();
        page::mount(page, tree)
    }

    /// Render the tag-manager snippet as a string
    pub fn to_snippet(&mut self) -> String {
        self.snippet().into_string()
    }

    /// Render the tag-manager snippet with this instance's options
    pub fn snippet(&mut self) -> Snippet {
        let options = self.snippet_options.clone();
        self.snippet_with(&options)
    }

    pub fn snippet_with(&mut self, options: &SnippetOptions) -> Snippet {
        snippet::render(self.ensure_built(), options)
    }
}

impl Default for FooterBuilder {
    fn default() -> Self {
        Self::from_config(FooterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn builder(overrides: Value) -> FooterBuilder {
        FooterBuilder::from_config(config::resolve_for_year(overrides.as_object().unwrap(), 2024))
    }

    #[test]
    fn tree_is_built_lazily_and_reused() {
        let mut footer = builder(json!({}));
        assert!(footer.tree().is_none());

        let mut page = MemoryPage::new();
        footer.apply(&mut page);
        let first = footer.tree().cloned().expect("built by apply");

        footer.to_snippet();
        assert_eq!(footer.tree(), Some(&first));
    }

    #[test]
    fn explicit_build_replaces_the_cache() {
        let mut footer = builder(json!({"mostrarNavegacao": true}));
        footer.ensure_built();
        assert!(footer.tree().unwrap().navigation.is_some());
        let rebuilt = footer.build().clone();
        assert_eq!(footer.tree(), Some(&rebuilt));
    }

    #[test]
    fn apply_chains() {
        let mut page = MemoryPage::new();
        let mut footer = builder(json!({}));
        footer.apply(&mut page).apply(&mut page);
        let html = page.to_html();
        assert_eq!(html.matches("<footer").count(), 1);
        assert_eq!(html.matches("all.min.css").count(), 1);
    }

    #[test]
    fn snippet_options_are_used() {
        let mut footer = builder(json!({})).with_snippet_options(SnippetOptions {
            load_diagnostics: true,
            ..Default::default()
        });
        assert!(footer.to_snippet().contains("onerror"));
    }

    #[test]
    fn default_builder_uses_current_year() {
        let year = chrono::Datelike::year(&chrono::Local::now());
        let footer = FooterBuilder::default();
        assert!(footer
            .config()
            .copyright_text
            .contains(&year.to_string()));
    }
}
