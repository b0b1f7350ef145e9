//! Tag-manager snippet rendering.
//!
//! A snippet is the icon stylesheet `<link>` followed by one `<script>`
//! block. The script waits for jQuery (loading it first when the page has
//! none) and then mounts the serialized footer the same way
//! [`crate::page::mount`] does. The script text lives in
//! `templates/bootstrap.js`; its `__NAME__` slots are filled here.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::content::{ICON_STYLESHEET_URL, UTILITY_LIBRARY_URL};
use crate::dom::escape_attr;
use crate::tree::WidgetTree;

const BOOTSTRAP_TEMPLATE: &str = include_str!("templates/bootstrap.js");
const STYLESHEET_TEMPLATE: &str = "<link rel=\"stylesheet\" href=\"__STYLESHEET_URL__\">";
const LOAD_ERROR_HANDLER: &str = "\n    script.onerror = function () {\n      console.warn('footer: failed to load ' + script.src);\n    };";

/// Options for [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Icon font stylesheet linked ahead of the script
    pub stylesheet_url: String,
    /// jQuery build injected when the page has none
    pub utility_url: String,
    /// Emit a `console.warn` when jQuery fails to load. Off by default:
    /// the snippet stays silent on load failure.
    pub load_diagnostics: bool,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            stylesheet_url: ICON_STYLESHEET_URL.to_string(),
            utility_url: UTILITY_LIBRARY_URL.to_string(),
            load_diagnostics: false,
        }
    }
}

/// A rendered snippet, ready to paste into a tag-manager custom HTML tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    text: String,
    markup: String,
}

impl Snippet {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Footer markup embedded in the script, before escaping
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Hex SHA-256 of the snippet text
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.text.as_bytes()))
    }
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render `tree` into a snippet
pub fn render(tree: &WidgetTree, options: &SnippetOptions) -> Snippet {
    let markup = tree.to_markup();
    let utility_url = serde_json::to_string(&options.utility_url)
        .unwrap_or_else(|_| format!("'{}'", UTILITY_LIBRARY_URL))
        .replace("</", "<\\/");
    let on_error = if options.load_diagnostics {
        LOAD_ERROR_HANDLER
    } else {
        ""
    };

    let script = BOOTSTRAP_TEMPLATE
        .replace("__UTILITY_URL__", &utility_url)
        .replace("__ON_ERROR__", on_error)
        .replace("__FOOTER_MARKUP__", &escape_template_literal(&markup));
    let stylesheet =
        STYLESHEET_TEMPLATE.replace("__STYLESHEET_URL__", &escape_attr(&options.stylesheet_url));

    log::debug!("rendered snippet ({} bytes of markup)", markup.len());
    Snippet {
        text: format!("{}\n{}", stylesheet, script),
        markup,
    }
}

/// Escape text for a JS template literal inside an inline `<script>`
fn escape_template_literal(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FooterConfig;
    use crate::tree::build;

    fn default_snippet() -> Snippet {
        render(&build(&FooterConfig::defaults_for_year(2024)), &SnippetOptions::default())
    }

    #[test]
    fn starts_with_stylesheet_link() {
        let s = default_snippet();
        assert!(s.as_str().starts_with(
            "<link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css\">"
        ));
        assert_eq!(s.as_str().matches("<script>").count(), 1);
        assert_eq!(s.as_str().matches("</script>").count(), 1);
    }

    #[test]
    fn slots_are_all_filled() {
        let s = default_snippet();
        assert!(!s.as_str().contains("__"));
        assert!(s.as_str().contains("script.src = \"https://code.jquery.com/jquery-3.6.0.min.js\";"));
        assert!(!s.as_str().contains("onerror"));
    }

    #[test]
    fn diagnostics_add_error_handler() {
        let opts = SnippetOptions {
            load_diagnostics: true,
            ..Default::default()
        };
        let s = render(&build(&FooterConfig::defaults_for_year(2024)), &opts);
        assert!(s.as_str().contains("script.onerror"));
    }

    #[test]
    fn markup_cannot_break_out_of_the_script() {
        let mut cfg = FooterConfig::defaults_for_year(2024);
        cfg.company_text = "`${alert(1)}` \\ </script>".to_string();
        let s = render(&build(&cfg), &SnippetOptions::default());
        assert_eq!(s.as_str().matches("</script>").count(), 1);
        assert!(s.as_str().contains("\\`\\${alert(1)}\\` \\\\ &lt;/script&gt;"));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = default_snippet();
        assert_eq!(a.fingerprint(), default_snippet().fingerprint());
        assert_eq!(a.fingerprint().len(), 64);

        let mut cfg = FooterConfig::defaults_for_year(2024);
        cfg.show_navigation = true;
        let b = render(&build(&cfg), &SnippetOptions::default());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
