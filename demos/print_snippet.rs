//! Print the tag-manager snippet for a customized footer

use footerbuilder::{FooterBuilder, SnippetOptions};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let overrides = json!({
        "corPrimaria": "#1A73E8",
        "mostrarNavegacao": true
    });
    let mut footer = FooterBuilder::new(overrides.as_object().ok_or("overrides must be an object")?)
        .with_snippet_options(SnippetOptions {
            load_diagnostics: true,
            ..Default::default()
        });

    let snippet = footer.snippet();
    eprintln!("sha256: {}", snippet.fingerprint());
    eprintln!("{} bytes of footer markup", snippet.markup().len());
    println!("{}", snippet);
    Ok(())
}
