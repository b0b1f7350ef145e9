//! Mount the footer into a headless page and print the result

use footerbuilder::{FooterBuilder, MemoryPage};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Footer Builder - Apply Example\n");

    let html = r#"<html><head><title>Loja</title><script>if (a < b && c) { go(); }</script></head>
<body><main>Bem-vindo</main><footer style="padding: 40px">Rodapé antigo</footer></body></html>"#;
    let mut page = MemoryPage::parse(html);

    // Navigation bar on, partners column hidden
    let overrides = json!({ "mostrarNavegacao": true, "mostrarParceiros": false });
    let mut footer = FooterBuilder::new(overrides.as_object().ok_or("overrides must be an object")?);

    let report = footer.apply_with_report(&mut page);
    println!(
        "reused footer: {}, navigation appended: {}, stylesheet appended: {}\n",
        report.reused_footer, report.navigation_appended, report.stylesheet_appended
    );

    // A second apply leaves the bar and stylesheet alone
    let again = footer.apply_with_report(&mut page);
    println!("second apply appended navigation: {}\n", again.navigation_appended);

    println!("{}", page.to_html());
    Ok(())
}
