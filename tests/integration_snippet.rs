//! Tag-manager snippet: structure and behavior of the bootstrap script

use boa_engine::{Context, Source};
use footerbuilder::config::resolve_for_year;
use footerbuilder::{FooterBuilder, Snippet, SnippetOptions};
use scraper::{Html, Selector};
use serde_json::{json, Value};

fn footer(overrides: Value) -> FooterBuilder {
    FooterBuilder::from_config(resolve_for_year(overrides.as_object().unwrap(), 2024))
}

/// The JavaScript between `<script>` and `</script>`
fn script_body(snippet: &str) -> &str {
    let start = snippet.find("<script>").expect("script open") + "<script>".len();
    let end = snippet.find("</script>").expect("script close");
    &snippet[start..end]
}

/// The template literal assigned to `markup`, unescaped
fn embedded_markup(snippet: &str) -> String {
    let start = snippet.find("var markup = `").expect("markup slot") + "var markup = `".len();
    let end = start + snippet[start..].find("`;").expect("markup end");
    snippet[start..end].replace("<\\/", "</")
}

fn count(html: &str, selector: &str) -> usize {
    let doc = Html::parse_fragment(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

fn eval_string(ctx: &mut Context, code: &str) -> String {
    let value = ctx.eval(Source::from_bytes(code)).expect("script ran");
    value
        .as_string()
        .expect("string result")
        .to_std_string_escaped()
}

/// Minimal `document` and jQuery stand-ins recording what the script does
const DOM_STUB: &str = r#"
var injected = [];
var calls = [];
var appended = null;
var footerPresent = false;
var document = {
  head: { appendChild: function (el) { injected.push(el); } },
  createElement: function (tag) { return { tag: tag }; }
};
function select(sel) {
  var obj = {
    length: sel === 'footer' ? (footerPresent ? 1 : 0) : 1,
    html: function (h) { calls.push(sel + '.html'); return obj; },
    css: function (k, v) { calls.push(sel + '.css:' + k + '=' + v); return obj; },
    append: function (m) { calls.push(sel + '.append'); appended = m; return obj; }
  };
  return obj;
}
function fakeJQuery(arg) {
  if (typeof arg === 'function') { arg(fakeJQuery); return; }
  return select(arg);
}
"#;

#[test]
fn snippet_layout() {
    let snippet = footer(json!({})).to_snippet();
    assert!(snippet.starts_with(
        "<link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css\">"
    ));
    assert_eq!(snippet.matches("<script>").count(), 1);
    assert!(snippet.trim_end().ends_with("</script>"));
}

#[test]
fn embedded_markup_matches_direct_build() {
    for nav in [false, true] {
        let mut widget = footer(json!({"mostrarNavegacao": nav}));
        let snippet = widget.to_snippet();
        let markup = embedded_markup(&snippet);
        let tree = widget.tree().expect("built for snippet");

        assert_eq!(markup, tree.to_markup());
        assert_eq!(count(&markup, ".ifood-rodape-coluna"), tree.sections().len());
        assert_eq!(
            count(&markup, "#ifood-navegacao-inferior a"),
            tree.navigation_buttons().len()
        );
        assert_eq!(count(&markup, "#ifood-navegacao-inferior"), usize::from(nav));
    }
}

#[test]
fn hidden_sections_are_absent_from_snippet() {
    let snippet = footer(json!({"mostrarCanais": false, "mostrarParceiros": false})).to_snippet();
    let markup = embedded_markup(&snippet);
    assert_eq!(count(&markup, ".ifood-rodape-coluna"), 1);
    assert!(!markup.contains("fa-instagram"));
    assert!(markup.contains("Ajuda/FAQ"));
}

#[test]
fn script_loads_jquery_when_missing_then_mounts() {
    let snippet = footer(json!({})).snippet_with(&SnippetOptions::default());
    let mut ctx = Context::default();
    ctx.eval(Source::from_bytes(DOM_STUB)).expect("stub");
    ctx.eval(Source::from_bytes(script_body(snippet.as_str())))
        .expect("bootstrap ran");

    let injected = eval_string(&mut ctx, "injected.length + ':' + injected[0].tag + ':' + injected[0].src");
    assert_eq!(
        injected,
        "1:script:https://code.jquery.com/jquery-3.6.0.min.js"
    );
    assert_eq!(eval_string(&mut ctx, "String(appended)"), "null");

    // jQuery finishes loading: the footer is created in the body
    let appended = eval_string(&mut ctx, "var jQuery = fakeJQuery; injected[0].onload(); appended");
    assert_eq!(appended, format!("<footer>{}</footer>", snippet.markup()));
    assert_eq!(eval_string(&mut ctx, "calls.join(',')"), "body.append");
}

#[test]
fn script_mounts_immediately_when_jquery_present() {
    let snippet: Snippet = footer(json!({"mostrarNavegacao": true})).snippet();
    let mut ctx = Context::default();
    ctx.eval(Source::from_bytes(DOM_STUB)).expect("stub");
    ctx.eval(Source::from_bytes("var jQuery = fakeJQuery; footerPresent = true;"))
        .expect("jquery stub");
    ctx.eval(Source::from_bytes(script_body(snippet.as_str())))
        .expect("bootstrap ran");

    assert_eq!(eval_string(&mut ctx, "String(injected.length)"), "0");
    assert_eq!(
        eval_string(&mut ctx, "calls.join(',')"),
        "footer.html,footer.css:padding=0,footer.append"
    );
    assert_eq!(eval_string(&mut ctx, "appended"), snippet.markup());
}

#[test]
fn diagnostics_handler_warns_on_load_failure() {
    let options = SnippetOptions {
        load_diagnostics: true,
        ..Default::default()
    };
    let snippet = footer(json!({})).snippet_with(&options);
    let mut ctx = Context::default();
    ctx.eval(Source::from_bytes(DOM_STUB)).expect("stub");
    ctx.eval(Source::from_bytes(
        "var warnings = []; var console = { warn: function (m) { warnings.push(m); } };",
    ))
    .expect("console stub");
    ctx.eval(Source::from_bytes(script_body(snippet.as_str())))
        .expect("bootstrap ran");

    let warning = eval_string(&mut ctx, "injected[0].onerror(); warnings[0]");
    assert_eq!(
        warning,
        "footer: failed to load https://code.jquery.com/jquery-3.6.0.min.js"
    );
}
