use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, LinkType, Options, Parser, Tag, TagEnd, html};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

// Initialize syntax highlighting resources once
static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

/// Converts markdown source to HTML.
///
/// `[[label]]` wiki-links are rewritten through `resolve_label`, which maps
/// a page title to a URL; the raw label doubles as the link text. Fenced
/// code blocks are replaced with syntect-highlighted HTML using
/// `syntax_theme`, falling back to an escaped `<pre>` block for unknown
/// languages. The markdown source itself is never escaped here; escaping of
/// arbitrary text is owned by the converter.
pub fn render_markdown<F>(source: &str, syntax_theme: &str, mut resolve_label: F) -> String
where
    F: FnMut(&str) -> String,
{
    let options = Options::all();
    let events: Vec<Event> = Parser::new_ext(source, options).collect();
    let mut processed_events = Vec::new();
    let mut i = 0;

    while i < events.len() {
        match &events[i] {
            Event::Start(Tag::Link {
                link_type: LinkType::WikiLink { .. },
                dest_url,
                title,
                id,
            }) => {
                // The parser puts the raw label in dest_url.
                let resolved = resolve_label(dest_url);
                processed_events.push(Event::Start(Tag::Link {
                    link_type: LinkType::Inline,
                    dest_url: resolved.into(),
                    title: title.clone(),
                    id: id.clone(),
                }));
            }
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                // Collect all text events until the end of the code block
                let mut code_content = String::new();
                i += 1; // Skip the start event

                while i < events.len() {
                    match &events[i] {
                        Event::End(TagEnd::CodeBlock) => break,
                        Event::Text(text) => code_content.push_str(text),
                        _ => {} // Ignore other events inside code blocks
                    }
                    i += 1;
                }

                processed_events.push(Event::Html(
                    highlight_code(&code_content, lang, syntax_theme).into(),
                ));
            }
            _ => {
                processed_events.push(events[i].clone());
            }
        }
        i += 1;
    }

    let mut out = String::new();
    html::push_html(&mut out, processed_events.into_iter());

    out
}

fn highlight_code(code: &str, lang: &str, syntax_theme: &str) -> String {
    let plain = || format!("<pre><code>{}</code></pre>", html_escape::encode_text(code));

    let Some(syntax) = SYNTAX_SET.find_syntax_by_token(lang) else {
        return plain();
    };
    let theme = THEME_SET
        .themes
        .get(syntax_theme)
        .unwrap_or(&THEME_SET.themes[DEFAULT_SYNTAX_THEME]);

    highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme).unwrap_or_else(|_| plain())
}
