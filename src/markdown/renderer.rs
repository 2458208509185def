//! Markdown to HTML rendering for page bodies.

use anyhow::{Context, Result};
use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

const CODE_OPEN: &str = "<code class=\"language-";
const CODE_CLOSE: &str = "</code>";

/// Renders markdown page bodies to HTML.
///
/// Enables the GFM extensions documentation pages rely on and passes raw
/// HTML through untouched so pages can embed inline markup. Fenced code
/// blocks with a language tag are highlighted with `hljs-` prefixed CSS
/// classes styled by the bundled markdown stylesheet.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;

        options.parse.smart = true;

        // Pages are authored locally and may embed HTML
        options.render.unsafe_ = true;

        Self {
            options,
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Errors
    ///
    /// Returns error if a code block cannot be highlighted
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Replaces the escaped text of each `language-*` code block emitted by
    /// comrak with syntect output. Malformed blocks are copied verbatim.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut out = String::with_capacity(html.len());
        let mut rest = html;

        while let Some(start) = rest.find(CODE_OPEN) {
            let body_start = start + CODE_OPEN.len();
            let parsed = split_code_open(&rest[body_start..]).and_then(|(language, tail)| {
                tail.find(CODE_CLOSE).map(|code_end| (language, tail, code_end))
            });

            let Some((language, code_and_rest, code_end)) = parsed else {
                out.push_str(&rest[..body_start]);
                rest = &rest[body_start..];
                continue;
            };

            let code = unescape(&code_and_rest[..code_end]);
            let highlighted = self
                .highlight(&code, language)
                .with_context(|| format!("Failed to highlight {} code block", language))?;

            out.push_str(&rest[..start]);
            out.push_str(CODE_OPEN);
            out.push_str(language);
            out.push_str("\">");
            out.push_str(&highlighted);
            out.push_str(CODE_CLOSE);

            rest = &code_and_rest[code_end + CODE_CLOSE.len()..];
        }

        out.push_str(rest);
        Ok(out)
    }

    fn highlight(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self.find_syntax(language) else {
            tracing::debug!(language, "No syntax definition, rendering code block as text");
            return Ok(escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );
        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")?;
        }

        Ok(generator.finalize())
    }

    fn find_syntax(&self, language: &str) -> Option<&SyntaxReference> {
        // MDX pages commonly tag React snippets as jsx/tsx
        let token = match language {
            "jsx" | "mjs" | "cjs" => "js",
            "tsx" => "ts",
            other => other,
        };

        self.syntax_set
            .find_syntax_by_token(token)
            .or_else(|| self.syntax_set.find_syntax_by_extension(token))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits the text following `<code class="language-` into the language
/// name and the text after the opening tag. The tag must close on the same
/// line without starting another tag.
fn split_code_open(after_open: &str) -> Option<(&str, &str)> {
    let lang_end = after_open.find(['"', '>', '<', '\n'])?;
    if !after_open[lang_end..].starts_with('"') {
        return None;
    }

    let tag = &after_open[lang_end + 1..];
    let tag_end = tag.find(['>', '<', '\n'])?;
    if !tag[tag_end..].starts_with('>') {
        return None;
    }

    Some((&after_open[..lang_end], &tag[tag_end + 1..]))
}

/// Reverses the entity escaping comrak applies inside code blocks.
fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
