//! # HTML Page Rendering
//!
//! The single research page. It is rendered on the server so the form works
//! without scripts: the topic is posted back to `/`, and the result comes with
//! a download link carrying the exact result bytes as a base64 `data:` URL.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use researcher::ExportArtifact;

pub const PAGE_TITLE: &str = "AI Research Assistant";
pub const TOPIC_PLACEHOLDER: &str = "E.g. Latest Generative AI advancements";

/// What the page shows below the header.
pub enum PageBody<'a> {
    /// The input form, optionally with a warning, the submitted topic and a result.
    Form {
        topic: &'a str,
        warning: Option<&'a str>,
        result: Option<&'a str>,
    },
    /// The service cannot run; only the message is shown and no form is offered.
    Unavailable { message: &'a str },
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A `data:` URL whose decoded bytes are exactly the artifact's bytes.
pub fn download_href(artifact: &ExportArtifact) -> String {
    format!(
        "data:{};base64,{}",
        artifact.media_type.replace(' ', ""),
        STANDARD.encode(&artifact.bytes)
    )
}

fn render_result(result: &str) -> String {
    let artifact = ExportArtifact::from_text(result);
    format!(
        r#"<section id="result">
  <h2>🎯 Validated Research Data:</h2>
  <pre class="result">{text}</pre>
  <a id="download" href="{href}" download="{file_name}">📥 Download Research as .txt</a>
</section>"#,
        text = escape_html(result),
        href = download_href(&artifact),
        file_name = artifact.file_name,
    )
}

fn render_form(topic: &str, warning: Option<&str>, result: Option<&str>) -> String {
    let warning = warning
        .map(|w| format!(r#"<p class="warning">⚠️ {}</p>"#, escape_html(w)))
        .unwrap_or_default();
    let result = result.map(render_result).unwrap_or_default();
    format!(
        r#"<p>Enter your query to get structured and validated AI research.</p>
<form method="post" action="/">
  <label for="topic">🔍 Enter your topic of research:</label>
  <textarea id="topic" name="topic" rows="4" placeholder="{placeholder}">{topic}</textarea>
  <button type="submit">Generate Research</button>
</form>
{warning}
{result}"#,
        placeholder = TOPIC_PLACEHOLDER,
        topic = escape_html(topic),
    )
}

/// Renders the full page. `model` names the generation model in the footer.
pub fn render_page(body: PageBody<'_>, model: Option<&str>) -> String {
    let main = match body {
        PageBody::Form {
            topic,
            warning,
            result,
        } => render_form(topic, warning, result),
        PageBody::Unavailable { message } => {
            format!(r#"<p class="error">{}</p>"#, escape_html(message))
        }
    };
    let footer = match model {
        Some(model) => format!("Built using {}", escape_html(model)),
        None => "Research service unavailable".to_string(),
    };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{PAGE_TITLE}</title>
<style>
  body {{ max-width: 46rem; margin: 2rem auto; font-family: sans-serif; }}
  textarea {{ width: 100%; }}
  pre.result {{ white-space: pre-wrap; }}
  .warning {{ color: #8a6d00; }}
  .error {{ color: #b00020; }}
</style>
</head>
<body>
<h1>🧠 Your Personalized AI Researcher.</h1>
{main}
<hr>
<footer>{footer}</footer>
</body>
</html>
"#
    )
}
