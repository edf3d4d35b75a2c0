//! Server-rendered HTML for the form routes.
//!
//! Every page shares one layout: title, upload form, topic form and the About
//! sidebar, followed by whatever the request produced.

use digest_workflow::WorkflowEvent;
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const PAGE_TITLE: &str = "DigestPaper";
pub const HEADING: &str = "Digest PDFs in one simple click!";
pub const ABOUT: &str = "This app helps you digest complicated papers into easily understandable blog posts. \
Upload your PDF files and click on 'Generate summary' to process the paper(s).";

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0; display: flex; }
aside { width: 18rem; padding: 1.5rem; background: #f0f2f6; min-height: 100vh; }
main { flex: 1; padding: 2rem 3rem; max-width: 48rem; }
form { margin: 1.5rem 0; }
.summary { white-space: pre-wrap; border-left: 3px solid #4b8bf5; padding-left: 1rem; }
.warning { background: #fffbe6; padding: 0.75rem; }
.error { background: #ffe9e9; color: #a00; padding: 0.75rem; }
"#;

pub fn index_page() -> String {
    layout("", "")
}

/// Status lines in event order, then the summary or the error
pub fn summary_page(events: &[WorkflowEvent]) -> String {
    let mut body = String::new();

    for event in events {
        for line in event.status_lines() {
            body.push_str(&paragraph(&line));
        }
        match event {
            WorkflowEvent::Summary { text } => {
                body.push_str(&format!("<div class=\"summary\">{}</div>\n", encode_text(text)));
            }
            WorkflowEvent::Error { message } => body.push_str(&error_block(message)),
            _ => {}
        }
    }

    layout("", &body)
}

pub fn topic_echo_page(topic: &str) -> String {
    layout(topic, &paragraph(topic))
}

pub fn abstract_page(topic: &str, text: &str) -> String {
    let body = format!(
        "<h3>Generated Abstract:</h3>\n<div class=\"summary\">{}</div>\n",
        encode_text(text)
    );
    layout(topic, &body)
}

pub fn topic_warning_page(message: &str) -> String {
    layout("", &format!("<div class=\"warning\">{}</div>\n", encode_text(message)))
}

pub fn topic_error_page(topic: &str, message: &str) -> String {
    layout(topic, &error_block(message))
}

pub fn error_page(message: &str) -> String {
    layout("", &error_block(message))
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>\n", encode_text(text))
}

fn error_block(message: &str) -> String {
    format!("<div class=\"error\">{}</div>\n", encode_text(message))
}

fn layout(topic: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<aside>
<h2>About</h2>
<p>{about}</p>
</aside>
<main>
<h1>{heading}</h1>
<form action="/summaries" method="post" enctype="multipart/form-data">
<label for="file">Choose your .pdf file</label>
<input type="file" id="file" name="file" accept=".pdf" required>
<button type="submit">Generate summary</button>
</form>
<form action="/topic" method="post">
<label for="topic">Enter a topic sentence:</label>
<input type="text" id="topic" name="topic" value="{topic}">
<button type="submit">Get PDF address</button>
</form>
<section id="result">
{body}</section>
</main>
</body>
</html>
"#,
        title = PAGE_TITLE,
        style = STYLE,
        about = encode_text(ABOUT),
        heading = encode_text(HEADING),
        topic = encode_double_quoted_attribute(topic),
        body = body,
    )
}
