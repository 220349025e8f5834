use std::fmt::Write;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap `body` (already escaped) in a complete HTML document.
pub fn document(title: &str, body: &str) -> String {
    let mut page = String::new();
    let _ = write!(
        page,
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<style>{style}</style>\n",
            "</head>\n",
            "<body>\n{body}</body>\n",
            "</html>\n"
        ),
        title = escape(title),
        style = STYLE,
        body = body,
    );
    page
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:56rem;margin:2rem auto;\
padding:0 1rem;color:#222}h1{border-bottom:1px solid #ddd;padding-bottom:.5rem}\
.card{border:1px solid #ddd;border-radius:6px;padding:1rem;margin:1rem 0}\
.meta{color:#666;font-size:.85rem}code{background:#f4f4f4;padding:0 .25rem}\
table{border-collapse:collapse}td,th{border:1px solid #ddd;padding:.25rem .5rem;text-align:left}";
