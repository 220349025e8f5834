use crate::pages::html::{document, escape};

use googletest::prelude::*;

#[test]
fn test_escape_replaces_markup_characters() {
    assert_that!(
        escape(r#"<b>"Tom" & 'Jerry'</b>"#),
        eq("&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;")
    );
}

#[test]
fn test_escape_leaves_plain_text_alone() {
    assert_that!(escape("Plain text, ünïcode"), eq("Plain text, ünïcode"));
}

#[test]
fn test_document_escapes_title_only() {
    let page = document("A & B", "<p>body</p>");

    assert_that!(page, starts_with("<!DOCTYPE html>"));
    assert_that!(page, contains_substring("<title>A &amp; B</title>"));
    assert_that!(page, contains_substring("<p>body</p>"));
}
