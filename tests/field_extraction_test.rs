use pagesift::{
    extract_pages_from_html, Document, FieldPolicy, Segmenter, Selection,
};

fn single_page(html: &str) -> pagesift::PageRecord {
    let mut pages = match extract_pages_from_html(html, "body") {
        Ok(pages) => pages,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(pages.len(), 1, "fixture should produce exactly one record");
    pages.remove(0)
}

#[test]
fn title_prefers_h1_over_h2() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section">
              <h2>Subtitle</h2>
              <h1>Main Title</h1>
            </div>
        </body></html>"#,
    );
    assert_eq!(page.title.as_deref(), Some("Main Title"));
}

#[test]
fn title_falls_back_to_h2() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section"><h2>Only Subtitle</h2></div>
        </body></html>"#,
    );
    assert_eq!(page.title.as_deref(), Some("Only Subtitle"));
}

#[test]
fn title_absent_without_h1_or_h2() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section"><h3>Deep heading</h3><p>text</p></div>
        </body></html>"#,
    );
    assert_eq!(page.title, None);
}

#[test]
fn first_heading_in_document_order_wins() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section"><h1>First</h1><h1>Second</h1></div>
        </body></html>"#,
    );
    assert_eq!(page.title.as_deref(), Some("First"));
}

#[test]
fn destination_takes_first_fragment_anchor_verbatim() {
    let page = single_page(
        r##"<html><body>
            <div data-component-name="Section">
              <a href="https://example.com/">external</a>
              <a href="#first">one</a>
              <a href="#second">two</a>
            </div>
        </body></html>"##,
    );
    assert_eq!(page.destination_url.as_deref(), Some("#first"));
}

#[test]
fn destination_absent_without_fragment_anchors() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section">
              <a href="https://example.com/page#frag">external</a>
            </div>
        </body></html>"#,
    );
    assert_eq!(page.destination_url, None);
}

#[test]
fn local_image_sets_both_image_fields() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section">
              <img src="cover.png" alt="the cover">
            </div>
        </body></html>"#,
    );
    assert_eq!(page.image_preview_url.as_deref(), Some("cover.png"));
    assert_eq!(page.alt_text.as_deref(), Some("the cover"));
}

#[test]
fn local_image_with_missing_attributes_yields_empty_strings() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section"><img></div>
        </body></html>"#,
    );
    assert_eq!(page.image_preview_url.as_deref(), Some(""));
    assert_eq!(page.alt_text.as_deref(), Some(""));
}

#[test]
fn local_image_beats_page_preview_even_with_empty_src() {
    let page = single_page(
        r#"<html>
          <head><meta property="og:image" content="https://example.com/og.png"></head>
          <body>
            <div data-component-name="Section"><img alt="local"></div>
          </body>
        </html>"#,
    );
    assert_eq!(page.image_preview_url.as_deref(), Some(""));
    assert_eq!(page.alt_text.as_deref(), Some("local"));
}

#[test]
fn page_preview_fills_in_without_alt_text() {
    let page = single_page(
        r#"<html>
          <head><meta property="og:image" content="https://example.com/og.png"></head>
          <body>
            <div data-component-name="Section"><p>no image here</p></div>
          </body>
        </html>"#,
    );
    assert_eq!(
        page.image_preview_url.as_deref(),
        Some("https://example.com/og.png")
    );
    assert_eq!(page.alt_text, None);
}

#[test]
fn twitter_card_preview_used_when_open_graph_missing() {
    let page = single_page(
        r#"<html>
          <head><meta name="twitter:image" content="https://example.com/tw.png"></head>
          <body>
            <div data-component-name="Section"><p>no image here</p></div>
          </body>
        </html>"#,
    );
    assert_eq!(
        page.image_preview_url.as_deref(),
        Some("https://example.com/tw.png")
    );
    assert_eq!(page.alt_text, None);
}

#[test]
fn empty_page_preview_disables_the_fallback() {
    let page = single_page(
        r#"<html>
          <head><meta property="og:image" content=""></head>
          <body>
            <div data-component-name="Section"><p>no image here</p></div>
          </body>
        </html>"#,
    );
    assert_eq!(page.image_preview_url, None);
    assert_eq!(page.alt_text, None);
}

#[test]
fn sparse_region_degrades_to_content_only() {
    let page = single_page(
        r#"<html><body>
            <div data-component-name="Section"><p>just a paragraph</p></div>
        </body></html>"#,
    );
    assert!(page.content.contains("just a paragraph"));
    assert_eq!(page.title, None);
    assert_eq!(page.destination_url, None);
    assert_eq!(page.image_preview_url, None);
    assert_eq!(page.alt_text, None);
}

#[test]
fn content_keeps_raw_whitespace() {
    let page = single_page(
        "<html><body><div data-component-name=\"Section\"><h2>Intro</h2><a href=\"#sec1\">jump</a><p>Hello  world</p></div></body></html>",
    );
    assert!(page.content.contains("Hello  world"));
    assert_eq!(page.title.as_deref(), Some("Intro"));
    assert_eq!(page.destination_url.as_deref(), Some("#sec1"));
    assert_eq!(page.image_preview_url, None);
    assert_eq!(page.alt_text, None);
}

struct PinnedTitle;

impl FieldPolicy for PinnedTitle {
    fn title(&self, _region: &Selection) -> Option<String> {
        Some("pinned".to_string())
    }
}

#[test]
fn custom_policy_overrides_a_single_field() {
    let doc = Document::from(
        r##"<html><body>
            <div data-component-name="Section"><h1>ignored</h1><a href="#here">x</a></div>
        </body></html>"##,
    );

    let pages = match Segmenter::with_policy(PinnedTitle).extract_pages(&doc, "body") {
        Ok(pages) => pages,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(pages[0].title.as_deref(), Some("pinned"));
    // untouched defaults still apply
    assert_eq!(pages[0].destination_url.as_deref(), Some("#here"));
}

#[test]
fn primary_selector_can_be_replaced() {
    let doc = Document::from(
        r#"<html><body>
            <section><p>alpha</p></section>
            <section><p>beta</p></section>
            <div data-component-name="Section"><p>marker</p></div>
        </body></html>"#,
    );

    let pages = match Segmenter::new()
        .primary_selector("section")
        .extract_pages(&doc, "body")
    {
        Ok(pages) => pages,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(pages.len(), 2);
    assert!(pages[0].content.contains("alpha"));
    assert!(pages[1].content.contains("beta"));
}
