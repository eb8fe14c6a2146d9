//! Unit tests for link detection.

use rstest::rstest;

use crate::command::domain::{LinkExtract, extract_links, is_single_link};

#[rstest]
fn links_are_cut_out_of_the_text() {
    let extract = extract_links("look https://a.example/x and http://b.example now");

    assert_eq!(extract.text, "look  and  now");
    assert_eq!(
        extract.links,
        vec!["https://a.example/x".to_owned(), "http://b.example".to_owned()]
    );
}

#[rstest]
#[case(LinkExtract { text: "hi".to_owned(), links: vec![] }, "**hi**")]
#[case(
    LinkExtract { text: String::new(), links: vec!["https://a.example".to_owned()] },
    "https://a.example"
)]
#[case(
    LinkExtract { text: "see".to_owned(), links: vec!["https://a.example".to_owned()] },
    "**see**\nhttps://a.example"
)]
fn markdown_puts_links_below_the_text(#[case] extract: LinkExtract, #[case] expected: &str) {
    assert_eq!(extract.to_markdown(), expected);
}

#[rstest]
#[case("https://a.example/clip", true)]
#[case("https://a.example/clip wow", false)]
#[case("wow https://a.example/clip", false)]
#[case("no link here", false)]
fn single_link_must_be_the_whole_message(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(is_single_link(text), expected);
}
