use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

const INFO_MARKER: &str = "info";
const INVISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

lazy_static! {
    static ref LINK_SELECTOR: Selector = Selector::parse("a[href]").unwrap();
}

/// Visible text of a page, one trimmed non-empty line per entry, in document order.
pub fn visible_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .root_element()
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| INVISIBLE_ELEMENTS.contains(&element.name()))
            })
        })
        .flat_map(|(_, text)| text.lines().map(str::trim).collect::<Vec<&str>>())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn info_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&LINK_SELECTOR)
        .filter(|link| label(link).to_lowercase().contains(INFO_MARKER))
        .filter_map(|link| link.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

fn label(element: &ElementRef) -> String {
    element.text().collect()
}
