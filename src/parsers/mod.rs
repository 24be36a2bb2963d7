pub mod form;
pub mod outcome;
pub mod selectors;
pub mod user_details;

use scraper::ElementRef;

/// Text of an element with runs of whitespace collapsed to single spaces
/// and the ends trimmed.
pub(crate) fn collapsed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The lines of a multi-line cell. Each text node becomes one candidate
/// line (element boundaries such as `<br>` separate the nodes), normalized
/// the same way as `collapsed_text`; empty lines are dropped.
pub(crate) fn cell_lines(element: ElementRef<'_>) -> Vec<String> {
    element
        .text()
        .map(|node| node.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}
