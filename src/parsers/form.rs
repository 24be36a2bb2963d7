use crate::error::{Result, ScraperError};
use crate::models::LegacyFormTokens;
use crate::parsers::selectors;
use scraper::{Html, Selector};

/// Reads the hidden anti-CSRF inputs off the change-password page.
///
/// All three tokens must be present and non-empty; otherwise the form
/// cannot accept a submission and the whole operation fails up front with
/// `FormUnavailable`.
pub fn parse_form_tokens(html: &str) -> Result<LegacyFormTokens> {
    let document = Html::parse_document(html);

    let form_ticket = input_value(&document, selectors::FORM_TICKET_FIELD);
    let user_state = input_value(&document, selectors::USER_STATE_FIELD);
    let tab_id = input_value(&document, selectors::TAB_ID_FIELD);

    if form_ticket.is_empty() || user_state.is_empty() || tab_id.is_empty() {
        return Err(ScraperError::FormUnavailable);
    }

    Ok(LegacyFormTokens {
        form_ticket,
        user_state,
        tab_id,
    })
}

/// Effective value of the first input with the given name: the `value`
/// attribute, trimmed. Empty when the input is absent or has no value.
fn input_value(document: &Html, name: &str) -> String {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|input| input.value().attr("value"))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}
