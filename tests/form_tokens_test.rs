// tests/form_tokens_test.rs

use selfservice_core::parsers::form::parse_form_tokens;
use selfservice_core::ScraperError;

fn form_page(inputs: &str) -> String {
    format!(
        "<html><body><form method=\"post\" action=\"/oimUi/change-password\">\
         {inputs}\
         <input type=\"password\" name=\"currentPwd\" />\
         <input type=\"password\" name=\"newPwd\" />\
         </form></body></html>"
    )
}

#[test]
fn test_extracts_all_three_tokens() {
    let html = form_page(
        r#"
        <input type="hidden" name="oimUiFormTicket" value="ticket-123" />
        <input type="hidden" name="oimUiUserState" value="state-456" />
        <input type="hidden" name="oimUiTabId" value="ts_2" />
    "#,
    );

    let tokens = parse_form_tokens(&html).unwrap();
    assert_eq!(tokens.form_ticket, "ticket-123");
    assert_eq!(tokens.user_state, "state-456");
    assert_eq!(tokens.tab_id, "ts_2");
}

#[test]
fn test_token_values_are_trimmed() {
    let html = form_page(
        r#"
        <input type="hidden" name="oimUiFormTicket" value="  ticket-123  " />
        <input type="hidden" name="oimUiUserState" value="state-456" />
        <input type="hidden" name="oimUiTabId" value="ts_2" />
    "#,
    );

    let tokens = parse_form_tokens(&html).unwrap();
    assert_eq!(tokens.form_ticket, "ticket-123");
}

#[test]
fn test_each_missing_token_fails() {
    let ticket = r#"<input type="hidden" name="oimUiFormTicket" value="t" />"#;
    let state = r#"<input type="hidden" name="oimUiUserState" value="s" />"#;
    let tab = r#"<input type="hidden" name="oimUiTabId" value="ts_2" />"#;

    for inputs in [
        format!("{state}{tab}"),
        format!("{ticket}{tab}"),
        format!("{ticket}{state}"),
    ] {
        let err = parse_form_tokens(&form_page(&inputs)).unwrap_err();
        assert!(matches!(err, ScraperError::FormUnavailable));
    }
}

#[test]
fn test_empty_token_value_fails() {
    let html = form_page(
        r#"
        <input type="hidden" name="oimUiFormTicket" value="" />
        <input type="hidden" name="oimUiUserState" value="state-456" />
        <input type="hidden" name="oimUiTabId" value="ts_2" />
    "#,
    );

    let err = parse_form_tokens(&html).unwrap_err();
    assert!(matches!(err, ScraperError::FormUnavailable));
}

#[test]
fn test_whitespace_only_token_value_fails() {
    let html = form_page(
        r#"
        <input type="hidden" name="oimUiFormTicket" value="   " />
        <input type="hidden" name="oimUiUserState" value="state-456" />
        <input type="hidden" name="oimUiTabId" value="ts_2" />
    "#,
    );

    let err = parse_form_tokens(&html).unwrap_err();
    assert!(matches!(err, ScraperError::FormUnavailable));
}
