use crate::models::ResetPasswordResponse;
use crate::parsers::{collapsed_text, selectors};
use scraper::{ElementRef, Html, Selector};

const SUCCESS_DEFAULT: &str = "Password changed successfully.";
const FAILURE_DEFAULT: &str = "Password change failed.";
const SUBMITTED_DEFAULT: &str = "Password change submitted.";

/// Interprets the HTML the legacy form returns after a password-change
/// submission. A success banner wins over a failure banner; when neither
/// is rendered the submission is reported as a tentative success, since
/// the legacy system does not always show one.
pub fn parse_change_password_outcome(html: &str) -> ResetPasswordResponse {
    let document = Html::parse_document(html);

    let success_selector = Selector::parse(selectors::SUCCESS_ALERT).unwrap();
    let danger_selector = Selector::parse(selectors::DANGER_ALERT).unwrap();

    if let Some(alert) = document.select(&success_selector).next() {
        return ResetPasswordResponse {
            success: true,
            message: Some(alert_message(alert, SUCCESS_DEFAULT)),
        };
    }

    if let Some(alert) = document.select(&danger_selector).next() {
        return ResetPasswordResponse {
            success: false,
            message: Some(alert_message(alert, FAILURE_DEFAULT)),
        };
    }

    ResetPasswordResponse {
        success: true,
        message: Some(SUBMITTED_DEFAULT.to_string()),
    }
}

/// Message text of an alert banner. Validation errors arrive as a bulleted
/// list; their items are joined with single spaces. A banner with no usable
/// text falls back to the given default.
fn alert_message(alert: ElementRef<'_>, default: &str) -> String {
    let item_selector = Selector::parse(selectors::ALERT_LIST_ITEM).unwrap();

    let items: Vec<String> = alert
        .select(&item_selector)
        .map(collapsed_text)
        .filter(|text| !text.is_empty())
        .collect();

    let message = if items.is_empty() {
        collapsed_text(alert)
    } else {
        items.join(" ")
    };

    if message.is_empty() {
        default.to_string()
    } else {
        message
    }
}
