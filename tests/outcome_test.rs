// tests/outcome_test.rs

use selfservice_core::parsers::outcome::parse_change_password_outcome;

#[test]
fn test_success_banner_with_text() {
    let html = r#"<html><body>
        <div class="alert alert-success">Your password has been updated.</div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(outcome.success);
    assert_eq!(
        outcome.message.as_deref(),
        Some("Your password has been updated.")
    );
}

#[test]
fn test_banner_list_items_join_with_spaces() {
    // Legacy validation errors render as a bulleted list inside the banner.
    let html = r#"<html><body>
        <div class="alert alert-danger">
            <ul>
                <li>Password must be at least 12 characters.</li>
                <li>Password must contain a digit.</li>
            </ul>
        </div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(!outcome.success);
    assert_eq!(
        outcome.message.as_deref(),
        Some("Password must be at least 12 characters. Password must contain a digit.")
    );
}

#[test]
fn test_success_banner_list_items() {
    let html = r#"<html><body>
        <div class="alert alert-success"><li>A</li><li>B</li></div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("A B"));
}

#[test]
fn test_empty_success_banner_gets_default_message() {
    let html = r#"<html><body>
        <div class="alert alert-success">   </div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(outcome.success);
    assert_eq!(
        outcome.message.as_deref(),
        Some("Password changed successfully.")
    );
}

#[test]
fn test_empty_failure_banner_gets_default_message() {
    let html = r#"<html><body>
        <div class="alert alert-danger"></div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(!outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Password change failed."));
}

#[test]
fn test_success_banner_wins_over_failure_banner() {
    let html = r#"<html><body>
        <div class="alert alert-success">Done.</div>
        <div class="alert alert-danger">Stale error from a previous attempt.</div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Done."));
}

#[test]
fn test_no_banner_is_tentative_success() {
    // The legacy system does not always render a banner after a submit.
    let html = "<html><body><p>Change Password</p></body></html>";

    let outcome = parse_change_password_outcome(html);
    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Password change submitted."));
}

#[test]
fn test_plain_alert_class_is_not_a_banner() {
    let html = r#"<html><body>
        <div class="alert">Informational note, not an outcome.</div>
    </body></html>"#;

    let outcome = parse_change_password_outcome(html);
    assert!(outcome.success);
    assert_eq!(outcome.message.as_deref(), Some("Password change submitted."));
}
