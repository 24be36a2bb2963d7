use crate::error::{Result, ScraperError};
use crate::models::{DuoStatus, ProvisionedAccount, StaffDetails, UserDetails};
use crate::parsers::{cell_lines, collapsed_text, selectors};
use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};

/// Format the legacy UI renders timestamps in, e.g. "2025-08-07 10:56:28.0".
const LEGACY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const ISO_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses the self-service page into a [`UserDetails`].
///
/// Walks the details table row by row and dispatches on the label cell.
/// Unrecognized labels (addresses, phone numbers, rows added upstream) are
/// skipped. Fails with `NotFound` when the table is absent and with
/// `IncompleteData` when neither an email nor a full name was resolved.
pub fn parse_user_details(html: &str) -> Result<UserDetails> {
    let document = Html::parse_document(html);

    let table_selector = Selector::parse(selectors::USER_DETAILS_TABLE).unwrap();
    let row_selector = Selector::parse(selectors::DETAILS_ROWS).unwrap();
    let cell_selector = Selector::parse(selectors::DETAILS_CELLS).unwrap();
    let link_selector = Selector::parse(selectors::VALUE_CELL_LINK).unwrap();
    let staff_title_selector = Selector::parse(selectors::STAFF_TITLE).unwrap();

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScraperError::NotFound("user details table".to_string()))?;

    let mut details = UserDetails::default();

    for row in table.select(&row_selector) {
        let cells: Vec<ElementRef> = row.select(&cell_selector).collect();
        if cells.len() < 2 {
            continue;
        }

        let label = collapsed_text(cells[0]);
        let value_cell = cells[1];
        let value = collapsed_text(value_cell);

        match label.as_str() {
            selectors::LABEL_FULL_NAME => details.full_name = value,
            selectors::LABEL_PRI_NAME | selectors::LABEL_PRF_NAME => details.pri_name = value,
            selectors::LABEL_ALIASES => details.aliases = split_list(value_cell),
            selectors::LABEL_PERSON_TYPES => details.person_types = split_list(value_cell),
            selectors::LABEL_EMPLOYEE_ID => {
                details.employee_id = (!value.is_empty()).then_some(value);
            }
            selectors::LABEL_ORCID => {
                // The cell text is a display form; the link href carries the
                // canonical URI.
                details.orcid = value_cell
                    .select(&link_selector)
                    .next()
                    .and_then(|link| link.value().attr("href"))
                    .map(str::to_string)
                    .filter(|href| !href.is_empty());
            }
            selectors::LABEL_ALT_EMAIL => {
                details.alt_email = (!value.is_empty()).then_some(value);
            }
            selectors::LABEL_EMAIL => details.email = value,
            selectors::LABEL_PASSWORD_CREATE_DATE => {
                details.password_create_date = normalize_timestamp(&value);
            }
            selectors::LABEL_PASSWORD_EXPIRE_DATE => {
                details.password_expire_date = normalize_timestamp(&value);
            }
            selectors::LABEL_DUO_STATUS => {
                details.duo_status = Some(DuoStatus {
                    required: value.to_lowercase().contains("required"),
                    will_activate: None,
                });
            }
            selectors::LABEL_PROVISIONED_ACCOUNTS => {
                details.provisioned_accounts = cell_lines(value_cell)
                    .iter()
                    .map(|line| split_account_line(line))
                    .collect();
            }
            selectors::LABEL_VPN_ACCESS => {
                details.vpn_access = (!value.is_empty()).then_some(value);
            }
            selectors::LABEL_WIRELESS_ACCESS => {
                details.wireless_access = (!value.is_empty()).then_some(value);
            }
            selectors::LABEL_ACCOUNT_SUPPRESSION => {
                details.account_suppression = (!value.is_empty()).then_some(value);
            }
            selectors::LABEL_STAFF_DETAILS => {
                let poi_title = value_cell
                    .select(&staff_title_selector)
                    .next()
                    .map(collapsed_text)
                    .filter(|title| !title.is_empty());
                details.staff_details = Some(StaffDetails { poi_title });
            }
            // Un-mapped rows (addresses, phones, etc.) are ignored.
            _ => {}
        }
    }

    if details.email.is_empty() && details.full_name.is_empty() {
        return Err(ScraperError::IncompleteData);
    }

    Ok(details)
}

/// Splits a cell holding a comma- or newline-separated list.
fn split_list(cell: ElementRef<'_>) -> Vec<String> {
    cell_lines(cell)
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits a provisioned-account line at its last space. System names may
/// contain spaces ("Google Account Active") but status values do not, so
/// the split is right-anchored.
fn split_account_line(line: &str) -> ProvisionedAccount {
    match line.rfind(' ') {
        Some(idx) if idx > 0 => ProvisionedAccount {
            system: line[..idx].trim().to_string(),
            status: line[idx + 1..].trim().to_string(),
        },
        _ => ProvisionedAccount {
            system: line.to_string(),
            status: String::new(),
        },
    }
}

/// Rewrites a legacy timestamp to ISO-8601. "Will not expire" (any case)
/// and empty cells become `None`; anything unrecognized passes through
/// unchanged on the assumption it is already parseable downstream.
fn normalize_timestamp(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.to_lowercase().contains("will not expire") {
        return None;
    }

    match NaiveDateTime::parse_from_str(value, LEGACY_TIMESTAMP_FORMAT) {
        Ok(timestamp) => Some(timestamp.format(ISO_TIMESTAMP_FORMAT).to_string()),
        Err(_) => Some(value.to_string()),
    }
}
