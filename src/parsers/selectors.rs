//! Every CSS selector, row label, and form field name the legacy UI couples
//! us to, in one place. When upstream markup drifts, this file and the
//! fixture tests are where the breakage shows up.

/// The user-details table on the self-service page.
pub const USER_DETAILS_TABLE: &str = "table.oim_user-details-table";
pub const DETAILS_ROWS: &str = "tbody > tr";
pub const DETAILS_CELLS: &str = "td, th";
/// First link inside a value cell (used for the ORCID row).
pub const VALUE_CELL_LINK: &str = "a[href]";
/// Definition-description element holding the staff title.
pub const STAFF_TITLE: &str = "dd";

/// Alert banners rendered after a legacy form submission.
pub const SUCCESS_ALERT: &str = ".alert.alert-success";
pub const DANGER_ALERT: &str = ".alert.alert-danger";
pub const ALERT_LIST_ITEM: &str = "li";

// Row labels in the details table, matched exactly after whitespace collapse.
pub const LABEL_FULL_NAME: &str = "Full Name";
pub const LABEL_PRI_NAME: &str = "PRI Name";
pub const LABEL_PRF_NAME: &str = "PRF Name";
pub const LABEL_ALIASES: &str = "Aliases";
pub const LABEL_PERSON_TYPES: &str = "Person Types";
pub const LABEL_EMPLOYEE_ID: &str = "Employee ID";
pub const LABEL_ORCID: &str = "ORCID iD";
pub const LABEL_ALT_EMAIL: &str = "Alternate Email";
pub const LABEL_EMAIL: &str = "Email";
pub const LABEL_PASSWORD_CREATE_DATE: &str = "Password Create Date";
pub const LABEL_PASSWORD_EXPIRE_DATE: &str = "Password Expire Date";
pub const LABEL_DUO_STATUS: &str = "Duo Security Status";
pub const LABEL_PROVISIONED_ACCOUNTS: &str = "Provisioned Accounts";
pub const LABEL_VPN_ACCESS: &str = "VPN Access";
pub const LABEL_WIRELESS_ACCESS: &str = "Wireless Access";
pub const LABEL_ACCOUNT_SUPPRESSION: &str = "Account Suppression";
pub const LABEL_STAFF_DETAILS: &str = "Staff Details";

// Hidden inputs the change-password form requires.
pub const FORM_TICKET_FIELD: &str = "oimUiFormTicket";
pub const USER_STATE_FIELD: &str = "oimUiUserState";
pub const TAB_ID_FIELD: &str = "oimUiTabId";

// Password fields on the change-password form.
pub const CURRENT_PWD_FIELD: &str = "currentPwd";
pub const NEW_PWD_FIELD: &str = "newPwd";
pub const CONFIRM_NEW_PWD_FIELD: &str = "confirmNewPwd";

// Minimal form body the legacy controller accepts as a GET-equivalent POST.
pub const UI_METHOD_FIELD: &str = "oimUiMethod";
pub const UI_METHOD_GET: &str = "GET";
pub const SELF_SERVICE_TAB_ID: &str = "ts_1";
