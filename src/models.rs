use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity snapshot for the signed-in user, scraped from the legacy
/// self-service page or fetched from the direct API.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    /// The user's full display name.
    pub full_name: String,
    /// Name of record in the personnel registry (PRI/PRF).
    pub pri_name: String,
    /// Directory aliases, e.g. "jmcadams (Ldap)". Empty when none are listed.
    pub aliases: Vec<String>,
    /// Person-type tags such as "POI" or "Staff". Empty when none are listed.
    pub person_types: Vec<String>,
    /// Employee ID, if the user has one.
    pub employee_id: Option<String>,
    /// Canonical ORCID URI taken from the row's link, not its text.
    pub orcid: Option<String>,
    /// Alternate (recovery) email address.
    pub alt_email: Option<String>,
    /// Primary email address.
    pub email: String,
    /// When the current password was created (ISO-8601).
    pub password_create_date: Option<String>,
    /// When the current password expires (ISO-8601). Absent when the
    /// password will not expire.
    pub password_expire_date: Option<String>,
    /// Two-factor enrollment status.
    pub duo_status: Option<DuoStatus>,
    /// Downstream accounts provisioned for this identity.
    pub provisioned_accounts: Vec<ProvisionedAccount>,
    /// Raw "Y"/"N" token from the VPN access row, passed through unvalidated.
    pub vpn_access: Option<String>,
    /// Raw "Y"/"N" token from the wireless access row.
    pub wireless_access: Option<String>,
    /// Raw "Y"/"N" token from the account suppression row.
    pub account_suppression: Option<String>,
    /// Extra details shown for staff users.
    pub staff_details: Option<StaffDetails>,
}

/// Duo two-factor enrollment status.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DuoStatus {
    /// Whether two-factor is required for this account.
    pub required: bool,
    /// When enrollment will be activated, if scheduled (ISO-8601).
    #[serde(default)]
    pub will_activate: Option<String>,
}

/// One provisioned downstream account, e.g. system "AD Account",
/// status "Active".
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProvisionedAccount {
    pub system: String,
    pub status: String,
}

/// Staff-only fields from the details table.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StaffDetails {
    /// Person-of-interest title, if present.
    #[serde(default)]
    pub poi_title: Option<String>,
}

/// The anti-CSRF token set the legacy change-password form requires.
/// All three values must be non-empty before a submission is attempted.
#[derive(Debug, Clone)]
pub struct LegacyFormTokens {
    pub form_ticket: String,
    pub user_state: String,
    pub tab_id: String,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

impl fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("current_password", &"<redacted>")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ResetPasswordResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Country selector on the guest account form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GuestCountry {
    Us,
    Canada,
    Other,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuestAccountRequest {
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub country: GuestCountry,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    /// US state, when `country` is `Us`.
    pub state: Option<String>,
    /// Canadian province, when `country` is `Canada`.
    pub province: Option<String>,
    /// Free-form region for other countries.
    pub other_region: Option<String>,
    pub postal_code: String,
    pub password: String,
}

impl fmt::Debug for CreateGuestAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateGuestAccountRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("country", &self.country)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGuestAccountResponse {
    pub success: bool,
    pub message: Option<String>,
    /// Reference number for the provisioning request, e.g. "GA-12345".
    pub reference_id: Option<String>,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ClaimAccountRequest {
    /// University ID number of the account being claimed.
    pub id_number: String,
    pub ssn_last4: Option<String>,
    /// Birthdate as entered, "YYYY-MM-DD".
    pub birthdate: Option<String>,
    pub password: String,
}

impl fmt::Debug for ClaimAccountRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimAccountRequest")
            .field("id_number", &self.id_number)
            .field("ssn_last4", &"<redacted>")
            .field("birthdate", &self.birthdate)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ClaimAccountResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RecoverPasswordRequest {
    /// Internet ID or alternate email address.
    pub identifier: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RecoverPasswordResponse {
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecoverInternetIdRequest {
    pub alternate_email: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RecoverInternetIdResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Per-feature enablement, mirroring the deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub user: bool,
    pub password: bool,
    pub duo: bool,
    pub google: bool,
    pub accounts: bool,
    pub www: bool,
    pub guest: bool,
    pub guest_nav: bool,
}

impl Default for FeatureFlags {
    /// Default configuration: every feature enabled.
    fn default() -> Self {
        Self {
            user: true,
            password: true,
            duo: true,
            google: true,
            accounts: true,
            www: true,
            guest: true,
            guest_nav: true,
        }
    }
}

/// Deployment configuration for the client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the account service, e.g. "https://idm.example.edu/oimUi".
    pub base_url: String,
    /// When true, use the direct JSON API for user details and password
    /// reset instead of scraping the legacy HTML UI.
    pub use_direct_api: bool,
    pub features: FeatureFlags,
}

impl ClientConfig {
    /// Legacy-HTML mode against the given base URL, all features enabled.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            use_direct_api: false,
            features: FeatureFlags::default(),
        }
    }
}
