use crate::error::Result;
use crate::models::{
    ClaimAccountRequest, ClaimAccountResponse, ClientConfig, CreateGuestAccountRequest,
    CreateGuestAccountResponse, LegacyFormTokens, RecoverInternetIdRequest,
    RecoverInternetIdResponse, RecoverPasswordRequest, RecoverPasswordResponse,
    ResetPasswordRequest, ResetPasswordResponse, UserDetails,
};
use crate::parsers::{self, selectors};
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Accept header the legacy controller expects from a browser.
const HTML_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

// Direct-API paths.
const USER_PATH: &str = "/user";
const PASSWORD_RESET_PATH: &str = "/password/reset";
const GUEST_ACCOUNT_PATH: &str = "/guest-account";
const CLAIM_ACCOUNT_PATH: &str = "/claim-account";
const RECOVER_PASSWORD_PATH: &str = "/recover-password";
const RECOVER_INTERNET_ID_PATH: &str = "/recover-internet-id";

// Legacy UI paths.
const SELF_SERVICE_PATH: &str = "/self-service";
const CHANGE_PASSWORD_PATH: &str = "/change-password";

/// The operation surface UI callers program against.
///
/// [`SelfServiceClient`] is the production implementation; tests and
/// storybook-style harnesses substitute their own.
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get_user_details(&self) -> Result<UserDetails>;
    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<ResetPasswordResponse>;
    async fn create_guest_account(
        &self,
        req: &CreateGuestAccountRequest,
    ) -> Result<CreateGuestAccountResponse>;
    async fn claim_account(&self, req: &ClaimAccountRequest) -> Result<ClaimAccountResponse>;
    async fn recover_password(
        &self,
        req: &RecoverPasswordRequest,
    ) -> Result<RecoverPasswordResponse>;
    async fn recover_internet_id(
        &self,
        req: &RecoverInternetIdRequest,
    ) -> Result<RecoverInternetIdResponse>;
}

/// Client for the account self-service system. Depending on configuration
/// it talks to the direct JSON API or drives the legacy server-rendered UI
/// and scrapes the responses.
pub struct SelfServiceClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl SelfServiceClient {
    /// Legacy-HTML mode against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        // The legacy session rides on cookies, so every request shares one jar.
        let cookie_jar = Arc::new(Jar::default());

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .parse()
                .unwrap(),
        );

        let client = reqwest::Client::builder()
            .cookie_provider(cookie_jar)
            .default_headers(headers)
            .build()
            .unwrap();

        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the identity snapshot for the signed-in user.
    pub async fn get_user_details(&self) -> Result<UserDetails> {
        if self.config.use_direct_api {
            let url = format!("{}{}", self.config.base_url, USER_PATH);
            let response = self.client.get(&url).send().await?.error_for_status()?;
            return Ok(response.json().await?);
        }

        self.fetch_and_parse_user_details().await
    }

    /// Submits a password change for the signed-in user.
    ///
    /// No password rules are checked here; policy enforcement is entirely
    /// server-side and comes back as a structured failure.
    pub async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<ResetPasswordResponse> {
        if self.config.use_direct_api {
            return self.post_json(PASSWORD_RESET_PATH, req).await;
        }

        // fetch tokens -> submit -> parse, strictly in that order. A token
        // failure means no submission is ever attempted.
        let tokens = self.fetch_change_password_tokens().await?;
        let html = self.submit_password_change(&tokens, req).await?;
        Ok(parsers::outcome::parse_change_password_outcome(&html))
    }

    pub async fn create_guest_account(
        &self,
        req: &CreateGuestAccountRequest,
    ) -> Result<CreateGuestAccountResponse> {
        self.post_json(GUEST_ACCOUNT_PATH, req).await
    }

    pub async fn claim_account(&self, req: &ClaimAccountRequest) -> Result<ClaimAccountResponse> {
        self.post_json(CLAIM_ACCOUNT_PATH, req).await
    }

    pub async fn recover_password(
        &self,
        req: &RecoverPasswordRequest,
    ) -> Result<RecoverPasswordResponse> {
        self.post_json(RECOVER_PASSWORD_PATH, req).await
    }

    pub async fn recover_internet_id(
        &self,
        req: &RecoverInternetIdRequest,
    ) -> Result<RecoverInternetIdResponse> {
        self.post_json(RECOVER_INTERNET_ID_PATH, req).await
    }

    async fn get_html(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, HTML_ACCEPT)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// GET the self-service page and parse it; on any failure (network,
    /// non-2xx, parse) retry exactly once as the form POST the legacy UI
    /// itself uses, then parse that. A second failure propagates.
    async fn fetch_and_parse_user_details(&self) -> Result<UserDetails> {
        let direct = self
            .get_html(SELF_SERVICE_PATH)
            .await
            .and_then(|html| parsers::user_details::parse_user_details(&html));

        match direct {
            Ok(details) => Ok(details),
            Err(err) => {
                debug!("self-service GET failed ({err}), retrying as form POST");

                let mut params = HashMap::new();
                params.insert(selectors::UI_METHOD_FIELD, selectors::UI_METHOD_GET);
                params.insert(selectors::TAB_ID_FIELD, selectors::SELF_SERVICE_TAB_ID);

                let url = format!("{}{}", self.config.base_url, SELF_SERVICE_PATH);
                let response = self
                    .client
                    .post(&url)
                    .header(ACCEPT, HTML_ACCEPT)
                    .form(&params)
                    .send()
                    .await?
                    .error_for_status()?;

                let html = response.text().await?;
                parsers::user_details::parse_user_details(&html)
            }
        }
    }

    async fn fetch_change_password_tokens(&self) -> Result<LegacyFormTokens> {
        let html = self.get_html(CHANGE_PASSWORD_PATH).await?;
        parsers::form::parse_form_tokens(&html)
    }

    async fn submit_password_change(
        &self,
        tokens: &LegacyFormTokens,
        req: &ResetPasswordRequest,
    ) -> Result<String> {
        let mut params = HashMap::new();
        params.insert(selectors::FORM_TICKET_FIELD, tokens.form_ticket.as_str());
        params.insert(selectors::USER_STATE_FIELD, tokens.user_state.as_str());
        params.insert(selectors::TAB_ID_FIELD, tokens.tab_id.as_str());
        params.insert(selectors::CURRENT_PWD_FIELD, req.current_password.as_str());
        params.insert(selectors::NEW_PWD_FIELD, req.new_password.as_str());
        // The endpoint insists on an explicit confirmation field even though
        // callers have already validated the match.
        params.insert(selectors::CONFIRM_NEW_PWD_FIELD, req.new_password.as_str());

        let url = format!("{}{}", self.config.base_url, CHANGE_PASSWORD_PATH);
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, HTML_ACCEPT)
            .form(&params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// POST a JSON body and decode a structured response. The service
    /// reports validation failures as 4xx with a `success: false` body;
    /// those decode and are returned as responses, not errors.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;

        if let Err(status_err) = response.error_for_status_ref() {
            warn!("{path} returned {}", response.status());
            return match response.json::<T>().await {
                Ok(structured) => Ok(structured),
                Err(_) => Err(status_err.into()),
            };
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ApiClient for SelfServiceClient {
    async fn get_user_details(&self) -> Result<UserDetails> {
        SelfServiceClient::get_user_details(self).await
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<ResetPasswordResponse> {
        SelfServiceClient::reset_password(self, req).await
    }

    async fn create_guest_account(
        &self,
        req: &CreateGuestAccountRequest,
    ) -> Result<CreateGuestAccountResponse> {
        SelfServiceClient::create_guest_account(self, req).await
    }

    async fn claim_account(&self, req: &ClaimAccountRequest) -> Result<ClaimAccountResponse> {
        SelfServiceClient::claim_account(self, req).await
    }

    async fn recover_password(
        &self,
        req: &RecoverPasswordRequest,
    ) -> Result<RecoverPasswordResponse> {
        SelfServiceClient::recover_password(self, req).await
    }

    async fn recover_internet_id(
        &self,
        req: &RecoverInternetIdRequest,
    ) -> Result<RecoverInternetIdResponse> {
        SelfServiceClient::recover_internet_id(self, req).await
    }
}
