//! Access-token validation against the calculator backend.
//!
//! Validation happens once per process. The result is an `AccessOutcome`
//! value handed to the presentation layer; a failed check is a message to
//! show, not an error that reaches the fee engine.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

const DEFAULT_ENDPOINT: &str =
    "https://wzzucfuixqbjowztqzbr.supabase.co/functions/v1/validate-calculator-token";

const MSG_NO_TOKEN: &str = "No access token provided";
const MSG_INVALID: &str = "Invalid token";
const MSG_UNREACHABLE: &str = "Unable to validate access. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub industry: String,
}

/// Who the calculator link was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<Company>,
}

impl Recipient {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Client")
    }
}

/// Result of one access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessOutcome {
    pub valid: bool,
    pub error: Option<String>,
    pub recipient: Option<Recipient>,
}

impl AccessOutcome {
    pub fn granted(recipient: Option<Recipient>) -> Self {
        Self {
            valid: true,
            error: None,
            recipient,
        }
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
            recipient: None,
        }
    }

    /// Bypass used in development: always valid.
    pub fn dev() -> Self {
        Self::granted(Some(Recipient {
            name: Some("Development User".to_string()),
            email: None,
            company: None,
        }))
    }

    /// Turn a denied outcome into an exit-code-4 error.
    pub fn into_result(self) -> Result<Option<Recipient>, AppError> {
        if self.valid {
            Ok(self.recipient)
        } else {
            let msg = self.error.unwrap_or_else(|| MSG_INVALID.to_string());
            Err(AppError::new(4, format!("Access denied: {msg}")))
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    token: &'a str,
    mark_as_used: bool,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    valid: bool,
    #[serde(default)]
    recipient_name: Option<String>,
    #[serde(default)]
    recipient_email: Option<String>,
    #[serde(default)]
    company: Option<CompanyResponse>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompanyResponse {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    industry: Option<String>,
}

impl From<ValidateResponse> for AccessOutcome {
    fn from(resp: ValidateResponse) -> Self {
        if !resp.valid {
            return AccessOutcome::denied(resp.error.unwrap_or_else(|| MSG_INVALID.to_string()));
        }

        // Empty strings from the backend mean "not set".
        let non_empty = |s: Option<String>| s.filter(|v| !v.is_empty());
        AccessOutcome::granted(Some(Recipient {
            name: non_empty(resp.recipient_name),
            email: non_empty(resp.recipient_email),
            company: resp.company.map(|c| Company {
                name: c.name.unwrap_or_default(),
                industry: c.industry.unwrap_or_default(),
            }),
        }))
    }
}

pub struct AccessClient {
    client: Client,
    endpoint: String,
}

impl AccessClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint from `FEECALC_ACCESS_ENDPOINT` (or `.env`), else the default backend.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let endpoint = std::env::var("FEECALC_ACCESS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the token to the backend. Transport and decode failures become a
    /// denied outcome with a retry message.
    pub fn validate(&self, token: &str, mark_as_used: bool) -> AccessOutcome {
        match self.request(token, mark_as_used) {
            Ok(resp) => resp.into(),
            Err(err) => {
                tracing::error!(endpoint = %self.endpoint, error = %err, "token validation failed");
                AccessOutcome::denied(MSG_UNREACHABLE)
            }
        }
    }

    fn request(&self, token: &str, mark_as_used: bool) -> Result<ValidateResponse, reqwest::Error> {
        self.client
            .post(&self.endpoint)
            .json(&ValidateRequest { token, mark_as_used })
            .send()?
            .json::<ValidateResponse>()
    }
}

/// Decide whether the calculator may be shown.
///
/// Dev mode skips validation. Without a token no request is made. Otherwise
/// the token is validated and marked as used.
pub fn check_access(token: Option<&str>, dev: bool, client: &AccessClient) -> AccessOutcome {
    if dev {
        tracing::warn!("access validation bypassed (dev mode)");
        return AccessOutcome::dev();
    }

    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return AccessOutcome::denied(MSG_NO_TOKEN);
    };

    let outcome = client.validate(token, true);
    tracing::info!(valid = outcome.valid, "access token checked");
    outcome
}
