use serde::{Deserialize, Serialize};

/// Error codes the backend uses when a bearer credential is no longer valid.
const CREDENTIAL_EXPIRY_CODES: &[&str] = &["token_expired", "invalid_token"];

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, alias = "error", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// True when the code marks an expired or revoked credential, as opposed to
    /// a request that never carried one.
    pub fn is_credential_expiry(&self) -> bool {
        self.code
            .as_deref()
            .map(|code| CREDENTIAL_EXPIRY_CODES.contains(&code))
            .unwrap_or(false)
    }
}

/// OTP send request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpSendRequest {
    pub destination: String,
}

/// OTP send response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpSendResponse {
    pub expiry_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// OTP verify request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyRequest {
    pub destination: String,
    pub code: String,
}

/// OTP verify response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OtpVerifyResponse {
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
