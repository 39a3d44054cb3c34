//! Baidu fanyi API client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TranslationProvider;
use crate::core::client::{decode_or_default, HttpTransport};
use crate::core::errors::Result;
use crate::core::models::Credentials;
use crate::core::signer::{baidu_sign, new_nonce};
use crate::render::Translation;

/// Production endpoint
pub const BAIDU_API_URL: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// Signed form payload; serialized field names are the API's
#[derive(Debug, Clone, Serialize)]
pub struct BaiduRequest {
    q: String,
    from: String,
    to: String,
    #[serde(rename = "appid")]
    app_key: String,
    salt: String,
    sign: String,
}

impl BaiduRequest {
    /// Build and sign a request with a fresh salt
    pub fn new(creds: &Credentials, from: &str, to: &str, q: &str) -> Self {
        Self::from_parts(creds, from, to, q, new_nonce())
    }

    /// Build and sign a request from an explicit salt
    pub fn from_parts(creds: &Credentials, from: &str, to: &str, q: &str, salt: String) -> Self {
        let sign = baidu_sign(&creds.app_key, &creds.app_secret, q, &salt);

        Self {
            q: q.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            app_key: creds.app_key.clone(),
            salt,
            sign,
        }
    }

    /// Query text as sent
    pub fn query(&self) -> &str {
        &self.q
    }

    /// `appid` field
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Per-request nonce
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Lowercase hex MD5 signature
    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// Post the form once; consumes the request
    pub async fn send(self, transport: &HttpTransport, endpoint: &str) -> Result<BaiduResponse> {
        debug!("Baidu lookup: q={:?} from={} to={}", self.q, self.from, self.to);
        let body = transport.post_form(endpoint, &self).await?;
        Ok(decode_or_default(&body))
    }
}

/// One translated segment
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransResult {
    /// Source text
    pub src: String,
    /// Translated text
    pub dst: String,
}

/// Response body; every field falls back to its zero value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BaiduResponse {
    /// Detected or requested source language
    pub from: String,
    /// Target language
    pub to: String,
    /// Translated segments, printed under `[翻译]`
    pub trans_result: Vec<TransResult>,
    /// Absent on success
    #[serde(deserialize_with = "string_or_number")]
    pub error_code: String,
    /// Error description, not printed
    pub error_msg: String,
}

impl BaiduResponse {
    /// Success responses carry no error code at all
    pub fn is_success(&self) -> bool {
        self.error_code.is_empty()
    }
}

/// `error_code` is documented as a string but sometimes arrives as a number
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Text(String),
        Number(i64),
        Null(()),
    }

    Ok(match Code::deserialize(deserializer)? {
        Code::Text(s) => s,
        Code::Number(n) => n.to_string(),
        Code::Null(()) => String::new(),
    })
}

/// Baidu translation provider
#[derive(Debug, Clone)]
pub struct BaiduProvider {
    credentials: Credentials,
    transport: HttpTransport,
    endpoint: String,
}

impl BaiduProvider {
    /// Provider posting to [`BAIDU_API_URL`]
    pub fn new(credentials: Credentials, transport: HttpTransport) -> Self {
        Self {
            credentials,
            transport,
            endpoint: BAIDU_API_URL.to_string(),
        }
    }

    /// Post to `endpoint` instead of the production URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TranslationProvider for BaiduProvider {
    async fn translate(&self, query: &str, from: &str, to: &str) -> Result<Translation> {
        let request = BaiduRequest::new(&self.credentials, from, to, query);
        let query = request.query().to_string();
        let response = request.send(&self.transport, &self.endpoint).await?;
        Ok(Translation::Baidu { query, response })
    }

    fn name(&self) -> &str {
        "baidu"
    }
}
