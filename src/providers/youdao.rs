//! Youdao open API client (v3 signature)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::TranslationProvider;
use crate::core::client::{decode_or_default, HttpTransport};
use crate::core::errors::Result;
use crate::core::models::Credentials;
use crate::core::signer::{new_nonce, unix_timestamp, youdao_sign};
use crate::render::Translation;

/// Production endpoint
pub const YOUDAO_API_URL: &str = "https://openapi.youdao.com/api";

const SIGN_TYPE: &str = "v3";

/// Signed form payload; serialized field names are the API's
#[derive(Debug, Clone, Serialize)]
pub struct YoudaoRequest {
    q: String,
    from: String,
    to: String,
    #[serde(rename = "appKey")]
    app_key: String,
    salt: String,
    sign: String,
    #[serde(rename = "signType")]
    sign_type: &'static str,
    curtime: String,
}

impl YoudaoRequest {
    /// Build and sign a request with a fresh salt and the current time
    pub fn new(creds: &Credentials, from: &str, to: &str, q: &str) -> Self {
        Self::from_parts(creds, from, to, q, new_nonce(), unix_timestamp())
    }

    /// Build and sign a request from an explicit salt and timestamp
    pub fn from_parts(
        creds: &Credentials,
        from: &str,
        to: &str,
        q: &str,
        salt: String,
        curtime: String,
    ) -> Self {
        let sign = youdao_sign(&creds.app_key, &creds.app_secret, q, &salt, &curtime);

        Self {
            q: q.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            app_key: creds.app_key.clone(),
            salt,
            sign,
            sign_type: SIGN_TYPE,
            curtime,
        }
    }

    /// Query text as sent
    pub fn query(&self) -> &str {
        &self.q
    }

    /// `appKey` field
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Per-request nonce
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Unix seconds mixed into the signature
    pub fn curtime(&self) -> &str {
        &self.curtime
    }

    /// Lowercase hex SHA-256 signature
    pub fn sign(&self) -> &str {
        &self.sign
    }

    /// Post the form once; consumes the request
    pub async fn send(self, transport: &HttpTransport, endpoint: &str) -> Result<YoudaoResponse> {
        debug!("Youdao lookup: q={:?} from={} to={}", self.q, self.from, self.to);
        let body = transport.post_form(endpoint, &self).await?;
        Ok(decode_or_default(&body))
    }
}

/// Web-derived phrase suggestion
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WebEntry {
    /// Phrase
    pub key: String,
    /// Its translations
    pub value: Vec<String>,
}

/// Phonetics and dictionary explanations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BasicBlock {
    /// American pronunciation, printed as `美:`
    #[serde(rename = "us-phonetic")]
    pub us_phonetic: String,
    /// Default pronunciation; not printed
    pub phonetic: String,
    /// British pronunciation, printed as `英:`
    #[serde(rename = "uk-phonetic")]
    pub uk_phonetic: String,
    /// British audio URL
    #[serde(rename = "uk-speech")]
    pub uk_speech: String,
    /// American audio URL
    #[serde(rename = "us-speech")]
    pub us_speech: String,
    /// Dictionary senses, printed under `[延伸]`
    pub explains: Vec<String>,
}

/// Response body; every field falls back to its zero value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct YoudaoResponse {
    /// `"0"` on success
    #[serde(rename = "errorCode")]
    pub error_code: String,
    /// Query echoed back by the service
    pub query: String,
    /// Main translations, printed under `[翻译]`
    pub translation: Vec<String>,
    /// Phonetics and explanations; only present for dictionary words
    pub basic: BasicBlock,
    /// Web phrases, printed under `[网络]`
    pub web: Vec<WebEntry>,
    /// Language pair such as `en2zh-CHS`
    #[serde(rename = "l")]
    pub lang: String,
    /// Audio URL for the translation
    #[serde(rename = "tSpeakUrl")]
    pub t_speak_url: String,
    /// Audio URL for the query
    #[serde(rename = "speakUrl")]
    pub speak_url: String,
    /// Normalized query forms
    #[serde(rename = "returnPhrase")]
    pub return_phrase: Vec<String>,
}

impl YoudaoResponse {
    /// `"0"` is the only success code
    pub fn is_success(&self) -> bool {
        self.error_code == "0"
    }
}

/// Youdao translation provider
#[derive(Debug, Clone)]
pub struct YoudaoProvider {
    credentials: Credentials,
    transport: HttpTransport,
    endpoint: String,
}

impl YoudaoProvider {
    /// Provider posting to [`YOUDAO_API_URL`]
    pub fn new(credentials: Credentials, transport: HttpTransport) -> Self {
        Self {
            credentials,
            transport,
            endpoint: YOUDAO_API_URL.to_string(),
        }
    }

    /// Post to `endpoint` instead of the production URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl TranslationProvider for YoudaoProvider {
    async fn translate(&self, query: &str, from: &str, to: &str) -> Result<Translation> {
        let request = YoudaoRequest::new(&self.credentials, from, to, query);
        let response = request.send(&self.transport, &self.endpoint).await?;
        Ok(Translation::Youdao(response))
    }

    fn name(&self) -> &str {
        "youdao"
    }
}
