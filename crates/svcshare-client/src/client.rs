//! Transport invoker: seals a business payload into a signed envelope, POSTs
//! it to the platform and opens the reply.

use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, info, trace, warn};

use svcshare_core::{
    defaults, request_id, Config, Error, RequestMessage, ResponseMessage, Result, SignaturePolicy,
};
use svcshare_crypto::{sign, verify, AesEcbCipher, PrivateKey, PublicKey, SymmetricCipher};

/// ServiceShare platform client.
///
/// Holds validated configuration, parsed keys and a pooled HTTP client. All
/// state is read-only after construction, so one instance can be shared
/// across tasks behind `Arc` or a plain reference.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
    cipher: AesEcbCipher,
    private_key: PrivateKey,
    platform_key: PublicKey,
}

impl Client {
    /// Validate `config`, parse both keys and build the HTTP client.
    pub fn new(mut config: Config) -> Result<Self> {
        config.validate()?;

        let cipher = AesEcbCipher::new(config.aes_key.as_bytes())
            .map_err(|e| Error::from_crypto("aes_key", e))?;
        let private_key = PrivateKey::parse(&config.private_key)
            .map_err(|e| Error::from_crypto("private_key", e))?;
        let platform_key = PublicKey::parse(&config.platform_public_key)
            .map_err(|e| Error::from_crypto("platform_public_key", e))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            merchant_id = %config.merchant_id,
            version = %config.version,
            timeout_secs = config.timeout.as_secs(),
            "Initializing ServiceShare client"
        );

        Ok(Self {
            config,
            http,
            cipher,
            private_key,
            platform_key,
        })
    }

    /// Build a client from `SS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encrypt a JSON text with the shared key.
    pub fn encrypt_payload(&self, plaintext: &str) -> Result<String> {
        self.cipher
            .encrypt(plaintext)
            .map_err(|e| Error::from_crypto("payload", e))
    }

    /// Decrypt a base64 ciphertext with the shared key.
    pub fn decrypt_payload(&self, ciphertext: &str) -> Result<String> {
        self.cipher
            .decrypt(ciphertext)
            .map_err(|e| Error::from_crypto("payload", e))
    }

    /// Build the signed request envelope for `payload` without sending it.
    pub fn seal<T>(&self, fun_code: &str, payload: &T) -> Result<RequestMessage>
    where
        T: Serialize + ?Sized,
    {
        let req_id = request_id::generate(self.config.request_id);

        let plaintext = serde_json::to_string(payload)
            .map_err(|e| Error::Serialization(format!("failed to serialize payload: {}", e)))?;

        let req_data = self
            .cipher
            .encrypt(&plaintext)
            .map_err(|e| Error::from_crypto("request data", e))?;

        let mut message = RequestMessage::new(
            req_id,
            fun_code,
            &self.config.merchant_id,
            &self.config.version,
            req_data,
        );
        message.sign = sign(&message.req_data, &self.private_key)
            .map_err(|e| Error::from_crypto("request data", e))?;

        Ok(message)
    }

    /// Call operation `fun_code` with `payload` and return the decrypted reply
    /// JSON, or an empty string when the platform sent no data.
    pub async fn execute<T>(&self, fun_code: &str, payload: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let start = Instant::now();

        let request = self.seal(fun_code, payload)?;
        let body = request.to_json()?;

        debug!(
            request_id = %request.req_id,
            fun_code,
            body_len = body.len(),
            envelope = %body,
            "Sending envelope"
        );

        let response = self
            .http
            .post(&self.config.base_url)
            .header(CONTENT_TYPE, defaults::CONTENT_TYPE)
            .header(ACCEPT, defaults::ACCEPT)
            .body(body)
            .send()
            .await
            .map_err(|e| Error::RequestFailed(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let raw = response
            .bytes()
            .await
            .map_err(|e| Error::RequestFailed(format!("failed to read response body: {}", e)))?;

        if status != StatusCode::OK {
            let raw_body = String::from_utf8_lossy(&raw);
            error!(
                request_id = %request.req_id,
                fun_code,
                http_status = status.as_u16(),
                raw_body = %raw_body,
                "Platform returned unexpected HTTP status"
            );
            return Err(Error::RequestFailed(format!(
                "unexpected HTTP status {}: {}",
                status.as_u16(),
                raw_body
            )));
        }

        let message = match ResponseMessage::parse(&raw) {
            Ok(message) => message,
            Err(e) => {
                error!(
                    request_id = %request.req_id,
                    fun_code,
                    raw_body = %String::from_utf8_lossy(&raw),
                    error = %e,
                    "Failed to parse response envelope"
                );
                return Err(e);
            }
        };

        debug!(
            request_id = %request.req_id,
            fun_code,
            res_code = %message.res_code,
            res_msg = %message.res_msg,
            body_len = raw.len(),
            "Received envelope"
        );

        let (plaintext, verified) = self.open(&request.req_id, fun_code, message)?;

        info!(
            request_id = %request.req_id,
            fun_code,
            signature_verified = verified,
            duration_ms = start.elapsed().as_millis() as u64,
            "ServiceShare call complete"
        );

        Ok(plaintext)
    }

    /// [`execute`](Self::execute), then parse the reply as `R`. Returns
    /// `None` when the platform sent no data.
    pub async fn execute_json<T, R>(&self, fun_code: &str, payload: &T) -> Result<Option<R>>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let data = self.execute(fun_code, payload).await?;
        if data.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&data).map(Some).map_err(|e| {
            Error::Serialization(format!("failed to parse {} response: {}", fun_code, e))
        })
    }

    /// Check the business code, verify and decrypt. Returns the plaintext and
    /// whether a signature was checked.
    fn open(
        &self,
        req_id: &str,
        fun_code: &str,
        message: ResponseMessage,
    ) -> Result<(String, bool)> {
        if let Some(api_error) = message.api_error() {
            warn!(
                request_id = req_id,
                fun_code,
                res_code = %api_error.code,
                res_msg = %api_error.message,
                "Platform rejected call"
            );
            return Err(Error::Api(api_error));
        }

        let verified = match (message.has_payload(), message.is_signed()) {
            (true, true) => {
                self.verify_platform(&message.res_data, &message.sign, "response signature")?;
                true
            }
            (true, false) if self.config.signature_policy == SignaturePolicy::RequireForPayload => {
                warn!(
                    request_id = req_id,
                    fun_code, "Unsigned response payload rejected by signature policy"
                );
                return Err(Error::Verification(
                    "response signature: payload is unsigned".to_string(),
                ));
            }
            _ => false,
        };

        if !message.has_payload() {
            return Ok((String::new(), verified));
        }

        let plaintext = self
            .cipher
            .decrypt(&message.res_data)
            .map_err(|e| Error::from_crypto("response data", e))?;

        trace!(
            request_id = req_id,
            payload_len = plaintext.len(),
            "Decrypted response payload"
        );

        Ok((plaintext, verified))
    }

    pub(crate) fn verify_platform(&self, data: &str, signature: &str, phase: &str) -> Result<()> {
        verify(data, signature, &self.platform_key).map_err(|e| Error::from_crypto(phase, e))
    }

    pub(crate) fn cipher(&self) -> &AesEcbCipher {
        &self.cipher
    }
}
