use reqwest::{Error, IntoUrl, Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct NewAccount<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
    pub job_role: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct VerifyOtp<'a, 'b> {
    email: &'a str,
    otp: &'b str,
}

#[derive(Debug, Serialize, Deserialize)]
struct Credentials<'a, 'b> {
    email: &'a str,
    password: &'b str,
}

#[derive(Debug, Serialize, Deserialize)]
struct Email<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct ResetPassword<'a, 'b> {
    reset_token: &'a str,
    new_password: &'b str,
    new_password2: &'b str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
struct ResetTokenResponse {
    reset_token: String,
}

/// Error body of the backend: `detail` for most endpoints, `message` for a few.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthError {
    pub http_status: Option<u16>,
    pub error: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(status) = self.http_status {
            write!(f, "{}: {}", status, self.error)
        } else {
            write!(f, "{}", self.error)
        }
    }
}

impl From<Error> for AuthError {
    fn from(value: Error) -> Self {
        AuthError {
            http_status: None,
            error: value.to_string(),
        }
    }
}

impl AuthError {
    async fn from_response(response: Response) -> Self {
        let status: u16 = response.status().into();
        let error = match response.text().await {
            Ok(body) => match serde_json::from_str::<ErrorBody>(&body) {
                Ok(ErrorBody {
                    detail: Some(detail),
                    ..
                }) => detail,
                Ok(ErrorBody {
                    message: Some(message),
                    ..
                }) => message,
                _ => body,
            },
            Err(e) => e.to_string(),
        };
        AuthError {
            http_status: Some(status),
            error,
        }
    }
}

/// Client for the unauthenticated endpoints of the backend auth API.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    url: String,
}

impl AuthClient {
    pub fn new(url: String) -> Self {
        AuthClient {
            http: reqwest::Client::new(),
            url,
        }
    }

    fn request<U: IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("worknet-gui/{}", crate::VERSION));
        tracing::debug!("Sending http request: {:?}", req);
        req
    }

    async fn check(&self, response: Response) -> Result<Response, AuthError> {
        if !response.status().is_success() {
            return Err(AuthError::from_response(response).await);
        }
        Ok(response)
    }

    /// Create a pending account. The backend emails an OTP to the given
    /// address; the account stays inactive until it is verified.
    pub async fn register(&self, account: &NewAccount<'_>) -> Result<(), AuthError> {
        let response = self
            .request(Method::POST, format!("{}/auth/register/", self.url))
            .json(account)
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// Activate a pending account with the OTP received by email.
    pub async fn verify_registration(&self, email: &str, otp: &str) -> Result<(), AuthError> {
        let response = self
            .request(Method::POST, format!("{}/auth/register/verify/", self.url))
            .json(&VerifyOtp { email, otp })
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let response = self
            .request(Method::POST, format!("{}/auth/login/", self.url))
            .json(&Credentials { email, password })
            .send()
            .await?;
        Ok(self.check(response).await?.json().await?)
    }

    pub async fn resend_otp(&self, email: &str) -> Result<(), AuthError> {
        let response = self
            .request(Method::POST, format!("{}/auth/resend-otp/", self.url))
            .json(&Email { email })
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    pub async fn forgot_password_request(&self, email: &str) -> Result<(), AuthError> {
        let response = self
            .request(
                Method::POST,
                format!("{}/auth/forgot-password/request/", self.url),
            )
            .json(&Email { email })
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }

    /// Validate a reset OTP. The returned token is the credential for the
    /// final reset call and is only held in memory by the caller.
    pub async fn forgot_password_verify(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<String, AuthError> {
        let response = self
            .request(
                Method::POST,
                format!("{}/auth/forgot-password/verify/", self.url),
            )
            .json(&VerifyOtp { email, otp })
            .send()
            .await?;
        let res: ResetTokenResponse = self.check(response).await?.json().await?;
        Ok(res.reset_token)
    }

    /// The backend expects the new password twice.
    pub async fn forgot_password_reset(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let response = self
            .request(
                Method::POST,
                format!("{}/auth/forgot-password/reset/", self.url),
            )
            .json(&ResetPassword {
                reset_token,
                new_password,
                new_password2: new_password,
            })
            .send()
            .await?;
        self.check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_pair_parsing() {
        let pair: TokenPair = serde_json::from_value(serde_json::json!({
            "access": "eyJhbGciOiJIUzI1NiJ9.a.b",
            "refresh": "eyJhbGciOiJIUzI1NiJ9.c.d"
        }))
        .unwrap();
        assert_eq!(pair.access, "eyJhbGciOiJIUzI1NiJ9.a.b");
        assert_eq!(pair.refresh, "eyJhbGciOiJIUzI1NiJ9.c.d");
    }

    #[test]
    fn error_body_detail_over_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "OTP expired or invalid"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("OTP expired or invalid"));
        assert_eq!(body.message, None);
    }

    #[test]
    fn new_account_payload_shape() {
        let account = NewAccount {
            first_name: "Ann",
            last_name: "Doe",
            email: "ann@x.com",
            password: "secret1",
            confirm_password: "secret1",
            job_role: "employee",
        };
        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["first_name"], "Ann");
        assert_eq!(value["confirm_password"], "secret1");
        assert_eq!(value["job_role"], "employee");
    }
}
