/// Process-wide settings, read once at startup and never mutated afterwards
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    // Storage backend
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_access_key_id: String,
    pub s3_secret_access_key: String,
    pub s3_session_token: Option<String>,
    pub s3_path_style: bool,
    /// Lifetime of every presigned URL
    pub presign_expiry_secs: u64,
    // HTTP surface
    pub cors_permissive: bool,
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Config {
    /// Longest expiry SigV4 allows for a presigned URL (7 days)
    pub const MAX_PRESIGN_EXPIRY_SECS: u64 = 604_800;

    /// Read settings from the process environment. Unset variables take
    /// their defaults; set but unparsable values are an error.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let string =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            listen_addr: string("LISTEN_ADDR", "0.0.0.0:8000"),
            s3_endpoint: string("S3_ENDPOINT", "http://localhost:9000"),
            s3_region: string("S3_REGION", "us-east-1"),
            s3_access_key_id: string("S3_ACCESS_KEY_ID", "minioadmin"),
            s3_secret_access_key: string("S3_SECRET_ACCESS_KEY", "minioadmin"),
            s3_session_token: lookup("S3_SESSION_TOKEN").filter(|s| !s.is_empty()),
            s3_path_style: parse_bool(&lookup, "S3_PATH_STYLE", true)?,
            presign_expiry_secs: parse_number(&lookup, "PRESIGN_EXPIRY_SECS", 86_400)?, // 24 hours
            // Development default: every origin, method and header, with credentials
            cors_permissive: parse_bool(&lookup, "CORS_PERMISSIVE", true)?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            max_body_bytes: parse_number(&lookup, "MAX_BODY_BYTES", 1024 * 1024)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_addr.is_empty() {
            return Err("LISTEN_ADDR cannot be empty".to_string());
        }

        if !self.s3_endpoint.starts_with("http://") && !self.s3_endpoint.starts_with("https://") {
            return Err("S3_ENDPOINT must start with http:// or https://".to_string());
        }

        if self.s3_region.is_empty() {
            return Err("S3_REGION cannot be empty".to_string());
        }

        if self.s3_access_key_id.is_empty() || self.s3_secret_access_key.is_empty() {
            return Err("S3_ACCESS_KEY_ID and S3_SECRET_ACCESS_KEY must be set".to_string());
        }

        if self.presign_expiry_secs == 0 || self.presign_expiry_secs > Self::MAX_PRESIGN_EXPIRY_SECS
        {
            return Err(format!(
                "PRESIGN_EXPIRY_SECS must be between 1 and {}",
                Self::MAX_PRESIGN_EXPIRY_SECS
            ));
        }

        if !self.cors_permissive && self.allowed_origins.is_empty() {
            return Err("ALLOWED_ORIGINS must be set when CORS_PERMISSIVE is false".to_string());
        }

        if self.max_body_bytes == 0 {
            return Err("MAX_BODY_BYTES must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn presign_expiry(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.presign_expiry_secs)
    }
}

fn parse_number<F, T>(lookup: &F, name: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{} must be a non-negative integer, got {:?}", name, raw)),
    }
}

fn parse_bool<F>(lookup: &F, name: &str, default: bool) -> Result<bool, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(format!("{} must be a boolean, got {:?}", name, raw)),
        },
    }
}
