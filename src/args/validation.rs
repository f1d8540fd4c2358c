use super::types::Args;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) URL with a host.
pub fn check_http_url(value: &str) -> Result<String, String> {
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| format!("'{value}' must start with http:// or https://"))?;
    if rest.split('/').next().is_none_or(str::is_empty) {
        return Err(format!("'{value}' has no host"));
    }
    Ok(value.to_string())
}

impl Args {
    /// Checks that span more than one flag or that clap cannot express.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the timeout or session ttl is zero, or the default
    /// owner id is not numeric.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout-secs must be greater than zero".to_string());
        }
        if self.session_ttl_secs == 0 {
            return Err("session-ttl-secs must be greater than zero".to_string());
        }
        let owner = self.default_owner_id.trim();
        if !owner.is_empty() && owner.parse::<i64>().is_err() {
            return Err(format!("default-owner-id '{owner}' must be numeric"));
        }
        if self.source_url == self.destination_url {
            return Err("source-url and destination-url must differ".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn urls_need_scheme_and_host() {
        assert!(check_http_url("https://feed.example.com").is_ok());
        assert!(check_http_url("ftp://feed.example.com").is_err());
        assert!(check_http_url("http://").is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let args = Args::parse_from([
            "rusty-golf-relay",
            "--source-url",
            "https://source.example.com",
            "--destination-url",
            "https://dest.example.com",
            "--timeout-secs",
            "0",
        ]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn session_ttl_defaults_and_rejects_zero() {
        let base = [
            "rusty-golf-relay",
            "--source-url",
            "https://source.example.com",
            "--destination-url",
            "https://dest.example.com",
        ];
        let args = Args::parse_from(base);
        assert_eq!(args.session_ttl_secs, 3600);
        assert!(args.validate().is_ok());

        let args = Args::parse_from(base.iter().copied().chain(["--session-ttl-secs", "0"]));
        assert!(args.validate().is_err());
    }

    #[test]
    fn owner_id_must_be_numeric() {
        let args = Args::parse_from([
            "rusty-golf-relay",
            "--source-url",
            "https://source.example.com",
            "--destination-url",
            "https://dest.example.com",
            "--default-owner-id",
            "abc",
        ]);
        assert!(args.validate().is_err());
    }
}
