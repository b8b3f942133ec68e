//! Value parsers for CLI arguments
//!
//! Checks clap cannot express on its own. Each function doubles as a
//! `value_parser` and reports problems as a plain message.

use std::net::IpAddr;
use std::path::PathBuf;

/// Longest hostname DNS allows
const MAX_HOSTNAME_LEN: usize = 253;

/// Port in 1..=65535
pub fn validate_port(raw: &str) -> Result<u16, String> {
    match raw.parse::<u16>() {
        Ok(0) => Err("Port 0 is not allowed, pick a port between 1 and 65535".to_string()),
        Ok(port) => Ok(port),
        Err(_) => Err(format!("'{}' is not a port number between 1 and 65535", raw)),
    }
}

/// Existing, readable regular file
pub fn validate_config_file_path(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);

    if !path.is_file() {
        return Err(if path.exists() {
            format!("Configuration path is not a file: '{}'", raw)
        } else {
            format!("Configuration file does not exist: '{}'", raw)
        });
    }

    std::fs::File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Cannot read configuration file '{}': {}", raw, e))
}

/// IP address or hostname to bind to
pub fn validate_host_address(raw: &str) -> Result<String, String> {
    let host = raw.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.parse::<IpAddr>().is_ok() {
        return Ok(host.to_string());
    }

    // Dotted digits that failed to parse as an IP are a typo, not a hostname
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(format!("Invalid IPv4 address: '{}'", raw));
    }

    if host.len() > MAX_HOSTNAME_LEN {
        return Err(format!(
            "Host address is too long (maximum {} characters)",
            MAX_HOSTNAME_LEN
        ));
    }

    let valid_labels = host.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !valid_labels {
        return Err(format!("Invalid hostname: '{}'", raw));
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation() {
        for raw in ["1", "80", "5000", "65535"] {
            assert!(validate_port(raw).is_ok(), "Port {} should be valid", raw);
        }
        for raw in ["0", "65536", "-1", "abc", ""] {
            assert!(validate_port(raw).is_err(), "Port '{}' should be invalid", raw);
        }
    }

    #[test]
    fn test_host_validation_valid_hosts() {
        for host in ["localhost", "127.0.0.1", "0.0.0.0", "::1", "db-1.internal", " example.com "] {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }
        assert_eq!(validate_host_address(" example.com ").unwrap(), "example.com");
    }

    #[test]
    fn test_host_validation_invalid_hosts() {
        let too_long = "x".repeat(300);
        for host in ["", "   ", "host with spaces", "999.999.999.999", "-bad.host", too_long.as_str()] {
            assert!(validate_host_address(host).is_err(), "Host '{}' should be invalid", host);
        }
    }

    #[test]
    fn test_config_file_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(validate_config_file_path(missing.to_str().unwrap()).is_err());
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());

        let file = dir.path().join("roster.toml");
        std::fs::write(&file, "[server]\nport = 5000\n").unwrap();
        assert_eq!(validate_config_file_path(file.to_str().unwrap()).unwrap(), file);
    }
}
