use crate::utils::error::{FranchiseError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_listen_addr(field_name: &str, addr: &str) -> Result<()> {
    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|e| FranchiseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FranchiseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FranchiseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(FranchiseError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FranchiseError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_listen_addr() {
        assert!(validate_listen_addr("listen", "0.0.0.0:8080").is_ok());
        assert!(validate_listen_addr("listen", "[::1]:3000").is_ok());
        assert!(validate_listen_addr("listen", "localhost").is_err());
        assert!(validate_listen_addr("listen", "").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("path", "./data/franchises.redb").is_ok());
        assert!(validate_path("path", "").is_err());
        assert!(validate_path("path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("backend", "redb", &["memory", "redb"]).is_ok());
        assert!(validate_one_of("backend", "mongo", &["memory", "redb"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(5);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("x", &present).unwrap(), 5);
        assert!(matches!(
            validate_required_field("x", &missing),
            Err(FranchiseError::MissingConfigError { .. })
        ));
    }
}
