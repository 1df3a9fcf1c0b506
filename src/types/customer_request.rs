use serde::Deserialize;

use crate::error::Error;

pub const NAME_MAX_LEN: usize = 100;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerRequest {
    pub name: Option<String>,
}

impl CustomerRequest {
    pub fn validate(&self) -> Result<String, Error> {
        let name = match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => {
                return Err(Error::InvalidInput(String::from(
                    "Name is required.",
                )))
            },
        };

        if name.chars().count() > NAME_MAX_LEN {
            return Err(Error::InvalidInput(format!(
                "name longer than {} characters",
                NAME_MAX_LEN
            )));
        }

        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_name() {
        let request = CustomerRequest {
            name: Some(String::from("  Ada Lovelace ")),
        };
        assert_eq!(request.validate().unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_validate_requires_name() {
        assert!(CustomerRequest::default().validate().is_err());
        assert!(CustomerRequest {
            name: Some(String::new())
        }
        .validate()
        .is_err());
        assert!(CustomerRequest {
            name: Some("x".repeat(NAME_MAX_LEN + 1))
        }
        .validate()
        .is_err());
    }
}
