use crate::utils::error::{Result, TurnError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TurnError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TurnError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TurnError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Store keys become file names, so they must not escape the store directory.
pub fn validate_store_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;

    if key.contains(['/', '\\', '\0']) || key == "." || key == ".." {
        return Err(TurnError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Key must be a plain name without path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_rule_tokens(field_name: &str, tokens: &[String]) -> Result<()> {
    for (index, token) in tokens.iter().enumerate() {
        let field = format!("{}[{}]", field_name, index);
        validate_non_empty_string(&field, token)?;

        if token.trim() != token {
            return Err(TurnError::InvalidConfigValueError {
                field,
                value: token.clone(),
                reason: "Token cannot start or end with whitespace".to_string(),
            });
        }
    }
    Ok(())
}
