//! Validation utilities for key operations

use super::{Error, Result};

/// Validate a caller-supplied parameter
pub fn argument(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_argument(context, message));
    }
    Ok(())
}

/// Validate that the entity holds the material an operation needs
pub fn state(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_state(context, message));
    }
    Ok(())
}

/// Validate structure of decoded input
pub fn parse(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::parse(context, message));
    }
    Ok(())
}

/// Validate that a curve or algorithm is compiled in
pub fn feature(condition: bool, feature: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::unsupported(feature));
    }
    Ok(())
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::parse(
            context,
            format!("invalid length (expected {}, got {})", expected, actual),
        ));
    }
    Ok(())
}
