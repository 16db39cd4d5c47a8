//! Error handling traits for the ecpk ecosystem

use core::fmt::Display;

use super::types::{Error, Result};

/// Extension trait mapping foreign errors (codec, arithmetic) into [`Error`]
pub trait ResultExt<T, E>: Sized {
    /// Report the error as malformed input
    fn or_parse_error(self, context: &'static str) -> Result<T>
    where
        E: Display;

    /// Report the error as a bad caller-supplied argument
    fn or_invalid_argument(self, context: &'static str) -> Result<T>
    where
        E: Display;
}

impl<T, E> ResultExt<T, E> for core::result::Result<T, E> {
    fn or_parse_error(self, context: &'static str) -> Result<T>
    where
        E: Display,
    {
        self.map_err(|e| Error::parse(context, e.to_string()))
    }

    fn or_invalid_argument(self, context: &'static str) -> Result<T>
    where
        E: Display,
    {
        self.map_err(|e| Error::invalid_argument(context, e.to_string()))
    }
}
