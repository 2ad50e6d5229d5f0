use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row that was just written could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Kind of record, e.g. "Station"
        entity: &'static str,
        /// Primary key that was written
        id: i32,
    },

    /// Failure to render a license QR code
    #[error("Failed to encode QR code for '{value}': {reason}")]
    QrEncoding {
        /// The text that was being encoded
        value: String,
        /// The reason for the encoding failure
        reason: String,
    },

    /// Adding a duration to a date left chrono's representable range
    #[error("Date overflow adding {months} months")]
    DateOverflow {
        /// Number of months that were added
        months: i32,
    },

    /// The file service accepted an upload but its response carried no file URL
    #[error("File service response for '{file_name}' has no URL")]
    UploadWithoutUrl {
        /// Name of the uploaded file
        file_name: String,
    },

    /// The auth route rate limiter settings were rejected
    #[error("Invalid rate limiter configuration")]
    RateLimiterConfig,
}
