//! # Shared Constants
//!
//! Literal values shared between the library and the server. Keeping them here
//! avoids "magic strings" drifting apart between the stages, the handlers and
//! the tests.

/// The model used when the configuration does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Base URL of the hosted Gemini API. The model and method are appended per request.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Returned by the research stage when the service produced no usable text.
pub const NO_RESEARCH_DATA: &str = "No research data found.";

/// Returned by the validation stage when the service produced no usable text.
pub const NO_VALIDATED_DATA: &str = "No validated data available.";

/// Prefix of the text produced when the research call fails.
pub const RESEARCH_ERROR_TAG: &str = "[research error]";

/// Prefix of the text produced when the validation call fails.
pub const VALIDATION_ERROR_TAG: &str = "[validation error]";

/// File name offered for the downloaded result.
pub const EXPORT_FILE_NAME: &str = "validated_research.txt";

/// Media type of the downloaded result.
pub const EXPORT_MEDIA_TYPE: &str = "text/plain; charset=utf-8";
