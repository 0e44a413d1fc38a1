/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// http request header carrying the generator API credential
pub const HEADER_KEY: &str = "x-goog-api-key";

/// prefix for every inline image; the original labels all uploads as PNG
/// and lets the browser sniff the real format
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// date shown in the document header, e.g. "14 March 2025"
pub const DATE_FORMAT: &str = "%d %B %Y";

/// urlencoded form payload ceiling; a base64 image rides in the form body,
/// so the actix default of 16 KiB is far too small
pub const FORM_PAYLOAD_LIMIT_BYTES: usize = 8 * 1024 * 1024;
