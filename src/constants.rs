/// Envelope code that signals application-level success
pub const SUCCESS_CODE: i64 = 200;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "envelope-client/0.3.0";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default time-to-live in seconds for cached response bodies
///
/// Applied when the caller does not pass an explicit TTL and nothing is
/// configured in the environment.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
/// Default base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
