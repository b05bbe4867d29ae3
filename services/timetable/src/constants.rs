// Env values used by the PTV timetable service.
pub const PTV_DEV_ID: &str = "PTV_DEV_ID";
pub const PTV_API_KEY: &str = "PTV_API_KEY";
pub const PTV_ENDPOINT: &str = "PTV_ENDPOINT";

/// Production host for the timetable service.
pub const DEFAULT_ENDPOINT: &str = "https://timetableapi.ptv.vic.gov.au";

/// API version prefix. Part of the signed byte sequence, so it lives in one
/// place only.
pub const VERSION_PREFIX: &str = "/v3/";
