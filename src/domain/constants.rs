// Fixed protocol context for the OSSVerse marketplace integration.
// These identify the buyer app (BAP) and the provider platform (BPP) and do
// not vary between confirm calls; per-call identifiers live in RequestStamp.
pub const DOMAIN: &str = "Software Assurance";
pub const CORE_VERSION: &str = "1.1.0";
pub const ACTION_CONFIRM: &str = "confirm";

pub const BAP_ID: &str = "bap.ossverse.com";
pub const BAP_URI: &str = "http://bap.ossverse.com";
pub const BPP_ID: &str = "openfort-oasp.ossverse.com";
pub const BPP_URI: &str = "http://openfort-oasp.ossverse.com";

pub const CITY_NAME: &str = "Bangalore";
pub const CITY_CODE: &str = "std:080";
pub const COUNTRY_NAME: &str = "India";
pub const COUNTRY_CODE: &str = "IND";

// Auxiliary user id the confirm endpoint expects alongside the envelope
pub const DEFAULT_USER_ID: &str = "1235";
