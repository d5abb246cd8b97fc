// Protocol context blocks exchanged with the marketplace network.
use serde::{Deserialize, Serialize};

use crate::domain::constants;

/// City or country reference used inside a context location
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub code: String,
}

/// Geographic scope of a request (city + country)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: City,
    pub country: City,
}

impl Location {
    /// The fixed location every confirm request is issued for
    pub fn fixed() -> Self {
        Self {
            city: City {
                name: constants::CITY_NAME.to_string(),
                code: constants::CITY_CODE.to_string(),
            },
            country: City {
                name: constants::COUNTRY_NAME.to_string(),
                code: constants::COUNTRY_CODE.to_string(),
            },
        }
    }
}

/// Context block sent with a confirm request
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    pub domain: String,
    pub location: Location,
    pub action: String,
    pub version: String,
    pub transaction_id: String,
    pub message_id: String,
    pub timestamp: String,
    pub bap_id: String,
    pub bap_uri: String,
    pub bpp_id: String,
    pub bpp_uri: String,
}

/// Context echoed back at the top of a confirm response; same shape as the
/// request context plus a ttl
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfirmContext {
    pub ttl: String,
    pub action: String,
    pub timestamp: String,
    pub message_id: String,
    pub transaction_id: String,
    pub domain: String,
    pub version: String,
    pub bap_id: String,
    pub bap_uri: String,
    pub location: Location,
    pub bpp_id: String,
    pub bpp_uri: String,
}

/// Context attached to each per-provider response record; flat country/city
/// codes and a core_version instead of the nested request form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseContext {
    pub domain: String,
    pub action: String,
    pub core_version: String,
    pub bpp_id: String,
    pub bpp_uri: String,
    pub country: String,
    pub city: String,
    pub bap_id: String,
    pub bap_uri: String,
    pub transaction_id: String,
    pub message_id: String,
    pub ttl: String,
    pub timestamp: String,
}
