use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::CreatureLookup;
use crate::config::ApiConfig;
use crate::error::LookupError;
use crate::models::{CreatureRecord, RawCreature, RawTypeListing};

/// Characters left as-is in a path segment. Creature names use `-` (e.g. `mr-mime`).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Blocking client for the PokeAPI REST endpoints
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    /// Full request URL for `resource` and a user-typed key. The key is trimmed
    /// and lower-cased before it is encoded.
    pub fn resource_url(&self, resource: &str, key: &str) -> Result<String, LookupError> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(format!("{}/{}/{}", self.base_url, resource, utf8_percent_encode(&key, PATH_SEGMENT)))
    }

    fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, LookupError> {
        debug!(%url, "lookup request");

        let response = match self.http.get(&url).send() {
            Ok(r) => r,
            Err(source) => return Err(LookupError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status { url, status });
        }

        response.json::<T>().map_err(|source| LookupError::Decode { url, source })
    }
}

impl CreatureLookup for PokeApiClient {
    fn fetch_by_name_or_id(&self, query: &str) -> Result<CreatureRecord, LookupError> {
        let url = self.resource_url("pokemon", query)?;
        self.get_json::<RawCreature>(url).map(CreatureRecord::from)
    }

    fn fetch_by_type(&self, type_name: &str) -> Result<Vec<String>, LookupError> {
        let url = self.resource_url("type", type_name)?;
        self.get_json::<RawTypeListing>(url).map(RawTypeListing::into_names)
    }
}
