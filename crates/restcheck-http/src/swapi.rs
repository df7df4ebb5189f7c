//! Domain client for SWAPI (the Star Wars API, swapi.dev).
//!
//! Maps semantic operations onto [`HttpClient`] calls with fixed path
//! templates. Nothing here inspects the response; shape and content are the
//! test bodies' business.

use restcheck_config::Settings;

use crate::client::{Headers, HttpClient};
use crate::error::Result;
use crate::response::ApiResponse;

const NO_PARAMS: &[(&str, &str)] = &[];

/// API client for SWAPI.
#[derive(Debug, Clone)]
pub struct SwapiClient {
    http: HttpClient,
    base_url: String,
}

impl SwapiClient {
    /// Creates a client against the configured base URL.
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(settings)?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client from an existing HTTP client and base URL.
    pub fn with_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Films

    pub fn get_all_films(&self, headers: Headers<'_>) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/films/", self.base_url), NO_PARAMS, headers)
    }

    pub fn get_film_by_id(&self, film_id: u32, headers: Headers<'_>) -> Result<ApiResponse> {
        self.http.get(
            &format!("{}/films/{film_id}/", self.base_url),
            NO_PARAMS,
            headers,
        )
    }

    // Planets

    pub fn get_all_planets(&self, headers: Headers<'_>) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/planets/", self.base_url), NO_PARAMS, headers)
    }

    pub fn get_planet_by_id(&self, planet_id: u32, headers: Headers<'_>) -> Result<ApiResponse> {
        self.http.get(
            &format!("{}/planets/{planet_id}/", self.base_url),
            NO_PARAMS,
            headers,
        )
    }

    // People

    pub fn get_all_people(&self, headers: Headers<'_>) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/people/", self.base_url), NO_PARAMS, headers)
    }

    pub fn get_person_by_id(&self, person_id: u32, headers: Headers<'_>) -> Result<ApiResponse> {
        self.http.get(
            &format!("{}/people/{person_id}/", self.base_url),
            NO_PARAMS,
            headers,
        )
    }
}
