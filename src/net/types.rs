//! Request and response bodies for the WhoKnows API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON exactly. Response types only declare
//! the fields the views use; serde ignores the rest so additive server
//! changes do not break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Set for accounts that have not rotated their password since the
    /// October 2024 data leak. Such logins must not start a session.
    #[serde(default)]
    pub require_password_change: bool,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password2: String,
}

/// Body of `POST /change-password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangePasswordRequest {
    pub username: String,
    pub old_password: String,
    pub new_password: String,
    pub repeat_new_password: String,
}

/// Response for endpoints that return nothing useful (`{}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EmptyResponse {}

/// Success body of `GET /search`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchResult>,
}

/// One page matching a search query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Success body of `GET /weather`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherResponse {
    pub data: WeatherData,
}

/// Current conditions as relayed from OpenWeatherMap.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherData {
    /// City name.
    pub name: String,
    pub main: WeatherMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    pub sys: WeatherSys,
    #[serde(default)]
    pub wind: Option<WeatherWind>,
}

impl WeatherData {
    /// The primary condition; OpenWeatherMap lists the dominant one first.
    #[must_use]
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}

/// Temperatures are in Kelvin.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub temp_min: Option<f64>,
    #[serde(default)]
    pub temp_max: Option<f64>,
    #[serde(default)]
    pub pressure: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WeatherSys {
    #[serde(default)]
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct WeatherWind {
    pub speed: f64,
    #[serde(default)]
    pub deg: Option<f64>,
}
