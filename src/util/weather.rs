//! Presentation helpers for the weather view.

#[cfg(test)]
#[path = "weather_test.rs"]
mod weather_test;

/// Emoji for an OpenWeatherMap condition description.
#[must_use]
pub fn weather_emoji(description: &str) -> Option<&'static str> {
    let emoji = match description.to_lowercase().as_str() {
        "clear sky" => "☀️",
        "few clouds" => "🌤",
        "scattered clouds" => "⛅️",
        "broken clouds" => "🌥",
        "overcast clouds" => "☁️",
        "mist" | "fog" => "🌫️",
        "rain" | "heavy rain" => "🌧️",
        "light rain" | "drizzle" => "🌦",
        "thunderstorm" => "⛈️",
        "snow" | "light snow" | "hail" => "🌨️",
        "heavy snow" => "❄️",
        "sleet" => "🌧️❄️",
        "windy" => "💨",
        "shower rain" => "🌧️",
        _ => return None,
    };
    Some(emoji)
}

/// Kelvin to a one-decimal Celsius label, e.g. `"10.0 °C"`.
#[must_use]
pub fn format_temperature(kelvin: f64) -> String {
    format!("{:.1} °C", kelvin - 273.15)
}

/// Upper-case the first letter of every whitespace-separated word.
#[must_use]
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
