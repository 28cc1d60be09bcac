// src/bot/render.rs - Reply texts

use crate::bot::menu::main_menu;
use crate::bot::session::Mode;
use crate::integrations::types::Reply;
use crate::weather::{CurrentWeather, Location, WeatherError, SEARCH_LIMIT};

const COUNTRY_PLACEHOLDER: &str = "N/A";

pub fn welcome() -> Reply {
    Reply::plain("🌦 Welcome to WeatherBot!\nChoose an action:").with_keyboard(main_menu())
}

pub fn help() -> Reply {
    Reply::html(
        "ℹ️ <b>Bot help</b>\n\n\
         • <b>🌤 Weather now</b> - current weather for an exact city name\n\
         • <b>🔍 Search city</b> - find a city by partial name, then refine\n\
         • <b>/start</b> - open the main menu\n\
         • <b>/help</b> - this help",
    )
    .with_keyboard(main_menu())
}

pub fn prompt_city() -> Reply {
    Reply::plain("Enter a city to get the current weather:")
}

pub fn prompt_search() -> Reply {
    Reply::plain(
        "🔍 Enter a city or region name to search.\n\
         You can add the country: 'Paris, France'",
    )
}

pub fn menu_hidden() -> Reply {
    Reply::plain("Menu hidden. Press /start to bring it back.")
}

/// Numbered candidate list, 1-based, capped at [`SEARCH_LIMIT`].
pub fn search_results(locations: &[Location]) -> Reply {
    let lines: Vec<String> = locations
        .iter()
        .take(SEARCH_LIMIT)
        .enumerate()
        .map(|(i, loc)| {
            let country = loc
                .country
                .as_deref()
                .unwrap_or(COUNTRY_PLACEHOLDER);
            format!("{}. {}, {}", i + 1, loc.name, country)
        })
        .collect();

    Reply::plain(format!(
        "🔍 Found these matches:\n{}\n\nEnter a number or refine your query:",
        lines.join("\n")
    ))
    .with_keyboard(main_menu())
}

/// Readings are printed as the provider sent them, so `20.0` stays `20.0`.
pub fn current_weather(weather: &CurrentWeather) -> Reply {
    Reply::html(format!(
        "<b>🌦 Weather in {}</b>\n\
         • 🌡 Temperature: {:?}°C\n\
         • 💧 Humidity: {}%\n\
         • 🌬 Wind: {:?} km/h\n\
         • ☁ Condition: {}",
        escape_html(&weather.location_name),
        weather.temperature_c,
        weather.humidity_pct,
        weather.wind_kph,
        escape_html(&weather.condition_text),
    ))
    .with_keyboard(main_menu())
}

/// The user-facing message for a failed lookup in `mode`.
pub fn failure(mode: Mode, err: &WeatherError) -> Reply {
    let text = match (mode, err) {
        (Mode::Search, WeatherError::NotFound { .. } | WeatherError::Network(_)) => {
            "🔍 Nothing found. Try a different query:"
        }
        (Mode::Current, WeatherError::NotFound { .. } | WeatherError::Network(_)) => {
            "⚠️ Weather request failed. Check the city name:"
        }
    };
    Reply::plain(text).with_keyboard(main_menu())
}

/// Escape text for Telegram's HTML parse mode.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
