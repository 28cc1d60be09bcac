// src/cli/lookup.rs - One-shot lookups printed to the terminal

use crate::bot::render;
use crate::bot::session::Mode;
use crate::infra::config::Config;
use crate::infra::errors::BotError;
use crate::integrations::credentials::WEATHER_API_KEY_VAR;
use crate::integrations::types::{Reply, TextFormat};
use crate::weather::{WeatherApiClient, WeatherProvider};

fn client(config: &Config) -> anyhow::Result<WeatherApiClient> {
    // Only the weather key is needed here; don't demand a bot token.
    let key = std::env::var(WEATHER_API_KEY_VAR)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .ok_or(BotError::MissingCredential {
            name: WEATHER_API_KEY_VAR,
        })?;
    Ok(WeatherApiClient::new(key, &config.weather))
}

pub async fn run_now(config: &Config, city: &str) -> anyhow::Result<()> {
    let weather = client(config)?;
    let reply = match weather.current(city, &config.weather.lang).await {
        Ok(w) => render::current_weather(&w),
        Err(e) => {
            tracing::warn!("Lookup failed: {}", e);
            render::failure(Mode::Current, &e)
        }
    };
    println!("{}", to_terminal(&reply));
    Ok(())
}

pub async fn run_search(config: &Config, query: &str) -> anyhow::Result<()> {
    let weather = client(config)?;
    let reply = match weather.search(query).await {
        Ok(locations) => render::search_results(&locations),
        Err(e) => {
            tracing::warn!("Search failed: {}", e);
            render::failure(Mode::Search, &e)
        }
    };
    println!("{}", to_terminal(&reply));
    Ok(())
}

/// Strip HTML markup from a reply so it reads cleanly in a terminal.
pub fn to_terminal(reply: &Reply) -> String {
    if reply.format == TextFormat::Plain {
        return reply.text.clone();
    }

    let mut out = String::with_capacity(reply.text.len());
    let mut in_tag = false;
    for c in reply.text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
