// src/bot/menu.rs - Main menu labels and inbound text classification

/// A button on the main menu keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    WeatherNow,
    SearchCity,
    Help,
    CloseMenu,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::WeatherNow,
        MenuAction::SearchCity,
        MenuAction::Help,
        MenuAction::CloseMenu,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::WeatherNow => "🌤 Weather now",
            MenuAction::SearchCity => "🔍 Search city",
            MenuAction::Help => "⚙️ Help",
            MenuAction::CloseMenu => "❌ Close menu",
        }
    }

    /// Exact label match only.
    pub fn from_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == text)
    }
}

/// The 2x2 main menu: {weather now, search} / {help, close}.
pub fn main_menu() -> Vec<Vec<String>> {
    MenuAction::ALL
        .chunks(2)
        .map(|row| row.iter().map(|a| a.label().to_string()).collect())
        .collect()
}

/// Commands registered with the chat platform.
pub const BOT_COMMANDS: [(&str, &str); 2] = [
    ("start", "Open the main menu"),
    ("help", "Show help"),
];

/// What an inbound text means, before looking at session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Start,
    HelpCommand,
    UnknownCommand(&'a str),
    Menu(MenuAction),
    Query(&'a str),
}

pub fn classify(text: &str) -> Input<'_> {
    if let Some(rest) = text.strip_prefix('/') {
        // "/start@my_bot payload" -> "start"
        let word = rest.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or("");
        return match name.to_ascii_lowercase().as_str() {
            "start" => Input::Start,
            "help" => Input::HelpCommand,
            _ => Input::UnknownCommand(name),
        };
    }

    match MenuAction::from_label(text) {
        Some(action) => Input::Menu(action),
        None => Input::Query(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_layout() {
        let menu = main_menu();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0], vec!["🌤 Weather now", "🔍 Search city"]);
        assert_eq!(menu[1], vec!["⚙️ Help", "❌ Close menu"]);
    }

    #[test]
    fn test_label_roundtrip() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_label(action.label()), Some(action));
        }
    }

    #[test]
    fn test_classify_commands() {
        assert_eq!(classify("/start"), Input::Start);
        assert_eq!(classify("/start@weather_bot"), Input::Start);
        assert_eq!(classify("/start deep-link"), Input::Start);
        assert_eq!(classify("/help"), Input::HelpCommand);
        assert_eq!(classify("/settings"), Input::UnknownCommand("settings"));
    }

    #[test]
    fn test_classify_commands_ignore_case() {
        assert_eq!(classify("/START"), Input::Start);
        assert_eq!(classify("/Help@Weather_Bot"), Input::HelpCommand);
        assert_eq!(classify("/Settings"), Input::UnknownCommand("Settings"));
    }

    #[test]
    fn test_classify_menu_labels_exact() {
        assert_eq!(classify("🔍 Search city"), Input::Menu(MenuAction::SearchCity));
        assert_eq!(classify("❌ Close menu"), Input::Menu(MenuAction::CloseMenu));
        // Near misses are city queries.
        assert_eq!(classify("Search city"), Input::Query("Search city"));
        assert_eq!(classify("🔍 Search city "), Input::Query("🔍 Search city "));
    }

    #[test]
    fn test_classify_free_text() {
        assert_eq!(classify("Paris, France"), Input::Query("Paris, France"));
        assert_eq!(classify("2"), Input::Query("2"));
    }
}
