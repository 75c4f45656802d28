//! Message tables for the ten UI languages.
//!
//! The tables are plain data (`assets/translations.json`) keyed by language
//! tag, then by message key. Templates use `{name}` placeholders.

use anyhow::{Context, Result};
use clap::ValueEnum;
use luckydraw_core::DrawError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const TRANSLATIONS_JSON: &str = include_str!("../assets/translations.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Language {
    English,
    #[default]
    Spanish,
    French,
    German,
    Italian,
    PortugueseBr,
    Japanese,
    ChineseSimplified,
    Arabic,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::PortugueseBr,
        Language::Japanese,
        Language::ChineseSimplified,
        Language::Arabic,
        Language::Hindi,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::PortugueseBr => "portuguese_br",
            Language::Japanese => "japanese",
            Language::ChineseSimplified => "chinese_simplified",
            Language::Arabic => "arabic",
            Language::Hindi => "hindi",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
            Language::PortugueseBr => "Português (BR)",
            Language::Japanese => "日本語",
            Language::ChineseSimplified => "中文 (简体)",
            Language::Arabic => "العربية",
            Language::Hindi => "हिन्दी",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Translations {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    /// Parse the tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(TRANSLATIONS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let tables = serde_json::from_str(json).context("Failed to parse translation tables")?;
        Ok(Self { tables })
    }

    pub fn messages(&self, language: Language) -> Messages<'_> {
        Messages {
            language,
            translations: self,
        }
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(language.tag())
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

/// Messages for one language, falling back to english and then to the key.
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    language: Language,
    translations: &'a Translations,
}

impl<'a> Messages<'a> {
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self, key: &'a str) -> &'a str {
        self.translations
            .lookup(self.language, key)
            .or_else(|| self.translations.lookup(Language::English, key))
            .unwrap_or(key)
    }

    pub fn format(&self, key: &'a str, params: &[(&str, String)]) -> String {
        params
            .iter()
            .fold(self.text(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    pub fn winner_word(&self, count: usize) -> &'a str {
        if count == 1 {
            self.text("winner")
        } else {
            self.text("winners")
        }
    }

    pub fn participant_word(&self, count: usize) -> &'a str {
        if count == 1 {
            self.text("participant")
        } else {
            self.text("participants")
        }
    }

    /// "Drawing 2 winners from 5 participants"
    pub fn drawing_status(&self, count: usize, total: usize) -> String {
        self.format(
            "drawing_status",
            &[
                ("count", count.to_string()),
                ("winner", self.winner_word(count).to_string()),
                ("total", total.to_string()),
                ("participant", self.participant_word(total).to_string()),
            ],
        )
    }

    pub fn winners_subtitle(&self, count: usize) -> String {
        self.format(
            "winners_subtitle",
            &[
                ("count", count.to_string()),
                ("winner", self.winner_word(count).to_string()),
            ],
        )
    }

    pub fn participant_number(&self, number: usize) -> String {
        self.format("participant_number", &[("number", number.to_string())])
    }

    pub fn lots_out_of_range(&self, min: usize, max: usize) -> String {
        self.format(
            "alert_lots_out_of_range",
            &[("min", min.to_string()), ("max", max.to_string())],
        )
    }

    pub fn draw_error(&self, err: &DrawError) -> String {
        match err {
            DrawError::NoParticipants => self.text("alert_no_participants").to_string(),
            DrawError::InsufficientParticipants {
                requested,
                available,
            } => self.format(
                "alert_too_many_lots",
                &[
                    ("lots", requested.to_string()),
                    ("participants", available.to_string()),
                ],
            ),
        }
    }
}
