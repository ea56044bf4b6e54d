//! Stateless menu resolution: the latest inbound text alone picks the reply.

use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Menu,
    Listings,
    Buy,
    Sell,
    Agent,
    Faqs,
    Fallback,
}

impl MenuOption {
    /// Classifies inbound text. Matching is exact after trimming and
    /// lowercasing, anything unrecognised falls back.
    pub fn resolve(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "menu" | "start" => MenuOption::Menu,
            "1" => MenuOption::Listings,
            "2" => MenuOption::Buy,
            "3" => MenuOption::Sell,
            "4" => MenuOption::Agent,
            "5" | "faqs" => MenuOption::Faqs,
            _ => MenuOption::Fallback,
        }
    }

    pub fn reply_text(self) -> &'static str {
        match self {
            MenuOption::Menu => consts::MENU_TEXT,
            MenuOption::Listings => consts::LISTINGS_TEXT,
            MenuOption::Buy => consts::BUY_TEXT,
            MenuOption::Sell => consts::SELL_TEXT,
            MenuOption::Agent => consts::AGENT_TEXT,
            MenuOption::Faqs => consts::FAQS_TEXT,
            MenuOption::Fallback => consts::FALLBACK_TEXT,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MenuOption::Menu => "menu",
            MenuOption::Listings => "listings",
            MenuOption::Buy => "buy",
            MenuOption::Sell => "sell",
            MenuOption::Agent => "agent",
            MenuOption::Faqs => "faqs",
            MenuOption::Fallback => "fallback",
        }
    }
}
