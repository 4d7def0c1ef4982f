use regex::Regex;

use crate::models::Intent;

/// Keyword/regex classifier for inbound messages. The rule order is load
/// bearing: earlier rules shadow later ones on overlapping inputs, and the
/// single-digit menu selectors "1".."5" only match as exact-message
/// alternatives inside their rule.
pub struct Classifier {
    order_id: Regex,
    digit_run: Regex,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            order_id: Regex::new(r"(?i)ord\d+").unwrap(),
            digit_run: Regex::new(r"\d{3,4}").unwrap(),
        }
    }

    pub fn classify(&self, message: &str) -> Intent {
        let msg = message.to_lowercase();

        if msg.contains("price") || msg.contains("kitne") || msg == "1" {
            return Intent::PriceInquiry;
        }

        // "order" also contains "ord", so this must come before the lookup rule.
        if msg.contains("order") || msg.contains("status") || msg == "2" {
            return Intent::OrderStatusMenu;
        }

        if msg.contains("ord") || self.digit_run.is_match(&msg) {
            let order_id = self
                .order_id
                .find(&msg)
                .map(|m| m.as_str().to_uppercase());
            return Intent::OrderLookup { order_id };
        }

        if msg.contains("appointment") || msg == "3" {
            return Intent::Appointment;
        }

        if msg.contains("measurement") || msg == "4" {
            return Intent::Measurements;
        }

        if msg.contains("address") || msg == "5" {
            return Intent::Address;
        }

        Intent::Unknown
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
