//! Keyword intent detection and order id extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user is trying to get done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Find out where an order is.
    Status,
    /// Cancel (or return / refund) an order.
    Cancel,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Status => f.write_str("status"),
            Intent::Cancel => f.write_str("cancel"),
        }
    }
}

/// Any one of these marks a status request.
const STATUS_KEYWORDS: &[&str] = &["status", "track", "delivery"];

/// Any one of these marks a cancellation request.
const CANCEL_KEYWORDS: &[&str] = &["cancel", "return", "refund"];

/// Optional `ORD-` prefix, then five digits anywhere in the text.
static ORDER_ID_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:ORD-)?([0-9]{5})").expect("order id candidate pattern"));

/// Maps free text to an [`Intent`] and pulls order id candidates out of it.
///
/// Matching is plain case-insensitive substring search; there is no
/// language understanding beyond that.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentRecognizer;

impl IntentRecognizer {
    pub fn new() -> Self {
        Self
    }

    /// Detects the intent of `text`.
    ///
    /// Status keywords are checked first, so text mentioning both
    /// ("cancel... what's the delivery status?") is a status request.
    pub fn detect_intent(&self, text: &str) -> Option<Intent> {
        let lower = text.to_lowercase();

        let asks_where_order = lower.contains("where") && lower.contains("order");
        if asks_where_order || STATUS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return Some(Intent::Status);
        }

        if CANCEL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return Some(Intent::Cancel);
        }

        None
    }

    /// Extracts an order id candidate normalized to `ORD-ddddd`.
    ///
    /// Bare digits count, so the result is only a candidate: callers still
    /// validate it with [`OrderId::parse`](crate::domain::order::OrderId::parse).
    pub fn extract_order_id(&self, text: &str) -> Option<String> {
        ORDER_ID_CANDIDATE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|digits| format!("ORD-{}", digits.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> IntentRecognizer {
        IntentRecognizer::new()
    }

    mod detect_intent {
        use super::*;

        #[test]
        fn where_is_my_order_is_status() {
            assert_eq!(recognizer().detect_intent("Where is my order?"), Some(Intent::Status));
        }

        #[test]
        fn where_without_order_is_not_status() {
            assert_eq!(recognizer().detect_intent("Where are you based?"), None);
        }

        #[test]
        fn track_and_delivery_are_status() {
            assert_eq!(recognizer().detect_intent("track my parcel"), Some(Intent::Status));
            assert_eq!(recognizer().detect_intent("Delivery date?"), Some(Intent::Status));
        }

        #[test]
        fn refund_is_cancel() {
            assert_eq!(recognizer().detect_intent("I want a refund"), Some(Intent::Cancel));
        }

        #[test]
        fn cancel_and_return_are_cancel() {
            assert_eq!(recognizer().detect_intent("CANCEL it"), Some(Intent::Cancel));
            assert_eq!(recognizer().detect_intent("how do I return this"), Some(Intent::Cancel));
        }

        #[test]
        fn greeting_has_no_intent() {
            assert_eq!(recognizer().detect_intent("hello"), None);
        }

        #[test]
        fn status_wins_when_both_present() {
            assert_eq!(
                recognizer().detect_intent("cancel unless the status says shipped"),
                Some(Intent::Status)
            );
        }
    }

    mod extract_order_id {
        use super::*;

        #[test]
        fn canonical_id_is_extracted() {
            assert_eq!(
                recognizer().extract_order_id("ORD-12345"),
                Some("ORD-12345".to_string())
            );
        }

        #[test]
        fn bare_digits_are_normalized() {
            assert_eq!(recognizer().extract_order_id("12345"), Some("ORD-12345".to_string()));
        }

        #[test]
        fn id_inside_sentence_is_found() {
            assert_eq!(
                recognizer().extract_order_id("order 12345 please"),
                Some("ORD-12345".to_string())
            );
        }

        #[test]
        fn lowercase_prefix_is_normalized() {
            assert_eq!(
                recognizer().extract_order_id("cancel ord-67890"),
                Some("ORD-67890".to_string())
            );
        }

        #[test]
        fn first_five_of_longer_run_are_taken() {
            assert_eq!(
                recognizer().extract_order_id("ref 1234567"),
                Some("ORD-12345".to_string())
            );
        }

        #[test]
        fn too_few_digits_yield_nothing() {
            assert_eq!(recognizer().extract_order_id("ORD-1234"), None);
            assert_eq!(recognizer().extract_order_id("no numbers here"), None);
        }
    }
}
