//! Keyword-based intent classification.
//!
//! Matching is plain substring containment on the lower-cased utterance, not
//! word matching: `"this"` contains `"hi"` and therefore reads as a greeting.
//! Categories are tested in a fixed priority order and the first hit wins.

use std::fmt;

/// Coarse intent of a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntentCategory {
    Greeting,
    Support,
    /// Order, delivery and refund questions.
    Transaction,
    /// Nothing matched; general acknowledgement.
    Fallback,
}

impl IntentCategory {
    /// Every category, in priority order.
    pub const ALL: [IntentCategory; 4] = [
        Self::Greeting,
        Self::Support,
        Self::Transaction,
        Self::Fallback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Support => "support",
            Self::Transaction => "transaction",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Keyword tables ──────────────────────────────────────────────────────

/// (category, keywords) in priority order. Fallback has no keywords.
const INTENT_TABLE: &[(IntentCategory, &[&str])] = &[
    (IntentCategory::Greeting, &["hi", "hello", "hey", "heyy"]),
    (
        IntentCategory::Support,
        &["help", "issue", "problem", "confused", "can't"],
    ),
    (
        IntentCategory::Transaction,
        &["order", "delivery", "refund", "status"],
    ),
];

/// Classify an utterance into an [`IntentCategory`].
pub fn classify_intent(utterance: &str) -> IntentCategory {
    let lower = utterance.to_lowercase();
    INTENT_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|&(category, _)| category)
        .unwrap_or(IntentCategory::Fallback)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn greeting_keywords() {
        assert_eq!(classify_intent("Hello!"), IntentCategory::Greeting);
        assert_eq!(classify_intent("HEYY"), IntentCategory::Greeting);
    }

    #[test]
    fn greeting_beats_support() {
        assert_eq!(
            classify_intent("hey, I have a problem"),
            IntentCategory::Greeting
        );
    }

    #[test]
    fn support_beats_transaction() {
        assert_eq!(
            classify_intent("I have an issue with my order"),
            IntentCategory::Support
        );
    }

    #[test]
    fn transaction_keywords() {
        assert_eq!(
            classify_intent("What's my refund status"),
            IntentCategory::Transaction
        );
        assert_eq!(classify_intent("DELIVERY late"), IntentCategory::Transaction);
    }

    #[test]
    fn substring_semantics_are_preserved() {
        // "this" contains "hi"
        assert_eq!(classify_intent("this is odd"), IntentCategory::Greeting);
        // "unhelpful" contains "help"
        assert_eq!(classify_intent("so unhelpful"), IntentCategory::Support);
        assert_eq!(classify_intent("I can't log in"), IntentCategory::Support);
    }

    #[test]
    fn nothing_matched_is_fallback() {
        assert_eq!(classify_intent("good morning"), IntentCategory::Fallback);
        assert_eq!(classify_intent(""), IntentCategory::Fallback);
    }
}
