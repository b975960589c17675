//! Canned companion replies
//!
//! Used whenever the relay can't produce a reply, so the end user sees a
//! friendly line instead of a raw error.

use rand::seq::IndexedRandom;

pub const FALLBACK_RESPONSES: &[&str] = &[
    "That's interesting! Tell me more! 😊",
    "I love hearing that! What else is on your mind? 💭",
    "You're amazing! Let's chat more! 🌟",
    "I'm here for you! What would you like to talk about? 💫",
    "That's great! How does that make you feel? 🎯",
];

/// Pick a random canned reply
pub fn fallback_response() -> &'static str {
    FALLBACK_RESPONSES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(FALLBACK_RESPONSES[0])
}
