//! Embedded quotes shown when every network fetch fails.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::types::Quote;

/// `(text, author)` pairs, in display order.
pub const FALLBACK_QUOTES: [(&str, &str); 15] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Life is what happens to you while you're busy making other plans.", "John Lennon"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("It is during our darkest moments that we must focus to see the light.", "Aristotle"),
    ("Be yourself; everyone else is already taken.", "Oscar Wilde"),
    (
        "Two things are infinite: the universe and human stupidity; and I'm not sure about the universe.",
        "Albert Einstein",
    ),
    ("In three words I can sum up everything I've learned about life: it goes on.", "Robert Frost"),
    ("The only impossible journey is the one you never begin.", "Tony Robbins"),
    ("Success is not final, failure is not fatal: it is the courage to continue that counts.", "Winston Churchill"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("Don't let yesterday take up too much of today.", "Will Rogers"),
    (
        "You learn more from failure than from success. Don't let it stop you. Failure builds character.",
        "Unknown",
    ),
    (
        "If you are working on something that you really care about, you don't have to be pushed. The vision pulls you.",
        "Steve Jobs",
    ),
    ("The mind is everything. What you think you become.", "Buddha"),
];

/// A fallback quote chosen uniformly at random.
#[must_use]
pub fn fallback_quote() -> Quote {
    fallback_quote_with(&mut rand::rng())
}

/// [`fallback_quote`] with a caller-supplied RNG.
pub fn fallback_quote_with<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    // The list is a non-empty constant, so `choose` always yields.
    let (text, author) = FALLBACK_QUOTES.choose(rng).copied().unwrap_or(FALLBACK_QUOTES[0]);
    Quote::new(text, author)
}

/// True when `quote` is one of the embedded fallback quotes.
#[must_use]
pub fn is_fallback_quote(quote: &Quote) -> bool {
    FALLBACK_QUOTES.iter().any(|(text, author)| quote.same_as(text, author))
}

#[cfg(test)]
#[path = "fallback_test.rs"]
mod tests;
