pub mod cardset;
pub mod deckcode;
pub mod env;
pub mod exception;
pub mod logger;

pub use deckcode::{decode_deck_string, parse_deck, parse_deck_bytes, Card, Deck, Hero};
pub use exception::{DeckCodeError, DeckCodeResult};

pub trait LogExt<T, E> {
    fn log_ok(self, f: impl FnOnce(&T)) -> Self;
    fn log_err(self, f: impl FnOnce(&E)) -> Self;
}

impl<T, E> LogExt<T, E> for Result<T, E> {
    fn log_ok(self, f: impl FnOnce(&T)) -> Self {
        if let Ok(ref v) = self {
            f(v)
        }
        self
    }

    fn log_err(self, f: impl FnOnce(&E)) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}
