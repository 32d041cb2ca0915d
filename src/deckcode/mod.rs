//! 덱 코드 해석기.
//!
//! 덱 코드는 `"ADC"` 접두어 + URL-safe base64 문자열이며, 해석된 바이트는
//! 헤더 / 카드 데이터(영웅 → 일반 카드) / 이름 바이트 순서로 나뉩니다.

pub mod bits;
pub mod card;
pub mod header;
pub mod types;

use std::str::FromStr;

use tracing::{debug, warn};

use crate::exception::{DeckCodeError, DeckCodeResult};
use bits::ByteCursor;
use card::CardListReader;
use header::Header;

pub use types::{Card, Deck, Hero};

pub const ENCODED_PREFIX: &str = "ADC";

/// 덱 코드 문자열을 해석합니다.
pub fn parse_deck(deck_code: &str) -> DeckCodeResult<Deck> {
    let result = decode_deck_string(deck_code).and_then(|bytes| parse_deck_bytes(&bytes));

    if let Err(ref err) = result {
        warn!(code = err.code(), "failed to parse deck code: {}", err);
    }
    result
}

/// 접두어를 떼고 `-`→`/`, `_`→`=` 치환 후 표준 base64 로 디코딩합니다.
pub fn decode_deck_string(deck_code: &str) -> DeckCodeResult<Vec<u8>> {
    let body = deck_code
        .strip_prefix(ENCODED_PREFIX)
        .ok_or_else(|| DeckCodeError::malformed("deck code does not contain proper prefix"))?;

    let normalized = body.replace('-', "/").replace('_', "=");
    Ok(base64::decode(normalized)?)
}

/// 이미 디코딩된 바이트 버퍼에서 덱을 해석합니다.
pub fn parse_deck_bytes(bytes: &[u8]) -> DeckCodeResult<Deck> {
    let header = Header::parse(bytes)?;
    header.validate_checksum(bytes)?;

    let card_data_end = header.card_data_end(bytes.len());
    let mut cursor = ByteCursor::new(bytes, header.header_length, card_data_end);

    let hero_count = header.read_hero_count(&mut cursor)?;

    let mut heroes = Vec::new();
    {
        let mut reader = CardListReader::new(&mut cursor);
        for _ in 0..hero_count {
            let entry = reader
                .next_entry()?
                .ok_or_else(|| DeckCodeError::truncated("hero card"))?;
            heroes.push(Hero {
                id: entry.id,
                turn: entry.count,
            });
        }
    }

    let mut cards = Vec::new();
    {
        let mut reader = CardListReader::new(&mut cursor);
        while let Some(entry) = reader.next_entry()? {
            cards.push(Card {
                id: entry.id,
                count: entry.count,
            });
        }
    }

    let name = if header.name_length > 0 && cursor.position() <= card_data_end {
        String::from_utf8_lossy(&bytes[card_data_end..]).into_owned()
    } else {
        String::new()
    };

    debug!(
        heroes = heroes.len(),
        cards = cards.len(),
        name = %name,
        "decoded deck"
    );

    Ok(Deck::new(heroes, cards, name))
}

impl FromStr for Deck {
    type Err = DeckCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_deck(s)
    }
}
