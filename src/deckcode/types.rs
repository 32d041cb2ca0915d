use serde::{Deserialize, Serialize};

/// 덱에 포함된 영웅과 그 영웅이 등장하는 턴
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub turn: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub count: u32,
}

/// 해석이 끝난 덱. 생성된 뒤에는 변경되지 않습니다.
///
/// 영웅/카드 순서는 스트림에 인코딩된 순서 그대로이며, id 중복 여부는 검사하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    heroes: Vec<Hero>,
    cards: Vec<Card>,
    name: String,
}

impl Deck {
    pub fn new(heroes: Vec<Hero>, cards: Vec<Card>, name: String) -> Self {
        Self {
            heroes,
            cards,
            name,
        }
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 일반 카드 장수의 합 (영웅 제외)
    pub fn total_card_count(&self) -> u64 {
        self.cards.iter().map(|card| u64::from(card.count)).sum()
    }

    pub fn hero_by_turn(&self, turn: u32) -> impl Iterator<Item = &Hero> + '_ {
        self.heroes.iter().filter(move |hero| hero.turn == turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Deck {
        Deck::new(
            vec![
                Hero { id: 1, turn: 1 },
                Hero { id: 2, turn: 3 },
                Hero { id: 3, turn: 1 },
            ],
            vec![Card { id: 10, count: 3 }, Card { id: 11, count: 2 }],
            "test".to_string(),
        )
    }

    #[test]
    fn totals_and_turn_lookup() {
        let deck = sample();
        assert_eq!(deck.total_card_count(), 5);

        let first_turn: Vec<u32> = deck.hero_by_turn(1).map(|h| h.id).collect();
        assert_eq!(first_turn, vec![1, 3]);
        assert_eq!(deck.hero_by_turn(2).count(), 0);
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["name"], "test");
        assert_eq!(json["heroes"][1]["turn"], 3);
        assert_eq!(json["cards"][0]["count"], 3);
    }
}
