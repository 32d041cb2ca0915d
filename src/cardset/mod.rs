use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

/*
    카드 세트 JSON 문서의 스키마.
    {
        "card_set": {
            "version": 1,
            "set_info": { "set_id": 0, "pack_item_def": 0, "name": { "english": "Base Set", ... } },
            "card_list": [ { "card_id": 4003, "card_name": { ... }, ... } ]
        }
    }
    문서를 받아오는 일(HTTP)은 이 모듈의 책임이 아님.
*/

/// 세트 문서 위치를 알려주는 응답. 실제 문서는 `cdn_root + url` 에 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnResponse {
    pub cdn_root: String,
    pub url: String,
    pub expire_time: i64,
}

impl CdnResponse {
    pub fn location(&self) -> String {
        format!("{}{}", self.cdn_root, self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSet {
    pub card_set: SetContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetContent {
    pub version: i32,
    pub set_info: SetInfo,
    #[serde(default)]
    pub card_list: Vec<CardDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetInfo {
    pub set_id: i32,
    pub pack_item_def: i32,
    pub name: LocalizedText,
}

/// 언어 이름("english", "koreana", ...) → 문자열
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(language).map(String::as_str)
    }

    pub fn english(&self) -> Option<&str> {
        self.get("english")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedImage {
    #[serde(default)]
    pub default: String,
    #[serde(flatten)]
    pub localized: BTreeMap<String, String>,
}

impl LocalizedImage {
    /// 해당 언어 이미지가 없으면 기본 이미지를 돌려줍니다.
    pub fn for_language(&self, language: &str) -> &str {
        self.localized
            .get(language)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub card_id: u32,
    pub ref_type: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub card_id: u32,
    #[serde(default)]
    pub base_card_id: u32,
    #[serde(default)]
    pub card_type: String,
    #[serde(default)]
    pub sub_type: String,
    #[serde(default)]
    pub card_name: LocalizedText,
    #[serde(default)]
    pub card_text: LocalizedText,
    #[serde(default)]
    pub mini_image: LocalizedImage,
    #[serde(default)]
    pub large_image: LocalizedImage,
    #[serde(default)]
    pub ingame_image: LocalizedImage,
    #[serde(default)]
    pub illustrator: String,
    #[serde(default)]
    pub mana_cost: i32,
    #[serde(default)]
    pub gold_cost: i32,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub hit_points: i32,
    #[serde(default)]
    pub is_red: bool,
    #[serde(default)]
    pub is_blue: bool,
    #[serde(default)]
    pub is_black: bool,
    #[serde(default)]
    pub is_green: bool,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl CardSet {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn cards(&self) -> &[CardDefinition] {
        &self.card_set.card_list
    }

    pub fn card(&self, card_id: u32) -> Option<&CardDefinition> {
        self.card_set
            .card_list
            .iter()
            .find(|card| card.card_id == card_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SET_JSON: &str = r#"{
        "card_set": {
            "version": 1,
            "set_info": {
                "set_id": 0,
                "pack_item_def": 0,
                "name": { "english": "Base Set", "koreana": "기본 세트" }
            },
            "card_list": [
                {
                    "card_id": 4003,
                    "base_card_id": 4003,
                    "card_type": "Hero",
                    "card_name": { "english": "Debbi the Cunning" },
                    "card_text": {},
                    "mini_image": { "default": "https://cdn/mini/4003.png" },
                    "large_image": {
                        "default": "https://cdn/large/4003.png",
                        "german": "https://cdn/large/4003_german.png"
                    },
                    "ingame_image": {},
                    "illustrator": "Kev Walker",
                    "attack": 7,
                    "hit_points": 9,
                    "is_red": true,
                    "references": [
                        { "card_id": 10006, "ref_type": "includes", "count": 3 },
                        { "card_id": 10007, "ref_type": "passive_ability" }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn parses_card_set_document() {
        let set = CardSet::from_json_str(SET_JSON).unwrap();
        assert_eq!(set.card_set.version, 1);
        assert_eq!(set.card_set.set_info.name.english(), Some("Base Set"));
        assert_eq!(set.card_set.set_info.name.get("koreana"), Some("기본 세트"));
        assert_eq!(set.cards().len(), 1);

        let hero = set.card(4003).unwrap();
        assert_eq!(hero.card_name.english(), Some("Debbi the Cunning"));
        assert!(hero.is_red);
        assert!(!hero.is_blue);
        assert_eq!(hero.mana_cost, 0);
        assert_eq!(hero.references[0].count, 3);
        assert_eq!(hero.references[1].count, 0);
        assert!(set.card(1).is_none());
    }

    #[test]
    fn image_falls_back_to_default() {
        let set = CardSet::from_json_str(SET_JSON).unwrap();
        let hero = set.card(4003).unwrap();
        assert_eq!(
            hero.large_image.for_language("german"),
            "https://cdn/large/4003_german.png"
        );
        assert_eq!(
            hero.large_image.for_language("french"),
            "https://cdn/large/4003.png"
        );
        assert_eq!(hero.ingame_image.for_language("english"), "");
    }

    #[test]
    fn cdn_location_joins_root_and_url() {
        let response: CdnResponse = serde_json::from_str(
            r#"{ "cdn_root": "https://cdn.example/", "url": "set01.json", "expire_time": 1700000000 }"#,
        )
        .unwrap();
        assert_eq!(response.location(), "https://cdn.example/set01.json");
    }

    #[test]
    fn reads_from_reader() {
        let set = CardSet::from_reader(SET_JSON.as_bytes()).unwrap();
        assert_eq!(set.card(4003).map(|c| c.attack), Some(7));
    }
}
