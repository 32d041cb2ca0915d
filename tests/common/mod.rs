#![allow(dead_code)]

pub const EXAMPLE_CODE: &str =
    "ADCJQUQI30zuwEYg2ABeF1Bu94BmWIBTEkLtAKlAZakAYmHh0JsdWUvUmVkIEV4YW1wbGU_";

/// 손으로 쓴 항목 바이트를 헤더/체크섬/이름으로 감싸서 payload 를 만듭니다.
pub struct Payload {
    version: u8,
    hero_count_chunk: u8,
    body: Vec<u8>,
    name: Vec<u8>,
}

impl Payload {
    /// `hero_count_chunk` 는 0번 바이트 하위 4비트 (3 데이터 비트 + 연속 비트)
    pub fn new(version: u8, hero_count_chunk: u8) -> Self {
        Self {
            version,
            hero_count_chunk,
            body: vec![],
            name: vec![],
        }
    }

    pub fn body(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.as_bytes().to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let checksum = self.body.iter().fold(0u8, |s, b| s.wrapping_add(*b));
        let mut out = vec![(self.version << 4) | (self.hero_count_chunk & 0x0f), checksum];
        if self.version > 1 {
            out.push(self.name.len() as u8);
        }
        out.extend_from_slice(&self.body);
        out.extend_from_slice(&self.name);
        out
    }

    pub fn to_code(&self) -> String {
        encode_code(&self.build())
    }
}

pub fn encode_code(bytes: &[u8]) -> String {
    let encoded = base64::encode(bytes).replace('/', "-").replace('=', "_");
    format!("ADC{}", encoded)
}

pub fn decode_code(code: &str) -> Vec<u8> {
    deck_code::decode_deck_string(code).unwrap()
}
