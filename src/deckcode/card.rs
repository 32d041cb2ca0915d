use tracing::trace;

use super::bits::{read_var_encoded_u32, ByteCursor};
use crate::exception::{DeckCodeError, DeckCodeResult};

/// 카드 헤더 바이트에서 id 델타가 차지하는 비트 수 (0~4번 데이터, 5번 연속 비트)
pub const CARD_DELTA_BITS: u32 = 5;

/// 헤더 상위 2비트가 이 값이면 확장 카운트가 뒤따릅니다.
const EXTENDED_COUNT_SELECTOR: u8 = 0b11;

/// 스트림에 저장된 (id, count) 한 쌍.
/// 영웅 목록에서는 count 자리에 영웅이 등장하는 턴이 들어갑니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializedCard {
    pub id: u32,
    pub count: u32,
}

/// 목록 하나(영웅 또는 일반 카드)를 읽는 리더.
///
/// 델타 기준 id 는 리더가 만들어질 때 0으로 시작하고, 목록 안에서만 이어집니다.
/// 목록마다 새 리더를 만들면 기준값 리셋이 자연스럽게 보장됩니다.
pub struct CardListReader<'c, 'a> {
    cursor: &'c mut ByteCursor<'a>,
    prev_card_base: u32,
}

impl<'c, 'a> CardListReader<'c, 'a> {
    pub fn new(cursor: &'c mut ByteCursor<'a>) -> Self {
        Self {
            cursor,
            prev_card_base: 0,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// 항목 하나를 읽습니다.
    ///
    /// 커서가 정확히 영역 끝에 있으면 `Ok(None)` (목록 끝), 영역을 넘어섰으면 `TruncatedData` 입니다.
    pub fn next_entry(&mut self) -> DeckCodeResult<Option<SerializedCard>> {
        if self.cursor.position() > self.cursor.end() {
            return Err(DeckCodeError::truncated("card header"));
        }

        let Some(header) = self.cursor.next_byte() else {
            return Ok(None);
        };

        let selector = header >> 6;
        let has_extended_count = selector == EXTENDED_COUNT_SELECTOR;

        let delta = read_var_encoded_u32(header, CARD_DELTA_BITS, self.cursor, "card id delta")?;
        let id = self.prev_card_base.wrapping_add(delta.value);

        let count = if has_extended_count {
            read_var_encoded_u32(0, 0, self.cursor, "extended card count")?.value
        } else {
            u32::from(selector) + 1
        };

        self.prev_card_base = id;
        trace!(id, count, delta = delta.value, "read serialized card");

        Ok(Some(SerializedCard { id, count }))
    }
}
