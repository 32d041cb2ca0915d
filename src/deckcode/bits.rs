use std::cmp::Ordering;

use crate::exception::{DeckCodeError, DeckCodeResult};

/// 바이트 청크 하나에 들어있는 데이터 비트 수 (상위 1비트는 연속 플래그)
pub const CHUNK_BITS: u32 = 7;

/// 카드 데이터 영역을 읽는 커서.
///
/// 한 번의 해석 동안 오케스트레이션이 단독으로 소유하며, `end` 는 카드 데이터 영역의 끝(배타)입니다.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> ByteCursor<'a> {
    /// `end` 는 `data.len()` 을 넘을 수 없습니다.
    pub fn new(data: &'a [u8], start: usize, end: usize) -> Self {
        Self {
            data,
            pos: start,
            end: end.min(data.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_at_end(&self) -> bool {
        self.pos == self.end
    }

    pub fn remaining(&self) -> usize {
        self.end.saturating_sub(self.pos)
    }

    /// 영역 안에 바이트가 남아 있으면 하나를 읽고 커서를 전진합니다.
    pub fn next_byte(&mut self) -> Option<u8> {
        if self.pos >= self.end {
            return None;
        }
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

/// 여러 청크에 나뉘어 있는 정수를 모으는 누산기
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAccumulator {
    value: u32,
    shift: u32,
}

impl ChunkAccumulator {
    /// `chunk` 의 하위 `num_bits` 비트를 현재 shift 위치에 OR 하고,
    /// `1 << num_bits` 연속 비트가 켜져 있는지 반환합니다.
    ///
    /// 32비트를 넘어가는 위치의 데이터는 버려집니다.
    pub fn push_chunk(&mut self, chunk: u8, num_bits: u32) -> bool {
        let continue_bit = 1u32 << num_bits;
        let new_bits = u32::from(chunk) & (continue_bit - 1);
        self.value |= new_bits.checked_shl(self.shift).unwrap_or(0);
        self.shift = self.shift.saturating_add(num_bits);

        u32::from(chunk) & continue_bit != 0
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

/// 가변 길이 정수 해석이 끝난 이유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintStop {
    /// 연속 비트가 꺼진 청크를 만남
    Terminated,
    /// 카드 데이터 영역의 끝에 도달. 에러가 아니라 정상 종료로 취급합니다.
    RegionEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Varint {
    pub value: u32,
    pub stop: VarintStop,
}

/// 가변 길이 정수를 읽습니다.
///
/// `base_bits` 가 0이 아니면 이미 읽은 `base_value` 바이트의 하위 `base_bits` 비트가 첫 청크이고,
/// `base_bits` 비트가 연속 플래그입니다. 이후 청크는 커서에서 한 바이트씩(7 데이터 비트 + 연속 비트) 읽습니다.
///
/// `base_bits` 가 0이면 내장된 청크가 없으므로 최소 한 바이트는 영역 안에 있어야 합니다.
pub fn read_var_encoded_u32(
    base_value: u8,
    base_bits: u32,
    cursor: &mut ByteCursor<'_>,
    what: &'static str,
) -> DeckCodeResult<Varint> {
    let mut acc = ChunkAccumulator::default();

    if base_bits != 0 {
        if !acc.push_chunk(base_value, base_bits) {
            return Ok(Varint {
                value: acc.value(),
                stop: VarintStop::Terminated,
            });
        }
    } else if cursor.remaining() == 0 {
        return Err(DeckCodeError::truncated(what));
    }

    loop {
        match cursor.position().cmp(&cursor.end()) {
            Ordering::Greater => return Err(DeckCodeError::truncated(what)),
            Ordering::Equal => {
                return Ok(Varint {
                    value: acc.value(),
                    stop: VarintStop::RegionEnd,
                })
            }
            Ordering::Less => {}
        }

        let next = cursor
            .next_byte()
            .ok_or_else(|| DeckCodeError::truncated(what))?;

        if !acc.push_chunk(next, CHUNK_BITS) {
            return Ok(Varint {
                value: acc.value(),
                stop: VarintStop::Terminated,
            });
        }
    }
}
