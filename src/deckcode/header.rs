use tracing::debug;

use super::bits::{read_var_encoded_u32, ByteCursor};
use crate::exception::{DeckCodeError, DeckCodeResult};

pub const CURRENT_VERSION: u8 = 2;
/// 이름 길이 바이트가 없는 이전 포맷
pub const LEGACY_VERSION: u8 = 1;

/// 0번 바이트에 내장된 영웅 수 청크의 비트 수 (0~2번 데이터, 3번 연속 비트)
pub const HERO_COUNT_BITS: u32 = 3;

/// 덱 코드 앞부분의 고정 레이아웃 영역
///
/// ```text
/// byte 0: [version:4][hero count chunk:4]
/// byte 1: checksum
/// byte 2: name length (version > 1)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version_and_heroes: u8,
    pub version: u8,
    pub checksum: u8,
    pub name_length: usize,
    /// 헤더가 차지하는 바이트 수. 카드 데이터는 이 위치부터 시작합니다.
    pub header_length: usize,
}

impl Header {
    pub fn parse(bytes: &[u8]) -> DeckCodeResult<Self> {
        let version_and_heroes = *bytes
            .first()
            .ok_or_else(|| DeckCodeError::truncated("version"))?;
        let version = version_and_heroes >> 4;

        if version != CURRENT_VERSION && version != LEGACY_VERSION {
            return Err(DeckCodeError::UnsupportedVersion {
                expected: CURRENT_VERSION,
                found: version,
            });
        }

        let checksum = *bytes
            .get(1)
            .ok_or_else(|| DeckCodeError::truncated("checksum"))?;

        let (name_length, header_length) = if version > LEGACY_VERSION {
            let len = *bytes
                .get(2)
                .ok_or_else(|| DeckCodeError::truncated("name length"))?;
            (usize::from(len), 3)
        } else {
            (0, 2)
        };

        if name_length > bytes.len() - header_length {
            return Err(DeckCodeError::truncated("deck name"));
        }

        let header = Self {
            version_and_heroes,
            version,
            checksum,
            name_length,
            header_length,
        };
        debug!(
            version,
            checksum,
            name_length,
            total = bytes.len(),
            "parsed deck code header"
        );
        Ok(header)
    }

    /// 카드 데이터 영역의 끝(배타). 그 뒤는 이름 바이트입니다.
    pub fn card_data_end(&self, total_len: usize) -> usize {
        total_len.saturating_sub(self.name_length)
    }

    /// 헤더 다음 바이트부터 카드 데이터 끝까지의 8비트 합을 저장된 체크섬과 비교합니다.
    pub fn validate_checksum(&self, bytes: &[u8]) -> DeckCodeResult<()> {
        let covered = bytes
            .len()
            .checked_sub(self.name_length)
            .and_then(|end| bytes.get(self.header_length..end))
            .ok_or_else(|| DeckCodeError::truncated("card data"))?;
        let computed = compute_checksum(covered);

        if computed != self.checksum {
            return Err(DeckCodeError::ChecksumMismatch {
                expected: self.checksum,
                computed,
            });
        }
        Ok(())
    }

    /// 0번 바이트의 하위 청크에서 시작해 영웅 수를 읽습니다.
    pub fn read_hero_count(&self, cursor: &mut ByteCursor<'_>) -> DeckCodeResult<u32> {
        let count = read_var_encoded_u32(
            self.version_and_heroes,
            HERO_COUNT_BITS,
            cursor,
            "hero count",
        )?;
        Ok(count.value)
    }
}

pub fn compute_checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}
