use thiserror::Error;

/// 덱 코드 해석 중 발생할 수 있는 에러 종류
///
/// 모든 에러는 최종 결과입니다. 해석은 결정적이므로 재시도할 이유가 없고,
/// 에러와 함께 일부만 해석된 `Deck` 이 반환되는 일도 없습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckCodeError {
    #[error("Malformed deck code: {reason}")]
    MalformedInput { reason: String },

    #[error("Expected version {expected} but received version {found}")]
    UnsupportedVersion { expected: u8, found: u8 },

    #[error("Checksum did not match: stored {expected:#04x}, computed {computed:#04x}")]
    ChecksumMismatch { expected: u8, computed: u8 },

    #[error("Deck data truncated while reading {what}")]
    TruncatedData { what: &'static str },
}

/// Result type alias for deck code operations
pub type DeckCodeResult<T> = Result<T, DeckCodeError>;

impl DeckCodeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn truncated(what: &'static str) -> Self {
        Self::TruncatedData { what }
    }

    /// 로그/응답에 쓰는 짧은 코드
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::UnsupportedVersion { .. } => "UNSUPPORTED_VERSION",
            Self::ChecksumMismatch { .. } => "CHECKSUM_MISMATCH",
            Self::TruncatedData { .. } => "TRUNCATED_DATA",
        }
    }
}

impl From<base64::DecodeError> for DeckCodeError {
    fn from(err: base64::DecodeError) -> Self {
        Self::malformed(format!("invalid base64: {}", err))
    }
}
