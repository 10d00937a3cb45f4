use thiserror::Error;

/// Failure taxonomy for one optimization request. `Display` is the single
/// user-facing string the caller shows; the raw model text is never echoed.
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Błąd AI: {0}")]
    Upstream(String),

    #[error("Otrzymano nieprawidłową odpowiedź od AI. Spróbuj ponownie.")]
    InvalidResponseFormat,

    #[error("Wystąpił nieznany błąd podczas pobierania sugestii.")]
    Unknown,
}
