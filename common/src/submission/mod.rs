//! Submission lifecycle and the failures a submission can end with.

use thiserror::Error;

/// Where the form is in its submit cycle.
///
/// `Completed` is terminal for the current record; only a reset from the
/// confirmation view goes back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Completed,
}

/// Toast shown for every failure that is not a timeout.
pub const GENERIC_FAILURE_MESSAGE: &str =
    "❌ Ocorreu um erro ao enviar sua justificativa.\nPor favor, tente novamente em instantes.";

/// Toast shown when the request hit its deadline.
pub const TIMEOUT_MESSAGE: &str =
    "Tempo limite excedido. Verifique sua conexão e tente novamente.";

/// A submission that reached the network and did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Tempo limite excedido")]
    Timeout,

    #[error("{} ({status})", server_error_text(.status))]
    ServerError { status: u16 },

    #[error("Falha de rede: {0}")]
    NetworkFailure(String),
}

fn server_error_text(status: &u16) -> &'static str {
    if *status == 413 {
        "Arquivo muito grande"
    } else {
        "Erro no servidor"
    }
}

impl SubmissionError {
    /// Notification text for the user. Only timeouts get their own wording.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Timeout => TIMEOUT_MESSAGE,
            SubmissionError::ServerError { .. } | SubmissionError::NetworkFailure(_) => {
                GENERIC_FAILURE_MESSAGE
            }
        }
    }
}

/// Maps a response status to the outcome of the submission. Any 2xx counts
/// as success; the body is never looked at.
pub fn check_status(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::ServerError { status })
    }
}

/// Reasons a submit attempt is refused before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Já existe um envio em andamento.")]
    InFlight,

    #[error("A justificativa já foi enviada.")]
    Completed,

    #[error("Por favor, corrija os erros antes de enviar.")]
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_2xx_is_success() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(201), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(299), Ok(()));
    }

    #[test]
    fn payload_too_large_mentions_the_file() {
        let error = check_status(413).unwrap_err();
        assert_eq!(error, SubmissionError::ServerError { status: 413 });
        assert_eq!(error.to_string(), "Arquivo muito grande (413)");
        assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn other_failures_are_generic_server_errors() {
        for status in [300, 400, 404, 500, 502] {
            let error = check_status(status).unwrap_err();
            assert_eq!(error.to_string(), format!("Erro no servidor ({status})"));
            assert_eq!(error.user_message(), GENERIC_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn timeout_has_its_own_notice() {
        assert_eq!(SubmissionError::Timeout.user_message(), TIMEOUT_MESSAGE);
        assert_eq!(
            SubmissionError::NetworkFailure("TypeError: Failed to fetch".into()).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }
}
