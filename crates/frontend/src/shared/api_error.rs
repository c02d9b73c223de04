use contracts::shared::api_error::detail_message;
use thiserror::Error;

/// Failure of a call to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("falha de rede: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape
    #[error("resposta inválida: {0}")]
    Decode(String),

    /// The request body could not be built
    #[error("requisição inválida: {0}")]
    Encode(String),

    /// A browser API refused the operation
    #[error("erro do navegador: {0}")]
    Browser(String),
}

impl ApiError {
    /// Builds the error of a non-2xx response from its status and raw body
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            detail: detail_message(body),
        }
    }

    /// Structured message sent by the backend, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Message for the user: the backend detail verbatim, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_shown_verbatim() {
        let err = ApiError::from_response(400, r#"{"detail":"CNPJ já cadastrado"}"#);
        assert_eq!(err.user_message("Erro ao salvar loja"), "CNPJ já cadastrado");
    }

    #[test]
    fn test_fallback_without_detail() {
        let err = ApiError::from_response(500, "Internal Server Error");
        assert_eq!(err.user_message("Erro ao salvar loja"), "Erro ao salvar loja");
        assert_eq!(
            ApiError::Network("TypeError: Failed to fetch".to_string())
                .user_message("Erro ao salvar loja"),
            "Erro ao salvar loja"
        );
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_response(401, r#"{"detail":"Não autenticado"}"#).is_unauthorized());
        assert!(!ApiError::from_response(404, "").is_unauthorized());
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::from_response(404, "").to_string(), "HTTP 404");
        assert_eq!(
            ApiError::Decode("expected value".to_string()).to_string(),
            "resposta inválida: expected value"
        );
    }
}
