use contracts::usecases::u501_classify_fruit::ClassificationResult;

use crate::shared::api_error::ApiError;

pub const MSG_NO_FILE: &str = "Selecione uma imagem!";
pub const MSG_CLASSIFY_FAILED: &str = "Erro ao verificar fruta";

/// Screen state apart from the picked `File` itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifyState {
    /// Object URL of the picked image
    pub preview_url: Option<String>,
    pub result: Option<ClassificationResult>,
    pub loading: bool,
}

impl ClassifyState {
    /// A new image was picked; returns the previous preview URL to revoke
    pub fn pick(&mut self, preview_url: Option<String>) -> Option<String> {
        self.result = None;
        std::mem::replace(&mut self.preview_url, preview_url)
    }

    pub fn begin(&mut self, has_file: bool) -> Result<(), String> {
        if !has_file {
            return Err(MSG_NO_FILE.to_string());
        }
        self.loading = true;
        self.result = None;
        Ok(())
    }

    /// Stores the outcome; returns the message to show on failure
    pub fn finish(&mut self, outcome: Result<ClassificationResult, ApiError>) -> Option<String> {
        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                None
            }
            Err(e) => Some(e.user_message(MSG_CLASSIFY_FAILED)),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ClassificationResult {
        ClassificationResult {
            label: "Fresca".to_string(),
            probability: 0.93,
        }
    }

    #[test]
    fn test_submit_without_file_is_rejected() {
        let mut state = ClassifyState::default();
        assert_eq!(state.begin(false), Err("Selecione uma imagem!".to_string()));
        assert!(!state.loading);
    }

    #[test]
    fn test_pick_clears_previous_result() {
        let mut state = ClassifyState::default();
        assert_eq!(state.pick(Some("blob:a".to_string())), None);
        state.begin(true).unwrap();
        state.finish(Ok(fresh()));
        assert!(state.result.is_some());

        let old = state.pick(Some("blob:b".to_string()));
        assert_eq!(old.as_deref(), Some("blob:a"));
        assert!(state.result.is_none());
        assert_eq!(state.preview_url.as_deref(), Some("blob:b"));
    }

    #[test]
    fn test_loading_blocks_resubmit() {
        let mut state = ClassifyState::default();
        state.begin(true).unwrap();
        assert!(!state.can_submit());
        state.finish(Ok(fresh()));
        assert!(state.can_submit());
        assert_eq!(state.result, Some(fresh()));
    }

    #[test]
    fn test_result_survives_missing_preview() {
        let mut state = ClassifyState::default();
        state.pick(None);
        state.begin(true).unwrap();
        state.finish(Ok(fresh()));
        assert!(state.preview_url.is_none());
        assert_eq!(state.result, Some(fresh()));
    }

    #[test]
    fn test_failure_uses_server_detail_or_fallback() {
        let mut state = ClassifyState::default();
        state.begin(true).unwrap();
        let msg = state.finish(Err(ApiError::from_response(
            400,
            r#"{"detail":"Arquivo não é uma imagem"}"#,
        )));
        assert_eq!(msg.as_deref(), Some("Arquivo não é uma imagem"));
        assert!(!state.loading);
        assert!(state.result.is_none());

        state.begin(true).unwrap();
        let msg = state.finish(Err(ApiError::Network("offline".to_string())));
        assert_eq!(msg.as_deref(), Some("Erro ao verificar fruta"));
    }
}
