use serde::{Deserialize, Serialize};

/// Multipart field carrying the image in `POST /classify-fruit`
pub const UPLOAD_FIELD: &str = "file";

/// Label the model assigns to spoiled fruit
pub const LABEL_SPOILED: &str = "Podre";

/// Response of `POST /classify-fruit`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "classe")]
    pub label: String,
    /// Softmax probability of `label`, in `0.0..=1.0`
    #[serde(rename = "probabilidade")]
    pub probability: f64,
}

impl ClassificationResult {
    pub fn is_spoiled(&self) -> bool {
        self.label == LABEL_SPOILED
    }

    /// `87.50%`
    pub fn probability_display(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_and_display() {
        let r: ClassificationResult =
            serde_json::from_str(r#"{"classe":"Podre","probabilidade":0.875}"#).unwrap();
        assert!(r.is_spoiled());
        assert_eq!(r.probability_display(), "87.50%");
    }

    #[test]
    fn test_normal_label() {
        let r = ClassificationResult {
            label: "Normal".to_string(),
            probability: 0.99999,
        };
        assert!(!r.is_spoiled());
        assert_eq!(r.probability_display(), "100.00%");
    }
}
