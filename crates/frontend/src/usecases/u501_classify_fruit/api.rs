use contracts::usecases::u501_classify_fruit::{ClassificationResult, UPLOAD_FIELD};
use web_sys::{File, FormData};

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::post_multipart;

/// Upload one image to `POST /classify-fruit`
pub async fn classify(file: &File) -> Result<ClassificationResult, ApiError> {
    let form = FormData::new().map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    form.append_with_blob(UPLOAD_FIELD, file)
        .map_err(|e| ApiError::Browser(format!("{:?}", e)))?;
    post_multipart("/classify-fruit", form).await
}
