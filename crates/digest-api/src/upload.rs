use crate::error::{ApiError, ApiResult};
use axum::extract::Multipart;

/// Name of the multipart field carrying the document
pub const FILE_FIELD: &str = "file";

#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Pull the PDF out of a multipart body, skipping unrelated fields
pub async fn read_pdf_upload(multipart: &mut Multipart) -> ApiResult<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("upload has no file name".to_string()))?;

        if !is_pdf_name(&file_name) {
            return Err(ApiError::NotPdf);
        }

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::EmptyUpload);
        }

        return Ok(Upload {
            file_name,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::BadRequest(format!("missing multipart field `{}`", FILE_FIELD)))
}

fn is_pdf_name(name: &str) -> bool {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
