//! Forwarding of vendor document files to the hosted file service.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::server::{
    config::UploadConfig,
    error::{internal::InternalError, AppError},
    model::document::{UploadFile, UploadedFile, MAX_UPLOAD_BYTES},
};

/// Fields read from the file service's upload response.
#[derive(Deserialize)]
struct HostedFile {
    secure_url: Option<String>,
    url: Option<String>,
    bytes: Option<u64>,
}

pub struct UploadService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a UploadConfig,
}

impl<'a> UploadService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a UploadConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Sends a file to `UPLOAD_URL` as multipart form field `file`.
    ///
    /// The configured preset is sent as `upload_preset`. The hosted URL is taken
    /// from `secure_url`, falling back to `url`.
    ///
    /// # Returns
    /// - `Ok(UploadedFile)` - Where the file is now hosted
    /// - `Err(AppError::BadRequest)` - Uploads disabled, or file empty or too large
    /// - `Err(AppError::ReqwestErr)` - File service unreachable or returned an error status
    pub async fn upload(&self, file: UploadFile) -> Result<UploadedFile, AppError> {
        let Some(upload_url) = self.config.url.as_deref() else {
            return Err(AppError::BadRequest(
                "File uploads are not configured".to_string(),
            ));
        };
        check_size(file.bytes.len())?;

        let size = file.bytes.len() as u64;
        let mut part = Part::bytes(file.bytes).file_name(file.file_name.clone());
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type)?;
        }

        let mut form = Form::new().part("file", part);
        if let Some(preset) = self.config.preset.clone() {
            form = form.text("upload_preset", preset);
        }

        let hosted: HostedFile = self
            .http_client
            .post(upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(url) = hosted.secure_url.or(hosted.url) else {
            return Err(InternalError::UploadWithoutUrl {
                file_name: file.file_name,
            }
            .into());
        };

        tracing::info!("Uploaded {} ({} bytes)", file.file_name, size);

        Ok(UploadedFile {
            url,
            file_name: file.file_name,
            size: hosted.bytes.unwrap_or(size),
        })
    }
}

fn check_size(len: usize) -> Result<(), AppError> {
    if len == 0 {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(AppError::BadRequest(format!(
            "Uploaded file exceeds {} MiB",
            MAX_UPLOAD_BYTES / (1024 * 1024)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_files() {
        assert!(matches!(check_size(0), Err(AppError::BadRequest(_))));
        assert!(check_size(1).is_ok());
        assert!(check_size(MAX_UPLOAD_BYTES).is_ok());
        assert!(matches!(
            check_size(MAX_UPLOAD_BYTES + 1),
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn refuses_when_uploads_are_not_configured() {
        let client = reqwest::Client::new();
        let config = UploadConfig::default();
        let service = UploadService::new(&client, &config);

        let result = service
            .upload(UploadFile {
                file_name: "pan.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                bytes: vec![1, 2, 3],
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
