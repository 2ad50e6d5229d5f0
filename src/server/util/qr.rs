//! License QR code rendering.

use base64::{engine::general_purpose::STANDARD, Engine};
use qrcode::{render::svg, QrCode};

use crate::server::error::{internal::InternalError, AppError};

/// Builds the public verification URL a license QR code points at.
pub fn verification_url(app_url: &str, license_number: &str) -> String {
    format!("{}/verify/{}", app_url.trim_end_matches('/'), license_number)
}

/// Renders `value` as an SVG QR code and returns it as a base64 `data:` URL.
///
/// # Returns
/// - `Ok(String)` - `data:image/svg+xml;base64,...`
/// - `Err(AppError::InternalErr(QrEncoding))` - Value too long for a QR code
pub fn svg_data_url(value: &str) -> Result<String, AppError> {
    let code = QrCode::new(value.as_bytes()).map_err(|e| InternalError::QrEncoding {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(200, 200)
        .quiet_zone(true)
        .build();

    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image.as_bytes())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_verification_url_without_double_slash() {
        assert_eq!(
            verification_url("https://vendorvault.in/", "VV-NDLS-2026-000001"),
            "https://vendorvault.in/verify/VV-NDLS-2026-000001"
        );
    }

    #[test]
    fn renders_svg_data_url() {
        let url = svg_data_url("https://vendorvault.in/verify/VV-NDLS-2026-000001").unwrap();
        assert!(url.starts_with("data:image/svg+xml;base64,"));

        let encoded = url.trim_start_matches("data:image/svg+xml;base64,");
        let decoded = STANDARD.decode(encoded).unwrap();
        let svg = String::from_utf8(decoded).unwrap();
        assert!(svg.contains("<svg"));
    }
}
