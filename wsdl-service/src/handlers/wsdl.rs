use axum::{http::header, response::IntoResponse};
use service_core::error::AppError;
use service_core::extract::JsonBody;

use crate::dtos::InputData;
use crate::models::SoapResponse;

pub const XML_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// `POST /api/wsdl`: validates the JSON request and echoes it as `<soapResponse>`.
#[tracing::instrument(skip_all)]
pub async fn handle_soap_request(
    JsonBody(input): JsonBody<InputData>,
) -> Result<impl IntoResponse, AppError> {
    input.check().map_err(|invalid| {
        tracing::debug!(field = invalid.0.json_name(), "Rejected request");
        AppError::bad_request(invalid)
    })?;

    let response = SoapResponse::from(input);
    let xml = response.to_xml().map_err(AppError::InternalError)?;

    tracing::info!(
        bik = %response.bik,
        from_date = %response.from_date,
        to_date = %response.to_date,
        with_deleted = response.with_deleted,
        "Echoed request as soapResponse"
    );

    Ok(([(header::CONTENT_TYPE, XML_CONTENT_TYPE)], xml))
}
