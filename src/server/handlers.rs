use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use chrono::Local;
use serde::Serialize;
use tracing::{debug, info};

use crate::ingest::{read_upload, SheetFormat};
use crate::models::{ForecastLine, WeatherSnapshot};
use crate::server::error::ApiError;
use crate::server::page::INDEX_HTML;
use crate::server::AppState;

pub const SALES_FIELD: &str = "sales_file";
pub const WRITEOFFS_FIELD: &str = "writeoffs_file";

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub weather: WeatherSnapshot,
    pub forecast: Vec<ForecastLine>,
    pub analysis_date: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().to_rfc3339(),
    })
}

pub async fn create_forecast(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ForecastResponse>, ApiError> {
    let mut sales: Option<Upload> = None;
    let mut writeoffs: Option<Upload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        match name.as_str() {
            SALES_FIELD | WRITEOFFS_FIELD => {
                let bytes = field.bytes().await?.to_vec();
                let upload = Upload { file_name, bytes };
                if name == SALES_FIELD {
                    sales = Some(upload);
                } else {
                    writeoffs = Some(upload);
                }
            }
            other => debug!("Ignoring multipart field '{}'", other),
        }
    }

    let sales = sales.ok_or_else(|| ApiError::BadRequest("sales file is required".to_string()))?;
    let writeoffs = writeoffs
        .ok_or_else(|| ApiError::BadRequest("write-offs file is required".to_string()))?;

    // Both extensions are checked before either file is read.
    require_spreadsheet(&sales, "sales")?;
    require_spreadsheet(&writeoffs, "write-offs")?;

    let sales_table = read_upload("sales", &sales.file_name, &sales.bytes)?;
    let writeoffs_table = read_upload("writeoffs", &writeoffs.file_name, &writeoffs.bytes)?;

    let now = Local::now();
    let forecast = state
        .engine
        .analyze(&sales_table, &writeoffs_table, now.naive_local())?;
    let weather = state
        .weather
        .get_forecast(&state.location, now.naive_local())
        .await;

    info!(
        "Forecast for {} products ({} sales rows, {} write-off rows), weather {}",
        forecast.len(),
        sales_table.len(),
        writeoffs_table.len(),
        if weather.is_fallback() { "fallback" } else { "live" }
    );

    Ok(Json(ForecastResponse {
        weather,
        forecast,
        analysis_date: now.to_rfc3339(),
    }))
}

fn require_spreadsheet(upload: &Upload, label: &str) -> Result<(), ApiError> {
    match SheetFormat::from_file_name(&upload.file_name) {
        Some(_) => Ok(()),
        None => Err(ApiError::BadRequest(format!(
            "{} file must be an Excel (.xlsx, .xls) or CSV spreadsheet, got '{}'",
            label, upload.file_name
        ))),
    }
}
