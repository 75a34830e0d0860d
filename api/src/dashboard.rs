//! Cargatron: a one-page dashboard of Madrid's charging points.
//!
//! `GET /dashboard` renders the home section and an upload form. Posting a
//! CSV file back renders the same page with the file shown as a table.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use serde::Serialize;
use std::io::Read;
use tera::Tera;
use tracing::info;

use crate::{AppState, error::ApiError};

pub const PAGE_TITLE: &str = "Cargatron";
pub const PAGE_ICON: &str = "🔥";
pub const IMAGE_PATH: &str = "/static/img/puntos-recarga-madrid.svg";
pub const IMAGE_WIDTH: u32 = 500;
pub const DESCRIPTION_LABEL: &str = "Descripción";
pub const DESCRIPTION: &str = "Bienvenido al cargatron de Madrid. Localiza las estaciones de carga electrica de la ciudad.";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

const TEMPLATE: &str = "dashboard.html.tera";

/// An uploaded CSV file, header row split from the records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Reads a CSV document whose first record is the header.
    ///
    /// Records of differing length are accepted; every row and the header are
    /// padded with empty cells to the widest record.
    pub fn from_csv<R: Read>(reader: R) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut headers: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            rows.push(record?.iter().map(str::to_owned).collect::<Vec<_>>());
        }

        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or_default();
        headers.resize(width, String::new());
        for row in &mut rows {
            row.resize(width, String::new());
        }

        Ok(Self { headers, rows })
    }

    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub async fn home(state: State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state.templates, None)
}

pub async fn upload(
    state: State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut table = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        // Browsers submit an empty file name when nothing was picked.
        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => continue,
        };
        if !is_csv(&file_name) {
            return Err(ApiError::UnsupportedFileType(file_name));
        }

        let content = field.bytes().await?;
        let parsed = Table::from_csv(content.as_ref())?;
        info!(
            %file_name,
            rows = parsed.len(),
            columns = parsed.columns(),
            "csv uploaded"
        );
        table = Some(parsed);
    }

    render(&state.templates, table.as_ref())
}

fn is_csv(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn render(templates: &Tera, table: Option<&Table>) -> Result<Html<String>, ApiError> {
    let mut ctx = tera::Context::new();
    ctx.insert("title", PAGE_TITLE);
    ctx.insert("icon", PAGE_ICON);
    ctx.insert("image_path", IMAGE_PATH);
    ctx.insert("image_width", &IMAGE_WIDTH);
    ctx.insert("description_label", DESCRIPTION_LABEL);
    ctx.insert("description", DESCRIPTION);
    ctx.insert("upload_field", UPLOAD_FIELD);
    if let Some(table) = table {
        ctx.insert("table", table);
    }

    let body = templates.render(TEMPLATE, &ctx)?;

    Ok(Html(body))
}
