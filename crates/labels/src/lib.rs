pub mod audit;

use base64::Engine;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Prefix of an inline base64-encoded PDF label.
pub const PDF_DATA_URI_PREFIX: &str = "data:application/pdf;base64,";

/// The servable result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelArtifact {
    /// The carrier's waybill, verbatim.
    pub tracking_number: String,
    /// Either the carrier's own URL or a locally rooted `/labels/<file>`
    /// path; absent when the carrier returned no label at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not decode inline label data: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("could not write label file: {0}")]
    Io(#[from] std::io::Error),
}

/// Persists carrier labels and owns the public-path mapping for them.
///
/// The labels directory is append-only: every write uses a fresh file name
/// and nothing here ever mutates or deletes an existing file.
#[derive(Debug, Clone)]
pub struct LabelStore {
    dir: PathBuf,
}

impl LabelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Turn a carrier package's label into a durable, servable artifact.
    ///
    /// Inline PDF data is decoded and written to disk before this returns;
    /// on a write failure the caller gets an error and no URL, so a partial
    /// file is never referenced by a success response. Anything that is not
    /// an inline PDF is assumed to already be a reachable URL and passed
    /// through without well-formedness checks (deliberate leniency, the
    /// carrier has returned several URL shapes over time).
    pub fn store(
        &self,
        order_number: &str,
        waybill: &str,
        label: Option<&str>,
    ) -> Result<LabelArtifact, StoreError> {
        let label_url = match label {
            Some(value) => Some(self.resolve_label(order_number, value)?),
            None => None,
        };

        Ok(LabelArtifact {
            tracking_number: waybill.to_string(),
            label_url,
        })
    }

    fn resolve_label(&self, order_number: &str, label: &str) -> Result<String, StoreError> {
        let Some(encoded) = label.strip_prefix(PDF_DATA_URI_PREFIX) else {
            return Ok(label.to_string());
        };

        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;

        // Unique enough to avoid accidental overwrite: two label requests
        // for the same order in the same millisecond would collide, which
        // the dashboard's submit flow cannot produce.
        let file_name = format!(
            "delhivery_label_{}_{}.pdf",
            sanitize(order_number),
            chrono::Utc::now().timestamp_millis()
        );

        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(&file_name), bytes)?;
        tracing::info!(%file_name, "label PDF written");

        Ok(format!("/labels/{file_name}"))
    }
}

/// Order numbers are caller-supplied free text; keep the file name flat.
fn sanitize(order_number: &str) -> String {
    order_number
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
        .collect()
}
