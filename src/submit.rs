use std::time::Duration;

use serde::Serialize;

use crate::error::{LedgerupError, Result};
use crate::models::{AccountSubmission, RawRow, UploadCounts, UploadOptions, UploadResponse};

pub const UPLOAD_ENDPOINT: &str = "/api/chart-of-accounts/upload-excel";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Map structurally complete rows to the request shape. No re-validation
/// happens here: gating on the validation report is the caller's job.
pub fn map_rows(rows: &[RawRow]) -> Vec<AccountSubmission> {
    rows.iter().map(map_row).collect()
}

fn map_row(row: &RawRow) -> AccountSubmission {
    let balance_type = {
        let raw = row.cell(4).text().to_lowercase();
        if raw.is_empty() {
            "debit".to_string()
        } else {
            raw
        }
    };
    AccountSubmission {
        name: row.cell(0).text(),
        account_type: row.cell(1).text(),
        account_group: row.cell(2).text(),
        balance: row.cell(3).as_number().unwrap_or(0.0),
        balance_type,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadRequest<'a> {
    accounts: &'a [AccountSubmission],
    create_hierarchy: bool,
    overwrite_existing: bool,
}

/// Backend client. Base URL and token are injected at construction so the
/// uploader stays testable without settings or environment access.
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(ApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
            http,
        })
    }

    /// One POST per call. Nothing is retried: a failed upload is reported
    /// and the user decides whether to run it again.
    pub fn upload(
        &self,
        accounts: &[AccountSubmission],
        options: &UploadOptions,
    ) -> Result<UploadCounts> {
        let body = UploadRequest {
            accounts,
            create_hierarchy: options.create_hierarchy,
            overwrite_existing: options.overwrite_existing,
        };
        let url = format!("{}{}", self.base_url, UPLOAD_ENDPOINT);
        let mut request = self.http.post(&url).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UploadResponse>()
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| format!("server returned {status}"));
            return Err(LedgerupError::Rejected(message));
        }

        let decoded: UploadResponse = response.json()?;
        if !decoded.success {
            return Err(LedgerupError::Rejected(
                decoded
                    .message
                    .unwrap_or_else(|| "upload failed".to_string()),
            ));
        }
        Ok(decoded.data.unwrap_or_default())
    }
}
