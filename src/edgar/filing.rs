use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Hardcoded values: this service tracks a single issuer (Berkshire Hathaway).
pub const TRACKED_CIK: &str = "0001067983";
pub const FORM_13F_HR: &str = "13F-HR";
pub const FORM_13F_HR_AMENDED: &str = "13F-HR/A";
pub const MAX_FILINGS: usize = 8;

/// EDGAR full-text browse page for the tracked issuer's 13F filings. The
/// submissions feed does not carry per-filing links, so every entry points
/// at the same company-level index.
pub const FILING_INDEX_URL: &str =
    "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany&CIK=0001067983&type=13F";

/// The raw EDGAR submissions document for one issuer.
///
/// `filings.recent` holds parallel arrays: index `i` across `form`,
/// `filingDate`, `reportDate` and `accessionNumber` describes one filing
/// event. The wrapper levels are optional so a structurally truncated
/// document is reported as malformed rather than failing JSON decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFilingsPayload {
    pub name: String,
    pub cik: String,
    #[serde(default)]
    pub filings: Option<FilingHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingHistory {
    #[serde(default)]
    pub recent: Option<RecentFilings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentFilings {
    pub form: Vec<String>,
    #[serde(rename = "filingDate")]
    pub filing_date: Vec<String>,
    #[serde(rename = "reportDate")]
    pub report_date: Vec<String>,
    #[serde(rename = "accessionNumber")]
    pub accession_number: Vec<String>,
}

/// One projected 13F filing, as served to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingEntry {
    pub form: String,
    #[serde(rename = "filingDate")]
    pub filing_date: String,
    #[serde(rename = "reportDate")]
    pub report_date: String,
    #[serde(rename = "accessionNumber")]
    pub accession_number: String,
    pub url: String,
}

/// The filtered view of the submissions document. This is the unit that gets
/// cached and returned; `fetched_at` is frozen at projection time, so cache
/// hits serve the original timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingsResult {
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub cik: String,
    pub filings: Vec<FilingEntry>,
    #[serde(rename = "fetchedAt")]
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("malformed submissions payload: {0}")]
    MalformedPayload(String),
}

/// Projects the raw submissions document down to the most recent 13F-HR and
/// 13F-HR/A filings, capped at [`MAX_FILINGS`] entries.
///
/// The parallel arrays are scanned in upstream order, which EDGAR serves
/// most-recent-first; no re-sorting happens here.
pub fn project(payload: RawFilingsPayload) -> Result<FilingsResult, ProjectionError> {
    let recent = payload
        .filings
        .and_then(|f| f.recent)
        .ok_or_else(|| ProjectionError::MalformedPayload("filings.recent is missing".into()))?;

    let len = recent.form.len();
    if recent.filing_date.len() != len
        || recent.report_date.len() != len
        || recent.accession_number.len() != len
    {
        return Err(ProjectionError::MalformedPayload(format!(
            "parallel arrays have mismatched lengths: form={}, filingDate={}, reportDate={}, accessionNumber={}",
            len,
            recent.filing_date.len(),
            recent.report_date.len(),
            recent.accession_number.len()
        )));
    }

    let mut filings = Vec::new();
    for i in 0..len {
        if recent.form[i] == FORM_13F_HR || recent.form[i] == FORM_13F_HR_AMENDED {
            filings.push(FilingEntry {
                form: recent.form[i].clone(),
                filing_date: recent.filing_date[i].clone(),
                report_date: recent.report_date[i].clone(),
                accession_number: recent.accession_number[i].clone(),
                url: FILING_INDEX_URL.to_string(),
            });
            if filings.len() >= MAX_FILINGS {
                break;
            }
        }
    }

    Ok(FilingsResult {
        company_name: payload.name,
        cik: payload.cik,
        filings,
        fetched_at: Utc::now(),
    })
}
