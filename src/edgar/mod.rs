pub mod client;
pub mod filing;

pub use client::{EdgarClient, SubmissionsFetcher, UpstreamError};
pub use filing::{project, FilingEntry, FilingsResult, ProjectionError, RawFilingsPayload};
