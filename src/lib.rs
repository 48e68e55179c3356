//! # finhealth
//!
//! Turns an arbitrary tabular export (CSV or spreadsheet) of an SME's
//! financial activity into seven normalized metric buckets plus net profit.
//!
//! The pipeline is a pure, single pass: [`loader::load_table`] decodes the
//! upload, [`shape::detect_strategy`] picks an extraction strategy from the
//! column names alone, and the strategy's extractor fills a
//! [`metrics::MetricsBuilder`] that is sealed into a [`MetricsEnvelope`].
//!
//! ```rust,ignore
//! let upload = finhealth::Upload {
//!     content: std::fs::read("ledger.csv")?,
//!     filename: "ledger.csv".into(),
//!     ..Default::default()
//! };
//! let analysis = finhealth::analyze(&upload)?;
//! println!("{}", analysis.metrics.net_profit());
//! ```

pub mod error;
pub mod fmt;
pub mod ledger;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod pipeline;
pub mod risk;
pub mod settings;
pub mod shape;
pub mod taxonomy;

pub use error::{FinHealthError, Result};
pub use metrics::{CategoryBucket, DetailBucket, DetailItem, MetricsEnvelope};
pub use models::{Cell, Column, Table};
pub use pipeline::{analyze, extract_financial_metrics, Analysis, Upload};
pub use risk::ApplicantProfile;
pub use shape::{detect_shape, detect_strategy, Shape, Strategy};
