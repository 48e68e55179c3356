use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::loader::load_table;
use crate::metrics::MetricsEnvelope;
use crate::models::Table;
use crate::risk::{applicant_profile, ApplicantProfile};
use crate::shape::{detect_strategy, Strategy};

/// Boundary input handed over by the calling layer.
#[derive(Debug, Clone, Default)]
pub struct Upload {
    pub content: Vec<u8>,
    pub filename: String,
    /// Passed through to the advisor untouched.
    pub locale: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub metrics: MetricsEnvelope,
    pub strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_profile: Option<ApplicantProfile>,
}

/// Normalizes column names, picks a strategy and extracts the envelope.
pub fn extract_financial_metrics(table: &Table, industry: Option<&str>) -> MetricsEnvelope {
    let table = table.normalized();
    detect_strategy(&table).extract(&table, industry)
}

pub fn analyze(upload: &Upload) -> Result<Analysis> {
    let table = load_table(&upload.content, &upload.filename)?.normalized();
    let strategy = detect_strategy(&table);
    info!(filename = %upload.filename, strategy = strategy.key(), "selected extraction strategy");

    let metrics = strategy.extract(&table, upload.industry.as_deref());
    let applicant_profile =
        matches!(strategy, Strategy::RiskApplicant).then(|| applicant_profile(&table));

    Ok(Analysis {
        metrics,
        strategy,
        locale: upload.locale.clone(),
        applicant_profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinHealthError;

    fn upload(content: &str, filename: &str) -> Upload {
        Upload {
            content: content.as_bytes().to_vec(),
            filename: filename.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_analyze_row_wise_csv() {
        let analysis = analyze(&upload(
            "Category,Amount\nSales,1000\nRent,200\nGST,50\n",
            "ledger.csv",
        ))
        .unwrap();
        assert_eq!(analysis.strategy.key(), "row_wise");
        assert_eq!(analysis.metrics.net_profit(), 800.0);
        assert!(analysis.applicant_profile.is_none());
    }

    #[test]
    fn test_analyze_passes_locale_and_industry() {
        let mut up = upload("Sales,Rent\n5000,1000\n", "pivot.csv");
        up.locale = Some("hi".into());
        up.industry = Some("textiles".into());
        let analysis = analyze(&up).unwrap();
        assert_eq!(analysis.locale.as_deref(), Some("hi"));
        assert_eq!(analysis.metrics.industry(), Some("textiles"));
    }

    #[test]
    fn test_analyze_risk_dataset_has_profile() {
        let analysis = analyze(&upload(
            "Loan Amount,Income,Risk Rating\n20000,100000,Low\n",
            "applicants.csv",
        ))
        .unwrap();
        assert_eq!(analysis.strategy, Strategy::RiskApplicant);
        let profile = analysis.applicant_profile.unwrap();
        assert_eq!(profile.majority_risk, "Low");
    }

    #[test]
    fn test_analyze_unsupported_format() {
        let err = analyze(&upload("whatever", "report.docx")).unwrap_err();
        assert!(matches!(err, FinHealthError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_extract_normalizes_names() {
        let table = Table::from_rows(
            vec![" CATEGORY ".into(), "Amount".into()],
            vec![vec![
                crate::models::Cell::Text("Sales".into()),
                crate::models::Cell::Number(10.0),
            ]],
        );
        let env = extract_financial_metrics(&table, None);
        assert_eq!(env.revenue_streams().total, 10.0);
    }
}
