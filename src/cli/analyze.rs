use colored::Colorize;
use comfy_table::{Cell, Table};

use finhealth::error::Result;
use finhealth::fmt::amount;
use finhealth::pipeline::{analyze, Analysis, Upload};
use finhealth::settings::{OutputFormat, Settings};

use super::read_upload;

pub fn run(
    settings: &Settings,
    file: &str,
    industry: Option<String>,
    locale: Option<String>,
    json: bool,
) -> Result<()> {
    let (content, filename) = read_upload(file)?;
    let upload = Upload {
        content,
        filename,
        locale: locale.or_else(|| Some(settings.default_locale.clone())),
        industry: industry.or_else(|| settings.default_industry.clone()),
    };
    let analysis = analyze(&upload)?;

    if json || settings.output == OutputFormat::Json {
        let out = serde_json::to_string_pretty(&analysis.metrics)
            .map_err(|e| finhealth::FinHealthError::Other(e.to_string()))?;
        println!("{out}");
    } else {
        print_report(&analysis);
    }
    Ok(())
}

fn print_report(analysis: &Analysis) {
    let metrics = &analysis.metrics;
    let mut table = Table::new();
    table.set_header(vec!["Bucket", "Amount"]);

    for (title, bucket, color_green) in [
        ("REVENUE", metrics.revenue_streams(), true),
        ("COSTS", metrics.cost_structure(), false),
    ] {
        let heading = if color_green {
            title.green().bold()
        } else {
            title.red().bold()
        };
        table.add_row(vec![Cell::new(heading), Cell::new("")]);
        for (name, value) in &bucket.categories {
            table.add_row(vec![
                Cell::new(format!("  {name}")),
                Cell::new(amount(*value)),
            ]);
        }
        table.add_row(vec![
            Cell::new(format!("Total {}", title.to_lowercase()).bold()),
            Cell::new(amount(bucket.total)),
        ]);
        table.add_row(vec![Cell::new(""), Cell::new("")]);
    }

    for (key, bucket) in metrics.detail_buckets() {
        table.add_row(vec![Cell::new(key.bold()), Cell::new(amount(bucket.total))]);
        for item in &bucket.details {
            table.add_row(vec![
                Cell::new(format!("  {}", item.item)),
                Cell::new(amount(item.amount)),
            ]);
        }
    }
    table.add_row(vec![Cell::new(""), Cell::new("")]);

    let net_label = if metrics.net_profit() >= 0.0 {
        "NET PROFIT".green().bold()
    } else {
        "NET PROFIT".red().bold()
    };
    table.add_row(vec![Cell::new(net_label), Cell::new(amount(metrics.net_profit()))]);

    println!("Financial Metrics ({})\n{table}", analysis.strategy.key());

    if let Some(profile) = &analysis.applicant_profile {
        let mut risk = Table::new();
        risk.set_header(vec!["Risk Rating", "Applicants"]);
        for (rating, count) in &profile.risk_counts {
            risk.add_row(vec![Cell::new(rating), Cell::new(count)]);
        }
        println!("Applicant Profile\n{risk}");
        println!("Majority risk:        {}", profile.majority_risk);
        match profile.average_credit_score {
            Some(score) => println!("Average credit score: {score:.1}"),
            None => println!("Average credit score: (n/a)"),
        }
    }
}
