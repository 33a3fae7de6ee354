//! Export a computed quote as a fee-estimate document or JSON.
//!
//! Exports only read the `FeeResult`; they never recompute fees.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::access::Recipient;
use crate::domain::{FeeResult, Money};
use crate::engine::Quote;
use crate::error::AppError;
use crate::report::{format_currency, format_percent, format_rate, retainer_detail};

const DISCLAIMER: &str = "This is an estimate only. Final fees subject to signed engagement terms.";

/// `fee-estimate-15.0M.md` for an EV of $15,000,000.
pub fn default_estimate_file_name(ev: Money) -> PathBuf {
    let millions = (ev / Decimal::from(1_000_000)).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    PathBuf::from(format!("fee-estimate-{millions:.1}M.md"))
}

/// Write a Markdown fee-estimate document.
pub fn write_estimate_markdown(
    path: &Path,
    quote: &Quote,
    rebate_rate: Decimal,
    recipient: Option<&Recipient>,
    generated_on: NaiveDate,
) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create estimate '{}': {e}", path.display())))?;

    file.write_all(render_estimate_markdown(quote, rebate_rate, recipient, generated_on).as_bytes())
        .map_err(|e| AppError::new(2, format!("Failed to write estimate: {e}")))?;

    tracing::info!(path = %path.display(), "wrote fee estimate");
    Ok(())
}

/// Render the estimate document body.
pub fn render_estimate_markdown(
    quote: &Quote,
    rebate_rate: Decimal,
    recipient: Option<&Recipient>,
    generated_on: NaiveDate,
) -> String {
    let r = &quote.result;
    let mut out = String::new();

    out.push_str("# Fee Estimate\n\n");
    if let Some(recipient) = recipient {
        out.push_str(&format!("Prepared for: {}\n", recipient.display_name()));
        if let Some(company) = &recipient.company {
            out.push_str(&format!("Company: {} ({})\n", company.name, company.industry));
        }
        out.push('\n');
    }

    out.push_str("## Enterprise Value\n\n");
    out.push_str(&format!("**{}**\n\n", format_currency(r.enterprise_value)));

    out.push_str("## Fee Summary\n\n");
    out.push_str("| Item | Amount |\n| - | -: |\n");
    out.push_str(&format!(
        "| Total Retainers Paid {} | {} |\n",
        retainer_detail(&quote.retainer),
        format_currency(r.retainer_paid)
    ));
    out.push_str(&format!(
        "| Transaction Structuring Fee | {} |\n",
        format_currency(r.transaction_structuring_fee)
    ));
    out.push_str(&format!("| Gross Success Fee | {} |\n", format_currency(r.gross_success_fee)));
    if r.rebate_applies && r.retainer_rebate > Decimal::ZERO {
        let pct = (rebate_rate * Decimal::ONE_HUNDRED).normalize();
        out.push_str(&format!(
            "| Retainer Rebate ({pct}%) | -{} |\n",
            format_currency(r.retainer_rebate)
        ));
    }
    out.push_str(&format!("| **TOTAL FEES** | **{}** |\n\n", format_currency(r.total_fees)));
    out.push_str(&format!("Effective Rate: {}\n\n", format_percent(r.effective_rate)));

    out.push_str("## Success Fee Breakdown\n\n");
    out.push_str("| Tier | Amount | Rate | Fee |\n| - | -: | -: | -: |\n");
    for t in &r.tier_breakdown {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            t.label,
            format_currency(t.amount),
            format_rate(t.rate),
            format_currency(t.fee)
        ));
    }

    out.push_str("\n---\n\n");
    out.push_str(DISCLAIMER);
    out.push('\n');
    out.push_str(&format!("Generated on {}\n", generated_on.format("%d/%m/%Y")));

    out
}

/// Write the raw `FeeResult` as pretty JSON.
pub fn write_result_json(path: &Path, result: &FeeResult) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create result JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, result)
        .map_err(|e| AppError::new(2, format!("Failed to write result JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote fee result");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::Company;
    use crate::engine::calculate_quote;
    use crate::schedule::FeeSchedule;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    #[test]
    fn file_name_uses_millions_with_one_decimal() {
        assert_eq!(default_estimate_file_name(dec!(15000000)), PathBuf::from("fee-estimate-15.0M.md"));
        assert_eq!(default_estimate_file_name(dec!(12345678)), PathBuf::from("fee-estimate-12.3M.md"));
    }

    #[test]
    fn estimate_contains_summary_and_breakdown() {
        let schedule = FeeSchedule::standard();
        let quote = calculate_quote(dec!(15000000), Some(5), &schedule);
        let recipient = Recipient {
            name: Some("Jordan Lee".to_string()),
            email: None,
            company: Some(Company {
                name: "Acme Pty Ltd".to_string(),
                industry: "Manufacturing".to_string(),
            }),
        };
        let doc = render_estimate_markdown(&quote, schedule.retainer().rebate_rate, Some(&recipient), date());

        assert!(doc.contains("Prepared for: Jordan Lee"));
        assert!(doc.contains("Company: Acme Pty Ltd (Manufacturing)"));
        assert!(doc.contains("**$15,000,000**"));
        assert!(doc.contains("| Retainer Rebate (50%) | -$37,500 |"));
        assert!(doc.contains("| **TOTAL FEES** | **$597,500** |"));
        assert!(doc.contains("| $10M - $15M | $5,000,000 | 3.0% | $150,000 |"));
        assert!(doc.contains(DISCLAIMER));
        assert!(doc.contains("Generated on 09/03/2026"));
    }

    #[test]
    fn writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let schedule = FeeSchedule::standard();
        let quote = calculate_quote(dec!(12000000), None, &schedule);

        let md = dir.path().join("estimate.md");
        write_estimate_markdown(&md, &quote, schedule.retainer().rebate_rate, None, date()).unwrap();
        let text = std::fs::read_to_string(&md).unwrap();
        assert!(text.starts_with("# Fee Estimate"));
        assert!(!text.contains("Prepared for"));

        let json = dir.path().join("result.json");
        write_result_json(&json, &quote.result).unwrap();
        let back: FeeResult = serde_json::from_reader(File::open(&json).unwrap()).unwrap();
        assert_eq!(back, quote.result);
    }
}
