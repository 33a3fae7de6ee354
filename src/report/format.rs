//! Terminal formatting for quotes, schedules and the reference table.
//!
//! We keep formatting code in one place so:
//! - the engine stays free of presentation concerns
//! - output changes are localized (important for future snapshot tests)

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Bound, FeeResult, Money, RetainerOutcome, TierBreakdown};
use crate::engine::Quote;
use crate::schedule::{FeeSchedule, MINIMUM_ENTERPRISE_VALUE};

const ROW_WIDTH: usize = 52;

/// Format money in whole Australian dollars, e.g. `$1,234,568` or `-$500`.
pub fn format_currency(value: Money) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a fractional rate as a percentage with one decimal, e.g. `0.025` -> `2.5%`.
pub fn format_rate(rate: Decimal) -> String {
    let pct = (rate * Decimal::ONE_HUNDRED).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.1}%")
}

/// Format a value that is already a percentage with two decimals, e.g. `3.98%`.
pub fn format_percent(pct: Decimal) -> String {
    let pct = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct:.2}%")
}

fn row(label: &str, value: &str) -> String {
    let pad = ROW_WIDTH.saturating_sub(label.chars().count()).max(1);
    format!("{label}{value:>pad$}\n")
}

/// Retainer detail line, e.g. `(5 months × $15,000/mo)`.
pub fn retainer_detail(retainer: &RetainerOutcome) -> String {
    let unit = if retainer.months_counted == 1 { "month" } else { "months" };
    format!(
        "({} {unit} × {}/mo)",
        retainer.months_counted,
        format_currency(retainer.monthly_rate)
    )
}

/// Warning shown for quotes below the minimum engagement size.
pub fn minimum_ev_warning(ev: Money) -> Option<String> {
    if ev > Decimal::ZERO && ev < MINIMUM_ENTERPRISE_VALUE {
        Some(format!(
            "Minimum Enterprise Value is {}",
            format_currency(MINIMUM_ENTERPRISE_VALUE)
        ))
    } else {
        None
    }
}

/// Format the fee summary block of a quote.
pub fn format_fee_summary(quote: &Quote, rebate_rate: Decimal) -> String {
    let r = &quote.result;
    let mut out = String::new();

    out.push_str("=== Fee Estimate ===\n");
    out.push_str(&format!("Enterprise Value: {}\n", format_currency(r.enterprise_value)));
    if let Some(warning) = minimum_ev_warning(r.enterprise_value) {
        out.push_str(&format!("! {warning}\n"));
    }

    out.push_str("\nFee summary:\n");
    out.push_str(&row("Total Retainers Paid", &format_currency(r.retainer_paid)));
    out.push_str(&format!("  {}\n", retainer_detail(&quote.retainer)));
    out.push_str(&row(
        "Transaction Structuring Fee",
        &format_currency(r.transaction_structuring_fee),
    ));
    out.push_str(&row("Gross Success Fee", &format_currency(r.gross_success_fee)));
    if r.rebate_applies && r.retainer_rebate > Decimal::ZERO {
        out.push_str(&row(
            &format!("Retainer Rebate ({})", format_rate_whole(rebate_rate)),
            &format!("-{}", format_currency(r.retainer_rebate)),
        ));
    }
    out.push_str(&"-".repeat(ROW_WIDTH));
    out.push('\n');
    out.push_str(&row("TOTAL FEES", &format_currency(r.total_fees)));
    out.push_str(&row("Effective Rate", &format_percent(r.effective_rate)));

    out
}

/// `0.5` -> `50%`; used where the rate is a policy constant.
fn format_rate_whole(rate: Decimal) -> String {
    let pct = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{pct}%")
}

/// Format the success fee breakdown table.
pub fn format_tier_table(rows: &[TierBreakdown]) -> String {
    let mut out = String::new();
    out.push_str("Success fee breakdown:\n");
    out.push_str(format!("{:<16} {:>14} {:>7} {:>12}\n", "tier", "amount", "rate", "fee").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<16} {:-<14} {:-<7} {:-<12}\n", "", "", "", "").trim_end());
    out.push('\n');

    if rows.is_empty() {
        out.push_str("(no success fee)\n");
        return out;
    }

    for t in rows {
        out.push_str(
            format!(
                "{:<16} {:>14} {:>7} {:>12}\n",
                truncate(&t.label, 16),
                format_currency(t.amount),
                format_rate(t.rate),
                format_currency(t.fee),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the reference table of quotes at sample EVs.
///
/// The last row is marked `+` since it stands for "this EV and above".
pub fn format_reference_table(rows: &[FeeResult]) -> String {
    let mut out = String::new();
    out.push_str("Fee structure reference:\n");
    out.push_str(
        format!(
            "{:<14} {:>10} {:>12} {:>12} {:>8}\n",
            "EV", "TSF", "success", "total", "% of EV"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<14} {:-<10} {:-<12} {:-<12} {:-<8}\n", "", "", "", "", "").trim_end());
    out.push('\n');

    let last = rows.len().saturating_sub(1);
    for (i, r) in rows.iter().enumerate() {
        let ev = if i == last {
            format!("{}+", format_currency(r.enterprise_value))
        } else {
            format_currency(r.enterprise_value)
        };
        out.push_str(
            format!(
                "{:<14} {:>10} {:>12} {:>12} {:>8}\n",
                ev,
                format_currency(r.transaction_structuring_fee),
                format_currency(r.gross_success_fee),
                format_currency(r.total_fees),
                format_percent(r.effective_rate),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the active schedule tables for display.
pub fn format_schedule(schedule: &FeeSchedule) -> String {
    let mut out = String::new();

    out.push_str("Success fee tiers (cumulative):\n");
    for tier in schedule.tiers() {
        let cap = match tier.upper_bound {
            Bound::Capped(cap) => format!("up to {}", format_currency(cap)),
            Bound::Unbounded => "no cap".to_string(),
        };
        out.push_str(&format!("  {:<16} {:<18} {}\n", tier.label, cap, format_rate(tier.rate)));
    }

    out.push_str("\nTransaction structuring fee:\n");
    for band in schedule.tsf_bands() {
        let range = match band.upper_inclusive {
            Bound::Capped(upper) => format!(
                "{} < EV <= {}",
                format_currency(band.lower_exclusive),
                format_currency(upper)
            ),
            Bound::Unbounded => format!("EV > {}", format_currency(band.lower_exclusive)),
        };
        out.push_str(&format!("  {:<14} {:<30} {}\n", band.label, range, format_currency(band.fee)));
    }

    let ret = schedule.retainer();
    out.push_str("\nRetainer:\n");
    let reduced = if ret.reduced_monthly_rate == ret.standard_monthly_rate {
        String::new()
    } else {
        format!(
            " ({}/mo below EV {})",
            format_currency(ret.reduced_monthly_rate),
            format_currency(ret.reduced_rate_below_ev)
        )
    };
    out.push_str(&format!(
        "  {}/mo{}, at most {} months\n",
        format_currency(ret.standard_monthly_rate),
        reduced,
        ret.max_months
    ));
    out.push_str(&format!(
        "  rebate {} of retainers paid, capped at {}, when EV >= {}\n",
        format_rate_whole(ret.rebate_rate),
        format_currency(ret.max_rebate),
        format_currency(ret.rebate_ev_threshold)
    ));

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
