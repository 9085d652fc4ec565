//! Printable salary report.
//!
//! Renders a [`SalaryResults`] as a plain-text breakdown, one section per
//! month followed by the totals, with amounts in Indian Rupees.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::models::{SalaryBreakdown, SalaryResults, round_currency};

const LABEL_WIDTH: usize = 34;
const AMOUNT_WIDTH: usize = 16;

/// Formats an amount as Indian Rupees with en-IN digit grouping.
///
/// The amount is shown to the whole rupee, halves rounding up; the last
/// three digits are grouped together and the rest in pairs.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::report::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::from(123456)), "₹ 1,23,456");
/// assert_eq!(format_inr(Decimal::from(-250)), "₹ -250");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let whole = round_currency(amount);
    let digits = whole.abs().trunc().to_string();
    let sign = if whole.is_sign_negative() && !whole.is_zero() {
        "-"
    } else {
        ""
    };

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!("₹ {}{}", sign, grouped)
}

/// Renders the printable breakdown of a calculation.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::calculate_salary;
/// use cpc_salary_engine::config::ConfigLoader;
/// use cpc_salary_engine::models::{Month, MonthEntry, SalaryInput};
/// use cpc_salary_engine::report::render_report;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::bundled().unwrap();
/// let mut input = SalaryInput::new("5", Decimal::from(29200));
/// input.months.push(MonthEntry::new(Month::January, 2025, 31));
///
/// let results = calculate_salary(&input, loader.config()).unwrap();
/// let report = render_report(&results);
/// assert!(report.contains("January 2025"));
/// assert!(report.contains("Net Salary"));
/// ```
pub fn render_report(results: &SalaryResults) -> String {
    let mut out = String::new();

    let title = results.cpc_version.title();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        "Basic Pay",
        format_inr(results.effective_basic_pay)
    );

    for month in &results.monthly_results {
        let heading = format!(
            "{} ({} of {} days)",
            month.period(),
            month.days_worked,
            month.days_in_month
        );
        render_section(&mut out, &heading, &month.breakdown);
    }

    if results.monthly_results.len() > 1 {
        render_section(&mut out, "Total", &results.totals);
    }

    out
}

fn render_section(out: &mut String, heading: &str, b: &SalaryBreakdown) {
    let rule = "-".repeat(LABEL_WIDTH + AMOUNT_WIDTH);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", rule);

    let _ = writeln!(out, "Earnings");
    row(out, "New Basic Pay", b.basic_pay);
    row(out, "DA on Basic Pay", b.da_on_basic);
    row(out, "Transport Allowance (TA)", b.ta);
    row(out, "DA on TA", b.da_on_ta);
    row(out, "HPCA", b.hpca);
    row(out, "Special Duty Allowance (SDA)", b.sda);
    row(out, "House Rent Allowance (HRA)", b.hra);
    row(out, "Employer Contribution (14%)", b.employer_contribution);
    let _ = writeln!(out, "{}", rule);
    row(out, "Gross Salary", b.gross_salary);

    let _ = writeln!(out);
    let _ = writeln!(out, "Deductions");
    row(out, "NPS (10%)", b.nps);
    row(out, "Employer Contribution (14%)", b.employer_contribution);
    row(out, "Fixed Deduction", b.fixed_deduction);
    let _ = writeln!(out, "{}", rule);
    row(out, "Total Deductions", b.total_deductions);

    let _ = writeln!(out, "{}", "=".repeat(LABEL_WIDTH + AMOUNT_WIDTH));
    row(out, "Net Salary", b.net_salary);
}

fn row(out: &mut String, label: &str, amount: Decimal) {
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        label,
        format_inr(amount)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_salary;
    use crate::config::ConfigLoader;
    use crate::models::{CpcVersion, Month, MonthEntry, SalaryInput};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn results_for(months: Vec<MonthEntry>) -> SalaryResults {
        let loader = ConfigLoader::bundled().unwrap();
        let mut input = SalaryInput::new("5", dec("29200"));
        input.da_percentage = dec("58");
        input.include_hpca = true;
        input.include_hra = true;
        input.hra_city = Some("Other Cities".to_string());
        input.months = months;
        calculate_salary(&input, loader.config()).unwrap()
    }

    #[test]
    fn test_format_inr_small_amounts() {
        assert_eq!(format_inr(dec("0")), "₹ 0");
        assert_eq!(format_inr(dec("250")), "₹ 250");
        assert_eq!(format_inr(dec("999")), "₹ 999");
    }

    #[test]
    fn test_format_inr_indian_grouping() {
        assert_eq!(format_inr(dec("1000")), "₹ 1,000");
        assert_eq!(format_inr(dec("29200")), "₹ 29,200");
        assert_eq!(format_inr(dec("123456")), "₹ 1,23,456");
        assert_eq!(format_inr(dec("12345678")), "₹ 1,23,45,678");
    }

    #[test]
    fn test_format_inr_rounds_to_whole_rupees() {
        assert_eq!(format_inr(dec("4613.6")), "₹ 4,614");
        assert_eq!(format_inr(dec("2562.5")), "₹ 2,563");
    }

    #[test]
    fn test_format_inr_negative() {
        assert_eq!(format_inr(dec("-250")), "₹ -250");
        assert_eq!(format_inr(dec("-123456")), "₹ -1,23,456");
    }

    #[test]
    fn test_single_month_report_has_no_total_section() {
        let report = render_report(&results_for(vec![MonthEntry::new(
            Month::February,
            2024,
            29,
        )]));

        assert!(report.starts_with("7th CPC Salary Calculator\n"));
        assert!(report.contains("February 2024 (29 of 29 days)"));
        assert!(report.contains("₹ 52,161"));
        assert!(report.contains("₹ 63,484"));
        assert!(!report.contains("\nTotal\n"));
    }

    #[test]
    fn test_multi_month_report_has_total_section() {
        let report = render_report(&results_for(vec![
            MonthEntry::new(Month::February, 2024, 29),
            MonthEntry::new(Month::March, 2024, 31),
        ]));

        assert!(report.contains("February 2024"));
        assert!(report.contains("March 2024"));
        assert!(report.contains("\nTotal\n"));
    }

    #[test]
    fn test_report_rows_are_aligned() {
        let report = render_report(&results_for(vec![MonthEntry::new(
            Month::February,
            2024,
            29,
        )]));

        let net_line = report
            .lines()
            .find(|l| l.starts_with("Net Salary"))
            .unwrap();
        assert_eq!(net_line.chars().count(), LABEL_WIDTH + AMOUNT_WIDTH);
    }

    #[test]
    fn test_eighth_cpc_report_title() {
        let mut results = results_for(vec![MonthEntry::new(Month::January, 2025, 31)]);
        results.cpc_version = CpcVersion::Eighth;

        let report = render_report(&results);
        assert!(report.starts_with("Assumed 8th CPC Salary Calculator\n"));
    }
}
