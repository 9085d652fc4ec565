//! Salary result models for the CPC Salary Engine.
//!
//! This module contains the [`SalaryResults`] type and its associated structures
//! that capture all outputs of a salary calculation: per-month breakdowns,
//! aggregate totals and the audit trace.

use std::iter::Sum;
use std::ops::AddAssign;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CpcVersion, Month};

/// Rounds a money amount to the nearest whole rupee, halves rounding up.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::models::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("4613.6").unwrap()), Decimal::from(4614));
/// assert_eq!(round_currency(Decimal::from_str("2.5").unwrap()), Decimal::from(3));
/// assert_eq!(round_currency(Decimal::from_str("-2.5").unwrap()), Decimal::from(-2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    (amount + Decimal::new(5, 1)).floor()
}

/// The money components of a salary calculation.
///
/// The same shape carries the unrounded amounts of a month, the rounded
/// amounts reported for it, and the aggregate over several months.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let mut month = SalaryBreakdown::default();
/// month.basic_pay = Decimal::from(29200);
/// month.net_salary = Decimal::from(52161);
///
/// let totals: SalaryBreakdown = [month.clone(), month].into_iter().sum();
/// assert_eq!(totals.basic_pay, Decimal::from(58400));
/// assert_eq!(totals.net_salary, Decimal::from(104322));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Basic pay prorated by days worked.
    pub basic_pay: Decimal,
    /// Dearness allowance on the prorated basic pay.
    pub da_on_basic: Decimal,
    /// Transport allowance prorated by days worked.
    pub ta: Decimal,
    /// Dearness allowance on the transport allowance.
    pub da_on_ta: Decimal,
    /// Hill/project compensatory allowance.
    pub hpca: Decimal,
    /// Special duty allowance.
    pub sda: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Employer NPS contribution (14% of basic plus DA).
    pub employer_contribution: Decimal,
    /// Sum of all earnings including the employer contribution.
    pub gross_salary: Decimal,
    /// Employee NPS contribution (10% of basic plus DA).
    pub nps: Decimal,
    /// Fixed deduction for the pay level.
    pub fixed_deduction: Decimal,
    /// NPS, employer contribution and fixed deduction.
    pub total_deductions: Decimal,
    /// Gross salary less total deductions.
    pub net_salary: Decimal,
}

impl SalaryBreakdown {
    /// Returns a copy with every component rounded independently.
    ///
    /// Components are not recomputed from their rounded parts, so the rounded
    /// net salary may differ by one from rounded gross minus rounded deductions.
    pub fn rounded(&self) -> Self {
        Self {
            basic_pay: round_currency(self.basic_pay),
            da_on_basic: round_currency(self.da_on_basic),
            ta: round_currency(self.ta),
            da_on_ta: round_currency(self.da_on_ta),
            hpca: round_currency(self.hpca),
            sda: round_currency(self.sda),
            hra: round_currency(self.hra),
            employer_contribution: round_currency(self.employer_contribution),
            gross_salary: round_currency(self.gross_salary),
            nps: round_currency(self.nps),
            fixed_deduction: round_currency(self.fixed_deduction),
            total_deductions: round_currency(self.total_deductions),
            net_salary: round_currency(self.net_salary),
        }
    }
}

impl AddAssign<&SalaryBreakdown> for SalaryBreakdown {
    fn add_assign(&mut self, rhs: &SalaryBreakdown) {
        self.basic_pay += rhs.basic_pay;
        self.da_on_basic += rhs.da_on_basic;
        self.ta += rhs.ta;
        self.da_on_ta += rhs.da_on_ta;
        self.hpca += rhs.hpca;
        self.sda += rhs.sda;
        self.hra += rhs.hra;
        self.employer_contribution += rhs.employer_contribution;
        self.gross_salary += rhs.gross_salary;
        self.nps += rhs.nps;
        self.fixed_deduction += rhs.fixed_deduction;
        self.total_deductions += rhs.total_deductions;
        self.net_salary += rhs.net_salary;
    }
}

impl Sum for SalaryBreakdown {
    fn sum<I: Iterator<Item = SalaryBreakdown>>(iter: I) -> Self {
        iter.fold(SalaryBreakdown::default(), |mut acc, b| {
            acc += &b;
            acc
        })
    }
}

impl<'a> Sum<&'a SalaryBreakdown> for SalaryBreakdown {
    fn sum<I: Iterator<Item = &'a SalaryBreakdown>>(iter: I) -> Self {
        iter.fold(SalaryBreakdown::default(), |mut acc, b| {
            acc += b;
            acc
        })
    }
}

/// The rounded salary breakdown of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// The calendar month.
    pub month: Month,
    /// The calendar year.
    pub year: i32,
    /// Days worked in the month.
    pub days_worked: i32,
    /// Calendar days in the month.
    pub days_in_month: u32,
    /// The rounded money components.
    pub breakdown: SalaryBreakdown,
}

impl MonthlyResult {
    /// Returns the period label, e.g. "February 2024".
    pub fn period(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The month the step belongs to, e.g. "February 2024".
    pub period: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a salary calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResults {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The pay commission the calculation was made under.
    pub cpc_version: CpcVersion,
    /// The basic pay after any fitment factor, rounded.
    pub effective_basic_pay: Decimal,
    /// One rounded result per input month, in input order.
    pub monthly_results: Vec<MonthlyResult>,
    /// Field-wise sum of the rounded monthly breakdowns.
    pub totals: SalaryBreakdown,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
