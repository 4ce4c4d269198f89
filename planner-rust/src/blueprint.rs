use crate::ShapeError;
use serde::{Deserialize, Serialize};

pub const TIMELINE_PHASES: usize = 5;
pub const BUDGET_LINES: usize = 6;
pub const VENDOR_CATEGORIES: usize = 4;
pub const MARKETING_STRATEGIES: usize = 8;
pub const RISKS: usize = 5;

/// A structured, multi-section event plan.
///
/// The same shape is produced whether the plan came from the language model
/// or from [`synthesize_blueprint`](crate::synthesize_blueprint), so consumers
/// never need to know which path ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub event_name: String,
    pub event_type: String,
    pub timeline: Vec<Phase>,
    pub budget: Vec<BudgetLine>,
    pub vendors: Vec<VendorCategory>,
    pub venue: Venue,
    pub marketing: Vec<String>,
    pub risks: Vec<RiskItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub duration: String,
    pub tasks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub category: String,
    /// Formatted currency, e.g. `$15000`.
    pub amount: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorCategory {
    #[serde(rename = "type")]
    pub kind: String,
    pub recommendations: Vec<String>,
    pub estimated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub layout: String,
    pub capacity: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    pub mitigation: String,
}

impl Blueprint {
    /// Checks the section counts every consumer relies on, that each budget
    /// percentage lies in 0..=100 and that they add up to exactly 100.
    pub fn check_shape(&self) -> Result<(), ShapeError> {
        expect_count("timeline phases", TIMELINE_PHASES, self.timeline.len())?;
        expect_count("budget lines", BUDGET_LINES, self.budget.len())?;
        expect_count("vendor categories", VENDOR_CATEGORIES, self.vendors.len())?;
        expect_count(
            "marketing strategies",
            MARKETING_STRATEGIES,
            self.marketing.len(),
        )?;
        expect_count("risks", RISKS, self.risks.len())?;

        if let Some(line) = self.budget.iter().find(|line| line.percentage > 100) {
            return Err(ShapeError::PercentageOutOfRange {
                category: line.category.clone(),
                percentage: line.percentage,
            });
        }
        let total = self.percentage_total();
        if total != 100 {
            return Err(ShapeError::PercentageSum(total));
        }
        Ok(())
    }

    /// Sum of the budget percentages, saturating at `u32::MAX`.
    #[must_use]
    pub fn percentage_total(&self) -> u32 {
        self.budget
            .iter()
            .fold(0_u32, |total, line| total.saturating_add(line.percentage))
    }
}

fn expect_count(section: &'static str, expected: usize, actual: usize) -> Result<(), ShapeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ShapeError::Count {
            section,
            expected,
            actual,
        })
    }
}

/// Formats a whole-unit amount the way budget lines carry it.
#[must_use]
pub fn format_amount(amount: u64) -> String {
    format!("${amount}")
}
