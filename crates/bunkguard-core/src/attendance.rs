//! Attendance projection math.
//!
//! Turns raw attended/total/target counts into a safety verdict: either
//! how many consecutive classes must be attended to climb back to the
//! target ratio, or how many more classes can be missed while staying at
//! or above it. All threshold comparisons use exact integer arithmetic;
//! percentages are only converted to floating point for display.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::subject::Subject;

/// Binary verdict relative to the target percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyStatus {
    Safe,
    Danger,
}

/// Descriptive band of how far attendance sits from target.
///
/// Informational only -- independent of the binary status. A subject can
/// read `Safe` and `Moderate` at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical Risk",
        }
    }

    /// Band from the margin between current and target percentage.
    fn from_margin(current_pct: f64, target_pct: f64) -> Self {
        if current_pct >= target_pct + 10.0 {
            RiskLevel::Low
        } else if current_pct >= target_pct {
            RiskLevel::Moderate
        } else if current_pct >= target_pct - 5.0 {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}

/// Consecutive classes required to reach the target ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassesNeeded {
    /// Attend this many back-to-back classes.
    Count(u32),
    /// A 100% target can never be recovered once below it: every future
    /// class raises numerator and denominator alike.
    Unreachable,
}

impl ClassesNeeded {
    /// The finite count, if the target is reachable.
    pub fn count(&self) -> Option<u32> {
        match self {
            ClassesNeeded::Count(n) => Some(*n),
            ClassesNeeded::Unreachable => None,
        }
    }
}

/// Projection result for one subject's counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Current percentage rounded to two decimals for display.
    pub current_pct: f64,
    pub status: SafetyStatus,
    pub needed: ClassesNeeded,
    /// Classes that can still be missed while staying at/above target.
    pub bunkable: u32,
    pub risk: RiskLevel,
}

/// Project attendance counters against a target percentage.
///
/// Pure and deterministic. `needed` solves the smallest non-negative `x`
/// with `(attended + x) / (total + x) >= target/100`; `bunkable` solves
/// the largest non-negative `y` with `attended / (total + y) >= target/100`.
/// A subject with no classes held yet is vacuously safe with nothing to
/// spend.
///
/// # Errors
/// Returns `ValidationError::InvalidSubjectState` when `attended > total`
/// or `target_pct` is outside 1..=100.
pub fn project(
    attended: u32,
    total: u32,
    target_pct: u8,
) -> Result<AttendanceReport, ValidationError> {
    if attended > total {
        return Err(ValidationError::InvalidSubjectState(format!(
            "attended ({attended}) exceeds total ({total})"
        )));
    }
    if target_pct < 1 || target_pct > 100 {
        return Err(ValidationError::InvalidSubjectState(format!(
            "target {target_pct}% outside 1..=100"
        )));
    }

    let a = u64::from(attended);
    let t = u64::from(total);
    let target = u64::from(target_pct);

    let current_pct = if total == 0 {
        0.0
    } else {
        f64::from(attended) / f64::from(total) * 100.0
    };
    let risk = RiskLevel::from_margin(current_pct, f64::from(target_pct));

    // 100 * attended < target * total, exact in integers.
    let below_target = t > 0 && 100 * a < target * t;

    let (status, needed, bunkable) = if below_target {
        let needed = if target == 100 {
            ClassesNeeded::Unreachable
        } else {
            // Smallest x with 100*(a+x) >= target*(t+x).
            let numerator = target * t - 100 * a;
            let denominator = 100 - target;
            let count = numerator.div_ceil(denominator);
            ClassesNeeded::Count(u32::try_from(count).unwrap_or(u32::MAX))
        };
        (SafetyStatus::Danger, needed, 0)
    } else {
        // Largest y with 100*a >= target*(t+y).
        let bunkable = u32::try_from((100 * a / target).saturating_sub(t)).unwrap_or(u32::MAX);
        (SafetyStatus::Safe, ClassesNeeded::Count(0), bunkable)
    };

    Ok(AttendanceReport {
        current_pct: (current_pct * 100.0).round() / 100.0,
        status,
        needed,
        bunkable,
        risk,
    })
}

impl Subject {
    /// Project this subject's counters against its own target.
    pub fn project(&self) -> Result<AttendanceReport, ValidationError> {
        project(self.attended, self.total, self.target)
    }
}
