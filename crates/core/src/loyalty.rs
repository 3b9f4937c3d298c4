//! Loyalty / activity-bonus scoring: policy constants, types, and pure logic.
//!
//! A customer's booking history is condensed into an [`ActivitySnapshot`] by
//! the persistence layer; everything past that point is arithmetic. The
//! composite activity score (0-100) is the sum of three capped components
//! (booking frequency, completion rate, total spend), mapped to a
//! [`LoyaltyTier`] by threshold, which in turn indexes a bonus percentage
//! used to size gift-card refunds.
//!
//! All weights, caps, thresholds, and bonus percentages are carried by
//! [`LoyaltyPolicy`] so tuning never touches the algorithm.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Policy defaults
// ---------------------------------------------------------------------------

/// Points awarded per booking, any status.
pub const DEFAULT_FREQUENCY_POINTS: f64 = 10.0;
/// Cap on the frequency component.
pub const DEFAULT_FREQUENCY_CAP: f64 = 50.0;
/// Maximum points from the completion-rate component (rate × this value).
pub const DEFAULT_COMPLETION_POINTS: f64 = 30.0;
/// Currency units of paid spend per score point.
pub const DEFAULT_SPEND_DIVISOR: f64 = 1000.0;
/// Cap on the spend component.
pub const DEFAULT_SPEND_CAP: f64 = 20.0;

/// Score at or above which a customer is Silver.
pub const DEFAULT_SILVER_THRESHOLD: f64 = 30.0;
/// Score at or above which a customer is Gold.
pub const DEFAULT_GOLD_THRESHOLD: f64 = 50.0;
/// Score at or above which a customer is Platinum.
pub const DEFAULT_PLATINUM_THRESHOLD: f64 = 70.0;

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Tunable scoring policy.
///
/// The default caps sum to 100, the maximum possible score. Bronze carries a
/// 0% bonus so a customer with no history receives no gift-card uplift.
#[derive(Debug, Clone)]
pub struct LoyaltyPolicy {
    pub frequency_points: f64,
    pub frequency_cap: f64,
    pub completion_points: f64,
    pub spend_divisor: f64,
    pub spend_cap: f64,
    pub silver_threshold: f64,
    pub gold_threshold: f64,
    pub platinum_threshold: f64,
    /// Bonus percentage per tier, Bronze first.
    pub bronze_bonus: f64,
    pub silver_bonus: f64,
    pub gold_bonus: f64,
    pub platinum_bonus: f64,
}

impl Default for LoyaltyPolicy {
    fn default() -> Self {
        Self {
            frequency_points: DEFAULT_FREQUENCY_POINTS,
            frequency_cap: DEFAULT_FREQUENCY_CAP,
            completion_points: DEFAULT_COMPLETION_POINTS,
            spend_divisor: DEFAULT_SPEND_DIVISOR,
            spend_cap: DEFAULT_SPEND_CAP,
            silver_threshold: DEFAULT_SILVER_THRESHOLD,
            gold_threshold: DEFAULT_GOLD_THRESHOLD,
            platinum_threshold: DEFAULT_PLATINUM_THRESHOLD,
            bronze_bonus: 0.0,
            silver_bonus: 5.0,
            gold_bonus: 10.0,
            platinum_bonus: 15.0,
        }
    }
}

impl LoyaltyPolicy {
    /// Bonus percentage for a tier.
    pub fn bonus_for(&self, tier: LoyaltyTier) -> f64 {
        match tier {
            LoyaltyTier::Bronze => self.bronze_bonus,
            LoyaltyTier::Silver => self.silver_bonus,
            LoyaltyTier::Gold => self.gold_bonus,
            LoyaltyTier::Platinum => self.platinum_bonus,
        }
    }
}

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Customer loyalty classification, recomputed on demand and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    /// Classify a score by threshold, evaluated from highest to lowest.
    pub fn from_score(score: f64, policy: &LoyaltyPolicy) -> Self {
        if score >= policy.platinum_threshold {
            Self::Platinum
        } else if score >= policy.gold_threshold {
            Self::Gold
        } else if score >= policy.silver_threshold {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    /// Human-readable label for response messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

// ---------------------------------------------------------------------------
// Snapshot & assessment types
// ---------------------------------------------------------------------------

/// Aggregated booking history for one customer.
///
/// `booking_count` counts bookings of any status; `total_spent` sums booking
/// totals that have a completed payment. A customer with no rows in the
/// store produces the all-zero snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivitySnapshot {
    pub booking_count: i64,
    pub completed_count: i64,
    pub total_spent: f64,
}

/// Result of scoring a customer's activity.
///
/// `activity_score` repeats `score`; both keys appear in the wire contract
/// consumed by the admin UI, so both are serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityBonus {
    pub score: f64,
    pub activity_score: f64,
    pub tier: LoyaltyTier,
    pub bonus_percentage: f64,
    pub reason: String,
    pub booking_count: i64,
    pub total_spent: f64,
}

/// Gift-card sizing derived from a bonus percentage and a booking amount.
#[derive(Debug, Clone, Serialize)]
pub struct GiftCardQuote {
    pub bonus_percentage: f64,
    pub bonus_amount: f64,
    pub total_gift_card_amount: f64,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Compute the composite activity score for a snapshot.
///
/// Three capped components: frequency, completion rate, and spend. The caps
/// prevent any single factor from dominating.
pub fn activity_score(snapshot: &ActivitySnapshot, policy: &LoyaltyPolicy) -> f64 {
    let frequency =
        (snapshot.booking_count as f64 * policy.frequency_points).min(policy.frequency_cap);

    let completion_rate =
        snapshot.completed_count as f64 / (snapshot.booking_count.max(1)) as f64;
    let completion = (completion_rate * policy.completion_points).min(policy.completion_points);

    let spend = (snapshot.total_spent / policy.spend_divisor).min(policy.spend_cap);

    frequency + completion + spend
}

/// Score a snapshot and classify it into a tier with its bonus percentage.
pub fn assess(snapshot: &ActivitySnapshot, policy: &LoyaltyPolicy) -> ActivityBonus {
    let score = activity_score(snapshot, policy);
    let tier = LoyaltyTier::from_score(score, policy);
    let bonus_percentage = policy.bonus_for(tier);

    let completion_pct = if snapshot.booking_count > 0 {
        snapshot.completed_count as f64 / snapshot.booking_count as f64 * 100.0
    } else {
        0.0
    };

    let reason = format!(
        "{} tier (score {:.1}): {} bookings, {:.0}% completed, {:.2} spent",
        tier.label(),
        score,
        snapshot.booking_count,
        completion_pct,
        snapshot.total_spent,
    );

    ActivityBonus {
        score,
        activity_score: score,
        tier,
        bonus_percentage,
        reason,
        booking_count: snapshot.booking_count,
        total_spent: snapshot.total_spent,
    }
}

/// Size a gift card: `bonus = amount × pct / 100`, both results rounded
/// half-up to 2 decimal places.
///
/// Rejects non-positive booking amounts.
pub fn gift_card_quote(bonus_percentage: f64, booking_amount: f64) -> Result<GiftCardQuote, CoreError> {
    if !(booking_amount > 0.0) {
        return Err(CoreError::Validation(
            "booking_amount must be a positive number".into(),
        ));
    }

    let bonus_amount = round_half_up(booking_amount * bonus_percentage / 100.0);
    let total_gift_card_amount = round_half_up(booking_amount + bonus_amount);

    Ok(GiftCardQuote {
        bonus_percentage,
        bonus_amount,
        total_gift_card_amount,
    })
}

/// Round to 2 decimal places, half away from zero (half-up for positive
/// amounts, which is all this module deals in).
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn policy() -> LoyaltyPolicy {
        LoyaltyPolicy::default()
    }

    fn snapshot(bookings: i64, completed: i64, spent: f64) -> ActivitySnapshot {
        ActivitySnapshot {
            booking_count: bookings,
            completed_count: completed,
            total_spent: spent,
        }
    }

    // -- zero activity --

    #[test]
    fn zero_activity_is_bronze_with_no_bonus() {
        let bonus = assess(&snapshot(0, 0, 0.0), &policy());
        assert_eq!(bonus.score, 0.0);
        assert_eq!(bonus.tier, LoyaltyTier::Bronze);
        assert_eq!(bonus.bonus_percentage, 0.0);
        assert_eq!(bonus.booking_count, 0);
    }

    // -- component caps --

    #[test]
    fn frequency_component_caps_at_fifty() {
        // 1000 bookings would be 10_000 points uncapped.
        let score = activity_score(&snapshot(1000, 0, 0.0), &policy());
        assert_eq!(score, 50.0);
    }

    #[test]
    fn completion_component_caps_at_thirty() {
        // completed > booked cannot push the rate component past its weight.
        let score = activity_score(&snapshot(1, 5, 0.0), &policy());
        assert_eq!(score, 10.0 + 30.0);
    }

    #[test]
    fn spend_component_caps_at_twenty() {
        let score = activity_score(&snapshot(0, 0, 1_000_000.0), &policy());
        assert_eq!(score, 20.0);
    }

    #[test]
    fn maximum_score_is_one_hundred() {
        let score = activity_score(&snapshot(100, 100, 100_000.0), &policy());
        assert_eq!(score, 100.0);
    }

    // -- monotonicity, each factor independently --

    #[test]
    fn score_monotone_in_booking_count() {
        let p = policy();
        let mut prev = -1.0;
        for n in 0..8 {
            let s = activity_score(&snapshot(n, 0, 0.0), &p);
            assert!(s >= prev, "score decreased at booking_count={n}");
            prev = s;
        }
    }

    #[test]
    fn score_monotone_in_completion_rate() {
        let p = policy();
        let mut prev = -1.0;
        for completed in 0..=10 {
            let s = activity_score(&snapshot(10, completed, 0.0), &p);
            assert!(s >= prev, "score decreased at completed={completed}");
            prev = s;
        }
    }

    #[test]
    fn score_monotone_in_spend() {
        let p = policy();
        let mut prev = -1.0;
        for spent in [0.0, 500.0, 1000.0, 5000.0, 50_000.0] {
            let s = activity_score(&snapshot(3, 1, spent), &p);
            assert!(s >= prev, "score decreased at spent={spent}");
            prev = s;
        }
    }

    // -- exact tier boundaries --

    #[test]
    fn tier_thresholds_are_exact() {
        let p = policy();
        assert_eq!(LoyaltyTier::from_score(70.0, &p), LoyaltyTier::Platinum);
        assert_eq!(LoyaltyTier::from_score(69.999, &p), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_score(50.0, &p), LoyaltyTier::Gold);
        assert_eq!(LoyaltyTier::from_score(49.999, &p), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_score(30.0, &p), LoyaltyTier::Silver);
        assert_eq!(LoyaltyTier::from_score(29.999, &p), LoyaltyTier::Bronze);
    }

    #[test]
    fn tier_bonus_percentages_descend() {
        let p = policy();
        assert!(p.bonus_for(LoyaltyTier::Platinum) > p.bonus_for(LoyaltyTier::Gold));
        assert!(p.bonus_for(LoyaltyTier::Gold) > p.bonus_for(LoyaltyTier::Silver));
        assert!(p.bonus_for(LoyaltyTier::Silver) > p.bonus_for(LoyaltyTier::Bronze));
        assert_eq!(p.bonus_for(LoyaltyTier::Bronze), 0.0);
    }

    // -- gift card sizing --

    #[test]
    fn gift_card_ten_percent_on_one_thousand() {
        let quote = gift_card_quote(10.0, 1000.0).unwrap();
        assert_eq!(quote.bonus_amount, 100.0);
        assert_eq!(quote.total_gift_card_amount, 1100.0);
    }

    #[test]
    fn gift_card_rounds_half_up() {
        // 333.33 × 15% = 49.9995 -> 50.00
        let quote = gift_card_quote(15.0, 333.33).unwrap();
        assert_eq!(quote.bonus_amount, 50.0);
        assert_eq!(quote.total_gift_card_amount, 383.33);
    }

    #[test]
    fn gift_card_rejects_zero_amount() {
        assert_matches!(
            gift_card_quote(10.0, 0.0),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn gift_card_rejects_negative_amount() {
        assert_matches!(
            gift_card_quote(10.0, -25.0),
            Err(CoreError::Validation(_))
        );
    }

    // -- reason string --

    #[test]
    fn reason_names_the_tier() {
        let bonus = assess(&snapshot(10, 10, 50_000.0), &policy());
        assert_eq!(bonus.tier, LoyaltyTier::Platinum);
        assert!(bonus.reason.starts_with("Platinum tier"));
    }

    #[test]
    fn activity_score_field_mirrors_score() {
        let bonus = assess(&snapshot(4, 2, 1200.0), &policy());
        assert_eq!(bonus.score, bonus.activity_score);
    }
}
