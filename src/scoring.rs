// Opportunity scoring for Half Board conversion, one agency at a time.
use std::fmt;

use crate::config::ScoringConfig;
use crate::util::{pct, ratio};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn from_score(score: f64, cfg: &ScoringConfig) -> Self {
        if score >= cfg.high_threshold {
            PriorityTier::High
        } else if score >= cfg.medium_threshold {
            PriorityTier::Medium
        } else {
            PriorityTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriorityTier::High => "HIGH",
            PriorityTier::Medium => "MEDIUM",
            PriorityTier::Low => "LOW",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    UrgentExecutive,
    HighPriorityPromotion,
    OptimizeUpsell,
    LargeBookingBundle,
    StandardMarketing,
}

impl Tactic {
    /// First matching rule wins: big agencies with almost no Half Board
    /// come first, already-strong agencies are upsold, the rest get either
    /// a bundle pitch (large bookings) or the standard campaign.
    pub fn recommend(
        total_nights: f64,
        current_hb_pct: f64,
        avg_nights_per_booking: f64,
        cfg: &ScoringConfig,
    ) -> Self {
        if total_nights > cfg.urgent_min_nights && current_hb_pct < cfg.urgent_max_hb_pct {
            Tactic::UrgentExecutive
        } else if total_nights > cfg.high_min_nights && current_hb_pct < cfg.high_max_hb_pct {
            Tactic::HighPriorityPromotion
        } else if current_hb_pct > cfg.upsell_min_hb_pct {
            Tactic::OptimizeUpsell
        } else if avg_nights_per_booking > cfg.large_booking_min_avg_nights {
            Tactic::LargeBookingBundle
        } else {
            Tactic::StandardMarketing
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tactic::UrgentExecutive => "Urgent: Executive meeting + Commission incentive",
            Tactic::HighPriorityPromotion => "High Priority: Targeted HB promotion + Training",
            Tactic::OptimizeUpsell => "Optimize: Upsell to premium HB packages",
            Tactic::LargeBookingBundle => "Large Booking Leverage: Bundle HB in packages",
            Tactic::StandardMarketing => "Standard: Include in HB marketing campaign",
        }
    }
}

impl fmt::Display for Tactic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpportunityScore {
    pub current_hb_pct: f64,
    pub target_hb_pct: f64,
    pub gap_to_target: f64,
    pub volume_score: f64,
    pub opportunity_score: f64,
    pub priority_score: f64,
    pub potential_incremental_nights: f64,
    pub estimated_incremental_revenue: f64,
    pub avg_nights_per_booking: f64,
    pub tier: PriorityTier,
    pub tactic: Tactic,
}

/// Score one agency from its night totals and the number of bookings
/// those nights come from.
///
/// Never fails: a zero night total gives a 0% Half Board share and a zero
/// booking count gives a 0 nights-per-booking average.
pub fn score_opportunity(
    total_nights: i64,
    hb_nights: i64,
    bookings: usize,
    cfg: &ScoringConfig,
) -> OpportunityScore {
    let total = total_nights as f64;
    let hb = hb_nights as f64;
    let current_hb_pct = if total_nights > 0 { pct(hb, total) } else { 0.0 };

    let volume_score = ratio(total, cfg.volume_divisor).min(cfg.score_cap);
    let opportunity_score = (100.0 - current_hb_pct) / 10.0;
    let priority_score = (volume_score + opportunity_score) / 2.0;

    let potential_incremental_nights = (total * cfg.target_hb_pct / 100.0 - hb).max(0.0);
    let estimated_incremental_revenue =
        potential_incremental_nights * cfg.incremental_rate_per_night;

    let avg_nights_per_booking = ratio(total, bookings as f64);

    OpportunityScore {
        current_hb_pct,
        target_hb_pct: cfg.target_hb_pct,
        gap_to_target: (cfg.target_hb_pct - current_hb_pct).max(0.0),
        volume_score,
        opportunity_score,
        priority_score,
        potential_incremental_nights,
        estimated_incremental_revenue,
        avg_nights_per_booking,
        tier: PriorityTier::from_score(priority_score, cfg),
        tactic: Tactic::recommend(total, current_hb_pct, avg_nights_per_booking, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn high_volume_low_penetration_agency() {
        let cfg = ScoringConfig::default();
        let s = score_opportunity(1000, 50, 20, &cfg);
        assert!(close(s.current_hb_pct, 5.0));
        assert!(close(s.volume_score, 10.0));
        assert!(close(s.opportunity_score, 9.5));
        assert!(close(s.priority_score, 9.75));
        assert_eq!(s.tier, PriorityTier::High);
        assert!(close(s.potential_incremental_nights, 300.0));
        assert!(close(s.estimated_incremental_revenue, 36000.0));
        assert!(close(s.gap_to_target, 30.0));
        assert_eq!(s.tactic, Tactic::UrgentExecutive);
    }

    #[test]
    fn zero_nights_scores_exactly_five() {
        let cfg = ScoringConfig::default();
        let s = score_opportunity(0, 0, 0, &cfg);
        assert_eq!(s.current_hb_pct, 0.0);
        assert_eq!(s.volume_score, 0.0);
        assert_eq!(s.opportunity_score, 10.0);
        assert_eq!(s.priority_score, 5.0);
        assert_eq!(s.avg_nights_per_booking, 0.0);
        assert_eq!(s.estimated_incremental_revenue, 0.0);
        assert_eq!(s.tier, PriorityTier::Medium);
    }

    #[test]
    fn upsell_rule_fires_before_bundle_rule() {
        let cfg = ScoringConfig::default();
        // 200 nights over 2 bookings is 100 nights per booking, which would
        // also qualify for the bundle tactic.
        let s = score_opportunity(200, 120, 2, &cfg);
        assert!(close(s.current_hb_pct, 60.0));
        assert_eq!(s.tactic, Tactic::OptimizeUpsell);
        assert_eq!(s.potential_incremental_nights, 0.0);
        assert_eq!(s.gap_to_target, 0.0);
    }

    #[test]
    fn tactic_rules_in_order() {
        let cfg = ScoringConfig::default();
        assert_eq!(Tactic::recommend(400.0, 15.0, 5.0, &cfg), Tactic::HighPriorityPromotion);
        assert_eq!(Tactic::recommend(600.0, 15.0, 5.0, &cfg), Tactic::HighPriorityPromotion);
        assert_eq!(Tactic::recommend(600.0, 9.9, 5.0, &cfg), Tactic::UrgentExecutive);
        assert_eq!(Tactic::recommend(100.0, 30.0, 60.0, &cfg), Tactic::LargeBookingBundle);
        assert_eq!(Tactic::recommend(100.0, 30.0, 50.0, &cfg), Tactic::StandardMarketing);
        assert_eq!(Tactic::recommend(500.0, 5.0, 5.0, &cfg), Tactic::HighPriorityPromotion);
    }

    #[test]
    fn tiers_use_inclusive_thresholds() {
        let cfg = ScoringConfig::default();
        assert_eq!(PriorityTier::from_score(7.0, &cfg), PriorityTier::High);
        assert_eq!(PriorityTier::from_score(6.99, &cfg), PriorityTier::Medium);
        assert_eq!(PriorityTier::from_score(4.0, &cfg), PriorityTier::Medium);
        assert_eq!(PriorityTier::from_score(3.99, &cfg), PriorityTier::Low);
        assert_eq!(PriorityTier::High.to_string(), "HIGH");
    }

    #[test]
    fn priority_score_stays_within_bounds() {
        let cfg = ScoringConfig::default();
        for total in [0i64, 1, 50, 99, 100, 999, 1000, 5000, 100_000] {
            for share in [0.0, 0.1, 0.35, 0.5, 0.99, 1.0] {
                let hb = (total as f64 * share).round() as i64;
                let s = score_opportunity(total, hb, 10, &cfg);
                assert!(
                    (0.0..=10.0).contains(&s.priority_score),
                    "total={} hb={} score={}",
                    total,
                    hb,
                    s.priority_score
                );
            }
        }
    }

    #[test]
    fn custom_target_changes_potential() {
        let cfg = ScoringConfig {
            target_hb_pct: 50.0,
            incremental_rate_per_night: 100.0,
            ..ScoringConfig::default()
        };
        let s = score_opportunity(400, 100, 4, &cfg);
        assert!(close(s.potential_incremental_nights, 100.0));
        assert!(close(s.estimated_incremental_revenue, 10_000.0));
        assert!(close(s.target_hb_pct, 50.0));
    }
}
