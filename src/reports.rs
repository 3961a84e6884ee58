use crate::aggregate::{group_by, totals, GroupTotals};
use crate::classify::{classify_market_segment, MarketSegment};
use crate::config::ScoringConfig;
use crate::scoring::{score_opportunity, OpportunityScore, PriorityTier};
use crate::stats::{describe, mann_whitney_u, one_way_anova, t_test_independent};
use crate::types::{
    ActionItemRow, AgencyBookingSizeRow, AgencyDeepDiveRow, AgencyDrilldown, AgencyRateCodeRow,
    BookingRecord, BookingSizeRow, CisAgencyRow, CisOverviewRow, CisRateRow, DescriptiveStatsRow,
    HbComparisonRow, MarketAgencyRow, MarketSegmentRow, OpportunityRow, RateCodeRow,
    SignificanceTestRow, SummaryStats, UniversalAgencyRow, UniversalCodeRow,
};
use crate::util::{format_number, pct, ratio, round_to};
use std::cmp::Ordering;

/// Rate codes sold to every market.
pub const UNIVERSAL_CODES: [&str; 2] = ["TOBBWI", "TOBBJN"];
pub const TOP_AGENCIES_PER_MARKET: usize = 5;
pub const UNIVERSAL_AGENCY_LIMIT: usize = 15;
/// Bookings at or above this many nights count as large.
pub const LARGE_BOOKING_NIGHTS: i64 = 50;
/// Rate codes compared by the ANOVA, most booked first.
pub const ANOVA_TOP_CODES: usize = 10;
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

type SizeBin = (i64, i64, &'static str);

// Right-closed night ranges: (lower, upper].
const BOOKING_SIZE_BINS: [SizeBin; 5] = [
    (0, 5, "1-5 nights"),
    (5, 15, "6-15 nights"),
    (15, 30, "16-30 nights"),
    (30, 50, "31-50 nights"),
    (50, 1000, "50+ nights"),
];

// Coarser ranges for a single agency's drilldown.
const AGENCY_SIZE_BINS: [SizeBin; 5] = [
    (0, 10, "1-10 nights"),
    (10, 30, "11-30 nights"),
    (30, 50, "31-50 nights"),
    (50, 100, "51-100 nights"),
    (100, 1000, "100+ nights"),
];

fn r2(n: f64) -> f64 {
    round_to(n, 2)
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// One scored agency, kept unrounded so downstream filters see exact values.
pub struct ScoredAgency {
    pub agency: String,
    pub totals: GroupTotals,
    pub score: OpportunityScore,
}

/// Score every named agency and order them by priority score. Agencies tied
/// on score stay in alphabetical order.
pub fn score_agencies(data: &[BookingRecord], cfg: &ScoringConfig) -> Vec<ScoredAgency> {
    let mut scored: Vec<ScoredAgency> = group_by(data, |r| r.agency.clone())
        .into_iter()
        .map(|(agency, t)| {
            let score = score_opportunity(t.nights, t.hb_nights, t.nights_recorded, cfg);
            ScoredAgency { agency, totals: t, score }
        })
        .collect();
    scored.sort_by(|a, b| desc(a.score.priority_score, b.score.priority_score));
    scored
}

pub fn generate_summary(data: &[BookingRecord], cfg: &ScoringConfig) -> SummaryStats {
    let all = totals(data);
    let hb = totals(data.iter().filter(|r| r.has_half_board));
    let agencies = group_by(data, |r| r.agency.clone());
    let agencies_with_hb = agencies.iter().filter(|(_, t)| t.hb_bookings > 0).count();
    let code_nights = |code: &str| -> i64 {
        data.iter()
            .filter(|r| r.rate_code.as_deref() == Some(code))
            .filter_map(|r| r.room_nights)
            .sum()
    };
    let scored = score_agencies(data, cfg);

    SummaryStats {
        total_bookings: all.bookings,
        total_room_nights: all.nights,
        total_revenue: r2(all.revenue),
        avg_rate: r2(all.avg_rate()),
        hb_bookings: hb.bookings,
        hb_room_nights: hb.nights,
        hb_revenue: r2(hb.revenue),
        hb_avg_rate: r2(hb.avg_rate()),
        hb_penetration_pct: r2(all.hb_booking_pct()),
        hb_revenue_share_pct: r2(all.hb_revenue_pct()),
        hb_night_share_pct: r2(all.hb_nights_pct()),
        unique_agencies: agencies.len(),
        agencies_with_hb,
        agencies_without_hb: agencies.len() - agencies_with_hb,
        tobbwi_room_nights: code_nights(UNIVERSAL_CODES[0]),
        tobbjn_room_nights: code_nights(UNIVERSAL_CODES[1]),
        high_priority_agencies: scored
            .iter()
            .filter(|s| s.score.tier == PriorityTier::High)
            .count(),
        total_incremental_revenue: r2(scored
            .iter()
            .map(|s| s.score.estimated_incremental_revenue)
            .sum()),
    }
}

pub fn generate_descriptive_stats(data: &[BookingRecord]) -> Vec<DescriptiveStatsRow> {
    let mut rows = Vec::new();
    let scopes: [(&str, Vec<&BookingRecord>); 2] = [
        ("All Bookings", data.iter().collect()),
        ("Half Board", data.iter().filter(|r| r.has_half_board).collect()),
    ];
    for (scope, records) in &scopes {
        let nights: Vec<f64> = records
            .iter()
            .filter_map(|r| r.room_nights.map(|n| n as f64))
            .collect();
        let revenue: Vec<f64> = records.iter().filter_map(|r| r.room_revenue).collect();
        let rates: Vec<f64> = records.iter().filter_map(|r| r.avg_rate_per_night).collect();
        for (metric, values) in [
            ("Room Nights", nights),
            ("Room Revenue", revenue),
            ("Avg Rate per Night", rates),
        ] {
            let d = describe(&values);
            rows.push(DescriptiveStatsRow {
                scope: scope.to_string(),
                metric: metric.to_string(),
                count: d.count,
                mean: r2(d.mean),
                std: r2(d.std),
                min: r2(d.min),
                q25: r2(d.q25),
                median: r2(d.median),
                q75: r2(d.q75),
                max: r2(d.max),
                skewness: round_to(d.skewness, 3),
                kurtosis: round_to(d.kurtosis, 3),
                variance: r2(d.variance),
                cv_pct: r2(d.cv_pct),
            });
        }
    }
    rows
}

pub fn generate_agency_deep_dive(data: &[BookingRecord]) -> Vec<AgencyDeepDiveRow> {
    let mut groups = group_by(data, |r| r.agency.clone());
    groups.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
    groups
        .into_iter()
        .enumerate()
        .map(|(idx, (agency, t))| AgencyDeepDiveRow {
            rank: idx + 1,
            agency,
            total_nights: t.nights,
            hb_nights: t.hb_nights,
            non_hb_nights: t.non_hb_nights(),
            hb_nights_pct: r2(t.hb_nights_pct()),
            total_revenue: r2(t.revenue),
            hb_revenue: r2(t.hb_revenue),
            non_hb_revenue: r2(t.non_hb_revenue()),
            hb_revenue_pct: r2(t.hb_revenue_pct()),
            bookings: t.bookings,
            hb_bookings: t.hb_bookings,
            avg_rate: r2(t.avg_rate()),
            avg_rate_hb: r2(t.avg_rate_hb()),
            avg_rate_non_hb: r2(t.avg_rate_non_hb()),
            top_rate_code: t.top_rate_code(),
            avg_nights_per_booking: r2(t.avg_nights_per_booking()),
        })
        .collect()
}

pub fn generate_rate_code_performance(data: &[BookingRecord]) -> Vec<RateCodeRow> {
    let mut groups = group_by(data, |r| r.rate_code.clone());
    groups.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
    groups
        .into_iter()
        .map(|(code, t)| RateCodeRow {
            market_segment: classify_market_segment(Some(code.as_str())).label().to_string(),
            rate_code: code,
            total_nights: t.nights,
            avg_nights: r2(t.avg_nights_per_booking()),
            bookings: t.bookings,
            total_revenue: r2(t.revenue),
            avg_revenue: r2(t.avg_revenue_per_booking()),
            avg_rate: r2(t.rate_per_night()),
            hb_bookings: t.hb_bookings,
            hb_penetration: r2(t.hb_booking_pct()),
        })
        .collect()
}

fn segments_by_revenue(data: &[BookingRecord]) -> Vec<(MarketSegment, GroupTotals)> {
    let mut groups = group_by(data, |r| Some(r.market_segment));
    groups.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
    groups
}

pub fn generate_market_segmentation(data: &[BookingRecord]) -> Vec<MarketSegmentRow> {
    let total_revenue = totals(data).revenue;
    segments_by_revenue(data)
        .into_iter()
        .map(|(segment, t)| MarketSegmentRow {
            market_segment: segment.label().to_string(),
            bookings: t.bookings,
            total_nights: t.nights,
            avg_nights_per_booking: r2(t.avg_nights_per_booking()),
            total_revenue: r2(t.revenue),
            hb_bookings: t.hb_bookings,
            hb_penetration: r2(t.hb_booking_pct()),
            avg_rate: r2(t.avg_rate()),
            revenue_share_pct: r2(pct(t.revenue, total_revenue)),
        })
        .collect()
}

pub fn generate_market_top_agencies(data: &[BookingRecord]) -> Vec<MarketAgencyRow> {
    let mut rows = Vec::new();
    for (segment, _) in segments_by_revenue(data) {
        let mut agencies = group_by(
            data.iter().filter(|r| r.market_segment == segment),
            |r| r.agency.clone(),
        );
        agencies.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
        rows.extend(
            agencies
                .into_iter()
                .take(TOP_AGENCIES_PER_MARKET)
                .map(|(agency, t)| MarketAgencyRow {
                    market: segment.label().to_string(),
                    agency,
                    room_nights: t.nights,
                    revenue: r2(t.revenue),
                    hb_bookings: t.hb_bookings,
                }),
        );
    }
    rows
}

pub fn generate_opportunity_matrix(
    data: &[BookingRecord],
    cfg: &ScoringConfig,
) -> Vec<OpportunityRow> {
    score_agencies(data, cfg)
        .into_iter()
        .enumerate()
        .map(|(idx, s)| OpportunityRow {
            rank: idx + 1,
            agency: s.agency,
            total_nights: s.totals.nights,
            hb_nights: s.totals.hb_nights,
            current_hb_pct: r2(s.score.current_hb_pct),
            target_hb_pct: s.score.target_hb_pct,
            gap_to_target: r2(s.score.gap_to_target),
            potential_incremental_nights: r2(s.score.potential_incremental_nights),
            estimated_incremental_revenue: r2(s.score.estimated_incremental_revenue),
            volume_score: r2(s.score.volume_score),
            opportunity_score: r2(s.score.opportunity_score),
            priority_score: r2(s.score.priority_score),
            priority_tier: s.score.tier.label().to_string(),
            avg_nights_per_booking: r2(s.score.avg_nights_per_booking),
            recommended_tactic: s.score.tactic.label().to_string(),
        })
        .collect()
}

/// Revenue still on the table if `t` reached the target Half Board share.
fn gap_revenue(t: &GroupTotals, cfg: &ScoringConfig) -> f64 {
    let nights = (t.nights as f64 * cfg.target_hb_pct / 100.0 - t.hb_nights as f64).max(0.0);
    nights * cfg.incremental_rate_per_night
}

fn is_cis(r: &BookingRecord) -> bool {
    r.rate_code
        .as_deref()
        .is_some_and(|c| c.to_uppercase().contains("CIS"))
}

/// Data-driven action items: the highest-priority agencies that sell a lot
/// of nights with little Half Board, then the universal rate codes, the CIS
/// market, and large bookings.
pub fn generate_action_plan(data: &[BookingRecord], cfg: &ScoringConfig) -> Vec<ActionItemRow> {
    let success_metric = format!(
        "Achieve {}% HB penetration within 60 days",
        format_number(cfg.target_hb_pct, 0)
    );
    let mut rows: Vec<ActionItemRow> = score_agencies(data, cfg)
        .into_iter()
        .filter(|s| {
            (s.totals.nights as f64) > cfg.action_min_nights
                && s.score.current_hb_pct < cfg.action_max_hb_pct
        })
        .take(cfg.action_limit)
        .map(|s| ActionItemRow {
            priority: 1,
            category: "High Volume - Low HB Conversion".to_string(),
            target: s.agency,
            current_state: format!(
                "{} nights, {}% HB",
                format_number(s.totals.nights as f64, 0),
                format_number(s.score.current_hb_pct, 1)
            ),
            opportunity: format!(
                "Potential {} additional HB nights",
                format_number(s.score.potential_incremental_nights, 0)
            ),
            action_required: s.score.tactic.label().to_string(),
            timeline: "Week 1-2".to_string(),
            estimated_impact: format_number(s.score.estimated_incremental_revenue, 0),
            success_metric: success_metric.clone(),
            owner: "Sales Director".to_string(),
        })
        .collect();

    let universal = totals(
        data.iter()
            .filter(|r| r.rate_code.as_deref().is_some_and(|c| UNIVERSAL_CODES.contains(&c))),
    );
    if universal.bookings > 0 {
        rows.push(ActionItemRow {
            priority: 2,
            category: "Rate Code Optimization".to_string(),
            target: UNIVERSAL_CODES.join(" & "),
            current_state: format!(
                "{} room nights, {}% HB nights",
                format_number(universal.nights as f64, 0),
                format_number(universal.hb_nights_pct(), 1)
            ),
            opportunity: "Codes serve all markets, prime for HB bundling".to_string(),
            action_required: "Create HB variants of the universal codes with a fixed F&B premium"
                .to_string(),
            timeline: "Week 2-3".to_string(),
            estimated_impact: format_number(gap_revenue(&universal, cfg), 0),
            success_metric: format!(
                "{}% of universal-code nights on HB",
                format_number(cfg.target_hb_pct, 0)
            ),
            owner: "Revenue Manager".to_string(),
        });
    }

    let cis = totals(data.iter().filter(|r| is_cis(r)));
    if cis.bookings > 0 {
        rows.push(ActionItemRow {
            priority: 3,
            category: "CIS Market Expansion".to_string(),
            target: "CIS rate codes".to_string(),
            current_state: format!(
                "{} bookings, {}% HB penetration, {} HB bookings",
                cis.bookings,
                format_number(cis.hb_booking_pct(), 1),
                cis.hb_bookings
            ),
            opportunity: "CIS guests already buy packages, scale up volume".to_string(),
            action_required: "Recruit new CIS agencies on HB-inclusive rates".to_string(),
            timeline: "Week 1-4".to_string(),
            estimated_impact: format_number(gap_revenue(&cis, cfg), 0),
            success_metric: format!(
                "{}% of CIS nights on HB",
                format_number(cfg.target_hb_pct, 0)
            ),
            owner: "International Sales".to_string(),
        });
    }

    let large = totals(
        data.iter()
            .filter(|r| r.room_nights.is_some_and(|n| n >= LARGE_BOOKING_NIGHTS)),
    );
    if large.bookings > 0 {
        rows.push(ActionItemRow {
            priority: 4,
            category: "Large Booking Strategy".to_string(),
            target: format!("Bookings with {}+ nights", LARGE_BOOKING_NIGHTS),
            current_state: format!(
                "{} bookings, {}% include HB",
                large.bookings,
                format_number(large.hb_booking_pct(), 1)
            ),
            opportunity: "Large bookings carry the most F&B consumption".to_string(),
            action_required: "Quote HB by default on large bookings".to_string(),
            timeline: "Week 4-5".to_string(),
            estimated_impact: format_number(gap_revenue(&large, cfg), 0),
            success_metric: format!(
                "{}% of large-booking nights on HB",
                format_number(cfg.target_hb_pct, 0)
            ),
            owner: "Reservations Manager".to_string(),
        });
    }
    rows
}

fn size_bin(bins: &[SizeBin], nights: i64) -> Option<usize> {
    bins.iter()
        .position(|(lo, hi, _)| nights > *lo && nights <= *hi)
}

/// Bookings per night-count bucket; bookings outside every bucket (no
/// nights, or more than the top bound) are left out, as are empty buckets.
pub fn generate_booking_size_distribution(data: &[BookingRecord]) -> Vec<BookingSizeRow> {
    group_by(data, |r| {
        r.room_nights
            .and_then(|n| size_bin(&BOOKING_SIZE_BINS, n))
    })
        .into_iter()
        .map(|(bin, t)| BookingSizeRow {
            booking_size: BOOKING_SIZE_BINS[bin].2.to_string(),
            count: t.bookings,
            hb_bookings: t.hb_bookings,
            hb_pct: r2(t.hb_booking_pct()),
        })
        .collect()
}

pub fn generate_universal_codes(data: &[BookingRecord]) -> Vec<UniversalCodeRow> {
    UNIVERSAL_CODES
        .iter()
        .map(|code| {
            let t = totals(data.iter().filter(|r| r.rate_code.as_deref() == Some(*code)));
            UniversalCodeRow {
                rate_code: code.to_string(),
                bookings: t.bookings,
                total_nights: t.nights,
                total_revenue: r2(t.revenue),
                hb_bookings: t.hb_bookings,
                hb_nights: t.hb_nights,
                hb_revenue: r2(t.hb_revenue),
                hb_penetration: r2(t.hb_booking_pct()),
                avg_nights_per_booking: r2(t.avg_nights_per_booking()),
                avg_nights_per_booking_hb: r2(t.avg_hb_nights_per_booking()),
                avg_rate: r2(t.avg_rate()),
                avg_rate_hb: r2(t.avg_rate_hb()),
                agencies: t.distinct_agencies(),
                top_agency: t.top_agency(),
            }
        })
        .collect()
}

/// Half Board bookings on CIS rate codes, per rate code.
pub fn generate_cis_analysis(data: &[BookingRecord]) -> Vec<CisRateRow> {
    let cis_hb = data.iter().filter(|r| r.has_half_board && is_cis(r));
    let mut groups = group_by(cis_hb, |r| r.rate_code.clone());
    groups.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
    groups
        .into_iter()
        .map(|(code, t)| CisRateRow {
            rate_code: code,
            total_nights: t.nights,
            total_revenue: r2(t.revenue),
            bookings: t.bookings,
            avg_rate: r2(t.rate_per_night()),
            avg_nights_per_booking: r2(ratio(t.nights as f64, t.bookings as f64)),
        })
        .collect()
}

/// Bookings on CIS rate codes, all meal plans.
pub fn generate_cis_overview(data: &[BookingRecord]) -> CisOverviewRow {
    let t = totals(data.iter().filter(|r| is_cis(r)));
    CisOverviewRow {
        bookings: t.bookings,
        hb_bookings: t.hb_bookings,
        hb_penetration: r2(t.hb_booking_pct()),
        total_nights: t.nights,
        total_revenue: r2(t.revenue),
    }
}

/// Half Board bookings on CIS rate codes, per agency.
pub fn generate_cis_agencies(data: &[BookingRecord]) -> Vec<CisAgencyRow> {
    let mut groups = group_by(
        data.iter().filter(|r| r.has_half_board && is_cis(r)),
        |r| r.agency.clone(),
    );
    groups.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
    groups
        .into_iter()
        .map(|(agency, t)| CisAgencyRow {
            agency,
            total_nights: t.nights,
            total_revenue: r2(t.revenue),
            bookings: t.bookings,
            avg_rate: r2(t.rate_per_night()),
        })
        .collect()
}

/// Agencies booking each universal code, top 15 per code by revenue.
pub fn generate_universal_code_agencies(data: &[BookingRecord]) -> Vec<UniversalAgencyRow> {
    let mut rows = Vec::new();
    for code in UNIVERSAL_CODES {
        let mut agencies = group_by(
            data.iter().filter(|r| r.rate_code.as_deref() == Some(code)),
            |r| r.agency.clone(),
        );
        agencies.sort_by(|a, b| desc(a.1.revenue, b.1.revenue));
        rows.extend(
            agencies
                .into_iter()
                .take(UNIVERSAL_AGENCY_LIMIT)
                .map(|(agency, t)| UniversalAgencyRow {
                    rate_code: code.to_string(),
                    agency,
                    room_nights: t.nights,
                    revenue: r2(t.revenue),
                    hb_bookings: t.hb_bookings,
                    hb_pct: r2(t.hb_booking_pct()),
                }),
        );
    }
    rows
}

/// The agency earning the most Half Board revenue, the default subject of
/// [`generate_agency_drilldown`].
pub fn top_hb_agency(data: &[BookingRecord]) -> Option<String> {
    let mut groups = group_by(data, |r| r.agency.clone());
    groups.sort_by(|a, b| desc(a.1.hb_revenue, b.1.hb_revenue));
    groups
        .into_iter()
        .find(|(_, t)| t.hb_bookings > 0)
        .map(|(agency, _)| agency)
}

/// One agency's business split by rate code and Half Board status, and by
/// booking size. An unknown agency gives empty tables.
pub fn generate_agency_drilldown(data: &[BookingRecord], agency: &str) -> AgencyDrilldown {
    let rows: Vec<&BookingRecord> = data
        .iter()
        .filter(|r| r.agency.as_deref() == Some(agency))
        .collect();

    let rate_codes = group_by(rows.iter().copied(), |r| {
        r.rate_code.clone().map(|code| (code, r.has_half_board))
    })
    .into_iter()
    .map(|((rate_code, hb), t)| AgencyRateCodeRow {
        rate_code,
        hb_status: if hb { "With HB" } else { "Without HB" }.to_string(),
        room_nights: t.nights,
        revenue: r2(t.revenue),
        avg_rate: r2(t.avg_rate()),
    })
    .collect();

    let booking_sizes = group_by(rows.iter().copied(), |r| {
        r.room_nights.and_then(|n| size_bin(&AGENCY_SIZE_BINS, n))
    })
    .into_iter()
    .map(|(bin, t)| AgencyBookingSizeRow {
        booking_size: AGENCY_SIZE_BINS[bin].2.to_string(),
        bookings: t.bookings,
        total_nights: t.nights,
        revenue: r2(t.revenue),
        hb_bookings: t.hb_bookings,
        booking_share_pct: r2(pct(t.bookings as f64, rows.len() as f64)),
        hb_pct: r2(t.hb_booking_pct()),
        avg_revenue_per_booking: r2(ratio(t.revenue, t.bookings as f64)),
    })
    .collect();

    AgencyDrilldown {
        agency: agency.to_string(),
        rate_codes,
        booking_sizes,
    }
}

/// Whether Half Board nightly rates differ from the rest (t-test and
/// Mann-Whitney U) and whether rates differ across the most booked rate
/// codes (one-way ANOVA). A test without enough data is left out.
pub fn generate_significance_tests(data: &[BookingRecord]) -> Vec<SignificanceTestRow> {
    let rates = |hb: bool| -> Vec<f64> {
        data.iter()
            .filter(|r| r.has_half_board == hb)
            .filter_map(|r| r.avg_rate_per_night)
            .collect()
    };
    let (hb, non_hb) = (rates(true), rates(false));

    let mut codes = group_by(data, |r| r.rate_code.clone());
    codes.sort_by(|a, b| b.1.bookings.cmp(&a.1.bookings));
    let rate_groups: Vec<Vec<f64>> = codes
        .iter()
        .take(ANOVA_TOP_CODES)
        .map(|(code, _)| {
            data.iter()
                .filter(|r| r.rate_code.as_ref() == Some(code))
                .filter_map(|r| r.avg_rate_per_night)
                .collect()
        })
        .collect();

    let hb_vs_rest = "Avg rate per night: Half Board vs Non-Half Board";
    let tests = [
        ("Independent t-test", hb_vs_rest.to_string(), t_test_independent(&hb, &non_hb)),
        ("Mann-Whitney U", hb_vs_rest.to_string(), mann_whitney_u(&hb, &non_hb)),
        (
            "One-way ANOVA",
            format!("Avg rate per night across the top {} rate codes", ANOVA_TOP_CODES),
            one_way_anova(&rate_groups),
        ),
    ];
    tests
        .into_iter()
        .filter_map(|(test, comparison, outcome)| {
            let o = outcome?;
            Some(SignificanceTestRow {
                test: test.to_string(),
                comparison,
                statistic: round_to(o.statistic, 4),
                p_value: round_to(o.p_value, 4),
                significant: if o.p_value < SIGNIFICANCE_LEVEL { "Yes" } else { "No" }
                    .to_string(),
            })
        })
        .collect()
}

pub fn generate_hb_comparison(data: &[BookingRecord]) -> Vec<HbComparisonRow> {
    [("Half Board", true), ("Non-Half Board", false)]
        .into_iter()
        .map(|(category, hb)| {
            let t = totals(data.iter().filter(|r| r.has_half_board == hb));
            HbComparisonRow {
                category: category.to_string(),
                bookings: t.bookings,
                room_nights: t.nights,
                revenue: r2(t.revenue),
                avg_rate: r2(t.avg_rate()),
            }
        })
        .collect()
}
