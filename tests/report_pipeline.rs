use hb_report::config::ScoringConfig;
use hb_report::loader::load_and_clean;
use hb_report::reports;
use hb_report::types::BookingRecord;
use hb_report::{output, LoadError};

const SAMPLE: &str = "tests/data/sample_bookings.csv";

fn load_sample() -> Vec<BookingRecord> {
    let (data, _) = load_and_clean(SAMPLE).expect("Failed to load test data");
    data
}

#[test]
fn loads_sample_and_keeps_blank_cells() {
    let (data, report) = load_and_clean(SAMPLE).expect("Failed to load test data");
    assert_eq!(report.total_rows, 11);
    assert_eq!(report.missing_numeric_cells, 1);
    assert_eq!(report.half_board_rows, 4);
    assert_eq!(data.len(), 11);
    // Thousands separators in revenue are accepted.
    assert_eq!(data[0].room_revenue, Some(40000.0));
    assert_eq!(data[8].agency, None);
    assert_eq!(data[9].rate_code, None);
    assert_eq!(data[10].room_nights, None);
    assert_eq!(data[10].room_revenue, Some(150.0));
}

#[test]
fn text_in_a_numeric_column_fails_the_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("text.csv");
    std::fs::write(
        &path,
        "Search Name,Rate Code,Room Nights,Room Revenue,Product (Descriptions)\n\
         A,BAR,2,200,Room\n\
         B,BAR,3,n/a,Room\n",
    )
    .unwrap();
    match load_and_clean(&path) {
        Err(LoadError::InvalidNumber { row, column, value }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "Room Revenue");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected invalid number error, got {:?}", other.map(|(d, _)| d.len())),
    }
}

#[test]
fn missing_column_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    std::fs::write(
        &path,
        "Search Name,Room Nights,Room Revenue,Product (Descriptions)\nA,1,100,Room\n",
    )
    .unwrap();
    match load_and_clean(&path) {
        Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Rate Code"),
        other => panic!("expected missing column error, got {:?}", other.map(|(d, _)| d.len())),
    }
}

#[test]
fn summary_totals() {
    let data = load_sample();
    let s = reports::generate_summary(&data, &ScoringConfig::default());
    assert_eq!(s.total_bookings, 11);
    assert_eq!(s.total_room_nights, 1220);
    assert_eq!(s.total_revenue, 132200.0);
    assert_eq!(s.hb_bookings, 4);
    assert_eq!(s.hb_room_nights, 182);
    assert_eq!(s.hb_revenue, 26300.0);
    assert_eq!(s.hb_avg_rate, 155.0);
    assert_eq!(s.hb_penetration_pct, 36.36);
    assert_eq!(s.unique_agencies, 5);
    assert_eq!(s.agencies_with_hb, 3);
    assert_eq!(s.agencies_without_hb, 2);
    assert_eq!(s.tobbwi_room_nights, 950);
    assert_eq!(s.tobbjn_room_nights, 50);
    assert_eq!(s.high_priority_agencies, 1);
    assert_eq!(s.total_incremental_revenue, 36126.0);
}

#[test]
fn opportunity_matrix_ranks_by_priority() {
    let data = load_sample();
    let rows = reports::generate_opportunity_matrix(&data, &ScoringConfig::default());
    let order: Vec<&str> = rows.iter().map(|r| r.agency.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "BIG TOURS LLC",
            "SMALL AGENCY",
            "DESERT GATE TOURS",
            "MIRACLE TOURISM LLC",
            "CIS VOYAGES"
        ]
    );

    let big = &rows[0];
    assert_eq!(big.rank, 1);
    assert_eq!(big.total_nights, 1000);
    assert_eq!(big.hb_nights, 50);
    assert_eq!(big.current_hb_pct, 5.0);
    assert_eq!(big.priority_score, 9.75);
    assert_eq!(big.priority_tier, "HIGH");
    assert_eq!(big.potential_incremental_nights, 300.0);
    assert_eq!(big.estimated_incremental_revenue, 36000.0);
    assert_eq!(big.recommended_tactic, "Urgent: Executive meeting + Commission incentive");

    let desert = &rows[2];
    assert_eq!(desert.total_nights, 0);
    assert_eq!(desert.current_hb_pct, 0.0);
    assert_eq!(desert.priority_score, 5.0);
    assert_eq!(desert.priority_tier, "MEDIUM");

    let miracle = &rows[3];
    assert_eq!(miracle.current_hb_pct, 60.0);
    assert_eq!(miracle.recommended_tactic, "Optimize: Upsell to premium HB packages");
    assert_eq!(miracle.priority_tier, "LOW");

    // The blank-nights booking counts, but not toward the nights average.
    let small = &rows[1];
    assert_eq!(small.total_nights, 3);
    assert_eq!(small.avg_nights_per_booking, 3.0);

    for r in &rows {
        assert!(r.hb_nights <= r.total_nights);
        assert!((0.0..=10.0).contains(&r.priority_score));
    }
}

#[test]
fn action_plan_targets_high_volume_low_hb() {
    let data = load_sample();
    let plan = reports::generate_action_plan(&data, &ScoringConfig::default());
    let priorities: Vec<usize> = plan.iter().map(|a| a.priority).collect();
    assert_eq!(priorities, vec![1, 2, 3, 4]);
    assert_eq!(plan[0].target, "BIG TOURS LLC");
    assert_eq!(plan[0].current_state, "1,000 nights, 5.0% HB");
    assert_eq!(plan[0].estimated_impact, "36,000");
    assert_eq!(plan[0].timeline, "Week 1-2");
    assert_eq!(plan[0].owner, "Sales Director");
    assert_eq!(plan[1].target, "TOBBWI & TOBBJN");
    assert_eq!(plan[1].estimated_impact, "36,000");
    assert_eq!(plan[2].category, "CIS Market Expansion");
    assert_eq!(plan[2].current_state, "2 bookings, 50.0% HB penetration, 1 HB bookings");
    // CIS already exceeds the target share of nights.
    assert_eq!(plan[2].estimated_impact, "0");
    assert_eq!(plan[2].owner, "International Sales");
    assert_eq!(plan[3].current_state, "5 bookings, 40.0% include HB");
    assert_eq!(plan[3].estimated_impact, "30,000");
    assert_eq!(plan[3].timeline, "Week 4-5");
}

#[test]
fn market_segmentation_follows_rate_code_rules() {
    let data = load_sample();
    let rows = reports::generate_market_segmentation(&data);
    let labels: Vec<&str> = rows.iter().map(|r| r.market_segment.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Universal/Multi-Market",
            "Luxembourg",
            "CIS Markets",
            "Unknown",
            "Other",
            "Desert Gate"
        ]
    );
    assert_eq!(rows[0].bookings, 3);
    assert_eq!(rows[0].total_nights, 1000);
    assert_eq!(rows[0].revenue_share_pct, 76.4);
    assert_eq!(rows[3].bookings, 2);
    assert_eq!(rows[1].hb_penetration, 50.0);

    let top = reports::generate_market_top_agencies(&data);
    assert_eq!(top[0].market, "Universal/Multi-Market");
    assert_eq!(top[0].agency, "BIG TOURS LLC");
    // The row with no agency is counted in its segment but never listed.
    assert!(top.iter().all(|r| r.market != "Other"));
}

#[test]
fn agency_and_rate_code_tables() {
    let data = load_sample();
    let agencies = reports::generate_agency_deep_dive(&data);
    assert_eq!(agencies.len(), 5);
    assert_eq!(agencies[0].agency, "BIG TOURS LLC");
    assert_eq!(agencies[0].top_rate_code, "TOBBWI");
    assert_eq!(agencies[0].non_hb_nights, 950);
    assert_eq!(agencies[1].agency, "MIRACLE TOURISM LLC");
    assert_eq!(agencies[1].hb_nights_pct, 60.0);
    for a in &agencies {
        assert!(a.hb_nights <= a.total_nights);
        assert!(a.hb_revenue <= a.total_revenue);
        assert!(a.hb_bookings <= a.bookings);
    }

    let codes = reports::generate_rate_code_performance(&data);
    assert_eq!(codes[0].rate_code, "TOBBWI");
    assert_eq!(codes[0].total_nights, 950);
    assert_eq!(codes[0].avg_rate, 100.0);
    assert_eq!(codes[0].market_segment, "Universal/Multi-Market");
    assert!(codes.iter().all(|c| !c.rate_code.is_empty()));
}

#[test]
fn side_tables() {
    let data = load_sample();

    let sizes = reports::generate_booking_size_distribution(&data);
    let labels: Vec<&str> = sizes.iter().map(|r| r.booking_size.as_str()).collect();
    assert_eq!(labels, vec!["1-5 nights", "6-15 nights", "31-50 nights", "50+ nights"]);
    assert_eq!(sizes[0].count, 3);
    assert_eq!(sizes[0].hb_pct, 33.33);
    assert_eq!(sizes[3].count, 4);
    assert_eq!(sizes[3].hb_pct, 25.0);

    let universal = reports::generate_universal_codes(&data);
    assert_eq!(universal[0].rate_code, "TOBBWI");
    assert_eq!(universal[0].bookings, 2);
    assert_eq!(universal[0].hb_bookings, 0);
    assert_eq!(universal[0].top_agency, "BIG TOURS LLC");
    assert_eq!(universal[1].hb_penetration, 100.0);

    let cis = reports::generate_cis_analysis(&data);
    assert_eq!(cis.len(), 1);
    assert_eq!(cis[0].rate_code, "TOKHACIS");
    assert_eq!(cis[0].avg_rate, 200.0);

    let overview = reports::generate_cis_overview(&data);
    assert_eq!(overview.bookings, 2);
    assert_eq!(overview.hb_bookings, 1);
    assert_eq!(overview.hb_penetration, 50.0);

    let cis_agencies = reports::generate_cis_agencies(&data);
    assert_eq!(cis_agencies.len(), 1);
    assert_eq!(cis_agencies[0].agency, "CIS VOYAGES");
    assert_eq!(cis_agencies[0].total_nights, 10);
    assert_eq!(cis_agencies[0].avg_rate, 200.0);

    let per_agency = reports::generate_universal_code_agencies(&data);
    assert_eq!(per_agency.len(), 2);
    assert_eq!(per_agency[0].rate_code, "TOBBWI");
    assert_eq!(per_agency[0].agency, "BIG TOURS LLC");
    assert_eq!(per_agency[0].room_nights, 950);
    assert_eq!(per_agency[0].hb_pct, 0.0);
    assert_eq!(per_agency[1].rate_code, "TOBBJN");
    assert_eq!(per_agency[1].hb_pct, 100.0);

    let cmp = reports::generate_hb_comparison(&data);
    assert_eq!(cmp[0].bookings, 4);
    assert_eq!(cmp[0].avg_rate, 155.0);
    assert_eq!(cmp[1].bookings, 7);
    assert_eq!(cmp[1].room_nights, 1038);

    let stats = reports::generate_descriptive_stats(&data);
    assert_eq!(stats.len(), 6);
    assert_eq!(stats[0].count, 10);
    assert_eq!(stats[0].max, 550.0);
    assert_eq!(stats[1].count, 11);
    // The zero-night booking has no nightly rate.
    assert_eq!(stats[2].count, 9);
    assert_eq!(stats[3].scope, "Half Board");
    assert_eq!(stats[3].count, 4);
}

#[test]
fn drilldown_defaults_to_the_top_half_board_agency() {
    let data = load_sample();
    let agency = reports::top_hb_agency(&data).expect("an agency sells Half Board");
    assert_eq!(agency, "MIRACLE TOURISM LLC");

    let drill = reports::generate_agency_drilldown(&data, &agency);
    assert_eq!(drill.rate_codes.len(), 2);
    assert_eq!(drill.rate_codes[0].hb_status, "Without HB");
    assert_eq!(drill.rate_codes[0].room_nights, 80);
    assert_eq!(drill.rate_codes[0].avg_rate, 120.0);
    assert_eq!(drill.rate_codes[1].hb_status, "With HB");
    assert_eq!(drill.rate_codes[1].revenue, 18000.0);

    let sizes: Vec<&str> = drill
        .booking_sizes
        .iter()
        .map(|r| r.booking_size.as_str())
        .collect();
    assert_eq!(sizes, vec!["51-100 nights", "100+ nights"]);
    assert_eq!(drill.booking_sizes[0].booking_share_pct, 50.0);
    assert_eq!(drill.booking_sizes[1].hb_pct, 100.0);
    assert_eq!(drill.booking_sizes[1].avg_revenue_per_booking, 18000.0);
}

#[test]
fn rate_significance_tests() {
    let data = load_sample();
    let tests = reports::generate_significance_tests(&data);
    let names: Vec<&str> = tests.iter().map(|t| t.test.as_str()).collect();
    assert_eq!(names, vec!["Independent t-test", "Mann-Whitney U", "One-way ANOVA"]);

    // HB rates 120/150/200/150 against 100/100/120/140/150.
    assert!((tests[0].statistic - 1.7745).abs() < 1e-3);
    assert!(tests[0].p_value > 0.1 && tests[0].p_value < 0.15);
    assert_eq!(tests[1].statistic, 16.5);
    assert!(tests[1].p_value > 0.1 && tests[1].p_value < 0.2);
    assert!((tests[2].statistic - 6.3556).abs() < 1e-3);
    assert!(tests[2].p_value > 0.13 && tests[2].p_value < 0.15);
    assert!(tests.iter().all(|t| t.significant == "No"));
}

#[test]
fn reports_are_a_pure_function_of_the_input() {
    let data = load_sample();
    let cfg = ScoringConfig::default();
    assert_eq!(
        reports::generate_opportunity_matrix(&data, &cfg),
        reports::generate_opportunity_matrix(&data, &cfg)
    );
    assert_eq!(
        reports::generate_agency_deep_dive(&data),
        reports::generate_agency_deep_dive(&data)
    );
    assert_eq!(
        reports::generate_summary(&data, &cfg),
        reports::generate_summary(&data, &cfg)
    );
}

#[test]
fn writes_report_files() {
    let data = load_sample();
    let cfg = ScoringConfig::default();
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("hb_opportunity_matrix.csv");
    output::write_csv(&csv_path, &reports::generate_opportunity_matrix(&data, &cfg)).unwrap();
    let text = std::fs::read_to_string(&csv_path).unwrap();
    assert!(text.starts_with("Rank,Agency Name,Total Room Nights"));
    assert_eq!(text.lines().count(), 6);

    let json_path = dir.path().join("summary.json");
    output::write_json(&json_path, &reports::generate_summary(&data, &cfg)).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["total_bookings"], 11);
    assert_eq!(value["high_priority_agencies"], 1);
}
