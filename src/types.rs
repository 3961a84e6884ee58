use serde::Serialize;
use tabled::Tabled;

use crate::classify::MarketSegment;

pub const COL_AGENCY: &str = "Search Name";
pub const COL_RATE_CODE: &str = "Rate Code";
pub const COL_NIGHTS: &str = "Room Nights";
pub const COL_REVENUE: &str = "Room Revenue";
pub const COL_PRODUCT: &str = "Product (Descriptions)";

/// Raw cell text of the five columns the reports read, as found in the file.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    pub search_name: Option<String>,
    pub rate_code: Option<String>,
    pub room_nights: Option<String>,
    pub room_revenue: Option<String>,
    pub product: Option<String>,
}

/// One booking, cleaned and enriched with the derived columns every report
/// relies on.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub agency: Option<String>,
    pub rate_code: Option<String>,
    /// `None` when the cell was blank.
    pub room_nights: Option<i64>,
    /// `None` when the cell was blank.
    pub room_revenue: Option<f64>,
    pub product: Option<String>,
    /// `None` when nights or revenue are missing, or nights are zero.
    pub avg_rate_per_night: Option<f64>,
    pub has_half_board: bool,
    pub market_segment: MarketSegment,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct DescriptiveStatsRow {
    #[serde(rename = "Scope")]
    #[tabled(rename = "Scope")]
    pub scope: String,
    #[serde(rename = "Metric")]
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Count")]
    #[tabled(rename = "Count")]
    pub count: usize,
    #[serde(rename = "Mean")]
    #[tabled(rename = "Mean")]
    pub mean: f64,
    #[serde(rename = "Std")]
    #[tabled(rename = "Std")]
    pub std: f64,
    #[serde(rename = "Min")]
    #[tabled(rename = "Min")]
    pub min: f64,
    #[serde(rename = "25%")]
    #[tabled(rename = "25%")]
    pub q25: f64,
    #[serde(rename = "50%")]
    #[tabled(rename = "50%")]
    pub median: f64,
    #[serde(rename = "75%")]
    #[tabled(rename = "75%")]
    pub q75: f64,
    #[serde(rename = "Max")]
    #[tabled(rename = "Max")]
    pub max: f64,
    #[serde(rename = "Skewness")]
    #[tabled(rename = "Skewness")]
    pub skewness: f64,
    #[serde(rename = "Kurtosis")]
    #[tabled(rename = "Kurtosis")]
    pub kurtosis: f64,
    #[serde(rename = "Variance")]
    #[tabled(rename = "Variance")]
    pub variance: f64,
    #[serde(rename = "CV %")]
    #[tabled(rename = "CV %")]
    pub cv_pct: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct AgencyDeepDiveRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Agency Name")]
    #[tabled(rename = "Agency Name")]
    pub agency: String,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "HB Room Nights")]
    #[tabled(rename = "HB Room Nights")]
    pub hb_nights: i64,
    #[serde(rename = "Non-HB Room Nights")]
    #[tabled(rename = "Non-HB Room Nights")]
    pub non_hb_nights: i64,
    #[serde(rename = "% HB Nights")]
    #[tabled(rename = "% HB Nights")]
    pub hb_nights_pct: f64,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
    #[serde(rename = "HB Revenue (AED)")]
    #[tabled(rename = "HB Revenue (AED)")]
    pub hb_revenue: f64,
    #[serde(rename = "Non-HB Revenue (AED)")]
    #[tabled(rename = "Non-HB Revenue (AED)")]
    pub non_hb_revenue: f64,
    #[serde(rename = "% HB Revenue")]
    #[tabled(rename = "% HB Revenue")]
    pub hb_revenue_pct: f64,
    #[serde(rename = "Total Bookings")]
    #[tabled(rename = "Total Bookings")]
    pub bookings: usize,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "Avg Rate (Overall) AED")]
    #[tabled(rename = "Avg Rate (Overall) AED")]
    pub avg_rate: f64,
    #[serde(rename = "Avg Rate (HB) AED")]
    #[tabled(rename = "Avg Rate (HB) AED")]
    pub avg_rate_hb: f64,
    #[serde(rename = "Avg Rate (Non-HB) AED")]
    #[tabled(rename = "Avg Rate (Non-HB) AED")]
    pub avg_rate_non_hb: f64,
    #[serde(rename = "Top Rate Code")]
    #[tabled(rename = "Top Rate Code")]
    pub top_rate_code: String,
    #[serde(rename = "Avg Nights per Booking")]
    #[tabled(rename = "Avg Nights per Booking")]
    pub avg_nights_per_booking: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct RateCodeRow {
    #[serde(rename = "Rate Code")]
    #[tabled(rename = "Rate Code")]
    pub rate_code: String,
    #[serde(rename = "Market Segment")]
    #[tabled(rename = "Market Segment")]
    pub market_segment: String,
    #[serde(rename = "Total Nights")]
    #[tabled(rename = "Total Nights")]
    pub total_nights: i64,
    #[serde(rename = "Avg Nights")]
    #[tabled(rename = "Avg Nights")]
    pub avg_nights: f64,
    #[serde(rename = "Transactions")]
    #[tabled(rename = "Transactions")]
    pub bookings: usize,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
    #[serde(rename = "Avg Revenue (AED)")]
    #[tabled(rename = "Avg Revenue (AED)")]
    pub avg_revenue: f64,
    #[serde(rename = "Avg Rate (AED)")]
    #[tabled(rename = "Avg Rate (AED)")]
    pub avg_rate: f64,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "HB Penetration %")]
    #[tabled(rename = "HB Penetration %")]
    pub hb_penetration: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct MarketSegmentRow {
    #[serde(rename = "Market Segment")]
    #[tabled(rename = "Market Segment")]
    pub market_segment: String,
    #[serde(rename = "Bookings")]
    #[tabled(rename = "Bookings")]
    pub bookings: usize,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Avg Nights per Booking")]
    #[tabled(rename = "Avg Nights per Booking")]
    pub avg_nights_per_booking: f64,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "HB Penetration %")]
    #[tabled(rename = "HB Penetration %")]
    pub hb_penetration: f64,
    #[serde(rename = "Avg Rate (AED)")]
    #[tabled(rename = "Avg Rate (AED)")]
    pub avg_rate: f64,
    #[serde(rename = "% of Total Revenue")]
    #[tabled(rename = "% of Total Revenue")]
    pub revenue_share_pct: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct MarketAgencyRow {
    #[serde(rename = "Market")]
    #[tabled(rename = "Market")]
    pub market: String,
    #[serde(rename = "Agency")]
    #[tabled(rename = "Agency")]
    pub agency: String,
    #[serde(rename = "Room Nights")]
    #[tabled(rename = "Room Nights")]
    pub room_nights: i64,
    #[serde(rename = "Revenue (AED)")]
    #[tabled(rename = "Revenue (AED)")]
    pub revenue: f64,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct OpportunityRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Agency Name")]
    #[tabled(rename = "Agency Name")]
    pub agency: String,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Current HB Nights")]
    #[tabled(rename = "Current HB Nights")]
    pub hb_nights: i64,
    #[serde(rename = "Current HB %")]
    #[tabled(rename = "Current HB %")]
    pub current_hb_pct: f64,
    #[serde(rename = "Target HB %")]
    #[tabled(rename = "Target HB %")]
    pub target_hb_pct: f64,
    #[serde(rename = "Gap to Target (%)")]
    #[tabled(rename = "Gap to Target (%)")]
    pub gap_to_target: f64,
    #[serde(rename = "Potential HB Nights")]
    #[tabled(rename = "Potential HB Nights")]
    pub potential_incremental_nights: f64,
    #[serde(rename = "Est. Incremental F&B Revenue (AED)")]
    #[tabled(rename = "Est. Incremental F&B Revenue (AED)")]
    pub estimated_incremental_revenue: f64,
    #[serde(rename = "Volume Score")]
    #[tabled(rename = "Volume Score")]
    pub volume_score: f64,
    #[serde(rename = "Opportunity Score")]
    #[tabled(rename = "Opportunity Score")]
    pub opportunity_score: f64,
    #[serde(rename = "Priority Score")]
    #[tabled(rename = "Priority Score")]
    pub priority_score: f64,
    #[serde(rename = "Action Priority")]
    #[tabled(rename = "Action Priority")]
    pub priority_tier: String,
    #[serde(rename = "Avg Nights per Booking")]
    #[tabled(rename = "Avg Nights per Booking")]
    pub avg_nights_per_booking: f64,
    #[serde(rename = "Recommended Tactic")]
    #[tabled(rename = "Recommended Tactic")]
    pub recommended_tactic: String,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct ActionItemRow {
    #[serde(rename = "Priority")]
    #[tabled(rename = "Priority")]
    pub priority: usize,
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "Target")]
    #[tabled(rename = "Target")]
    pub target: String,
    #[serde(rename = "Current State")]
    #[tabled(rename = "Current State")]
    pub current_state: String,
    #[serde(rename = "Opportunity")]
    #[tabled(rename = "Opportunity")]
    pub opportunity: String,
    #[serde(rename = "Action Required")]
    #[tabled(rename = "Action Required")]
    pub action_required: String,
    #[serde(rename = "Timeline")]
    #[tabled(rename = "Timeline")]
    pub timeline: String,
    #[serde(rename = "Est. Impact (AED)")]
    #[tabled(rename = "Est. Impact (AED)")]
    pub estimated_impact: String,
    #[serde(rename = "Success Metric")]
    #[tabled(rename = "Success Metric")]
    pub success_metric: String,
    #[serde(rename = "Owner")]
    #[tabled(rename = "Owner")]
    pub owner: String,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct BookingSizeRow {
    #[serde(rename = "Booking Size")]
    #[tabled(rename = "Booking Size")]
    pub booking_size: String,
    #[serde(rename = "Count")]
    #[tabled(rename = "Count")]
    pub count: usize,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "HB %")]
    #[tabled(rename = "HB %")]
    pub hb_pct: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct UniversalCodeRow {
    #[serde(rename = "Rate Code")]
    #[tabled(rename = "Rate Code")]
    pub rate_code: String,
    #[serde(rename = "Total Bookings")]
    #[tabled(rename = "Total Bookings")]
    pub bookings: usize,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "HB Room Nights")]
    #[tabled(rename = "HB Room Nights")]
    pub hb_nights: i64,
    #[serde(rename = "HB Revenue (AED)")]
    #[tabled(rename = "HB Revenue (AED)")]
    pub hb_revenue: f64,
    #[serde(rename = "% HB Penetration")]
    #[tabled(rename = "% HB Penetration")]
    pub hb_penetration: f64,
    #[serde(rename = "Avg Nights per Booking")]
    #[tabled(rename = "Avg Nights per Booking")]
    pub avg_nights_per_booking: f64,
    #[serde(rename = "Avg Nights per Booking (HB)")]
    #[tabled(rename = "Avg Nights per Booking (HB)")]
    pub avg_nights_per_booking_hb: f64,
    #[serde(rename = "Avg Rate (Overall) AED")]
    #[tabled(rename = "Avg Rate (Overall) AED")]
    pub avg_rate: f64,
    #[serde(rename = "Avg Rate (HB) AED")]
    #[tabled(rename = "Avg Rate (HB) AED")]
    pub avg_rate_hb: f64,
    #[serde(rename = "Number of Agencies Using")]
    #[tabled(rename = "Number of Agencies Using")]
    pub agencies: usize,
    #[serde(rename = "Top Agency")]
    #[tabled(rename = "Top Agency")]
    pub top_agency: String,
}

/// One agency's business on a universal rate code.
#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct UniversalAgencyRow {
    #[serde(rename = "Rate Code")]
    #[tabled(rename = "Rate Code")]
    pub rate_code: String,
    #[serde(rename = "Agency")]
    #[tabled(rename = "Agency")]
    pub agency: String,
    #[serde(rename = "Room Nights")]
    #[tabled(rename = "Room Nights")]
    pub room_nights: i64,
    #[serde(rename = "Revenue (AED)")]
    #[tabled(rename = "Revenue (AED)")]
    pub revenue: f64,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "% HB")]
    #[tabled(rename = "% HB")]
    pub hb_pct: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct CisOverviewRow {
    #[serde(rename = "CIS Bookings")]
    #[tabled(rename = "CIS Bookings")]
    pub bookings: usize,
    #[serde(rename = "CIS HB Bookings")]
    #[tabled(rename = "CIS HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "CIS HB Penetration %")]
    #[tabled(rename = "CIS HB Penetration %")]
    pub hb_penetration: f64,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct CisAgencyRow {
    #[serde(rename = "Agency")]
    #[tabled(rename = "Agency")]
    pub agency: String,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
    #[serde(rename = "Num Bookings")]
    #[tabled(rename = "Num Bookings")]
    pub bookings: usize,
    #[serde(rename = "Avg Rate (AED)")]
    #[tabled(rename = "Avg Rate (AED)")]
    pub avg_rate: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct CisRateRow {
    #[serde(rename = "Rate Code")]
    #[tabled(rename = "Rate Code")]
    pub rate_code: String,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Total Revenue (AED)")]
    #[tabled(rename = "Total Revenue (AED)")]
    pub total_revenue: f64,
    #[serde(rename = "Num Bookings")]
    #[tabled(rename = "Num Bookings")]
    pub bookings: usize,
    #[serde(rename = "Avg Rate (AED)")]
    #[tabled(rename = "Avg Rate (AED)")]
    pub avg_rate: f64,
    #[serde(rename = "Avg Nights per Booking")]
    #[tabled(rename = "Avg Nights per Booking")]
    pub avg_nights_per_booking: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct HbComparisonRow {
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "Bookings")]
    #[tabled(rename = "Bookings")]
    pub bookings: usize,
    #[serde(rename = "Room Nights")]
    #[tabled(rename = "Room Nights")]
    pub room_nights: i64,
    #[serde(rename = "Revenue (AED)")]
    #[tabled(rename = "Revenue (AED)")]
    pub revenue: f64,
    #[serde(rename = "Avg Rate (AED)")]
    #[tabled(rename = "Avg Rate (AED)")]
    pub avg_rate: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct AgencyRateCodeRow {
    #[serde(rename = "Rate Code")]
    #[tabled(rename = "Rate Code")]
    pub rate_code: String,
    #[serde(rename = "HB Status")]
    #[tabled(rename = "HB Status")]
    pub hb_status: String,
    #[serde(rename = "Room Nights")]
    #[tabled(rename = "Room Nights")]
    pub room_nights: i64,
    #[serde(rename = "Room Revenue (AED)")]
    #[tabled(rename = "Room Revenue (AED)")]
    pub revenue: f64,
    #[serde(rename = "Avg Rate (AED)")]
    #[tabled(rename = "Avg Rate (AED)")]
    pub avg_rate: f64,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct AgencyBookingSizeRow {
    #[serde(rename = "Booking Size")]
    #[tabled(rename = "Booking Size")]
    pub booking_size: String,
    #[serde(rename = "Bookings")]
    #[tabled(rename = "Bookings")]
    pub bookings: usize,
    #[serde(rename = "Total Room Nights")]
    #[tabled(rename = "Total Room Nights")]
    pub total_nights: i64,
    #[serde(rename = "Revenue (AED)")]
    #[tabled(rename = "Revenue (AED)")]
    pub revenue: f64,
    #[serde(rename = "HB Bookings")]
    #[tabled(rename = "HB Bookings")]
    pub hb_bookings: usize,
    #[serde(rename = "% of Bookings")]
    #[tabled(rename = "% of Bookings")]
    pub booking_share_pct: f64,
    #[serde(rename = "% HB")]
    #[tabled(rename = "% HB")]
    pub hb_pct: f64,
    #[serde(rename = "Avg Revenue per Booking")]
    #[tabled(rename = "Avg Revenue per Booking")]
    pub avg_revenue_per_booking: f64,
}

/// Rate-code and booking-size breakdown for a single agency.
#[derive(Debug, Clone, PartialEq)]
pub struct AgencyDrilldown {
    pub agency: String,
    pub rate_codes: Vec<AgencyRateCodeRow>,
    pub booking_sizes: Vec<AgencyBookingSizeRow>,
}

#[derive(Debug, Serialize, Tabled, Clone, PartialEq)]
pub struct SignificanceTestRow {
    #[serde(rename = "Test")]
    #[tabled(rename = "Test")]
    pub test: String,
    #[serde(rename = "Comparison")]
    #[tabled(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Statistic")]
    #[tabled(rename = "Statistic")]
    pub statistic: f64,
    #[serde(rename = "P-value")]
    #[tabled(rename = "P-value")]
    pub p_value: f64,
    #[serde(rename = "Significant (alpha=0.05)")]
    #[tabled(rename = "Significant (alpha=0.05)")]
    pub significant: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_bookings: usize,
    pub total_room_nights: i64,
    pub total_revenue: f64,
    pub avg_rate: f64,
    pub hb_bookings: usize,
    pub hb_room_nights: i64,
    pub hb_revenue: f64,
    pub hb_avg_rate: f64,
    pub hb_penetration_pct: f64,
    pub hb_revenue_share_pct: f64,
    pub hb_night_share_pct: f64,
    pub unique_agencies: usize,
    pub agencies_with_hb: usize,
    pub agencies_without_hb: usize,
    pub tobbwi_room_nights: i64,
    pub tobbjn_room_nights: i64,
    pub high_priority_agencies: usize,
    pub total_incremental_revenue: f64,
}
