use crate::classify::{classify_half_board, classify_market_segment};
use crate::error::{LoadError, Result};
use crate::types::{
    BookingRecord, RawRow, COL_AGENCY, COL_NIGHTS, COL_PRODUCT, COL_RATE_CODE, COL_REVENUE,
};
use crate::util::{clean_text, parse_f64_safe, parse_i64_safe};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    /// Blank Room Nights or Room Revenue cells. The booking is kept and the
    /// value is left out of sums and means.
    pub missing_numeric_cells: usize,
    pub half_board_rows: usize,
}

/// Positions of the five report columns in the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    agency: usize,
    rate_code: usize,
    nights: usize,
    revenue: usize,
    product: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            agency: find(COL_AGENCY)?,
            rate_code: find(COL_RATE_CODE)?,
            nights: find(COL_NIGHTS)?,
            revenue: find(COL_REVENUE)?,
            product: find(COL_PRODUCT)?,
        })
    }

    fn read(&self, record: &StringRecord) -> RawRow {
        let cell = |i: usize| record.get(i).map(str::to_string);
        RawRow {
            search_name: cell(self.agency),
            rate_code: cell(self.rate_code),
            room_nights: cell(self.nights),
            room_revenue: cell(self.revenue),
            product: cell(self.product),
        }
    }
}

/// Blank cells are missing values; anything else must parse.
fn numeric_cell<T>(
    raw: Option<&str>,
    parse: fn(Option<&str>) -> Option<T>,
    row: usize,
    column: &'static str,
) -> Result<Option<T>> {
    let text = raw.map(str::trim).unwrap_or("");
    if text.is_empty() {
        return Ok(None);
    }
    parse(Some(text)).map(Some).ok_or_else(|| LoadError::InvalidNumber {
        row,
        column,
        value: text.to_string(),
    })
}

/// Build a clean booking from a raw row, deriving the nightly rate, the
/// Half Board flag and the market segment. `row` is the 1-based data row
/// used in error messages.
pub fn clean_row(row: usize, raw: RawRow) -> Result<BookingRecord> {
    let room_nights = numeric_cell(raw.room_nights.as_deref(), parse_i64_safe, row, COL_NIGHTS)?;
    let room_revenue =
        numeric_cell(raw.room_revenue.as_deref(), parse_f64_safe, row, COL_REVENUE)?;
    let agency = clean_text(raw.search_name);
    let rate_code = clean_text(raw.rate_code);
    let product = clean_text(raw.product);

    let avg_rate_per_night = match (room_nights, room_revenue) {
        (Some(n), Some(rev)) if n != 0 => Some(rev / n as f64),
        _ => None,
    };
    let has_half_board = classify_half_board(product.as_deref());
    let market_segment = classify_market_segment(rate_code.as_deref());

    Ok(BookingRecord {
        agency,
        rate_code,
        room_nights,
        room_revenue,
        product,
        avg_rate_per_night,
        has_half_board,
        market_segment,
    })
}

/// Load every booking in `path`. A missing column or a non-numeric Room
/// Nights / Room Revenue cell fails the whole load.
pub fn load_and_clean(path: impl AsRef<Path>) -> Result<(Vec<BookingRecord>, LoadReport)> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)?;
    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut missing_numeric_cells = 0usize;
    let mut records: Vec<BookingRecord> = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let raw = columns.read(&result?);
        let rec = clean_row(idx + 1, raw)?;
        let missing =
            usize::from(rec.room_nights.is_none()) + usize::from(rec.room_revenue.is_none());
        if missing > 0 {
            debug!(row = idx + 1, missing, "blank numeric cell");
            missing_numeric_cells += missing;
        }
        records.push(rec);
    }

    if missing_numeric_cells > 0 {
        warn!(
            missing_numeric_cells,
            rows = records.len(),
            "blank room nights or revenue left out of totals"
        );
    }

    let half_board_rows = records.iter().filter(|r| r.has_half_board).count();
    let report = LoadReport {
        total_rows: records.len(),
        missing_numeric_cells,
        half_board_rows,
    };
    Ok((records, report))
}
