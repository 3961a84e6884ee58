// Grouping helper shared by every report: accumulate totals per key and
// expose guarded ratios on top of them.
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::types::BookingRecord;
use crate::util::{pct, ratio};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct RateAcc {
    sum: f64,
    count: usize,
}

impl RateAcc {
    fn push(&mut self, rate: Option<f64>) {
        if let Some(r) = rate {
            self.sum += r;
            self.count += 1;
        }
    }

    fn mean(&self) -> f64 {
        ratio(self.sum, self.count as f64)
    }
}

/// Running totals for one group of bookings. Half Board figures are always
/// accumulated from the same rows as the overall figures, so they never
/// exceed them. Blank nights or revenue count toward `bookings` but not
/// toward the sums, and the `*_recorded` counters hold how many values the
/// sums are made of.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTotals {
    pub bookings: usize,
    pub hb_bookings: usize,
    pub nights: i64,
    pub hb_nights: i64,
    pub revenue: f64,
    pub hb_revenue: f64,
    pub nights_recorded: usize,
    pub hb_nights_recorded: usize,
    pub revenue_recorded: usize,
    rate: RateAcc,
    hb_rate: RateAcc,
    non_hb_rate: RateAcc,
    rate_codes: BTreeMap<String, usize>,
    agency_revenue: BTreeMap<String, f64>,
}

impl GroupTotals {
    pub fn add(&mut self, r: &BookingRecord) {
        let nights = r.room_nights.unwrap_or(0);
        let revenue = r.room_revenue.unwrap_or(0.0);
        self.bookings += 1;
        self.nights += nights;
        self.revenue += revenue;
        self.nights_recorded += usize::from(r.room_nights.is_some());
        self.revenue_recorded += usize::from(r.room_revenue.is_some());
        self.rate.push(r.avg_rate_per_night);
        if r.has_half_board {
            self.hb_bookings += 1;
            self.hb_nights += nights;
            self.hb_revenue += revenue;
            self.hb_nights_recorded += usize::from(r.room_nights.is_some());
            self.hb_rate.push(r.avg_rate_per_night);
        } else {
            self.non_hb_rate.push(r.avg_rate_per_night);
        }
        if let Some(code) = &r.rate_code {
            *self.rate_codes.entry(code.clone()).or_insert(0) += 1;
        }
        if let Some(agency) = &r.agency {
            *self.agency_revenue.entry(agency.clone()).or_insert(0.0) += revenue;
        }
    }

    pub fn non_hb_bookings(&self) -> usize {
        self.bookings - self.hb_bookings
    }

    pub fn non_hb_nights(&self) -> i64 {
        self.nights - self.hb_nights
    }

    pub fn non_hb_revenue(&self) -> f64 {
        self.revenue - self.hb_revenue
    }

    /// Half Board share of room nights, in percent.
    pub fn hb_nights_pct(&self) -> f64 {
        if self.nights > 0 {
            pct(self.hb_nights as f64, self.nights as f64)
        } else {
            0.0
        }
    }

    pub fn hb_revenue_pct(&self) -> f64 {
        if self.revenue > 0.0 {
            pct(self.hb_revenue, self.revenue)
        } else {
            0.0
        }
    }

    /// Half Board share of bookings (penetration), in percent.
    pub fn hb_booking_pct(&self) -> f64 {
        pct(self.hb_bookings as f64, self.bookings as f64)
    }

    /// Mean of the per-booking nightly rates; bookings without nights are
    /// left out.
    pub fn avg_rate(&self) -> f64 {
        self.rate.mean()
    }

    pub fn avg_rate_hb(&self) -> f64 {
        self.hb_rate.mean()
    }

    pub fn avg_rate_non_hb(&self) -> f64 {
        self.non_hb_rate.mean()
    }

    /// Revenue over nights for the whole group, as opposed to [`avg_rate`].
    ///
    /// [`avg_rate`]: GroupTotals::avg_rate
    pub fn rate_per_night(&self) -> f64 {
        ratio(self.revenue, self.nights as f64)
    }

    /// Mean nights over the bookings that recorded a night count.
    pub fn avg_nights_per_booking(&self) -> f64 {
        ratio(self.nights as f64, self.nights_recorded as f64)
    }

    pub fn avg_hb_nights_per_booking(&self) -> f64 {
        ratio(self.hb_nights as f64, self.hb_nights_recorded as f64)
    }

    pub fn avg_revenue_per_booking(&self) -> f64 {
        ratio(self.revenue, self.revenue_recorded as f64)
    }

    pub fn distinct_agencies(&self) -> usize {
        self.agency_revenue.len()
    }

    /// Most frequent rate code; ties go to the alphabetically first code.
    pub fn top_rate_code(&self) -> String {
        let mut best: Option<(&String, usize)> = None;
        for (code, &n) in &self.rate_codes {
            if best.map_or(true, |(_, m)| n > m) {
                best = Some((code, n));
            }
        }
        best.map(|(c, _)| c.clone()).unwrap_or_else(|| "N/A".to_string())
    }

    /// Agency with the largest revenue in this group; ties go to the
    /// alphabetically first agency.
    pub fn top_agency(&self) -> String {
        let mut best: Option<(&String, f64)> = None;
        for (agency, &rev) in &self.agency_revenue {
            if best.map_or(true, |(_, m)| rev > m) {
                best = Some((agency, rev));
            }
        }
        best.map(|(a, _)| a.clone()).unwrap_or_else(|| "N/A".to_string())
    }
}

pub fn totals<'a, I>(records: I) -> GroupTotals
where
    I: IntoIterator<Item = &'a BookingRecord>,
{
    let mut acc = GroupTotals::default();
    for r in records {
        acc.add(r);
    }
    acc
}

/// Group records by `key`, dropping records whose key is `None`. The result
/// is sorted by key so repeated runs produce identical tables.
pub fn group_by<'a, I, K, F>(records: I, key: F) -> Vec<(K, GroupTotals)>
where
    I: IntoIterator<Item = &'a BookingRecord>,
    K: Eq + Hash + Ord,
    F: Fn(&BookingRecord) -> Option<K>,
{
    let mut map: HashMap<K, GroupTotals> = HashMap::new();
    for r in records {
        if let Some(k) = key(r) {
            map.entry(k).or_default().add(r);
        }
    }
    let mut groups: Vec<(K, GroupTotals)> = map.into_iter().collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
}
