// Describe-style summary statistics for a numeric column, and the
// significance tests used to compare groups of nightly rates.
use std::cmp::Ordering;

use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};

use crate::util::{average, ratio};

// Both samples at or below this size, without ties, use the exact
// Mann-Whitney distribution.
const EXACT_MWU_MAX: usize = 8;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub variance: f64,
    pub cv_pct: f64,
}

/// Linearly interpolated quantile of an already sorted slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Count, mean, sample standard deviation, quartiles, bias-corrected
/// skewness and excess kurtosis. Anything that needs more observations than
/// are available is reported as 0.
pub fn describe(values: &[f64]) -> Describe {
    let n = values.len();
    if n == 0 {
        return Describe::default();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mean = average(values);
    let nf = n as f64;
    let (m2, m3, m4) = values.iter().fold((0.0, 0.0, 0.0), |(a2, a3, a4), x| {
        let d = x - mean;
        let d2 = d * d;
        (a2 + d2, a3 + d2 * d, a4 + d2 * d2)
    });
    let (m2, m3, m4) = (m2 / nf, m3 / nf, m4 / nf);

    let variance = if n > 1 { m2 * nf / (nf - 1.0) } else { 0.0 };
    let std = variance.sqrt();

    let skewness = if n > 2 && m2 > 0.0 {
        let g1 = m3 / m2.powf(1.5);
        (nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1
    } else {
        0.0
    };
    let kurtosis = if n > 3 && m2 > 0.0 {
        let g2 = m4 / (m2 * m2) - 3.0;
        ((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0))
    } else {
        0.0
    };

    Describe {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted[n - 1],
        skewness,
        kurtosis,
        variance,
        cv_pct: ratio(std, mean) * 100.0,
    }
}

/// Test statistic and two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
}

/// Student's t-test for two independent samples with pooled variance.
/// `None` when either sample has fewer than two values or both are constant.
pub fn t_test_independent(a: &[f64], b: &[f64]) -> Option<TestOutcome> {
    if a.len() < 2 || b.len() < 2 {
        return None;
    }
    let (da, db) = (describe(a), describe(b));
    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let dof = n1 + n2 - 2.0;
    let pooled = ((n1 - 1.0) * da.variance + (n2 - 1.0) * db.variance) / dof;
    if pooled <= 0.0 {
        return None;
    }
    let t = (da.mean - db.mean) / (pooled * (1.0 / n1 + 1.0 / n2)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, dof).ok()?;
    Some(TestOutcome {
        statistic: t,
        p_value: (2.0 * dist.sf(t.abs())).min(1.0),
    })
}

/// 1-based average ranks of `values`, and the size of every tie group.
fn average_ranks(values: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].partial_cmp(&values[j]).unwrap_or(Ordering::Equal));
    let mut ranks = vec![0.0; values.len()];
    let mut ties = Vec::new();
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && values[order[end]] == values[order[start]] {
            end += 1;
        }
        let rank = (start + end + 1) as f64 / 2.0;
        for &i in &order[start..end] {
            ranks[i] = rank;
        }
        ties.push(end - start);
        start = end;
    }
    (ranks, ties)
}

/// P(U >= u) under the null hypothesis, counting every ordering of the two
/// samples.
fn mwu_exact_sf(u: usize, n1: usize, n2: usize) -> f64 {
    // counts[i][j][k]: orderings of i + j values whose U statistic is k.
    let mut counts: Vec<Vec<Vec<f64>>> = vec![vec![Vec::new(); n2 + 1]; n1 + 1];
    for i in 0..=n1 {
        for j in 0..=n2 {
            let cell = if i == 0 || j == 0 {
                vec![1.0]
            } else {
                let mut c = vec![0.0; i * j + 1];
                for (k, v) in counts[i][j - 1].iter().enumerate() {
                    c[k] += v;
                }
                for (k, v) in counts[i - 1][j].iter().enumerate() {
                    c[k + j] += v;
                }
                c
            };
            counts[i][j] = cell;
        }
    }
    let dist = &counts[n1][n2];
    let total: f64 = dist.iter().sum();
    dist.iter().skip(u).sum::<f64>() / total
}

/// Two-sided Mann-Whitney U test. The statistic is U of the first sample.
/// Small samples without ties use the exact distribution, everything else
/// the normal approximation with tie and continuity corrections.
pub fn mann_whitney_u(a: &[f64], b: &[f64]) -> Option<TestOutcome> {
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let (n1, n2) = (a.len(), b.len());
    let combined: Vec<f64> = a.iter().chain(b).copied().collect();
    let (ranks, ties) = average_ranks(&combined);
    let (f1, f2) = (n1 as f64, n2 as f64);
    let r1: f64 = ranks[..n1].iter().sum();
    let u1 = r1 - f1 * (f1 + 1.0) / 2.0;
    let u = u1.max(f1 * f2 - u1);

    let has_ties = ties.iter().any(|&t| t > 1);
    let p_value = if n1 <= EXACT_MWU_MAX && n2 <= EXACT_MWU_MAX && !has_ties {
        2.0 * mwu_exact_sf(u.round() as usize, n1, n2)
    } else {
        let n = f1 + f2;
        let tie_term: f64 = ties
            .iter()
            .map(|&t| {
                let t = t as f64;
                t * t * t - t
            })
            .sum();
        let sd = (f1 * f2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)))).sqrt();
        if sd.is_nan() || sd <= 0.0 {
            return None;
        }
        let z = (u - f1 * f2 / 2.0 - 0.5) / sd;
        2.0 * Normal::new(0.0, 1.0).ok()?.sf(z)
    };
    Some(TestOutcome {
        statistic: u1,
        p_value: p_value.min(1.0),
    })
}

/// One-way ANOVA across groups. Empty groups are ignored; `None` when fewer
/// than two groups remain, there are no residual degrees of freedom, or
/// every group is constant.
pub fn one_way_anova(groups: &[Vec<f64>]) -> Option<TestOutcome> {
    let groups: Vec<&[f64]> = groups
        .iter()
        .map(Vec::as_slice)
        .filter(|g| !g.is_empty())
        .collect();
    let k = groups.len();
    let n: usize = groups.iter().map(|g| g.len()).sum();
    if k < 2 || n <= k {
        return None;
    }
    let grand = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n as f64;
    let (mut between, mut within) = (0.0, 0.0);
    for g in &groups {
        let m = average(g);
        between += g.len() as f64 * (m - grand).powi(2);
        within += g.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    }
    if within <= 0.0 {
        return None;
    }
    let (d1, d2) = ((k - 1) as f64, (n - k) as f64);
    let f = (between / d1) / (within / d2);
    let dist = FisherSnedecor::new(d1, d2).ok()?;
    Some(TestOutcome {
        statistic: f,
        p_value: dist.sf(f),
    })
}
