//! Cumulative volume at arbitrary times from history plus forecast.
//!
//! Each requested time falls in one of three regions:
//!
//! | Region | Cumulative |
//! |--------|-----------|
//! | before the first production row | 0 |
//! | within the production window | running sum of production |
//! | after the last production row | total production + forecast EUR |
//!
//! Times are visited in ascending order with a cursor over the production
//! rows that only moves forward, so a query costs O(times log times + rows).

use tracing::debug;
use wellcast_calendar::{Month, day_of};
use wellcast_segment::{Segment, SegmentModel};

use crate::error::ForecastError;
use crate::eur::{History, eur_by};
use crate::options::{DataFreq, ForecastOptions, RatioEurMethod};
use crate::predict::ratio_one;
use crate::ratio::ratio_left;

enum Region {
    Before,
    Within,
    After,
}

/// Forward-only cursor over production rows.
struct ProductionWalk<'a> {
    rows: &'a [[f64; 2]],
    freq: DataFreq,
    /// Calendar month of each row, monthly data only.
    months: Vec<Month>,
    next: usize,
    running: f64,
}

impl<'a> ProductionWalk<'a> {
    fn new(rows: &'a [[f64; 2]], freq: DataFreq) -> Result<Self, ForecastError> {
        for (i, w) in rows.windows(2).enumerate() {
            if w[1][0] < w[0][0] {
                return Err(ForecastError::UnsortedProduction {
                    row: i + 1,
                    idx: w[1][0],
                    prev: w[0][0],
                });
            }
        }
        let months = match freq {
            DataFreq::Daily => Vec::new(),
            DataFreq::Monthly => rows
                .iter()
                .map(|r| Month::of_idx(day_of(r[0])))
                .collect::<Result<_, _>>()?,
        };
        Ok(Self {
            rows,
            freq,
            months,
            next: 0,
            running: 0.0,
        })
    }

    fn total(&self) -> f64 {
        self.rows.iter().map(|r| volume(r[1])).sum()
    }

    fn history(&self) -> History {
        match self.rows.last() {
            Some(last) => History::new(self.total(), last[0], self.freq),
            None => History::none(),
        }
    }

    fn region(&self, t: f64) -> Region {
        let (Some(first), Some(last)) = (self.rows.first(), self.rows.last()) else {
            return Region::After;
        };
        let (lo, hi) = match self.freq {
            DataFreq::Daily => (first[0], last[0]),
            DataFreq::Monthly => {
                let n = self.months.len();
                (
                    self.months[0].first_idx() as f64,
                    self.months[n - 1].last_idx() as f64,
                )
            }
        };
        if t < lo {
            Region::Before
        } else if t <= hi {
            Region::Within
        } else {
            Region::After
        }
    }

    /// Cumulative production through `t`; `t` must not decrease between calls.
    fn cum_through(&mut self, t: f64) -> f64 {
        match self.freq {
            DataFreq::Daily => {
                while self.next < self.rows.len() && self.rows[self.next][0] <= t {
                    self.running += volume(self.rows[self.next][1]);
                    self.next += 1;
                }
                self.running
            }
            DataFreq::Monthly => {
                let day = day_of(t);
                while self.next < self.rows.len() && self.months[self.next].last_idx() < day {
                    self.running += volume(self.rows[self.next][1]);
                    self.next += 1;
                }
                let mut partial = 0.0;
                let mut k = self.next;
                while k < self.rows.len() && self.months[k].first_idx() <= day {
                    let m = self.months[k];
                    let elapsed = (day - m.first_idx() + 1) as f64;
                    partial += volume(self.rows[k][1]) * elapsed / m.n_days() as f64;
                    k += 1;
                }
                self.running + partial
            }
        }
    }
}

fn volume(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v }
}

fn argsort(times: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..times.len()).collect();
    order.sort_by(|&a, &b| times[a].total_cmp(&times[b]));
    order
}

/// Cumulative volume through each of `times`.
///
/// `production` rows are `[day index, volume]` sorted by index; NaN
/// volumes count as zero. For monthly data a row stands for its whole
/// calendar month and is spread evenly over the month's days. Past the
/// production window the forecast is added with the EUR algorithm chosen
/// in `options`; with no segments the total production is returned.
///
/// # Errors
///
/// - [`ForecastError::UnsortedProduction`] if the rows are out of order.
/// - [`ForecastError::Calendar`] for unrepresentable indices.
#[tracing::instrument(skip_all, fields(n_times = times.len(), n_rows = production.len()))]
pub fn cum_from_t(
    times: &[f64],
    production: &[[f64; 2]],
    segments: &[Segment],
    options: &ForecastOptions,
) -> Result<Vec<f64>, ForecastError> {
    let mut walk = ProductionWalk::new(production, options.data_freq())?;
    let history = walk.history();
    let left = segments.first().map(|s| s.start_idx());
    if left.is_none() {
        debug!("no forecast segments, cumulative stops at history");
    }

    let mut out = vec![0.0; times.len()];
    for i in argsort(times) {
        let t = times[i];
        out[i] = match walk.region(t) {
            Region::Before => 0.0,
            Region::Within => walk.cum_through(t),
            Region::After => match left {
                Some(left) => eur_by(options.eur_method(), &history, left, t, segments)?,
                None => history.cum_data,
            },
        };
    }
    Ok(out)
}

/// Cumulative volume through each of `times` for a ratio-forecast phase.
///
/// History is handled as in [`cum_from_t`]. Past the production window the
/// forecast follows `options.ratio_eur_method()` and agrees with the
/// matching EUR function:
///
/// | Method | Forecast volume through `t` | Agrees with |
/// |--------|-----------------------------|-------------|
/// | `Exact` | sum of daily rates | [`ratio_eur`](crate::ratio_eur) |
/// | `Interval` | rate sampled every `ratio_interval` days, interpolated between samples | [`ratio_eur_interval`](crate::ratio_eur_interval) |
/// | `IntervalOld` | every sample at or before `t` weighted by the full interval | [`ratio_eur_interval_old`](crate::ratio_eur_interval_old) |
///
/// # Errors
///
/// - [`ForecastError::InvalidRatioInterval`] if the interval is zero.
/// - [`ForecastError::UnsortedProduction`] if the rows are out of order.
/// - [`ForecastError::Calendar`] for unrepresentable indices.
#[tracing::instrument(skip_all, fields(n_times = times.len(), n_rows = production.len()))]
pub fn cum_from_t_ratio(
    times: &[f64],
    production: &[[f64; 2]],
    ratio: &[Segment],
    base: &[Segment],
    options: &ForecastOptions,
) -> Result<Vec<f64>, ForecastError> {
    options.validate()?;
    let mut walk = ProductionWalk::new(production, options.data_freq())?;
    let history = walk.history();

    let mut sampler = match ratio_left(ratio, base) {
        Some(left) => Some(RatioSampler::for_method(
            history.forecast_start(left)?.ceil(),
            options.ratio_eur_method(),
            options.ratio_interval(),
        )),
        None => {
            debug!("ratio forecast without segments, cumulative stops at history");
            None
        }
    };

    let mut out = vec![0.0; times.len()];
    for i in argsort(times) {
        let t = times[i];
        out[i] = match walk.region(t) {
            Region::Before => 0.0,
            Region::Within => walk.cum_through(t),
            Region::After => match sampler.as_mut() {
                Some(s) => history.cum_data + s.cum_through(t, ratio, base),
                None => history.cum_data,
            },
        };
    }
    Ok(out)
}

/// Running sampled cumulative of a ratio forecast.
struct RatioSampler {
    /// Current sample time.
    at: f64,
    /// Rate at `at`.
    rate: Option<f64>,
    /// Volume accumulated before `at`.
    cum: f64,
    step: f64,
    /// Whether a sample counts for its whole step once reached.
    full_weight: bool,
}

impl RatioSampler {
    fn for_method(start: f64, method: RatioEurMethod, interval: u32) -> Self {
        let (step, full_weight) = match method {
            RatioEurMethod::Exact => (1.0, true),
            RatioEurMethod::Interval => (f64::from(interval), false),
            RatioEurMethod::IntervalOld => (f64::from(interval), true),
        };
        Self {
            at: start,
            rate: None,
            cum: 0.0,
            step,
            full_weight,
        }
    }

    /// Forecast volume from the start through day `t`; `t` must not decrease.
    fn cum_through(&mut self, t: f64, ratio: &[Segment], base: &[Segment]) -> f64 {
        if self.full_weight {
            while self.at <= t {
                self.cum += ratio_one(self.at, ratio, base) * self.step;
                self.at += self.step;
            }
            return self.cum;
        }
        let x = t + 1.0;
        if x <= self.at {
            return 0.0;
        }
        let mut rate = *self.rate.get_or_insert_with(|| ratio_one(self.at, ratio, base));
        while self.at + self.step <= x {
            self.cum += rate * self.step;
            self.at += self.step;
            rate = ratio_one(self.at, ratio, base);
        }
        self.rate = Some(rate);
        self.cum + rate * (x - self.at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wellcast_calendar::idx_from_ymd;
    use wellcast_segment::{Empty, Flat};

    #[test]
    fn daily_three_regions() {
        let prod = [[10.0, 1.0], [11.0, 2.0], [12.0, f64::NAN], [13.0, 4.0]];
        let segs = vec![Segment::Flat(Flat::fill(14.0, 100.0, 10.0))];
        let opts = ForecastOptions::new().with_eur_method(crate::EurMethod::Precise);
        let cum = cum_from_t(&[20.0, 5.0, 12.0, 11.0, 13.0], &prod, &segs, &opts).unwrap();
        assert_eq!(cum, vec![7.0 + 70.0, 0.0, 3.0, 3.0, 7.0]);
    }

    #[test]
    fn empty_production_empty_segment_is_zero() {
        let segs = vec![Segment::Empty(Empty::new(0.0, 100.0))];
        let cum = cum_from_t(&[50.0, 99.0, 100.0], &[], &segs, &ForecastOptions::new()).unwrap();
        assert_eq!(cum, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn no_segments_returns_history() {
        let prod = [[0.0, 5.0], [1.0, 5.0]];
        let cum = cum_from_t(&[10.0], &prod, &[], &ForecastOptions::new()).unwrap();
        assert_eq!(cum, vec![10.0]);
    }

    #[test]
    fn monthly_spreads_within_month() {
        let jan = idx_from_ymd(2021, 1, 15).unwrap() as f64;
        let feb = idx_from_ymd(2021, 2, 15).unwrap() as f64;
        let prod = [[jan, 310.0], [feb, 280.0]];
        let opts = ForecastOptions::new().with_data_freq(DataFreq::Monthly);
        let jan_10 = idx_from_ymd(2021, 1, 10).unwrap() as f64;
        let feb_07 = idx_from_ymd(2021, 2, 7).unwrap() as f64;
        let dec_31 = idx_from_ymd(2020, 12, 31).unwrap() as f64;
        let cum = cum_from_t(&[feb_07, jan_10, dec_31], &prod, &[], &opts).unwrap();
        assert_relative_eq!(cum[0], 310.0 + 70.0);
        assert_relative_eq!(cum[1], 100.0);
        assert_eq!(cum[2], 0.0);
    }

    #[test]
    fn unsorted_rows_rejected() {
        let prod = [[5.0, 1.0], [4.0, 1.0]];
        let err = cum_from_t(&[1.0], &prod, &[], &ForecastOptions::new()).unwrap_err();
        assert!(matches!(err, ForecastError::UnsortedProduction { row: 1, .. }));
    }

    #[test]
    fn ratio_matches_interval_eur() {
        let prod = [[0.0, 3.0], [1.0, 3.0]];
        let ratio = vec![Segment::Flat(Flat::fill(2.0, 400.0, 0.1))];
        let base = vec![Segment::Arps(wellcast_segment::Arps::fill(2.0, 400.0, 100.0, 1.1, 0.6))];
        let opts = ForecastOptions::new().with_ratio_interval(30);
        let times = [50.0, 1.0, 300.0, 31.0, 32.0];
        let cum = cum_from_t_ratio(&times, &prod, &ratio, &base, &opts).unwrap();
        let h = History::new(6.0, 1.0, DataFreq::Daily);
        for (i, &t) in times.iter().enumerate() {
            if t <= 1.0 {
                continue;
            }
            let want = crate::ratio_eur_interval(&h, t, &ratio, &base, 30).unwrap();
            assert_relative_eq!(cum[i], want, max_relative = 1e-12);
        }
        assert_eq!(cum[1], 6.0);
    }

    #[test]
    fn ratio_follows_configured_method() {
        let ratio = vec![Segment::Flat(Flat::fill(0.0, 2000.0, 2.5))];
        let base = vec![Segment::Arps(wellcast_segment::Arps::fill(0.0, 2000.0, 400.0, 1.1, 0.9))];
        let times = [1234.0, 10.0, 45.0, 1999.5, 75.0];
        let h = History::none();
        for method in [
            RatioEurMethod::Exact,
            RatioEurMethod::Interval,
            RatioEurMethod::IntervalOld,
        ] {
            let opts = ForecastOptions::new().with_ratio_eur_method(method);
            let cum = cum_from_t_ratio(&times, &[], &ratio, &base, &opts).unwrap();
            for (i, &t) in times.iter().enumerate() {
                let want = crate::ratio_eur_by(method, &h, t, &ratio, &base, 30).unwrap();
                assert_relative_eq!(cum[i], want, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn exact_ratio_differs_from_interval_on_decline() {
        let ratio = vec![Segment::Flat(Flat::fill(0.0, 2000.0, 2.5))];
        let base = vec![Segment::Arps(wellcast_segment::Arps::fill(0.0, 2000.0, 400.0, 1.1, 0.9))];
        let exact = ForecastOptions::new().with_ratio_eur_method(RatioEurMethod::Exact);
        let interval = ForecastOptions::new();
        let a = cum_from_t_ratio(&[1234.0], &[], &ratio, &base, &exact).unwrap();
        let b = cum_from_t_ratio(&[1234.0], &[], &ratio, &base, &interval).unwrap();
        assert!(b[0] > a[0] * 1.01);
    }
}
