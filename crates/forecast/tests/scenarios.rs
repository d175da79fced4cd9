//! Reference scenarios for the forecast operations.

use approx::assert_relative_eq;
use wellcast_calendar::idx_from_ymd;
use wellcast_forecast::{
    DataFreq, EurMethod, ForecastOptions, History, RatioEurMethod, ShutIn, apply_shutin,
    cum_from_t, cum_from_t_ratio, eur_by, predict, predict_monthly_volumes, ratio_eur_by,
    sum_forecast_by_month,
};
use wellcast_segment::{Arps, Empty, Flat, Segment, SegmentParams};

#[test]
fn cum_without_history_over_empty_forecast_is_zero() {
    let query = 500.0;
    let segs = vec![Segment::Empty(Empty::new(query - 100.0, query + 100.0))];
    let times: Vec<f64> = (0..=100).map(|d| query - 100.0 + f64::from(d)).collect();
    for method in [EurMethod::Approximate, EurMethod::SelfApproximate, EurMethod::Precise] {
        let opts = ForecastOptions::new().with_eur_method(method);
        let cum = cum_from_t(&times, &[], &segs, &opts).unwrap();
        assert!(cum.iter().all(|&c| c == 0.0), "{method:?}: {cum:?}");
    }
}

#[test]
fn thirty_one_days_at_ten_is_one_bucket() {
    let start = idx_from_ymd(2019, 7, 1).unwrap();
    let days: Vec<i64> = (start..start + 31).collect();
    let (months, totals) = sum_forecast_by_month(&days, &[10.0; 31]).unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(totals, vec![310.0]);
}

#[test]
fn monthly_volumes_sum_to_precise_eur() {
    let jan = idx_from_ymd(2022, 1, 1).unwrap() as f64;
    let dec = idx_from_ymd(2022, 12, 31).unwrap() as f64;
    let segs = vec![
        SegmentParams::Arps {
            start_idx: jan,
            end_idx: dec,
            q_start: 800.0,
            b: 0.9,
            d_eff: 0.65,
        }
        .fill(),
    ];
    let mid_months: Vec<f64> = (1..=12)
        .map(|m| idx_from_ymd(2022, m, 15).unwrap() as f64)
        .collect();
    let monthly: f64 = predict_monthly_volumes(&mid_months, &segs).unwrap().iter().sum();
    let precise = eur_by(EurMethod::Precise, &History::none(), jan, dec, &segs).unwrap();
    assert_relative_eq!(monthly, precise, max_relative = 1e-12);
}

#[test]
fn cum_continues_from_monthly_history() {
    let jan = idx_from_ymd(2020, 1, 1).unwrap() as f64;
    let feb = idx_from_ymd(2020, 2, 1).unwrap() as f64;
    let prod = [[jan, 3100.0]];
    let segs = vec![Segment::Flat(Flat::fill(jan, jan + 365.0, 50.0))];
    let opts = ForecastOptions::new()
        .with_data_freq(DataFreq::Monthly)
        .with_eur_method(EurMethod::Precise);
    let cum = cum_from_t(&[feb + 9.0], &prod, &segs, &opts).unwrap();
    assert_relative_eq!(cum[0], 3100.0 + 10.0 * 50.0);
}

#[test]
fn ratio_cumulative_matches_ratio_eur_at_sample_points() {
    let base = vec![Segment::Arps(Arps::fill(0.0, 2000.0, 400.0, 1.1, 0.5))];
    let ratio = vec![Segment::Flat(Flat::fill(0.0, 2000.0, 2.5))];
    let opts = ForecastOptions::new().with_ratio_interval(30);
    let times = [29.0, 59.0, 599.0];
    let cum = cum_from_t_ratio(&times, &[], &ratio, &base, &opts).unwrap();
    for (i, &t) in times.iter().enumerate() {
        let want = ratio_eur_by(
            RatioEurMethod::Interval,
            &History::none(),
            t,
            &ratio,
            &base,
            30,
        )
        .unwrap();
        assert_relative_eq!(cum[i], want, max_relative = 1e-12);
    }
}

#[test]
fn stacked_shutins_and_rescale() {
    let segs = vec![Segment::Flat(Flat::fill(0.0, 365.0, 100.0))];
    let shutins = [
        ShutIn::new(30.0, 39.0).with_multiplier(0.9),
        ShutIn::new(100.0, 104.0)
            .with_multiplier(0.5)
            .with_scale_post_shut_in_end_idx(200.0),
    ];
    let stacking = ForecastOptions::new().with_stack_multiplier(true);
    let out = apply_shutin(&shutins, &segs, &stacking).unwrap();
    let rates = predict(&[10.0, 35.0, 50.0, 102.0, 150.0, 250.0], &out, 0.0);
    assert_relative_eq!(rates[0], 100.0);
    assert_eq!(rates[1], 0.0);
    assert_relative_eq!(rates[2], 90.0);
    assert_eq!(rates[3], 0.0);
    assert_relative_eq!(rates[4], 40.0, max_relative = 1e-12);
    assert_relative_eq!(rates[5], 90.0);
}
