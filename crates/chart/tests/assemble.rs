use std::collections::BTreeMap;

use approx::assert_relative_eq;
use wellcast_calendar::idx_from_ymd;
use wellcast_chart::{
    ChartConfig, ChartError, Phase, PhaseForecast, PhaseInput, RatioColumn, WellData, assemble,
    to_json,
};
use wellcast_forecast::{DataFreq, ForecastOptions};
use wellcast_segment::{Flat, Segment};

fn flat(start: f64, end: f64, q: f64) -> Segment {
    Segment::Flat(Flat::fill(start, end, q))
}

fn daily_well() -> WellData {
    let oil = PhaseInput {
        history: vec![[100.0, 8.0], [101.0, 9.0]],
        forecast: PhaseForecast::Rate {
            segments: vec![flat(102.0, 104.0, 10.0)],
        },
    };
    let gas = PhaseInput {
        history: vec![[100.0, 16.0], [101.0, 18.0]],
        forecast: PhaseForecast::Ratio {
            base: Phase::Oil,
            segments: vec![flat(102.0, 104.0, 2.0)],
        },
    };
    WellData {
        data_freq: DataFreq::Daily,
        phases: BTreeMap::from([(Phase::Oil, oil), (Phase::Gas, gas)]),
    }
}

#[test]
fn daily_chart_columns() {
    let config = ChartConfig::new(vec![Phase::Oil, Phase::Gas]).with_ratios(vec![RatioColumn::GasOil]);
    let chart = assemble(&daily_well(), &config, &ForecastOptions::new()).unwrap();

    assert_eq!(chart.len(), 5);
    assert_eq!(chart.relative_idx, vec![0, 1, 2, 3, 4]);
    assert_eq!(chart.time[0], "1900-04-11");

    assert_eq!(
        chart.column("oil").unwrap(),
        &[Some(8.0), Some(9.0), None, None, None]
    );
    assert_eq!(
        chart.column("oil_forecast").unwrap(),
        &[None, None, Some(10.0), Some(10.0), Some(10.0)]
    );
    assert_eq!(
        chart.column("gas_forecast").unwrap(),
        &[None, None, Some(20.0), Some(20.0), Some(20.0)]
    );
    for value in chart.column("gas/oil").unwrap() {
        assert_relative_eq!(value.unwrap(), 2.0);
    }

    let cum = chart.column("cumsum_oil").unwrap();
    assert_relative_eq!(cum[0].unwrap(), 8.0);
    assert_relative_eq!(cum[1].unwrap(), 17.0);
    assert_relative_eq!(cum[4].unwrap(), 47.0);
}

#[test]
fn history_only_when_forecast_excluded() {
    let config = ChartConfig::new(vec![Phase::Oil]).with_include_forecast(false);
    let chart = assemble(&daily_well(), &config, &ForecastOptions::new()).unwrap();
    assert_eq!(chart.len(), 2);
    assert!(chart.column("gas").is_none());
}

#[test]
fn zero_denominator_gives_null_ratio() {
    let mut well = daily_well();
    if let Some(oil) = well.phases.get_mut(&Phase::Oil) {
        oil.history[0][1] = 0.0;
    }
    let config = ChartConfig::new(vec![Phase::Oil, Phase::Gas]).with_ratios(vec![RatioColumn::GasOil]);
    let chart = assemble(&well, &config, &ForecastOptions::new()).unwrap();
    assert_eq!(chart.column("gas/oil").unwrap()[0], None);
}

#[test]
fn ratio_without_rate_base_is_zero() {
    let mut well = daily_well();
    well.phases.remove(&Phase::Oil);
    let config = ChartConfig::new(vec![Phase::Gas]);
    let chart = assemble(&well, &config, &ForecastOptions::new()).unwrap();
    assert_eq!(chart.column("gas_forecast").unwrap()[2], Some(0.0));
    assert_relative_eq!(chart.column("cumsum_gas").unwrap()[4].unwrap(), 34.0);
}

#[test]
fn monthly_chart_extends_by_month_start() {
    let jan = idx_from_ymd(2020, 1, 15).unwrap() as f64;
    let feb = idx_from_ymd(2020, 2, 15).unwrap() as f64;
    let mar = idx_from_ymd(2020, 3, 1).unwrap() as f64;
    let may_end = idx_from_ymd(2020, 5, 31).unwrap() as f64;
    let oil = PhaseInput {
        history: vec![[jan, 300.0], [feb, 290.0]],
        forecast: PhaseForecast::Rate {
            segments: vec![flat(mar, may_end, 10.0)],
        },
    };
    let well = WellData {
        data_freq: DataFreq::Monthly,
        phases: BTreeMap::from([(Phase::Oil, oil)]),
    };

    let chart = assemble(&well, &ChartConfig::new(vec![Phase::Oil]), &ForecastOptions::new()).unwrap();
    assert_eq!(
        chart.time,
        vec!["2020-01-15", "2020-02-15", "2020-03-01", "2020-04-01", "2020-05-01"]
    );
    assert_eq!(chart.relative_idx[2], 46);
    assert_eq!(
        chart.column("oil_forecast").unwrap(),
        &[None, None, Some(310.0), Some(300.0), Some(310.0)]
    );
    let cum = chart.column("cumsum_oil").unwrap();
    assert_relative_eq!(cum[0].unwrap(), 300.0 * 15.0 / 31.0, epsilon = 1e-9);
    assert_relative_eq!(cum[2].unwrap(), 600.0);
}

#[test]
fn ratio_column_needs_both_phases() {
    let config = ChartConfig::new(vec![Phase::Gas]).with_ratios(vec![RatioColumn::GasOil]);
    let err = assemble(&daily_well(), &config, &ForecastOptions::new()).unwrap_err();
    assert!(matches!(err, ChartError::RatioPhaseMissing { .. }));
}

#[test]
fn malformed_segment_is_reported_with_position() {
    let mut well = daily_well();
    if let Some(oil) = well.phases.get_mut(&Phase::Oil) {
        oil.forecast = PhaseForecast::Rate {
            segments: vec![flat(102.0, 104.0, 10.0), flat(110.0, 105.0, 1.0)],
        };
    }
    let err = assemble(&well, &ChartConfig::new(vec![Phase::Oil]), &ForecastOptions::new()).unwrap_err();
    match err {
        ChartError::InvalidSegment { phase, position, .. } => {
            assert_eq!(phase, "oil");
            assert_eq!(position, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_output_parses_back() {
    let chart = assemble(&daily_well(), &ChartConfig::new(vec![Phase::Oil]), &ForecastOptions::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json(&chart).unwrap()).unwrap();
    assert_eq!(value["time"].as_array().unwrap().len(), 5);
    assert!(value["oil"][4].is_null());
    assert_eq!(value["oil_forecast"][4], 10.0);
}
