//! Combining history and forecast into chart columns.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use wellcast_calendar::{Month, day_of, idx_to_date, month_day_grid};
use wellcast_forecast::{
    DataFreq, ForecastOptions, cum_from_t, cum_from_t_ratio, predict, predict_monthly_volumes,
    predict_time_ratio, sum_forecast_by_month,
};
use wellcast_segment::{Segment, SegmentModel};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::output::ChartData;
use crate::phase::{Phase, PhaseForecast, PhaseInput, WellData};

/// Rate segments of `base`, empty if it has no rate forecast.
fn base_segments(well: &WellData, phase: Phase, base: Phase) -> &[Segment] {
    match well.phases.get(&base).map(|p| &p.forecast) {
        Some(PhaseForecast::Rate { segments }) => segments,
        _ => {
            debug!(%phase, %base, "ratio forecast base has no rate segments");
            &[]
        }
    }
}

/// Day indices of every history row, extended over the forecast.
fn time_axis(
    inputs: &[(Phase, &PhaseInput)],
    freq: DataFreq,
    include_forecast: bool,
) -> Result<Vec<i64>, ChartError> {
    let mut days: BTreeSet<i64> = inputs
        .iter()
        .flat_map(|(_, input)| input.history.iter().map(|row| day_of(row[0])))
        .collect();
    if !include_forecast {
        return Ok(days.into_iter().collect());
    }

    let segments = || inputs.iter().flat_map(|(_, input)| input.forecast.segments());
    let Some(forecast_end) = segments().map(|s| s.end_idx().floor() as i64).max() else {
        return Ok(days.into_iter().collect());
    };
    let Some(forecast_start) = segments().map(|s| s.start_idx().ceil() as i64).min() else {
        return Ok(days.into_iter().collect());
    };
    let last_history = days.last().copied();

    match freq {
        DataFreq::Daily => {
            let from = last_history.map_or(forecast_start, |d| d + 1);
            days.extend(from..=forecast_end);
        }
        DataFreq::Monthly => {
            let mut month = match last_history {
                Some(d) => Month::of_idx(d)?.next(),
                None => Month::of_idx(forecast_start)?,
            };
            while month.first_idx() <= forecast_end {
                days.insert(month.first_idx());
                month = month.next();
            }
        }
    }
    Ok(days.into_iter().collect())
}

fn history_column(rows: &[[f64; 2]], days: &[i64]) -> Vec<Option<f64>> {
    let mut by_day: BTreeMap<i64, f64> = BTreeMap::new();
    for row in rows {
        if !row[1].is_nan() {
            *by_day.entry(day_of(row[0])).or_insert(0.0) += row[1];
        }
    }
    days.iter().map(|d| by_day.get(d).copied()).collect()
}

/// True when any segment overlaps `[lo, hi]`.
fn covers(segments: &[Segment], lo: f64, hi: f64) -> bool {
    segments
        .iter()
        .any(|s| s.start_idx() <= hi && lo <= s.end_idx())
}

/// Forecast volume of the month containing each day, for a ratio phase.
fn monthly_ratio_volumes(
    days: &[i64],
    ratio: &[Segment],
    base: &[Segment],
) -> Result<Vec<f64>, ChartError> {
    let (Some(&first), Some(&last)) = (days.iter().min(), days.iter().max()) else {
        return Ok(Vec::new());
    };
    let grid = month_day_grid(first, last)?;
    let grid_t: Vec<f64> = grid.iter().map(|&d| d as f64).collect();
    let daily = predict_time_ratio(&grid_t, ratio, base);
    let (months, totals) = sum_forecast_by_month(&grid, &daily)?;
    days.iter()
        .map(|&d| {
            let first = Month::of_idx(d)?.first_idx();
            Ok(totals[months.partition_point(|&m| m < first)])
        })
        .collect()
}

fn forecast_column(
    forecast: &PhaseForecast,
    base: &[Segment],
    days: &[i64],
    freq: DataFreq,
) -> Result<Vec<Option<f64>>, ChartError> {
    let segments = forecast.segments();
    if segments.is_empty() {
        return Ok(vec![None; days.len()]);
    }
    let times: Vec<f64> = days.iter().map(|&d| d as f64).collect();

    let (values, spans) = match freq {
        DataFreq::Daily => {
            let values = match forecast {
                PhaseForecast::Ratio { .. } => predict_time_ratio(&times, segments, base),
                _ => predict(&times, segments, 0.0),
            };
            let spans: Vec<(f64, f64)> = times.iter().map(|&t| (t, t)).collect();
            (values, spans)
        }
        DataFreq::Monthly => {
            let values = match forecast {
                PhaseForecast::Ratio { .. } => monthly_ratio_volumes(days, segments, base)?,
                _ => predict_monthly_volumes(&times, segments)?,
            };
            let spans = days
                .iter()
                .map(|&d| {
                    let m = Month::of_idx(d)?;
                    Ok((m.first_idx() as f64, m.last_idx() as f64))
                })
                .collect::<Result<Vec<_>, ChartError>>()?;
            (values, spans)
        }
    };

    Ok(values
        .into_iter()
        .zip(spans)
        .map(|(v, (lo, hi))| (covers(segments, lo, hi) && v.is_finite()).then_some(v))
        .collect())
}

fn ratio_value(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    match (numerator, denominator) {
        (Some(n), Some(d)) if d != 0.0 && d.is_finite() && n.is_finite() => Some(n / d),
        _ => None,
    }
}

/// Builds the chart of `well` described by `config`.
///
/// The time axis holds every history row of the charted phases and, when
/// the configuration includes the forecast, every day (monthly data: every
/// month start) after the last history row through the end of the
/// forecast. Ratio columns divide history where it exists and forecast
/// otherwise. Cumulative columns come from `cum_from_t` (or its ratio
/// variant) with `options`, whose data frequency is taken from the well.
///
/// # Errors
///
/// - Configuration errors from [`ChartConfig::validate`].
/// - [`ChartError::InvalidSegment`] if a forecast segment is malformed.
/// - [`ChartError::Forecast`] / [`ChartError::Calendar`] from the
///   underlying computations.
#[tracing::instrument(skip_all, fields(n_phases = config.phases().len()))]
pub fn assemble(
    well: &WellData,
    config: &ChartConfig,
    options: &ForecastOptions,
) -> Result<ChartData, ChartError> {
    config.validate()?;
    options.validate()?;
    let options = options.clone().with_data_freq(well.data_freq);

    let missing = PhaseInput::default();
    let inputs: Vec<(Phase, &PhaseInput)> = config
        .phases()
        .iter()
        .map(|&p| (p, well.phases.get(&p).unwrap_or(&missing)))
        .collect();

    for (phase, input) in &inputs {
        for (position, seg) in input.forecast.segments().iter().enumerate() {
            seg.validate()
                .map_err(|source| ChartError::InvalidSegment {
                    phase: phase.to_string(),
                    position,
                    source,
                })?;
        }
    }

    let days = time_axis(&inputs, well.data_freq, config.include_forecast())?;
    let times: Vec<f64> = days.iter().map(|&d| d as f64).collect();

    let mut columns = BTreeMap::new();
    let mut combined: BTreeMap<Phase, Vec<Option<f64>>> = BTreeMap::new();
    for &(phase, input) in &inputs {
        let base: &[Segment] = match &input.forecast {
            PhaseForecast::Ratio { base, .. } => base_segments(well, phase, *base),
            _ => &[],
        };
        let history = history_column(&input.history, &days);
        let forecast = forecast_column(&input.forecast, base, &days, well.data_freq)?;
        let cum = match &input.forecast {
            PhaseForecast::Ratio { segments, .. } => {
                cum_from_t_ratio(&times, &input.history, segments, base, &options)?
            }
            other => cum_from_t(&times, &input.history, other.segments(), &options)?,
        };

        combined.insert(
            phase,
            history.iter().zip(&forecast).map(|(h, f)| h.or(*f)).collect(),
        );
        columns.insert(phase.to_string(), history);
        columns.insert(format!("{phase}_forecast"), forecast);
        columns.insert(
            format!("cumsum_{phase}"),
            cum.into_iter().map(|c| c.is_finite().then_some(c)).collect(),
        );
    }

    for ratio in config.ratios() {
        let (Some(num), Some(den)) = (
            combined.get(&ratio.numerator()),
            combined.get(&ratio.denominator()),
        ) else {
            continue;
        };
        let values = num.iter().zip(den).map(|(&n, &d)| ratio_value(n, d)).collect();
        columns.insert(ratio.name(), values);
    }

    let first = days.first().copied().unwrap_or(0);
    let time = days
        .iter()
        .map(|&d| Ok(idx_to_date(d)?.to_string()))
        .collect::<Result<Vec<_>, ChartError>>()?;
    debug!(rows = days.len(), columns = columns.len(), "chart assembled");

    Ok(ChartData {
        time,
        relative_idx: days.iter().map(|d| d - first).collect(),
        columns,
    })
}
