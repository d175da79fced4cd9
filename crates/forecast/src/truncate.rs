//! Trimming a forecast to an export window.

use chrono::NaiveDate;
use wellcast_calendar::date_to_idx;
use wellcast_segment::{Segment, SegmentModel};

use crate::error::ForecastError;

/// Export rule for pieces cut out of a modified Arps segment: an
/// exponential tail reports the effective decline realized at the switch.
fn export_piece(original: &Segment, piece: Segment) -> Segment {
    match (original, piece) {
        (Segment::ArpsModified(m), Segment::ExpDec(mut tail)) => {
            tail.d_eff = m.realized_d_eff_sw;
            Segment::ExpDec(tail)
        }
        _ => piece,
    }
}

/// Drops everything before `start_idx`, cutting the segment that spans it.
///
/// # Errors
///
/// Returns [`ForecastError::Segment`] if the cut index is not a valid
/// split point of the spanning segment.
pub fn truncate_start(segments: &[Segment], start_idx: f64) -> Result<Vec<Segment>, ForecastError> {
    let mut out = Vec::with_capacity(segments.len());
    for seg in segments {
        if seg.end_idx() < start_idx {
            continue;
        }
        if seg.start_idx() < start_idx {
            let (_, kept) = seg.cut(start_idx)?;
            out.push(export_piece(seg, kept));
        } else {
            out.push(*seg);
        }
    }
    Ok(out)
}

/// Drops everything after `end_idx`, cutting the segment that spans it.
///
/// # Errors
///
/// Returns [`ForecastError::Segment`] if the cut index is not a valid
/// split point of the spanning segment.
pub fn truncate_end(segments: &[Segment], end_idx: f64) -> Result<Vec<Segment>, ForecastError> {
    let mut out = Vec::with_capacity(segments.len());
    for seg in segments {
        if seg.start_idx() > end_idx {
            continue;
        }
        if seg.end_idx() > end_idx {
            let (kept, _) = seg.cut(end_idx + 1.0)?;
            out.push(export_piece(seg, kept));
        } else {
            out.push(*seg);
        }
    }
    Ok(out)
}

/// Forecast starting on `date`.
///
/// An exponential piece cut from a modified Arps segment carries that
/// segment's `realized_D_eff_sw` as its `D_eff`, which is what the
/// downstream export formats expect.
///
/// # Errors
///
/// See [`truncate_start`].
pub fn apply_forecast_start_date(
    segments: &[Segment],
    date: NaiveDate,
) -> Result<Vec<Segment>, ForecastError> {
    truncate_start(segments, date_to_idx(date) as f64)
}

/// Forecast ending on `date`, with the same export rule as
/// [`apply_forecast_start_date`].
///
/// # Errors
///
/// See [`truncate_end`].
pub fn apply_forecast_end_date(
    segments: &[Segment],
    date: NaiveDate,
) -> Result<Vec<Segment>, ForecastError> {
    truncate_end(segments, date_to_idx(date) as f64)
}
