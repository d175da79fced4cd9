//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use wellcast_chart::{ChartConfig, Phase, RatioColumn};
use wellcast_forecast::{DataFreq, EurMethod, ForecastOptions, RatioEurMethod};

use crate::config::{ChartToml, ForecastToml};

/// Parses a data frequency name.
pub fn parse_data_freq(s: &str) -> Result<DataFreq> {
    match s.to_lowercase().as_str() {
        "daily" => Ok(DataFreq::Daily),
        "monthly" => Ok(DataFreq::Monthly),
        other => bail!("unknown data frequency: {other:?}"),
    }
}

/// Parses an EUR method name.
pub fn parse_eur_method(s: &str) -> Result<EurMethod> {
    match s.to_lowercase().as_str() {
        "approximate" => Ok(EurMethod::Approximate),
        "self_approximate" => Ok(EurMethod::SelfApproximate),
        "precise" => Ok(EurMethod::Precise),
        other => bail!("unknown EUR method: {other:?}"),
    }
}

/// Parses a ratio EUR method name.
pub fn parse_ratio_eur_method(s: &str) -> Result<RatioEurMethod> {
    match s.to_lowercase().as_str() {
        "exact" => Ok(RatioEurMethod::Exact),
        "interval" => Ok(RatioEurMethod::Interval),
        "interval_old" => Ok(RatioEurMethod::IntervalOld),
        other => bail!("unknown ratio EUR method: {other:?}"),
    }
}

/// Parses a phase name.
pub fn parse_phase(s: &str) -> Result<Phase> {
    match s.to_lowercase().as_str() {
        "oil" => Ok(Phase::Oil),
        "gas" => Ok(Phase::Gas),
        "water" => Ok(Phase::Water),
        other => bail!("unknown phase: {other:?}"),
    }
}

/// Parses a ratio column name such as `"gas/oil"`.
pub fn parse_ratio_column(s: &str) -> Result<RatioColumn> {
    let lower = s.to_lowercase();
    match RatioColumn::ALL.iter().find(|r| r.name() == lower) {
        Some(&ratio) => Ok(ratio),
        None => bail!("unknown ratio column: {s:?}"),
    }
}

/// Builds [`ForecastOptions`] from the TOML forecast table.
pub fn build_forecast_options(forecast: &ForecastToml) -> Result<ForecastOptions> {
    let options = ForecastOptions::new()
        .with_data_freq(parse_data_freq(&forecast.data_freq)?)
        .with_eur_method(parse_eur_method(&forecast.eur_method)?)
        .with_ratio_eur_method(parse_ratio_eur_method(&forecast.ratio_eur_method)?)
        .with_ratio_interval(forecast.ratio_interval)
        .with_stack_multiplier(forecast.stack_multiplier);
    options.validate()?;
    Ok(options)
}

/// Builds a [`ChartConfig`] from the TOML chart table.
pub fn build_chart_config(chart: &ChartToml) -> Result<ChartConfig> {
    let phases = chart
        .phases
        .iter()
        .map(|p| parse_phase(p))
        .collect::<Result<Vec<_>>>()?;
    let ratios = chart
        .ratios
        .iter()
        .map(|r| parse_ratio_column(r))
        .collect::<Result<Vec<_>>>()?;
    let config = ChartConfig::new(phases)
        .with_ratios(ratios)
        .with_include_forecast(chart.include_forecast);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WellcastConfig;

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!(parse_data_freq("Monthly").unwrap(), DataFreq::Monthly);
        assert_eq!(parse_eur_method("PRECISE").unwrap(), EurMethod::Precise);
        assert_eq!(
            parse_ratio_eur_method("interval_old").unwrap(),
            RatioEurMethod::IntervalOld
        );
        assert_eq!(parse_phase("Water").unwrap(), Phase::Water);
        assert_eq!(parse_ratio_column("Gas/Oil").unwrap(), RatioColumn::GasOil);
    }

    #[test]
    fn test_parse_unknown_names() {
        assert!(parse_data_freq("weekly").unwrap_err().to_string().contains("weekly"));
        assert!(parse_eur_method("exact").is_err());
        assert!(parse_ratio_eur_method("precise").is_err());
        assert!(parse_phase("condensate").is_err());
        assert!(parse_ratio_column("oil/oil").is_err());
    }

    #[test]
    fn test_build_from_document() {
        let config = WellcastConfig::from_toml_str(
            r#"
            [forecast]
            data_freq = "monthly"
            eur_method = "precise"
            ratio_interval = 15
            stack_multiplier = true

            [chart]
            phases = ["oil", "gas"]
            ratios = ["gas/oil"]
            "#,
        )
        .unwrap();
        let options = build_forecast_options(&config.forecast).unwrap();
        assert_eq!(options.data_freq(), DataFreq::Monthly);
        assert_eq!(options.eur_method(), EurMethod::Precise);
        assert_eq!(options.ratio_interval(), 15);
        assert!(options.stack_multiplier());

        let chart = build_chart_config(&config.chart).unwrap();
        assert_eq!(chart.phases(), &[Phase::Oil, Phase::Gas]);
        assert_eq!(chart.ratios(), &[RatioColumn::GasOil]);
    }

    #[test]
    fn test_stack_multiplier_reaches_shutins() {
        use wellcast_forecast::{ShutIn, apply_shutin};
        use wellcast_segment::{Flat, Segment, SegmentModel};

        let segs = vec![Segment::Flat(Flat::fill(0.0, 99.0, 10.0))];
        let shutins = [
            ShutIn::new(10.0, 19.0).with_multiplier(0.5),
            ShutIn::new(50.0, 59.0).with_multiplier(0.8),
        ];
        let last_rate = |doc: &str| {
            let config = WellcastConfig::from_toml_str(doc).unwrap();
            let options = build_forecast_options(&config.forecast).unwrap();
            let out = apply_shutin(&shutins, &segs, &options).unwrap();
            out.last().unwrap().q_start()
        };
        assert_eq!(last_rate(""), 8.0);
        assert!((last_rate("[forecast]\nstack_multiplier = true") - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_build_rejects_invalid_values() {
        let zero = ForecastToml {
            ratio_interval: 0,
            ..ForecastToml::default()
        };
        assert!(build_forecast_options(&zero).is_err());

        let orphan_ratio = ChartToml {
            phases: vec!["gas".to_string()],
            ratios: vec!["gas/oil".to_string()],
            include_forecast: true,
        };
        assert!(build_chart_config(&orphan_ratio).is_err());
    }
}
