use evlegend::{ColorScale, Legend, Rgb, ScaleError, ScaleRegistry, ScaleSource, interpolate};
use std::fs;

const MAX_EV: f64 = 322.0;

#[test]
fn dashboard_scenarios() {
    assert_eq!(interpolate(0.0, 0.0, MAX_EV, "Blues").unwrap(), "rgb(247,251,255)");
    assert_eq!(interpolate(MAX_EV, 0.0, MAX_EV, "Blues").unwrap(), "rgb(8,48,107)");
    assert_eq!(interpolate(161.0, 0.0, MAX_EV, "Blues").unwrap(), "rgb(107,174,214)");
    assert_eq!(interpolate(5.0, 5.0, 5.0, "Blues").unwrap(), "rgb(0,0,0)");
    assert!(matches!(
        interpolate(100.0, 0.0, MAX_EV, "Nonexistent"),
        Err(ScaleError::UnknownScale(name)) if name == "Nonexistent"
    ));
}

#[test]
fn legend_agrees_with_chart_colours() {
    let registry = ScaleRegistry::builtin();
    let blues = registry.get("Blues").unwrap();
    let legend = Legend::build(&blues, 0.0, MAX_EV, 12, 5);

    for swatch in &legend.swatches {
        let chart = registry
            .interpolate(swatch.value, 0.0, MAX_EV, "Blues")
            .unwrap();
        assert_eq!(swatch.color, chart);
    }
}

#[test]
fn custom_scale_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("gas_prices.txt"),
        "# price in dollars\nINTERPOLATION:INTERPOLATED\n2.0,255,245,240,255\n5.0,103,0,13,255\n",
    )
    .unwrap();

    let mut registry = ScaleRegistry::builtin();
    assert_eq!(registry.load_dir(dir.path()).unwrap(), vec!["gas_prices"]);

    let scale = registry.get("GAS_PRICES").unwrap();
    assert_eq!(scale.first(), Rgb::new(255, 245, 240));
    assert_eq!(scale.last(), Rgb::new(103, 0, 13));
    assert!(matches!(
        registry.source("gas_prices"),
        Some(ScaleSource::File(_))
    ));

    let reversed = registry.interpolate(0.0, 0.0, 1.0, "gas_prices_r").unwrap();
    assert_eq!(reversed, "rgb(103,0,13)");
}

#[test]
fn malformed_scales_never_register() {
    let err = ColorScale::evenly_spaced("lonely", &[Rgb::BLACK]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed colour scale 'lonely': needs at least two stops, found 1"
    );
}
