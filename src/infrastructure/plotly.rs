// Mapper to convert chart figures to Plotly-style JSON
use serde_json::{Value, json};

use crate::domain::chart::{
    AssetTrafficFigure, DailyTrafficFigure, Figure, RegionTrafficFigure, ValueAxis,
};
use crate::domain::display::ScaleMode;

/// Encode a figure as the `{data, layout}` document the renderer consumes.
pub fn figure_to_plotly(figure: &Figure) -> Value {
    match figure {
        Figure::DailyTraffic(figure) => daily_to_plotly(figure),
        Figure::AssetTraffic(figure) => asset_to_plotly(figure),
        Figure::RegionTraffic(figure) => region_to_plotly(figure),
    }
}

fn daily_to_plotly(figure: &DailyTrafficFigure) -> Value {
    let dates: Vec<String> = figure.dates.iter().map(|date| date.to_string()).collect();

    let mut xaxis = json!({
        "title": { "text": "Date", "font": { "size": 16 } },
        "tickformat": "%Y-%m-%d",
    });
    if !figure.skipped_dates.is_empty() {
        let skipped: Vec<String> = figure
            .skipped_dates
            .iter()
            .map(|date| date.to_string())
            .collect();
        xaxis["rangebreaks"] = json!([{ "values": skipped }]);
    }

    json!({
        "data": [{
            "type": "scatter",
            "mode": "lines+markers",
            "x": dates,
            "y": figure.values,
            "text": figure.hover_texts,
            "textposition": "none",
            "hoverinfo": "text",
        }],
        "layout": {
            "title": { "text": figure.title, "font": { "size": 24 } },
            "xaxis": xaxis,
            "yaxis": value_axis_block(&figure.value_axis),
        },
    })
}

fn asset_to_plotly(figure: &AssetTrafficFigure) -> Value {
    json!({
        "data": [{
            "type": "bar",
            "x": figure.asset_names,
            "y": figure.values,
            "text": figure.hover_texts,
            "textposition": "none",
            "hoverinfo": "text",
        }],
        "layout": {
            "title": { "text": figure.title, "font": { "size": 24 } },
            "xaxis": {
                "title": { "text": "Asset Name", "font": { "size": 16 } },
                // Full asset names overflow the axis; hover text carries them.
                "showticklabels": false,
            },
            "yaxis": value_axis_block(&figure.value_axis),
        },
    })
}

fn region_to_plotly(figure: &RegionTrafficFigure) -> Value {
    json!({
        "data": [{
            "type": "scattergeo",
            "mode": "markers",
            "lat": figure.latitudes,
            "lon": figure.longitudes,
            "marker": {
                "symbol": "circle",
                "size": figure.marker_sizes,
                "color": figure.color_values,
                "colorscale": "Viridis",
                "colorbar": colorbar_block(&figure.colorbar),
                "opacity": 1,
            },
            "text": figure.hover_texts,
            "textposition": "none",
            "hoverinfo": "text",
        }],
        "layout": {
            "title": { "text": figure.title, "font": { "size": 24 } },
            "geo": { "projection": { "type": "equirectangular" } },
        },
    })
}

// Linear axes abbreviate tick numbers ("~s") and append the unit suffix;
// logarithmic axes place the fixed unit-boundary ticks instead.
fn value_axis_block(axis: &ValueAxis) -> Value {
    let mut block = json!({
        "title": { "text": axis.title, "font": { "size": 16 } },
        "type": scale_name(axis.scale),
    });
    apply_ticks(&mut block, axis);
    block
}

// Colorbar titles are plain strings in the collaborator's schema, unlike
// axis titles.
fn colorbar_block(axis: &ValueAxis) -> Value {
    let mut block = json!({ "title": axis.title });
    apply_ticks(&mut block, axis);
    block
}

fn apply_ticks(block: &mut Value, axis: &ValueAxis) {
    match &axis.ticks {
        Some(ticks) => {
            block["tickvals"] = json!(ticks.positions);
            block["ticktext"] = json!(ticks.labels);
        }
        None => {
            block["tickformat"] = json!("~s");
            block["ticksuffix"] = json!(axis.unit_suffix);
        }
    }
}

fn scale_name(scale: ScaleMode) -> &'static str {
    match scale {
        ScaleMode::Linear => "linear",
        ScaleMode::Logarithmic => "log",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::display::{DisplayMode, UnitBase};
    use chrono::NaiveDate;

    fn date(text: &str) -> NaiveDate {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap()
    }

    fn daily_figure(mode: DisplayMode, skipped: Vec<NaiveDate>) -> DailyTrafficFigure {
        DailyTrafficFigure {
            title: "Bytes sent per day".to_string(),
            dates: vec![date("2024-01-01"), date("2024-01-03")],
            values: vec![1000, 3000],
            hover_texts: vec![
                "2024-01-01<br>1 KB".to_string(),
                "2024-01-03<br>3 KB".to_string(),
            ],
            skipped_dates: skipped,
            value_axis: ValueAxis::bytes_axis(mode, 6),
        }
    }

    #[test]
    fn test_daily_linear_trace_and_axis() {
        let document = daily_to_plotly(&daily_figure(DisplayMode::default(), Vec::new()));

        assert_eq!(document["data"][0]["type"], "scatter");
        assert_eq!(document["data"][0]["mode"], "lines+markers");
        assert_eq!(document["data"][0]["x"][1], "2024-01-03");
        assert_eq!(document["data"][0]["y"], json!([1000, 3000]));
        assert_eq!(document["data"][0]["hoverinfo"], "text");

        let yaxis = &document["layout"]["yaxis"];
        assert_eq!(yaxis["type"], "linear");
        assert_eq!(yaxis["tickformat"], "~s");
        assert_eq!(yaxis["ticksuffix"], "B");
        assert!(yaxis.get("tickvals").is_none());
        assert!(document["layout"]["xaxis"].get("rangebreaks").is_none());
    }

    #[test]
    fn test_daily_log_axis_places_fixed_ticks() {
        let mode = DisplayMode {
            scale: ScaleMode::Logarithmic,
            ..DisplayMode::default()
        };
        let document = daily_to_plotly(&daily_figure(mode, Vec::new()));

        let yaxis = &document["layout"]["yaxis"];
        assert_eq!(yaxis["type"], "log");
        assert_eq!(yaxis["tickvals"][0], 1000.0);
        assert_eq!(yaxis["ticktext"][0], "KB");
        assert_eq!(
            yaxis["tickvals"].as_array().unwrap().len(),
            yaxis["ticktext"].as_array().unwrap().len()
        );
        assert!(yaxis.get("ticksuffix").is_none());
    }

    #[test]
    fn test_skipped_dates_become_range_breaks() {
        let document = daily_to_plotly(&daily_figure(
            DisplayMode::default(),
            vec![date("2024-01-02")],
        ));
        assert_eq!(
            document["layout"]["xaxis"]["rangebreaks"][0]["values"],
            json!(["2024-01-02"])
        );
    }

    #[test]
    fn test_asset_bars_hide_tick_labels() {
        let figure = AssetTrafficFigure {
            title: "Bytes sent per asset".to_string(),
            asset_names: vec!["sub-02.nwb".to_string(), "sub-01.nwb".to_string()],
            values: vec![5000, 10],
            hover_texts: vec![
                "sub-02.nwb<br>5 KB".to_string(),
                "sub-01.nwb<br>10 Bytes".to_string(),
            ],
            value_axis: ValueAxis::bytes_axis(DisplayMode::default(), 4),
        };
        let document = asset_to_plotly(&figure);

        assert_eq!(document["data"][0]["type"], "bar");
        assert_eq!(document["layout"]["xaxis"]["showticklabels"], false);
        assert_eq!(document["data"][0]["x"][0], "sub-02.nwb");
    }

    #[test]
    fn test_region_markers_carry_viridis_colorbar() {
        let mode = DisplayMode {
            scale: ScaleMode::Logarithmic,
            unit_base: UnitBase::Decimal,
            ..DisplayMode::default()
        };
        let figure = RegionTrafficFigure {
            title: "Bytes Sent by Region".to_string(),
            latitudes: vec![36.77],
            longitudes: vec![-119.41],
            color_values: vec![4000f64.log10()],
            marker_sizes: vec![4000f64.ln() * 0.5],
            hover_texts: vec!["US/California<br>4 KB".to_string()],
            colorbar: ValueAxis::color_axis(mode, 4),
        };
        let document = region_to_plotly(&figure);

        let marker = &document["data"][0]["marker"];
        assert_eq!(document["data"][0]["type"], "scattergeo");
        assert_eq!(marker["colorscale"], "Viridis");
        assert_eq!(marker["colorbar"]["title"], "Bytes (log scale)");
        let tickvals = marker["colorbar"]["tickvals"].as_array().unwrap();
        for (tick, exponent) in tickvals.iter().zip([3.0, 6.0, 9.0, 12.0]) {
            assert!((tick.as_f64().unwrap() - exponent).abs() < 1e-9);
        }
        assert_eq!(marker["colorbar"]["ticktext"][0], "KB");
        assert_eq!(
            document["layout"]["geo"]["projection"]["type"],
            "equirectangular"
        );
    }
}
