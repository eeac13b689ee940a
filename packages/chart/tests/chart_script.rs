use std::io::Write;

use chartopts_chart::{
    CatalogOption, ChartConfig, ChartError, ChartScript, DataPoint, SectionKey, Series,
};
use chartopts_option_store::{ChartType, OptionValue, ZoomType};

#[test]
fn full_chart_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "id": "sales",
            "render_to": "container",
            "options": {{
                "chart/zoomType": "xy",
                "title/text": "Monthly Average Temperature"
            }}
        }}"#
    )
    .unwrap();

    let config = ChartConfig::load(file.path()).unwrap();
    let mut chart = ChartScript::new(config).unwrap();
    chart.set_option("/chart/type", ChartType::Line).unwrap();
    chart
        .add_section_option(CatalogOption::XAxisCategories, ["Jan", "Feb", "Mar"])
        .unwrap();
    chart.section_mut(SectionKey::YAxis).set_title("Temperature (°C)");
    chart.add_series(Series::with_points(
        "Tokyo",
        [DataPoint::new(7.0), DataPoint::new(6.9), DataPoint::new(9.5)],
    ));

    let js = chart.to_js().unwrap();
    assert!(js.starts_with("var chartsales = new Highcharts.Chart({\n"));
    assert!(js.ends_with("\n});"));
    assert!(js.contains("chart: {zoomType: 'xy', type: 'line', renderTo: 'container', events: {load: function(event) { this.id = 'chartsales'; registerChart(this, true); }}}"));
    assert!(js.contains("title: {text: 'Monthly Average Temperature'}"));
    assert!(js.contains("xAxis: {categories: ['Jan', 'Feb', 'Mar']}"));
    assert!(js.contains("yAxis: {title: {rotation: 0, text: 'Temperature (°C)', align: 'middle'}}"));
    assert!(js.contains("{name: 'Tokyo', data: [{y: 7}, {y: 6.9}, {y: 9.5}]}"));
    assert!(!js.contains(", }"));
    assert!(!js.contains(",}"));
}

#[test]
fn checked_options_reject_misplaced_and_mistyped_values() {
    let mut chart = ChartScript::with_id("1");
    assert!(matches!(
        chart.add_section_option(CatalogOption::ChartZoomType, ChartType::Bar),
        Err(ChartError::KindMismatch { .. })
    ));
    assert!(matches!(
        chart
            .section_mut(SectionKey::Chart)
            .add_option(CatalogOption::TitleText, "x"),
        Err(ChartError::WrongSection { .. })
    ));
    assert!(matches!(
        chart.set_option("", 1),
        Err(ChartError::Store(_))
    ));
    chart
        .add_section_option(CatalogOption::ChartZoomType, ZoomType::Y)
        .unwrap();
    assert!(chart.to_js().unwrap().contains("zoomType: 'y'"));
}

#[test]
fn defaults_render_every_section() {
    let chart = ChartScript::new(ChartConfig {
        id: Some("d".into()),
        section_defaults: true,
        register_callback: None,
        ..Default::default()
    })
    .unwrap();
    let js = chart.to_js().unwrap();
    for section in ["chart", "credits", "legend", "loading", "subtitle", "title", "tooltip", "xAxis", "yAxis"] {
        assert!(js.contains(&format!("\n{section}: {{")), "missing {section}");
    }
    assert!(!js.contains("plotOptions"));
    assert!(js.contains("defaultSeriesType: 'spline'"));
    assert!(js.contains("crosshairs: [true, true]"));
}

#[test]
fn series_from_json_render_in_order() {
    let list = Series::list_from_json_str(
        r##"[
            {"name": "Tokyo", "data": [7, 6.9, null]},
            {"name": "London", "type": "column", "data": [["Jan", 3.9]], "options": {"color": "#aaa"}}
        ]"##,
    )
    .unwrap();

    let mut chart = ChartScript::with_id("2");
    for series in list {
        chart.add_series(series);
    }
    let js = chart.to_js().unwrap();
    assert!(js.contains(
        "series: [\n{name: 'Tokyo', data: [{y: 7}, {y: 6.9}, {y: null}]},\n{name: 'London', data: [{x: 'Jan', y: 3.9}], type: 'column', color: '#aaa'}\n]"
    ));
}

#[test]
fn raw_text_with_strings_is_left_alone() {
    let mut chart = ChartScript::with_id("3");
    chart.config_mut().register_callback = None;
    chart
        .section_mut(SectionKey::Tooltip)
        .add_raw_option("formatter: function() { return 'a, }'; }");
    chart.set_option("/credits/enabled", OptionValue::Bool(false)).unwrap();
    let js = chart.to_js().unwrap();
    assert!(js.contains("tooltip: {formatter: function() { return 'a, }'; }}"));
    assert!(js.contains("credits: {enabled: false}"));
}

#[test]
fn raw_code_strings_do_not_disturb_option_text() {
    let chart = ChartScript::with_id("4");
    chart
        .set_option(
            "/chart/events/click",
            OptionValue::raw(r#"function() { alert("it's"); }"#),
        )
        .unwrap();
    chart
        .set_option(
            "/chart/events/redraw",
            OptionValue::raw(r#"function() { return "a, }"; }"#),
        )
        .unwrap();
    chart.set_option("/title/text", "a, }").unwrap();

    let js = chart.to_js().unwrap();
    assert!(js.contains(r#"click: function() { alert("it's"); }"#));
    assert!(js.contains(r#"redraw: function() { return "a, }"; }"#));
    assert!(js.contains("title: {text: 'a, }'}"));
}
