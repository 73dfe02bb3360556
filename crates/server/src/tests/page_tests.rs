use super::*;
use dashboard_api::{dashboard_layout, DashboardContext};
use finals::Dataset;
use shared::domain::FinalsRecord;

fn layout() -> DashboardLayout {
    let ctx = DashboardContext::new(Dataset::new(vec![
        FinalsRecord::new(1930, "Uruguay", "Argentina"),
        FinalsRecord::new(1934, "Italy", "Czechoslovakia"),
        FinalsRecord::new(1950, "Uruguay", "Brazil"),
    ]));
    dashboard_layout(&ctx)
}

#[test]
fn defaults_are_preselected() {
    let html = render_page(&layout()).expect("page");
    assert!(html.contains("<option value=\"Uruguay\" selected>Uruguay</option>"));
    assert!(html.contains("<option value=\"Italy\">Italy</option>"));
    assert!(html.contains("<option value=\"1930\" selected>1930</option>"));
    assert!(html.contains("<option value=\"1950\">1950</option>"));
}

#[test]
fn outputs_are_filled_for_the_defaults() {
    let html = render_page(&layout()).expect("page");
    assert!(html.contains(
        "<div id=\"country-wins\" data-input=\"country-dropdown\">Uruguay has won the World Cup 2 times.</div>"
    ));
    assert!(html.contains("In 1930, the Winner was Uruguay and the Runner-Up was Argentina."));
    assert!(html.contains("<div id=\"choropleth-map\"></div>"));
}

#[test]
fn winners_list_is_rendered_once_each() {
    let html = render_page(&layout()).expect("page");
    assert!(html.contains("<h3>Countries that have won the World Cup:</h3>"));
    assert_eq!(html.matches("<li>Uruguay</li>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("margin-top: 30px; margin-bottom: 20px"));
}

#[test]
fn embedded_json_cannot_close_its_script() {
    let html = render_page(&layout()).expect("page");
    let start = html
        .find("id=\"choropleth-map-figure\">")
        .expect("figure block");
    let block = &html[start..];
    let end = block.find("</script>").expect("end of block");
    assert!(!block[..end].contains("</"));
    assert!(block[..end].contains("choropleth"));
}

#[test]
fn text_is_escaped() {
    assert_eq!(
        escape_html("Bosnia & <Herzegovina> \"x\" 'y'"),
        "Bosnia &amp; &lt;Herzegovina&gt; &quot;x&quot; &#39;y&#39;"
    );
}

#[test]
fn callbacks_ignore_replies_to_superseded_selections() {
    let html = render_page(&layout()).expect("page");
    let script = html
        .split("<script>")
        .nth(1)
        .expect("callback script");
    let counter = script.find("let latest = 0;").expect("per-binding counter");
    let listener = script.find("addEventListener").expect("listener");
    let guard = script.find("if (ticket !== latest)").expect("stale reply guard");
    let render = script.find("Plotly.react(target").expect("figure update");
    assert!(counter < listener);
    assert!(guard < render);
    assert!(script.contains("const ticket = ++latest;"));
}
