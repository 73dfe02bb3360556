use super::*;
use axum::{body, body::Body, http::Request};
use dashboard_api::DashboardContext;
use finals::Dataset;
use shared::domain::FinalsRecord;
use tower::ServiceExt;

fn test_app(run_mode: RunMode) -> Router {
    let dataset = Dataset::new(vec![
        FinalsRecord::new(1954, "West Germany", "Hungary"),
        FinalsRecord::new(1958, "Brazil", "Sweden"),
        FinalsRecord::new(1962, "Brazil", "Czechoslovakia"),
        FinalsRecord::new(1970, "Brazil", "Italy"),
        FinalsRecord::new(1994, "Brazil", "Italy"),
        FinalsRecord::new(2002, "Brazil", "Germany"),
        FinalsRecord::new(2018, "France", "Croatia"),
    ]);
    build_router(Arc::new(AppState {
        dashboard: DashboardContext::new(dataset),
        run_mode,
    }))
}

async fn get_body(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, body.to_vec())
}

#[tokio::test]
async fn index_serves_the_dashboard_page() {
    let (status, body) = get_body(test_app(RunMode::Production), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).expect("utf8");
    assert!(html.contains("<h1>FIFA World Cup Winners and Runner-Ups</h1>"));
    assert!(html.contains("<select id=\"country-dropdown\">"));
    assert!(html.contains("<select id=\"year-dropdown\">"));
    assert!(html.contains("Germany has won the World Cup 1 times."));
    assert!(html.contains("<li>Brazil</li>"));
}

#[tokio::test]
async fn country_wins_route_returns_text() {
    let (status, body) = get_body(
        test_app(RunMode::Production),
        "/_callbacks/country-wins?country=Brazil",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dto: WinsResponse = serde_json::from_slice(&body).expect("json");
    assert_eq!(dto.wins, 5);
    assert_eq!(dto.text, "Brazil has won the World Cup 5 times.");
}

#[tokio::test]
async fn country_names_with_spaces_are_decoded() {
    let (status, body) = get_body(
        test_app(RunMode::Production),
        "/_callbacks/country-wins?country=West%20Germany",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dto: WinsResponse = serde_json::from_slice(&body).expect("json");
    assert_eq!(dto.country, "West Germany");
    assert_eq!(dto.wins, 0);
}

#[tokio::test]
async fn year_result_route_describes_the_final() {
    let (status, body) = get_body(
        test_app(RunMode::Debug),
        "/_callbacks/year-result?year=2018",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dto: YearResultResponse = serde_json::from_slice(&body).expect("json");
    assert_eq!(
        dto.text,
        "In 2018, the Winner was France and the Runner-Up was Croatia."
    );
}

#[tokio::test]
async fn unknown_year_is_a_not_found_message() {
    for route in ["/_callbacks/year-result", "/_callbacks/choropleth-map"] {
        let (status, body) =
            get_body(test_app(RunMode::Production), &format!("{route}?year=9999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{route}");
        let err: ApiError = serde_json::from_slice(&body).expect("json");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "No World Cup final recorded for 9999.");
    }
}

#[tokio::test]
async fn malformed_or_missing_inputs_are_rejected() {
    let cases = [
        "/_callbacks/year-result?year=nineteen",
        "/_callbacks/year-result",
        "/_callbacks/choropleth-map?year=",
        "/_callbacks/country-wins",
    ];
    for uri in cases {
        let (status, body) = get_body(test_app(RunMode::Production), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        let err: ApiError = serde_json::from_slice(&body).expect("json");
        assert_eq!(err.code, ErrorCode::Validation);
    }
}

#[tokio::test]
async fn choropleth_route_returns_plotly_figure() {
    let (status, body) = get_body(
        test_app(RunMode::Production),
        "/_callbacks/choropleth-map?year=2018",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let figure: serde_json::Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(figure["data"][0]["type"], "choropleth");
    assert_eq!(figure["data"][0]["locations"][0], "France");
    assert_eq!(figure["data"][0]["locations"][1], "Croatia");
    assert_eq!(
        figure["layout"]["title"]["text"],
        "World Cup Winner and Runner-Up in 2018"
    );
}

#[tokio::test]
async fn repeated_callbacks_are_byte_identical() {
    let app = test_app(RunMode::Production);
    let uri = "/_callbacks/choropleth-map?year=1962";
    let (_, first) = get_body(app.clone(), uri).await;
    let (_, second) = get_body(app, uri).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn other_routes_do_not_exist() {
    let (status, _) = get_body(test_app(RunMode::Production), "/healthz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn year_parameter_is_trimmed() {
    assert_eq!(parse_year(Some(" 1970 ")).expect("year"), Year(1970));
    assert!(parse_year(Some("1970a")).is_err());
    assert!(parse_year(None).is_err());
}
