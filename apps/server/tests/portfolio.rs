mod common;

use axum::http::StatusCode;
use common::build_test_app;

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 0.01
}

#[tokio::test]
async fn seeded_portfolio_views_for_john_doe() {
    let app = build_test_app(true).await;
    let token = app.login("john_doe", "password123").await;
    let token = Some(token.as_str());

    let (status, overview) = app.get("/api/v1/portfolio", token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(approx(&overview["initialInvestment"], 2_900_000.0));
    assert!(approx(&overview["currentValue"], 3_249_600.0));
    assert!(approx(
        &overview["growthPercentage"],
        349_600.0 / 2_900_000.0 * 100.0
    ));
    assert_eq!(
        overview["bestPerformingScheme"]["fundName"],
        "Mirae Asset Large Cap Fund"
    );
    assert_eq!(overview["worstPerformingScheme"]["fundName"], "HDFC Top 100 Fund");

    // Mirae has no sector rows, so only ICICI and HDFC contribute.
    let (status, sectors) = app.get("/api/v1/portfolio/sector-allocation", token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(approx(&sectors["totalInvestment"], 1_800_000.0));
    assert_eq!(sectors["sectors"][0]["sector"], "Financials");
    assert!(approx(&sectors["sectors"][0]["investedAmount"], 1_010_000.0));
    assert_eq!(sectors["sectors"][1]["sector"], "Energy");
    assert_eq!(sectors["sectors"][2]["sector"], "IT");

    let (status, history) = app
        .get("/api/v1/portfolio/stock-allocation?period=max", token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["period"], "MAX");
    let points = history["history"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["date"], "2022-12-05");

    let (status, body) = app
        .get("/api/v1/portfolio/stock-allocation?period=2W", token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);

    let (status, overlap) = app.get("/api/v1/portfolio/overlap", token).await;
    assert_eq!(status, StatusCode::OK);
    let rows = overlap["overlaps"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["fundName"], "ICICI Prudential Bluechip Fund");
    assert_eq!(rows[0]["overlappingFundName"], "HDFC Top 100 Fund");
    assert_eq!(rows[0]["overlapPercentage"], 67.0);
    assert_eq!(
        rows[0]["commonStocks"],
        serde_json::json!(["Energy", "Financials"])
    );
}

#[tokio::test]
async fn seeded_catalog_and_empty_views_for_new_users() {
    let app = build_test_app(true).await;

    let (_, funds) = app.get("/api/v1/mutual-funds", None).await;
    assert_eq!(funds.as_array().unwrap().len(), 5);

    app.signup("newcomer", "pw-123456").await;
    let token = app.login("newcomer", "pw-123456").await;
    let token = Some(token.as_str());

    let (status, sectors) = app.get("/api/v1/portfolio/sector-allocation", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sectors["sectors"], serde_json::json!([]));

    let (status, history) = app.get("/api/v1/portfolio/stock-allocation", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history["period"], "1M");
    assert_eq!(history["totalValue"], 0.0);
    assert_eq!(history["changePercentage"], 0.0);

    let (status, overlap) = app.get("/api/v1/portfolio/overlap", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(overlap["overlaps"], serde_json::json!([]));
}

#[tokio::test]
async fn fractional_amounts_are_reported_exactly() {
    let app = build_test_app(false).await;
    app.signup("saver", "pw-123456").await;
    let token = app.login("saver", "pw-123456").await;
    let token = Some(token.as_str());

    let (status, fund) = app
        .post(
            "/api/v1/mutual-funds",
            token,
            serde_json::json!({ "name": "Axis Bluechip Fund", "isin": "INF846K01DP8" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let fund_id = fund["id"].as_i64().unwrap();

    for amount in [0.1, 0.2] {
        let (status, created) = app
            .post(
                "/api/v1/investments",
                token,
                serde_json::json!({
                    "fundId": fund_id,
                    "date": "2023-01-10",
                    "amountInvested": amount,
                    "navAtInvestment": 100.0,
                    "returnsSinceInvestment": 10.0
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["amountInvested"], amount);
    }

    let (status, overview) = app.get("/api/v1/portfolio", token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(overview["initialInvestment"], 0.3);
    assert_eq!(overview["currentValue"], 0.33);
    assert_eq!(overview["growthPercentage"], 10.0);
}
