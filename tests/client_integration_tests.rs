use std::time::Duration;

use atlas::countries::{CountrySource, FIELDS, FetchError, RestCountriesClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

const COUNTRIES_BODY: &str = r#"[
    {
        "name": {
            "common": "Chile",
            "official": "Republic of Chile",
            "nativeName": { "spa": { "official": "República de Chile", "common": "Chile" } }
        },
        "cca2": "CL",
        "cca3": "CHL",
        "altSpellings": ["CL", "Republic of Chile", "República de Chile"],
        "idd": { "root": "+5", "suffixes": ["6"] },
        "flags": { "png": "https://flagcdn.com/w320/cl.png", "svg": "https://flagcdn.com/cl.svg", "alt": "..." }
    },
    {
        "name": { "common": "Antarctica", "official": "Antarctica", "nativeName": {} },
        "cca2": "AQ",
        "cca3": "ATA",
        "altSpellings": ["AQ"],
        "idd": {},
        "flags": { "png": "https://flagcdn.com/w320/aq.png" }
    }
]"#;

/// Client pointed at `{mock}/v3.1/all`.
fn client_for(server: &MockServer, timeout: Duration) -> RestCountriesClient {
    RestCountriesClient::new(Some(format!("{}/v3.1/all", server.uri())), timeout).unwrap()
}

// ============================================================================
// Success Paths
// ============================================================================

#[tokio::test]
async fn test_fetch_all_decodes_countries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .and(query_param("fields", FIELDS))
        .respond_with(ResponseTemplate::new(200).set_body_string(COUNTRIES_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let countries = client.fetch_all().await.unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].common_name(), "Chile");
    assert_eq!(countries[0].official_name(), "Republic of Chile");
    assert_eq!(countries[0].cca3, "CHL");
    assert_eq!(countries[0].alt_spellings.len(), 3);
    assert_eq!(countries[0].calling_codes_dump(), r#"{"root":"+5","suffixes":["6"]}"#);
    assert_eq!(countries[0].flag_image_url(), "https://flagcdn.com/w320/cl.png");
}

#[tokio::test]
async fn test_fetch_all_tolerates_sparse_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(COUNTRIES_BODY))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let countries = client.fetch_all().await.unwrap();

    let antarctica = &countries[1];
    assert!(antarctica.name.native_name.is_empty());
    assert_eq!(antarctica.native_names_dump(), "{}");
    assert_eq!(antarctica.calling_codes_dump(), "{}");
}

#[tokio::test]
async fn test_fetch_all_keeps_list_with_nameless_and_null_fields() {
    let mock_server = MockServer::start().await;

    let body = r#"[
        { "cca2": "XX", "cca3": "XXX", "altSpellings": ["XX"] },
        { "name": { "common": "Chile", "official": "Republic of Chile" }, "altSpellings": null }
    ]"#;
    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let countries = client.fetch_all().await.unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].common_name(), "");
    assert_eq!(countries[0].cca3, "XXX");
    assert_eq!(countries[1].common_name(), "Chile");
    assert!(countries[1].alt_spellings.is_empty());
}

#[tokio::test]
async fn test_fetch_all_empty_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    assert!(client.fetch_all().await.unwrap().is_empty());
}

// ============================================================================
// Failure Paths
// ============================================================================

#[tokio::test]
async fn test_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let result = client.fetch_all().await;

    assert_eq!(
        result,
        Err(FetchError::Api {
            status: 400,
            message: "Bad Request".to_string(),
        })
    );
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    let result = client.fetch_all().await;

    assert!(matches!(result, Err(FetchError::Parse(_))), "got {result:?}");
}

#[tokio::test]
async fn test_object_instead_of_array_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"status":404,"message":"Not Found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_secs(5));
    assert!(matches!(client.fetch_all().await, Err(FetchError::Parse(_))));
}

#[tokio::test]
async fn test_slow_server_times_out_as_network_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3.1/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::from_millis(200));
    let result = client.fetch_all().await;

    assert!(matches!(result, Err(FetchError::Network(_))), "got {result:?}");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1
    let client = RestCountriesClient::new(
        Some("http://127.0.0.1:1/v3.1/all".to_string()),
        Duration::from_secs(2),
    )
    .unwrap();
    let result = client.fetch_all().await;

    assert!(matches!(result, Err(FetchError::Network(_))), "got {result:?}");
}
