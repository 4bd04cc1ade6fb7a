//! Integration tests for the TMDB resources.
//!
//! Each test points a [`RestClient`] at a mock server and checks the path,
//! query and body a resource operation puts on the wire, and what it mirrors
//! from the response.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::json;
use tmdb_api::rest::resources::common::{decode, GenreList, ListCreated, MovieSummary, Page};
use tmdb_api::rest::resources::{
    Account, AccountListParams, Authentication, Discover, DiscoverMovieParams, Genres,
    GuestSessions, Lists, MediaType, MovieDetailsParams, Movies, RatingSession, Reviews, Search,
    SearchMovieParams,
};
use tmdb_api::rest::{CreatedAtSort, ResourceError, TmdbResource};
use tmdb_api::{ApiKey, BaseUrl, GuestSessionId, RestClient, SessionId, TmdbConfig};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const SESSION: &str = "79191836ddaa0da3df76a5ffef6f07ad6ab0c641";

fn client_for(server: &MockServer) -> RestClient {
    let config = TmdbConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new(format!("{}/3", server.uri())).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn session() -> SessionId {
    SessionId::new(SESSION).unwrap()
}

/// Returns the query of a received request without the credential.
fn query_of(request: &Request) -> HashMap<String, String> {
    request
        .url
        .query_pairs()
        .into_owned()
        .filter(|(key, _)| key != "api_key")
        .collect()
}

async fn only_request(server: &MockServer) -> Request {
    let mut received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    received.remove(0)
}

// ============================================================================
// Movies Tests
// ============================================================================

#[tokio::test]
async fn test_movie_details_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "title": "Fight Club",
            "release_date": "1999-10-15",
            "runtime": 139
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut movie = Movies::new(550);

    let body = movie.details(&client, None).await.unwrap();
    assert_eq!(body["title"], "Fight Club");

    assert!(query_of(&only_request(&server).await).is_empty());
    assert_eq!(movie.attr("title"), Some(&json!("Fight Club")));
    assert_eq!(movie.attributes().get_as::<u32>("runtime"), Some(139));
}

#[tokio::test]
async fn test_movie_details_sends_given_params_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/550"))
        .and(query_param("append_to_response", "credits,videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 550})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut movie = Movies::new(550);
    let params = MovieDetailsParams {
        append_to_response: Some("credits,videos".to_string()),
        ..Default::default()
    };
    movie.details(&client, Some(params)).await.unwrap();

    let query = query_of(&only_request(&server).await);
    assert_eq!(query.len(), 1);
    assert!(!query.contains_key("language"));
}

#[tokio::test]
async fn test_later_response_overwrites_mirrored_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "title": "Fight Club",
            "popularity": 61.4
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/movie/550/keywords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "popularity": 70.0,
            "keywords": [{"id": 825, "name": "support group"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut movie = Movies::new(550);
    movie.details(&client, None).await.unwrap();
    movie.keywords(&client).await.unwrap();

    assert_eq!(movie.attr("title"), Some(&json!("Fight Club")));
    assert_eq!(movie.attr("popularity"), Some(&json!(70.0)));
    assert!(movie.attributes().contains_key("keywords"));
    assert_eq!(movie.attributes().len(), 4);
}

#[tokio::test]
async fn test_array_response_leaves_attributes_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/genre/movie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [{"id": 28, "name": "Action"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/genre/tv/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut genres = Genres::new();

    let body = genres.movie_list(&client, None).await.unwrap();
    let list: GenreList = decode(&body).unwrap();
    assert_eq!(list.genres[0].name, "Action");

    let body = genres.tv_list(&client, None).await.unwrap();
    assert_eq!(body, json!([1, 2, 3]));

    assert_eq!(genres.attributes().len(), 1);
    assert!(genres.attributes().contains_key("genres"));
}

#[tokio::test]
async fn test_not_found_is_a_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut movie = Movies::new(0);

    let err = movie.details(&client, None).await.unwrap_err();
    assert!(err.is_remote());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.tmdb_status_code(), Some(34));
    assert!(movie.attributes().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    let config = TmdbConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .base_url(BaseUrl::new("http://127.0.0.1:1/3").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config).unwrap();
    let mut movie = Movies::new(550);

    let err = movie.details(&client, None).await.unwrap_err();
    assert!(err.is_network());
    assert!(!err.is_remote());
    assert!(!err.is_decode());
    assert_eq!(err.status(), None);
    assert!(movie.attributes().is_empty());
}

#[tokio::test]
async fn test_movie_rating_with_guest_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/movie/550/rating"))
        .and(query_param("guest_session_id", "guest-1"))
        .and(body_json(json!({"value": 8.5})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "status_code": 1,
            "status_message": "Success."
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/3/movie/550/rating"))
        .and(query_param("guest_session_id", "guest-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status_code": 13,
            "status_message": "The item/record was deleted successfully."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut movie = Movies::new(550);
    let session = RatingSession {
        guest_session_id: Some(GuestSessionId::new("guest-1").unwrap()),
        ..Default::default()
    };

    movie
        .rating(&client, 8.5, Some(session.clone()))
        .await
        .unwrap();
    assert_eq!(movie.attr("status_code"), Some(&json!(1)));

    movie.rating_delete(&client, Some(session)).await.unwrap();
    assert_eq!(movie.attr("status_code"), Some(&json!(13)));
}

#[tokio::test]
async fn test_movie_without_id_fails_before_sending() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let mut movies = Movies::default();

    let err = movies.credits(&client).await.unwrap_err();
    assert!(matches!(err, ResourceError::MissingId { resource: "Movies", .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_popular_needs_no_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{"id": 550, "title": "Fight Club"}],
            "total_pages": 500,
            "total_results": 10000
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut movies = Movies::default();

    let body = movies.popular(&client, None).await.unwrap();
    let page: Page<MovieSummary> = decode(&body).unwrap();
    assert_eq!(page.results[0].id, 550);
    assert!(page.has_next_page());
}

// ============================================================================
// Discover Tests
// ============================================================================

#[tokio::test]
async fn test_discover_movie_renames_range_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [],
            "total_pages": 0,
            "total_results": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut discover = Discover::new();
    let params = DiscoverMovieParams {
        vote_average_gte: Some(7.0),
        primary_release_date_lte: NaiveDate::from_ymd_opt(2020, 1, 1),
        ..Default::default()
    };
    discover.movie(&client, Some(params)).await.unwrap();

    let query = query_of(&only_request(&server).await);
    assert_eq!(query.len(), 2);
    assert_eq!(query.get("vote_average.gte").map(String::as_str), Some("7.0"));
    assert_eq!(
        query.get("primary_release_date.lte").map(String::as_str),
        Some("2020-01-01")
    );
    assert_eq!(discover.attr("total_results"), Some(&json!(0)));
}

#[tokio::test]
async fn test_discover_passes_extra_filters_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut discover = Discover::new();
    let params = DiscoverMovieParams::default()
        .with_extra("with_watch_providers", "8|337")
        .with_extra("vote_count_lte", "500");
    discover.movie(&client, Some(params)).await.unwrap();

    let query = query_of(&only_request(&server).await);
    assert_eq!(query.get("with_watch_providers").map(String::as_str), Some("8|337"));
    assert_eq!(query.get("vote_count.lte").map(String::as_str), Some("500"));
}

#[tokio::test]
async fn test_discover_extra_cannot_add_a_second_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/discover/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut discover = Discover::new();
    let params = DiscoverMovieParams::default()
        .with_extra("api_key", "other")
        .with_extra("x_gte_y", "1");
    discover.movie(&client, Some(params)).await.unwrap();

    let request = only_request(&server).await;
    let keys: Vec<String> = request
        .url
        .query_pairs()
        .filter(|(key, _)| key == "api_key")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(keys, vec!["test-key".to_string()]);
    assert_eq!(query_of(&request).get("x_gte_y").map(String::as_str), Some("1"));
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_account_info_learns_id_for_listings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account"))
        .and(query_param("session_id", SESSION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 548,
            "username": "travisbell",
            "include_adult": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/account/548/favorite/movies"))
        .and(query_param("session_id", SESSION))
        .and(query_param("sort_by", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [],
            "total_pages": 1,
            "total_results": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut account = Account::new(session());

    account.info(&client).await.unwrap();
    assert_eq!(account.id, Some(548));
    assert_eq!(account.attr("username"), Some(&json!("travisbell")));

    let params = AccountListParams {
        sort_by: Some(CreatedAtSort::Desc),
        ..Default::default()
    };
    account
        .favorite_movies(&client, Some(params))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_account_listing_without_id_fails() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let mut account = Account::new(session());

    let err = account.watchlist_tv(&client, None).await.unwrap_err();
    assert!(matches!(
        err,
        ResourceError::MissingId { resource: "Account", ref placeholder } if placeholder == "id"
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_account_watchlist_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/account/548/watchlist"))
        .and(query_param("session_id", SESSION))
        .and(body_json(json!({
            "media_type": "movie",
            "media_id": 550,
            "watchlist": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "status_code": 1,
            "status_message": "Success."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut account = Account::new(session()).with_id(548);

    let body = account
        .watchlist(&client, MediaType::Movie, 550, true)
        .await
        .unwrap();
    assert_eq!(body["success"], true);
}

// ============================================================================
// Lists Tests
// ============================================================================

#[tokio::test]
async fn test_list_create_sends_null_language_and_learns_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/list"))
        .and(query_param("session_id", SESSION))
        .and(body_json(json!({
            "name": "My List",
            "description": "desc",
            "language": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status_message": "The item/record was created successfully.",
            "success": true,
            "status_code": 1,
            "list_id": 5861
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/3/list/5861/add_item"))
        .and(body_json(json!({"media_id": 550})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status_code": 12,
            "status_message": "The item/record was updated successfully."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut list = Lists::for_session(session());

    let body = list
        .list_create(&client, "My List", "desc", None)
        .await
        .unwrap();
    let created: ListCreated = decode(&body).unwrap();
    assert_eq!(created.list_id, 5861);
    assert_eq!(list.id.as_deref(), Some("5861"));

    list.add_item(&client, 550).await.unwrap();
    assert_eq!(list.attr("status_code"), Some(&json!(12)));
}

#[tokio::test]
async fn test_list_create_without_list_id_forgets_previous_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/list"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": false,
            "status_code": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut list = Lists::new("old").with_session(session());

    list.list_create(&client, "My List", "desc", Some("en"))
        .await
        .unwrap();
    assert!(list.id.is_none());

    let err = list.add_item(&client, 550).await.unwrap_err();
    assert!(matches!(err, ResourceError::MissingId { resource: "Lists", .. }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_clear_confirms_in_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/list/5861/clear"))
        .and(query_param("session_id", SESSION))
        .and(query_param("confirm", "true"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status_code": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut list = Lists::new("5861").with_session(session());

    list.list_clear(&client, true).await.unwrap();
}

#[tokio::test]
async fn test_list_mutation_without_session_fails() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let mut list = Lists::new("5861");

    let err = list.list_delete(&client).await.unwrap_err();
    assert!(matches!(err, ResourceError::MissingSession { resource: "Lists" }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_item_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/list/5861/item_status"))
        .and(query_param("movie_id", "550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5861",
            "item_present": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut list = Lists::new("5861");

    list.item_status(&client, 550).await.unwrap();
    assert_eq!(list.attr("item_present"), Some(&json!(true)));
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_session_delete_sends_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/3/authentication/session"))
        .and(body_json(json!({"session_id": SESSION})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut auth = Authentication::new();

    auth.session_delete(&client, &session()).await.unwrap();
    assert_eq!(auth.attr("success"), Some(&json!(true)));
}

#[tokio::test]
async fn test_guest_session_path_substitution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/guest_session/guest-1/rated/movies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut guest = GuestSessions::new(GuestSessionId::new("guest-1").unwrap());

    guest.rated_movies(&client, None).await.unwrap();
    assert!(query_of(&only_request(&server).await).is_empty());
}

// ============================================================================
// Search and Review Tests
// ============================================================================

#[tokio::test]
async fn test_search_movie_sends_query_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "Fight Club"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{"id": 550, "title": "Fight Club"}],
            "total_pages": 1,
            "total_results": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut search = Search::new();
    let params = SearchMovieParams {
        year: Some(1999),
        ..Default::default()
    };

    search
        .movie(&client, "Fight Club", Some(params))
        .await
        .unwrap();

    let query = query_of(&only_request(&server).await);
    assert_eq!(query.len(), 2);
    assert_eq!(query.get("year").map(String::as_str), Some("1999"));
}

#[tokio::test]
async fn test_review_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/review/5488c29bc3a3686f4a00004a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5488c29bc3a3686f4a00004a",
            "author": "Travis Bell",
            "media_id": 76757
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut review = Reviews::new("5488c29bc3a3686f4a00004a");

    review.info(&client).await.unwrap();
    assert_eq!(review.attr("author"), Some(&json!("Travis Bell")));
}
