//! Backend client and fallback behaviour against a mocked directory backend.

use std::sync::Arc;
use std::time::{Duration, Instant};

use httpmock::prelude::*;
use serde_json::json;

use alumni_search::AlumniError;
use alumni_search::backend::{BackendClient, SearchEvent};
use alumni_search::directory::CandidateKind;
use alumni_search::search::{SearchFilters, classify};
use alumni_search::service::{
    HttpTracker, ProjectSearchRequest, RecordingTracker, SearchRequest, SearchSource,
    SearchTracker, SmartSearch,
};

fn client(server: &MockServer) -> Arc<BackendClient> {
    Arc::new(BackendClient::new(&server.base_url(), Duration::from_secs(2)).unwrap())
}

fn backend_member() -> serde_json::Value {
    json!({
        "type": "member",
        "data": {
            "id": 42,
            "first_name": "Priya",
            "last_name": "Natarajan",
            "email": "priya@example.com",
            "region": "NA",
            "location": "Boston, MA",
            "session": "S3",
            "pod": "Rove",
            "skills": "Marketing",
            "additional_info": null
        },
        "relevance_score": 0.9,
        "match_reason": "Located in boston, Connected to rove"
    })
}

#[test]
fn search_sends_entities_and_filters() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/search/search/")
            .query_param("q", "Who is in Boston?")
            .query_param("intent", "find_person")
            .query_param("locations", "boston")
            .query_param("region", "NA");
        then.status(200)
            .json_body(json!({ "results": [backend_member()] }));
    });

    let query = classify("Who is in Boston?");
    let results = client(&server)
        .search(&query, &SearchFilters::new().with_region("NA"))
        .unwrap();

    mock.assert();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].candidate.label(), "Priya Natarajan");
    assert_eq!(
        results[0].match_reasons,
        vec!["Located in boston".to_string(), "Connected to rove".to_string()]
    );
}

#[test]
fn malformed_results_are_skipped() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(200).json_body(json!({
            "results": [
                backend_member(),
                { "type": "spaceship", "data": {} },
                { "relevance_score": 1.0 }
            ]
        }));
    });

    let results = client(&server)
        .search(&classify("who"), &SearchFilters::new())
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn missing_results_key_is_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(200).json_body(json!({}));
    });

    let results = client(&server)
        .search(&classify("who"), &SearchFilters::new())
        .unwrap();
    assert!(results.is_empty());
}

#[test]
fn non_success_status_is_reported() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(503);
    });

    let err = client(&server)
        .search(&classify("who"), &SearchFilters::new())
        .unwrap_err();
    assert!(matches!(err, AlumniError::BackendStatus { status: 503, .. }));
}

#[test]
fn non_json_body_is_invalid_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = client(&server)
        .search(&classify("who"), &SearchFilters::new())
        .unwrap_err();
    assert!(matches!(err, AlumniError::InvalidResponse(_)));
}

#[test]
fn service_prefers_backend_results() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(200)
            .json_body(json!({ "results": [backend_member()] }));
    });

    let service = SmartSearch::offline().with_backend(client(&server));
    let response = service.search(&SearchRequest::new("Who is in Boston?")).unwrap();
    assert_eq!(response.source, SearchSource::Backend);
    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].candidate.label(), "Priya Natarajan");
}

#[test]
fn service_falls_back_on_backend_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(500);
    });

    let tracker = Arc::new(RecordingTracker::new());
    let service = SmartSearch::offline()
        .with_backend(client(&server))
        .with_tracker(tracker.clone());
    let response = service.search(&SearchRequest::new("Who is in Boston?")).unwrap();

    mock.assert();
    assert_eq!(response.source, SearchSource::Fallback);
    assert_eq!(response.results[0].candidate.label(), "Sarah Johnson");
    assert_eq!(tracker.events()[0].results_count, 1);
}

#[test]
fn project_search_keeps_only_backend_projects() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(200).json_body(json!({
            "results": [
                backend_member(),
                {
                    "type": "project",
                    "data": {
                        "id": 9,
                        "title": "Campus Eats",
                        "type": "ST",
                        "stage": "MVP",
                        "what_are_they_looking_for": "developers",
                        "additional_info": ""
                    },
                    "relevance_score": 0.3,
                    "match_reason": "Looking for developers"
                }
            ]
        }));
    });

    let service = SmartSearch::offline().with_backend(client(&server));
    let response = service
        .project_search(&ProjectSearchRequest::new("startup developers"))
        .unwrap();
    assert_eq!(response.source, SearchSource::Backend);
    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].kind(), CandidateKind::Project);
}

#[test]
fn project_search_asks_backend_for_projects() {
    let server = MockServer::start();
    let projects = server.mock(|when, then| {
        when.method(GET)
            .path("/api/search/search/")
            .query_param("q", "who needs a developer")
            .query_param("intent", "find_project")
            .query_param("projectType", "ST")
            .query_param("projectStage", "MVP");
        then.status(200).json_body(json!({ "results": [] }));
    });
    let other = server.mock(|when, then| {
        when.method(GET)
            .path("/api/search/search/")
            .query_param("intent", "find_person");
        then.status(200).json_body(json!({ "results": [backend_member()] }));
    });

    let request = ProjectSearchRequest {
        q: Some("who needs a developer".to_string()),
        project_type: Some("startup".to_string()),
        stage: Some("mvp".to_string()),
    };
    let response = SmartSearch::offline()
        .with_backend(client(&server))
        .project_search(&request)
        .unwrap();

    projects.assert();
    assert_eq!(other.hits(), 0);
    assert_eq!(response.source, SearchSource::Backend);
    assert!(response.results.is_empty());
}

#[test]
fn http_tracker_flush_waits_for_delivery() {
    let server = MockServer::start();
    let tracking = server.mock(|when, then| {
        when.method(POST).path("/api/search-tracking/");
        then.status(201).delay(Duration::from_millis(100));
    });

    let tracker = HttpTracker::new(client(&server));
    for count in 0..3 {
        tracker.track(SearchEvent::smart("who", &SearchFilters::new(), count));
    }

    assert!(tracker.flush(Duration::from_secs(5)));
    assert_eq!(tracking.hits(), 3);
}

#[test]
fn track_posts_event_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/search-tracking/").json_body(json!({
            "search_type": "smart",
            "query": "Who is in Boston?",
            "filters": { "region": "", "session": "", "pod": "Zoom" },
            "results_count": 1
        }));
        then.status(201);
    });

    let event = SearchEvent::smart(
        "Who is in Boston?",
        &SearchFilters::new().with_pod("Zoom"),
        1,
    );
    client(&server).track(&event).unwrap();
    mock.assert();
}

#[test]
fn http_tracker_sends_in_background() {
    let server = MockServer::start();
    let tracking = server.mock(|when, then| {
        when.method(POST).path("/api/search-tracking/");
        then.status(201);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(502);
    });

    let backend = client(&server);
    let service = SmartSearch::offline()
        .with_backend(Arc::clone(&backend))
        .with_tracker(Arc::new(HttpTracker::new(backend)));
    service.search(&SearchRequest::new("Who is in Boston?")).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    while tracking.hits() == 0 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    assert_eq!(tracking.hits(), 1);
}

#[test]
fn tracking_failure_does_not_fail_search() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/search-tracking/");
        then.status(500);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/search/search/");
        then.status(200).json_body(json!({ "results": [] }));
    });

    let backend = client(&server);
    let service = SmartSearch::offline()
        .with_backend(Arc::clone(&backend))
        .with_tracker(Arc::new(HttpTracker::new(backend)));
    let response = service.search(&SearchRequest::new("who")).unwrap();
    assert_eq!(response.source, SearchSource::Backend);
    assert!(response.results.is_empty());
}
