use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use crate::configs::{self, AppState};

macro_rules! init_app {
    () => {
        test::init_service(App::new().configure(configs::configure(AppState::in_memory()))).await
    };
}

fn user_body(login: &str) -> Value {
    json!({
        "email": format!("{login}@example.com"),
        "login": login,
        "name": "John",
        "birthday": "1990-01-01",
    })
}

fn film_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Valid description",
        "releaseDate": "1999-03-31",
        "duration": 136,
    })
}

fn data_ids(body: &Value) -> Vec<u64> {
    body["data"].as_array().unwrap().iter().map(|v| v["id"].as_u64().unwrap()).collect()
}

#[actix_web::test]
async fn create_user_falls_back_to_login() {
    let app = init_app!();

    let mut body = user_body("jdoe");
    body["name"] = json!("   ");
    let req = test::TestRequest::post().uri("/users").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "jdoe");
    assert_eq!(body["data"]["birthday"], "1990-01-01");
}

#[actix_web::test]
async fn invalid_users_are_rejected() {
    let app = init_app!();
    let tomorrow = chrono::Local::now().date_naive().succ_opt().unwrap().to_string();

    let cases = [
        ("email", json!("invalid-email")),
        ("login", json!("bad login")),
        ("login", json!("")),
        ("birthday", json!(tomorrow)),
        ("birthday", Value::Null),
    ];
    for (field, value) in cases {
        let mut body = user_body("valid");
        body[field] = value;
        let req = test::TestRequest::post().uri("/users").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{field} should be rejected");
    }

    let req = test::TestRequest::get().uri("/users").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn invalid_films_are_rejected() {
    let app = init_app!();

    let cases = [
        ("name", json!("")),
        ("description", json!("a".repeat(201))),
        ("releaseDate", json!("1895-12-27")),
        ("releaseDate", Value::Null),
        ("duration", json!(0)),
        ("duration", json!(-10)),
    ];
    for (field, value) in cases {
        let mut body = film_body("Valid Title");
        body[field] = value;
        let req = test::TestRequest::post().uri("/films").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{field} should be rejected");
    }

    let mut body = film_body("Earliest");
    body["releaseDate"] = json!("1895-12-28");
    body["duration"] = json!(1);
    let req = test::TestRequest::post().uri("/films").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn update_film_needs_known_id() {
    let app = init_app!();

    let req = test::TestRequest::put().uri("/films").set_json(film_body("No id")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut body = film_body("Unknown");
    body["id"] = json!(99);
    let req = test::TestRequest::put().uri("/films").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Film 99 not found");
}

#[actix_web::test]
async fn popular_films_ranked_by_likes() {
    let app = init_app!();

    for login in ["u1", "u2"] {
        let req = test::TestRequest::post().uri("/users").set_json(user_body(login)).to_request();
        test::call_service(&app, req).await;
    }
    for name in ["F1", "F2", "F3"] {
        let req = test::TestRequest::post().uri("/films").set_json(film_body(name)).to_request();
        test::call_service(&app, req).await;
    }
    for (film, user) in [(2, 1), (2, 2), (3, 1), (3, 1)] {
        let uri = format!("/films/{film}/like/{user}");
        let resp = test::call_service(&app, test::TestRequest::put().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get().uri("/films/popular?count=2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(data_ids(&body), vec![2, 3]);
    assert_eq!(body["data"][0]["likes"], json!([1, 2]));

    let req = test::TestRequest::get().uri("/films/popular").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(data_ids(&body), vec![2, 3, 1]);

    let req = test::TestRequest::get().uri("/films/popular?count=0").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(data_ids(&body).is_empty());

    let req = test::TestRequest::get().uri("/films/popular?count=-1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete().uri("/films/3/like/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["likes"], json!([]));

    let req = test::TestRequest::put().uri("/films/1/like/9").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn friendship_lifecycle() {
    let app = init_app!();

    for login in ["a", "b", "c"] {
        let req = test::TestRequest::post().uri("/users").set_json(user_body(login)).to_request();
        test::call_service(&app, req).await;
    }
    for uri in ["/users/1/friends/2", "/users/1/friends/3"] {
        let resp = test::call_service(&app, test::TestRequest::put().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(test::read_body(resp).await.is_empty());
    }

    let req = test::TestRequest::get().uri("/users/1/friends").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(data_ids(&body), vec![2, 3]);

    let req = test::TestRequest::get().uri("/users/2/friends").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(data_ids(&body), vec![1]);

    let req = test::TestRequest::get().uri("/users/2/friends/common/3").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(data_ids(&body), vec![1]);

    let req = test::TestRequest::delete().uri("/users/2/friends/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/users/1/friends").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(data_ids(&body), vec![3]);

    let req = test::TestRequest::put().uri("/users/1/friends/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put().uri("/users/42/friends/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put().uri("/users/1/friends/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/users/42/friends").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_user_replaces_fields() {
    let app = init_app!();

    let req = test::TestRequest::post().uri("/users").set_json(user_body("jdoe")).to_request();
    test::call_service(&app, req).await;

    let body = json!({
        "id": 1,
        "email": "new@example.com",
        "login": "johnny",
        "birthday": "1985-06-15",
    });
    let req = test::TestRequest::put().uri("/users").set_json(&body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/users/1").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["email"], "new@example.com");
    assert_eq!(body["data"]["name"], "johnny");
}
