mod common;

use axum::http::{Method, StatusCode};
use common::{auth_cookie, create_test_student, create_test_user, send, setup_test_app};
use marksheet_auth::Role;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student(pool: PgPool) {
    let teacher = create_test_user(&pool, "Teacher One", "password1", Role::Teacher).await;
    let app = setup_test_app(pool);

    let res = send(
        &app,
        Method::POST,
        "/api/students",
        Some(&auth_cookie(&teacher.identity)),
        Some(json!({ "username": "alice", "usn": "1MS24CS001", "name": "Alice" })),
    )
    .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["usn"], "1MS24CS001");
    assert!(res.body["id"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_usn_or_username_conflicts(pool: PgPool) {
    let admin = create_test_user(&pool, "Admin", "password1", Role::Admin).await;
    create_test_student(&pool, "Alice", "1MS24CS001").await;
    let app = setup_test_app(pool);
    let cookie = auth_cookie(&admin.identity);

    for body in [
        json!({ "username": "someone", "usn": "1MS24CS001", "name": "Dup USN" }),
        json!({ "username": "1ms24cs001", "usn": "1MS24CS999", "name": "Dup username" }),
    ] {
        let res = send(&app, Method::POST, "/api/students", Some(&cookie), Some(body)).await;
        assert_eq!(res.status, StatusCode::CONFLICT);
        assert_eq!(res.error(), "Student with this USN or username already exists");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_fields_rejected(pool: PgPool) {
    let teacher = create_test_user(&pool, "Teacher One", "password1", Role::Teacher).await;
    let app = setup_test_app(pool);
    let cookie = auth_cookie(&teacher.identity);

    let res = send(
        &app,
        Method::POST,
        "/api/students",
        Some(&cookie),
        Some(json!({ "username": "", "usn": "1MS24CS002", "name": "Bob" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    let res = send(
        &app,
        Method::POST,
        "/api/students",
        Some(&cookie),
        Some(json!({ "username": "bob" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_students_ordered_by_name(pool: PgPool) {
    let teacher = create_test_user(&pool, "Teacher One", "password1", Role::Teacher).await;
    create_test_student(&pool, "Zoe", "1MS24CS003").await;
    create_test_student(&pool, "Alice", "1MS24CS001").await;
    create_test_student(&pool, "Mallory", "1MS24CS002").await;
    let app = setup_test_app(pool);

    let res = send(
        &app,
        Method::GET,
        "/api/students",
        Some(&auth_cookie(&teacher.identity)),
        None,
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    let names: Vec<&str> = res
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Alice", "Mallory", "Zoe"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_fields_are_stored_trimmed(pool: PgPool) {
    let teacher = create_test_user(&pool, "Teacher One", "password1", Role::Teacher).await;
    let app = setup_test_app(pool.clone());
    let cookie = auth_cookie(&teacher.identity);

    let res = send(
        &app,
        Method::POST,
        "/api/students",
        Some(&cookie),
        Some(json!({ "username": "  carol ", "usn": " 1MS24CS010", "name": "Carol  " })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["username"], "carol");
    assert_eq!(res.body["usn"], "1MS24CS010");
    assert_eq!(res.body["name"], "Carol");

    let res = send(
        &app,
        Method::POST,
        "/api/students",
        Some(&cookie),
        Some(json!({ "username": "   ", "usn": "1MS24CS011", "name": "Dave" })),
    )
    .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
