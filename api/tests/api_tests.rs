use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use sandbox_api::{AppState, Message, app, dashboard};
use tower::ServiceExt;

const BOUNDARY: &str = "sandbox-boundary";

fn router() -> Router {
    app(AppState::new().expect("templates load"))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn upload_request(file_name: &str, content: impl AsRef<[u8]>) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
         Content-Type: text/csv\r\n\
         \r\n",
        field = dashboard::UPLOAD_FIELD,
    )
    .into_bytes();
    body.extend_from_slice(content.as_ref());
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/dashboard")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn root_returns_hello_world() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body = body_string(response).await;
    assert_eq!(body, r#"{"message":"Hello World"}"#);

    let message: Message = serde_json::from_str(&body).unwrap();
    assert_eq!(message.message, "Hello World");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = router()
        .oneshot(Request::builder().uri("/todo").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_renders_home_without_table() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("<h1>Cargatron</h1>"));
    assert!(body.contains("<summary>Descripción</summary>"));
    assert!(body.contains("Bienvenido al cargatron de Madrid."));
    assert!(body.contains(r#"width="500""#));
    assert!(body.contains("Upload a CSV file"));
    assert!(!body.contains("<table"));
    assert!(!body.contains("class=\"balloons\""));
}

#[tokio::test]
async fn dashboard_renders_uploaded_csv() {
    let csv = "estacion,distrito,puntos\nSol,Centro,4\nAtocha,Retiro,6\nMoncloa,Moncloa,2";
    let response = router()
        .oneshot(upload_request("estaciones.csv", csv))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"data-rows="3""#));
    assert!(body.contains(r#"data-columns="3""#));
    assert_eq!(body.matches("<tr>").count(), 4);
    assert_eq!(body.matches("<th>").count(), 3);
    assert_eq!(body.matches("<td>").count(), 9);
    assert!(body.contains("<td>Atocha</td>"));
    assert!(body.contains("class=\"balloons\""));
}

#[tokio::test]
async fn dashboard_escapes_cells() {
    let csv = "name\n<script>alert(1)</script>";
    let response = router()
        .oneshot(upload_request("evil.csv", csv))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn dashboard_without_picked_file_has_no_table() {
    let response = router()
        .oneshot(upload_request("", ""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(!body.contains("<table"));
}

#[tokio::test]
async fn dashboard_rejects_other_file_types() {
    let response = router()
        .oneshot(upload_request("estaciones.txt", "a,b\n1,2"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("estaciones.txt"));
}

#[tokio::test]
async fn dashboard_rejects_unparsable_csv() {
    let response = router()
        .oneshot(upload_request("x.csv", b"name\n\xff\xfe"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_string(response).await.contains("Malformed CSV"));
}

#[tokio::test]
async fn serves_dashboard_image() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri(dashboard::IMAGE_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
}
