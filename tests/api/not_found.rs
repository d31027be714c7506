use crate::helper::{get_client, spawn_app};

#[tokio::test]
async fn unknown_paths_return_404() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/nonexistent", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(404, response.status().as_u16());

    let body = response.text().await.expect("The body should be readable");
    assert!(body.contains("404"));
}

#[tokio::test]
async fn wrong_method_on_home_returns_405() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .post(format!("{}/", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(405, response.status().as_u16());
}
