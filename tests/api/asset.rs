use crate::helper::{get_client, spawn_app};

#[tokio::test]
async fn the_starfield_script_is_served() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/static/starfield.js", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());

    let body = response.text().await.expect("The body should be readable");
    assert!(body.contains("starfield-canvas"));
}

#[tokio::test]
async fn missing_assets_return_404() {
    let app = spawn_app().await;
    let client = get_client();

    let response = client
        .get(format!("{}/static/missing.js", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(404, response.status().as_u16());
}
