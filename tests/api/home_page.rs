use crate::helpers::TestApp;

#[tokio::test]
async fn the_root_serves_the_newsletter_form() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.get_home().await;

    // Assert
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form id="newsletter-form" method="post" action="/newsletter">"#));
    assert!(html.contains(r#"name="story""#));
    assert!(html.contains(r#"name="highlights""#));
    assert!(html.contains(r#"name="theme""#));
    // The three themes of the selector, nothing else
    assert!(html.contains(r#"<option value="light_blue">"#));
    assert!(html.contains(r#"<option value="warm_yellow">"#));
    assert!(html.contains(r#"<option value="classic_gray">"#));
    assert_eq!(html.matches("<option ").count(), 3);
}

#[tokio::test]
async fn the_form_page_embeds_the_startup_logo() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let html = app.get_home_html().await;

    // Assert
    assert!(html.contains("data:image/png;base64,"));
}

#[tokio::test]
async fn the_form_page_shows_no_message_by_default() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let html = app.get_home_html().await;

    // Assert
    assert!(!html.contains(r#"class="flash""#));
}
