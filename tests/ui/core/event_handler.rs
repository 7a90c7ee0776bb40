use ratakit::ui::core::EventHandler;

#[tokio::test]
async fn test_event_handler_render_timing() {
    let event_handler = EventHandler::new();

    // Initially should not need to render (just created)
    assert!(!event_handler.should_render());

    // After waiting, should be ready to render
    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());
}

#[tokio::test]
async fn test_mark_rendered_resets_timer() {
    let mut event_handler = EventHandler::new();

    tokio::time::sleep(tokio::time::Duration::from_millis(17)).await;
    assert!(event_handler.should_render());

    event_handler.mark_rendered();
    assert!(!event_handler.should_render());
}
