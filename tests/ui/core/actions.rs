use ratakit::ui::core::actions::Action;

#[test]
fn test_action_enum_exists() {
    // Action enum should be accessible with a valid size
    let action_size = std::mem::size_of::<Action>();
    assert!(action_size > 0, "Action enum should have a non-zero size");
}

#[test]
fn test_action_equality() {
    assert_eq!(Action::InputChanged("a".to_string()), Action::InputChanged("a".to_string()));
    assert_ne!(Action::OpenMenu, Action::CloseMenu);
    assert_eq!(Action::None.clone(), Action::None);
}
