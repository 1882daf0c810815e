use cmake_new::ProjectName;

#[test]
fn test_spaces_become_hyphens_and_underscores() {
    let name = ProjectName::new("My Project");
    assert_eq!(name.kebab(), "my-project");
    assert_eq!(name.snake(), "my_project");
}

#[test]
fn test_underscores_become_hyphens_in_directory() {
    let name = ProjectName::new("my_project");
    assert_eq!(name.kebab(), "my-project");
    assert_eq!(name.snake(), "my_project");
}

#[test]
fn test_hyphens_kept_for_directory() {
    let name = ProjectName::new("Cool-App");
    assert_eq!(name.kebab(), "cool-app");
    assert_eq!(name.snake(), "cool_app");
}

#[test]
fn test_mixed_separators() {
    let name = ProjectName::new("A b_C-d");
    assert_eq!(name.kebab(), "a-b-c-d");
    assert_eq!(name.snake(), "a_b_c_d");
}

#[test]
fn test_other_punctuation_passes_through() {
    let name = ProjectName::new("Foo.Bar!");
    assert_eq!(name.kebab(), "foo.bar!");
    assert_eq!(name.snake(), "foo.bar!");
}

#[test]
fn test_display_uses_directory_form() {
    assert_eq!(ProjectName::new("Hello World").to_string(), "hello-world");
}
