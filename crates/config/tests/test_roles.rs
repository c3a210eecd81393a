use streamboard_config::{DashboardConfiguration, RoleResolver};

#[test]
fn test_resolver_from_yaml_with_creators() {
    let yaml = r#"
roles:
  creators:
    - "5"
    - "9"
"#;
    let config: DashboardConfiguration = serde_yaml::from_str(yaml).unwrap();
    let resolver = RoleResolver::new(&config);
    assert_eq!(resolver.creator_role_ids(), ["5", "9"]);
}

#[test]
fn test_resolver_from_yaml_null_roles() {
    let config: DashboardConfiguration = serde_yaml::from_str("roles:\n").unwrap();
    let resolver = RoleResolver::new(&config);
    assert_eq!(resolver.creator_role_ids(), ["1"]);
}

#[test]
fn test_resolver_from_yaml_empty_creators() {
    let yaml = r#"
roles:
  creators: []
"#;
    let config: DashboardConfiguration = serde_yaml::from_str(yaml).unwrap();
    let resolver = RoleResolver::new(&config);
    assert_eq!(resolver.creator_role_ids(), ["1"]);
}

#[tokio::test]
async fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deployment.yaml");
    std::fs::write(
        &path,
        "roles:\n  creators:\n    - analytics-admin\n",
    )
    .unwrap();

    let config = DashboardConfiguration::load(&path).await.unwrap();
    let resolver = RoleResolver::new(&config);
    assert_eq!(resolver.creator_role_ids(), ["analytics-admin"]);
}

#[tokio::test]
async fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DashboardConfiguration::load(dir.path().join("absent.yaml")).await;
    assert!(result.is_err());
}
