//! Tests for stack construction and property resolution

use pretty_assertions::assert_eq;
use serde_json::json;
use stack_core::{
    AwsStackProps, AzureStackProps, CloudflareStackProps, CommonStackProps, ContextResolver,
    ContextStore, Stack, StackKind, StageKind, resolve_properties,
};
use stack_fs::ContextPath;
use stack_test_utils::{TestProject, init_tracing};

const MANIFEST: &str = ContextPath::Manifest.as_str();

fn project() -> TestProject {
    TestProject::new()
        .with_document(
            MANIFEST,
            &json!({
                "app": "node bin/app.js",
                "context": {
                    "name": "storefront",
                    "stage": "prd",
                    "domainName": "example.com",
                    "extraContexts": ["config/shared.json", "config/aws.json"],
                    "api": {"timeout": 30, "retries": 3}
                }
            }),
        )
        .with_document(
            "config/shared.json",
            &json!({"subDomain": "shop", "resourcePrefix": "sf", "allowedOrigins": ["a", "b"]}),
        )
        .with_document("config/aws.json", &json!({"region": "us-east-1"}))
        .with_document(
            "env/prd.json",
            &json!({
                "region": "eu-west-1",
                "api": {"timeout": 60},
                "allowedOrigins": ["c"]
            }),
        )
}

fn build(project: &TestProject, kind: StackKind) -> Stack {
    init_tracing();
    let resolver = ContextResolver::new(project.loader());
    let store = ContextStore::seed_from_manifest(resolver.loader(), MANIFEST).unwrap();
    Stack::new(kind, &resolver, store).unwrap()
}

#[test]
fn aws_stack_resolves_typed_props() {
    let project = project();
    let stack = build(&project, StackKind::Aws);

    let props: AwsStackProps = stack.props().deserialize().unwrap();

    assert_eq!(
        props,
        AwsStackProps {
            common: CommonStackProps {
                name: Some("storefront".to_string()),
                stage: Some("prd".to_string()),
                domain_name: Some("example.com".to_string()),
                sub_domain: Some("shop".to_string()),
                extra_contexts: Some(vec![
                    "config/shared.json".to_string(),
                    "config/aws.json".to_string()
                ]),
                resource_prefix: Some("sf".to_string()),
                ..CommonStackProps::default()
            },
            region: Some("eu-west-1".to_string()),
        }
    );
    assert_eq!(stack.stage_kind(), Some(StageKind::Production));
    assert_eq!(stack.report().layers_applied(), 3);
}

#[test]
fn azure_stack_reports_missing_provider_keys() {
    let project = project();
    let stack = build(&project, StackKind::Azure);

    let missing: Vec<&str> = stack.props().missing().collect();
    assert!(missing.contains(&"resourceGroupName"));
    assert!(missing.contains(&"location"));

    let props: AzureStackProps = stack.props().deserialize().unwrap();
    assert_eq!(props.resource_group_name, None);
    assert_eq!(props.common.domain_name.as_deref(), Some("example.com"));
}

#[test]
fn cloudflare_stack_only_declares_its_keys() {
    let project = project();
    let stack = build(&project, StackKind::Cloudflare);

    assert!(stack.props().is_declared("accountId"));
    assert!(!stack.props().is_declared("region"));

    let props: CloudflareStackProps = stack.props().deserialize().unwrap();
    assert_eq!(props.account_id, None);
    assert_eq!(props.common.sub_domain.as_deref(), Some("shop"));
}

#[test]
fn context_reflects_every_layer() {
    let project = project();
    let stack = build(&project, StackKind::Aws);

    assert_eq!(stack.try_get_context("api"), Some(&json!({"timeout": 60, "retries": 3})));
    assert_eq!(stack.context().lookup("api.retries"), Some(&json!(3)));
    assert_eq!(stack.try_get_context("allowedOrigins"), Some(&json!(["c"])));

    assert_eq!(stack.context().to_value()["region"], json!("eu-west-1"));

    let rendered = serde_json::to_string_pretty(stack.context()).unwrap();
    insta::assert_snapshot!(rendered, @r###"
    {
      "allowedOrigins": [
        "c"
      ],
      "api": {
        "retries": 3,
        "timeout": 60
      },
      "domainName": "example.com",
      "extraContexts": [
        "config/shared.json",
        "config/aws.json"
      ],
      "name": "storefront",
      "region": "eu-west-1",
      "resourcePrefix": "sf",
      "stage": "prd",
      "subDomain": "shop"
    }
    "###);
}

#[test]
fn properties_are_a_pure_snapshot() {
    let store = ContextStore::from_value(json!({"stage": "dev", "region": "us-west-2"})).unwrap();
    let keys = StackKind::Aws.property_keys();

    let first = resolve_properties(&store, keys.iter().copied());
    let second = resolve_properties(&store, keys.iter().copied());

    assert_eq!(first, second);
    assert_eq!(first.get_str("region"), Some("us-west-2"));
    assert_eq!(store.len(), 2);
}

#[test]
fn manifest_without_context_seeds_empty_store() {
    let project = TestProject::new().with_document(MANIFEST, &json!({"app": "node app.js"}));

    let store = ContextStore::seed_from_manifest(&project.loader(), MANIFEST).unwrap();

    assert!(store.is_empty());
}

#[test]
fn missing_manifest_is_a_missing_document() {
    let project = TestProject::new();

    let err = ContextStore::seed_from_manifest(&project.loader(), MANIFEST).unwrap_err();

    assert!(err.is_missing_document());
}

#[test]
fn stack_construction_surfaces_resolution_errors() {
    init_tracing();
    let project = TestProject::new();
    let resolver = ContextResolver::new(project.loader());
    let store = ContextStore::from_value(json!({"extraContexts": ["missing.json"]})).unwrap();

    let err = Stack::new(StackKind::Aws, &resolver, store).unwrap_err();

    assert!(err.is_missing_document());
}
