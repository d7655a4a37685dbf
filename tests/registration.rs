use std::sync::Arc;

use workflow_versioning::{
    Binding, DefaultVersionDiagnostics, DiagnosticId, DiscoveredWorkflow, NumericSuffixStrategy,
    RegistrationPlanner, StrategyFactory, VersioningOptions,
};

fn planner() -> RegistrationPlanner {
    RegistrationPlanner::new(
        StrategyFactory::with_builtin_strategies(),
        VersioningOptions::new().with_default_strategy(|| Arc::new(NumericSuffixStrategy)),
        Arc::new(DefaultVersionDiagnostics),
    )
}

#[test]
fn a_discovery_manifest_plans_bindings_in_discovery_order() {
    // Discovery output is plain data; a JSON manifest is one way hosts
    // materialize it.
    let manifest = serde_json::json!([
        { "type_name": "PaymentsWorkflowV1" },
        { "type_name": "OrdersWorkflowV1" },
        { "type_name": "OrdersWorkflowV2" },
        { "type_name": "PaymentsWorkflowV4" },
    ]);
    let discovered: Vec<DiscoveredWorkflow> = serde_json::from_value(manifest).unwrap();

    let plan = planner().plan(&discovered).unwrap();

    assert_eq!(
        plan.bindings,
        vec![
            Binding {
                canonical_name: "PaymentsWorkflow".to_string(),
                type_name: "PaymentsWorkflowV4".to_string(),
            },
            Binding {
                canonical_name: "OrdersWorkflow".to_string(),
                type_name: "OrdersWorkflowV2".to_string(),
            },
        ]
    );
}

#[test]
fn mixed_conventions_resolve_through_declared_strategies() {
    let discovered = vec![
        DiscoveredWorkflow::from_type_name("OrdersWorkflowV1"),
        DiscoveredWorkflow::from_type_name("OrdersWorkflowV2"),
        DiscoveredWorkflow {
            type_name: "Billing20240131".to_string(),
            strategy: Some("date-suffix".to_string()),
            ..Default::default()
        },
        DiscoveredWorkflow {
            type_name: "Billing20240601".to_string(),
            strategy: Some("date-suffix".to_string()),
            ..Default::default()
        },
    ];

    let plan = planner().plan(&discovered).unwrap();

    assert_eq!(
        plan.bindings,
        vec![
            Binding {
                canonical_name: "OrdersWorkflow".to_string(),
                type_name: "OrdersWorkflowV2".to_string(),
            },
            Binding {
                canonical_name: "Billing".to_string(),
                type_name: "Billing20240601".to_string(),
            },
        ]
    );
}

#[test]
fn skipped_families_do_not_block_the_rest_of_the_plan() {
    let discovered = vec![
        // Ties for latest within its family.
        DiscoveredWorkflow::from_type_name("OrdersWorkflowV2"),
        DiscoveredWorkflow {
            type_name: "OrdersRewriteV2".to_string(),
            canonical_name: Some("OrdersWorkflow".to_string()),
            version: Some("2".to_string()),
            ..Default::default()
        },
        // No strategy can parse this one.
        DiscoveredWorkflow::from_type_name("Unversioned"),
        // Resolves cleanly.
        DiscoveredWorkflow::from_type_name("PaymentsWorkflowV1"),
    ];

    let plan = planner().plan(&discovered).unwrap();

    assert_eq!(
        plan.bindings,
        vec![Binding {
            canonical_name: "PaymentsWorkflow".to_string(),
            type_name: "PaymentsWorkflowV1".to_string(),
        }]
    );
    let skipped: Vec<DiagnosticId> = plan.skipped.iter().map(|d| d.id).collect();
    assert_eq!(
        skipped,
        vec![DiagnosticId::CouldNotParse, DiagnosticId::AmbiguousLatest]
    );
}

#[test]
fn declared_metadata_groups_differently_named_types_into_one_family() {
    let discovered = vec![
        DiscoveredWorkflow {
            type_name: "LegacyOrderProcessor".to_string(),
            canonical_name: Some("OrdersWorkflow".to_string()),
            version: Some("1".to_string()),
            origin_label: Some("legacy-module".to_string()),
            ..Default::default()
        },
        DiscoveredWorkflow::from_type_name("OrdersWorkflowV2"),
    ];

    let plan = planner().plan(&discovered).unwrap();

    assert_eq!(
        plan.bindings,
        vec![Binding {
            canonical_name: "OrdersWorkflow".to_string(),
            type_name: "OrdersWorkflowV2".to_string(),
        }]
    );
}
