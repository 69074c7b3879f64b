//! Integration tests for compliance hardening.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use optimizer::optimize::{OptimizationKind, Optimizer};
use optimizer::parse::types::{ComplianceLevel, NodeKind};
use serde_json::json;

#[test]
fn critical_node_gets_audit_trail_and_validator() {
    let wf = workflow(
        vec![with_compliance(
            node("x", "action", &[("cmd", json!("submit-claim"))]),
            compliance(ComplianceLevel::Critical, Some(false)),
        )],
        vec![],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    let x = find(&out.nodes, "x");
    assert_eq!(
        x.data.compliance.as_ref().unwrap().audit_trail,
        Some(true)
    );

    let records = records_of(&out, OptimizationKind::ComplianceEnhancement);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].nodes_affected, vec!["x".to_string()]);
    assert_eq!(
        records[1].nodes_affected,
        vec!["x".to_string(), "x-validation".into()]
    );
    insta::assert_snapshot!(
        records[0].description.as_str(),
        @"Enabled audit trail on critical node 'x'"
    );
    insta::assert_snapshot!(
        records[1].description.as_str(),
        @"Added compliance validation after 'x'"
    );

    let validator = find(&out.nodes, "x-validation");
    assert_eq!(validator.kind, NodeKind::DataValidate);
    assert_eq!(
        validator.data.config.get("rules"),
        Some(&json!(["hipaa", "fda", "gdpr"]))
    );
    assert_eq!(validator.data.config.get("strictMode"), Some(&json!(true)));

    let meta = validator.data.compliance.as_ref().unwrap();
    assert_eq!(meta.level, ComplianceLevel::Critical);
    assert_eq!(
        meta.requirements,
        vec!["data-encryption", "access-control", "audit-trail"]
    );
    assert_eq!(meta.validations.len(), 3);
    assert!(meta.validations.iter().all(|v| !v.validated));
    assert_eq!(meta.audit_trail, Some(true));
    assert_eq!(meta.data_retention_days, Some(2555));

    assert!(
        out.edges
            .iter()
            .any(|e| e.source == "x" && e.target == "x-validation"),
        "validator must be wired to its source"
    );
    assert_edges_well_formed(&out);
}

#[test]
fn basic_level_is_untouched() {
    let wf = workflow(
        vec![with_compliance(
            node("x", "action", &[("cmd", json!("log"))]),
            compliance(ComplianceLevel::Basic, None),
        )],
        vec![],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    assert_eq!(out.nodes.len(), 1);
    assert!(records_of(&out, OptimizationKind::ComplianceEnhancement).is_empty());
}

#[test]
fn standard_level_gets_validator_but_no_audit_record() {
    let wf = workflow(
        vec![with_compliance(
            node("x", "research-agent", &[("query", json!("medicare"))]),
            compliance(ComplianceLevel::Standard, None),
        )],
        vec![],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    let records = records_of(&out, OptimizationKind::ComplianceEnhancement);
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].nodes_affected,
        vec!["x".to_string(), "x-validation".into()]
    );
    let x = find(&out.nodes, "x");
    assert_eq!(x.data.compliance.as_ref().unwrap().audit_trail, None);
}

#[test]
fn critical_with_audit_already_on_skips_the_audit_record() {
    let wf = workflow(
        vec![with_compliance(
            node("x", "action", &[("cmd", json!("submit"))]),
            compliance(ComplianceLevel::Critical, Some(true)),
        )],
        vec![],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    let records = records_of(&out, OptimizationKind::ComplianceEnhancement);
    assert_eq!(records.len(), 1, "only the validator synthesis remains");
}

#[test]
fn nodes_without_compliance_metadata_are_skipped() {
    let wf = workflow(
        vec![node("x", "action", &[("cmd", json!("noop"))])],
        vec![],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();
    assert_eq!(out.nodes.len(), 1);
    assert!(records_of(&out, OptimizationKind::ComplianceEnhancement).is_empty());
}

#[test]
fn synthesized_ids_avoid_collisions() {
    let wf = workflow(
        vec![
            with_compliance(
                node("x", "action", &[("cmd", json!("submit"))]),
                compliance(ComplianceLevel::Standard, None),
            ),
            node("x-validation", "action", &[("cmd", json!("unrelated"))]),
        ],
        vec![],
    );

    let out = Optimizer::new().optimize(&wf).unwrap();

    assert!(has_node(&out.nodes, "x-validation-2"));
    let mut ids: Vec<&str> = out.nodes.iter().map(|n| n.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), out.nodes.len(), "node ids must stay unique");
}
