#![forbid(unsafe_code)]

//! Flat-list to forest reconstruction.
//!
//! Two O(n) passes over the input:
//!
//! 1. allocate one arena node per record and fill the id and name indexes;
//! 2. resolve each record's manager reference through the name index and
//!    link it under its manager, or append it to the root list.
//!
//! Manager references are resolved by `legal_name` (exact match). With
//! duplicate names the first-encountered record wins, deterministically —
//! a known fragility of the input format, kept rather than papered over.
//!
//! There is no cycle breaking. Each node is appended to at most one
//! children list, so reports-to cycles cannot produce tree cycles; they
//! leave every participant off the root list instead, unreachable from the
//! rendered forest. Which shape the cycle collapses into depends on input
//! order — an accepted ambiguity of the source data model.
//!
//! Nothing here is fatal: malformed records are flagged and logged, and the
//! forest still contains one node per input record.

use crate::forest::{Forest, NodeIdx, NodeSlot};
use orgchart_core::record::{EmployeeId, EmployeeRecord, RecordFlags};
use orgchart_core::{debug, warn};
use std::collections::HashMap;

/// Build the manager/report forest from flat records.
///
/// Every record yields exactly one node, in input order. A record becomes a
/// root when its manager reference is empty, absent, or names no record in
/// the input.
#[must_use]
pub fn build_hierarchy(records: Vec<EmployeeRecord>) -> Forest {
    let count = records.len();
    let mut slots: Vec<NodeSlot> = Vec::with_capacity(count);
    let mut by_id: HashMap<EmployeeId, NodeIdx> = HashMap::with_capacity(count);
    let mut by_name: HashMap<String, NodeIdx> = HashMap::with_capacity(count);

    for (i, record) in records.into_iter().enumerate() {
        let idx = NodeIdx(i);
        let mut flags = RecordFlags::empty();

        if record.employee_id.is_empty() {
            flags |= RecordFlags::MISSING_ID;
            warn!(
                legal_name = %record.legal_name,
                "employee record has no id; node is unreachable through the id index"
            );
        } else if by_id.contains_key(&record.employee_id) {
            // First record keeps the id-index entry, same as the name index.
            warn!(id = %record.employee_id, "duplicate employee id");
        } else {
            by_id.insert(record.employee_id.clone(), idx);
        }

        if record.legal_name.is_empty() {
            flags |= RecordFlags::MISSING_NAME;
            warn!(id = %record.employee_id, "employee record has no legal name");
        } else if by_name.contains_key(&record.legal_name) {
            flags |= RecordFlags::DUPLICATE_NAME;
            warn!(
                legal_name = %record.legal_name,
                "duplicate legal name; manager references resolve to the first record"
            );
        } else {
            by_name.insert(record.legal_name.clone(), idx);
        }

        slots.push(NodeSlot {
            record,
            children: Vec::new(),
            parent: None,
            flags,
        });
    }

    let mut roots: Vec<NodeIdx> = Vec::new();
    for i in 0..slots.len() {
        let idx = NodeIdx(i);
        let manager_name = slots[i].record.manager_name().map(str::to_string);
        match manager_name {
            None => roots.push(idx),
            Some(name) => match by_name.get(&name).copied() {
                Some(manager) => {
                    slots[manager.0].children.push(idx);
                    slots[i].parent = Some(manager);
                }
                None => {
                    slots[i].flags |= RecordFlags::UNRESOLVED_MANAGER;
                    warn!(
                        legal_name = %slots[i].record.legal_name,
                        manager = %name,
                        "manager reference resolves to no record; treating as root"
                    );
                    roots.push(idx);
                }
            },
        }
    }

    debug!(nodes = count, roots = roots.len(), "hierarchy built");
    let nodes = slots.into_iter().map(NodeSlot::into_node).collect();
    Forest::from_parts(nodes, roots, by_id)
}
