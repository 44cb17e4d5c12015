//! Merge rules for layered configuration.

pub(super) mod merge_policy;
