//! Typed stack properties built from a [`ResolvedProperties`](super::ResolvedProperties) snapshot
//!
//! Every field is optional: absent keys stay `None` and defaults are left
//! to the constructs that consume them.

use serde::{Deserialize, Serialize};

/// Properties shared by every stack variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonStackProps {
    pub name: Option<String>,
    pub stage: Option<String>,
    pub domain_name: Option<String>,
    pub sub_domain: Option<String>,
    pub extra_contexts: Option<Vec<String>>,
    pub stage_context_path: Option<String>,
    pub skip_stage_for_a_records: Option<bool>,
    pub resource_prefix: Option<String>,
    pub resource_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsStackProps {
    #[serde(flatten)]
    pub common: CommonStackProps,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureStackProps {
    #[serde(flatten)]
    pub common: CommonStackProps,
    pub resource_group_name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudflareStackProps {
    #[serde(flatten)]
    pub common: CommonStackProps,
    pub account_id: Option<String>,
}
