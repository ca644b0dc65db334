//! Stack variants and the property keys each one reads

use crate::context::{EXTRA_CONTEXTS_KEY, STAGE_CONTEXT_PATH_KEY, STAGE_KEY};

/// Keys every stack variant reads from its resolved context.
pub const COMMON_PROPERTY_KEYS: &[&str] = &[
    "name",
    STAGE_KEY,
    "domainName",
    "subDomain",
    EXTRA_CONTEXTS_KEY,
    STAGE_CONTEXT_PATH_KEY,
    "skipStageForARecords",
    "resourcePrefix",
    "resourceSuffix",
];

const AWS_PROPERTY_KEYS: &[&str] = &["region"];
const AZURE_PROPERTY_KEYS: &[&str] = &["resourceGroupName", "location"];
const CLOUDFLARE_PROPERTY_KEYS: &[&str] = &["accountId"];

/// The provider ecosystem a stack targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackKind {
    Aws,
    Azure,
    Cloudflare,
}

impl StackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Azure => "azure",
            Self::Cloudflare => "cloudflare",
        }
    }

    /// Keys specific to this variant, on top of [`COMMON_PROPERTY_KEYS`].
    pub fn provider_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Aws => AWS_PROPERTY_KEYS,
            Self::Azure => AZURE_PROPERTY_KEYS,
            Self::Cloudflare => CLOUDFLARE_PROPERTY_KEYS,
        }
    }

    /// All keys this variant declares, common keys first.
    pub fn property_keys(&self) -> Vec<&'static str> {
        COMMON_PROPERTY_KEYS
            .iter()
            .chain(self.provider_keys())
            .copied()
            .collect()
    }
}

impl std::fmt::Display for StackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
