//! Resource kinds that expose a nested tasks endpoint

/// eCloud resources whose tasks are listed under `/{kind}/{id}/tasks`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Instance,
    Network,
    Router,
    Vpc,
    FirewallPolicy,
}

impl ResourceKind {
    /// API path segment for this kind
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Instance => "instances",
            ResourceKind::Network => "networks",
            ResourceKind::Router => "routers",
            ResourceKind::Vpc => "vpcs",
            ResourceKind::FirewallPolicy => "firewall-policies",
        }
    }

    /// Human-readable label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Instance => "instance",
            ResourceKind::Network => "network",
            ResourceKind::Router => "router",
            ResourceKind::Vpc => "VPC",
            ResourceKind::FirewallPolicy => "firewall policy",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
