//! Connectivity seam for remote-tier gating.

/// Answers whether the network is currently reachable. Only the host shell
/// can really know, so the verdict is injected rather than probed here.
pub trait Connectivity: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Default that always reports online; gating then rests on the credential
/// and quota checks alone.
pub struct AssumeOnline;

impl Connectivity for AssumeOnline {
    fn is_online(&self) -> bool {
        true
    }
}
