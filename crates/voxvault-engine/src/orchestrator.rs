//! Tiered resolution policy: local first, then the gated remote fallback.

use std::sync::Arc;

use tracing::{debug, info};

use voxvault_core::{
    messages, EngineConfig, Language, LocalResolution, ResolvedCommand, UnresolvedReason,
};
use voxvault_lexicon::score_local;
use voxvault_quota::{QuotaState, QuotaStore};
use voxvault_remote::RemoteResolver;

use crate::connectivity::{AssumeOnline, Connectivity};

/// Sequences normalizer → scorer → quota gate → remote fallback and emits
/// one final outcome per transcript.
pub struct Orchestrator<R: RemoteResolver> {
    config: EngineConfig,
    quota: Arc<dyn QuotaStore>,
    connectivity: Arc<dyn Connectivity>,
    remote: R,
}

impl<R: RemoteResolver> Orchestrator<R> {
    /// Create an orchestrator that assumes connectivity; the host shell owns
    /// the real probe.
    pub fn new(config: EngineConfig, quota: Arc<dyn QuotaStore>, remote: R) -> Self {
        Self::with_connectivity(config, quota, remote, Arc::new(AssumeOnline))
    }

    /// Create with an explicit connectivity probe.
    pub fn with_connectivity(
        config: EngineConfig,
        quota: Arc<dyn QuotaStore>,
        remote: R,
        connectivity: Arc<dyn Connectivity>,
    ) -> Self {
        Self {
            config,
            quota,
            connectivity,
            remote,
        }
    }

    /// Resolve a transcript into a command.
    ///
    /// Local scoring always runs first: it is free, deterministic and works
    /// offline. The remote tier is strictly a rate-limited upgrade path —
    /// this ordering is the only defense against unbounded external-service
    /// usage. The quota check before dispatch and the increment after
    /// settlement bracket the single await point; no other quota access
    /// happens in between, and nothing is committed if the caller abandons
    /// the call mid-flight.
    pub async fn resolve(&self, transcript: &str, lang: Language) -> ResolvedCommand {
        let local = score_local(transcript);
        debug!(
            "local tier: action={:?}, doc_type={:?}, confidence={}",
            local.action, local.doc_type, local.confidence
        );

        if let LocalResolution {
            action: Some(action),
            doc_type: Some(doc_type),
            understood: true,
            ..
        } = local
        {
            return ResolvedCommand::Understood {
                action,
                doc_type,
                used_remote: false,
            };
        }

        // Quota exhaustion is reported as its own reason even when the tier
        // is also unconfigured or offline; the UI suppresses retry prompts
        // on that one.
        let quota = self.quota.peek();
        if quota.count >= self.config.daily_quota {
            info!(
                "remote tier gated: daily quota exhausted ({}/{})",
                quota.count, self.config.daily_quota
            );
            return ResolvedCommand::Unresolved {
                reason: UnresolvedReason::QuotaExceeded,
                message: messages::quota_exceeded(lang).to_string(),
                used_remote: false,
            };
        }

        if !self.config.remote_configured() || !self.connectivity.is_online() {
            debug!("remote tier gated: credential or connectivity missing");
            return ResolvedCommand::Unresolved {
                reason: UnresolvedReason::RemoteUnavailable,
                message: messages::not_understood(lang).to_string(),
                used_remote: false,
            };
        }

        let remote = self.remote.resolve_remote(transcript, lang).await;
        // An attempted remote call counts against quota whatever its
        // outcome; the increment happens only once it has settled.
        let state = self.quota.increment();
        info!(
            "remote tier consulted: understood={}, quota={}/{}",
            remote.understood, state.count, self.config.daily_quota
        );

        match (remote.action, remote.doc_type, remote.understood) {
            (Some(action), Some(doc_type), true) => ResolvedCommand::Understood {
                action,
                doc_type,
                used_remote: true,
            },
            _ => ResolvedCommand::Unresolved {
                reason: UnresolvedReason::NotUnderstood,
                message: remote.message,
                used_remote: true,
            },
        }
    }

    /// Snapshot of today's quota consumption.
    pub fn quota_state(&self) -> QuotaState {
        self.quota.peek()
    }
}
