//! Command vocabulary and resolution result types.
//!
//! The wire names (camelCase, `docType`, `usedRemote`) match what the vault
//! frontend and the remote reply contract use.

use serde::{Deserialize, Serialize};

/// Language of the captured transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fr,
    Pt,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Fr => write!(f, "fr"),
            Language::Pt => write!(f, "pt"),
        }
    }
}

/// Action requested on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Display,
    Download,
    Edit,
    Send,
}

impl ActionKind {
    /// Strict closed-set parse. Anything else — including the literal
    /// `"null"` the remote contract allows — yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "display" => Some(Self::Display),
            "download" => Some(Self::Download),
            "edit" => Some(Self::Edit),
            "send" => Some(Self::Send),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Display => write!(f, "display"),
            ActionKind::Download => write!(f, "download"),
            ActionKind::Edit => write!(f, "edit"),
            ActionKind::Send => write!(f, "send"),
        }
    }
}

/// Document category a command refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentTag {
    Cv,
    Letter,
    BenefitAccount,
    Certificate,
    EmploymentRegistration,
}

impl DocumentTag {
    /// Strict closed-set parse, same policy as [`ActionKind::parse`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cv" => Some(Self::Cv),
            "letter" => Some(Self::Letter),
            "benefitAccount" => Some(Self::BenefitAccount),
            "certificate" => Some(Self::Certificate),
            "employmentRegistration" => Some(Self::EmploymentRegistration),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentTag::Cv => write!(f, "cv"),
            DocumentTag::Letter => write!(f, "letter"),
            DocumentTag::BenefitAccount => write!(f, "benefitAccount"),
            DocumentTag::Certificate => write!(f, "certificate"),
            DocumentTag::EmploymentRegistration => write!(f, "employmentRegistration"),
        }
    }
}

/// Outcome of the local keyword tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalResolution {
    pub action: Option<ActionKind>,
    #[serde(rename = "docType")]
    pub doc_type: Option<DocumentTag>,
    /// Total keyword hits across both tables.
    pub confidence: u32,
    pub understood: bool,
}

/// Outcome of the remote fallback tier, after schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteResolution {
    pub action: Option<ActionKind>,
    #[serde(rename = "docType")]
    pub doc_type: Option<DocumentTag>,
    /// Short human-readable message for the user.
    pub message: String,
    pub understood: bool,
}

impl RemoteResolution {
    /// A benign "not understood" outcome carrying a message.
    pub fn misunderstood(message: impl Into<String>) -> Self {
        Self {
            action: None,
            doc_type: None,
            message: message.into(),
            understood: false,
        }
    }
}

/// Why a resolution came back unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnresolvedReason {
    /// Remote tier gated purely by the daily budget.
    QuotaExceeded,
    /// Neither tier produced a confident match.
    NotUnderstood,
    /// Remote tier gated by configuration or connectivity, not budget.
    RemoteUnavailable,
}

/// Final outcome of one resolution pass. Created fresh per call, never
/// mutated, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ResolvedCommand {
    Understood {
        action: ActionKind,
        #[serde(rename = "docType")]
        doc_type: DocumentTag,
        #[serde(rename = "usedRemote")]
        used_remote: bool,
    },
    Unresolved {
        reason: UnresolvedReason,
        message: String,
        #[serde(rename = "usedRemote")]
        used_remote: bool,
    },
}

impl ResolvedCommand {
    /// Whether this pass consumed a remote-tier call.
    pub fn used_remote(&self) -> bool {
        match self {
            ResolvedCommand::Understood { used_remote, .. } => *used_remote,
            ResolvedCommand::Unresolved { used_remote, .. } => *used_remote,
        }
    }
}
