//! Groq chat-completions backend for the remote tier.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use voxvault_core::{
    messages, ActionKind, DocumentTag, Error, Language, RemoteResolution, Result,
};

use crate::RemoteResolver;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_TOKENS: usize = 150;
const TEMPERATURE: f64 = 0.3;

/// Fixed instruction payload constraining the service to the closed command
/// vocabulary and the exact three-field JSON reply shape.
const SYSTEM_PROMPT: &str = r#"Tu es l'assistant vocal d'un coffre personnel de documents administratifs.

Tu peux UNIQUEMENT effectuer ces actions :
- display : afficher un document
- download : télécharger un document
- edit : modifier un document (seulement le CV et la lettre)
- send : préparer l'envoi par email

Documents disponibles :
- cv : curriculum vitae (modifiable)
- letter : lettre de motivation (modifiable)
- benefitAccount : compte personnel de formation (lecture seule)
- certificate : attestation de formation (lecture seule)
- employmentRegistration : inscription à l'agence pour l'emploi (lecture seule)

IMPORTANT : Réponds UNIQUEMENT en JSON valide, sans texte avant ou après :
{ "action": "display|download|edit|send|null", "docType": "cv|letter|benefitAccount|certificate|employmentRegistration|null", "message": "phrase courte pour l'utilisateur" }

Si tu ne comprends pas ou si l'action n'est pas permise :
{ "action": null, "docType": null, "message": "explication courte" }"#;

/// Remote resolver backed by Groq's OpenAI-compatible API.
pub struct GroqResolver {
    client: Client,
    api_key: String,
    model: String,
}

impl GroqResolver {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Remote(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    async fn request_completion(&self, text: &str, lang: Language) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("[Langue: {}] {}", lang, text) },
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
            "response_format": { "type": "json_object" },
        });

        debug!(
            "remote resolution request: model={}, lang={}",
            self.model, lang
        );

        let response = self
            .client
            .post(GROQ_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Remote(format!("HTTP {}: {}", status, body)));
        }

        let reply: CompletionReply = response
            .json()
            .await
            .map_err(|e| Error::Remote(e.to_string()))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Remote("missing choices".into()))
    }
}

#[async_trait]
impl RemoteResolver for GroqResolver {
    async fn resolve_remote(&self, text: &str, lang: Language) -> RemoteResolution {
        match self.request_completion(text, lang).await {
            Ok(content) => parse_reply(&content, lang),
            Err(e) => {
                warn!("remote resolution failed: {}", e);
                RemoteResolution::misunderstood(messages::remote_error(lang))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

/// The three-field reply shape the instruction payload demands.
#[derive(Debug, Deserialize)]
struct CommandReply {
    action: Option<String>,
    #[serde(rename = "docType")]
    doc_type: Option<String>,
    message: Option<String>,
}

/// Validate a reply body against the closed vocabularies. Malformed bodies
/// and out-of-vocabulary values degrade to `understood: false` — a wrong
/// answer from the service must never escalate past this point.
fn parse_reply(content: &str, lang: Language) -> RemoteResolution {
    let reply: CommandReply = match serde_json::from_str(content.trim()) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("remote reply not parseable: {}", e);
            return RemoteResolution::misunderstood(messages::remote_error(lang));
        }
    };

    let action = match parse_slot(reply.action.as_deref(), ActionKind::parse) {
        Ok(action) => action,
        Err(value) => {
            warn!("remote reply action out of vocabulary: {:?}", value);
            return RemoteResolution::misunderstood(messages::remote_error(lang));
        }
    };
    let doc_type = match parse_slot(reply.doc_type.as_deref(), DocumentTag::parse) {
        Ok(doc) => doc,
        Err(value) => {
            warn!("remote reply docType out of vocabulary: {:?}", value);
            return RemoteResolution::misunderstood(messages::remote_error(lang));
        }
    };

    let understood = action.is_some() && doc_type.is_some();
    let message = reply
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| messages::not_understood(lang).to_string());

    RemoteResolution {
        action,
        doc_type,
        message,
        understood,
    }
}

/// `null`, the string `"null"` and the empty string are the null-equivalents
/// the contract allows; any other value must be a closed-set member.
fn parse_slot<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> std::result::Result<Option<T>, String> {
    match value {
        None | Some("null") | Some("") => Ok(None),
        Some(s) => parse(s).map(Some).ok_or_else(|| s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_reply() {
        let r = parse_reply(
            r#"{"action":"display","docType":"cv","message":"Voici ton CV"}"#,
            Language::Fr,
        );
        assert_eq!(r.action, Some(ActionKind::Display));
        assert_eq!(r.doc_type, Some(DocumentTag::Cv));
        assert_eq!(r.message, "Voici ton CV");
        assert!(r.understood);
    }

    #[test]
    fn null_fields_mean_not_understood() {
        let r = parse_reply(
            r#"{"action":null,"docType":null,"message":"Je ne peux pas faire ça"}"#,
            Language::Fr,
        );
        assert_eq!(r.action, None);
        assert_eq!(r.doc_type, None);
        assert_eq!(r.message, "Je ne peux pas faire ça");
        assert!(!r.understood);
    }

    #[test]
    fn null_string_counts_as_null() {
        let r = parse_reply(
            r#"{"action":"null","docType":"null","message":"?"}"#,
            Language::Pt,
        );
        assert_eq!(r.action, None);
        assert_eq!(r.doc_type, None);
        assert!(!r.understood);
    }

    #[test]
    fn out_of_vocabulary_doc_type_degrades() {
        let r = parse_reply(
            r#"{"action":"display","docType":"passport","message":"ok"}"#,
            Language::Fr,
        );
        assert!(!r.understood);
        assert_eq!(r.action, None);
        assert_eq!(r.doc_type, None);
        assert_eq!(r.message, messages::remote_error(Language::Fr));
    }

    #[test]
    fn out_of_vocabulary_action_degrades() {
        let r = parse_reply(
            r#"{"action":"burn","docType":"cv","message":"ok"}"#,
            Language::Pt,
        );
        assert!(!r.understood);
        assert_eq!(r.message, messages::remote_error(Language::Pt));
    }

    #[test]
    fn malformed_body_degrades() {
        for body in ["not json at all", "[]", r#"{"action":42}"#, ""] {
            let r = parse_reply(body, Language::Fr);
            assert!(!r.understood);
            assert_eq!(r.message, messages::remote_error(Language::Fr));
        }
    }

    #[test]
    fn partial_reply_is_not_understood() {
        let r = parse_reply(r#"{"action":"edit","docType":null,"message":"?"}"#, Language::Fr);
        assert_eq!(r.action, Some(ActionKind::Edit));
        assert_eq!(r.doc_type, None);
        assert!(!r.understood);
    }

    #[test]
    fn missing_message_falls_back_to_retry_hint() {
        let r = parse_reply(r#"{"action":null,"docType":null,"message":null}"#, Language::Pt);
        assert_eq!(r.message, messages::not_understood(Language::Pt));
    }

    /// The instruction payload must name every wire value it constrains the
    /// service to.
    #[test]
    fn prompt_names_the_whole_vocabulary() {
        for action in [
            ActionKind::Display,
            ActionKind::Download,
            ActionKind::Edit,
            ActionKind::Send,
        ] {
            assert!(SYSTEM_PROMPT.contains(&action.to_string()));
        }
        for doc in [
            DocumentTag::Cv,
            DocumentTag::Letter,
            DocumentTag::BenefitAccount,
            DocumentTag::Certificate,
            DocumentTag::EmploymentRegistration,
        ] {
            assert!(SYSTEM_PROMPT.contains(&doc.to_string()));
        }
    }
}
