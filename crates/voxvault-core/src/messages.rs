//! User-facing message catalog (French / Brazilian Portuguese).

use crate::types::Language;

/// Generic retry hint when neither tier produced a confident match.
pub fn not_understood(lang: Language) -> &'static str {
    match lang {
        Language::Fr => "Je n'ai pas compris. Essaie : 'Affiche mon CV' ou 'Télécharge ma lettre'",
        Language::Pt => "Não entendi. Tente: 'Mostrar meu currículo' ou 'Baixar minha carta'",
    }
}

/// Daily remote-tier limit reached. Distinct from the retry hint so the UI
/// can stop prompting for a rephrase.
pub fn quota_exceeded(lang: Language) -> &'static str {
    match lang {
        Language::Fr => "Limite de requêtes IA atteinte pour aujourd'hui.",
        Language::Pt => "Limite de solicitações de IA atingido hoje.",
    }
}

/// The remote exchange failed or returned something unusable.
pub fn remote_error(lang: Language) -> &'static str {
    match lang {
        Language::Fr => "Erreur de connexion à l'assistant IA",
        Language::Pt => "Erro de conexão com o assistente IA",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_message_differs_from_retry_hint() {
        for lang in [Language::Fr, Language::Pt] {
            assert_ne!(not_understood(lang), quota_exceeded(lang));
        }
    }
}
