//! Static trigger-token tables for the local tier.
//!
//! Hand-curated French and Brazilian-Portuguese vocabularies, stored
//! pre-normalized (lowercase, no diacritics). Declaration order is
//! load-bearing: the scorer keeps the first category that reaches the
//! running maximum, so earlier entries win ties.

use voxvault_core::{ActionKind, DocumentTag};

/// Trigger tokens per action, French first, then Brazilian Portuguese.
pub const ACTION_LEXICON: &[(ActionKind, &[&str])] = &[
    (
        ActionKind::Display,
        &[
            "affiche", "afficher", "montre", "montrer", "voir", "ouvre", "ouvrir", "consulte",
            "consulter", "regarde", "mostrar", "ver", "abrir", "exibir", "visualizar",
        ],
    ),
    (
        ActionKind::Download,
        &[
            "telecharge", "telecharger", "telechargement", "download", "baixar", "descarregar",
        ],
    ),
    (
        ActionKind::Edit,
        &[
            "modifie", "modifier", "change", "changer", "edite", "editer", "corrige", "corriger",
            "mets a jour", "editar", "modificar", "alterar", "mudar",
        ],
    ),
    (
        ActionKind::Send,
        &[
            "envoie", "envoyer", "envoi", "mail", "email", "transmet", "transmettre", "partage",
            "partager", "enviar", "mandar", "compartilhar",
        ],
    ),
];

/// Trigger tokens per document category.
pub const DOCUMENT_LEXICON: &[(DocumentTag, &[&str])] = &[
    (
        DocumentTag::Cv,
        &["cv", "curriculum", "curriculo", "resume", "profil"],
    ),
    (
        DocumentTag::Letter,
        &[
            "lettre", "lettres", "motivation", "candidature", "carta", "cartas", "motivacao",
        ],
    ),
    (
        DocumentTag::BenefitAccount,
        &[
            "cpf", "compte formation", "formation professionnelle", "compte personnel",
            "droit formation",
        ],
    ),
    (
        DocumentTag::Certificate,
        &[
            "attestation", "certificat", "diplome", "formation", "geste", "gestes", "posture",
            "postures", "certificado", "formacao",
        ],
    ),
    (
        DocumentTag::EmploymentRegistration,
        &[
            "pole", "emploi", "pole emploi", "france travail", "chomage", "inscription",
            "identifiant pe",
        ],
    ),
];
