//! Mapping from abstract document tags to concrete vault identifiers.

use voxvault_core::DocumentTag;

const DOCUMENT_IDS: &[(DocumentTag, &str)] = &[
    (DocumentTag::Cv, "cv-1"),
    (DocumentTag::Letter, "letter-1"),
    (DocumentTag::BenefitAccount, "benefit-account-1"),
    (DocumentTag::Certificate, "certificate-1"),
    (DocumentTag::EmploymentRegistration, "employment-registration-1"),
];

/// Concrete document identifier for a tag, or `None` when the vault holds
/// no matching document. Pure lookup, no side effects.
pub fn map_to_document_id(doc_type: DocumentTag) -> Option<&'static str> {
    DOCUMENT_IDS
        .iter()
        .find(|(tag, _)| *tag == doc_type)
        .map(|(_, id)| *id)
}
