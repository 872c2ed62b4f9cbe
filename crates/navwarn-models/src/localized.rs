//! Multilingual description support.
//!
//! Every entity that carries translated text (messages, parts, areas,
//! categories) stores a list of per-language description records. The
//! [`LocalizedDesc`] trait is implemented by those records and the
//! [`Localized`] trait by the entities owning them.

use crate::error::ModelError;

/// A description record bound to a single language.
pub trait LocalizedDesc {
    /// The ISO 639-1 language code of this record (e.g. `"en"`, `"da"`).
    fn lang(&self) -> &str;

    /// Whether the record carries any text at all.
    ///
    /// Records without content are ignored by language resolution.
    fn has_content(&self) -> bool {
        true
    }
}

/// An entity owning a list of [`LocalizedDesc`] records.
pub trait Localized {
    /// The description record type.
    type Desc: LocalizedDesc;

    /// All description records, in storage order.
    fn descs(&self) -> &[Self::Desc];

    /// Return the record for exactly `lang`, if present.
    fn desc(&self, lang: &str) -> Option<&Self::Desc> {
        self.descs().iter().find(|d| d.lang() == lang)
    }
}

/// Validate that a string is a two-letter lowercase language code.
///
/// # Examples
///
/// ```
/// use navwarn_models::validate_lang;
///
/// assert!(validate_lang("da").is_ok());
/// assert!(validate_lang("DA").is_err());
/// assert!(validate_lang("eng").is_err());
/// ```
pub fn validate_lang(lang: &str) -> Result<(), ModelError> {
    if lang.len() != 2 || !lang.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(ModelError::InvalidLanguage {
            value: lang.to_string(),
            reason: "must be exactly 2 lowercase ASCII letters".to_string(),
        });
    }
    Ok(())
}

/// Reject description lists where a language occurs more than once.
pub(crate) fn check_unique_langs<D: LocalizedDesc>(
    entity: &str,
    descs: &[D],
) -> Result<(), ModelError> {
    for (i, desc) in descs.iter().enumerate() {
        validate_lang(desc.lang())?;
        if descs[..i].iter().any(|d| d.lang() == desc.lang()) {
            return Err(ModelError::DuplicateDescription {
                entity: entity.to_string(),
                lang: desc.lang().to_string(),
            });
        }
    }
    Ok(())
}
