//! Language resolution with a fixed fallback chain.

use navwarn_models::{Localized, LocalizedDesc};

/// Language used when the requested one is unavailable.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Selects the best-matching description for a requested language.
///
/// The chain is the requested language followed by [`FALLBACK_LANGUAGE`].
/// Descriptions without content are skipped.
///
/// # Examples
///
/// ```
/// use navwarn_models::{Area, AreaDesc};
/// use navwarn_s124::LanguageResolver;
///
/// let mut area = Area::named(1, "en", "Kattegat");
/// area.descs.push(AreaDesc { lang: "da".into(), name: "Kattegat (da)".into() });
///
/// let resolver = LanguageResolver::new("de");
/// assert_eq!(resolver.resolve(&area).map(|d| d.lang.as_str()), Some("en"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageResolver {
    chain: Vec<String>,
}

impl LanguageResolver {
    /// Resolver for `lang` with the standard fallback.
    pub fn new(lang: &str) -> Self {
        let mut chain = vec![lang.to_string()];
        if lang != FALLBACK_LANGUAGE {
            chain.push(FALLBACK_LANGUAGE.to_string());
        }
        Self { chain }
    }

    /// The requested language.
    pub fn language(&self) -> &str {
        &self.chain[0]
    }

    /// The languages tried, in order.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// The first description with content along the chain.
    pub fn resolve<'a, L: Localized>(&self, entity: &'a L) -> Option<&'a L::Desc> {
        self.chain.iter().find_map(|lang| {
            entity
                .descs()
                .iter()
                .find(|d| d.lang() == lang && d.has_content())
        })
    }

    /// The description in exactly the requested language, if it has content.
    pub fn exact<'a, L: Localized>(&self, entity: &'a L) -> Option<&'a L::Desc> {
        entity
            .desc(self.language())
            .filter(|d| d.has_content())
    }
}
