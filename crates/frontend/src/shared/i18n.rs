//! Localized UI strings.
//!
//! Messages live in Fluent files under `assets/i18n/` and are embedded at
//! compile time. The active locale is picked once at startup from the browser
//! language; lookups fall back to en-US and finally to the message key.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

const EN_US_FTL: &str = include_str!("../../assets/i18n/en-US.ftl");
const RU_RU_FTL: &str = include_str!("../../assets/i18n/ru-RU.ftl");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current: LanguageIdentifier,
}

impl I18n {
    /// Builds the bundles and selects the locale closest to `requested`.
    pub fn new(requested: Option<&str>) -> Self {
        let mut bundles = HashMap::new();
        for (locale, source) in [(langid!("en-US"), EN_US_FTL), (langid!("ru-RU"), RU_RU_FTL)] {
            bundles.insert(locale.clone(), build_bundle(locale, source));
        }

        let available: Vec<LanguageIdentifier> = bundles.keys().cloned().collect();
        let current = requested
            .and_then(|tag| resolve_locale(tag, &available))
            .unwrap_or_else(default_locale);
        log::debug!("i18n: requested {:?}, using {}", requested, current);

        Self { bundles, current }
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.current
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(&self.current, key)
            .or_else(|| self.format(&default_locale(), key))
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            log::warn!("i18n: failed to format '{}' for {}: {:?}", key, locale, errors);
            None
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Language reported by the browser, e.g. `"ru-RU"` or `"en"`.
pub fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

fn default_locale() -> LanguageIdentifier {
    langid!("en-US")
}

fn build_bundle(locale: LanguageIdentifier, source: &str) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source.to_string()).unwrap_or_else(|(resource, errors)| {
        log::error!("i18n: {} resource has parse errors: {:?}", locale, errors);
        resource
    });
    let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        log::error!("i18n: {} resource has duplicate messages: {:?}", locale, errors);
    }
    bundle
}

/// Exact match first, then the first bundle sharing the language subtag.
fn resolve_locale(tag: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let requested: LanguageIdentifier = tag.parse().ok()?;
    if available.contains(&requested) {
        return Some(requested);
    }
    available
        .iter()
        .find(|locale| locale.language == requested.language)
        .cloned()
}
