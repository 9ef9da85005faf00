//! Localization using the Fluent system.
//!
//! Translation files are embedded at build time from `assets/i18n/`, one
//! `<locale>.ftl` file per language. The active locale is resolved from the
//! user settings, then the operating system, then `en-US`.

use std::collections::HashMap;

use {
    fluent_bundle::{FluentArgs, FluentBundle, FluentResource},
    rust_embed::RustEmbed,
    tracing::{debug, warn},
    unic_langid::LanguageIdentifier,
};

use crate::error::I18nError;

/// Locale used when neither the settings nor the system pick an available one.
pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Translations;

/// Loaded translation bundles and the active locale.
pub struct Localizer {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Localizer {
    /// Loads all embedded translations and resolves the active locale.
    ///
    /// # Arguments
    ///
    /// * `requested` - Language from the user settings, if any
    ///
    /// # Errors
    ///
    /// Returns `I18nError` if an embedded translation file is invalid.
    pub fn new(requested: Option<&str>) -> Result<Self, I18nError> {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Translations::iter() {
            let Some(locale_str) = file.strip_suffix(".ftl") else {
                continue;
            };
            let Some(content) = Translations::get(&file) else {
                continue;
            };
            let locale: LanguageIdentifier = locale_str
                .parse()
                .map_err(|_| I18nError::InvalidLocale(locale_str.to_string()))?;

            let source = decode_resource(&file, content.data.into_owned())?;
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                I18nError::InvalidResource {
                    file: file.to_string(),
                    reason: format!("{errors:?}"),
                }
            })?;

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| I18nError::InvalidResource {
                    file: file.to_string(),
                    reason: format!("{errors:?}"),
                })?;

            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale =
            resolve_locale(requested, sys_locale::get_locale(), &available_locales);
        debug!("Using locale {current_locale}");

        Ok(Self {
            bundles,
            current_locale,
        })
    }

    /// Gets the active locale.
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Translates a message without arguments.
    ///
    /// Missing keys render as `MISSING: <key>` so they stand out on screen.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates a message with named string arguments.
    pub fn tr_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.to_string());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let pattern = self
            .bundles
            .get(&self.current_locale)
            .and_then(|bundle| bundle.get_message(key).map(|message| (bundle, message)))
            .and_then(|(bundle, message)| message.value().map(|pattern| (bundle, pattern)));

        if let Some((bundle, pattern)) = pattern {
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
            warn!("Failed to format message '{key}': {errors:?}");
        }
        format!("MISSING: {key}")
    }
}

/// Decodes an embedded translation file.
///
/// # Errors
///
/// Returns `I18nError::InvalidResource` if the file is not valid UTF-8.
fn decode_resource(file: &str, bytes: Vec<u8>) -> Result<String, I18nError> {
    String::from_utf8(bytes).map_err(|e| I18nError::InvalidResource {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

/// Picks the active locale.
///
/// Order: the requested language, then the system language, each matched
/// exactly first and then by language subtag; otherwise `DEFAULT_LOCALE`.
fn resolve_locale(
    requested: Option<&str>,
    system: Option<String>,
    available: &[LanguageIdentifier],
) -> LanguageIdentifier {
    let candidates = requested
        .map(str::to_string)
        .into_iter()
        .chain(system)
        .filter_map(|candidate| candidate.parse::<LanguageIdentifier>().ok());

    for candidate in candidates {
        if available.contains(&candidate) {
            return candidate;
        }
        if let Some(same_language) = available
            .iter()
            .find(|locale| locale.language == candidate.language)
        {
            return same_language.clone();
        }
    }

    DEFAULT_LOCALE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default())
}
