use std::env;

use anyhow::Result;

use crate::fetch::article::SourceSpec;
use crate::similarity::decision::DEFAULT_THRESHOLD;

/// Central configuration loaded from environment variables.
///
/// Everything has a working default (the two Persian news sites the tool
/// was built around), so `hamta compare` runs out of the box. The .env
/// file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// First news source (homepage URL + CSS selectors)
    pub source_a: SourceSpec,
    /// Second news source
    pub source_b: SourceSpec,
    /// Similarity threshold in [0, 1]; validated by `require_threshold`
    pub threshold: f64,
    /// Language of the normalizer profile (currently only "persian")
    pub language: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let threshold = match env::var("HAMTA_THRESHOLD") {
            Ok(raw) => raw
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("HAMTA_THRESHOLD is not a number: {raw:?}"))?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        Ok(Self {
            source_a: SourceSpec {
                name: env::var("HAMTA_SOURCE_A_NAME").unwrap_or_else(|_| "asriran".to_string()),
                base_url: env::var("HAMTA_SOURCE_A_URL")
                    .unwrap_or_else(|_| "https://www.asriran.com".to_string()),
                link_selector: env::var("HAMTA_SOURCE_A_LINK_SELECTOR")
                    .unwrap_or_else(|_| ".tab-pane.fade.in.active .title5".to_string()),
                body_selector: env::var("HAMTA_SOURCE_A_BODY_SELECTOR")
                    .unwrap_or_else(|_| ".body".to_string()),
            },
            source_b: SourceSpec {
                name: env::var("HAMTA_SOURCE_B_NAME").unwrap_or_else(|_| "tabnak".to_string()),
                base_url: env::var("HAMTA_SOURCE_B_URL")
                    .unwrap_or_else(|_| "https://www.tabnak.ir".to_string()),
                link_selector: env::var("HAMTA_SOURCE_B_LINK_SELECTOR")
                    .unwrap_or_else(|_| ".title5".to_string()),
                body_selector: env::var("HAMTA_SOURCE_B_BODY_SELECTOR")
                    .unwrap_or_else(|_| ".body".to_string()),
            },
            threshold,
            language: env::var("HAMTA_LANGUAGE").unwrap_or_else(|_| "persian".to_string()),
        })
    }

    /// Check that the configured threshold is usable.
    ///
    /// Scores are bounded to [0, 1], so a threshold outside that range makes
    /// one verdict unreachable. Rejected here, at configuration time, rather
    /// than surfacing as a silent always-distinct comparison.
    pub fn require_threshold(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            anyhow::bail!(
                "HAMTA_THRESHOLD must be within [0, 1], got {}.\n\
                 Scores are cosine similarities and never leave that range.",
                self.threshold
            );
        }
        Ok(())
    }

    /// Check that the configured language has a normalizer profile.
    pub fn require_language(&self) -> Result<()> {
        if self.language != "persian" {
            anyhow::bail!(
                "No normalizer profile for language {:?}. Only \"persian\" ships today;\n\
                 other languages need a LanguageProfile (stop words, stemmer rules).",
                self.language
            );
        }
        Ok(())
    }
}
