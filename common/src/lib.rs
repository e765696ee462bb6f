use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, error, instrument};

pub mod config;
pub mod contact;
pub mod content;
pub mod layout;
pub mod nav;
pub mod render;
pub mod style;
pub mod tokens;

use config::SiteConfig;
use content::Content;
use tokens::DesignTokens;

// validated site
//
// tokens and content tables that have passed validation.  built once at startup and
// shared read-only by every render pass; cloning only bumps the refcount
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    config: Arc<SiteConfig>,
}

impl Site {
    #[instrument(skip_all)]
    pub fn new(config: SiteConfig) -> Result<Self> {
        let defects = config.validate();

        if !defects.is_empty() {
            for defect in &defects {
                error!("{defect}");
            }

            let summary = defects
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");

            return Err(anyhow::Error::msg(format!(
                "site config has {} defect(s): {summary}",
                defects.len()
            )));
        }

        debug!(
            nav = config.content.nav.len(),
            projects = config.content.projects.len(),
            "site config validated"
        );

        Ok(Site {
            config: Arc::new(config),
        })
    }

    pub fn bundled() -> Result<Self> {
        Site::new(SiteConfig::bundled()?)
    }

    pub fn tokens(&self) -> &DesignTokens {
        &self.config.tokens
    }

    pub fn content(&self) -> &Content {
        &self.config.content
    }
}
