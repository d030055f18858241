//! Mapping allocation, renewal, resolution and deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tokio::sync::Mutex;

use crate::application::services::ClickRecorder;
use crate::domain::entities::{DAY_FORMAT, Mapping, NewMapping, parse_expiration};
use crate::domain::repositories::{ClickRepository, MappingRepository};
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_alias};

/// Number of generated candidates tried before giving up.
pub const MAX_ATTEMPTS: usize = 10;

/// Caller input for [`LinkService::allocate`].
#[derive(Debug, Clone, Default)]
pub struct AllocationRequest {
    pub target: String,
    pub alias: Option<String>,
    /// Day-granularity date, `YYYY-MM-DD`.
    pub expiration: Option<String>,
}

impl AllocationRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }
}

/// Outcome of an allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    /// A new mapping was stored.
    Created(Mapping),
    /// The target was already mapped; nothing was written.
    Existing(Mapping),
    /// The existing mapping got the requested expiration.
    Renewed {
        mapping: Mapping,
        formatted_expiration: String,
    },
    /// The existing mapping is still live; its expiration was left untouched.
    RenewalRejected(Mapping),
}

impl Allocation {
    pub fn mapping(&self) -> &Mapping {
        match self {
            Allocation::Created(mapping)
            | Allocation::Existing(mapping)
            | Allocation::RenewalRejected(mapping)
            | Allocation::Renewed { mapping, .. } => mapping,
        }
    }

    pub fn code(&self) -> &str {
        &self.mapping().code
    }
}

/// Client details attached to a click.
#[derive(Debug, Clone, Default)]
pub struct Visitor {
    pub source_address: String,
    pub client_agent: String,
}

/// Service owning the mapping lifecycle.
///
/// Allocation, resolution and deletion each run end to end under one
/// process-wide lock, so two callers can never both observe the same code
/// or target as free.
pub struct LinkService<M: MappingRepository, C: ClickRepository> {
    mapping_repository: Arc<M>,
    click_recorder: ClickRecorder<C>,
    generator: Arc<CodeGenerator>,
    lock: Mutex<()>,
}

impl<M: MappingRepository, C: ClickRepository> LinkService<M, C> {
    /// Creates a new link service.
    pub fn new(
        mapping_repository: Arc<M>,
        click_repository: Arc<C>,
        generator: Arc<CodeGenerator>,
    ) -> Self {
        Self {
            mapping_repository,
            click_recorder: ClickRecorder::new(click_repository),
            generator,
            lock: Mutex::new(()),
        }
    }

    /// Returns the mapping for `target`, renews it, or allocates a new code.
    ///
    /// # Flow
    ///
    /// 1. Validate input (non-empty target, well-formed alias and expiration)
    /// 2. Existing target without expiration: return it unchanged
    /// 3. Existing target with expiration: renewal (see [`Mapping::accepts_renewal_at`])
    /// 4. Alias: use verbatim unless already taken
    /// 5. Otherwise generate up to [`MAX_ATTEMPTS`] candidates
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an empty target, malformed alias or date
    /// - [`AppError::AliasConflict`] if the alias is already in use
    /// - [`AppError::AllocationExhausted`] if every candidate collided
    /// - [`AppError::Internal`] / [`AppError::Conflict`] from storage
    pub async fn allocate(&self, request: AllocationRequest) -> Result<Allocation, AppError> {
        let AllocationRequest {
            target,
            alias,
            expiration,
        } = request;

        if target.trim().is_empty() {
            return Err(AppError::bad_request(
                "Please provide a valid URL",
                json!({ "field": "url" }),
            ));
        }

        let expires_at = expiration
            .as_deref()
            .map(|raw| {
                parse_expiration(raw).ok_or_else(|| {
                    AppError::bad_request(
                        "Invalid expiration date format",
                        json!({ "expiration": raw, "expected": "YYYY-MM-DD" }),
                    )
                })
            })
            .transpose()?;

        if let Some(alias) = alias.as_deref() {
            validate_alias(alias)?;
        }

        let _guard = self.lock.lock().await;

        if let Some(existing) = self.mapping_repository.find_by_target(&target).await? {
            return match expires_at {
                None => {
                    tracing::debug!(code = %existing.code, "Target already mapped");
                    Ok(Allocation::Existing(existing))
                }
                Some(new_expiration) => self.renew(existing, new_expiration).await,
            };
        }

        let code = match alias.as_deref() {
            Some(alias) => {
                if self.mapping_repository.alias_exists(alias).await?
                    || self.mapping_repository.code_exists(alias).await?
                {
                    return Err(AppError::alias_conflict(
                        "Custom alias already in use",
                        json!({ "alias": alias }),
                    ));
                }
                alias.to_string()
            }
            None => self.generate_unique_code().await?,
        };

        let mapping = self
            .mapping_repository
            .insert(NewMapping {
                code,
                target,
                alias,
                expires_at,
            })
            .await?;

        tracing::info!(code = %mapping.code, target = %mapping.target, "Mapping created");
        Ok(Allocation::Created(mapping))
    }

    /// Applies a renewal to an existing mapping. Caller holds the lock.
    async fn renew(
        &self,
        existing: Mapping,
        new_expiration: DateTime<Utc>,
    ) -> Result<Allocation, AppError> {
        if !existing.accepts_renewal_at(Utc::now()) {
            tracing::info!(
                code = %existing.code,
                expires_at = ?existing.expires_at,
                "Renewal rejected, mapping still live"
            );
            return Ok(Allocation::RenewalRejected(existing));
        }

        self.mapping_repository
            .update_expiration(&existing.target, new_expiration)
            .await?;

        tracing::info!(code = %existing.code, expires_at = %new_expiration, "Mapping renewed");

        Ok(Allocation::Renewed {
            mapping: Mapping {
                expires_at: Some(new_expiration),
                ..existing
            },
            formatted_expiration: new_expiration.format(DAY_FORMAT).to_string(),
        })
    }

    /// Generates a code that is not yet taken. Caller holds the lock.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = self.generator.generate();

            if !self.mapping_repository.code_exists(&code).await? {
                return Ok(code);
            }

            tracing::debug!(attempt, code = %code, "Generated code collided");
        }

        tracing::error!(
            attempts = MAX_ATTEMPTS,
            alphabet_size = self.generator.alphabet().len(),
            length = self.generator.length(),
            "Unable to generate a unique code"
        );

        Err(AppError::exhausted(
            "Unable to generate a unique short URL after multiple attempts",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a code to its target and records the click.
    ///
    /// Click recording is best effort: a failure is logged and the target is
    /// still returned.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no mapping has this code
    /// - [`AppError::Expired`] if the expiration has passed (no click is recorded)
    pub async fn resolve(&self, code: &str, visitor: &Visitor) -> Result<String, AppError> {
        let _guard = self.lock.lock().await;

        let mapping = self
            .mapping_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))?;

        if mapping.is_expired_at(Utc::now()) {
            return Err(AppError::expired(
                "This link has expired",
                json!({ "code": code, "expires_at": mapping.expires_at }),
            ));
        }

        if let Err(e) = self
            .click_recorder
            .record(code, &visitor.source_address, &visitor.client_agent)
            .await
        {
            tracing::error!(code, error = %e, "Error logging click event");
        }

        Ok(mapping.target)
    }

    /// Retrieves a mapping by code without recording a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    pub async fn get_mapping(&self, code: &str) -> Result<Mapping, AppError> {
        self.mapping_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))
    }

    /// Deletes a mapping together with its clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping has this code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;

        if !self.mapping_repository.delete(code).await? {
            return Err(AppError::not_found(
                "URL not found",
                json!({ "code": code }),
            ));
        }

        tracing::info!(code, "Mapping deleted");
        Ok(())
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
