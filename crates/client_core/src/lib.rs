use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use portfolio_shared::{
    domain::{Attachment, PortfolioConfiguration, ProjectEntry},
    fields::{
        AttachmentSlot, ChoiceField, NestedFlag, ProjectField, ScalarUpdate, SetField,
        SocialNetwork,
    },
    protocol::{AttachmentPart, GenerateRequest, ARCHIVE_FILE_NAME},
};
use tracing::{debug, error, info, warn};

mod busy;
pub mod error;
pub mod sink;
pub mod transport;

pub use busy::BusyFlag;
pub use error::{SubmissionError, GENERIC_FAILURE_MESSAGE};
pub use sink::{ArchiveSink, DirectorySink};
pub use transport::{GenerateTransport, HttpGenerateTransport};

/// Slots forwarded as binary parts, in wire order.
const TRANSMITTED_SLOTS: [AttachmentSlot; 3] = [
    AttachmentSlot::Avatar,
    AttachmentSlot::LogoImage,
    AttachmentSlot::Resume,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved { path: PathBuf, size_bytes: usize },
    /// Another submission held the busy flag; nothing was sent.
    AlreadyInFlight,
}

/// Owns the configuration being edited and submits it.
///
/// Mutations replace the record copy-on-write: a [`snapshot`](Self::snapshot)
/// taken earlier keeps the values it saw.
#[derive(Debug, Default)]
pub struct FormController {
    config: Arc<PortfolioConfiguration>,
    busy: BusyFlag,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configuration(config: PortfolioConfiguration) -> Self {
        Self {
            config: Arc::new(config),
            busy: BusyFlag::default(),
        }
    }

    pub fn configuration(&self) -> &PortfolioConfiguration {
        &self.config
    }

    pub fn snapshot(&self) -> Arc<PortfolioConfiguration> {
        self.config.clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    fn record_mut(&mut self) -> &mut PortfolioConfiguration {
        Arc::make_mut(&mut self.config)
    }

    pub fn set_scalar_field(&mut self, update: ScalarUpdate) {
        let record = self.record_mut();
        match update {
            ScalarUpdate::Text(field, value) => *record.text_mut(field) = value,
            ScalarUpdate::Choice(field, value) => *record.choice_mut(field) = value,
            ScalarUpdate::Flag(field, checked) => *record.flag_mut(field) = checked,
        }
    }

    pub fn set_exclusive_choice(&mut self, field: ChoiceField, value: impl Into<String>) {
        *self.record_mut().choice_mut(field) = value.into();
    }

    pub fn is_choice_selected(&self, field: ChoiceField, value: &str) -> bool {
        self.config.choice(field) == value
    }

    pub fn toggle_nested_flag(&mut self, flag: NestedFlag) {
        let record = self.record_mut();
        let slot = match flag {
            NestedFlag::Section(section) => record.sections.get_mut(section),
            NestedFlag::Module(module) => record.modules.get_mut(module),
        };
        *slot = !*slot;
    }

    pub fn set_social_value(&mut self, network: SocialNetwork, value: impl Into<String>) {
        *self.record_mut().socials.get_mut(network) = value.into();
    }

    /// Removes `item` if present, otherwise appends it.
    pub fn toggle_set_membership(&mut self, field: SetField, item: &str) {
        let items = self.record_mut().set_field_mut(field);
        if items.iter().any(|existing| existing == item) {
            items.retain(|existing| existing != item);
        } else {
            items.push(item.to_string());
        }
    }

    /// No-op when `index` is out of range.
    pub fn set_project_field(
        &mut self,
        index: usize,
        field: ProjectField,
        value: impl Into<String>,
    ) {
        if index >= self.config.projects.len() {
            debug!(index, field = %field, "ignoring edit of missing project");
            return;
        }
        *self.record_mut().projects[index].field_mut(field) = value.into();
    }

    pub fn append_project(&mut self) {
        self.record_mut().projects.push(ProjectEntry::default());
    }

    /// Removing the last project is allowed and leaves the list empty.
    pub fn remove_project(&mut self, index: usize) {
        if index >= self.config.projects.len() {
            debug!(index, "ignoring removal of missing project");
            return;
        }
        self.record_mut().projects.remove(index);
    }

    /// `None` clears the slot. Thumbnails of missing projects are ignored.
    pub fn set_attachment(&mut self, slot: AttachmentSlot, attachment: Option<Attachment>) {
        if let AttachmentSlot::ProjectThumbnail(index) = slot {
            if index >= self.config.projects.len() {
                debug!(index, "ignoring thumbnail for missing project");
                return;
            }
        }
        if let Some(target) = self.record_mut().attachment_mut(slot) {
            *target = attachment;
        }
    }

    /// Sends the current configuration to the generator and stores the
    /// returned archive through `sink`.
    ///
    /// At most one submission runs at a time; a call made while another is in
    /// flight returns [`SubmitOutcome::AlreadyInFlight`] without sending.
    pub async fn submit(
        &self,
        transport: &dyn GenerateTransport,
        sink: &dyn ArchiveSink,
    ) -> Result<SubmitOutcome, SubmissionError> {
        let Some(_busy) = self.busy.try_acquire() else {
            debug!("submission already in flight");
            return Ok(SubmitOutcome::AlreadyInFlight);
        };

        let config = self.snapshot();
        match generate_and_save(&config, transport, sink).await {
            Ok((path, size_bytes)) => {
                info!(path = %path.display(), size_bytes, "portfolio archive ready");
                Ok(SubmitOutcome::Saved { path, size_bytes })
            }
            Err(source) => {
                error!(error = ?source, "portfolio submission failed");
                Err(SubmissionError::Failed { source })
            }
        }
    }
}

async fn generate_and_save(
    config: &PortfolioConfiguration,
    transport: &dyn GenerateTransport,
    sink: &dyn ArchiveSink,
) -> Result<(PathBuf, usize)> {
    let request = build_generate_request(config).await?;
    let archive = transport.generate(request).await?;
    let path = sink.save(ARCHIVE_FILE_NAME, &archive).await?;
    Ok((path, archive.len()))
}

/// Builds the wire request: JSON with every attachment nulled plus one binary
/// part per chosen top-level attachment. Project thumbnails are not sent.
pub async fn build_generate_request(config: &PortfolioConfiguration) -> Result<GenerateRequest> {
    let dropped_thumbnails = config
        .projects
        .iter()
        .filter(|project| project.thumbnail.is_some())
        .count();
    if dropped_thumbnails > 0 {
        warn!(
            dropped_thumbnails,
            "project thumbnails are not transmitted to the generator"
        );
    }

    let mut parts = Vec::new();
    for slot in TRANSMITTED_SLOTS {
        let (Some(name), Some(attachment)) = (slot.part_name(), config.attachment(slot)) else {
            continue;
        };
        let bytes = tokio::fs::read(&attachment.path).await.with_context(|| {
            format!(
                "failed to read {name} attachment '{}'",
                attachment.path.display()
            )
        })?;
        parts.push(AttachmentPart {
            name,
            file_name: attachment.file_name.clone(),
            mime_type: attachment.mime_type.clone(),
            bytes,
        });
    }

    Ok(GenerateRequest {
        portfolio_data: config.to_payload_json()?,
        parts,
    })
}

#[cfg(test)]
#[path = "tests/mock_generator.rs"]
mod mock_generator;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
