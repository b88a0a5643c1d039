//! Command-line form edits, applied to a [`FormController`] the way the form
//! applies UI events.

use std::path::PathBuf;

use clap::Args;
use tracing::warn;
use portfolio_client::FormController;
use portfolio_shared::{
    domain::Attachment,
    error::ModelError,
    fields::{AttachmentSlot, NestedFlag, ProjectField, ScalarUpdate, SetField, SocialNetwork},
};

/// One `--project` value: `name|link|stack|description|thumbnail`, trailing
/// parts optional. `\|` inside a part is a literal pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub link: String,
    pub stack: String,
    pub description: String,
    pub thumbnail: Option<PathBuf>,
}

const PROJECT_PARTS: usize = 5;

pub fn parse_project(raw: &str) -> Result<ProjectSpec, ModelError> {
    let parts = split_unescaped_pipes(raw);
    if parts.len() > PROJECT_PARTS {
        return Err(ModelError::MalformedAssignment(raw.to_string()));
    }
    let mut parts = parts.into_iter().map(|part| part.trim().to_string());
    let mut next = || parts.next().unwrap_or_default();
    let spec = ProjectSpec {
        name: next(),
        link: next(),
        stack: next(),
        description: next(),
        thumbnail: Some(next()).filter(|path| !path.is_empty()).map(PathBuf::from),
    };
    Ok(spec)
}

fn split_unescaped_pipes(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                current.push('|');
            }
            '|' => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}

pub fn parse_social(raw: &str) -> Result<(SocialNetwork, String), ModelError> {
    let (network, value) = raw
        .split_once('=')
        .ok_or_else(|| ModelError::MalformedAssignment(raw.to_string()))?;
    Ok((network.trim().parse()?, value.to_string()))
}

#[derive(Debug, Default, Args)]
pub struct FormEdits {
    /// Set a text, choice or checkbox field, e.g. `fullName=Alex` or `glassEffect=false`.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = ScalarUpdate::parse_assignment)]
    pub scalars: Vec<ScalarUpdate>,
    /// Flip a section or module, e.g. `section:blog` or `module:spotify`.
    #[arg(long = "toggle", value_name = "GROUP:KEY")]
    pub toggles: Vec<NestedFlag>,
    /// Toggle a skill category in or out of the selection.
    #[arg(long = "skill", value_name = "CATEGORY")]
    pub skills: Vec<String>,
    /// Set a social link, e.g. `github=https://github.com/alex`.
    #[arg(long = "social", value_name = "NETWORK=VALUE", value_parser = parse_social)]
    pub socials: Vec<(SocialNetwork, String)>,
    /// Fill project N (in order given) as `name|link|stack|description|thumbnail`.
    /// Write a literal pipe as `\|`.
    #[arg(long = "project", value_name = "SPEC", value_parser = parse_project)]
    pub projects: Vec<ProjectSpec>,
    /// Remove a project by index after the projects above are applied.
    #[arg(long = "remove-project", value_name = "INDEX")]
    pub removed_projects: Vec<usize>,
    #[arg(long)]
    pub avatar: Option<PathBuf>,
    #[arg(long)]
    pub resume: Option<PathBuf>,
    #[arg(long = "logo-image")]
    pub logo_image: Option<PathBuf>,
}

impl FormEdits {
    pub fn apply(&self, controller: &mut FormController) {
        for update in &self.scalars {
            controller.set_scalar_field(update.clone());
        }
        for flag in &self.toggles {
            controller.toggle_nested_flag(*flag);
        }
        for skill in &self.skills {
            controller.toggle_set_membership(SetField::SkillsCategories, skill);
        }
        for (network, value) in &self.socials {
            controller.set_social_value(*network, value.clone());
        }

        for (index, project) in self.projects.iter().enumerate() {
            while controller.configuration().projects.len() <= index {
                controller.append_project();
            }
            controller.set_project_field(index, ProjectField::Name, project.name.clone());
            controller.set_project_field(index, ProjectField::Link, project.link.clone());
            controller.set_project_field(index, ProjectField::Stack, project.stack.clone());
            controller.set_project_field(
                index,
                ProjectField::Description,
                project.description.clone(),
            );
            if let Some(path) = &project.thumbnail {
                controller.set_attachment(
                    AttachmentSlot::ProjectThumbnail(index),
                    Some(Attachment::from_path(path)),
                );
            }
        }
        // highest index first so earlier removals don't shift later ones
        let mut removed = self.removed_projects.clone();
        removed.sort_unstable();
        removed.dedup();
        for index in removed.into_iter().rev() {
            controller.remove_project(index);
        }

        let files = [
            (AttachmentSlot::Avatar, &self.avatar),
            (AttachmentSlot::Resume, &self.resume),
            (AttachmentSlot::LogoImage, &self.logo_image),
        ];
        for (slot, path) in files {
            if let Some(path) = path {
                let attachment = Attachment::from_path(path);
                if !slot.accepts(&attachment.file_name, &attachment.mime_type) {
                    warn!(
                        file = %attachment.file_name,
                        mime_type = %attachment.mime_type,
                        expected = slot.accept().unwrap_or_default(),
                        "attachment does not match the slot's file filter"
                    );
                }
                controller.set_attachment(slot, Some(attachment));
            }
        }
    }
}
