use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::ModelError,
    fields::{
        AttachmentSlot, ChoiceField, FlagField, ModuleFlag, ProjectField, SectionFlag, SetField,
        SocialNetwork, TextField,
    },
};

/// A reference to a file chosen on the local machine. Only the path is held;
/// the bytes are read at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl Attachment {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            path: path.to_path_buf(),
            file_name,
            mime_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub name: String,
    pub link: String,
    pub stack: String,
    pub description: String,
    pub thumbnail: Option<Attachment>,
}

impl ProjectEntry {
    pub fn field_mut(&mut self, field: ProjectField) -> &mut String {
        match field {
            ProjectField::Name => &mut self.name,
            ProjectField::Link => &mut self.link,
            ProjectField::Stack => &mut self.stack,
            ProjectField::Description => &mut self.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sections {
    pub testimonials: bool,
    pub timeline: bool,
    pub stats: bool,
    pub blog: bool,
}

impl Sections {
    pub fn get_mut(&mut self, flag: SectionFlag) -> &mut bool {
        match flag {
            SectionFlag::Testimonials => &mut self.testimonials,
            SectionFlag::Timeline => &mut self.timeline,
            SectionFlag::Stats => &mut self.stats,
            SectionFlag::Blog => &mut self.blog,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Modules {
    pub tech_stack: bool,
    pub pricing: bool,
    pub spotify: bool,
}

impl Default for Modules {
    fn default() -> Self {
        Self {
            tech_stack: true,
            pricing: false,
            spotify: false,
        }
    }
}

impl Modules {
    pub fn get_mut(&mut self, flag: ModuleFlag) -> &mut bool {
        match flag {
            ModuleFlag::TechStack => &mut self.tech_stack,
            ModuleFlag::Pricing => &mut self.pricing,
            ModuleFlag::Spotify => &mut self.spotify,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Socials {
    pub linkedin: String,
    pub twitter: String,
    pub instagram: String,
    pub github: String,
    pub youtube: String,
    pub discord: String,
    pub tiktok: String,
    pub spotify: String,
    pub email: String,
    pub phone: String,
    pub calendly: String,
    pub whatsapp: String,
}

impl Socials {
    pub fn get(&self, network: SocialNetwork) -> &str {
        match network {
            SocialNetwork::Linkedin => &self.linkedin,
            SocialNetwork::Twitter => &self.twitter,
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::Github => &self.github,
            SocialNetwork::Youtube => &self.youtube,
            SocialNetwork::Discord => &self.discord,
            SocialNetwork::Tiktok => &self.tiktok,
            SocialNetwork::Spotify => &self.spotify,
            SocialNetwork::Email => &self.email,
            SocialNetwork::Phone => &self.phone,
            SocialNetwork::Calendly => &self.calendly,
            SocialNetwork::Whatsapp => &self.whatsapp,
        }
    }

    pub fn get_mut(&mut self, network: SocialNetwork) -> &mut String {
        match network {
            SocialNetwork::Linkedin => &mut self.linkedin,
            SocialNetwork::Twitter => &mut self.twitter,
            SocialNetwork::Instagram => &mut self.instagram,
            SocialNetwork::Github => &mut self.github,
            SocialNetwork::Youtube => &mut self.youtube,
            SocialNetwork::Discord => &mut self.discord,
            SocialNetwork::Tiktok => &mut self.tiktok,
            SocialNetwork::Spotify => &mut self.spotify,
            SocialNetwork::Email => &mut self.email,
            SocialNetwork::Phone => &mut self.phone,
            SocialNetwork::Calendly => &mut self.calendly,
            SocialNetwork::Whatsapp => &mut self.whatsapp,
        }
    }
}

/// A required input left blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FullName,
    Title,
    Bio,
    ProjectName(usize),
    ProjectLink(usize),
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::FullName => f.write_str("fullName"),
            RequiredField::Title => f.write_str("title"),
            RequiredField::Bio => f.write_str("bio"),
            RequiredField::ProjectName(index) => write!(f, "projects[{index}].name"),
            RequiredField::ProjectLink(index) => write!(f, "projects[{index}].link"),
        }
    }
}

/// Every option chosen for one portfolio. Serializes with the camelCase keys
/// the generator expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioConfiguration {
    pub full_name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub bio_length: String,
    pub tone: String,
    pub archetype: String,
    pub languages: String,
    pub location: String,
    pub availability: String,
    pub avatar: Option<Attachment>,
    pub resume: Option<Attachment>,

    pub logo_type: String,
    pub logo_emoji: String,
    pub logo_image: Option<Attachment>,
    pub hero_style: String,
    pub hero_align: String,
    pub nav_position: String,
    pub nav_link_style: String,
    pub gallery_layout: String,
    pub image_ratio: String,
    pub project_click_action: String,
    pub footer_style: String,
    pub about_layout: String,

    pub theme: String,
    pub bg_shade: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub design_style: String,
    pub font_pairing: String,
    pub font_scale: String,
    pub border_radius: String,
    pub radius_style: String,
    pub border_style: String,
    pub shadow: String,
    pub grain_intensity: String,
    pub glass_effect: bool,

    pub loader_style: String,
    pub cursor_style: String,
    pub cursor_trail: String,
    pub scroll_type: String,
    pub scroll_animations: String,
    pub page404: String,

    pub newsletter: bool,
    pub newsletter_url: String,
    pub skills_display: String,
    pub skills_color: String,
    pub skills_categories: Vec<String>,
    pub sections: Sections,
    pub modules: Modules,

    pub seo_keywords: String,
    pub seo_desc: String,
    pub tab_title: String,
    pub cta_type: String,
    pub cta_text: String,
    pub contact_method: String,

    pub socials: Socials,
    pub projects: Vec<ProjectEntry>,
}

impl Default for PortfolioConfiguration {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            title: String::new(),
            tagline: String::new(),
            bio: String::new(),
            bio_length: "medium".into(),
            tone: "professionnel".into(),
            archetype: "creator".into(),
            languages: String::new(),
            location: String::new(),
            availability: "open".into(),
            avatar: None,
            resume: None,

            logo_type: "emoji".into(),
            logo_emoji: "⚡️".into(),
            logo_image: None,
            hero_style: "typographic".into(),
            hero_align: "left".into(),
            nav_position: "fixed-top".into(),
            nav_link_style: "minimal".into(),
            gallery_layout: "bento".into(),
            image_ratio: "landscape".into(),
            project_click_action: "new-tab".into(),
            footer_style: "minimal".into(),
            about_layout: "profile".into(),

            theme: "dark".into(),
            bg_shade: "pure-black".into(),
            primary_color: "#6366f1".into(),
            secondary_color: "#ec4899".into(),
            design_style: "glassmorphism".into(),
            font_pairing: "modern".into(),
            font_scale: "standard".into(),
            border_radius: "16".into(),
            radius_style: "rounded".into(),
            border_style: "thin".into(),
            shadow: "medium".into(),
            grain_intensity: "20".into(),
            glass_effect: true,

            loader_style: "none".into(),
            cursor_style: "default".into(),
            cursor_trail: "none".into(),
            scroll_type: "smooth".into(),
            scroll_animations: "fade".into(),
            page404: "minimal".into(),

            newsletter: false,
            newsletter_url: String::new(),
            skills_display: "pill".into(),
            skills_color: "original".into(),
            skills_categories: vec!["Frameworks".into(), "Languages".into()],
            sections: Sections::default(),
            modules: Modules::default(),

            seo_keywords: String::new(),
            seo_desc: String::new(),
            tab_title: "Portfolio".into(),
            cta_type: "email".into(),
            cta_text: "Me contacter".into(),
            contact_method: "mailto".into(),

            socials: Socials::default(),
            projects: vec![ProjectEntry::default()],
        }
    }
}

impl PortfolioConfiguration {
    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FullName => &mut self.full_name,
            TextField::Title => &mut self.title,
            TextField::Tagline => &mut self.tagline,
            TextField::Bio => &mut self.bio,
            TextField::Languages => &mut self.languages,
            TextField::Location => &mut self.location,
            TextField::LogoEmoji => &mut self.logo_emoji,
            TextField::PrimaryColor => &mut self.primary_color,
            TextField::SecondaryColor => &mut self.secondary_color,
            TextField::BorderRadius => &mut self.border_radius,
            TextField::GrainIntensity => &mut self.grain_intensity,
            TextField::NewsletterUrl => &mut self.newsletter_url,
            TextField::SeoKeywords => &mut self.seo_keywords,
            TextField::SeoDesc => &mut self.seo_desc,
            TextField::TabTitle => &mut self.tab_title,
            TextField::CtaText => &mut self.cta_text,
        }
    }

    pub fn choice(&self, field: ChoiceField) -> &str {
        match field {
            ChoiceField::BioLength => &self.bio_length,
            ChoiceField::Tone => &self.tone,
            ChoiceField::Archetype => &self.archetype,
            ChoiceField::Availability => &self.availability,
            ChoiceField::LogoType => &self.logo_type,
            ChoiceField::HeroStyle => &self.hero_style,
            ChoiceField::HeroAlign => &self.hero_align,
            ChoiceField::NavPosition => &self.nav_position,
            ChoiceField::NavLinkStyle => &self.nav_link_style,
            ChoiceField::GalleryLayout => &self.gallery_layout,
            ChoiceField::ImageRatio => &self.image_ratio,
            ChoiceField::ProjectClickAction => &self.project_click_action,
            ChoiceField::FooterStyle => &self.footer_style,
            ChoiceField::AboutLayout => &self.about_layout,
            ChoiceField::Theme => &self.theme,
            ChoiceField::BgShade => &self.bg_shade,
            ChoiceField::DesignStyle => &self.design_style,
            ChoiceField::FontPairing => &self.font_pairing,
            ChoiceField::FontScale => &self.font_scale,
            ChoiceField::RadiusStyle => &self.radius_style,
            ChoiceField::BorderStyle => &self.border_style,
            ChoiceField::Shadow => &self.shadow,
            ChoiceField::LoaderStyle => &self.loader_style,
            ChoiceField::CursorStyle => &self.cursor_style,
            ChoiceField::CursorTrail => &self.cursor_trail,
            ChoiceField::ScrollType => &self.scroll_type,
            ChoiceField::ScrollAnimations => &self.scroll_animations,
            ChoiceField::Page404 => &self.page404,
            ChoiceField::SkillsDisplay => &self.skills_display,
            ChoiceField::SkillsColor => &self.skills_color,
            ChoiceField::CtaType => &self.cta_type,
            ChoiceField::ContactMethod => &self.contact_method,
        }
    }

    pub fn choice_mut(&mut self, field: ChoiceField) -> &mut String {
        match field {
            ChoiceField::BioLength => &mut self.bio_length,
            ChoiceField::Tone => &mut self.tone,
            ChoiceField::Archetype => &mut self.archetype,
            ChoiceField::Availability => &mut self.availability,
            ChoiceField::LogoType => &mut self.logo_type,
            ChoiceField::HeroStyle => &mut self.hero_style,
            ChoiceField::HeroAlign => &mut self.hero_align,
            ChoiceField::NavPosition => &mut self.nav_position,
            ChoiceField::NavLinkStyle => &mut self.nav_link_style,
            ChoiceField::GalleryLayout => &mut self.gallery_layout,
            ChoiceField::ImageRatio => &mut self.image_ratio,
            ChoiceField::ProjectClickAction => &mut self.project_click_action,
            ChoiceField::FooterStyle => &mut self.footer_style,
            ChoiceField::AboutLayout => &mut self.about_layout,
            ChoiceField::Theme => &mut self.theme,
            ChoiceField::BgShade => &mut self.bg_shade,
            ChoiceField::DesignStyle => &mut self.design_style,
            ChoiceField::FontPairing => &mut self.font_pairing,
            ChoiceField::FontScale => &mut self.font_scale,
            ChoiceField::RadiusStyle => &mut self.radius_style,
            ChoiceField::BorderStyle => &mut self.border_style,
            ChoiceField::Shadow => &mut self.shadow,
            ChoiceField::LoaderStyle => &mut self.loader_style,
            ChoiceField::CursorStyle => &mut self.cursor_style,
            ChoiceField::CursorTrail => &mut self.cursor_trail,
            ChoiceField::ScrollType => &mut self.scroll_type,
            ChoiceField::ScrollAnimations => &mut self.scroll_animations,
            ChoiceField::Page404 => &mut self.page404,
            ChoiceField::SkillsDisplay => &mut self.skills_display,
            ChoiceField::SkillsColor => &mut self.skills_color,
            ChoiceField::CtaType => &mut self.cta_type,
            ChoiceField::ContactMethod => &mut self.contact_method,
        }
    }

    pub fn flag(&self, field: FlagField) -> bool {
        match field {
            FlagField::GlassEffect => self.glass_effect,
            FlagField::Newsletter => self.newsletter,
        }
    }

    pub fn flag_mut(&mut self, field: FlagField) -> &mut bool {
        match field {
            FlagField::GlassEffect => &mut self.glass_effect,
            FlagField::Newsletter => &mut self.newsletter,
        }
    }

    pub fn set_field_mut(&mut self, field: SetField) -> &mut Vec<String> {
        match field {
            SetField::SkillsCategories => &mut self.skills_categories,
        }
    }

    pub fn attachment(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        match slot {
            AttachmentSlot::Avatar => self.avatar.as_ref(),
            AttachmentSlot::Resume => self.resume.as_ref(),
            AttachmentSlot::LogoImage => self.logo_image.as_ref(),
            AttachmentSlot::ProjectThumbnail(index) => self
                .projects
                .get(index)
                .and_then(|project| project.thumbnail.as_ref()),
        }
    }

    /// `None` when the slot names a project that does not exist.
    pub fn attachment_mut(&mut self, slot: AttachmentSlot) -> Option<&mut Option<Attachment>> {
        match slot {
            AttachmentSlot::Avatar => Some(&mut self.avatar),
            AttachmentSlot::Resume => Some(&mut self.resume),
            AttachmentSlot::LogoImage => Some(&mut self.logo_image),
            AttachmentSlot::ProjectThumbnail(index) => self
                .projects
                .get_mut(index)
                .map(|project| &mut project.thumbnail),
        }
    }

    /// Copy of the record with every attachment reference cleared, top-level
    /// and per project.
    pub fn detached(&self) -> Self {
        let mut copy = self.clone();
        copy.avatar = None;
        copy.resume = None;
        copy.logo_image = None;
        for project in &mut copy.projects {
            project.thumbnail = None;
        }
        copy
    }

    /// The `portfolioData` JSON string.
    pub fn to_payload_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.detached())?)
    }

    /// Required inputs that are still blank, in form order.
    pub fn missing_required_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push(RequiredField::FullName);
        }
        if self.title.trim().is_empty() {
            missing.push(RequiredField::Title);
        }
        if self.bio.trim().is_empty() {
            missing.push(RequiredField::Bio);
        }
        for (index, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                missing.push(RequiredField::ProjectName(index));
            }
            if project.link.trim().is_empty() {
                missing.push(RequiredField::ProjectLink(index));
            }
        }
        missing
    }
}
