//! Typed selectors for every mutable slot of a [`PortfolioConfiguration`].
//!
//! Each selector knows its camelCase wire key, so command-line or UI input can
//! be parsed once into a selector instead of being looked up by string later.
//!
//! [`PortfolioConfiguration`]: crate::domain::PortfolioConfiguration

use std::{fmt, str::FromStr};

use crate::error::ModelError;

macro_rules! field_selector {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($key => Ok($name::$variant),)+
                    other => Err(ModelError::UnknownField {
                        kind: $kind,
                        name: other.to_string(),
                    }),
                }
            }
        }
    };
}

field_selector!(
    /// Free-text inputs.
    TextField, "text field" {
        FullName => "fullName",
        Title => "title",
        Tagline => "tagline",
        Bio => "bio",
        Languages => "languages",
        Location => "location",
        LogoEmoji => "logoEmoji",
        PrimaryColor => "primaryColor",
        SecondaryColor => "secondaryColor",
        BorderRadius => "borderRadius",
        GrainIntensity => "grainIntensity",
        NewsletterUrl => "newsletterUrl",
        SeoKeywords => "seoKeywords",
        SeoDesc => "seoDesc",
        TabTitle => "tabTitle",
        CtaText => "ctaText",
    }
);

field_selector!(
    /// Inputs whose value comes from a fixed option set (selects and radio
    /// groups). Values outside [`ChoiceField::options`] are still accepted.
    ChoiceField, "choice field" {
        BioLength => "bioLength",
        Tone => "tone",
        Archetype => "archetype",
        Availability => "availability",
        LogoType => "logoType",
        HeroStyle => "heroStyle",
        HeroAlign => "heroAlign",
        NavPosition => "navPosition",
        NavLinkStyle => "navLinkStyle",
        GalleryLayout => "galleryLayout",
        ImageRatio => "imageRatio",
        ProjectClickAction => "projectClickAction",
        FooterStyle => "footerStyle",
        AboutLayout => "aboutLayout",
        Theme => "theme",
        BgShade => "bgShade",
        DesignStyle => "designStyle",
        FontPairing => "fontPairing",
        FontScale => "fontScale",
        RadiusStyle => "radiusStyle",
        BorderStyle => "borderStyle",
        Shadow => "shadow",
        LoaderStyle => "loaderStyle",
        CursorStyle => "cursorStyle",
        CursorTrail => "cursorTrail",
        ScrollType => "scrollType",
        ScrollAnimations => "scrollAnimations",
        Page404 => "page404",
        SkillsDisplay => "skillsDisplay",
        SkillsColor => "skillsColor",
        CtaType => "ctaType",
        ContactMethod => "contactMethod",
    }
);

impl ChoiceField {
    /// Known values offered for this field. Fields the form never exposes
    /// list only their default.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            ChoiceField::BioLength => &["short", "medium", "long"],
            ChoiceField::Tone => &["professionnel"],
            ChoiceField::Archetype => &["creator", "solver", "futurist", "minimalist"],
            ChoiceField::Availability => &["open", "freelance", "student", "busy"],
            ChoiceField::LogoType => &["emoji", "image"],
            ChoiceField::HeroStyle => &["typographic", "immersive", "split", "minimal", "video"],
            ChoiceField::HeroAlign => &["left"],
            ChoiceField::NavPosition => &["fixed-top", "dock", "sidebar-left", "burger"],
            ChoiceField::NavLinkStyle => &["minimal"],
            ChoiceField::GalleryLayout => {
                &["bento", "masonry", "horizontal", "vertical-list", "carousel"]
            }
            ChoiceField::ImageRatio => &["landscape", "portrait", "square", "original"],
            ChoiceField::ProjectClickAction => &["new-tab"],
            ChoiceField::FooterStyle => &["minimal", "complete", "big"],
            ChoiceField::AboutLayout => &["profile", "story", "timeline", "stats"],
            ChoiceField::Theme => &["dark", "light", "system"],
            ChoiceField::BgShade => &["pure-black"],
            ChoiceField::DesignStyle => &[
                "glassmorphism",
                "minimalist",
                "neobrutalism",
                "cyberpunk",
                "bento",
                "retro",
                "claymorphism",
            ],
            ChoiceField::FontPairing => &[
                "modern",
                "classic",
                "tech",
                "retro",
                "brutalist",
                "futuristic",
                "handwritten",
            ],
            ChoiceField::FontScale => &["standard"],
            ChoiceField::RadiusStyle => &["sharp", "soft", "round", "pill"],
            ChoiceField::BorderStyle => &["thin"],
            ChoiceField::Shadow => &["none", "small", "medium", "large", "glow"],
            ChoiceField::LoaderStyle => &["none", "counter", "curtain", "logo"],
            ChoiceField::CursorStyle => &["default", "dot", "circle", "blend"],
            ChoiceField::CursorTrail => &["none"],
            ChoiceField::ScrollType => &["native", "smooth"],
            ChoiceField::ScrollAnimations => &["none", "fade", "parallax", "premium"],
            ChoiceField::Page404 => &["minimal", "glitch", "humour"],
            ChoiceField::SkillsDisplay => &["pill", "progress", "icon", "cloud", "tag"],
            ChoiceField::SkillsColor => &["original", "mono", "gradient", "adaptive"],
            ChoiceField::CtaType => &["email", "cv", "calendly", "link"],
            ChoiceField::ContactMethod => &["mailto", "formspree"],
        }
    }
}

field_selector!(
    /// Checkboxes bound to a top-level boolean.
    FlagField, "flag field" {
        GlassEffect => "glassEffect",
        Newsletter => "newsletter",
    }
);

field_selector!(
    SectionFlag, "section" {
        Testimonials => "testimonials",
        Timeline => "timeline",
        Stats => "stats",
        Blog => "blog",
    }
);

field_selector!(
    ModuleFlag, "module" {
        TechStack => "techStack",
        Pricing => "pricing",
        Spotify => "spotify",
    }
);

field_selector!(
    SocialNetwork, "social network" {
        Linkedin => "linkedin",
        Twitter => "twitter",
        Instagram => "instagram",
        Github => "github",
        Youtube => "youtube",
        Discord => "discord",
        Tiktok => "tiktok",
        Spotify => "spotify",
        Email => "email",
        Phone => "phone",
        Calendly => "calendly",
        Whatsapp => "whatsapp",
    }
);

field_selector!(
    /// Set-valued fields with toggle membership.
    SetField, "set field" {
        SkillsCategories => "skillsCategories",
    }
);

field_selector!(
    ProjectField, "project field" {
        Name => "name",
        Link => "link",
        Stack => "stack",
        Description => "description",
    }
);

/// Skill categories offered by the form.
pub const SKILL_CATEGORIES: &[&str] = &[
    "Languages",
    "Frameworks",
    "Outils",
    "CMS",
    "Design",
    "DevOps",
    "Cloud",
    "Soft Skills",
];

/// A top-level scalar write. The selector and the value always agree on kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarUpdate {
    Text(TextField, String),
    Choice(ChoiceField, String),
    Flag(FlagField, bool),
}

impl ScalarUpdate {

    /// Parses a `key=value` assignment for a text or choice field.
    pub fn parse_assignment(raw: &str) -> Result<Self, ModelError> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| ModelError::MalformedAssignment(raw.to_string()))?;
        let key = key.trim();
        if let Ok(field) = key.parse::<TextField>() {
            return Ok(ScalarUpdate::Text(field, value.to_string()));
        }
        if let Ok(field) = key.parse::<ChoiceField>() {
            return Ok(ScalarUpdate::Choice(field, value.to_string()));
        }
        if let Ok(field) = key.parse::<FlagField>() {
            let checked = value
                .trim()
                .parse::<bool>()
                .map_err(|_| ModelError::MalformedAssignment(raw.to_string()))?;
            return Ok(ScalarUpdate::Flag(field, checked));
        }
        Err(ModelError::UnknownField {
            kind: "scalar field",
            name: key.to_string(),
        })
    }
}

/// A boolean inside one of the nested groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedFlag {
    Section(SectionFlag),
    Module(ModuleFlag),
}

impl FromStr for NestedFlag {
    type Err = ModelError;

    /// Accepts `section:<key>` or `module:<key>`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once(':') {
            Some(("section", key)) => Ok(NestedFlag::Section(key.parse()?)),
            Some(("module", key)) => Ok(NestedFlag::Module(key.parse()?)),
            _ => Err(ModelError::UnknownField {
                kind: "nested flag",
                name: value.to_string(),
            }),
        }
    }
}

/// Where an externally chosen file is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    Avatar,
    Resume,
    LogoImage,
    ProjectThumbnail(usize),
}

impl AttachmentSlot {
    /// Multipart part name. Project thumbnails have none because they are
    /// never transmitted.
    pub fn part_name(self) -> Option<&'static str> {
        match self {
            AttachmentSlot::Avatar => Some("avatar"),
            AttachmentSlot::Resume => Some("resume"),
            AttachmentSlot::LogoImage => Some("logoImage"),
            AttachmentSlot::ProjectThumbnail(_) => None,
        }
    }

    /// File picker filter hint.
    pub fn accept(self) -> Option<&'static str> {
        match self {
            AttachmentSlot::Avatar | AttachmentSlot::LogoImage => Some("image/*"),
            AttachmentSlot::Resume => Some(".pdf"),
            AttachmentSlot::ProjectThumbnail(_) => None,
        }
    }

    /// Whether a file with this name and MIME type passes [`accept`](Self::accept).
    /// Slots without a filter accept anything.
    pub fn accepts(self, file_name: &str, mime_type: &str) -> bool {
        match self.accept() {
            None => true,
            Some(filter) => match filter.strip_suffix("/*") {
                Some(top_level) => mime_type
                    .split_once('/')
                    .is_some_and(|(kind, _)| kind.eq_ignore_ascii_case(top_level)),
                None => file_name.to_ascii_lowercase().ends_with(filter),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_keys_round_trip_through_from_str() {
        for field in TextField::ALL {
            assert_eq!(field.key().parse::<TextField>().expect("parse"), *field);
        }
        for field in ChoiceField::ALL {
            assert_eq!(field.key().parse::<ChoiceField>().expect("parse"), *field);
        }
    }

    #[test]
    fn unknown_selector_reports_kind_and_name() {
        let err = "favouriteColour".parse::<TextField>().unwrap_err();
        assert_eq!(err.to_string(), "unknown text field `favouriteColour`");
    }

    #[test]
    fn every_choice_field_has_at_least_one_option() {
        for field in ChoiceField::ALL {
            assert!(!field.options().is_empty(), "{field} has no options");
        }
    }

    #[test]
    fn parses_text_choice_and_flag_assignments() {
        assert_eq!(
            ScalarUpdate::parse_assignment("fullName=Alex Cormier").expect("text"),
            ScalarUpdate::Text(TextField::FullName, "Alex Cormier".into())
        );
        assert_eq!(
            ScalarUpdate::parse_assignment("theme=light").expect("choice"),
            ScalarUpdate::Choice(ChoiceField::Theme, "light".into())
        );
        assert_eq!(
            ScalarUpdate::parse_assignment("glassEffect=false").expect("flag"),
            ScalarUpdate::Flag(FlagField::GlassEffect, false)
        );
        assert_eq!(
            ScalarUpdate::parse_assignment("tagline=").expect("empty"),
            ScalarUpdate::Text(TextField::Tagline, String::new())
        );
    }

    #[test]
    fn rejects_assignment_without_equals_or_bad_flag() {
        assert!(matches!(
            ScalarUpdate::parse_assignment("fullName"),
            Err(ModelError::MalformedAssignment(_))
        ));
        assert!(matches!(
            ScalarUpdate::parse_assignment("newsletter=yes"),
            Err(ModelError::MalformedAssignment(_))
        ));
    }

    #[test]
    fn parses_nested_flags() {
        assert_eq!(
            "section:blog".parse::<NestedFlag>().expect("section"),
            NestedFlag::Section(SectionFlag::Blog)
        );
        assert_eq!(
            "module:techStack".parse::<NestedFlag>().expect("module"),
            NestedFlag::Module(ModuleFlag::TechStack)
        );
        assert!("widget:clock".parse::<NestedFlag>().is_err());
        assert!("section:footer".parse::<NestedFlag>().is_err());
    }

    #[test]
    fn only_top_level_slots_have_part_names() {
        assert_eq!(AttachmentSlot::Avatar.part_name(), Some("avatar"));
        assert_eq!(AttachmentSlot::LogoImage.part_name(), Some("logoImage"));
        assert_eq!(AttachmentSlot::Resume.part_name(), Some("resume"));
        assert_eq!(AttachmentSlot::ProjectThumbnail(0).part_name(), None);
        assert_eq!(AttachmentSlot::Resume.accept(), Some(".pdf"));
    }

    #[test]
    fn accepts_follows_the_picker_filter() {
        assert!(AttachmentSlot::Avatar.accepts("me.png", "image/png"));
        assert!(!AttachmentSlot::Avatar.accepts("cv.pdf", "application/pdf"));
        assert!(AttachmentSlot::Resume.accepts("CV.PDF", "application/pdf"));
        assert!(!AttachmentSlot::Resume.accepts("cv.docx", "application/octet-stream"));
        assert!(AttachmentSlot::ProjectThumbnail(0).accepts("clip.mov", "video/quicktime"));
    }
}
