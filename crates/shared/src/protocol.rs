//! The `/generate` contract between the form and the portfolio generator.

pub const GENERATE_ROUTE: &str = "/generate";
pub const PORTFOLIO_DATA_FIELD: &str = "portfolioData";
pub const ARCHIVE_FILE_NAME: &str = "portfolio_ultimate.zip";

/// One binary part of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentPart {
    pub name: &'static str,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Everything that goes on the wire for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// JSON of the configuration with every attachment nulled.
    pub portfolio_data: String,
    pub parts: Vec<AttachmentPart>,
}

impl GenerateRequest {
    pub fn part(&self, name: &str) -> Option<&AttachmentPart> {
        self.parts.iter().find(|part| part.name == name)
    }
}
