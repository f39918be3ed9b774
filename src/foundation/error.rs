pub type CardResult<T> = Result<T, CardError>;

#[derive(thiserror::Error, Debug)]
pub enum CardError {
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("asset unavailable for template '{template}': {reason}")]
    AssetUnavailable { template: String, reason: String },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("missing required input: {0}")]
    MissingRequiredInput(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error("io error: {0}")]
    Io(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    pub fn unknown_template(id: impl Into<String>) -> Self {
        Self::UnknownTemplate(id.into())
    }

    pub fn asset_unavailable(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AssetUnavailable {
            template: template.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry(msg.into())
    }

    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingRequiredInput(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}
