use thiserror::Error;

pub type Result<T> = std::result::Result<T, HubError>;

#[derive(Debug, Error, PartialEq)]
pub enum HubError {
    #[error("no provider with id {0}")]
    ProviderNotFound(u32),

    #[error("no property with id {0}")]
    PropertyNotFound(u32),

    #[error("{0} is unavailable")]
    Unavailable(String),
}

impl HubError {
    /// Message shown to the user when a flow aborts on this error
    pub fn user_message(&self) -> String {
        match self {
            HubError::ProviderNotFound(_) => {
                "That professional is no longer listed. Please pick another.".to_string()
            }
            HubError::PropertyNotFound(_) => {
                "That property is no longer available. Please pick another stay.".to_string()
            }
            HubError::Unavailable(what) => format!("{what} is unavailable right now."),
        }
    }
}
