use super::model::{FetchError, NOT_FOUND_STATUS};
use contracts::domain::a025_smart_inventory::SmartInventory;

/// Why a load ended without a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorInfo {
    /// The API answered 404 for the identifier.
    NotFound,
    /// Network, server or payload failure; `message` is shown to the user.
    Other { message: String },
}

impl ErrorInfo {
    pub fn classify(error: &FetchError) -> Self {
        match error.status() {
            Some(NOT_FOUND_STATUS) => Self::NotFound,
            _ => Self::Other {
                message: error.to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// What the page currently knows about the inventory.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(SmartInventory),
    Errored(ErrorInfo),
}

impl Default for LoadState {
    fn default() -> Self {
        Self::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = FetchError::Status {
            status: 404,
            message: "Not found.".into(),
        };
        let info = ErrorInfo::classify(&err);
        assert_eq!(info, ErrorInfo::NotFound);
        assert!(info.is_not_found());
    }

    #[test]
    fn test_classify_everything_else_as_other() {
        let errors = [
            FetchError::Status {
                status: 500,
                message: "Internal error".into(),
            },
            FetchError::Status {
                status: 403,
                message: "Forbidden".into(),
            },
            FetchError::Network("connection refused".into()),
            FetchError::Decode("missing field `name`".into()),
        ];
        for err in errors {
            let info = ErrorInfo::classify(&err);
            assert!(!info.is_not_found(), "{:?}", err);
            assert_eq!(
                info,
                ErrorInfo::Other {
                    message: err.to_string()
                }
            );
        }
    }

    #[test]
    fn test_default_is_loading() {
        assert_eq!(LoadState::default(), LoadState::Loading);
    }
}
