use crate::serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Reply<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> Reply<T> {
    pub fn data(data: T) -> Self {
        Reply {
            success: true,
            message: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Reply {
            success: false,
            message: Some(message.into()),
            data: None,
            error,
        }
    }
}

impl Reply<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Reply {
            success: true,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }
}

/// Success body whose fields sit next to `success` instead of under `data`.
#[derive(Debug, Serialize)]
pub struct Report<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

impl<T> Report<T> {
    pub fn new(body: T) -> Self {
        Report { success: true, body }
    }
}
