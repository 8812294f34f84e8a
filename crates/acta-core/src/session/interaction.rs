//! Interaction kinds and conversion detection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Type of a client interaction event.
///
/// Labels outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InteractionKind {
    CtaClick,
    FormSubmit,
    PurchaseIntent,
    DownloadClick,
    SignupClick,
    DemoRequest,
    View,
    Hover,
    Scroll,
    Click,
    Play,
    Rotate,
    Zoom,
    Close,
    Other(String),
}

impl InteractionKind {
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "cta_click" => Self::CtaClick,
            "form_submit" => Self::FormSubmit,
            "purchase_intent" => Self::PurchaseIntent,
            "download_click" => Self::DownloadClick,
            "signup_click" => Self::SignupClick,
            "demo_request" => Self::DemoRequest,
            "view" => Self::View,
            "hover" => Self::Hover,
            "scroll" => Self::Scroll,
            "click" => Self::Click,
            "play" => Self::Play,
            "rotate" => Self::Rotate,
            "zoom" => Self::Zoom,
            "close" => Self::Close,
            _ => Self::Other(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::CtaClick => "cta_click",
            Self::FormSubmit => "form_submit",
            Self::PurchaseIntent => "purchase_intent",
            Self::DownloadClick => "download_click",
            Self::SignupClick => "signup_click",
            Self::DemoRequest => "demo_request",
            Self::View => "view",
            Self::Hover => "hover",
            Self::Scroll => "scroll",
            Self::Click => "click",
            Self::Play => "play",
            Self::Rotate => "rotate",
            Self::Zoom => "zoom",
            Self::Close => "close",
            Self::Other(label) => label,
        }
    }

    /// Whether this kind is in the fixed conversion-event set.
    pub fn is_conversion_kind(&self) -> bool {
        matches!(
            self,
            Self::CtaClick
                | Self::FormSubmit
                | Self::PurchaseIntent
                | Self::DownloadClick
                | Self::SignupClick
                | Self::DemoRequest
        )
    }
}

impl From<String> for InteractionKind {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<InteractionKind> for String {
    fn from(kind: InteractionKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload attached to an interaction event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionData {
    pub is_conversion: Option<bool>,
    pub conversion_value: Option<f64>,
    #[serde(flatten)]
    pub metadata: BTreeMap<String, Value>,
}

/// Decides whether an interaction converts the session.
///
/// True for any kind in the conversion set regardless of payload, and for
/// any other kind whose payload flags a conversion or carries a positive
/// value.
pub fn is_conversion_event(kind: &InteractionKind, data: &InteractionData) -> bool {
    kind.is_conversion_kind()
        || data.is_conversion == Some(true)
        || data.conversion_value.is_some_and(|v| v > 0.0)
}
