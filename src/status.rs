//! Status categories and the viewer's UI state.

use crate::payload::Status;

/// Visual category derived from a response's `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Failure,
    Neutral,
}

impl StatusCategory {
    /// Map a (possibly missing) status to its category.
    pub fn for_status(status: Option<&Status>) -> Self {
        match status {
            Some(Status::Ok) => StatusCategory::Success,
            Some(Status::Error) | Some(Status::BreakerOpen) => StatusCategory::Failure,
            Some(Status::Other(_)) | None => StatusCategory::Neutral,
        }
    }

    /// CSS class applied to the styled status regions.
    pub fn class(self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Failure => "error",
            StatusCategory::Neutral => "default",
        }
    }

    pub fn icon(self) -> StatusIcon {
        match self {
            StatusCategory::Failure => StatusIcon::Cross,
            StatusCategory::Success | StatusCategory::Neutral => StatusIcon::Check,
        }
    }
}

/// What the status icon region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusIcon {
    Check,
    Cross,
    /// Spinner shown while a request is in flight.
    Loading { src: String },
}

impl StatusIcon {
    pub fn glyph(&self) -> Option<char> {
        match self {
            StatusIcon::Check => Some('\u{2714}'),
            StatusIcon::Cross => Some('\u{2717}'),
            StatusIcon::Loading { .. } => None,
        }
    }
}

/// Last status seen by the viewer. Starts out without one ("default").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub debug_status: Option<Status>,
}

impl UiState {
    pub fn category(&self) -> StatusCategory {
        StatusCategory::for_status(self.debug_status.as_ref())
    }

    /// Upper-cased status text, `DEFAULT` when no status was seen.
    pub fn label(&self) -> String {
        self.debug_status
            .as_ref()
            .map(|s| s.as_str().to_uppercase())
            .unwrap_or_else(|| "DEFAULT".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_table() {
        let cases = [
            (Some(Status::Ok), StatusCategory::Success, StatusIcon::Check),
            (Some(Status::Error), StatusCategory::Failure, StatusIcon::Cross),
            (Some(Status::BreakerOpen), StatusCategory::Failure, StatusIcon::Cross),
            (Some(Status::Other("half-open".into())), StatusCategory::Neutral, StatusIcon::Check),
            (None, StatusCategory::Neutral, StatusIcon::Check),
        ];
        for (status, category, icon) in cases {
            let got = StatusCategory::for_status(status.as_ref());
            assert_eq!(got, category, "status {:?}", status);
            assert_eq!(got.icon(), icon);
        }
    }

    #[test]
    fn classes() {
        assert_eq!(StatusCategory::Success.class(), "success");
        assert_eq!(StatusCategory::Failure.class(), "error");
        assert_eq!(StatusCategory::Neutral.class(), "default");
    }

    #[test]
    fn ui_state_labels() {
        let mut state = UiState::default();
        assert_eq!(state.label(), "DEFAULT");
        assert_eq!(state.category(), StatusCategory::Neutral);

        state.debug_status = Some(Status::BreakerOpen);
        assert_eq!(state.label(), "BREAKER-OPEN");
        assert_eq!(state.category(), StatusCategory::Failure);
    }
}
