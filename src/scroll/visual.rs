use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderState {
    #[default]
    Top,
    Scrolled,
}

impl HeaderState {
    pub fn class(self) -> Option<&'static str> {
        match self {
            HeaderState::Top => None,
            HeaderState::Scrolled => Some("scrolled"),
        }
    }
}

/// Visual state of the offset-dependent page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisualState {
    pub header: HeaderState,
    pub back_to_top_visible: bool,
}

impl VisualState {
    pub fn for_offset(offset: f64) -> Self {
        Self {
            header: if offset > config::HEADER_SCROLLED_AFTER {
                HeaderState::Scrolled
            } else {
                HeaderState::Top
            },
            back_to_top_visible: offset > config::BACK_TO_TOP_AFTER,
        }
    }
}
