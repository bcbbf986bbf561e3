#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Clicks the modal controller listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalInput {
    Trigger,
    Close,
    /// Click bubbling up to the modal; `on_backdrop` is true only when the
    /// target is the modal element itself.
    Click { on_backdrop: bool },
}

impl ModalState {
    /// Next state, or `None` when the input is ignored.
    pub fn next(self, input: ModalInput) -> Option<ModalState> {
        match input {
            ModalInput::Trigger => Some(ModalState::Open),
            ModalInput::Close => Some(ModalState::Closed),
            ModalInput::Click { on_backdrop: true } => Some(ModalState::Closed),
            ModalInput::Click { on_backdrop: false } => None,
        }
    }

    #[inline]
    pub fn display(self) -> &'static str {
        match self {
            ModalState::Open => "flex",
            ModalState::Closed => "none",
        }
    }

    /// Iframe source for this state; clearing it stops playback.
    #[inline]
    pub fn embed_src(self, video_url: &str) -> &str {
        match self {
            ModalState::Open => video_url,
            ModalState::Closed => "",
        }
    }

    pub fn from_display(display: &str) -> Self {
        if display == "none" || display.is_empty() {
            ModalState::Closed
        } else {
            ModalState::Open
        }
    }
}
