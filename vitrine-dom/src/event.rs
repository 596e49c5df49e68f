/// Page events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click; `target` is the innermost element hit, if any
    Click { target: Option<String> },
    /// Form control lost focus
    Blur { target: String },
    /// Form control value changed; `value` is the new value
    Input { target: String, value: String },
    /// Form submission requested
    Submit { target: String },
    /// Window scrolled to a vertical offset
    Scroll { y: i32 },
    /// Window viewport resized
    Resize { viewport_height: i32 },
}

impl Event {
    /// The targeted element, for events that have one.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target } => target.as_deref(),
            Self::Blur { target } | Self::Input { target, .. } | Self::Submit { target } => {
                Some(target)
            }
            Self::Scroll { .. } | Self::Resize { .. } => None,
        }
    }
}

/// What a handler did with an event.
///
/// Ordered so that combining results from several handlers keeps the strongest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventResult {
    /// Nobody handled the event
    #[default]
    Ignored,
    /// Handled; the host's default action may still run
    Consumed,
    /// Handled, and the host must not run its default action (navigation, form post)
    DefaultPrevented,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }
}
