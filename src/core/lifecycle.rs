/// Initialized flag shared by every controller.
///
/// `begin` refuses a second initialization with a warning, so listeners and
/// timers are never registered twice.
#[derive(Debug)]
pub struct Lifecycle {
    name: &'static str,
    initialized: bool,
}

impl Lifecycle {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            initialized: false,
        }
    }

    /// Returns false (and warns) when already initialized.
    pub fn begin(&self) -> bool {
        if self.initialized {
            log::warn!("[{}] already initialized", self.name);
            return false;
        }
        true
    }

    pub fn mark_ready(&mut self) {
        self.initialized = true;
    }

    pub fn reset(&mut self) {
        self.initialized = false;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
