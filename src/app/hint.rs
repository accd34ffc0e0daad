/// First-run "how to interact" overlay. Shown at most once per page
/// session, the first time the model finishes loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    Pending,
    Showing,
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct InteractionHint {
    state: HintState,
}

impl InteractionHint {
    pub fn new() -> Self {
        Self {
            state: HintState::Pending,
        }
    }

    pub fn state(&self) -> HintState {
        self.state
    }

    pub fn is_showing(&self) -> bool {
        self.state == HintState::Showing
    }

    /// Returns `true` only for the load that made the hint appear.
    pub fn on_model_loaded(&mut self) -> bool {
        if self.state != HintState::Pending {
            return false;
        }
        self.state = HintState::Showing;
        true
    }

    /// Returns `true` if the hint was showing and is now gone.
    pub fn dismiss(&mut self) -> bool {
        if self.state != HintState::Showing {
            return false;
        }
        self.state = HintState::Dismissed;
        true
    }
}

impl Default for InteractionHint {
    fn default() -> Self {
        Self::new()
    }
}
