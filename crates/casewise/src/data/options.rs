use std::fmt;
use std::sync::Arc;

/// Which parameters the default action receives when no case matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultParams {
    /// The default action gets the same parameters a matching case would.
    #[default]
    Forward,
    /// The default action is always called with no parameters.
    Withhold,
}

/// Stages a resolution passes through.
///
/// A resolution reports `SwitchResolved` once, `CaseTested` for every case it
/// evaluates, then ends in either `Dispatched` or `Failed`. An absent switch
/// reports `Failed` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    SwitchResolved,
    CaseTested,
    Dispatched,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::SwitchResolved => write!(f, "SwitchResolved"),
            Phase::CaseTested => write!(f, "CaseTested"),
            Phase::Dispatched => write!(f, "Dispatched"),
            Phase::Failed => write!(f, "Failed"),
        }
    }
}

/// A single observation handed to [`SelectOptions::on_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub phase: Phase,
    /// Index of the case involved. `None` for the switch, the default action,
    /// or a failure outside the case scan.
    pub case: Option<usize>,
    /// Verdict of a `CaseTested` event.
    pub matched: bool,
}

impl Event {
    pub(crate) fn switch_resolved() -> Self {
        Self { phase: Phase::SwitchResolved, case: None, matched: false }
    }

    pub(crate) fn case_tested(index: usize, matched: bool) -> Self {
        Self { phase: Phase::CaseTested, case: Some(index), matched }
    }

    pub(crate) fn dispatched(case: Option<usize>) -> Self {
        Self { phase: Phase::Dispatched, case, matched: case.is_some() }
    }

    pub(crate) fn failed(case: Option<usize>) -> Self {
        Self { phase: Phase::Failed, case, matched: false }
    }
}

/// Configuration for a selection.
///
/// # Examples
///
/// ```
/// use casewise::{DefaultParams, Event, SelectOptions};
/// use std::sync::Arc;
///
/// let options = SelectOptions::default()
///     .default_params(DefaultParams::Withhold)
///     .on_event(Arc::new(|event: &Event| println!("{}", event.phase)));
/// ```
#[derive(Clone, Default)]
pub struct SelectOptions {
    /// Parameter policy for the default action.
    ///
    /// Default: [`DefaultParams::Forward`]
    pub default_params: DefaultParams,

    /// Observer invoked at every phase of every resolution.
    ///
    /// Shared by all resolutions of a reusable selection, so it must not
    /// assume calls arrive from a single resolution.
    ///
    /// Default: None
    pub on_event: Option<Arc<dyn Fn(&Event) + Send + Sync>>,
}

impl fmt::Debug for SelectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOptions")
            .field("default_params", &self.default_params)
            .field("on_event", &self.on_event.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl SelectOptions {
    #[must_use]
    pub fn default_params(mut self, default_params: DefaultParams) -> Self {
        self.default_params = default_params;
        self
    }

    #[must_use]
    pub fn on_event(mut self, on_event: Arc<dyn Fn(&Event) + Send + Sync>) -> Self {
        self.on_event = Some(on_event);
        self
    }

    pub(crate) fn report(&self, event: Event) {
        if let Some(ref callback) = self.on_event {
            callback(&event);
        }
    }
}
