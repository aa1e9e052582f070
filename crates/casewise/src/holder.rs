//! Case storage and the first-match-wins resolution shared by both modes.
//!
//! [`CaseList`] owns the ordered cases and the default action. It never
//! stores per-resolution state: every outcome travels back through the
//! returned future, so one list can serve overlapping resolutions.

use tracing::debug;

use crate::data::{Action, Case, DefaultParams, Event, Scalar, SelectOptions, Spec, Switch, Value};
use crate::effects::{dispatch_action, evaluate_case, resolve_switch};
use crate::error::{Error, Result};

/// Ordered `(case, action)` pairs plus an optional default.
#[derive(Debug, Clone, Default)]
pub struct CaseList {
    entries: Vec<(Case, Action)>,
    default: Option<Action>,
    options: SelectOptions,
}

impl CaseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a case. Insertion order is evaluation order.
    pub fn push(&mut self, case: Case, action: Action) {
        self.entries.push((case, action));
    }

    pub fn set_default(&mut self, action: Action) {
        self.default = Some(action);
    }

    pub fn set_options(&mut self, options: SelectOptions) {
        self.options = options;
    }

    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Resolve `switch` once, then scan the cases in order.
    ///
    /// The first matching case dispatches its action with `params` and no
    /// later case is evaluated. With no match the default runs; without a
    /// default the resolution fails with [`Error::NoMatch`].
    pub async fn resolve(&self, switch: &Switch, params: &[Scalar]) -> Result<Option<Scalar>> {
        let mut at = None;
        let outcome = self.scan(switch, params, &mut at).await;
        if let Err(ref err) = outcome {
            self.report_failure(at, err);
        }
        outcome
    }

    /// Report a failure raised before the scan could start.
    pub(crate) fn fail(&self, err: Error) -> Error {
        self.report_failure(None, &err);
        err
    }

    fn report_failure(&self, at: Option<usize>, err: &Error) {
        debug!(case = ?at, error = %err, "resolution failed");
        self.options.report(Event::failed(at));
    }

    async fn scan(&self, switch: &Switch, params: &[Scalar], at: &mut Option<usize>) -> Result<Option<Scalar>> {
        let resolved = resolve_switch(switch).await?;
        self.options.report(Event::switch_resolved());
        debug!(switch = %resolved, cases = self.entries.len(), "switch resolved");

        for (index, (case, action)) in self.entries.iter().enumerate() {
            *at = Some(index);
            let matched = evaluate_case(&resolved, case, index).await?;
            self.options.report(Event::case_tested(index, matched));
            if matched {
                let outcome = dispatch_action(action, params).await?;
                debug!(index, "case matched");
                self.options.report(Event::dispatched(Some(index)));
                return Ok(outcome);
            }
        }
        *at = None;

        let Some(action) = &self.default else {
            return Err(Error::NoMatch);
        };
        let params = match self.options.default_params {
            DefaultParams::Forward => params,
            DefaultParams::Withhold => &[][..],
        };
        let outcome = dispatch_action(action, params).await?;
        debug!("default dispatched");
        self.options.report(Event::dispatched(None));
        Ok(outcome)
    }
}

/// Holder for a selection whose switch is bound up front.
#[derive(Debug, Clone, Default)]
pub struct ImmediateHolder {
    cases: CaseList,
    switch: Option<Switch>,
    params: Vec<Scalar>,
}

impl ImmediateHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the switch and the parameters handed to the winning action.
    ///
    /// An absent switch is accepted here and reported when resolving.
    pub fn load_switch(&mut self, switch: impl Into<Value>, params: Vec<Scalar>) {
        self.switch = Spec::try_from(switch.into()).ok();
        self.params = params;
    }

    pub fn cases(&self) -> &CaseList {
        &self.cases
    }

    pub fn cases_mut(&mut self) -> &mut CaseList {
        &mut self.cases
    }

    /// Resolve the bound switch. Repeated calls re-run the same scan.
    pub async fn resolve(&self) -> Result<Option<Scalar>> {
        let Some(switch) = &self.switch else {
            return Err(self.cases.fail(Error::NullSwitch));
        };
        self.cases.resolve(switch, &self.params).await
    }
}

/// Holder for a reusable selection; each call brings its own switch.
#[derive(Debug, Clone, Default)]
pub struct DeferredHolder {
    cases: CaseList,
}

impl DeferredHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cases(&self) -> &CaseList {
        &self.cases
    }

    pub fn cases_mut(&mut self) -> &mut CaseList {
        &mut self.cases
    }

    pub async fn resolve_with_switch(&self, switch: &Switch, params: &[Scalar]) -> Result<Option<Scalar>> {
        self.cases.resolve(switch, params).await
    }
}
