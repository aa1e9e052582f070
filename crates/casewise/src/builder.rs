//! Fluent construction of selections.
//!
//! A selection starts open: `on` appends cases and returns the builder.
//! `otherwise` records the default and seals it into a capability that only
//! offers the terminal operation of its mode:
//!
//! - [`PostBuilder`] seals into [`Post`], resolved with [`Post::exe`].
//! - [`SequenceBuilder`] seals into [`Sequence`], resolved with
//!   [`Sequence::match_value`] / [`Sequence::match_with`] as many times as
//!   needed.
//!
//! [`entry`] chooses the mode at runtime instead. Its [`Entry`] and [`Sealed`]
//! carry both terminals and refuse the one that does not belong to the mode.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::debug;

use crate::data::{Action, Case, Scalar, SelectOptions, Spec, Value};
use crate::error::{Error, Result};
use crate::holder::{DeferredHolder, ImmediateHolder};

/// Start a reusable selection with no switch.
pub fn select() -> SequenceBuilder {
    SequenceBuilder { holder: DeferredHolder::new() }
}

/// Start a one-shot selection over `switch`.
pub fn select_on(switch: impl Into<Value>) -> Result<PostBuilder> {
    select_with(switch, std::iter::empty::<Scalar>())
}

/// Start a one-shot selection over `switch`; the winning action receives
/// `params`.
///
/// Fails with [`Error::BadMatchArgument`] when `switch` is absent.
pub fn select_with<I>(switch: impl Into<Value>, params: I) -> Result<PostBuilder>
where
    I: IntoIterator,
    I::Item: Into<Scalar>,
{
    let switch = Spec::try_from(switch.into()).map_err(|_| Error::BadMatchArgument)?;
    let mut holder = ImmediateHolder::new();
    holder.load_switch(switch, collect_params(params));
    Ok(PostBuilder { holder })
}

/// Choose the mode from the switch.
///
/// No switch, or an undefined one, starts a reusable selection. A null switch
/// fails with [`Error::InvalidMatchArgument`]. Anything else starts a one-shot
/// selection bound to `switch` and `params`.
pub fn entry<I>(switch: Option<Value>, params: I) -> Result<Entry>
where
    I: IntoIterator,
    I::Item: Into<Scalar>,
{
    match switch {
        None | Some(Value::Undefined) => Ok(Entry::Sequence(select())),
        Some(Value::Null) => Err(Error::InvalidMatchArgument),
        Some(switch) => select_with(switch, params).map(Entry::Post),
    }
}

fn collect_params<I>(params: I) -> Vec<Scalar>
where
    I: IntoIterator,
    I::Item: Into<Scalar>,
{
    params.into_iter().map(Into::into).collect()
}

/// Open one-shot selection.
#[derive(Debug, Clone)]
pub struct PostBuilder {
    holder: ImmediateHolder,
}

impl PostBuilder {
    #[must_use]
    pub fn on(mut self, case: impl Into<Case>, action: impl Into<Action>) -> Self {
        self.holder.cases_mut().push(case.into(), action.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: SelectOptions) -> Self {
        self.holder.cases_mut().set_options(options);
        self
    }

    /// Seal with a default action.
    pub fn otherwise(mut self, action: impl Into<Action>) -> Post {
        self.holder.cases_mut().set_default(action.into());
        debug!(cases = self.holder.cases().len(), "one-shot selection sealed");
        Post { holder: self.holder }
    }

    /// Resolve without a default.
    pub async fn exe(&self) -> Result<Option<Scalar>> {
        resolve_post(&self.holder).await
    }
}

/// Sealed one-shot selection.
#[derive(Debug, Clone)]
pub struct Post {
    holder: ImmediateHolder,
}

impl Post {
    /// Resolve the bound switch.
    ///
    /// Every failure is reported as [`Error::Failed`] around the underlying
    /// error.
    pub async fn exe(&self) -> Result<Option<Scalar>> {
        resolve_post(&self.holder).await
    }
}

async fn resolve_post(holder: &ImmediateHolder) -> Result<Option<Scalar>> {
    holder.resolve().await.map_err(Error::failed)
}

/// Open reusable selection.
#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    holder: DeferredHolder,
}

impl SequenceBuilder {
    #[must_use]
    pub fn on(mut self, case: impl Into<Case>, action: impl Into<Action>) -> Self {
        self.holder.cases_mut().push(case.into(), action.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: SelectOptions) -> Self {
        self.holder.cases_mut().set_options(options);
        self
    }

    /// Seal with a default action.
    pub fn otherwise(mut self, action: impl Into<Action>) -> Sequence {
        self.holder.cases_mut().set_default(action.into());
        debug!(cases = self.holder.cases().len(), "reusable selection sealed");
        Sequence { holder: Arc::new(self.holder) }
    }

    /// Resolve `switch` with no parameters and without a default.
    pub async fn match_value(&self, switch: impl Into<Value>) -> Result<Option<Scalar>> {
        self.match_with(switch, std::iter::empty::<Scalar>()).await
    }

    /// Resolve `switch` without a default.
    pub async fn match_with<I>(&self, switch: impl Into<Value>, params: I) -> Result<Option<Scalar>>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let switch = switch.into();
        let params = collect_params(params);
        resolve_deferred(&self.holder, switch, params).await
    }
}

/// Sealed reusable selection.
///
/// Cloning is cheap and every clone shares the same cases. Resolutions are
/// independent of each other and may overlap.
#[derive(Debug, Clone)]
pub struct Sequence {
    holder: Arc<DeferredHolder>,
}

impl Sequence {
    /// Resolve `switch` with no parameters.
    pub fn match_value(&self, switch: impl Into<Value>) -> BoxFuture<'static, Result<Option<Scalar>>> {
        self.match_with(switch, std::iter::empty::<Scalar>())
    }

    /// Resolve `switch`; the winning action receives `params`.
    ///
    /// Failures are returned as they occur, without wrapping. The returned
    /// future owns everything it needs and can be spawned.
    pub fn match_with<I>(&self, switch: impl Into<Value>, params: I) -> BoxFuture<'static, Result<Option<Scalar>>>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        let holder = Arc::clone(&self.holder);
        let switch = switch.into();
        let params = collect_params(params);
        async move { resolve_deferred(&holder, switch, params).await }.boxed()
    }

    pub fn len(&self) -> usize {
        self.holder.cases().len()
    }

    pub fn is_empty(&self) -> bool {
        self.holder.cases().is_empty()
    }
}

async fn resolve_deferred(holder: &DeferredHolder, switch: Value, params: Vec<Scalar>) -> Result<Option<Scalar>> {
    let switch = Spec::try_from(switch).map_err(|_| holder.cases().fail(Error::InvalidSwitchResult))?;
    holder.resolve_with_switch(&switch, &params).await
}

/// An open selection whose mode was chosen at runtime.
#[derive(Debug, Clone)]
pub enum Entry {
    Post(PostBuilder),
    Sequence(SequenceBuilder),
}

impl Entry {
    #[must_use]
    pub fn on(self, case: impl Into<Case>, action: impl Into<Action>) -> Self {
        match self {
            Entry::Post(b) => Entry::Post(b.on(case, action)),
            Entry::Sequence(b) => Entry::Sequence(b.on(case, action)),
        }
    }

    #[must_use]
    pub fn options(self, options: SelectOptions) -> Self {
        match self {
            Entry::Post(b) => Entry::Post(b.options(options)),
            Entry::Sequence(b) => Entry::Sequence(b.options(options)),
        }
    }

    pub fn otherwise(self, action: impl Into<Action>) -> Sealed {
        match self {
            Entry::Post(b) => Sealed::Post(b.otherwise(action)),
            Entry::Sequence(b) => Sealed::Sequence(b.otherwise(action)),
        }
    }

    pub async fn exe(&self) -> Result<Option<Scalar>> {
        match self {
            Entry::Post(b) => b.exe().await,
            Entry::Sequence(_) => Err(Error::Unavailable("exe")),
        }
    }

    pub async fn match_value(&self, switch: impl Into<Value>) -> Result<Option<Scalar>> {
        self.match_with(switch, std::iter::empty::<Scalar>()).await
    }

    pub async fn match_with<I>(&self, switch: impl Into<Value>, params: I) -> Result<Option<Scalar>>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        match self {
            Entry::Post(_) => Err(Error::Unavailable("match")),
            Entry::Sequence(b) => b.match_with(switch, params).await,
        }
    }
}

/// A sealed selection whose mode was chosen at runtime.
#[derive(Debug, Clone)]
pub enum Sealed {
    Post(Post),
    Sequence(Sequence),
}

impl Sealed {
    pub async fn exe(&self) -> Result<Option<Scalar>> {
        match self {
            Sealed::Post(p) => p.exe().await,
            Sealed::Sequence(_) => Err(Error::Unavailable("exe")),
        }
    }

    pub async fn match_value(&self, switch: impl Into<Value>) -> Result<Option<Scalar>> {
        self.match_with(switch, std::iter::empty::<Scalar>()).await
    }

    pub async fn match_with<I>(&self, switch: impl Into<Value>, params: I) -> Result<Option<Scalar>>
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        match self {
            Sealed::Post(_) => Err(Error::Unavailable("match")),
            Sealed::Sequence(s) => s.match_with(switch, params).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_post_scalar_action() {
        let outcome = select_on(5).unwrap().on(5, "called").exe().await.unwrap();
        assert_eq!(outcome, Some(Scalar::from("called")));
    }

    #[tokio::test]
    async fn test_post_with_params() {
        let outcome = select_with(7, [5])
            .unwrap()
            .on(7, Spec::call(|p: &[Scalar]| format!("called {}", p[0].as_f64().unwrap_or(0.0) * 2.0)))
            .exe()
            .await
            .unwrap();
        assert_eq!(outcome, Some(Scalar::from("called 10")));
    }

    #[test]
    fn test_absent_switch_is_rejected() {
        assert!(matches!(select_on(Value::Null), Err(Error::BadMatchArgument)));
        assert!(matches!(select_on(()), Err(Error::BadMatchArgument)));
    }

    #[test]
    fn test_entry_dispatch() {
        let none: [Scalar; 0] = [];
        assert!(matches!(entry(None, none.clone()), Ok(Entry::Sequence(_))));
        assert!(matches!(entry(Some(Value::Undefined), none.clone()), Ok(Entry::Sequence(_))));
        assert!(matches!(entry(Some(Value::from(1)), none.clone()), Ok(Entry::Post(_))));
        assert!(matches!(entry(Some(Value::thunk(|| 1)), none.clone()), Ok(Entry::Post(_))));

        let err = entry(Some(Value::Null), none).unwrap_err();
        assert_eq!(err.to_string(), "Invalid match argument");
        assert_eq!(err.kind(), ErrorKind::InvalidInvocation);
    }

    #[tokio::test]
    async fn test_mode_misuse_is_refused() {
        let none: [Scalar; 0] = [];
        let post = entry(Some(Value::from(1)), none.clone()).unwrap().on(1, "one");
        let err = post.match_with(1, none.clone()).await.unwrap_err();
        assert_eq!(err.to_string(), "match not available");

        let sealed = post.otherwise("other");
        assert_eq!(sealed.exe().await.unwrap(), Some(Scalar::from("one")));
        assert_eq!(sealed.match_value(1).await.unwrap_err().kind(), ErrorKind::ModeMisuse);

        let sequence = entry(None, none).unwrap().on(1, "one");
        assert_eq!(sequence.exe().await.unwrap_err().to_string(), "exe not available");
        assert_eq!(sequence.match_value(1).await.unwrap(), Some(Scalar::from("one")));
        let sealed = sequence.otherwise("other");
        assert_eq!(sealed.match_value(2).await.unwrap(), Some(Scalar::from("other")));
        assert_eq!(sealed.exe().await.unwrap_err().to_string(), "exe not available");
    }

    #[tokio::test]
    async fn test_open_sequence_resolves_without_default() {
        let open = select().on(1, "one");
        assert_eq!(open.match_value(1).await.unwrap(), Some(Scalar::from("one")));
        assert_eq!(open.match_with(1, ["ignored"]).await.unwrap(), Some(Scalar::from("one")));
        let err = open.match_value(2).await.unwrap_err();
        // Deferred failures are not wrapped.
        assert!(matches!(err, Error::NoMatch));
    }

    #[tokio::test]
    async fn test_sequence_absent_switch() {
        let seq = select().otherwise("x");
        let err = seq.match_value(Value::Null).await.unwrap_err();
        assert!(matches!(err, Error::InvalidSwitchResult));
    }

    #[tokio::test]
    async fn test_post_failures_are_wrapped() {
        let err = select_on(5).unwrap().on(1, "one").on(2, "two").exe().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to resolve: No match and no default");
        assert!(matches!(err.root(), Error::NoMatch));
    }
}
