use crate::{failure::Failure, fault::Fault};
use std::future::Future;

/// Three-variant outcome adding the business-failure channel: a value, a
/// recognized [`Failure`], or an unexpected [`Fault`].
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum RichOutcome<T = ()> {
    Value(T),
    Failure(Failure),
    Fault(Fault),
}

outcome_family!(RichOutcome, [From<Fault> + From<Failure>]);
failure_aware!(RichOutcome);
arity_helpers!(RichOutcome);

impl<T> RichOutcome<T> {
    pub fn from_error(error: anyhow::Error) -> Self {
        RichOutcome::Fault(Fault::from(error))
    }

    fn split<O>(self) -> Result<T, O>
    where
        O: From<Fault> + From<Failure>,
    {
        match self {
            RichOutcome::Value(value) => Ok(value),
            RichOutcome::Failure(failure) => Err(O::from(failure)),
            RichOutcome::Fault(fault) => Err(O::from(fault)),
        }
    }

    /// Merges two independent outcomes into a pair, ranking
    /// Fault > Failure > Value. Two faults aggregate, two failures join their
    /// messages.
    pub fn combine<U>(self, other: RichOutcome<U>) -> RichOutcome<(T, U)> {
        match (self, other) {
            (RichOutcome::Fault(a), RichOutcome::Fault(b)) => {
                RichOutcome::Fault(Fault::aggregate(a, b))
            }
            (RichOutcome::Fault(fault), _) | (_, RichOutcome::Fault(fault)) => {
                RichOutcome::Fault(fault)
            }
            (RichOutcome::Failure(a), RichOutcome::Failure(b)) => {
                RichOutcome::Failure(a.combine(&b))
            }
            (RichOutcome::Failure(failure), _) | (_, RichOutcome::Failure(failure)) => {
                RichOutcome::Failure(failure)
            }
            (RichOutcome::Value(a), RichOutcome::Value(b)) => RichOutcome::Value((a, b)),
        }
    }

    pub fn fold<R, V, L, F>(self, on_value: V, on_failure: L, on_fault: F) -> R
    where
        V: FnOnce(T) -> R,
        L: FnOnce(Failure) -> R,
        F: FnOnce(Fault) -> R,
    {
        match self {
            RichOutcome::Value(value) => on_value(value),
            RichOutcome::Failure(failure) => on_failure(failure),
            RichOutcome::Fault(fault) => on_fault(fault),
        }
    }

    pub async fn fold_async<R, V, VF, L, LF, F, FF>(
        self,
        on_value: V,
        on_failure: L,
        on_fault: F,
    ) -> R
    where
        V: FnOnce(T) -> VF,
        VF: Future<Output = R>,
        L: FnOnce(Failure) -> LF,
        LF: Future<Output = R>,
        F: FnOnce(Fault) -> FF,
        FF: Future<Output = R>,
    {
        match self {
            RichOutcome::Value(value) => on_value(value).await,
            RichOutcome::Failure(failure) => on_failure(failure).await,
            RichOutcome::Fault(fault) => on_fault(fault).await,
        }
    }

    /// Materializes the outcome at a boundary. A failure surfaces as its
    /// (lazily built) fault.
    pub fn into_result(self) -> anyhow::Result<T> {
        match self {
            RichOutcome::Value(value) => Ok(value),
            RichOutcome::Failure(failure) => Err(failure.as_fault().into_error()),
            RichOutcome::Fault(fault) => Err(fault.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{failure::FailureError, outcome::Outcome, testing::CallProbe};

    #[test]
    fn failure_beats_value_and_fault_beats_failure() {
        let e1 = Fault::msg("e1");

        assert_eq!(
            RichOutcome::from_value(1).combine(RichOutcome::<i32>::from_failure("x".into())),
            RichOutcome::Failure(Failure::new("x"))
        );
        assert_eq!(
            RichOutcome::<i32>::from_fault(e1.clone())
                .combine(RichOutcome::<i32>::from_failure("x".into())),
            RichOutcome::Fault(e1.clone())
        );
        assert_eq!(
            RichOutcome::<i32>::from_failure("x".into())
                .combine(RichOutcome::<i32>::from_fault(e1.clone())),
            RichOutcome::Fault(e1)
        );
    }

    #[test]
    fn two_failures_join() {
        let merged = RichOutcome::<()>::from_failure("a".into())
            .merge(RichOutcome::from_failure("b".into()));

        assert_eq!(merged.failure().map(Failure::message), Some("a and b"));
    }

    #[test]
    fn run_can_switch_family_and_arity() {
        let bound: RichOutcome<String> =
            RichOutcome::from_value(3).run(|v| RichOutcome::from_value(v.to_string()));
        assert_eq!(bound, RichOutcome::Value("3".to_string()));

        let probe = CallProbe::new();
        let skipped: RichOutcome = RichOutcome::<i32>::failed().run(|_| {
            probe.hit();
            RichOutcome::success()
        });
        assert_eq!(skipped, RichOutcome::Failure(Failure::generic()));
        assert_eq!(probe.count(), 0);
    }

    #[test]
    fn outcome_binds_into_rich() {
        let bound: RichOutcome<i32> =
            Outcome::from_value(1).run(|_| RichOutcome::from_failure("nope".into()));

        assert!(bound.is_failure());
    }

    #[test]
    fn into_result_materializes_failure() {
        let failure = Failure::new("rejected");
        let error = RichOutcome::<()>::from_failure(failure.clone()).into_result().unwrap_err();

        assert!(failure.is_materialized());
        assert_eq!(
            error.downcast_ref::<Fault>().and_then(|f| f.downcast_ref::<FailureError>()),
            Some(&FailureError {
                message: "rejected".into()
            })
        );
    }

    #[test]
    fn fold_routes_every_variant() {
        let describe = |outcome: RichOutcome<i32>| {
            outcome.fold(
                |v| format!("value {}", v),
                |failure| format!("failure {}", failure),
                |fault| format!("fault {}", fault.is_impossible()),
            )
        };

        assert_eq!(describe(RichOutcome::from_value(1)), "value 1");
        assert_eq!(describe(RichOutcome::from_failure("x".into())), "failure x");
        assert_eq!(describe(RichOutcome::default()), "fault true");
    }

    #[test]
    fn pair_attach_third() {
        let triple = RichOutcome::from_value(1).attach('b').attach_third("c");
        assert_eq!(triple, RichOutcome::Value((1, 'b', "c")));

        let probe = CallProbe::new();
        let failed = RichOutcome::<(i32, char)>::from_failure("stop".into())
            .attach_third_with(|_, _| {
                probe.hit();
                RichOutcome::from_value(0u8)
            });
        assert!(failed.is_failure());
        assert_eq!(probe.count(), 0);
    }
}
