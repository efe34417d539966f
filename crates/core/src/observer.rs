/// Receives solver events and decides how a run should proceed.
///
/// Observers let callers record, plot, or cut short a run without changing
/// the solver's API. The `observe` method returns `Option<A>`, where
/// `Some(action)` requests a solver-specific action and `None` lets the
/// solver continue unchanged.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<f64, &'static str>>(mut observer: O, events: &[f64]) -> Vec<&'static str> {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1.0, 2.0, 3.0]).is_empty());
    }

    #[test]
    fn closure_observer_can_act_and_keep_state() {
        let mut seen = 0;
        let actions = drive(
            |event: &f64| {
                seen += 1;
                (*event > 1.5).then_some("stop")
            },
            &[1.0, 2.0, 3.0],
        );
        assert_eq!(actions, ["stop", "stop"]);
        assert_eq!(seen, 3);
    }
}
