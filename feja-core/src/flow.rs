//! Onboarding flow state machine.
//!
//! The flow from first launch to the results screen is a fixed script:
//! welcome, permission gate, scan, scan-complete, results. Modeled as a
//! pure reducer so the whole flow can be exercised without a terminal.

/// Position in the onboarding script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// Welcome screen, waiting for the user to start
    Welcome,
    /// Permission gate shown, access not yet granted
    AwaitingPermission,
    /// Access granted, waiting for the user to start the scan
    PermissionGranted,
    /// Scan stepper running
    Scanning,
    /// Stepper finished, waiting for the user to view results
    ScanComplete,
    /// Results screen reached; onboarding is over
    ResultsReview,
}

/// Inputs that can move the flow forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
    /// User tapped "get started" on the welcome screen
    Start,
    /// Platform granted storage/media access
    AccessGranted,
    /// Platform denied storage/media access
    AccessDenied,
    /// User requested the scan
    BeginScan,
    /// Scan stepper signalled completion
    ScanFinished,
    /// User asked to see the results
    SeeResults,
}

/// Outcome of applying an event to the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowStep {
    /// State after the event
    pub state: FlowState,
    /// Whether a blocking permission alert should be raised
    pub alert: bool,
}

/// Apply one event to the flow. Events that do not fit the current state
/// are ignored and leave the state unchanged.
pub fn step(state: FlowState, event: FlowEvent) -> FlowStep {
    use FlowEvent::*;
    use FlowState::*;

    let next = match (state, event) {
        (Welcome, Start) => AwaitingPermission,
        (AwaitingPermission, AccessGranted) => PermissionGranted,
        (AwaitingPermission, AccessDenied) => {
            return FlowStep {
                state: AwaitingPermission,
                alert: true,
            };
        }
        (PermissionGranted, BeginScan) => Scanning,
        (Scanning, ScanFinished) => ScanComplete,
        (ScanComplete, SeeResults) => ResultsReview,
        (current, _) => current,
    };

    FlowStep {
        state: next,
        alert: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FlowEvent::*;
    use FlowState::*;

    fn run(start: FlowState, events: &[FlowEvent]) -> FlowState {
        events.iter().fold(start, |s, &e| step(s, e).state)
    }

    #[test]
    fn test_happy_path() {
        let end = run(
            Welcome,
            &[Start, AccessGranted, BeginScan, ScanFinished, SeeResults],
        );
        assert_eq!(end, ResultsReview);
    }

    #[test]
    fn test_denial_blocks_and_alerts() {
        let gate = step(Welcome, Start);
        assert_eq!(gate.state, AwaitingPermission);
        assert!(!gate.alert);

        let denied = step(gate.state, AccessDenied);
        assert_eq!(denied.state, AwaitingPermission);
        assert!(denied.alert);

        // Scan cannot start while still awaiting permission
        let stuck = step(denied.state, BeginScan);
        assert_eq!(stuck.state, AwaitingPermission);
    }

    #[test]
    fn test_denial_then_grant_recovers() {
        let end = run(
            Welcome,
            &[
                Start,
                AccessDenied,
                AccessDenied,
                AccessGranted,
                BeginScan,
                ScanFinished,
                SeeResults,
            ],
        );
        assert_eq!(end, ResultsReview);
    }

    #[test]
    fn test_out_of_order_events_ignored() {
        assert_eq!(step(Welcome, ScanFinished).state, Welcome);
        assert_eq!(step(Welcome, SeeResults).state, Welcome);
        assert_eq!(step(Scanning, AccessGranted).state, Scanning);
        assert_eq!(step(ResultsReview, Start).state, ResultsReview);
    }

    #[test]
    fn test_scan_finish_requires_scanning() {
        // Completion signals before the scan starts must not skip ahead
        assert_eq!(step(PermissionGranted, ScanFinished).state, PermissionGranted);
    }
}
