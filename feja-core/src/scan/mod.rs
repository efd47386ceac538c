mod stepper;

pub use stepper::{
    COMPLETE_HOLD, MEDIA_QUERY_PHASE, PHASE_SETTLE, SCAN_PHASES, ScanPhase, ScanStepper,
    StepEvent, TICK,
};
