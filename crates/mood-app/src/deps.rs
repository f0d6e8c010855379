//! # Flow Dependencies
//!
//! Parameter grouping for [`FlowOrchestrator`](crate::FlowOrchestrator)
//! construction. Not a builder: every port is required.

use std::sync::Arc;

use mood_core::ports::{FormPort, MessagePort, ScreenPort, TimerPort, UserRepositoryPort};

pub struct FlowDeps {
    // Presentation
    pub screens: Arc<dyn ScreenPort>,
    pub messages: Arc<dyn MessagePort>,
    pub forms: Arc<dyn FormPort>,

    // Infrastructure
    pub timer: Arc<dyn TimerPort>,
    pub users: Arc<dyn UserRepositoryPort>,
}
