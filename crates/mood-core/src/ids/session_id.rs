use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifies one run of the onboarding flow.
///
/// Only used as tracing context; nothing is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl_id!(SessionId);
