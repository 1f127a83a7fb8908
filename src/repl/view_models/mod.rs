//! # View Models
//!
//! One view model per panel. Each owns its form and the remote call
//! controller bound to its endpoint; [`Panels`] aggregates them for the shell.

mod batch;
mod efficiency;
mod stability;


pub use batch::BatchPanel;
pub use efficiency::{EfficiencyPanel, COST, SUBSTRATE_CONCENTRATION};
pub use stability::{StabilityPanel, PH, PH_MAX, TEMPERATURE};

use crate::repl::models::{ErrorClearPolicy, UnknownField};
use crate::repl::services::HttpService;

/// Accepted spellings of each field name
const FIELD_ALIASES: &[(&str, &str)] = &[
    ("substrate", SUBSTRATE_CONCENTRATION),
    ("substrate_concentration", SUBSTRATE_CONCENTRATION),
    ("sub-con", SUBSTRATE_CONCENTRATION),
    ("temp", TEMPERATURE),
];

/// Map user-typed field names onto canonical ones
pub fn canonical_field_name(name: &str) -> String {
    let lower = name.trim().to_lowercase();
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(lower)
}

/// All panels of the application
pub struct Panels {
    pub efficiency: EfficiencyPanel,
    pub stability: StabilityPanel,
    pub batch: BatchPanel,
}

impl Panels {
    pub fn new(service: HttpService, policy: ErrorClearPolicy) -> Self {
        Self {
            efficiency: EfficiencyPanel::new(service.clone(), policy),
            stability: StabilityPanel::new(service.clone(), policy),
            batch: BatchPanel::new(service),
        }
    }

    /// Route a field change to the panel that owns the field
    pub fn handle_input(&mut self, name: &str, value: &str) -> Result<(), UnknownField> {
        let name = canonical_field_name(name);

        if self.efficiency.form().contains(&name) {
            self.efficiency.handle_input(&name, value)
        } else if self.stability.form().contains(&name) {
            self.stability.handle_input(&name, value)
        } else {
            Err(UnknownField(name))
        }
    }

    pub fn reset_all(&mut self) {
        self.efficiency.reset();
        self.stability.reset();
        self.batch.reset();
    }
}
