//! Disclaimer rules
//!
//! Topic keywords that make a legal or informational notice advisable.

/// Results vary between patients
pub const RESULTS: &str = "Os resultados podem variar de pessoa para pessoa.";

/// Informative content, not a medical consultation
pub const CONSULTATION: &str = "Este post é informativo e não substitui uma consulta médica.";

/// Emergency guidance
pub const EMERGENCY: &str = "Em caso de emergência, procure o pronto-socorro mais próximo.";

/// A compiled-in trigger definition
#[derive(Debug, Clone, Copy)]
pub struct DisclaimerDef {
    /// Lowercase substrings
    pub triggers: &'static [&'static str],
    pub disclaimer: &'static str,
}

/// Built-in triggers, in iteration order
pub const TRIGGER_TABLE: &[DisclaimerDef] = &[
    DisclaimerDef {
        triggers: &["tratamento", "procedimento", "estético"],
        disclaimer: RESULTS,
    },
    DisclaimerDef {
        triggers: &["sintomas", "dor", "doença"],
        disclaimer: CONSULTATION,
    },
    DisclaimerDef {
        triggers: &["grave", "súbito", "urgência"],
        disclaimer: EMERGENCY,
    },
];
