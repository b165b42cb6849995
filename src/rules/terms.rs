//! Prohibited-term tables for medical advertising
//!
//! Terms drawn from the CFM advertising code. Each category carries one
//! remediation template and one citation.

use crate::rules::RuleCategory;

/// A compiled-in category definition
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub category: RuleCategory,
    pub terms: &'static [&'static str],

    /// `{term}` is replaced by the matched term
    pub suggestion: &'static str,

    pub citation: &'static str,
}

impl CategoryDef {
    pub const fn new(
        category: RuleCategory,
        terms: &'static [&'static str],
        suggestion: &'static str,
        citation: &'static str,
    ) -> Self {
        Self {
            category,
            terms,
            suggestion,
            citation,
        }
    }
}

pub const GUARANTEES: CategoryDef = CategoryDef::new(
    RuleCategory::Guarantees,
    &[
        "garantia",
        "garantido",
        "garanto",
        "certeza",
        "100%",
        "milagre",
        "cura garantida",
        "resultado certo",
    ],
    "Evite prometer resultados. Foque nos benefícios do procedimento e em educar o paciente sobre expectativas realistas.",
    "CFM - Art. 112",
);

pub const SENSATIONALISM: CategoryDef = CategoryDef::new(
    RuleCategory::Sensationalism,
    &[
        "revolucionário",
        "único no brasil",
        "segredo",
        "exclusivo",
        "fórmula mágica",
    ],
    "Troque \"{term}\" por uma linguagem mais sóbria e informativa. Destaque suas qualificações e a qualidade do serviço sem exageros.",
    "CFM - Art. 114",
);

pub const BEFORE_AFTER: CategoryDef = CategoryDef::new(
    RuleCategory::BeforeAfter,
    &["antes e depois", "antes/depois", "antes x depois"],
    "A exibição de \"antes e depois\" é vedada. Descreva os benefícios do tratamento de forma textual e educativa.",
    "CFM - Res. 1.974/11, Art. 3º, § 1º",
);

pub const PRICES: CategoryDef = CategoryDef::new(
    RuleCategory::Prices,
    &[
        "r$",
        "reais",
        "desconto",
        "promoção",
        "gratuito",
        "grátis",
        "preço",
        "valor",
        "custo",
        "barato",
    ],
    "A divulgação de preços e promoções é proibida. Informe que valores são fornecidos em consulta, conforme regulamentação.",
    "CFM - Art. 115",
);

pub const SUPERLATIVES: CategoryDef = CategoryDef::new(
    RuleCategory::Superlatives,
    &[
        "o melhor",
        "a melhor",
        "o maior",
        "o único",
        "superior a",
        "incomparável",
    ],
    "Substitua superlativos como \"{term}\" por descrições objetivas da qualidade do seu serviço ou tecnologia.",
    "CFM - Art. 114",
);

pub const SELF_PROMOTION: CategoryDef = CategoryDef::new(
    RuleCategory::SelfPromotion,
    &[
        "dr. fulano, o melhor",
        "a clínica mais moderna",
        "equipamentos de ponta",
    ],
    "Evite autopromoção exagerada. Foque em fornecer informações úteis e educativas para o paciente.",
    "CFM - Art. 113",
);

/// All built-in categories, in iteration order
pub const CATEGORY_TABLE: &[CategoryDef] = &[
    GUARANTEES,
    SENSATIONALISM,
    BEFORE_AFTER,
    PRICES,
    SUPERLATIVES,
    SELF_PROMOTION,
];

/// Built-in definition for a category
pub fn definition(category: RuleCategory) -> &'static CategoryDef {
    match category {
        RuleCategory::Guarantees => &GUARANTEES,
        RuleCategory::Sensationalism => &SENSATIONALISM,
        RuleCategory::BeforeAfter => &BEFORE_AFTER,
        RuleCategory::Prices => &PRICES,
        RuleCategory::Superlatives => &SUPERLATIVES,
        RuleCategory::SelfPromotion => &SELF_PROMOTION,
    }
}
