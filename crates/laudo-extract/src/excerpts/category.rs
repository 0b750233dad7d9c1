//! Hazard categories and their keyword tables.
//!
//! The built-in lists are tuned for Brazilian labor-court defense documents
//! (contestações). They are plain data: a JSON file with the same layout as
//! [`KeywordTables`] replaces them without touching the matching logic.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::info;

use laudo_core::{Error, Result};

/// Topic an excerpt can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Unhealthy conditions, NR-15.
    Insalubrity,
    /// Hazardous conditions, NR-16.
    Periculosity,
    WorkAccident,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Insalubrity,
        Category::Periculosity,
        Category::WorkAccident,
    ];

    /// Stable wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Insalubrity => "insalubrity",
            Self::Periculosity => "periculosity",
            Self::WorkAccident => "work_accident",
        }
    }

    /// Label used in excerpt headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Insalubrity => "insalubridade",
            Self::Periculosity => "periculosidade",
            Self::WorkAccident => "acidente de trabalho",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "insalubrity" | "insalubridade" => Ok(Self::Insalubrity),
            "periculosity" | "periculosidade" => Ok(Self::Periculosity),
            "work_accident" | "acidente_trabalho" | "acidente_de_trabalho" | "acidente" => {
                Ok(Self::WorkAccident)
            }
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

const INSALUBRITY_REQUIRED: &[&str] = &[
    "insalubridade",
    "insalubre",
    "nr-15",
    "nr 15",
    "agente nocivo",
    "agentes nocivos",
    "agente insalubre",
    "agentes insalubres",
    "ruído",
    "calor",
    "agente químico",
    "agentes químicos",
    "agente biológico",
    "agentes biológicos",
    "poeira",
    "sílica",
    "hidrocarboneto",
    "limite de tolerância",
    "umidade",
    "frio",
];

const PERICULOSITY_REQUIRED: &[&str] = &[
    "periculosidade",
    "perigoso",
    "perigosa",
    "nr-16",
    "nr 16",
    "inflamável",
    "inflamáveis",
    "combustível",
    "explosivo",
    "explosivos",
    "energia elétrica",
    "eletricidade",
    "sistema elétrico de potência",
    "radiação ionizante",
    "substâncias radioativas",
    "segurança pessoal ou patrimonial",
    "roubo",
    "motocicleta",
    "área de risco",
];

const WORK_ACCIDENT_REQUIRED: &[&str] = &[
    "acidente de trabalho",
    "acidente do trabalho",
    "acidente típico",
    "acidente de trajeto",
    "doença ocupacional",
    "doença profissional",
    "doença do trabalho",
    "comunicação de acidente",
    "nexo causal",
    "concausa",
    "incapacidade laborativa",
    "lesão",
    "sequela",
    "estabilidade acidentária",
    "auxílio-doença acidentário",
    "b91",
];

/// Legal and procedural boilerplate that disqualifies a unit for every category.
const GLOBAL_EXCLUDED: &[&str] = &[
    "valor da causa",
    "sentença",
    "processo",
    "clt",
    "artigo",
    "honorários",
    "custas",
    "jurisprudência",
    "súmula",
    "recurso",
    "petição inicial",
    "procuração",
    "audiência",
    "tribunal",
];

/// Required and category-local excluded keywords for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSet {
    pub required: Vec<String>,
    pub excluded: Vec<String>,
}

impl KeywordSet {
    fn from_static(required: &[&str]) -> Self {
        Self {
            required: required.iter().map(|k| k.to_string()).collect(),
            excluded: Vec::new(),
        }
    }

    fn normalize(&mut self) {
        normalize_list(&mut self.required);
        normalize_list(&mut self.excluded);
    }
}

/// Keyword data for every category plus the shared exclusion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub insalubrity: KeywordSet,
    pub periculosity: KeywordSet,
    pub work_accident: KeywordSet,
    pub global_excluded: Vec<String>,
}

/// Built-in tables, built once and shared read-only.
pub static DEFAULT_TABLES: Lazy<KeywordTables> = Lazy::new(KeywordTables::default);

impl Default for KeywordTables {
    fn default() -> Self {
        let mut tables = Self {
            insalubrity: KeywordSet::from_static(INSALUBRITY_REQUIRED),
            periculosity: KeywordSet::from_static(PERICULOSITY_REQUIRED),
            work_accident: KeywordSet::from_static(WORK_ACCIDENT_REQUIRED),
            global_excluded: GLOBAL_EXCLUDED.iter().map(|k| k.to_string()).collect(),
        };
        tables.normalize();
        tables
    }
}

impl KeywordTables {
    /// Load tables from a JSON file. Absent fields keep the built-in lists.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let tables = Self::from_json(&content)?;
        info!(
            "Loaded keyword tables from {} ({} global exclusions)",
            path.display(),
            tables.global_excluded.len()
        );
        Ok(tables)
    }

    /// Parse tables from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let mut tables: KeywordTables = serde_json::from_str(content)?;
        tables.normalize();
        if Category::ALL
            .iter()
            .any(|c| tables.for_category(*c).required.is_empty())
        {
            return Err(Error::Config(
                "every category needs at least one required keyword".into(),
            ));
        }
        Ok(tables)
    }

    pub fn for_category(&self, category: Category) -> &KeywordSet {
        match category {
            Category::Insalubrity => &self.insalubrity,
            Category::Periculosity => &self.periculosity,
            Category::WorkAccident => &self.work_accident,
        }
    }

    fn normalize(&mut self) {
        self.insalubrity.normalize();
        self.periculosity.normalize();
        self.work_accident.normalize();
        normalize_list(&mut self.global_excluded);
    }
}

/// Lower-case, trim, drop blanks and repeated entries (first one wins).
fn normalize_list(list: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    let normalized = list
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty() && seen.insert(k.clone()))
        .collect();
    *list = normalized;
}
