//! The tool's own catalog strings.
//!
//! Only the two values written into catalogs are localized: the placeholder
//! stamped for missing translations and the key used for marker calls whose
//! argument is not a literal. Console output stays in English.

/// Catalog strings in one operating language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolMessages {
    /// Value meaning "not yet translated".
    pub placeholder: &'static str,
    /// Prefix of the diagnostic key for non-literal arguments.
    variable_input: &'static str,
}

const ENGLISH: ToolMessages = ToolMessages {
    placeholder: "MISSING TRANSLATION",
    variable_input: "FOUND VARIABLE INPUT: ",
};

const TABLE: &[(&str, ToolMessages)] = &[
    ("en", ENGLISH),
    (
        "es",
        ToolMessages {
            placeholder: "FALTA TRADUCCIÓN",
            variable_input: "ENTRADA VARIABLE ENCONTRADA: ",
        },
    ),
    (
        "fr",
        ToolMessages {
            placeholder: "TRADUCTION MANQUANTE",
            variable_input: "ENTRÉE VARIABLE TROUVÉE : ",
        },
    ),
    (
        "de",
        ToolMessages {
            placeholder: "FEHLENDE ÜBERSETZUNG",
            variable_input: "VARIABLE EINGABE GEFUNDEN: ",
        },
    ),
    (
        "it",
        ToolMessages {
            placeholder: "TRADUZIONE MANCANTE",
            variable_input: "INPUT VARIABILE TROVATO: ",
        },
    ),
    (
        "pt",
        ToolMessages {
            placeholder: "TRADUÇÃO AUSENTE",
            variable_input: "ENTRADA VARIÁVEL ENCONTRADA: ",
        },
    ),
];

impl ToolMessages {
    /// Messages for `language`, matched on its primary subtag (`es-MX` → `es`).
    /// Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let primary = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        TABLE
            .iter()
            .find(|(code, _)| *code == primary)
            .map(|(_, messages)| *messages)
            .unwrap_or(ENGLISH)
    }

    /// Catalog key reported for a marker call with a non-literal argument.
    pub fn variable_input(&self, raw: &str) -> String {
        format!("{}{}", self.variable_input, raw)
    }
}

impl Default for ToolMessages {
    fn default() -> Self {
        ENGLISH
    }
}
