//! User-facing text
//!
//! Every string the screen shows, per language.

use std::str::FromStr;

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &ENGLISH,
            Locale::Es => &SPANISH,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts a bare language code or a tag like `es-MX`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            _ => Err(format!("unsupported locale '{}' (expected en or es)", s)),
        }
    }
}

/// Strings for one language
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub title: &'static str,
    pub loading: &'static str,
    pub load_failed: &'static str,
    pub empty: &'static str,
    pub gender: &'static str,
    pub status: &'static str,
    pub species: &'static str,
    pub created: &'static str,
    pub image: &'static str,
    pub fallback_note: &'static str,
}

pub static ENGLISH: Messages = Messages {
    title: "Futurama Characters",
    loading: "Loading characters...",
    load_failed: "characters could not be loaded",
    empty: "No characters to show.",
    gender: "Gender",
    status: "Status",
    species: "Species",
    created: "Created",
    image: "Image",
    fallback_note: "placeholder",
};

pub static SPANISH: Messages = Messages {
    title: "Personajes de Futurama",
    loading: "Cargando personajes...",
    load_failed: "No se pudieron cargar los personajes.",
    empty: "No hay personajes para mostrar.",
    gender: "Género",
    status: "Estado",
    species: "Especie",
    created: "Creado",
    image: "Imagen",
    fallback_note: "imagen por defecto",
};
