// src/core/config/substitutions.rs

/// Built-in replacements applied to a raw title before ASCII folding.
const DEFAULT_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Inspectoratul pentru Situații de Urgență", "ISU"),
    ("Inspectoratul pentru Situatii de Urgenta", "ISU"),
    ("Inspectoratului pentru Situații de Urgență", "ISU"),
    ("Inspectoratului pentru Situatii de Urgenta", "ISU"),
    ("Inspectoratul General pentru Situatii de Urgenta", "IGSU"),
    ("Inspectoratul General pentru Situații de Urgență", "IGSU"),
    ("Inspectoratului General pentru Situații de Urgență", "IGSU"),
    ("Inspectoratului General pentru Situatii de Urgenta", "IGSU"),
    ("Departamentul pentru Situații de Urgență", "DSU"),
    ("Departamentul pentru Situatii de Urgenta", "DSU"),
    ("Departamentului pentru Situații de Urgență", "DSU"),
    ("Departamentului pentru Situatii de Urgenta", "DSU"),
    ("Ministerul Afacerilor Interne", "MAI"),
    ("Ministerului Afacerilor Interne", "MAI"),
    ("Centrul de Formare Iniţială şi Continuă", "CFIC"),
    ("Centrul de Formare Initiala si Continua", "CFIC"),
    ("Á", "A"),
    ("Ă", "A"),
    ("Â", "A"),
    ("Î", "I"),
    ("Ș", "S"),
    ("Ş", "S"),
    ("Ț", "T"),
    ("Ţ", "T"),
    ("á", "a"),
    ("ă", "a"),
    ("â", "a"),
    ("î", "i"),
    ("ș", "s"),
    ("ş", "s"),
    ("ț", "t"),
    ("ţ", "t"),
    ("S.M.U.R.D.", "SMURD"),
    ("I.G.S.U.", "IGSU"),
    ("I.S.U.", "ISU"),
    ("A.S.F.R.", "ASFR"),
    ("M.A.I.", "MAI"),
    ("C.B.R.N.", "CBRN"),
    ("D.S.U.", "DSU"),
];

/// An ordered table of literal substring replacements.
///
/// Entries are kept longest pattern first, ties in insertion order, so a
/// pattern that contains another one is always replaced before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    entries: Vec<(String, String)>,
}

impl Substitutions {
    /// An empty table.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a replacement, or overrides the replacement of an existing pattern.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let from = from.into();
        let to = to.into();

        if let Some(entry) = self.entries.iter_mut().find(|(pattern, _)| *pattern == from) {
            entry.1 = to;
            return;
        }

        self.entries.push((from, to));
        self.entries
            .sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));
    }

    /// Replaces every occurrence of every pattern, in table order.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_owned(), |acc, (from, to)| acc.replace(from.as_str(), to))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Substitutions {
    fn default() -> Self {
        DEFAULT_SUBSTITUTIONS
            .iter()
            .copied()
            .collect()
    }
}

impl<F: Into<String>, T: Into<String>> FromIterator<(F, T)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (from, to) in iter {
            table.insert(from, to);
        }
        table
    }
}
