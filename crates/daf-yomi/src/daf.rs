//! The `Daf` value and tractate name tables.

use crate::error::DafYomiError;

/// Number of tractates in the Bavli cycle.
pub const BAVLI_MASECHTOS: usize = 40;

/// Number of tractates in the Yerushalmi cycle.
pub const YERUSHALMI_MASECHTOS: usize = 39;

const DEFAULT_BAVLI: [&str; BAVLI_MASECHTOS] = [
    "Berachos",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Shekalim",
    "Yoma",
    "Sukkah",
    "Beitzah",
    "Rosh Hashana",
    "Taanis",
    "Megillah",
    "Moed Katan",
    "Chagigah",
    "Yevamos",
    "Kesubos",
    "Nedarim",
    "Nazir",
    "Sotah",
    "Gitin",
    "Kiddushin",
    "Bava Kamma",
    "Bava Metzia",
    "Bava Basra",
    "Sanhedrin",
    "Makkos",
    "Shevuos",
    "Avodah Zarah",
    "Horiyos",
    "Zevachim",
    "Menachos",
    "Chullin",
    "Bechoros",
    "Arachin",
    "Temurah",
    "Kerisos",
    "Meilah",
    "Kinnim",
    "Tamid",
    "Midos",
    "Niddah",
];

const DEFAULT_YERUSHALMI: [&str; YERUSHALMI_MASECHTOS] = [
    "Berachos",
    "Peah",
    "Demai",
    "Kilayim",
    "Sheviis",
    "Terumos",
    "Maasros",
    "Maaser Sheni",
    "Chalah",
    "Orlah",
    "Bikurim",
    "Shabbos",
    "Eruvin",
    "Pesachim",
    "Beitzah",
    "Rosh Hashanah",
    "Yoma",
    "Sukah",
    "Taanis",
    "Shekalim",
    "Megilah",
    "Chagigah",
    "Moed Katan",
    "Yevamos",
    "Kesuvos",
    "Sotah",
    "Nedarim",
    "Nazir",
    "Gitin",
    "Kidushin",
    "Bava Kama",
    "Bava Metzia",
    "Bava Basra",
    "Sanhedrin",
    "Makos",
    "Shevuos",
    "Avodah Zarah",
    "Horayos",
    "Niddah",
];

/// A page of Talmud: a tractate index and a page number.
///
/// The tractate index is 0-based and refers to the Bavli or Yerushalmi
/// ordering depending on which cycle produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Daf {
    masechta_number: u8,
    daf: u16,
}

impl Daf {
    /// Creates a daf.
    pub fn new(masechta_number: u8, daf: u16) -> Self {
        Self {
            masechta_number,
            daf,
        }
    }

    /// Returns the 0-based tractate index.
    pub fn masechta_number(&self) -> u8 {
        self.masechta_number
    }

    /// Returns the page number.
    pub fn daf(&self) -> u16 {
        self.daf
    }

    /// Returns the Bavli tractate name from `names`.
    pub fn bavli_name<'a>(&self, names: &'a MasechtaNames) -> Option<&'a str> {
        names.bavli(self.masechta_number)
    }

    /// Returns the Yerushalmi tractate name from `names`.
    pub fn yerushalmi_name<'a>(&self, names: &'a MasechtaNames) -> Option<&'a str> {
        names.yerushalmi(self.masechta_number)
    }
}

/// Tractate names for rendering a [`Daf`].
///
/// An immutable value; the default holds the standard Ashkenazi
/// transliterations.
///
/// # Example
///
/// ```
/// use luach_daf_yomi::{Daf, MasechtaNames};
///
/// let names = MasechtaNames::default();
/// assert_eq!(Daf::new(23, 47).bavli_name(&names), Some("Sanhedrin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasechtaNames {
    bavli: Vec<String>,
    yerushalmi: Vec<String>,
}

impl MasechtaNames {
    /// Creates a name table from caller-supplied lists.
    ///
    /// # Errors
    ///
    /// Returns [`DafYomiError::NameTableLength`] unless `bavli` has 40
    /// entries and `yerushalmi` has 39.
    pub fn new(bavli: Vec<String>, yerushalmi: Vec<String>) -> Result<Self, DafYomiError> {
        if bavli.len() != BAVLI_MASECHTOS {
            return Err(DafYomiError::NameTableLength {
                edition: "Bavli",
                expected: BAVLI_MASECHTOS,
                found: bavli.len(),
            });
        }
        if yerushalmi.len() != YERUSHALMI_MASECHTOS {
            return Err(DafYomiError::NameTableLength {
                edition: "Yerushalmi",
                expected: YERUSHALMI_MASECHTOS,
                found: yerushalmi.len(),
            });
        }
        Ok(Self { bavli, yerushalmi })
    }

    /// Replaces the Bavli names, keeping the Yerushalmi ones.
    ///
    /// # Errors
    ///
    /// Returns [`DafYomiError::NameTableLength`] unless `bavli` has 40 entries.
    pub fn with_bavli(self, bavli: Vec<String>) -> Result<Self, DafYomiError> {
        Self::new(bavli, self.yerushalmi)
    }

    /// Replaces the Yerushalmi names, keeping the Bavli ones.
    ///
    /// # Errors
    ///
    /// Returns [`DafYomiError::NameTableLength`] unless `yerushalmi` has 39 entries.
    pub fn with_yerushalmi(self, yerushalmi: Vec<String>) -> Result<Self, DafYomiError> {
        Self::new(self.bavli, yerushalmi)
    }

    /// Returns the Bavli tractate name at `index`.
    pub fn bavli(&self, index: u8) -> Option<&str> {
        self.bavli.get(usize::from(index)).map(String::as_str)
    }

    /// Returns the Yerushalmi tractate name at `index`.
    pub fn yerushalmi(&self, index: u8) -> Option<&str> {
        self.yerushalmi.get(usize::from(index)).map(String::as_str)
    }
}

impl Default for MasechtaNames {
    fn default() -> Self {
        Self {
            bavli: DEFAULT_BAVLI.iter().map(|s| s.to_string()).collect(),
            yerushalmi: DEFAULT_YERUSHALMI.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables() {
        let names = MasechtaNames::default();
        assert_eq!(names.bavli(0), Some("Berachos"));
        assert_eq!(names.bavli(39), Some("Niddah"));
        assert_eq!(names.bavli(40), None);
        assert_eq!(names.yerushalmi(19), Some("Shekalim"));
        assert_eq!(names.yerushalmi(38), Some("Niddah"));
        assert_eq!(names.yerushalmi(39), None);
    }

    #[test]
    fn custom_tables_are_length_checked() {
        let err = MasechtaNames::default()
            .with_yerushalmi(vec!["Brachot".to_string()])
            .unwrap_err();
        assert_eq!(
            err,
            DafYomiError::NameTableLength {
                edition: "Yerushalmi",
                expected: 39,
                found: 1,
            }
        );
    }

    #[test]
    fn custom_bavli_names() {
        let bavli: Vec<String> = (0..40).map(|i| format!("Tractate {i}")).collect();
        let names = MasechtaNames::default().with_bavli(bavli).unwrap();
        let daf = Daf::new(5, 10);
        assert_eq!(daf.bavli_name(&names), Some("Tractate 5"));
        assert_eq!(daf.yerushalmi_name(&names), Some("Terumos"));
    }
}
