use std::any::Any;

use lazy_static::lazy_static;
use regex::Regex;

use super::{Pluralizer, Text};
use crate::lang::TypeMismatch;
use crate::util::panic::Throw;

/// Words whose singular and plural forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "aircraft", "bison", "deer", "equipment", "fish", "information", "money", "moose", "news",
    "people", "rice", "series", "sheep", "species",
];

/// Whole-word (singular, plural) pairs that no suffix rule derives.
const IRREGULAR: &[(&str, &str)] = &[
    ("alias", "aliases"),
    ("child", "children"),
    ("foot", "feet"),
    ("genus", "genera"),
    ("goose", "geese"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("louse", "lice"),
    ("man", "men"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("mythos", "mythoi"),
    ("numen", "numina"),
    ("ox", "oxen"),
    ("person", "people"),
    ("quiz", "quizzes"),
    ("testis", "testes"),
    ("tooth", "teeth"),
    ("wife", "wives"),
    ("woman", "women"),
];

/// Matches a word ending and the replacement for it. Order matters: the first match wins.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    /// Compiles a table of `(suffix pattern, replacement)` pairs. Patterns are anchored to the end
    /// of the word and matched case-insensitively.
    ///
    /// # Panics
    /// Panics if a pattern isn't a valid regex.
    fn table(rules: &[(&str, &'static str)]) -> Vec<Rule> {
        rules
            .iter()
            .map(|&(suffix, replacement)| Rule {
                pattern: Regex::new(&format!("(?i){suffix}$")).throw(),
                replacement,
            })
            .collect()
    }
}

lazy_static! {
    static ref PLURAL_RULES: Vec<Rule> = Rule::table(&[
        ("(matr|vert|ind)(ix|ex)", "${1}ices"),
        ("(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)us", "${1}i"),
        ("(buffal|tomat|potat|her|ech|vet)o", "${1}oes"),
        ("sis", "ses"),
        ("(ss|sh|ch|x|z)", "${1}es"),
        ("([^aeiouy]|qu)y", "${1}ies"),
        ("(kni|wi|li)fe", "${1}ves"),
        ("(ar|[aeo]l)f", "${1}ves"),
        (r"\b(hu|ger|ro|sha|cai|talis|otto)man", "${1}mans"),
        ("man", "men"),
        ("foot", "feet"),
        ("tooth", "teeth"),
        ("goose", "geese"),
        ("(menu|emu|gnu|guru|haiku|tofu|bayou|caribou)s", "${1}s"),
        ("(us|as)", "${1}es"),
        ("(medi|dat|curricul|bacteri|strat)um", "${1}a"),
        // Anything else ending in a bare s is taken to be plural already.
        ("(s)", "${1}"),
    ]);

    static ref SINGULAR_RULES: Vec<Rule> = Rule::table(&[
        ("(matr)ices", "${1}ix"),
        ("(vert|ind)ices", "${1}ex"),
        ("(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|vir)i", "${1}us"),
        ("(buffal|tomat|potat|her|ech|vet)oes", "${1}o"),
        ("(cri|analy|diagno|hypothe|oa|synop|parenthe|the)ses", "${1}sis"),
        ("(ss|sh|ch|x|z)es", "${1}"),
        ("([^aeiouy]|qu)ies", "${1}y"),
        ("(kni|wi|li)ves", "${1}fe"),
        ("(ar|[aeo]l)ves", "${1}f"),
        (r"\b(specimen|abdomen|omen|stamen|regimen|acumen)", "${1}"),
        ("men", "man"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        (r"\b(atlas|bonus|bus|campus|canvas|census|circus|gas|octopus|status|walrus)es", "${1}"),
        ("(medi|dat|curricul|bacteri|strat)a", "${1}um"),
        ("(menu|emu|gnu|guru|haiku|tofu|bayou|caribou)s", "${1}"),
        // Endings that look plural but belong to singular words.
        ("(ss|us|is)", "${1}"),
        ("s", ""),
    ]);
}

/// A rule based pluralizer for English nouns.
///
/// Each conversion runs through three stages and stops at the first that applies:
/// 1. Uncountable words (`sheep`, `news`, `people`, ...) are returned unchanged.
/// 2. Irregular words (`man`/`men`, `wife`/`wives`, ...) are looked up as whole words. A word that
///    is already in the requested form is returned unchanged.
/// 3. An ordered table of suffix rules, most specific first. Pluralizing falls back to appending
///    `s`; singularizing falls back to leaving the word alone.
///
/// All lookups ignore case. If the input starts with an uppercase letter, so does the output.
///
/// A regular plural ending in a bare `s` is recognised as plural and left alone, but other
/// regular plurals are not: `cacti` pluralizes to `cactis`. Only uncountable and irregular words
/// are guaranteed to survive a conversion into their own form.
///
/// Compounds of `man` take `men` (`fireman`/`firemen`), except for a short list of words with a
/// regular plural such as `human` and `German`. When singularizing, `es` is stripped whole only
/// from known stems such as `bus` and `status`. Any other `es` plural loses just its `s`, so
/// `cases` becomes `case`.
///
/// # Examples
/// ```
/// # use lang_extension::lang::text::{EnglishPluralizer, Pluralizer};
/// let pluralizer = EnglishPluralizer::new();
/// assert_eq!(pluralizer.plural_form("country"), "countries");
/// assert_eq!(pluralizer.plural_form("Wife"), "Wives");
/// assert_eq!(pluralizer.singular_form("alumni"), "alumnus");
/// assert_eq!(pluralizer.plural_form("sheep"), "sheep");
/// ```
#[derive(Debug, Default, Clone)]
pub struct EnglishPluralizer {
    uncountable: Vec<String>,
    irregular: Vec<(String, String)>,
}

impl EnglishPluralizer {
    /// Creates a pluralizer using only the built-in tables.
    pub const fn new() -> EnglishPluralizer {
        EnglishPluralizer {
            uncountable: Vec::new(),
            irregular: Vec::new(),
        }
    }

    /// Adds a word whose singular and plural forms are the same.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::lang::text::{EnglishPluralizer, Pluralizer};
    /// let pluralizer = EnglishPluralizer::new().with_uncountable("Salmon");
    /// assert_eq!(pluralizer.plural_form("salmon"), "salmon");
    /// ```
    pub fn with_uncountable(mut self, word: impl AsRef<str>) -> EnglishPluralizer {
        self.uncountable.push(word.as_ref().to_lowercase());
        self
    }

    /// Adds an irregular pair. Custom pairs are checked before the built-in ones.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::lang::text::{EnglishPluralizer, Pluralizer};
    /// let pluralizer = EnglishPluralizer::new().with_irregular("cherub", "cherubim");
    /// assert_eq!(pluralizer.plural_form("Cherub"), "Cherubim");
    /// assert_eq!(pluralizer.singular_form("cherubim"), "cherub");
    /// ```
    pub fn with_irregular(
        mut self,
        singular: impl AsRef<str>,
        plural: impl AsRef<str>,
    ) -> EnglishPluralizer {
        self.irregular.push((singular.as_ref().to_lowercase(), plural.as_ref().to_lowercase()));
        self
    }

    /// Like [`plural_form`](Pluralizer::plural_form), for a value of unknown type.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] unless `word` is a [`String`], a `&'static str` or a [`Text`].
    pub fn try_plural_form(&self, word: &dyn Any) -> Result<String, TypeMismatch> {
        text_of(word)
            .map(|word| self.plural_form(word))
            .ok_or(TypeMismatch { operation: "EnglishPluralizer::plural_form" })
    }

    /// Like [`singular_form`](Pluralizer::singular_form), for a value of unknown type.
    ///
    /// # Errors
    /// Returns [`TypeMismatch`] unless `word` is a [`String`], a `&'static str` or a [`Text`].
    pub fn try_singular_form(&self, word: &dyn Any) -> Result<String, TypeMismatch> {
        text_of(word)
            .map(|word| self.singular_form(word))
            .ok_or(TypeMismatch { operation: "EnglishPluralizer::singular_form" })
    }

    fn is_uncountable(&self, lower: &str) -> bool {
        self.uncountable.iter().any(|word| word == lower)
            || UNCOUNTABLE.iter().any(|word| *word == lower)
    }

    fn irregular(&self) -> impl Iterator<Item = (&str, &str)> {
        self.irregular
            .iter()
            .map(|(singular, plural)| (singular.as_str(), plural.as_str()))
            .chain(IRREGULAR.iter().map(|&(singular, plural)| (singular, plural)))
    }

    fn irregular_plural(&self, lower: &str) -> Option<&str> {
        self.irregular()
            .find(|(singular, _)| *singular == lower)
            .map(|(_, plural)| plural)
    }

    fn irregular_singular(&self, lower: &str) -> Option<&str> {
        self.irregular()
            .find(|(_, plural)| *plural == lower)
            .map(|(singular, _)| singular)
    }
}

impl Pluralizer for EnglishPluralizer {
    fn plural_form(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if self.is_uncountable(&lower) || self.irregular_singular(&lower).is_some() {
            return word.to_owned();
        }

        if let Some(plural) = self.irregular_plural(&lower) {
            return match_case(word, plural);
        }

        apply_rules(&PLURAL_RULES, word).unwrap_or_else(|| format!("{word}s"))
    }

    fn singular_form(&self, word: &str) -> String {
        let lower = word.to_lowercase();

        if self.is_uncountable(&lower) || self.irregular_plural(&lower).is_some() {
            return word.to_owned();
        }

        if let Some(singular) = self.irregular_singular(&lower) {
            return match_case(word, singular);
        }

        apply_rules(&SINGULAR_RULES, word).unwrap_or_else(|| word.to_owned())
    }

    fn is_plural(&self, word: &str) -> bool {
        let lower = word.to_lowercase();

        if self.is_uncountable(&lower) || self.irregular_singular(&lower).is_some() {
            true
        } else if self.irregular_plural(&lower).is_some() {
            false
        } else {
            self.plural_form(&self.singular_form(word)) == word
        }
    }

    fn is_singular(&self, word: &str) -> bool {
        let lower = word.to_lowercase();

        if self.is_uncountable(&lower) || self.irregular_plural(&lower).is_some() {
            true
        } else if self.irregular_singular(&lower).is_some() {
            false
        } else {
            self.singular_form(&self.plural_form(word)) == word
        }
    }
}

fn apply_rules(rules: &[Rule], word: &str) -> Option<String> {
    let rule = rules.iter().find(|rule| rule.pattern.is_match(word))?;
    tracing::trace!(word, rule = rule.pattern.as_str(), "matched inflection rule");
    Some(match_case(word, &rule.pattern.replace(word, rule.replacement)))
}

/// Capitalizes the first letter of `result` if `original` starts with an uppercase letter.
fn match_case(original: &str, result: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = result.chars();

    match chars.next() {
        Some(first) if capitalized => first.to_uppercase().chain(chars).collect(),
        _ => result.to_owned(),
    }
}

fn text_of(word: &dyn Any) -> Option<&str> {
    if let Some(word) = word.downcast_ref::<String>() {
        Some(word)
    } else if let Some(word) = word.downcast_ref::<&'static str>() {
        Some(word)
    } else {
        word.downcast_ref::<Text>().map(Text::as_str)
    }
}
