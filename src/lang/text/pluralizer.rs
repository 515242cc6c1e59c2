/// Conversion between the singular and plural forms of words in one language.
///
/// Implementations work on single words. Neither direction has to be lossless: a pluralizer may
/// map several words onto the same form, and applying a conversion to a word that is already in
/// the target form is only guaranteed to be a no-op where the implementation says so.
pub trait Pluralizer {
    /// Returns the plural form of `word`.
    fn plural_form(&self, word: &str) -> String;

    /// Returns the singular form of `word`.
    fn singular_form(&self, word: &str) -> String;

    /// Returns true if `word` is recognised as a plural form.
    fn is_plural(&self, word: &str) -> bool {
        self.plural_form(&self.singular_form(word)) == word
    }

    /// Returns true if `word` is recognised as a singular form.
    fn is_singular(&self, word: &str) -> bool {
        self.singular_form(&self.plural_form(word)) == word
    }
}
