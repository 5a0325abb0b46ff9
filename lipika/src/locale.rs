//! Interface strings in the three supported languages.
//!
//! Missing keys fall back to the English table, then to the key itself, so a
//! half-translated table never breaks output.

use crate::language::Language;

pub fn t<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language, key)
        .or_else(|| lookup(Language::English, key))
        .unwrap_or(key)
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let table = match language {
        Language::English => EN,
        Language::Sinhala => SI,
        Language::Nepali => NE,
    };
    table
        .iter()
        .find(|(entry_key, _)| *entry_key == key)
        .map(|(_, value)| *value)
}

const EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.translate", "Translate"),
    ("nav.learning", "Learning Modules"),
    ("translate.title", "Translation Tool"),
    ("translate.from", "From"),
    ("translate.to", "To"),
    ("translate.placeholder", "Enter text to translate..."),
    ("translate.button", "Translate"),
    ("learning.title", "Learning Modules"),
    ("learning.alphabets", "Alphabets & Scripts"),
    ("learning.vocabulary", "Vocabulary Builder"),
    ("learning.grammar", "Grammar Rules"),
    ("learning.stories", "Stories & Poems"),
    ("common.language", "Language"),
    ("common.english", "English"),
    ("common.sinhala", "Sinhala"),
    ("common.nepali", "Nepali"),
];

const SI: &[(&str, &str)] = &[
    ("nav.home", "මුල් පිටුව"),
    ("nav.translate", "පරිවර්තනය"),
    ("nav.learning", "ඉගෙනුම් මොඩියුල"),
    ("translate.title", "පරිවර්තන මෙවලම"),
    ("translate.from", "සිට"),
    ("translate.to", "දක්වා"),
    ("translate.placeholder", "පරිවර්තනය කිරීමට පෙළ ඇතුළත් කරන්න..."),
    ("translate.button", "පරිවර්තනය කරන්න"),
    ("learning.title", "ඉගෙනුම් මොඩියුල"),
    ("learning.alphabets", "අකුරු සහ ලිපි"),
    ("learning.vocabulary", "වචන සම්භාරය"),
    ("learning.grammar", "ව්‍යාකරණ නීති"),
    ("learning.stories", "කතා සහ කවි"),
    ("common.language", "භාෂාව"),
    ("common.english", "ඉංග්‍රීසි"),
    ("common.sinhala", "සිංහල"),
    ("common.nepali", "නේපාල"),
];

const NE: &[(&str, &str)] = &[
    ("nav.home", "गृहपृष्ठ"),
    ("nav.translate", "अनुवाद"),
    ("nav.learning", "सिकाइ मोड्युल"),
    ("translate.title", "अनुवाद उपकरण"),
    ("translate.from", "बाट"),
    ("translate.to", "मा"),
    ("translate.placeholder", "अनुवाद गर्न पाठ प्रविष्ट गर्नुहोस्..."),
    ("translate.button", "अनुवाद गर्नुहोस्"),
    ("learning.title", "सिकाइ मोड्युल"),
    ("learning.alphabets", "वर्णमाला र लिपि"),
    ("learning.vocabulary", "शब्दकोश निर्माता"),
    ("learning.grammar", "व्याकरण नियम"),
    ("learning.stories", "कथा र कविता"),
    ("common.language", "भाषा"),
    ("common.english", "अंग्रेजी"),
    ("common.sinhala", "सिंहली"),
    ("common.nepali", "नेपाली"),
];
