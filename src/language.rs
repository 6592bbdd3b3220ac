// src/language.rs
//! Language identification with a hardcoded English fallback.
//!
//! `whatlang` reports ISO 639-3 codes; the report keeps the two-letter
//! 639-1 codes callers expect for the languages we commonly see, and falls
//! back to the raw 639-3 code for the rest. Detection failure is recovered
//! locally: the pipeline never aborts because a language could not be named.

use tracing::debug;
use whatlang::Lang;

/// Used whenever the detector cannot make a call.
pub const FALLBACK_LANG: &str = "en";

/// Best-effort language code for a span of text.
pub fn detect_language(text: &str) -> String {
    match whatlang::detect(text) {
        Some(info) => iso_639_1(info.lang())
            .map(str::to_string)
            .unwrap_or_else(|| info.lang().code().to_string()),
        None => {
            debug!("language detection failed, defaulting to {FALLBACK_LANG}");
            FALLBACK_LANG.to_string()
        }
    }
}

/// 639-3 → 639-1 for the languages this pipeline regularly encounters.
fn iso_639_1(lang: Lang) -> Option<&'static str> {
    let code = match lang {
        Lang::Eng => "en",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Mar => "mr",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        Lang::Urd => "ur",
        Lang::Pan => "pa",
        Lang::Guj => "gu",
        Lang::Kan => "kn",
        Lang::Mal => "ml",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ara => "ar",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_prose_detects_as_en() {
        let text = "The government announced a new policy on Monday that critics \
                    say will reshape the country's approach to public education.";
        assert_eq!(detect_language(text), "en");
    }

    #[test]
    fn mapped_languages_report_two_letter_codes() {
        let arabic = "أعلنت الحكومة اليوم عن سياسة جديدة بعد أسابيع من النقاش في البرلمان \
                      حول مستقبل التعليم في البلاد";
        assert_eq!(detect_language(arabic), "ar");

        let hindi = "सरकार ने आज संसद में हफ्तों की बहस के बाद शिक्षा के भविष्य पर \
                     एक नई नीति की घोषणा की";
        assert_eq!(detect_language(hindi), "hi");
    }

    #[test]
    fn undetectable_input_falls_back_to_en() {
        assert_eq!(detect_language(""), "en");
        assert_eq!(detect_language("1234 5678"), "en");
    }
}
