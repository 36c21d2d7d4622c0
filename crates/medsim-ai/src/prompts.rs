//! Localized system prompts for the VR medical-simulation assistant.

use crate::language::Language;

pub const SYSTEM_PROMPT_EN: &str = "You are a helpful, calm, and knowledgeable medical assistant working inside a virtual reality (VR) environment. \
You are helping users practice emergency medical scenarios in a realistic and guided way. Always remind them this is a simulation. \
For real-life emergencies, they must contact emergency services or medical professionals.";

pub const SYSTEM_PROMPT_AR: &str = "أنت مساعد طبي هادئ وذو معرفة تعمل داخل بيئة واقع افتراضي. \
أنت تساعد المستخدمين في التدرب على سيناريوهات الطوارئ الطبية بطريقة واقعية وتوجيهية. \
ذكّرهم دائمًا أن هذه مجرد محاكاة. في الحالات الحقيقية، يجب عليهم الاتصال بالطوارئ أو الذهاب إلى طبيب مختص.";

/// System prompt for `lang`.
pub fn system_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Ar => SYSTEM_PROMPT_AR,
        Language::En => SYSTEM_PROMPT_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_language() {
        assert!(system_prompt(Language::En).contains("simulation"));
        assert_eq!(system_prompt(Language::Ar), SYSTEM_PROMPT_AR);
    }

    #[test]
    fn line_continuations_keep_sentence_spacing() {
        assert!(SYSTEM_PROMPT_EN.contains("environment. You are helping"));
        assert!(!SYSTEM_PROMPT_EN.contains('\n'));
        assert!(!SYSTEM_PROMPT_AR.contains('\n'));
    }
}
