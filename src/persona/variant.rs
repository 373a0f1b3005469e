use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::text::{INSURANCE_SYSTEM_INSTRUCTION, MATH_SYSTEM_INSTRUCTION};
use crate::models::GenerationSettings;

/// The two deployed tutor variants. Identical in shape; they differ
/// only in the persona text and the page labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaVariant {
    /// Swiss primary-school mathematics tutor
    Math,
    /// Swiss health-insurance cost-sharing tutor
    Insurance,
}

impl Default for PersonaVariant {
    fn default() -> Self {
        Self::Math
    }
}

impl PersonaVariant {
    pub const ALL: [PersonaVariant; 2] = [Self::Math, Self::Insurance];

    /// Name used on the command line and in config files.
    pub fn cli_name(&self) -> &str {
        match self {
            Self::Math => "math",
            Self::Insurance => "insurance",
        }
    }

    /// Resolve the variant to its full persona configuration.
    pub fn persona(&self) -> Persona {
        match self {
            Self::Math => Persona {
                variant: *self,
                title: "Mathe-Tutor",
                subtitle: "Dieser Chatbot hilft dir, die Mathematikkompetenzen der Volksschule zu wiederholen und zu festigen.",
                input_prompt: "Lass uns zusammen Mathematik üben. Womit möchtest du anfangen?",
                system_instruction: MATH_SYSTEM_INSTRUCTION,
                settings: GenerationSettings::default(),
            },
            Self::Insurance => Persona {
                variant: *self,
                title: "Krankenversicherungbot",
                subtitle: "Dieser Chatbot hilft Ihnen, den Unterschied zwischen Franchise und Selbstbehalt zu lernen.",
                input_prompt: "Lass uns die Kostenbeteiligung der Krankenkasse zusammen lernen. Was willst du besser verstehen",
                system_instruction: INSURANCE_SYSTEM_INSTRUCTION,
                settings: GenerationSettings::default(),
            },
        }
    }
}

/// Fixed instruction text and generation parameters defining one
/// assistant variant. Built once at startup; shared read-only by
/// every session of that variant.
#[derive(Debug, Clone)]
pub struct Persona {
    pub variant: PersonaVariant,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_prompt: &'static str,
    pub system_instruction: &'static str,
    pub settings: GenerationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_share_generation_settings() {
        let math = PersonaVariant::Math.persona();
        let insurance = PersonaVariant::Insurance.persona();
        assert_eq!(math.settings, insurance.settings);
        assert_eq!(math.settings.temperature, 0.3);
        assert_eq!(math.settings.max_output_tokens, 8192);
    }

    #[test]
    fn test_variants_differ_only_in_text_and_labels() {
        let math = PersonaVariant::Math.persona();
        let insurance = PersonaVariant::Insurance.persona();
        assert_ne!(math.title, insurance.title);
        assert_ne!(math.system_instruction, insurance.system_instruction);
    }

    #[test]
    fn test_math_persona_covers_its_topic_areas() {
        let persona = PersonaVariant::Math.persona();
        assert!(persona.system_instruction.contains("Proportionalität"));
        assert!(persona.system_instruction.contains("Prozentrechnen"));
    }

    #[test]
    fn test_insurance_persona_covers_its_topic_areas() {
        let persona = PersonaVariant::Insurance.persona();
        assert!(persona.system_instruction.contains("Franchise"));
        assert!(persona.system_instruction.contains("Selbstbehalt"));
    }

    #[test]
    fn test_serde_round_trip_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_value(PersonaVariant::Insurance).unwrap(),
            "insurance"
        );
        let parsed: PersonaVariant = serde_json::from_str("\"math\"").unwrap();
        assert_eq!(parsed, PersonaVariant::Math);
    }
}
