/// Instruction given to the language model for every enhancement request.
pub const ENHANCEMENT_SYSTEM_INSTRUCTION: &str = "You are a world-class expert in prompt engineering. \
Your task is to refine the provided prompt by enhancing its clarity, detail, and completeness to fully \
capture the user's intent. Identify and eliminate any ambiguities or missing context, and rewrite the \
prompt so that it guides the responder to deliver the best possible answer. MAKE SURE THAT YOU DO NOT \
RESPOND TO THE USER PROMPT, YOUR TASK IS ONLY TO ENHANCE THE PROMPT NOT TO RESPOND TO IT. Return only \
the enhanced prompt without any additional commentary or questions.";

/// Prepended to the user's text so the model treats it as material, not as a question.
pub const ENHANCEMENT_USER_PREFIX: &str = "This is the prompt that you need to enhance (respond only \
with the enhanced prompt without any additional commentary or questions or intro.): ";

pub struct EnhancePromptInput {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 65536,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextGenerationRequest {
    pub system_instruction: String,
    pub user_text: String,
    pub settings: GenerationSettings,
}

impl TextGenerationRequest {
    pub fn enhancement(prompt: &str) -> Self {
        Self {
            system_instruction: ENHANCEMENT_SYSTEM_INSTRUCTION.to_string(),
            user_text: format!("{ENHANCEMENT_USER_PREFIX}{prompt}"),
            settings: GenerationSettings::default(),
        }
    }
}
