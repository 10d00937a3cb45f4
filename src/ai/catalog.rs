use crate::ai::prompts;
use crate::core::model::Platform;

/// Immutable per-platform prompt entry: the system instruction sent with
/// every request and the framing applied to the editor's raw text.
pub struct PromptSpec {
    pub system_instruction: &'static str,
    build_user_message: fn(&str) -> String,
}

impl PromptSpec {
    pub fn user_message(&self, raw_input: &str) -> String {
        (self.build_user_message)(raw_input)
    }
}

/// Every platform has an entry by construction; the match is exhaustive.
pub fn prompt_spec(platform: Platform) -> PromptSpec {
    match platform {
        Platform::YouTube => PromptSpec {
            system_instruction: prompts::YOUTUBE_SYSTEM_INSTRUCTION,
            build_user_message: prompts::youtube_user_message,
        },
        Platform::X => PromptSpec {
            system_instruction: prompts::X_SYSTEM_INSTRUCTION,
            build_user_message: prompts::x_user_message,
        },
        Platform::Facebook => PromptSpec {
            system_instruction: prompts::FACEBOOK_SYSTEM_INSTRUCTION,
            build_user_message: prompts::facebook_user_message,
        },
    }
}

pub fn instruction_for(platform: Platform) -> &'static str {
    prompt_spec(platform).system_instruction
}

pub fn user_message_for(platform: Platform, raw_input: &str) -> String {
    prompt_spec(platform).user_message(raw_input)
}
