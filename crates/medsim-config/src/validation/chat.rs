use crate::schema::MedsimConfig;

use super::helpers::validate_range;

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &MedsimConfig) {
    validate_range(errors, "chat.context_turns", config.chat.context_turns, 1, 50);
}
