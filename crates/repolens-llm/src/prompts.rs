//! Prompt construction for the explain and summary relays.

use repolens_core::Role;

/// The prompt sent upstream for a code explanation: the role's instruction
/// prefix, a blank line, and the code itself.
pub fn explain_prompt(role: Role, code: &str) -> String {
    format!("{}\n\nCode:\n{}", role.instruction(), code)
}

/// The fixed prompt for summarizing a profile README.
pub fn summary_prompt(readme: &str) -> String {
    format!("Summarize the following GitHub README.md in 2-3 sentences:\n\n{readme}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_prompt_prefixes_instruction_before_code() {
        let prompt = explain_prompt(Role::Intern, "x");
        assert_eq!(
            prompt,
            "Explain the code like I am an intern with little experience.\n\nCode:\nx"
        );
    }

    #[test]
    fn explain_prompt_varies_by_role() {
        let pm = explain_prompt(Role::Pm, "let x = 1;");
        assert!(pm.starts_with(Role::Pm.instruction()));
        assert!(pm.ends_with("let x = 1;"));
    }

    #[test]
    fn summary_prompt_embeds_readme() {
        let prompt = summary_prompt("# Hi");
        assert_eq!(
            prompt,
            "Summarize the following GitHub README.md in 2-3 sentences:\n\n# Hi"
        );
    }
}
