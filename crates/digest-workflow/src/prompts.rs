//! Fixed instructions sent to the hosted assistant.

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const COLLECTION_NAME: &str = "Paper summary";

pub const ASSISTANT_INSTRUCTIONS: &str =
    "You are an expert researcher. Your goal is to summarise the document.";

/// Seed message of every summarization thread
pub const SUMMARY_PROMPT: &str = concat!(
    "You are an expert researcher in the relevant domain. Summarise the document by extracting the key information in a structured and concise manner. Ensure you cover the following: \n",
    "1. **Context and Motivation:** Briefly describe the research problem and why it is significant. \n",
    "2. **Objective:** What are the main goals or questions addressed by the paper? \n",
    "3. **Methods:** Summarise the key methods used to achieve the research objectives. \n",
    "4. **Findings:** What are the major results of the study? \n",
    "5. **Implications:** Discuss the broader impact of the findings or any applications.  \n",
    "6. **Limitations and Future Work:** Note any key limitations and suggestions for future research. \n",
    "Write the summary using neutral, formal academic language and keep it concise while retaining all essential details. Limit the overall length to 300–500 words. \n",
    "If tables, figures, or supplementary material are provided, incorporate relevant insights if they are critical to the summary.",
);

pub const SYSTEM_TEMPLATE: &str = "prompts/system.jinja";

pub const USER_TEMPLATE: &str = "prompts/user.jinja";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_covers_all_sections() {
        for section in [
            "Context and Motivation",
            "Objective",
            "Methods",
            "Findings",
            "Implications",
            "Limitations and Future Work",
        ] {
            assert!(SUMMARY_PROMPT.contains(section), "missing {}", section);
        }
        assert!(SUMMARY_PROMPT.contains("300–500 words"));
    }
}
