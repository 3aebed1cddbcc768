//! Splices user content into a template and appends instruction blocks.

use super::Template;

const BLOCK_SEPARATOR: &str = "\n\n";

const MULTIPLE_OPTIONS_BLOCK: &str = "### Requirement: Multiple Options\n\
Please provide 4 distinct numbered examples (1-4) of the result, varying in tone, style, or approach to help me choose the best one.";

/// Target lengths offered to users. Any positive value is accepted.
pub const CHAR_LIMIT_PRESETS: &[u32] = &[
    50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300, 1400, 1500, 2000,
    4000, 6000, 8000, 9000, 10000, 11000, 12000, 13000, 14000, 15000, 16000, 17000, 18000, 19000,
    20000,
];

/// Formatting directives applied after substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    pub include_examples: bool,
    pub char_limit: Option<u32>,
}

/// Produce the final prompt text.
///
/// The first occurrence of the template's placeholder is replaced with
/// `user_content`. Without a placeholder the content is appended after a
/// blank line. The length block precedes the multiple-options block so
/// that the latter always ends the output.
pub fn resolve(template: &Template, user_content: &str, options: &ResolveOptions) -> String {
    let placeholder = template.placeholder();

    let mut output = if template.content.contains(placeholder) {
        template.content.replacen(placeholder, user_content, 1)
    } else {
        format!("{}{}{}", template.content, BLOCK_SEPARATOR, user_content)
    };

    if let Some(limit) = options.char_limit.filter(|limit| *limit > 0) {
        output.push_str(BLOCK_SEPARATOR);
        output.push_str(&length_constraint_block(limit));
    }

    if options.include_examples {
        output.push_str(BLOCK_SEPARATOR);
        output.push_str(MULTIPLE_OPTIONS_BLOCK);
    }

    output
}

fn length_constraint_block(limit: u32) -> String {
    format!(
        "### Requirement: Length Constraint\n\
Step 1: Carefully analyze & review to understand the provided text (see above).\n\
Step 2: Count how many characters that text has.\n\
Step 3: Provide me with a revised version of the text by MAKING THE TEXT EQUAL TO approximately {} characters, while preserving the original meaning of the provided text.\n\
Step 4: Provide the user with their desired output based on the aforementioned instructions.",
        limit
    )
}
