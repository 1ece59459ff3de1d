use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::LayoutConstraint;

/// Prohibitions appended to every layout's own forbidden list.
const ANTI_PATTERNS: &[&str] = &[
    "NO \"Powered by\" or \"Built with\" badges",
    "NO portfolio/showcase elements",
    "NO feature lists or marketing copy",
    "NO \"About\" or \"Features\" sections",
    "NO company taglines or slogans",
    "NO technology stack badges",
];

const SCREENSHOT_ANALOGY: &str = "Think of it like this: If someone took a screenshot while using Gmail, they wouldn't see \"Powered by Google\" or \"Features include: spam filtering, labels, etc.\" - they'd just see their inbox with emails. That's what this should be.";

/// Picks the layout constraint for one request. `None` only for an empty table.
pub fn select_layout<'a, R: Rng + ?Sized>(rng: &mut R, layouts: &'a [LayoutConstraint]) -> Option<&'a LayoutConstraint> {
    layouts.choose(rng)
}

/// Builds the final instruction sent upstream for a page generation.
///
/// Sections, in order: screenshot framing, the mandatory layout and its
/// forbidden list (when a layout was chosen), the fixed anti-patterns, the
/// caller's prompt, business-name requirements, numbered critical
/// requirements and the closing `<!DOCTYPE html>` directive.
pub fn generation_instruction(
    layout: Option<&LayoutConstraint>,
    prompt: &str,
    business_name: Option<&str>,
) -> String {
    let mut out = String::from("You are generating a SCREENSHOT of an actual application in use.\n\n");

    if let Some(layout) = layout {
        out.push_str(&format!("MANDATORY LAYOUT: {}\n{}\n\n", layout.name, layout.structure));
    }

    out.push_str("FORBIDDEN (WILL REJECT IF FOUND):\n");
    if let Some(layout) = layout {
        out.push_str(layout.forbidden);
        out.push('\n');
    }
    for rule in ANTI_PATTERNS {
        out.push_str("- ");
        out.push_str(rule);
        out.push('\n');
    }

    out.push_str("\nTHIS IS THE ACTUAL APPLICATION:\n");
    out.push_str(prompt.trim());
    out.push_str("\n\n");

    let mut requirements: Vec<String> = Vec::new();
    if let Some(name) = business_name {
        requirements.push(format!("Page title MUST be: \"{name}\""));
        requirements.push(format!("Business name \"{name}\" must appear prominently in the interface"));
    }
    requirements.extend(
        [
            "This is a REAL APPLICATION being used RIGHT NOW",
            "Show ONLY the working interface - nothing else",
            "Include real, specific data as if someone is actively using it",
            "No meta-commentary about the app - just BE the app",
        ]
        .map(String::from),
    );
    if let Some(layout) = layout {
        requirements.push(format!("Follow {} layout EXACTLY", layout.name));
    }
    requirements.push("Make it look like a natural screenshot of someone's screen".to_string());

    out.push_str("CRITICAL REQUIREMENTS:\n");
    for (i, req) in requirements.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, req));
    }

    out.push('\n');
    out.push_str(SCREENSHOT_ANALOGY);
    out.push_str(
        "\n\nGenerate ONLY the HTML for the actual application interface.\n\
         Start with <!DOCTYPE html> and end with </html>.",
    );
    out
}

/// Asks for a short description and the tech stack of a generated product,
/// answered as a single JSON object.
pub fn description_prompt(business_name: &str, business_type: &str) -> String {
    format!(
        r#"For a business called "{business_name}" that is described as: {business_type}

Generate:
1. A compelling 2-3 sentence description of what this business does and who it helps
2. A list of 5-7 technical skills/technologies needed to build this (e.g., React, Node.js, PostgreSQL, WebSockets, etc.)

Format your response as JSON like this:
{{
  "description": "Your description here",
  "techStack": ["Tech1", "Tech2", "Tech3", "Tech4", "Tech5"]
}}

Return ONLY the JSON, nothing else."#
    )
}

/// Asks for freelance AI job titles dated `date`, answered as a JSON array.
pub fn job_ideas_prompt(date: &str, count: usize) -> String {
    format!(
        r#"Generate {count} realistic freelance job postings for AI/ML/LLM work as they would appear today ({date}).
Make them varied and current, including:
- ChatGPT/Claude API integrations
- RAG system development
- AI agent building
- Computer vision projects
- Voice AI applications
- LLM fine-tuning
- Automation with AI
- Data annotation for ML

Each job should be a brief, realistic title as it would appear on a freelance marketplace.
Return ONLY a JSON array of job titles, like:
["Build ChatGPT plugin for Shopify inventory", "Create RAG system for legal documents", ...]

Make them specific and varied - include different industries and use cases."#
    )
}
