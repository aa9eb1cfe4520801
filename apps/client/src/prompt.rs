//! Prompt construction for the career report.
//!
//! The persona instruction and the report skeleton are fixed; the five
//! profile fields are interpolated verbatim between them. `build_prompt` is
//! a total function: no validation, no escaping, no truncation.

use crate::profile::Profile;

/// Tells the model HOW to behave and WHAT the output must look like.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a Senior Executive Career Coach. Your goal is to provide high-end,
actionable, and visually structured career roadmaps.

STRICT FORMATTING RULES:
1. Use Horizontal Rules (---) between every major section.
2. Use Tables for career path comparisons and skill lists.
3. Use Task Lists [ ] for roadmap steps to make them look interactive.
4. Use Blockquotes (>) for professional insights or "Mentor's Tips."
5. Never output a solid wall of text; use double line breaks between paragraphs."#;

/// Names the required report sections in the order the model must emit them.
pub const REPORT_SKELETON: &str = r#"Please generate the report in the following order:

## 📊 Executive Summary
> [Summarize their potential in 2 sentences. Use professional, high-energy language.]

---

## 🚀 Strategic Career Pathways
| Path | Alignment | Market Demand | Typical Roles |
| :--- | :--- | :--- | :--- |
| **Path A** | Why it fits | High/Growth | [Titles] |
| **Path B** | Why it fits | Emerging | [Titles] |

---

## 🛠 Targeted Skill Gap Analysis
| Skill Area | Priority | Recommended Action |
| :--- | :--- | :--- |
| [Skill] | High | [Specific course/tool] |
| [Skill] | Medium | [Project focus] |

---

## 🗓 12-Month Execution Roadmap
### Stage 1: Foundation (Months 1-3)
- [ ] **Objective:** [Primary Goal]
- [ ] **Action:** [Task 1]
- [ ] **Action:** [Task 2]

### Stage 2: Acceleration (Months 4-6)
- [ ] **Objective:** [Deepening Tech]
- [ ] **Action:** [Task 1]

### Stage 3: Market Readiness (Months 7-12)
- [ ] **Objective:** [Job Search/Portfolio]
- [ ] **Action:** [Task 1]

---

## 🏗 High-Impact Portfolio Projects
1. **[Project Name]**: [Brief description emphasizing the professional problem it solves].
2. **[Project Name]**: [Brief description of the tech stack to use].

---

## 🔗 Recommended Ecosystem
- **Top Certs:** [List 1-2]
- **Tools to Master:** [List 2-3]
- **Learning Hubs:** [e.g., Coursera, GitHub]

---

## 💡 Mentor's Final Verdict
[Provide a final motivational closing and the single most important "Next Step" they should take TODAY.]"#;

/// Renders the full instruction string sent to the generative API.
///
/// Deterministic: the same profile always yields the same prompt. Each field
/// is inserted exactly once, as-is, even when empty.
pub fn build_prompt(profile: &Profile) -> String {
    format!(
        "{SYSTEM_INSTRUCTION}\n\n\
         USER PROFILE DATA:\n\
         - Background: {}\n\
         - Skills: {}\n\
         - Interests: {}\n\
         - Goals: {}\n\
         - Time Commitment: {}\n\n\
         {REPORT_SKELETON}",
        profile.background, profile.skills, profile.interests, profile.goals, profile.availability
    )
}
