//! Instruction text sent to the analysis service.
//!
//! The requested reply layout uses exactly the conventions the line formatter
//! understands: `**Title:**` headings, `*` bullets and a closing
//! `**IMPORTANT DISCLAIMER:**` line.

use crate::{parsing::blocks::kinds::Disclaimer, request::Symptoms};

/// The disclaimer the service is asked to end every reply with.
pub const DISCLAIMER_TEXT: &str = "This information is for educational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition. Never disregard professional medical advice or delay in seeking it because of something you have read here.";

/// Builds the full instruction text for one set of symptoms.
pub fn build_prompt(symptoms: &Symptoms) -> String {
    format!(
        r#"**SYSTEM PROMPT**
You are a helpful AI assistant providing health information for educational purposes only.
You are NOT a medical professional. Your suggestions are not a substitute for professional medical advice, diagnosis, or treatment.

**TASK**
Based on the symptoms provided by the user, you must perform the following steps:
1.  Analyze the symptoms.
2.  Suggest a few possible, common conditions that might be associated with these symptoms. Do not provide an exhaustive list.
3.  Recommend clear, safe, and responsible next steps. Prioritize consulting a healthcare professional.
4.  **Crucially, you MUST include the full disclaimer provided below at the end of your response.**

**USER SYMPTOMS**
"{symptoms}"

**RESPONSE STRUCTURE**
Your response should be formatted clearly, for example:

**Possible Conditions:**
* [Condition 1]: [Brief, high-level educational description]
* [Condition 2]: [Brief, high-level educational description]

**Recommended Next Steps:**
* **Consult a Healthcare Professional:** It is essential to speak with a doctor or other qualified healthcare provider to get an accurate diagnosis.
* [Other safe, general advice, e.g., "Rest and stay hydrated."]
* [Advice on when to seek immediate medical attention, if applicable.]

---
**{marker}** {disclaimer}
"#,
        symptoms = symptoms.as_str(),
        marker = Disclaimer::MARKER,
        disclaimer = DISCLAIMER_TEXT,
    )
}

/// The example reply layout from the prompt, as the service would echo it.
///
/// Handy for previews and for checking that the formatter understands what the
/// prompt asks for.
pub fn sample_reply() -> String {
    format!(
        "**Possible Conditions:**\n\
         * **Common cold:** A viral infection of the nose and throat.\n\
         * **Seasonal allergies:** A reaction to pollen or dust.\n\
         \n\
         **Recommended Next Steps:**\n\
         * **Consult a Healthcare Professional:** It is essential to speak with a doctor.\n\
         * Rest and stay hydrated.\n\
         \n\
         ---\n\
         **{}** {}\n",
        Disclaimer::MARKER,
        DISCLAIMER_TEXT
    )
}
