//! Writer prompt construction.
//!
//! The writer receives only the text-slide titles; the chart slide is
//! synthesized natively from the plan's statistics, so the prompt forbids
//! code fences entirely.

use crate::model::DeckPlan;

/// Stage-2 JSON schema reference included in the writer prompt.
const SCHEMA_REFERENCE: &str = r#"## Content JSON Schema

```json
{
  "style": "string",              // Copy the style you were given.
  "all_slides_content": ["string"] // One markdown body per title, in order.
}
```

Each markdown body must contain:
- the slide title as a `#` heading, copied exactly;
- exactly 5 bullet points, each on its own line starting with `- `;
- nothing else: no code fences, no charts, no prose outside the bullets.
"#;

/// Worked example included in the writer prompt.
const EXAMPLE: &str = r##"## Example

For the title "The Space Shuttle Era", one body looks like:

"# The Space Shuttle Era\n- Introduced reusable spacecraft.\n- First flight in 1981 with Columbia.\n- Carried astronauts, satellites, and lab modules.\n- Enabled construction of the ISS.\n- Retired in 2011 after 135 missions."
"##;

/// Build the full writer instruction for a validated plan.
pub fn build_writer_prompt(plan: &DeckPlan) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str("# Presentation Content Writer\n\n");
    prompt.push_str(&format!(
        "You are a content writer for a presentation in the {:?} style. \
         Write the body for each slide title listed below and return a \
         single JSON object.\n\n",
        plan.style
    ));

    prompt.push_str(SCHEMA_REFERENCE);
    prompt.push('\n');
    prompt.push_str(EXAMPLE);
    prompt.push('\n');

    prompt.push_str("## Slide Titles\n\n");
    for (i, title) in plan.slide_titles.iter().enumerate() {
        prompt.push_str(&format!("{}. {title}\n", i + 1));
    }

    prompt.push_str("\nOutput *only* the raw JSON object.\n");
    prompt
}
